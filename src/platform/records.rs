use serde::{Deserialize, Deserializer};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub(crate) struct EntryEnvelope<T> {
    #[serde(default)]
    pub(crate) entry: Vec<Entry<T>>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct Entry<T> {
    #[serde(default)]
    pub(crate) name: String,
    pub(crate) content: T,
}

impl<T> EntryEnvelope<T> {
    pub(crate) fn into_first_entry(self) -> Option<Entry<T>> {
        self.entry.into_iter().next()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct AppConfigContent {
    #[serde(default)]
    pub(crate) configured: bool,
    #[serde(flatten)]
    pub(crate) extra: BTreeMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfigRecord {
    pub name: String,
    pub configured: bool,
    pub extra: BTreeMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct CredentialContent {
    #[serde(default)]
    pub(crate) username: String,
    #[serde(default)]
    pub(crate) password: String,
    #[serde(default)]
    pub(crate) realm: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialRecord {
    pub name: String,
    pub username: String,
    pub password: String,
    pub realm: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialFields {
    pub name: String,
    pub username: String,
    pub password: String,
    pub realm: String,
}

impl CredentialFields {
    pub fn new(username: &str, password: &str, realm: &str) -> Self {
        Self {
            name: username.to_string(),
            username: username.to_string(),
            password: password.to_string(),
            realm: realm.to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct CurrentContextContent {
    #[serde(default)]
    pub(crate) capabilities: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct LicenseGroupContent {
    #[serde(default, deserialize_with = "bool_or_int")]
    pub(crate) is_active: bool,
}

fn bool_or_int<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Bool(bool),
        Int(i64),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Bool(value) => value,
        Raw::Int(value) => value != 0,
    })
}
