use super::records::{
    AppConfigContent, AppConfigRecord, CredentialContent, CredentialFields, CredentialRecord,
    CurrentContextContent, EntryEnvelope, LicenseGroupContent,
};
use super::PlatformError;
use serde::Deserialize;

const DEFAULT_API_BASE: &str = "https://127.0.0.1:8089";
const API_BASE_ENV: &str = "SETUPBASE_API_BASE";
const SESSION_TOKEN_ENV: &str = "SETUPBASE_SESSION_TOKEN";
const CREDENTIAL_OWNER: &str = "nobody";

#[derive(Debug, Clone)]
pub struct PlatformClient {
    api_base: String,
    session_token: String,
}

fn env_value(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

impl PlatformClient {
    pub fn new(session_token: String) -> Self {
        let api_base = env_value(API_BASE_ENV).unwrap_or_else(|| DEFAULT_API_BASE.to_string());
        Self::with_api_base(api_base, session_token)
    }

    pub fn from_env() -> Result<Self, PlatformError> {
        let session_token = env_value(SESSION_TOKEN_ENV)
            .ok_or_else(|| PlatformError::MissingEnvVar(SESSION_TOKEN_ENV.to_string()))?;
        Ok(Self::new(session_token))
    }

    pub fn with_api_base(api_base: String, session_token: String) -> Self {
        Self {
            api_base: api_base.trim_end_matches('/').to_string(),
            session_token,
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}?output_mode=json", self.api_base, path)
    }

    fn get_json<T: for<'de> Deserialize<'de>>(&self, path: &str) -> Result<T, PlatformError> {
        let response = ureq::get(&self.endpoint(path))
            .set("Authorization", &format!("Bearer {}", self.session_token))
            .call()
            .map_err(|e| PlatformError::ApiRequest(e.to_string()))?;

        response
            .into_json::<T>()
            .map_err(|e| PlatformError::ApiRequest(e.to_string()))
    }

    fn post_form(&self, path: &str, form: &[(&str, &str)]) -> Result<(), PlatformError> {
        ureq::post(&self.endpoint(path))
            .set("Authorization", &format!("Bearer {}", self.session_token))
            .send_form(form)
            .map_err(|e| PlatformError::ApiRequest(e.to_string()))?;
        Ok(())
    }

    pub fn get_app_config(&self, app_name: &str) -> Result<AppConfigRecord, PlatformError> {
        let path = app_config_path(app_name);
        let envelope: EntryEnvelope<AppConfigContent> = self.get_json(&path)?;
        let entry = envelope
            .into_first_entry()
            .ok_or(PlatformError::MissingEntry(path))?;
        Ok(AppConfigRecord {
            name: entry.name,
            configured: entry.content.configured,
            extra: entry.content.extra,
        })
    }

    pub fn set_app_configured(&self, app_name: &str) -> Result<(), PlatformError> {
        self.post_form(&app_config_path(app_name), &[("configured", "true")])
    }

    pub fn get_credential(&self, stanza: &str) -> Result<CredentialRecord, PlatformError> {
        let path = credential_path(stanza);
        let envelope: EntryEnvelope<CredentialContent> = self.get_json(&path)?;
        let entry = envelope
            .into_first_entry()
            .ok_or(PlatformError::MissingEntry(path))?;
        Ok(CredentialRecord {
            name: entry.name,
            username: entry.content.username,
            password: entry.content.password,
            realm: entry.content.realm,
        })
    }

    pub fn create_credential(
        &self,
        app_name: &str,
        fields: &CredentialFields,
    ) -> Result<(), PlatformError> {
        let path = format!(
            "servicesNS/{}/{}/storage/passwords",
            CREDENTIAL_OWNER,
            urlencoding::encode(app_name)
        );
        self.post_form(
            &path,
            &[
                ("name", fields.name.as_str()),
                ("password", fields.password.as_str()),
                ("realm", fields.realm.as_str()),
            ],
        )
    }

    pub fn update_credential(
        &self,
        stanza: &str,
        fields: &CredentialFields,
    ) -> Result<(), PlatformError> {
        self.post_form(
            &credential_path(stanza),
            &[
                ("name", fields.name.as_str()),
                ("username", fields.username.as_str()),
                ("password", fields.password.as_str()),
                ("realm", fields.realm.as_str()),
            ],
        )
    }

    pub fn current_capabilities(&self) -> Result<Vec<String>, PlatformError> {
        let path = "services/authentication/current-context";
        let envelope: EntryEnvelope<CurrentContextContent> = self.get_json(path)?;
        let entry = envelope
            .into_first_entry()
            .ok_or_else(|| PlatformError::MissingEntry(path.to_string()))?;
        Ok(entry.content.capabilities)
    }

    pub fn license_group_active(&self, group: &str) -> Result<bool, PlatformError> {
        let path = format!("services/licenser/groups/{}", urlencoding::encode(group));
        let envelope: EntryEnvelope<LicenseGroupContent> = self.get_json(&path)?;
        let entry = envelope
            .into_first_entry()
            .ok_or(PlatformError::MissingEntry(path))?;
        Ok(entry.content.is_active)
    }
}

fn app_config_path(app_name: &str) -> String {
    format!(
        "servicesNS/nobody/system/apps/local/{}",
        urlencoding::encode(app_name)
    )
}

fn credential_path(stanza: &str) -> String {
    format!("services/storage/passwords/{}", urlencoding::encode(stanza))
}
