pub mod client;
pub mod records;

pub use client::PlatformClient;
pub use records::{AppConfigRecord, CredentialFields, CredentialRecord};

#[derive(Debug, thiserror::Error)]
pub enum PlatformError {
    #[error("platform api request failed: {0}")]
    ApiRequest(String),
    #[error("platform api returned no entry for `{0}`")]
    MissingEntry(String),
    #[error("missing required env var `{0}`")]
    MissingEnvVar(String),
}
