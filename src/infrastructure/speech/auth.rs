//! Credential acquisition for the speech API

use std::path::Path;

use async_trait::async_trait;
use google_cloud_auth::credentials::{
    service_account, user_account, Builder as CredentialsBuilder, CacheableResource,
    Credentials,
};
use http::Extensions;
use tracing::{debug, error};

use super::error::SpeechServiceError;

/// OAuth2 scope requested for every token
pub const CLOUD_PLATFORM_SCOPE: &str = "https://www.googleapis.com/auth/cloud-platform";

/// Where credentials come from
#[derive(Debug, Clone, PartialEq)]
pub enum CredentialSource {
    /// Application default discovery (`GOOGLE_APPLICATION_CREDENTIALS`,
    /// gcloud user credentials, or the metadata server)
    ApplicationDefault,
    /// Inline credential JSON
    JsonContent(String),
    /// Path to a credential JSON file
    FilePath(String),
}

impl CredentialSource {
    /// Interpret an optional configured value: unset means application
    /// default, a value starting with `{` is inline JSON, anything else a path.
    pub fn from_setting(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            None | Some("") => Self::ApplicationDefault,
            Some(v) if v.starts_with('{') => Self::JsonContent(v.to_string()),
            Some(v) => Self::FilePath(v.to_string()),
        }
    }

    fn load_json(&self) -> Result<Option<serde_json::Value>, SpeechServiceError> {
        match self {
            Self::ApplicationDefault => Ok(None),
            Self::JsonContent(json) => serde_json::from_str(json).map(Some).map_err(|e| {
                SpeechServiceError::Configuration(format!("Invalid credential JSON: {e}"))
            }),
            Self::FilePath(path) => {
                if !Path::new(path).exists() {
                    return Err(SpeechServiceError::Configuration(format!(
                        "Credential file not found: {path}"
                    )));
                }
                let content = std::fs::read_to_string(path).map_err(|e| {
                    SpeechServiceError::Configuration(format!(
                        "Failed to read credential file '{path}': {e}"
                    ))
                })?;
                serde_json::from_str(&content).map(Some).map_err(|e| {
                    SpeechServiceError::Configuration(format!(
                        "Failed to parse credential file '{path}': {e}"
                    ))
                })
            }
        }
    }
}

/// Produces bearer tokens for outgoing calls
#[async_trait]
pub trait TokenProvider: Send + Sync {
    async fn token(&self) -> Result<String, SpeechServiceError>;
}

/// Token provider backed by Google credentials scoped to the cloud platform
pub struct CloudCredentials {
    credentials: Credentials,
}

impl std::fmt::Debug for CloudCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CloudCredentials")
            .field("credentials", &"<credentials>")
            .finish()
    }
}

impl CloudCredentials {
    /// Build credentials from `source`, scoped to [`CLOUD_PLATFORM_SCOPE`]
    pub fn new(source: &CredentialSource) -> Result<Self, SpeechServiceError> {
        let scopes = [CLOUD_PLATFORM_SCOPE.to_string()];

        let credentials = match source.load_json()? {
            None => CredentialsBuilder::default()
                .with_scopes(scopes)
                .build()
                .map_err(|e| {
                    error!(error = %e, "Failed to initialize application default credentials");
                    SpeechServiceError::Credentials(format!(
                        "{e}. Set GOOGLE_APPLICATION_CREDENTIALS to a service account key file"
                    ))
                })?,
            Some(json) => {
                let kind = json
                    .get("type")
                    .and_then(|v| v.as_str())
                    .unwrap_or("unknown")
                    .to_string();

                let built = match kind.as_str() {
                    "service_account" => service_account::Builder::new(json)
                        .with_access_specifier(service_account::AccessSpecifier::from_scopes(
                            scopes,
                        ))
                        .build(),
                    "authorized_user" => user_account::Builder::new(json)
                        .with_scopes(scopes)
                        .build(),
                    other => {
                        return Err(SpeechServiceError::Configuration(format!(
                            "Unsupported credential type '{other}'. \
                             Expected 'service_account' or 'authorized_user'"
                        )));
                    }
                };

                built.map_err(|e| {
                    error!(error = %e, kind = %kind, "Failed to load credentials");
                    SpeechServiceError::Credentials(e.to_string())
                })?
            }
        };

        debug!("Credentials initialized");
        Ok(Self { credentials })
    }
}

#[async_trait]
impl TokenProvider for CloudCredentials {
    async fn token(&self) -> Result<String, SpeechServiceError> {
        let headers = self
            .credentials
            .headers(Extensions::new())
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to fetch access token");
                SpeechServiceError::Credentials(format!("Failed to fetch access token: {e}"))
            })?;

        let header_map = match headers {
            CacheableResource::New { data, .. } => data,
            CacheableResource::NotModified => {
                return Err(SpeechServiceError::Credentials(
                    "Credential cache returned no token".to_string(),
                ));
            }
        };

        let value = header_map
            .get(http::header::AUTHORIZATION)
            .ok_or_else(|| {
                SpeechServiceError::Credentials("No Authorization header produced".to_string())
            })?
            .to_str()
            .map_err(|e| {
                SpeechServiceError::Credentials(format!("Invalid Authorization header: {e}"))
            })?;

        value
            .strip_prefix("Bearer ")
            .map(str::to_string)
            .ok_or_else(|| {
                SpeechServiceError::Credentials("Authorization is not a bearer token".to_string())
            })
    }
}

#[cfg(test)]
pub(crate) struct StaticTokenProvider {
    pub result: Result<String, SpeechServiceError>,
}

#[cfg(test)]
#[async_trait]
impl TokenProvider for StaticTokenProvider {
    async fn token(&self) -> Result<String, SpeechServiceError> {
        self.result.clone()
    }
}
