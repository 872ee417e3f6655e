//! Application configuration value object

use serde::{Deserialize, Serialize};

use crate::domain::error::ConfigError;

use super::key::ConfigKey;

/// Accepted `log_level` values
pub const LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

const DEFAULT_LOG_LEVEL: &str = "info";

/// Settings read from the config file.
/// All fields are optional to support partial files and merging.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Credential JSON file path or inline JSON; unset means application default
    pub credentials: Option<String>,
    /// Default log filter when `RUST_LOG` is unset
    pub log_level: Option<String>,
}

impl AppConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            credentials: None,
            log_level: Some(DEFAULT_LOG_LEVEL.to_string()),
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            credentials: other.credentials.or(self.credentials),
            log_level: other.log_level.or(self.log_level),
        }
    }

    /// Get log level, or "info" if not set
    pub fn log_level_or_default(&self) -> &str {
        self.log_level.as_deref().unwrap_or(DEFAULT_LOG_LEVEL)
    }

    /// Get configured credentials
    pub fn credentials(&self) -> Option<&str> {
        self.credentials.as_deref()
    }

    /// Whether the credentials setting holds the JSON itself rather than a path
    pub fn has_inline_credentials(&self) -> bool {
        self.credentials()
            .is_some_and(|c| c.trim_start().starts_with('{'))
    }

    pub fn get(&self, key: ConfigKey) -> Option<&str> {
        match key {
            ConfigKey::Credentials => self.credentials(),
            ConfigKey::LogLevel => self.log_level.as_deref(),
        }
    }

    /// Validate and store `value` under `key`. On error `self` is unchanged.
    pub fn set(&mut self, key: ConfigKey, value: &str) -> Result<(), ConfigError> {
        let value = value.trim();
        let mut next = self.clone();
        match key {
            ConfigKey::Credentials => next.credentials = Some(value.to_string()),
            ConfigKey::LogLevel => next.log_level = Some(value.to_lowercase()),
        }
        next.validate()?;
        *self = next;
        Ok(())
    }

    /// Check every set value.
    ///
    /// Inline credentials must be a JSON object; whether a key file path
    /// exists is left to the store.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(level) = &self.log_level {
            if !LOG_LEVELS.contains(&level.as_str()) {
                return Err(ConfigError::invalid(
                    ConfigKey::LogLevel.as_str(),
                    format!(
                        "Invalid value '{}'. Valid options: {}",
                        level,
                        LOG_LEVELS.join(", ")
                    ),
                ));
            }
        }

        if let Some(credentials) = &self.credentials {
            let key = ConfigKey::Credentials.as_str();
            if credentials.trim().is_empty() {
                return Err(ConfigError::invalid(
                    key,
                    "Value must be a key file path or credential JSON",
                ));
            }
            if self.has_inline_credentials() {
                let parsed: serde_json::Value = serde_json::from_str(credentials)
                    .map_err(|e| ConfigError::invalid(key, format!("Invalid credential JSON: {e}")))?;
                if parsed.get("type").and_then(|t| t.as_str()).is_none() {
                    return Err(ConfigError::invalid(
                        key,
                        "Credential JSON has no \"type\" field",
                    ));
                }
            }
        }

        Ok(())
    }
}
