//! Domain error types

use thiserror::Error;

/// Errors from reading, validating or writing the settings file
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Cannot read {path}: {message}")]
    Read { path: String, message: String },

    #[error("{path} is not a valid settings file: {message}")]
    Parse { path: String, message: String },

    #[error("Cannot write {path}: {message}")]
    Write { path: String, message: String },

    #[error("Unknown key '{0}'. Valid keys: credentials, log_level")]
    UnknownKey(String),

    #[error("Invalid config value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    #[error("Config file already exists at: {0}")]
    AlreadyExists(String),
}

impl ConfigError {
    pub(crate) fn invalid(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            key: key.into(),
            message: message.into(),
        }
    }
}
