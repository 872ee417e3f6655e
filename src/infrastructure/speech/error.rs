//! Startup errors of the gRPC speech adapter

use thiserror::Error;

/// Errors raised while building the credential or the channel.
/// These are fatal: the process cannot recognize anything without them.
#[derive(Debug, Clone, Error)]
pub enum SpeechServiceError {
    #[error("Failed to obtain credentials: {0}")]
    Credentials(String),

    #[error("Invalid credential configuration: {0}")]
    Configuration(String),

    #[error("Invalid endpoint '{endpoint}': {message}")]
    InvalidEndpoint { endpoint: String, message: String },

    #[error("Failed to configure TLS: {0}")]
    Tls(String),
}
