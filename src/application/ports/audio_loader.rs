//! Audio loading port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::recognition::AudioRequest;

/// Audio loading errors
#[derive(Debug, Clone, Error)]
pub enum AudioLoadError {
    #[error("Invalid audio URI \"{uri}\": {message}")]
    InvalidUri { uri: String, message: String },

    #[error("Unsupported audio URI scheme \"{scheme}\" (expected file, http, https or gs)")]
    UnsupportedScheme { scheme: String },

    #[error("Failed to read {path}: {message}")]
    Io { path: String, message: String },

    #[error("Failed to fetch {url}: {message}")]
    Http { url: String, message: String },
}

/// Port for resolving an audio URI into a request payload
#[async_trait]
pub trait AudioLoader: Send + Sync {
    /// Resolve `uri` and read its full content.
    ///
    /// # Arguments
    /// * `uri` - A `file://`, `http(s)://` or `gs://` URI, or a plain path
    ///
    /// # Returns
    /// The audio payload or an error describing why it could not be read
    async fn load(&self, uri: &str) -> Result<AudioRequest, AudioLoadError>;
}
