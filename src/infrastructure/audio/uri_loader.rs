//! URI-based audio loader adapter

use std::path::Path;

use async_trait::async_trait;
use reqwest::Url;
use tokio::fs;
use tracing::debug;

use crate::application::ports::{AudioLoadError, AudioLoader};
use crate::domain::recognition::AudioRequest;

/// Loads audio from `file://`, `http(s)://` and `gs://` URIs or plain paths
pub struct UriAudioLoader {
    client: reqwest::Client,
}

impl UriAudioLoader {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    /// Create with a preconfigured HTTP client
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    async fn read_file(&self, path: &Path, uri: &str) -> Result<AudioRequest, AudioLoadError> {
        let content = fs::read(path).await.map_err(|e| AudioLoadError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        debug!(path = %path.display(), bytes = content.len(), "Read audio file");
        Ok(AudioRequest::from_content(uri, content))
    }

    async fn fetch(&self, url: Url, uri: &str) -> Result<AudioRequest, AudioLoadError> {
        let http_error = |e: reqwest::Error| AudioLoadError::Http {
            url: uri.to_string(),
            message: e.to_string(),
        };

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(http_error)?
            .error_for_status()
            .map_err(http_error)?;

        let content = response.bytes().await.map_err(http_error)?;

        debug!(url = %uri, bytes = content.len(), "Fetched remote audio");
        Ok(AudioRequest::from_content(uri, content.to_vec()))
    }
}

impl Default for UriAudioLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AudioLoader for UriAudioLoader {
    async fn load(&self, uri: &str) -> Result<AudioRequest, AudioLoadError> {
        let uri = uri.trim();
        if uri.is_empty() {
            return Err(AudioLoadError::InvalidUri {
                uri: uri.to_string(),
                message: "empty URI".to_string(),
            });
        }

        // Anything without a scheme separator is a local path
        if !uri.contains("://") {
            return self.read_file(Path::new(uri), uri).await;
        }

        let url = Url::parse(uri).map_err(|e| AudioLoadError::InvalidUri {
            uri: uri.to_string(),
            message: e.to_string(),
        })?;

        match url.scheme() {
            "file" => {
                let path = url.to_file_path().map_err(|_| AudioLoadError::InvalidUri {
                    uri: uri.to_string(),
                    message: "not a local file path".to_string(),
                })?;
                self.read_file(&path, uri).await
            }
            "http" | "https" => self.fetch(url, uri).await,
            "gs" => Ok(AudioRequest::from_storage_uri(uri)),
            other => Err(AudioLoadError::UnsupportedScheme {
                scheme: other.to_string(),
            }),
        }
    }
}
