//! Audio request value object

use std::fmt;

/// Where the server gets the audio from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AudioSource {
    /// Audio bytes sent inline with the request
    Content(Vec<u8>),
    /// Cloud storage reference the server reads itself (`gs://bucket/object`)
    Uri(String),
}

/// Value object representing the audio payload of a recognize request.
/// Holds the payload and the URI it was resolved from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioRequest {
    source_uri: String,
    source: AudioSource,
}

impl AudioRequest {
    /// Audio loaded into memory from `source_uri`
    pub fn from_content(source_uri: impl Into<String>, content: Vec<u8>) -> Self {
        Self {
            source_uri: source_uri.into(),
            source: AudioSource::Content(content),
        }
    }

    /// Audio left in cloud storage; only the reference is sent
    pub fn from_storage_uri(uri: impl Into<String>) -> Self {
        let uri = uri.into();
        Self {
            source_uri: uri.clone(),
            source: AudioSource::Uri(uri),
        }
    }

    /// URI the audio was resolved from
    pub fn source_uri(&self) -> &str {
        &self.source_uri
    }

    pub fn source(&self) -> &AudioSource {
        &self.source
    }

    /// Inline bytes, if any
    pub fn content(&self) -> Option<&[u8]> {
        match &self.source {
            AudioSource::Content(data) => Some(data),
            AudioSource::Uri(_) => None,
        }
    }

    /// Number of bytes sent inline (0 for storage references)
    pub fn size_bytes(&self) -> usize {
        self.content().map_or(0, <[u8]>::len)
    }

    /// Get human-readable size
    pub fn human_readable_size(&self) -> String {
        let bytes = self.size_bytes();
        if bytes < 1024 {
            format!("{} B", bytes)
        } else if bytes < 1024 * 1024 {
            format!("{:.1} KB", bytes as f64 / 1024.0)
        } else {
            format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
        }
    }
}

impl fmt::Display for AudioRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.source {
            AudioSource::Content(_) => {
                write!(f, "{} ({})", self.source_uri, self.human_readable_size())
            }
            AudioSource::Uri(uri) => write!(f, "{} (by reference)", uri),
        }
    }
}
