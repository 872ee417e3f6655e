//! Speech service port interface

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;

use crate::domain::recognition::{RecognizeRequest, RecognizeResponse};

/// Status returned by a failed remote call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RpcStatus {
    /// Canonical status code name (e.g. `Unavailable`)
    pub code: String,
    pub message: String,
}

impl RpcStatus {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for RpcStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.message.is_empty() {
            write!(f, "Status{{code={}}}", self.code)
        } else {
            write!(f, "Status{{code={}, description={}}}", self.code, self.message)
        }
    }
}

impl std::error::Error for RpcStatus {}

/// How a shutdown finished
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownOutcome {
    /// All in-flight calls finished before the channel was released
    Graceful,
    /// The timeout elapsed and the channel was released anyway
    TimedOut,
    /// The channel had already been released
    AlreadyClosed,
}

/// Port for the remote recognition service
#[async_trait]
pub trait SpeechService: Send + Sync {
    /// Send one non-streaming recognize request and wait for the response.
    async fn recognize(&self, request: &RecognizeRequest) -> Result<RecognizeResponse, RpcStatus>;

    /// Stop accepting calls, wait up to `timeout` for in-flight calls,
    /// then release the channel.
    async fn shutdown(&self, timeout: Duration) -> ShutdownOutcome;
}
