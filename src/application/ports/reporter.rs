//! Reporting port interface
//!
//! The use case reports what happens through this port instead of writing
//! to a process-wide logger, so callers decide where events go.

use crate::domain::recognition::RecognizeResponse;

use super::audio_loader::AudioLoadError;
use super::speech::{RpcStatus, ShutdownOutcome};

/// Events emitted while running a recognize operation
#[derive(Debug, Clone)]
pub enum RecognizeEvent {
    /// The audio source could not be read; no call will be made
    AudioUnavailable { uri: String, error: AudioLoadError },
    /// Audio loaded; the call is about to be sent
    Sending { uri: String, bytes: usize },
    /// The remote call failed
    RpcFailed { status: RpcStatus },
    /// The remote call succeeded
    Received { response: RecognizeResponse },
    /// The channel was shut down
    ChannelClosed { outcome: ShutdownOutcome },
}

impl RecognizeEvent {
    /// Whether the event describes a failure
    pub fn is_warning(&self) -> bool {
        match self {
            Self::AudioUnavailable { .. } | Self::RpcFailed { .. } => true,
            Self::ChannelClosed { outcome } => *outcome == ShutdownOutcome::TimedOut,
            Self::Sending { .. } | Self::Received { .. } => false,
        }
    }
}

/// Port for reporting recognize events
pub trait Reporter: Send + Sync {
    fn report(&self, event: &RecognizeEvent);
}

/// Blanket implementation for boxed reporter types
impl Reporter for Box<dyn Reporter> {
    fn report(&self, event: &RecognizeEvent) {
        self.as_ref().report(event)
    }
}
