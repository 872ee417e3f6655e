//! Reporter adapter emitting `tracing` events

use tracing::{info, warn};

use crate::application::ports::{RecognizeEvent, Reporter, ShutdownOutcome};

/// Forwards recognize events to the installed `tracing` subscriber
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl TracingReporter {
    pub fn new() -> Self {
        Self
    }
}

impl Reporter for TracingReporter {
    fn report(&self, event: &RecognizeEvent) {
        match event {
            RecognizeEvent::AudioUnavailable { uri, error } => {
                warn!(uri = %uri, error = %error, "Failed to read audio uri input: {}", uri);
            }
            RecognizeEvent::Sending { uri, bytes } => {
                info!(uri = %uri, bytes, "Sending {} bytes from audio uri input: {}", bytes, uri);
            }
            RecognizeEvent::RpcFailed { status } => {
                warn!(code = %status.code, "RPC failed: {}", status);
            }
            RecognizeEvent::Received { response } => {
                info!("Received response: {}", response.to_text_format());
            }
            RecognizeEvent::ChannelClosed { outcome } => match outcome {
                ShutdownOutcome::TimedOut => {
                    warn!("Channel shutdown timed out; released with calls in flight")
                }
                ShutdownOutcome::Graceful | ShutdownOutcome::AlreadyClosed => {
                    info!("Channel shut down")
                }
            },
        }
    }
}
