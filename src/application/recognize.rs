//! Non-streaming recognize use case

use std::time::Duration;

use crate::domain::recognition::{RecognitionParams, RecognizeRequest, RecognizeResponse};

use super::ports::{
    AudioLoadError, AudioLoader, RecognizeEvent, Reporter, RpcStatus, ShutdownOutcome,
    SpeechService,
};

/// How long shutdown waits for in-flight calls
pub const SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(5);

/// Input parameters for the recognize use case
#[derive(Debug, Clone)]
pub struct RecognizeInput {
    /// Audio source URI (or plain file path)
    pub uri: String,
    /// Sample rate of the audio in Hz
    pub sample_rate: i32,
}

/// Terminal state of a single recognize operation
#[derive(Debug, Clone)]
pub enum RecognizeOutcome {
    /// The call succeeded
    Done(RecognizeResponse),
    /// The audio could not be read; no call was made
    AudioUnavailable(AudioLoadError),
    /// The call was made and failed
    RpcFailed(RpcStatus),
}

impl RecognizeOutcome {
    pub fn is_done(&self) -> bool {
        matches!(self, Self::Done(_))
    }

    pub fn response(&self) -> Option<&RecognizeResponse> {
        match self {
            Self::Done(response) => Some(response),
            _ => None,
        }
    }
}

/// Callbacks for status updates around the remote call
#[derive(Default)]
#[allow(clippy::type_complexity)]
pub struct RecognizeCallbacks {
    /// Called right before the request is sent
    pub on_request_start: Option<Box<dyn Fn() + Send + Sync>>,
    /// Called when the call returns, successfully or not
    pub on_request_end: Option<Box<dyn Fn() + Send + Sync>>,
}

/// Loads audio, sends one recognize request and owns the service shutdown
pub struct RecognizeUseCase<L, S, R>
where
    L: AudioLoader,
    S: SpeechService,
    R: Reporter,
{
    loader: L,
    service: S,
    reporter: R,
    shutdown_timeout: Duration,
}

impl<L, S, R> RecognizeUseCase<L, S, R>
where
    L: AudioLoader,
    S: SpeechService,
    R: Reporter,
{
    /// Create a new use case instance
    pub fn new(loader: L, service: S, reporter: R) -> Self {
        Self {
            loader,
            service,
            reporter,
            shutdown_timeout: SHUTDOWN_TIMEOUT,
        }
    }

    /// Override the shutdown timeout
    pub fn with_shutdown_timeout(mut self, timeout: Duration) -> Self {
        self.shutdown_timeout = timeout;
        self
    }

    /// Load the audio and send one recognize request.
    ///
    /// Failures are reported as warnings and returned as outcomes; nothing
    /// is retried.
    pub async fn recognize(
        &self,
        input: &RecognizeInput,
        callbacks: &RecognizeCallbacks,
    ) -> RecognizeOutcome {
        let audio = match self.loader.load(&input.uri).await {
            Ok(audio) => audio,
            Err(error) => {
                self.reporter.report(&RecognizeEvent::AudioUnavailable {
                    uri: input.uri.clone(),
                    error: error.clone(),
                });
                return RecognizeOutcome::AudioUnavailable(error);
            }
        };

        self.reporter.report(&RecognizeEvent::Sending {
            uri: audio.source_uri().to_string(),
            bytes: audio.size_bytes(),
        });

        let params = RecognitionParams::new(input.sample_rate);
        let request = RecognizeRequest::new(params, audio);

        if let Some(ref cb) = callbacks.on_request_start {
            cb();
        }

        let result = self.service.recognize(&request).await;

        if let Some(ref cb) = callbacks.on_request_end {
            cb();
        }

        match result {
            Ok(response) => {
                self.reporter.report(&RecognizeEvent::Received {
                    response: response.clone(),
                });
                RecognizeOutcome::Done(response)
            }
            Err(status) => {
                self.reporter.report(&RecognizeEvent::RpcFailed {
                    status: status.clone(),
                });
                RecognizeOutcome::RpcFailed(status)
            }
        }
    }

    /// Shut the service channel down, waiting at most the shutdown timeout
    pub async fn shutdown(&self) -> ShutdownOutcome {
        let outcome = self.service.shutdown(self.shutdown_timeout).await;
        self.reporter
            .report(&RecognizeEvent::ChannelClosed { outcome });
        outcome
    }

    /// Recognize, then shut down. Shutdown runs on every path.
    pub async fn run(
        &self,
        input: &RecognizeInput,
        callbacks: &RecognizeCallbacks,
    ) -> RecognizeOutcome {
        let outcome = self.recognize(input, callbacks).await;
        self.shutdown().await;
        outcome
    }
}
