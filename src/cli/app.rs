//! Main app runner for recognize mode

use std::process::ExitCode;
use std::sync::Arc;

use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use crate::application::ports::ConfigStore;
use crate::application::{
    RecognizeCallbacks, RecognizeInput, RecognizeOutcome, RecognizeUseCase,
};
use crate::domain::config::AppConfig;
use crate::infrastructure::speech::{SpeechServiceError, TokenProvider};
use crate::infrastructure::{
    CloudCredentials, CredentialSource, GrpcSpeechService, TracingReporter, UriAudioLoader,
    XdgConfigStore,
};

use super::args::RecognizeOptions;
use super::presenter::Presenter;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 1;

/// Run one recognize request against the speech endpoint.
///
/// Only startup failures (credentials, endpoint) produce a non-zero exit;
/// unreadable audio and failed calls are logged and end with success.
pub async fn run_recognize(options: RecognizeOptions, config: &AppConfig) -> ExitCode {
    let presenter = Presenter::new();

    let service = match connect(&options, config).await {
        Ok(service) => service,
        Err(e) => {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let use_case = RecognizeUseCase::new(UriAudioLoader::new(), service, TracingReporter::new());

    let input = RecognizeInput {
        uri: options.uri,
        sample_rate: options.sampling,
    };

    let spinner = presenter.spinner();
    let start = spinner.clone();
    let end = spinner.clone();
    let callbacks = RecognizeCallbacks {
        on_request_start: Some(Box::new(move || {
            Presenter::start_spinner(&start, "Recognizing...");
        })),
        on_request_end: Some(Box::new(move || {
            end.finish_and_clear();
        })),
    };

    let outcome = use_case.run(&input, &callbacks).await;
    spinner.finish_and_clear();

    match outcome {
        RecognizeOutcome::Done(response) => {
            for error in response.errors() {
                presenter.warn(&format!("Response error {}: {}", error.code, error.message));
            }
            for transcript in response.transcripts() {
                presenter.output(transcript);
            }
        }
        RecognizeOutcome::AudioUnavailable(e) => debug!(error = %e, "No request sent"),
        RecognizeOutcome::RpcFailed(status) => debug!(status = %status, "Request failed"),
    }

    ExitCode::from(EXIT_SUCCESS)
}

async fn connect(
    options: &RecognizeOptions,
    config: &AppConfig,
) -> Result<GrpcSpeechService, SpeechServiceError> {
    let source = CredentialSource::from_setting(config.credentials());
    let credentials: Arc<dyn TokenProvider> = Arc::new(CloudCredentials::new(&source)?);
    GrpcSpeechService::connect(&options.host, options.port, credentials).await
}

/// Load the settings file over the defaults.
///
/// A missing file means defaults; a broken one is reported and ignored.
pub async fn load_config<S: ConfigStore>(store: &S) -> AppConfig {
    let file_config = match store.read().await {
        Ok(config) => config.unwrap_or_default(),
        Err(e) => {
            Presenter::new().warn(&format!("Ignoring config file: {}", e));
            AppConfig::empty()
        }
    };

    AppConfig::defaults().merge(file_config)
}

/// Load settings from the default XDG location
pub async fn load_merged_config() -> AppConfig {
    load_config(&XdgConfigStore::new()).await
}

/// Install the process-wide subscriber. `RUST_LOG` wins over the config level.
pub fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level_or_default()));

    if let Err(e) = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
    {
        warn!(error = %e, "Tracing subscriber already installed");
    }
}
