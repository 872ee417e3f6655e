//! Recognize integration tests
//!
//! Most tests drive the use case with the real audio loader and a stub
//! speech service. The live test needs application default credentials.
//! Run with: cargo test --test recognize_tests -- --ignored

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use tempfile::TempDir;

use speech_recognize::application::ports::{
    RecognizeEvent, Reporter, RpcStatus, ShutdownOutcome, SpeechService,
};
use speech_recognize::application::{
    RecognizeCallbacks, RecognizeInput, RecognizeOutcome, RecognizeUseCase,
};
use speech_recognize::domain::recognition::{
    Alternative, AudioEncoding, RecognitionResponse, RecognitionResult, RecognizeRequest,
    RecognizeResponse, LANGUAGE_CODE,
};
use speech_recognize::infrastructure::{
    CloudCredentials, CredentialSource, GrpcSpeechService, UriAudioLoader,
};

#[derive(Default)]
struct Recorded {
    requests: Vec<RecognizeRequest>,
    shutdowns: Vec<Duration>,
}

/// Speech service that records calls and answers with a fixed result
#[derive(Clone)]
struct StubService {
    recorded: Arc<Mutex<Recorded>>,
    reply: Result<RecognizeResponse, RpcStatus>,
}

impl StubService {
    fn replying(reply: Result<RecognizeResponse, RpcStatus>) -> Self {
        Self {
            recorded: Arc::default(),
            reply,
        }
    }
}

#[async_trait]
impl SpeechService for StubService {
    async fn recognize(&self, request: &RecognizeRequest) -> Result<RecognizeResponse, RpcStatus> {
        self.recorded.lock().unwrap().requests.push(request.clone());
        self.reply.clone()
    }

    async fn shutdown(&self, timeout: Duration) -> ShutdownOutcome {
        self.recorded.lock().unwrap().shutdowns.push(timeout);
        ShutdownOutcome::Graceful
    }
}

#[derive(Clone, Default)]
struct CollectingReporter {
    events: Arc<Mutex<Vec<RecognizeEvent>>>,
}

impl Reporter for CollectingReporter {
    fn report(&self, event: &RecognizeEvent) {
        self.events.lock().unwrap().push(event.clone());
    }
}

fn hello_response() -> RecognizeResponse {
    RecognizeResponse {
        responses: vec![RecognitionResponse {
            results: vec![RecognitionResult {
                alternatives: vec![Alternative {
                    transcript: "hello".to_string(),
                    confidence: 0.9,
                }],
                is_final: true,
                stability: 0.0,
            }],
            ..Default::default()
        }],
    }
}

fn input(uri: String) -> RecognizeInput {
    RecognizeInput {
        uri,
        sample_rate: 16000,
    }
}

#[tokio::test]
async fn readable_file_makes_one_call_then_shuts_down() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("audio.flac");
    std::fs::write(&path, b"fLaC\0\0\0\x22").unwrap();

    let service = StubService::replying(Ok(hello_response()));
    let reporter = CollectingReporter::default();
    let use_case = RecognizeUseCase::new(UriAudioLoader::new(), service.clone(), reporter.clone());

    let uri = format!("file://{}", path.display());
    let outcome = use_case
        .run(&input(uri), &RecognizeCallbacks::default())
        .await;

    assert!(outcome.is_done());
    assert_eq!(outcome.response().unwrap().transcripts(), vec!["hello"]);

    let recorded = service.recorded.lock().unwrap();
    assert_eq!(recorded.requests.len(), 1);
    let params = &recorded.requests[0].params;
    assert_eq!(params.sample_rate, 16000);
    assert_eq!(params.language_code, LANGUAGE_CODE);
    assert_eq!(LANGUAGE_CODE, "ja-JP");
    assert_eq!(params.encoding, AudioEncoding::Flac);
    assert_eq!(recorded.requests[0].audio.size_bytes(), 8);
    assert_eq!(recorded.shutdowns, vec![Duration::from_secs(5)]);

    let events = reporter.events.lock().unwrap();
    assert!(!events.iter().any(RecognizeEvent::is_warning));
}

#[tokio::test]
async fn missing_file_skips_call_and_still_shuts_down() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing.flac");

    let service = StubService::replying(Ok(hello_response()));
    let reporter = CollectingReporter::default();
    let use_case = RecognizeUseCase::new(UriAudioLoader::new(), service.clone(), reporter.clone());

    let outcome = use_case
        .run(
            &input(path.display().to_string()),
            &RecognizeCallbacks::default(),
        )
        .await;

    assert!(matches!(outcome, RecognizeOutcome::AudioUnavailable(_)));
    let recorded = service.recorded.lock().unwrap();
    assert!(recorded.requests.is_empty());
    assert_eq!(recorded.shutdowns.len(), 1);

    let events = reporter.events.lock().unwrap();
    assert!(matches!(
        events.first(),
        Some(RecognizeEvent::AudioUnavailable { .. })
    ));
}

#[tokio::test]
async fn rpc_failure_is_reported_not_raised() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("audio.raw");
    std::fs::write(&path, [0u8; 32]).unwrap();

    let status = RpcStatus::new("PermissionDenied", "caller lacks permission");
    let service = StubService::replying(Err(status.clone()));
    let reporter = CollectingReporter::default();
    let use_case = RecognizeUseCase::new(UriAudioLoader::new(), service.clone(), reporter.clone());

    let outcome = use_case
        .run(
            &input(path.display().to_string()),
            &RecognizeCallbacks::default(),
        )
        .await;

    assert!(matches!(outcome, RecognizeOutcome::RpcFailed(ref s) if *s == status));
    assert_eq!(service.recorded.lock().unwrap().requests.len(), 1);
    assert_eq!(service.recorded.lock().unwrap().shutdowns.len(), 1);

    let events = reporter.events.lock().unwrap();
    assert!(events
        .iter()
        .any(|e| matches!(e, RecognizeEvent::RpcFailed { status: s } if *s == status)));
}

#[tokio::test]
async fn unsupported_scheme_never_reaches_service() {
    let service = StubService::replying(Ok(hello_response()));
    let use_case = RecognizeUseCase::new(
        UriAudioLoader::new(),
        service.clone(),
        CollectingReporter::default(),
    );

    let outcome = use_case
        .run(
            &input("ftp://example.com/audio.flac".to_string()),
            &RecognizeCallbacks::default(),
        )
        .await;

    assert!(matches!(outcome, RecognizeOutcome::AudioUnavailable(_)));
    assert!(service.recorded.lock().unwrap().requests.is_empty());
}

#[tokio::test]
#[ignore = "requires application default credentials and network access"]
async fn recognize_against_live_endpoint() {
    let credentials = match CloudCredentials::new(&CredentialSource::ApplicationDefault) {
        Ok(credentials) => Arc::new(credentials),
        Err(e) => {
            eprintln!("Skipping test: {}", e);
            return;
        }
    };

    let service = GrpcSpeechService::connect("speech.googleapis.com", 443, credentials)
        .await
        .expect("channel builds with valid credentials");
    let use_case =
        RecognizeUseCase::new(UriAudioLoader::new(), service, CollectingReporter::default());

    // A storage reference the caller cannot read still exercises the full call path
    let outcome = use_case
        .run(
            &input("gs://nonexistent-bucket/audio.flac".to_string()),
            &RecognizeCallbacks::default(),
        )
        .await;

    if let RecognizeOutcome::RpcFailed(status) = &outcome {
        assert_ne!(
            status.code, "Unauthenticated",
            "Valid credentials should not be rejected: {}",
            status
        );
    }
}
