//! gRPC speech service adapter

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tonic::service::interceptor::InterceptedService;
use tonic::transport::Channel;
use tracing::{debug, info, warn};

use crate::application::ports::{RpcStatus, ShutdownOutcome, SpeechService};
use crate::domain::recognition::{RecognizeRequest, RecognizeResponse};

use super::auth::TokenProvider;
use super::channel::{build_channel, AuthInterceptor};
use super::client::SpeechClient;
use super::error::SpeechServiceError;
use super::proto;

type AuthenticatedClient = SpeechClient<InterceptedService<Channel, AuthInterceptor>>;

/// Speech service reached over an authenticated TLS channel.
///
/// Owns the channel until [`SpeechService::shutdown`] releases it. Calls
/// hold a read guard on `in_flight` so shutdown can wait for them.
pub struct GrpcSpeechService {
    target: String,
    client: Mutex<Option<AuthenticatedClient>>,
    auth: AuthInterceptor,
    token_provider: Arc<dyn TokenProvider>,
    in_flight: RwLock<()>,
    closed: AtomicBool,
}

impl GrpcSpeechService {
    /// Build the channel and fetch a first token.
    ///
    /// A credential that cannot produce a token fails here rather than on
    /// the first call.
    pub async fn connect(
        host: &str,
        port: u16,
        token_provider: Arc<dyn TokenProvider>,
    ) -> Result<Self, SpeechServiceError> {
        let channel = build_channel(host, port)?;
        let service = Self::new(format!("{host}:{port}"), channel, token_provider);
        if let Err(e) = service.auth.refresh(service.token_provider.as_ref()).await {
            service.closed.store(true, Ordering::SeqCst);
            return Err(e);
        }

        info!(target = %service.target, "Created speech client");
        Ok(service)
    }

    /// Wrap an existing channel without fetching a token
    pub fn new(
        target: impl Into<String>,
        channel: Channel,
        token_provider: Arc<dyn TokenProvider>,
    ) -> Self {
        let auth = AuthInterceptor::new();
        let client = SpeechClient::new(InterceptedService::new(channel, auth.clone()));

        Self {
            target: target.into(),
            client: Mutex::new(Some(client)),
            auth,
            token_provider,
            in_flight: RwLock::new(()),
            closed: AtomicBool::new(false),
        }
    }

    /// `host:port` this service talks to
    pub fn target(&self) -> &str {
        &self.target
    }

    fn closed_status() -> RpcStatus {
        RpcStatus::new("Unavailable", "Channel shutdown invoked")
    }

    fn current_client(&self) -> Option<AuthenticatedClient> {
        self.client.lock().ok().and_then(|client| client.clone())
    }

    fn release(&self) {
        if let Ok(mut client) = self.client.lock() {
            if client.take().is_some() {
                debug!(target = %self.target, "Channel released");
            }
        }
    }
}

#[async_trait]
impl SpeechService for GrpcSpeechService {
    async fn recognize(&self, request: &RecognizeRequest) -> Result<RecognizeResponse, RpcStatus> {
        if self.closed.load(Ordering::SeqCst) {
            return Err(Self::closed_status());
        }

        let _guard = self.in_flight.read().await;
        let mut client = self.current_client().ok_or_else(Self::closed_status)?;

        self.auth
            .refresh(self.token_provider.as_ref())
            .await
            .map_err(|e| RpcStatus::new("Unauthenticated", e.to_string()))?;

        let message = proto::RecognizeRequest::from(request);
        let response = client.non_streaming_recognize(message).await?;

        Ok(response.into_inner().into())
    }

    async fn shutdown(&self, timeout: Duration) -> ShutdownOutcome {
        if self.closed.swap(true, Ordering::SeqCst) {
            return ShutdownOutcome::AlreadyClosed;
        }

        let outcome = match tokio::time::timeout(timeout, self.in_flight.write()).await {
            Ok(_guard) => ShutdownOutcome::Graceful,
            Err(_) => {
                warn!(
                    target = %self.target,
                    timeout_ms = timeout.as_millis() as u64,
                    "In-flight calls still running at shutdown timeout"
                );
                ShutdownOutcome::TimedOut
            }
        };

        self.release();
        outcome
    }
}

impl Drop for GrpcSpeechService {
    fn drop(&mut self) {
        if !self.closed.load(Ordering::SeqCst) {
            warn!(target = %self.target, "Speech service dropped without shutdown");
            self.release();
        }
    }
}
