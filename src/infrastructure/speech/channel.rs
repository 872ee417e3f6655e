//! TLS channel construction and bearer-token interceptor

use std::sync::{Arc, RwLock};

use rustls::crypto::CryptoProvider;
use tonic::metadata::{Ascii, MetadataValue};
use tonic::service::Interceptor;
use tonic::transport::{Channel, ClientTlsConfig, Endpoint};
use tonic::{Request, Status};
use tracing::{debug, error};

use super::auth::TokenProvider;
use super::error::SpeechServiceError;

/// Install `ring` as the process-wide rustls provider unless one is set.
///
/// The dependency graph enables more than one rustls backend, so TLS
/// configuration panics when no provider has been chosen explicitly.
pub fn install_crypto_provider() {
    if CryptoProvider::get_default().is_some() {
        return;
    }
    if rustls::crypto::ring::default_provider()
        .install_default()
        .is_err()
    {
        debug!("Crypto provider installed concurrently");
    }
}

/// Build a lazily-connecting TLS channel to `host:port`.
///
/// No connection is attempted here; transport failures surface from the
/// first call.
pub fn build_channel(host: &str, port: u16) -> Result<Channel, SpeechServiceError> {
    install_crypto_provider();

    let endpoint = format!("https://{host}:{port}");

    let channel = Endpoint::from_shared(endpoint.clone())
        .map_err(|e| {
            error!(error = %e, endpoint = %endpoint, "Invalid endpoint URL");
            SpeechServiceError::InvalidEndpoint {
                endpoint: endpoint.clone(),
                message: e.to_string(),
            }
        })?
        .tls_config(
            ClientTlsConfig::new()
                .domain_name(host)
                .with_native_roots(),
        )
        .map_err(|e| {
            error!(error = %e, "Failed to configure TLS");
            SpeechServiceError::Tls(e.to_string())
        })?
        .connect_lazy();

    debug!(endpoint = %endpoint, "Channel configured");
    Ok(channel)
}

/// Injects `authorization: Bearer <token>` into every outgoing call.
///
/// Interceptors run synchronously, so the header is fetched ahead of each
/// call with [`AuthInterceptor::refresh`] and shared with clones of the
/// interceptor installed on the channel.
#[derive(Debug, Clone, Default)]
pub struct AuthInterceptor {
    header: Arc<RwLock<Option<MetadataValue<Ascii>>>>,
}

impl AuthInterceptor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch a token and store it for subsequent calls
    pub async fn refresh(&self, provider: &dyn TokenProvider) -> Result<(), SpeechServiceError> {
        let token = provider.token().await?;
        self.set_token(&token)
    }

    /// Store `token` as the bearer credential
    pub fn set_token(&self, token: &str) -> Result<(), SpeechServiceError> {
        let value: MetadataValue<Ascii> = format!("Bearer {token}").parse().map_err(|_| {
            SpeechServiceError::Credentials("Token is not a valid header value".to_string())
        })?;

        let mut slot = self
            .header
            .write()
            .map_err(|_| SpeechServiceError::Credentials("Token slot poisoned".to_string()))?;
        *slot = Some(value);
        Ok(())
    }
}

impl Interceptor for AuthInterceptor {
    fn call(&mut self, mut request: Request<()>) -> Result<Request<()>, Status> {
        let header = self
            .header
            .read()
            .map_err(|_| Status::internal("token slot poisoned"))?
            .clone()
            .ok_or_else(|| Status::unauthenticated("no access token available"))?;

        request.metadata_mut().insert("authorization", header);
        Ok(request)
    }
}
