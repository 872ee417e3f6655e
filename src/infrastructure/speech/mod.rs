//! Speech service infrastructure module
//!
//! gRPC adapter for the non-streaming recognize API: wire messages, the
//! client stub, credentials, the authenticated TLS channel and the
//! [`SpeechService`](crate::application::ports::SpeechService) implementation.

mod auth;
mod channel;
mod client;
mod convert;
mod error;
pub mod proto;
mod service;
#[cfg(test)]
mod test_server;

pub use auth::{CloudCredentials, CredentialSource, TokenProvider, CLOUD_PLATFORM_SCOPE};
pub use channel::{build_channel, install_crypto_provider, AuthInterceptor};
pub use client::SpeechClient;
pub use error::SpeechServiceError;
pub use service::GrpcSpeechService;
