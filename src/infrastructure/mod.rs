//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces,
//! integrating with external systems like the speech gRPC API,
//! the filesystem and HTTP.

pub mod audio;
pub mod config;
pub mod reporting;
pub mod speech;

// Re-export adapters
pub use audio::UriAudioLoader;
pub use config::XdgConfigStore;
pub use reporting::TracingReporter;
pub use speech::{CloudCredentials, CredentialSource, GrpcSpeechService};
