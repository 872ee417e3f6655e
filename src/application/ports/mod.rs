//! Port interfaces (traits) for external systems
//!
//! These traits define the boundaries between the application
//! and infrastructure layers.

pub mod audio_loader;
pub mod config;
pub mod reporter;
pub mod speech;

// Re-export common types
pub use audio_loader::{AudioLoadError, AudioLoader};
pub use config::ConfigStore;
pub use reporter::{RecognizeEvent, Reporter};
pub use speech::{RpcStatus, ShutdownOutcome, SpeechService};
