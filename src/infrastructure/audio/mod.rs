//! Audio source infrastructure module
//!
//! Resolves audio URIs: local files are read, HTTP(S) sources are fetched,
//! and cloud storage references are passed through to the service.

mod uri_loader;

pub use uri_loader::UriAudioLoader;
