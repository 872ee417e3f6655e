//! speech-recognize - one-shot Cloud Speech recognition CLI
//!
//! This crate loads an audio file, sends it to the Cloud Speech
//! `NonStreamingRecognize` gRPC method over an authenticated TLS channel
//! and prints the recognized transcript.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Recognition requests and responses, configuration, errors
//! - **Application**: The recognize use case and port interfaces (traits)
//! - **Infrastructure**: Adapter implementations (gRPC client, credentials, audio loading, config file)
//! - **CLI**: Command-line interface, argument parsing and output

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
