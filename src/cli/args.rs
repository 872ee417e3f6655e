//! CLI argument definitions using Clap

use clap::{Parser, Subcommand};
use thiserror::Error;

/// speech-recognize - send audio to the Cloud Speech API and print the transcript
#[derive(Parser, Debug)]
#[command(name = "speech-recognize")]
#[command(version)]
#[command(about = "Transcribe an audio file with the Cloud Speech NonStreamingRecognize API")]
#[command(long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    /// Path to audio uri (e.g. file:///foo/baz.raw, gs://bucket/baz.flac)
    #[arg(long, value_name = "FILE_PATH")]
    pub uri: Option<String>,

    /// Endpoint for api, e.g. speech.googleapis.com
    #[arg(long, value_name = "ENDPOINT")]
    pub host: Option<String>,

    /// SSL port, usually 443
    #[arg(long, value_name = "PORT")]
    pub port: Option<u16>,

    /// Sampling rate, i.e. 16000
    #[arg(long, value_name = "RATE", value_parser = clap::value_parser!(i32).range(1..))]
    pub sampling: Option<i32>,

    /// Config subcommand
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config action subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create config file with defaults
    Init,
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// Config value
        value: String,
    },
    /// Get a config value
    Get {
        /// Config key
        key: String,
    },
    /// List all config values
    List,
    /// Show config file path
    Path,
}

/// A required option was not supplied
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgsError {
    #[error("An audio URI must be specified (e.g. file:///foo/baz.raw).")]
    MissingUri,

    #[error("An API endpoint must be specified (typically speech.googleapis.com).")]
    MissingHost,

    #[error("An SSL port must be specified (typically 443).")]
    MissingPort,

    #[error("An audio sampling rate must be specified.")]
    MissingSampling,
}

/// Resolved options for a recognize run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecognizeOptions {
    pub uri: String,
    pub host: String,
    pub port: u16,
    pub sampling: i32,
}

impl Cli {
    /// Check the required options in order and report the first missing one
    pub fn resolve(&self) -> Result<RecognizeOptions, ArgsError> {
        let uri = non_blank(&self.uri).ok_or(ArgsError::MissingUri)?;
        let host = non_blank(&self.host).ok_or(ArgsError::MissingHost)?;
        let port = self.port.ok_or(ArgsError::MissingPort)?;
        let sampling = self.sampling.ok_or(ArgsError::MissingSampling)?;

        Ok(RecognizeOptions {
            uri,
            host,
            port,
            sampling,
        })
    }
}

fn non_blank(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
