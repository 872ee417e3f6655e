//! Configuration domain module

mod app_config;
mod key;

pub use app_config::{AppConfig, LOG_LEVELS};
pub use key::ConfigKey;
