//! Settings storage port interface

use std::path::Path;

use async_trait::async_trait;

use crate::domain::config::AppConfig;
use crate::domain::error::ConfigError;

/// Port for the persisted settings
#[async_trait]
pub trait ConfigStore: Send + Sync {
    /// Where the settings live
    fn location(&self) -> &Path;

    /// Read and validate the stored settings; `None` when nothing is stored
    async fn read(&self) -> Result<Option<AppConfig>, ConfigError>;

    /// Validate and persist `config`. Unless `replace` is set an existing
    /// file is left untouched and [`ConfigError::AlreadyExists`] returned.
    async fn write(&self, config: &AppConfig, replace: bool) -> Result<(), ConfigError>;
}
