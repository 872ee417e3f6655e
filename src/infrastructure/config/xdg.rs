//! Settings file under the XDG config directory

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tracing::debug;

use crate::application::ports::ConfigStore;
use crate::domain::config::{AppConfig, ConfigKey};
use crate::domain::error::ConfigError;

/// Directory under the XDG config home holding the settings file
pub const CONFIG_DIR_NAME: &str = "speech-recognize";

const CONFIG_FILE_NAME: &str = "config.toml";

/// TOML settings file, by default `$XDG_CONFIG_HOME/speech-recognize/config.toml`.
///
/// Files are written through a sibling temp file and renamed into place.
/// On unix they are readable by the owner only since they may carry
/// inline credentials.
pub struct XdgConfigStore {
    file: PathBuf,
}

impl XdgConfigStore {
    pub fn new() -> Self {
        let base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("~/.config"));
        Self::at(base.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Store backed by an explicit file
    pub fn at(file: impl Into<PathBuf>) -> Self {
        Self { file: file.into() }
    }

    fn display(&self) -> String {
        self.file.display().to_string()
    }

    fn decode(&self, text: &str) -> Result<AppConfig, ConfigError> {
        let config: AppConfig = toml::from_str(text).map_err(|e| ConfigError::Parse {
            path: self.display(),
            message: e.message().to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    fn write_error(&self, e: impl ToString) -> ConfigError {
        ConfigError::Write {
            path: self.display(),
            message: e.to_string(),
        }
    }
}

impl Default for XdgConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

/// A key file named in the settings must exist when it is written
async fn check_key_file(config: &AppConfig) -> Result<(), ConfigError> {
    let Some(path) = config.credentials().filter(|_| !config.has_inline_credentials()) else {
        return Ok(());
    };

    match fs::metadata(path).await {
        Ok(meta) if meta.is_file() => Ok(()),
        Ok(_) => Err(ConfigError::invalid(
            ConfigKey::Credentials.as_str(),
            format!("{path} is not a file"),
        )),
        Err(e) => Err(ConfigError::invalid(
            ConfigKey::Credentials.as_str(),
            format!("Cannot use key file {path}: {e}"),
        )),
    }
}

#[async_trait]
impl ConfigStore for XdgConfigStore {
    fn location(&self) -> &Path {
        &self.file
    }

    async fn read(&self) -> Result<Option<AppConfig>, ConfigError> {
        let text = match fs::read_to_string(&self.file).await {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(ConfigError::Read {
                    path: self.display(),
                    message: e.to_string(),
                })
            }
        };

        self.decode(&text).map(Some)
    }

    async fn write(&self, config: &AppConfig, replace: bool) -> Result<(), ConfigError> {
        config.validate()?;
        check_key_file(config).await?;

        if !replace && fs::try_exists(&self.file).await.unwrap_or(false) {
            return Err(ConfigError::AlreadyExists(self.display()));
        }

        if let Some(parent) = self.file.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| self.write_error(e))?;
        }

        let text = toml::to_string_pretty(config).map_err(|e| self.write_error(e))?;
        let staging = self.file.with_extension("toml.tmp");
        fs::write(&staging, text)
            .await
            .map_err(|e| self.write_error(e))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&staging, std::fs::Permissions::from_mode(0o600))
                .await
                .map_err(|e| self.write_error(e))?;
        }

        fs::rename(&staging, &self.file)
            .await
            .map_err(|e| self.write_error(e))?;

        debug!(path = %self.display(), "Settings written");
        Ok(())
    }
}
