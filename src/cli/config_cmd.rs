//! Config command handler

use crate::application::ports::ConfigStore;
use crate::domain::config::{AppConfig, ConfigKey};
use crate::domain::error::ConfigError;

use super::args::ConfigAction;
use super::presenter::Presenter;

const NOT_SET: &str = "(not set)";

/// Handle config subcommand
pub async fn handle_config_command<S: ConfigStore>(
    action: ConfigAction,
    store: &S,
    presenter: &Presenter,
) -> Result<(), ConfigError> {
    match action {
        ConfigAction::Init => handle_init(store, presenter).await,
        ConfigAction::Set { key, value } => handle_set(store, presenter, &key, &value).await,
        ConfigAction::Get { key } => handle_get(store, presenter, &key).await,
        ConfigAction::List => handle_list(store, presenter).await,
        ConfigAction::Path => {
            presenter.output(&store.location().to_string_lossy());
            Ok(())
        }
    }
}

async fn handle_init<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    store.write(&AppConfig::defaults(), false).await?;
    presenter.success(&format!(
        "Config file created at: {}",
        store.location().display()
    ));
    Ok(())
}

async fn handle_set<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
    value: &str,
) -> Result<(), ConfigError> {
    let key: ConfigKey = key.parse()?;

    let mut config = store.read().await?.unwrap_or_default();
    config.set(key, value)?;
    store.write(&config, true).await?;

    presenter.success(&format!("{} = {}", key, shown(&config, key)));
    Ok(())
}

async fn handle_get<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
) -> Result<(), ConfigError> {
    let key: ConfigKey = key.parse()?;
    let config = store.read().await?.unwrap_or_default();
    presenter.output(&shown(&config, key));
    Ok(())
}

async fn handle_list<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    let config = store.read().await?.unwrap_or_default();
    for key in ConfigKey::ALL {
        presenter.key_value(key.as_str(), &shown(&config, key));
    }
    Ok(())
}

/// Value as printed; inline credential JSON is never echoed
fn shown(config: &AppConfig, key: ConfigKey) -> String {
    match config.get(key) {
        None => NOT_SET.to_string(),
        Some(_) if key == ConfigKey::Credentials && config.has_inline_credentials() => {
            "{...} (inline JSON)".to_string()
        }
        Some(value) => value.to_string(),
    }
}
