//! Settable configuration keys

use std::fmt;
use std::str::FromStr;

use crate::domain::error::ConfigError;

/// A key accepted by `config get` and `config set`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigKey {
    /// Key file path or inline credential JSON
    Credentials,
    /// Default log filter
    LogLevel,
}

impl ConfigKey {
    /// Every key, in listing order
    pub const ALL: [ConfigKey; 2] = [ConfigKey::Credentials, ConfigKey::LogLevel];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Credentials => "credentials",
            Self::LogLevel => "log_level",
        }
    }
}

impl FromStr for ConfigKey {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| ConfigError::UnknownKey(s.to_string()))
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_keys() {
        assert_eq!("credentials".parse::<ConfigKey>(), Ok(ConfigKey::Credentials));
        assert_eq!("log_level".parse::<ConfigKey>(), Ok(ConfigKey::LogLevel));
    }

    #[test]
    fn rejects_removed_and_unknown_keys() {
        assert_eq!(
            "language_code".parse::<ConfigKey>(),
            Err(ConfigError::UnknownKey("language_code".to_string()))
        );
        assert!("Log_Level".parse::<ConfigKey>().is_err());
    }

    #[test]
    fn unknown_key_message_lists_valid_keys() {
        let err = ConfigError::UnknownKey("api_key".to_string());
        assert!(err.to_string().contains("Valid keys: credentials, log_level"));
    }
}
