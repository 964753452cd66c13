//! Errors raised while loading or validating the configuration.

use kc_core::CoreError;

use std::panic::Location;
use std::path::PathBuf;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error as ThisError;

#[derive(ThisError, Debug)]
pub enum ConfigError {
    /// A setting holds a value the service cannot run with
    #[error("Invalid setting {key}: {reason} {location}")]
    InvalidSetting {
        key: String,
        reason: String,
        location: ErrorLocation,
    },

    #[error("Invalid entry in keycloak.trusted_proxies: {source} {location}")]
    TrustedProxy {
        #[source]
        source: CoreError,
        location: ErrorLocation,
    },

    #[error("Cannot determine the working directory: {source}")]
    WorkingDirectory {
        #[source]
        source: std::io::Error,
    },

    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML parse error in {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl ConfigError {
    /// `key` is the dotted setting name as written in config.toml
    #[track_caller]
    pub fn invalid<K: Into<String>, R: Into<String>>(key: K, reason: R) -> Self {
        ConfigError::InvalidSetting {
            key: key.into(),
            reason: reason.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// The offending setting, for validation failures
    pub fn key(&self) -> Option<&str> {
        match self {
            ConfigError::InvalidSetting { key, .. } => Some(key),
            ConfigError::TrustedProxy { .. } => Some("keycloak.trusted_proxies"),
            _ => None,
        }
    }
}

impl From<CoreError> for ConfigError {
    #[track_caller]
    fn from(source: CoreError) -> Self {
        ConfigError::TrustedProxy {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type ConfigErrorResult<T> = StdResult<T, ConfigError>;
