use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_DATABASE_FILENAME, DEFAULT_DATABASE_MAX_CONNECTIONS,
    MAX_DATABASE_MAX_CONNECTIONS,
};

use std::path::Path;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// SQLite file, relative to the config directory
    pub path: String,
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: String::from(DEFAULT_DATABASE_FILENAME),
            max_connections: DEFAULT_DATABASE_MAX_CONNECTIONS,
        }
    }
}

impl DatabaseConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.path.trim().is_empty() {
            return Err(ConfigError::invalid("database.path", "cannot be empty"));
        }

        if Path::new(&self.path).is_absolute() || self.path.contains("..") {
            return Err(ConfigError::invalid(
                "database.path",
                "must be relative and cannot contain '..'",
            ));
        }

        if self.max_connections == 0 || self.max_connections > MAX_DATABASE_MAX_CONNECTIONS {
            return Err(ConfigError::invalid(
                "database.max_connections",
                format!(
                    "must be 1-{}, got {}",
                    MAX_DATABASE_MAX_CONNECTIONS, self.max_connections
                ),
            ));
        }

        Ok(())
    }
}
