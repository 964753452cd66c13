use crate::{
    CONFIG_DIR_ENV, CONFIG_FILENAME, ConfigError, ConfigErrorResult, DEFAULT_CONFIG_DIR,
    DatabaseConfig, KeycloakConfig, LoggingConfig, ServerConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
    pub keycloak: KeycloakConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. KC_CONFIG_DIR env var, else ./.kc/
    /// 2. Auto-create the config directory
    /// 3. config.toml if it exists, else defaults
    /// 4. KC_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Priority: KC_CONFIG_DIR env var > ./.kc/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd =
            std::env::current_dir().map_err(|source| ConfigError::WorkingDirectory { source })?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR))
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.database.validate()?;
        self.keycloak.validate()?;

        Ok(())
    }

    pub fn database_path(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.database.path))
    }

    /// Log file path, if file logging is configured
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        let Some(file) = &self.logging.file else {
            return Ok(None);
        };
        Ok(Some(
            Self::config_dir()?.join(&self.logging.dir).join(file),
        ))
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  server: {}:{}", self.server.host, self.server.port);
        info!(
            "  database: {} (max {} connections)",
            self.database.path, self.database.max_connections
        );
        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );

        let keycloak = &self.keycloak;
        info!(
            "  keycloak: variable_type={}, insecure_headers={}, auto_create_accounts={}",
            keycloak.variable_type, keycloak.insecure_headers, keycloak.auto_create_accounts
        );
        info!(
            "  keycloak variables: uuid={}, email={}, username={}",
            keycloak.uuid_variable, keycloak.email_variable, keycloak.username_variable
        );
        if keycloak.trusted_proxies.is_empty() {
            info!("  keycloak trusted_proxies: none");
        } else {
            info!(
                "  keycloak trusted_proxies: {}",
                keycloak.trusted_proxies.join(", ")
            );
        }
        info!(
            "  keycloak urls: login={}, logout={}, portal={}",
            keycloak.login_url.as_deref().unwrap_or("-"),
            keycloak.logout_url.as_deref().unwrap_or("-"),
            keycloak.portal_url.as_deref().unwrap_or("-")
        );
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("KC_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("KC_SERVER_PORT", &mut self.server.port);

        // Database
        Self::apply_env_string("KC_DATABASE_PATH", &mut self.database.path);
        Self::apply_env_parse(
            "KC_DATABASE_MAX_CONNECTIONS",
            &mut self.database.max_connections,
        );

        // Logging
        Self::apply_env_parse("KC_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("KC_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("KC_LOG_FILE", &mut self.logging.file);

        // Keycloak
        Self::apply_env_bool("KC_INSECURE_HEADERS", &mut self.keycloak.insecure_headers);
        Self::apply_env_parse("KC_VARIABLE_TYPE", &mut self.keycloak.variable_type);
        Self::apply_env_string("KC_UUID_VARIABLE", &mut self.keycloak.uuid_variable);
        Self::apply_env_string("KC_EMAIL_VARIABLE", &mut self.keycloak.email_variable);
        Self::apply_env_string("KC_USERNAME_VARIABLE", &mut self.keycloak.username_variable);
        Self::apply_env_list("KC_TRUSTED_PROXIES", &mut self.keycloak.trusted_proxies);
        Self::apply_env_option_string("KC_LOGIN_URL", &mut self.keycloak.login_url);
        Self::apply_env_option_string("KC_LOGOUT_URL", &mut self.keycloak.logout_url);
        Self::apply_env_option_string("KC_PORTAL_URL", &mut self.keycloak.portal_url);
        Self::apply_env_bool(
            "KC_AUTO_CREATE_ACCOUNTS",
            &mut self.keycloak.auto_create_accounts,
        );
    }

    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Accepts "true"/"1"
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val).filter(|v| !v.is_empty());
        }
    }

    /// Comma-separated list; blank entries are dropped
    fn apply_env_list(var_name: &str, target: &mut Vec<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val
                .split(',')
                .map(str::trim)
                .filter(|entry| !entry.is_empty())
                .map(String::from)
                .collect();
        }
    }
}
