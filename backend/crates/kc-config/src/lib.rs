mod config;
mod database_config;
mod error;
mod keycloak_config;
mod log_level;
mod logging_config;
mod server_config;

pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use keycloak_config::KeycloakConfig;
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use server_config::ServerConfig;

const CONFIG_DIR_ENV: &str = "KC_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".kc";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;
const MIN_PORT: u16 = 1024;

const DEFAULT_DATABASE_FILENAME: &str = "keycloak.db";
const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 5;
const MAX_DATABASE_MAX_CONNECTIONS: u32 = 100;

const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";

const DEFAULT_AUTO_CREATE_ACCOUNTS: bool = true;

#[cfg(test)]
mod tests;
