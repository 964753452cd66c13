use kc_auth::AuthError;
use kc_config::ConfigError;
use kc_db::DbError;

use error_location::ErrorLocation;
use std::panic::Location;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] DbError),

    #[error("{source}")]
    Auth {
        #[source]
        source: AuthError,
    },

    #[error("JSON error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },

    #[error("Logger error: {message}")]
    Logger { message: String },
}

impl CliError {
    /// Stable code for scripting, mirroring the HTTP error codes
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Config(_) => "CONFIG_ERROR",
            Self::Database(_) => "STORE_UNAVAILABLE",
            Self::Auth { source } => source.error_code(),
            Self::Json { .. } => "OUTPUT_ERROR",
            Self::Logger { .. } => "LOGGER_ERROR",
        }
    }
}

impl From<AuthError> for CliError {
    fn from(source: AuthError) -> Self {
        Self::Auth { source }
    }
}

impl From<serde_json::Error> for CliError {
    #[track_caller]
    fn from(source: serde_json::Error) -> Self {
        Self::Json {
            message: source.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, CliError>;
