use crate::schema::UniqueKey;

use kc_core::{CoreError, ErrorLocation};

use std::panic::Location;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("SQLx error: {source} {location}")]
    Sqlx {
        source: sqlx::Error,
        location: ErrorLocation,
    },

    #[error("Unique constraint violated: {message} {location}")]
    UniqueViolation {
        message: String,
        /// Constraint name, for engines that report one
        constraint: Option<String>,
        location: ErrorLocation,
    },

    #[error("Migration error: {message} {location}")]
    Migration {
        message: String,
        location: ErrorLocation,
    },

    #[error("Database initialization failed: {message} {location}")]
    Initialization {
        message: String,
        location: ErrorLocation,
    },

    #[error("Unsupported database engine '{engine}' (expected mysql, postgres or sqlite) {location}")]
    UnsupportedEngine {
        engine: String,
        location: ErrorLocation,
    },
}

impl From<sqlx::Error> for DbError {
    #[track_caller]
    fn from(source: sqlx::Error) -> Self {
        if let sqlx::Error::Database(ref db_error) = source
            && db_error.is_unique_violation()
        {
            return Self::UniqueViolation {
                message: db_error.message().to_string(),
                constraint: db_error.constraint().map(str::to_string),
                location: ErrorLocation::from(Location::caller()),
            };
        }

        Self::Sqlx {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl DbError {
    /// Whether this is a unique violation of `key` specifically
    pub fn violates(&self, key: &UniqueKey) -> bool {
        match self {
            Self::UniqueViolation {
                message,
                constraint,
                ..
            } => key.matches(constraint.as_deref(), message),
            _ => false,
        }
    }
}

impl From<DbError> for CoreError {
    #[track_caller]
    fn from(e: DbError) -> Self {
        CoreError::store(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, DbError>;
