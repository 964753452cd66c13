//! DDL for the `keycloak_user` mapping table on each supported engine.
//!
//! The SQLite variant is also applied automatically through the embedded
//! migrations; the others are handed to the host's own migration runner.

use crate::{DbError, Result as DbErrorResult};

use kc_core::ErrorLocation;

use std::fmt;
use std::panic::Location;
use std::str::FromStr;

const MYSQL_KEYCLOAK_USER: &str = include_str!("../sql/mysql/keycloak_user.sql");
const POSTGRES_KEYCLOAK_USER: &str = include_str!("../sql/postgres/keycloak_user.sql");
const SQLITE_KEYCLOAK_USER: &str = include_str!("../sql/sqlite/keycloak_user.sql");

/// A unique key of the mapping table, as each engine names it when violated.
///
/// PostgreSQL reports `index` as the constraint, MySQL quotes it in the
/// message and SQLite only names `table.column`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UniqueKey {
    pub table: &'static str,
    pub column: &'static str,
    pub index: &'static str,
}

impl UniqueKey {
    pub fn matches(&self, constraint: Option<&str>, message: &str) -> bool {
        constraint == Some(self.index)
            || message.contains(self.index)
            || message.contains(&format!("{}.{}", self.table, self.column))
    }
}

/// At most one uuid per local account; the index name is shared by every
/// engine's DDL
pub const MAPPING_ACCOUNT_KEY: UniqueKey = UniqueKey {
    table: "keycloak_user",
    column: "ku_user",
    index: "idx_keycloak_user_user",
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatabaseEngine {
    Mysql,
    Postgres,
    Sqlite,
}

impl DatabaseEngine {
    pub const ALL: [DatabaseEngine; 3] = [Self::Mysql, Self::Postgres, Self::Sqlite];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mysql => "mysql",
            Self::Postgres => "postgres",
            Self::Sqlite => "sqlite",
        }
    }

    pub fn keycloak_user_ddl(&self) -> &'static str {
        match self {
            Self::Mysql => MYSQL_KEYCLOAK_USER,
            Self::Postgres => POSTGRES_KEYCLOAK_USER,
            Self::Sqlite => SQLITE_KEYCLOAK_USER,
        }
    }
}

impl FromStr for DatabaseEngine {
    type Err = DbError;

    #[track_caller]
    fn from_str(s: &str) -> DbErrorResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "mysql" | "mariadb" => Ok(Self::Mysql),
            "postgres" | "postgresql" => Ok(Self::Postgres),
            "sqlite" => Ok(Self::Sqlite),
            _ => Err(DbError::UnsupportedEngine {
                engine: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl fmt::Display for DatabaseEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
