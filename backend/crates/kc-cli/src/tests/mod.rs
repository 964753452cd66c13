
use std::collections::HashMap;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

pub(crate) const UUID_VAR: &str = "KC_UUID";
pub(crate) const EMAIL_VAR: &str = "KC_EMAIL";
pub(crate) const USERNAME_VAR: &str = "KC_PREFERRED_USERNAME";

/// Stand-in for the process environment
pub(crate) fn variables(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect()
}

/// All three identity variables set
pub(crate) fn asserted(uuid: &str, email: &str, username: &str) -> HashMap<String, String> {
    variables(&[(UUID_VAR, uuid), (EMAIL_VAR, email), (USERNAME_VAR, username)])
}

pub(crate) fn test_keycloak_config() -> kc_config::KeycloakConfig {
    kc_config::KeycloakConfig {
        uuid_variable: UUID_VAR.to_string(),
        email_variable: EMAIL_VAR.to_string(),
        username_variable: USERNAME_VAR.to_string(),
        ..kc_config::KeycloakConfig::default()
    }
}

pub(crate) async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .unwrap();

    kc_db::run_migrations(&pool).await.unwrap();
    pool
}
