//! Command execution, separated from process concerns so tests can drive it.

use crate::{CliResult, Commands};

use kc_auth::{IdentityResolver, ResolverConfig, assertion_source};
use kc_config::{Config, KeycloakConfig};
use kc_core::{NoIdentityReason, Resolution, VariableSource};
use kc_core::models::identity_assertion::EMAIL_FIELD;
use kc_db::{DatabaseEngine, SqliteIdentityStore};

use std::str::FromStr;
use std::sync::Arc;

use log::debug;
use serde::Serialize;
use sqlx::SqlitePool;

/// What a command produced, before it is printed
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Json(serde_json::Value),
    Text(String),
    NoIdentity(NoIdentityReason),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolveOutput {
    pub username: String,
    pub email: String,
    pub resolved_by: String,
}

/// The configured resolver settings with the source forced to the environment.
/// Trusted proxies play no part without a network peer.
pub fn env_resolver_config(keycloak: &KeycloakConfig) -> CliResult<ResolverConfig> {
    let mut config = keycloak.resolver_config()?;
    config.variable_type = VariableSource::Env;
    Ok(config)
}

pub async fn run(command: &Commands, config: &Config) -> CliResult<Outcome> {
    match command {
        Commands::Resolve => {
            let pool =
                kc_db::open_pool(&config.database_path()?, config.database.max_connections)
                    .await?;
            let outcome = resolve(&pool, &config.keycloak, process_env).await;
            pool.close().await;
            outcome
        }
        Commands::Email => asserted_email(&config.keycloak, process_env),
        Commands::Schema { engine } => schema(engine),
    }
}

/// Variable lookup against the process environment
pub fn process_env(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

/// Resolve the assertion read through `lookup` against the account store.
///
/// `NewAccount` resolutions are reported and nothing is created; the host
/// owns account creation.
pub async fn resolve<F>(
    pool: &SqlitePool,
    keycloak: &KeycloakConfig,
    lookup: F,
) -> CliResult<Outcome>
where
    F: Fn(&str) -> Option<String>,
{
    let config = env_resolver_config(keycloak)?;
    let assertion = assertion_source::from_lookup(&config, lookup);

    let store = Arc::new(SqliteIdentityStore::new(pool.clone()));
    let resolver = IdentityResolver::new(config, store);

    let resolution = resolver.resolve(&assertion).await?;

    match resolution {
        Resolution::Resolved { identity, path } => {
            debug!("Resolved {} via {}", identity.username, path);
            let output = ResolveOutput {
                username: identity.username,
                email: identity.email,
                resolved_by: path.as_str().to_string(),
            };
            Ok(Outcome::Json(serde_json::to_value(output)?))
        }
        Resolution::NoIdentity(reason) => Ok(Outcome::NoIdentity(reason)),
    }
}

pub fn asserted_email<F>(keycloak: &KeycloakConfig, lookup: F) -> CliResult<Outcome>
where
    F: Fn(&str) -> Option<String>,
{
    let assertion = assertion_source::from_lookup(&env_resolver_config(keycloak)?, lookup);

    Ok(match assertion.email {
        Some(email) => Outcome::Json(serde_json::json!({ "email": email })),
        None => Outcome::NoIdentity(NoIdentityReason::MissingAssertion {
            missing: vec![EMAIL_FIELD],
        }),
    })
}

pub fn schema(engine: &str) -> CliResult<Outcome> {
    let engine = DatabaseEngine::from_str(engine)?;
    Ok(Outcome::Text(engine.keycloak_user_ddl().to_string()))
}
