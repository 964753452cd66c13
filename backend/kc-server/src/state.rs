use crate::{PortalLinks, ServerErrorResult};

use kc_auth::IdentityResolver;
use kc_config::KeycloakConfig;
use kc_core::IdentityStore;
use kc_db::{AccountRepository, SqliteIdentityStore};

use std::sync::Arc;

use sqlx::SqlitePool;

/// Shared state for every handler
#[derive(Clone)]
pub struct IdentityState {
    pub pool: SqlitePool,
    pub resolver: Arc<IdentityResolver>,
    pub accounts: AccountRepository,
    pub links: PortalLinks,
    pub auto_create_accounts: bool,
}

impl IdentityState {
    pub fn new(pool: SqlitePool, keycloak: &KeycloakConfig) -> ServerErrorResult<Self> {
        let store = Arc::new(SqliteIdentityStore::new(pool.clone()));
        Self::with_store(pool, keycloak, store)
    }

    /// Resolve against `store` while accounts are still created through `pool`
    pub fn with_store(
        pool: SqlitePool,
        keycloak: &KeycloakConfig,
        store: Arc<dyn IdentityStore>,
    ) -> ServerErrorResult<Self> {
        let resolver = IdentityResolver::new(keycloak.resolver_config()?, store);

        Ok(Self {
            accounts: AccountRepository::new(pool.clone()),
            pool,
            resolver: Arc::new(resolver),
            links: PortalLinks::from(keycloak),
            auto_create_accounts: keycloak.auto_create_accounts,
        })
    }
}
