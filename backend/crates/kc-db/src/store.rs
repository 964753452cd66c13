use crate::schema::MAPPING_ACCOUNT_KEY;
use crate::{AccountRepository, DbError, MappingRepository};

use kc_core::{CoreError, IdentityStore, LocalAccount, Mapping, Result as CoreErrorResult};

use async_trait::async_trait;
use sqlx::SqlitePool;

/// [`IdentityStore`] backed by the `users` and `keycloak_user` tables.
#[derive(Clone)]
pub struct SqliteIdentityStore {
    accounts: AccountRepository,
    mappings: MappingRepository,
}

impl SqliteIdentityStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            accounts: AccountRepository::new(pool.clone()),
            mappings: MappingRepository::new(pool),
        }
    }

    pub fn accounts(&self) -> &AccountRepository {
        &self.accounts
    }

    pub fn mappings(&self) -> &MappingRepository {
        &self.mappings
    }
}

#[async_trait]
impl IdentityStore for SqliteIdentityStore {
    async fn find_mapped_account(&self, uuid: &str) -> CoreErrorResult<Option<LocalAccount>> {
        Ok(self.mappings.find_account_by_uuid(uuid).await?)
    }

    async fn find_accounts_by_email(&self, email: &str) -> CoreErrorResult<Vec<LocalAccount>> {
        Ok(self.accounts.find_by_email(email).await?)
    }

    async fn account_name_exists(&self, name: &str) -> CoreErrorResult<bool> {
        Ok(self.accounts.name_exists(name).await?)
    }

    async fn create_mapping(&self, mapping: &Mapping) -> CoreErrorResult<()> {
        match self.mappings.create(mapping).await {
            Ok(()) => Ok(()),
            Err(e) if e.violates(&MAPPING_ACCOUNT_KEY) => {
                Err(CoreError::account_already_bound(mapping.local_account_id))
            }
            Err(DbError::UniqueViolation { .. }) => {
                Err(CoreError::duplicate_mapping(mapping.uuid.as_str()))
            }
            Err(e) => Err(e.into()),
        }
    }
}
