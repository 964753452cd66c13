use crate::{LocalAccount, Mapping, Result as CoreErrorResult};

use async_trait::async_trait;

/// Account and mapping persistence as seen by the identity resolver.
///
/// Implementations must enforce uniqueness of `Mapping::uuid` themselves and
/// report a rejected second insert as [`crate::CoreError::DuplicateMapping`].
#[async_trait]
pub trait IdentityStore: Send + Sync {
    /// Account bound to `uuid`, joined through the mapping table
    async fn find_mapped_account(&self, uuid: &str) -> CoreErrorResult<Option<LocalAccount>>;

    /// Every account registered with exactly this email, confirmed or not
    async fn find_accounts_by_email(&self, email: &str) -> CoreErrorResult<Vec<LocalAccount>>;

    async fn account_name_exists(&self, name: &str) -> CoreErrorResult<bool>;

    async fn create_mapping(&self, mapping: &Mapping) -> CoreErrorResult<()>;
}
