pub mod connection;
pub mod error;
pub mod repositories;
pub mod schema;
pub mod store;

pub use connection::pool::{open_pool, run_migrations};
pub use error::{DbError, Result};
pub use repositories::account_repository::AccountRepository;
pub use repositories::mapping_repository::MappingRepository;
pub use schema::{DatabaseEngine, MAPPING_ACCOUNT_KEY, UniqueKey};
pub use store::SqliteIdentityStore;
