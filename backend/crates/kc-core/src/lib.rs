pub mod error;
pub mod models;
pub mod store;
pub mod username;

pub use error::{CoreError, Result};
pub use models::identity_assertion::IdentityAssertion;
pub use models::local_account::LocalAccount;
pub use models::mapping::Mapping;
pub use models::resolution::{NoIdentityReason, Resolution, ResolutionPath};
pub use models::resolved_identity::ResolvedIdentity;
pub use models::trusted_proxy::TrustedProxy;
pub use models::variable_source::VariableSource;
pub use store::IdentityStore;
pub use username::normalize_username;

pub use error_location::ErrorLocation;

#[cfg(test)]
mod tests;
