pub mod assertion_source;
pub mod error;
pub mod request_identity;
pub mod resolver;
pub mod resolver_config;
pub mod trust_gate;

pub use error::{AuthError, Result};
pub use request_identity::RequestIdentity;
pub use resolver::IdentityResolver;
pub use resolver_config::ResolverConfig;
pub use trust_gate::{TrustDecision, TrustGate};

/// Log target for every trust and resolution decision
pub const LOG_TARGET: &str = "keycloak_auth";

#[cfg(test)]
mod tests;
