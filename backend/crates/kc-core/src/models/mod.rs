pub mod identity_assertion;
pub mod local_account;
pub mod mapping;
pub mod resolution;
pub mod resolved_identity;
pub mod trusted_proxy;
pub mod variable_source;
