//! Reading the three identity variables out of a request or the process
//! environment.

use crate::ResolverConfig;

use kc_core::IdentityAssertion;

use http::HeaderMap;

/// Build an assertion from whatever `lookup` returns for each configured name.
pub fn from_lookup<F>(config: &ResolverConfig, lookup: F) -> IdentityAssertion
where
    F: Fn(&str) -> Option<String>,
{
    IdentityAssertion::new(
        lookup(&config.uuid_variable),
        lookup(&config.email_variable),
        lookup(&config.username_variable),
    )
}

/// Header values must be valid UTF-8; anything else counts as absent.
pub fn from_headers(config: &ResolverConfig, headers: &HeaderMap) -> IdentityAssertion {
    from_lookup(config, |name| {
        headers
            .get(name)
            .and_then(|value| String::from_utf8(value.as_bytes().to_vec()).ok())
    })
}

pub fn from_env(config: &ResolverConfig) -> IdentityAssertion {
    from_lookup(config, |name| std::env::var(name).ok())
}
