use kc_core::{Result as CoreErrorResult, TrustedProxy, VariableSource};

pub const DEFAULT_UUID_VARIABLE: &str = "X-Forwarded-User";
pub const DEFAULT_EMAIL_VARIABLE: &str = "X-Forwarded-Email";
pub const DEFAULT_USERNAME_VARIABLE: &str = "X-Forwarded-Preferred-Username";

/// Everything the resolver needs to know about where assertions come from.
///
/// The three `*_variable` names are header names in header mode and
/// environment variable names in env mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverConfig {
    pub insecure_headers: bool,
    pub variable_type: VariableSource,
    pub uuid_variable: String,
    pub email_variable: String,
    pub username_variable: String,
    pub trusted_proxies: Vec<TrustedProxy>,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            insecure_headers: false,
            variable_type: VariableSource::Header,
            uuid_variable: DEFAULT_UUID_VARIABLE.to_string(),
            email_variable: DEFAULT_EMAIL_VARIABLE.to_string(),
            username_variable: DEFAULT_USERNAME_VARIABLE.to_string(),
            trusted_proxies: Vec::new(),
        }
    }
}

impl ResolverConfig {
    /// Parse the textual proxy list (IPs or CIDR ranges) into `trusted_proxies`.
    #[track_caller]
    pub fn with_trusted_proxies<S: AsRef<str>>(mut self, proxies: &[S]) -> CoreErrorResult<Self> {
        self.trusted_proxies = TrustedProxy::parse_all(proxies)?;
        Ok(self)
    }
}
