use crate::{ConfigError, ConfigErrorResult, DEFAULT_AUTO_CREATE_ACCOUNTS};

use kc_auth::ResolverConfig;
use kc_auth::resolver_config::{
    DEFAULT_EMAIL_VARIABLE, DEFAULT_USERNAME_VARIABLE, DEFAULT_UUID_VARIABLE,
};
use kc_core::{TrustedProxy, VariableSource};

use log::warn;
use serde::Deserialize;
use url::Url;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct KeycloakConfig {
    /// Accept identity headers from any peer. Only safe when the port is
    /// unreachable except through the proxy.
    pub insecure_headers: bool,
    pub variable_type: VariableSource,
    pub uuid_variable: String,
    pub email_variable: String,
    pub username_variable: String,
    /// Peers allowed to assert identity: single addresses or CIDR ranges
    pub trusted_proxies: Vec<String>,
    pub login_url: Option<String>,
    pub logout_url: Option<String>,
    pub portal_url: Option<String>,
    /// Create the local account after a "new identity" resolution
    pub auto_create_accounts: bool,
}

impl Default for KeycloakConfig {
    fn default() -> Self {
        Self {
            insecure_headers: false,
            variable_type: VariableSource::Header,
            uuid_variable: String::from(DEFAULT_UUID_VARIABLE),
            email_variable: String::from(DEFAULT_EMAIL_VARIABLE),
            username_variable: String::from(DEFAULT_USERNAME_VARIABLE),
            trusted_proxies: Vec::new(),
            login_url: None,
            logout_url: None,
            portal_url: None,
            auto_create_accounts: DEFAULT_AUTO_CREATE_ACCOUNTS,
        }
    }
}

impl KeycloakConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        for (key, value) in [
            ("uuid_variable", &self.uuid_variable),
            ("email_variable", &self.email_variable),
            ("username_variable", &self.username_variable),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::invalid(
                    format!("keycloak.{key}"),
                    "cannot be empty",
                ));
            }
        }

        self.parsed_trusted_proxies()?;

        for (key, value) in [
            ("login_url", &self.login_url),
            ("logout_url", &self.logout_url),
            ("portal_url", &self.portal_url),
        ] {
            if let Some(url) = value {
                validate_url(key, url)?;
            }
        }

        match &self.variable_type {
            VariableSource::Unsupported(value) => warn!(
                "keycloak.variable_type '{}' is not supported (expected header or env); no request will be authenticated",
                value
            ),
            VariableSource::Header if self.insecure_headers => warn!(
                "keycloak.insecure_headers is enabled; identity headers are accepted from any peer"
            ),
            VariableSource::Header if self.trusted_proxies.is_empty() => warn!(
                "keycloak.trusted_proxies is empty; no request will be authenticated"
            ),
            _ => {}
        }

        Ok(())
    }

    pub fn parsed_trusted_proxies(&self) -> ConfigErrorResult<Vec<TrustedProxy>> {
        Ok(TrustedProxy::parse_all(&self.trusted_proxies)?)
    }

    /// The resolver's view of this section
    pub fn resolver_config(&self) -> ConfigErrorResult<ResolverConfig> {
        Ok(ResolverConfig {
            insecure_headers: self.insecure_headers,
            variable_type: self.variable_type.clone(),
            uuid_variable: self.uuid_variable.clone(),
            email_variable: self.email_variable.clone(),
            username_variable: self.username_variable.clone(),
            trusted_proxies: self.parsed_trusted_proxies()?,
        })
    }
}

fn validate_url(key: &str, value: &str) -> ConfigErrorResult<()> {
    let url = Url::parse(value).map_err(|e| {
        ConfigError::invalid(format!("keycloak.{key}"), format!("'{value}' is not a URL: {e}"))
    })?;

    match url.scheme() {
        "http" | "https" => Ok(()),
        scheme => Err(ConfigError::invalid(
            format!("keycloak.{key}"),
            format!("must use http or https, got '{scheme}'"),
        )),
    }
}
