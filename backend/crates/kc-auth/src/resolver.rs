use crate::{
    assertion_source, AuthError, Result as AuthErrorResult, ResolverConfig, TrustDecision,
    TrustGate, LOG_TARGET,
};

use kc_core::models::identity_assertion::EMAIL_FIELD;
use kc_core::{
    normalize_username, CoreError, ErrorLocation, IdentityAssertion, IdentityStore, LocalAccount,
    Mapping, NoIdentityReason, Resolution, ResolutionPath, ResolvedIdentity, VariableSource,
};

use std::net::IpAddr;
use std::panic::Location;
use std::sync::Arc;

use http::HeaderMap;
use log::{debug, info, warn};

/// Maps an asserted upstream identity onto a local account.
pub struct IdentityResolver {
    config: ResolverConfig,
    gate: TrustGate,
    store: Arc<dyn IdentityStore>,
}

impl IdentityResolver {
    pub fn new(config: ResolverConfig, store: Arc<dyn IdentityStore>) -> Self {
        let gate = TrustGate::new(config.insecure_headers, config.trusted_proxies.clone());
        Self {
            config,
            gate,
            store,
        }
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    pub fn gate(&self) -> &TrustGate {
        &self.gate
    }

    /// Read the assertion for one request from the configured source.
    ///
    /// Header mode consults the trust gate first; env mode reads the process
    /// environment and ignores `peer` and `headers`.
    pub fn extract(
        &self,
        peer: Option<IpAddr>,
        headers: &HeaderMap,
    ) -> Result<IdentityAssertion, NoIdentityReason> {
        match &self.config.variable_type {
            VariableSource::Header => match self.gate.evaluate(peer) {
                TrustDecision::Trusted => Ok(assertion_source::from_headers(&self.config, headers)),
                TrustDecision::Denied(reason) => Err(reason),
            },
            VariableSource::Env => Ok(assertion_source::from_env(&self.config)),
            VariableSource::Unsupported(value) => {
                warn!(
                    target: LOG_TARGET,
                    "Invalid value '{}' for variable_type, skipping auth",
                    value
                );
                Err(NoIdentityReason::UnsupportedSource {
                    value: value.clone(),
                })
            }
        }
    }

    /// Trust check, extraction and resolution for one request.
    pub async fn resolve_request(
        &self,
        peer: Option<IpAddr>,
        headers: &HeaderMap,
    ) -> AuthErrorResult<Resolution> {
        match self.extract(peer, headers) {
            Ok(assertion) => self.resolve(&assertion).await,
            Err(reason) => Ok(Resolution::NoIdentity(reason)),
        }
    }

    /// The asserted email for a trusted request. Never touches the store.
    #[track_caller]
    pub fn asserted_email(
        &self,
        peer: Option<IpAddr>,
        headers: &HeaderMap,
    ) -> AuthErrorResult<String> {
        let assertion = self
            .extract(peer, headers)
            .map_err(AuthError::not_authenticated)?;

        assertion.email.ok_or_else(|| {
            AuthError::not_authenticated(NoIdentityReason::MissingAssertion {
                missing: vec![EMAIL_FIELD],
            })
        })
    }

    /// Resolve a validated assertion against the store.
    ///
    /// Returns `NoIdentity` without touching the store when any field is
    /// missing. A `NewAccount` resolution writes nothing; creating the
    /// account is left to the host.
    pub async fn resolve(&self, assertion: &IdentityAssertion) -> AuthErrorResult<Resolution> {
        let Some((uuid, email, preferred_username)) = assertion.complete() else {
            let missing = assertion.missing_fields();
            debug!(
                target: LOG_TARGET,
                "Keycloak variables are missing ({}), skipping auth",
                missing.join(", ")
            );
            return Ok(Resolution::NoIdentity(NoIdentityReason::MissingAssertion {
                missing,
            }));
        };

        let username = normalize_username(preferred_username);

        if let Some(account) = self.store.find_mapped_account(uuid).await? {
            info!(target: LOG_TARGET, "Matched {} <=> {}", uuid, account.name);
            return Ok(resolved(&account, ResolutionPath::Mapped));
        }

        if let Some(account) = self.email_candidate(email, &username).await? {
            match self.store.create_mapping(&Mapping::new(uuid, account.id)).await {
                Ok(()) => {}
                // At most one uuid per account; rebinding is an admin decision
                Err(CoreError::AccountAlreadyBound { .. }) => {
                    warn!(
                        target: LOG_TARGET,
                        "{} <=> {} is already bound to another identity, refusing {}",
                        email,
                        account.name,
                        uuid
                    );
                    return Err(AuthError::AccountAlreadyBound {
                        uuid: uuid.to_string(),
                        username: account.name,
                        email: email.to_string(),
                        location: ErrorLocation::from(Location::caller()),
                    });
                }
                Err(e) => return Err(e.into()),
            }
            info!(
                target: LOG_TARGET,
                "Matched {} <=> {}, bound to {}",
                email,
                account.name,
                uuid
            );
            return Ok(resolved(&account, ResolutionPath::EmailMatch));
        }

        // Never hand an unmapped identity an existing account by name alone
        if self.store.account_name_exists(&username).await? {
            warn!(
                target: LOG_TARGET,
                "User \"{}\" already exists but doesn't have email {}, refusing {}",
                username,
                email,
                uuid
            );
            return Err(AuthError::IdentityConflict {
                username,
                email: email.to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        info!(target: LOG_TARGET, "Authenticating {} as new user {}", uuid, username);
        Ok(Resolution::Resolved {
            identity: ResolvedIdentity::new(username, email),
            path: ResolutionPath::NewAccount,
        })
    }

    /// The confirmed account `email` should bind to, if any.
    async fn email_candidate(
        &self,
        email: &str,
        username: &str,
    ) -> AuthErrorResult<Option<LocalAccount>> {
        let mut confirmed: Vec<LocalAccount> = self
            .store
            .find_accounts_by_email(email)
            .await?
            .into_iter()
            .filter(|account| account.email_confirmed)
            .collect();

        debug!(
            target: LOG_TARGET,
            "Found {} confirmed matches for {}",
            confirmed.len(),
            email
        );

        if confirmed.len() <= 1 {
            return Ok(confirmed.pop());
        }

        let candidates = confirmed.len();
        match confirmed.into_iter().find(|account| account.name == username) {
            Some(account) => Ok(Some(account)),
            None => {
                warn!(
                    target: LOG_TARGET,
                    "{} confirmed accounts share {} and none is named {}",
                    candidates,
                    email,
                    username
                );
                Err(AuthError::AmbiguousEmailMatch {
                    email: email.to_string(),
                    username: username.to_string(),
                    candidates,
                    location: ErrorLocation::from(Location::caller()),
                })
            }
        }
    }
}

fn resolved(account: &LocalAccount, path: ResolutionPath) -> Resolution {
    Resolution::Resolved {
        identity: ResolvedIdentity::from(account),
        path,
    }
}
