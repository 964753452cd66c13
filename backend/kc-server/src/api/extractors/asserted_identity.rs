//! Axum extractors for the proxy-asserted identity

use crate::{ApiError, IdentityState, provisioning};

use kc_auth::RequestIdentity;
use kc_core::{NoIdentityReason, Resolution, ResolutionPath, ResolvedIdentity};

use std::future::Future;
use std::net::SocketAddr;
use std::panic::Location;
use std::sync::Arc;

use axum::{
    extract::{ConnectInfo, FromRequestParts},
    http::request::Parts,
};
use error_location::ErrorLocation;

/// The local account behind the request.
///
/// Rejects with 401 when the request carries no trusted identity and with
/// 403 on an identity conflict or ambiguous email.
#[derive(Debug, Clone)]
pub struct AssertedIdentity {
    pub identity: ResolvedIdentity,
    pub path: ResolutionPath,
}

/// The email the proxy asserted, without any account lookup
#[derive(Debug, Clone)]
pub struct AssertedEmail(pub String);

/// Resolution handle shared by every extractor in one request
pub(crate) fn request_identity(parts: &mut Parts, state: &IdentityState) -> Arc<RequestIdentity> {
    if let Some(existing) = parts.extensions.get::<Arc<RequestIdentity>>() {
        return existing.clone();
    }

    let peer = parts
        .extensions
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip());

    let identity = Arc::new(RequestIdentity::new(
        state.resolver.clone(),
        peer,
        parts.headers.clone(),
    ));
    parts.extensions.insert(identity.clone());
    identity
}

impl FromRequestParts<IdentityState> for AssertedIdentity {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &IdentityState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        let request = request_identity(parts, state);

        async move {
            match request.resolution().await? {
                Resolution::Resolved { identity, path } => {
                    if *path == ResolutionPath::NewAccount && state.auto_create_accounts {
                        provisioning::materialize(&state.accounts, identity).await?;
                    }

                    Ok(AssertedIdentity {
                        identity: identity.clone(),
                        path: *path,
                    })
                }
                Resolution::NoIdentity(reason) => Err(not_authenticated(reason)),
            }
        }
    }
}

impl FromRequestParts<IdentityState> for AssertedEmail {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &IdentityState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        let request = request_identity(parts, state);

        async move { Ok(AssertedEmail(request.asserted_email()?)) }
    }
}

#[track_caller]
fn not_authenticated(reason: &NoIdentityReason) -> ApiError {
    ApiError::NotAuthenticated {
        message: reason.to_string(),
        location: ErrorLocation::from(Location::caller()),
    }
}
