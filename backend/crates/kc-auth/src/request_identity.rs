use crate::{IdentityResolver, Result as AuthErrorResult};

use kc_core::Resolution;

use std::net::IpAddr;
use std::sync::Arc;

use http::HeaderMap;
use tokio::sync::OnceCell;

/// Per-request handle that resolves at most once.
///
/// A successful resolution (including `NoIdentity`) is kept for the life of
/// the handle; a failure is returned to the caller and not cached.
pub struct RequestIdentity {
    resolver: Arc<IdentityResolver>,
    peer: Option<IpAddr>,
    headers: HeaderMap,
    resolution: OnceCell<Resolution>,
}

impl RequestIdentity {
    pub fn new(resolver: Arc<IdentityResolver>, peer: Option<IpAddr>, headers: HeaderMap) -> Self {
        Self {
            resolver,
            peer,
            headers,
            resolution: OnceCell::new(),
        }
    }

    pub async fn resolution(&self) -> AuthErrorResult<&Resolution> {
        self.resolution
            .get_or_try_init(|| self.resolver.resolve_request(self.peer, &self.headers))
            .await
    }

    /// Resolved username, empty when the request carries no identity
    pub async fn username(&self) -> AuthErrorResult<String> {
        Ok(self.resolution().await?.username().to_string())
    }

    /// Resolved email, empty when the request carries no identity
    pub async fn email(&self) -> AuthErrorResult<String> {
        Ok(self.resolution().await?.email().to_string())
    }

    pub fn asserted_email(&self) -> AuthErrorResult<String> {
        self.resolver.asserted_email(self.peer, &self.headers)
    }

    pub fn is_resolved(&self) -> bool {
        self.resolution.initialized()
    }
}
