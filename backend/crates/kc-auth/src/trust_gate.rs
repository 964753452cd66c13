use crate::LOG_TARGET;

use kc_core::{NoIdentityReason, TrustedProxy};

use std::net::IpAddr;

use log::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrustDecision {
    Trusted,
    Denied(NoIdentityReason),
}

impl TrustDecision {
    pub fn is_trusted(&self) -> bool {
        matches!(self, Self::Trusted)
    }
}

/// Decides whether the direct peer may assert identity through headers.
///
/// Denial is never an error: the request simply proceeds unauthenticated.
#[derive(Debug, Clone)]
pub struct TrustGate {
    insecure_headers: bool,
    trusted_proxies: Vec<TrustedProxy>,
}

impl TrustGate {
    pub fn new(insecure_headers: bool, trusted_proxies: Vec<TrustedProxy>) -> Self {
        Self {
            insecure_headers,
            trusted_proxies,
        }
    }

    pub fn evaluate(&self, peer: Option<IpAddr>) -> TrustDecision {
        // An unknown peer is refused even in insecure mode
        let Some(peer) = peer else {
            debug!(target: LOG_TARGET, "Request IP is not specified, skipping auth");
            return TrustDecision::Denied(NoIdentityReason::MissingPeerAddress);
        };

        if self.insecure_headers || self.is_trusted_proxy(peer) {
            return TrustDecision::Trusted;
        }

        debug!(
            target: LOG_TARGET,
            "Upstream IP {} is not a trusted proxy, skipping auth",
            peer
        );
        TrustDecision::Denied(NoIdentityReason::UntrustedPeer { peer })
    }

    pub fn is_trusted_proxy(&self, peer: IpAddr) -> bool {
        self.trusted_proxies.iter().any(|proxy| proxy.contains(peer))
    }
}
