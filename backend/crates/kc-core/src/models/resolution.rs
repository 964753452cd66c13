use crate::ResolvedIdentity;

use std::fmt;
use std::net::IpAddr;

/// Which branch of the resolver produced an identity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionPath {
    /// An existing uuid mapping was found
    Mapped,
    /// A confirmed-email account was bound to the uuid
    EmailMatch,
    /// Nothing matched; the host must create the account
    NewAccount,
}

impl ResolutionPath {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mapped => "mapped",
            Self::EmailMatch => "email_match",
            Self::NewAccount => "new_account",
        }
    }
}

impl fmt::Display for ResolutionPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a request carries no usable identity. None of these are errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoIdentityReason {
    MissingPeerAddress,
    UntrustedPeer { peer: IpAddr },
    MissingAssertion { missing: Vec<&'static str> },
    UnsupportedSource { value: String },
}

impl fmt::Display for NoIdentityReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingPeerAddress => f.write_str("request peer address is not known"),
            Self::UntrustedPeer { peer } => write!(f, "peer {peer} is not a trusted proxy"),
            Self::MissingAssertion { missing } => {
                write!(f, "identity assertion is missing {}", missing.join(", "))
            }
            Self::UnsupportedSource { value } => {
                write!(f, "unsupported variable_type '{value}'")
            }
        }
    }
}

/// Outcome of resolving one request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Resolved {
        identity: ResolvedIdentity,
        path: ResolutionPath,
    },
    NoIdentity(NoIdentityReason),
}

impl Resolution {
    pub fn identity(&self) -> Option<&ResolvedIdentity> {
        match self {
            Self::Resolved { identity, .. } => Some(identity),
            Self::NoIdentity(_) => None,
        }
    }

    pub fn path(&self) -> Option<ResolutionPath> {
        match self {
            Self::Resolved { path, .. } => Some(*path),
            Self::NoIdentity(_) => None,
        }
    }

    /// Username, or an empty string when nothing resolved
    pub fn username(&self) -> &str {
        self.identity().map_or("", |identity| identity.username.as_str())
    }

    /// Email, or an empty string when nothing resolved
    pub fn email(&self) -> &str {
        self.identity().map_or("", |identity| identity.email.as_str())
    }
}
