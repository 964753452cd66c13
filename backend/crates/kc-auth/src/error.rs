use kc_core::{CoreError, ErrorLocation, NoIdentityReason};

use std::panic::Location;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Several confirmed accounts share the email and none carries the
    /// asserted username.
    #[error(
        "Email {email} matches {candidates} confirmed accounts and none is named \"{username}\". Authentication aborted {location}"
    )]
    AmbiguousEmailMatch {
        email: String,
        username: String,
        candidates: usize,
        location: ErrorLocation,
    },

    /// A new identity would take over an existing, unrelated account.
    #[error(
        "User \"{username}\" already exists but doesn't have email {email}. Authentication aborted for security reasons {location}"
    )]
    IdentityConflict {
        username: String,
        email: String,
        location: ErrorLocation,
    },

    /// The email-matched account is already bound to a different uuid.
    #[error(
        "Account \"{username}\" with email {email} is already bound to another identity; refusing to bind {uuid}. An administrator must review the keycloak_user mapping {location}"
    )]
    AccountAlreadyBound {
        uuid: String,
        username: String,
        email: String,
        location: ErrorLocation,
    },

    #[error("No asserted identity: {reason} {location}")]
    NotAuthenticated {
        reason: NoIdentityReason,
        location: ErrorLocation,
    },

    #[error("Identity store error: {source} {location}")]
    Store {
        #[source]
        source: CoreError,
        location: ErrorLocation,
    },
}

impl AuthError {
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::AmbiguousEmailMatch { .. } => "AMBIGUOUS_EMAIL",
            Self::IdentityConflict { .. } => "IDENTITY_CONFLICT",
            Self::AccountAlreadyBound { .. } => "ACCOUNT_ALREADY_BOUND",
            Self::NotAuthenticated { .. } => "NOT_AUTHENTICATED",
            Self::Store { .. } => "STORE_UNAVAILABLE",
        }
    }

    /// Failures that must abort authentication outright rather than fall
    /// back to an anonymous request.
    pub fn is_hard_failure(&self) -> bool {
        matches!(
            self,
            Self::AmbiguousEmailMatch { .. }
                | Self::IdentityConflict { .. }
                | Self::AccountAlreadyBound { .. }
        )
    }

    #[track_caller]
    pub fn not_authenticated(reason: NoIdentityReason) -> Self {
        Self::NotAuthenticated {
            reason,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<CoreError> for AuthError {
    #[track_caller]
    fn from(source: CoreError) -> Self {
        Self::Store {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
