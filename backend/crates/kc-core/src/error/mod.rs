use crate::ErrorLocation;

use std::panic::Location;
use std::result::Result as StdResult;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid trusted proxy '{value}': {message} {location}")]
    InvalidTrustedProxy {
        value: String,
        message: String,
        location: ErrorLocation,
    },

    /// The store refused a second mapping for a uuid that is already bound.
    #[error("Identity {uuid} is already mapped to a local account {location}")]
    DuplicateMapping {
        uuid: String,
        location: ErrorLocation,
    },

    /// The candidate account is already bound to a different uuid.
    #[error("Local account {account_id} is already mapped to another identity {location}")]
    AccountAlreadyBound {
        account_id: i64,
        location: ErrorLocation,
    },

    /// The account/mapping store could not be reached or failed mid-query.
    #[error("Identity store unavailable: {message} {location}")]
    Store {
        message: String,
        location: ErrorLocation,
    },
}

impl CoreError {
    #[track_caller]
    pub fn store<S: Into<String>>(message: S) -> Self {
        Self::Store {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn duplicate_mapping<S: Into<String>>(uuid: S) -> Self {
        Self::DuplicateMapping {
            uuid: uuid.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn account_already_bound(account_id: i64) -> Self {
        Self::AccountAlreadyBound {
            account_id,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
