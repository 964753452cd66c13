use crate::LocalAccount;

use serde::{Deserialize, Serialize};

/// Username and email the host should use as the session principal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedIdentity {
    pub username: String,
    pub email: String,
}

impl ResolvedIdentity {
    pub fn new(username: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
        }
    }
}

impl From<&LocalAccount> for ResolvedIdentity {
    fn from(account: &LocalAccount) -> Self {
        Self {
            username: account.name.clone(),
            email: account.email.clone(),
        }
    }
}
