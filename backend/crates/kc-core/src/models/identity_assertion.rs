use serde::{Deserialize, Serialize};

pub const UUID_FIELD: &str = "uuid";
pub const EMAIL_FIELD: &str = "email";
pub const USERNAME_FIELD: &str = "preferred_username";

/// Identity claimed by the upstream proxy for a single request.
///
/// Every field is optional because the source (headers or environment) may
/// omit any of them. Empty values count as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityAssertion {
    pub uuid: Option<String>,
    pub email: Option<String>,
    pub preferred_username: Option<String>,
}

impl IdentityAssertion {
    pub fn new(
        uuid: Option<String>,
        email: Option<String>,
        preferred_username: Option<String>,
    ) -> Self {
        Self {
            uuid: present(uuid),
            email: present(email),
            preferred_username: present(preferred_username),
        }
    }

    /// Returns `(uuid, email, preferred_username)` only when all three are present.
    pub fn complete(&self) -> Option<(&str, &str, &str)> {
        match (
            self.uuid.as_deref().filter(|v| !v.is_empty()),
            self.email.as_deref().filter(|v| !v.is_empty()),
            self.preferred_username.as_deref().filter(|v| !v.is_empty()),
        ) {
            (Some(uuid), Some(email), Some(username)) => Some((uuid, email, username)),
            _ => None,
        }
    }

    /// Names of the fields that are absent, in declaration order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            (UUID_FIELD, &self.uuid),
            (EMAIL_FIELD, &self.email),
            (USERNAME_FIELD, &self.preferred_username),
        ]
        .into_iter()
        .filter(|(_, value)| value.as_deref().is_none_or(str::is_empty))
        .map(|(name, _)| name)
        .collect()
    }
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
