use serde::{Deserialize, Serialize};

/// A row of the host's account table, read-only from the resolver's side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalAccount {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub email_confirmed: bool,
}
