use serde::{Deserialize, Serialize};

/// Persistent uuid -> account binding. Written once, never updated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mapping {
    pub uuid: String,
    pub local_account_id: i64,
}

impl Mapping {
    pub fn new(uuid: impl Into<String>, local_account_id: i64) -> Self {
        Self {
            uuid: uuid.into(),
            local_account_id,
        }
    }
}
