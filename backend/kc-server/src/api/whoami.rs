use crate::AssertedIdentity;

use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct WhoAmIResponse {
    pub username: String,
    pub email: String,
    /// "mapped", "email_match" or "new_account"
    pub resolved_by: String,
}

/// GET /whoami
pub async fn whoami(asserted: AssertedIdentity) -> Json<WhoAmIResponse> {
    Json(WhoAmIResponse {
        username: asserted.identity.username,
        email: asserted.identity.email,
        resolved_by: asserted.path.as_str().to_string(),
    })
}
