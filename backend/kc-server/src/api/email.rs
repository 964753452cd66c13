use crate::AssertedEmail;

use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct EmailResponse {
    pub email: String,
}

/// GET /email - the proxy-asserted email, no account lookup
pub async fn asserted_email(AssertedEmail(email): AssertedEmail) -> Json<EmailResponse> {
    Json(EmailResponse { email })
}
