use crate::IdentityState;

use kc_config::KeycloakConfig;

use axum::{Json, extract::State};
use serde::Serialize;

/// Identity-provider pages the host UI links to in place of its own
/// login, logout and account-management pages
#[derive(Debug, Clone, Default, Serialize)]
pub struct PortalLinks {
    pub login_url: Option<String>,
    pub logout_url: Option<String>,
    pub portal_url: Option<String>,
}

impl From<&KeycloakConfig> for PortalLinks {
    fn from(config: &KeycloakConfig) -> Self {
        Self {
            login_url: config.login_url.clone(),
            logout_url: config.logout_url.clone(),
            portal_url: config.portal_url.clone(),
        }
    }
}

/// GET /links
pub async fn portal_links(State(state): State<IdentityState>) -> Json<PortalLinks> {
    Json(state.links)
}
