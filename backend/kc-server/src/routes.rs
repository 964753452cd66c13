use crate::{IdentityState, asserted_email, health, portal_links, whoami};

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

pub fn build_router(state: IdentityState) -> Router {
    Router::new()
        // Identity endpoints
        .route("/whoami", get(whoami))
        .route("/email", get(asserted_email))
        .route("/links", get(portal_links))
        // Health check endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
