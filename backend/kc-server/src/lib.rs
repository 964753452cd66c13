pub mod api;
pub mod error;
pub mod health;
pub mod logger;
pub mod provisioning;
pub mod routes;
pub mod state;


pub use api::{
    email::{EmailResponse, asserted_email},
    error::ApiError,
    error::Result as ApiResult,
    extractors::asserted_identity::{AssertedEmail, AssertedIdentity},
    links::{PortalLinks, portal_links},
    whoami::{WhoAmIResponse, whoami},
};
pub use error::{Result as ServerErrorResult, ServerError};
pub use routes::build_router;
pub use state::IdentityState;
