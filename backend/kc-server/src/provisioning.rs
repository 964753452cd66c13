//! Host-side account creation after a "new identity" resolution.
//!
//! The resolver never writes an account itself. Once the account exists,
//! the next request for the same uuid binds to it through the confirmed
//! email match and gets a mapping row.

use crate::{ApiError, ApiResult};

use kc_auth::LOG_TARGET;
use kc_core::{LocalAccount, ResolvedIdentity};
use kc_db::{AccountRepository, DbError};

use std::panic::Location;

use error_location::ErrorLocation;
use log::{debug, info, warn};

/// Create the local account for `identity`.
///
/// The email is recorded as confirmed: the identity provider vouched for it.
/// The name may have been taken after resolution checked it; such an account
/// is only accepted when it is the one this identity would have created.
pub async fn materialize(
    accounts: &AccountRepository,
    identity: &ResolvedIdentity,
) -> ApiResult<()> {
    if let Some(existing) = accounts.find_by_name(&identity.username).await? {
        return claim_existing(&existing, identity);
    }

    match accounts.create(&identity.username, &identity.email, true).await {
        Ok(account) => {
            info!(
                target: LOG_TARGET,
                "Created local account {} ({}) for {}",
                account.name,
                account.id,
                account.email
            );
            Ok(())
        }
        Err(e @ DbError::UniqueViolation { .. }) => {
            match accounts.find_by_name(&identity.username).await? {
                Some(existing) => claim_existing(&existing, identity),
                None => Err(e.into()),
            }
        }
        Err(e) => Err(e.into()),
    }
}

/// A concurrent first request of the same identity leaves behind exactly
/// the account it would create: same name, same confirmed email.
#[track_caller]
fn claim_existing(existing: &LocalAccount, identity: &ResolvedIdentity) -> ApiResult<()> {
    if existing.email_confirmed && existing.email == identity.email {
        debug!(
            target: LOG_TARGET,
            "Local account {} was created concurrently",
            existing.name
        );
        return Ok(());
    }

    warn!(
        target: LOG_TARGET,
        "User \"{}\" appeared before it could be created and doesn't have email {}, refusing",
        existing.name,
        identity.email
    );
    Err(ApiError::IdentityConflict {
        message: format!(
            "User \"{}\" already exists but doesn't have email {}",
            existing.name, identity.email
        ),
        location: ErrorLocation::from(Location::caller()),
    })
}
