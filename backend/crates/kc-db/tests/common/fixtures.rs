use kc_core::LocalAccount;
use kc_db::AccountRepository;

use sqlx::SqlitePool;

/// Inserts an account with a confirmed email
pub async fn create_confirmed_account(pool: &SqlitePool, name: &str, email: &str) -> LocalAccount {
    AccountRepository::new(pool.clone())
        .create(name, email, true)
        .await
        .expect("Failed to create confirmed account")
}

/// Inserts an account whose email was never confirmed
pub async fn create_unconfirmed_account(
    pool: &SqlitePool,
    name: &str,
    email: &str,
) -> LocalAccount {
    AccountRepository::new(pool.clone())
        .create(name, email, false)
        .await
        .expect("Failed to create unconfirmed account")
}
