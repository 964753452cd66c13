use crate::Result as DbErrorResult;

use kc_core::LocalAccount;

use chrono::Utc;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

/// Read access to local accounts, plus the host-side operations used to
/// materialize an account after a "new identity" resolution.
#[derive(Clone)]
pub struct AccountRepository {
    pool: SqlitePool,
}

impl AccountRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: i64) -> DbErrorResult<Option<LocalAccount>> {
        let row = sqlx::query(
            r#"
                SELECT id, name, email, email_confirmed
                FROM users
                WHERE id = ?
                "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(account_from_row).transpose()
    }

    pub async fn find_by_name(&self, name: &str) -> DbErrorResult<Option<LocalAccount>> {
        let row = sqlx::query(
            r#"
                SELECT id, name, email, email_confirmed
                FROM users
                WHERE name = ?
                "#,
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(account_from_row).transpose()
    }

    /// All accounts registered with `email`, oldest first
    pub async fn find_by_email(&self, email: &str) -> DbErrorResult<Vec<LocalAccount>> {
        let rows = sqlx::query(
            r#"
                SELECT id, name, email, email_confirmed
                FROM users
                WHERE email = ?
                ORDER BY id
                "#,
        )
        .bind(email)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(account_from_row).collect()
    }

    pub async fn name_exists(&self, name: &str) -> DbErrorResult<bool> {
        let id: Option<i64> = sqlx::query_scalar("SELECT id FROM users WHERE name = ? LIMIT 1")
            .bind(name)
            .fetch_optional(&self.pool)
            .await?;

        Ok(id.is_some())
    }

    /// Insert a new account. A duplicate name surfaces as `DbError::UniqueViolation`.
    pub async fn create(
        &self,
        name: &str,
        email: &str,
        email_confirmed: bool,
    ) -> DbErrorResult<LocalAccount> {
        let created_at = Utc::now().timestamp();

        let result = sqlx::query(
            r#"
              INSERT INTO users (name, email, email_confirmed, created_at)
              VALUES (?, ?, ?, ?)
              "#,
        )
        .bind(name)
        .bind(email)
        .bind(email_confirmed)
        .bind(created_at)
        .execute(&self.pool)
        .await?;

        Ok(LocalAccount {
            id: result.last_insert_rowid(),
            name: name.to_string(),
            email: email.to_string(),
            email_confirmed,
        })
    }

    pub async fn confirm_email(&self, id: i64) -> DbErrorResult<bool> {
        let result = sqlx::query("UPDATE users SET email_confirmed = 1 WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

pub(crate) fn account_from_row(row: &SqliteRow) -> DbErrorResult<LocalAccount> {
    Ok(LocalAccount {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        email: row.try_get("email")?,
        email_confirmed: row.try_get("email_confirmed")?,
    })
}
