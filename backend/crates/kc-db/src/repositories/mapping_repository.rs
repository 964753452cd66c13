use crate::repositories::account_repository::account_from_row;
use crate::Result as DbErrorResult;

use kc_core::{LocalAccount, Mapping};

use chrono::Utc;
use sqlx::{Row, SqlitePool};

/// The `keycloak_user` table: one row per bound identity-provider uuid.
#[derive(Clone)]
pub struct MappingRepository {
    pool: SqlitePool,
}

impl MappingRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Account bound to `uuid`, with its current name and email
    pub async fn find_account_by_uuid(&self, uuid: &str) -> DbErrorResult<Option<LocalAccount>> {
        let row = sqlx::query(
            r#"
                SELECT u.id, u.name, u.email, u.email_confirmed
                FROM keycloak_user ku
                JOIN users u ON ku.ku_user = u.id
                WHERE ku.ku_uuid = ?
                "#,
        )
        .bind(uuid)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(account_from_row).transpose()
    }

    pub async fn find_by_uuid(&self, uuid: &str) -> DbErrorResult<Option<Mapping>> {
        let row = sqlx::query("SELECT ku_uuid, ku_user FROM keycloak_user WHERE ku_uuid = ?")
            .bind(uuid)
            .fetch_optional(&self.pool)
            .await?;

        row.map(|r| -> DbErrorResult<Mapping> {
            Ok(Mapping {
                uuid: r.try_get("ku_uuid")?,
                local_account_id: r.try_get("ku_user")?,
            })
        })
        .transpose()
    }

    pub async fn find_by_account(&self, account_id: i64) -> DbErrorResult<Option<Mapping>> {
        let row = sqlx::query("SELECT ku_uuid, ku_user FROM keycloak_user WHERE ku_user = ?")
            .bind(account_id)
            .fetch_optional(&self.pool)
            .await?;

        row.map(|r| -> DbErrorResult<Mapping> {
            Ok(Mapping {
                uuid: r.try_get("ku_uuid")?,
                local_account_id: r.try_get("ku_user")?,
            })
        })
        .transpose()
    }

    /// Plain insert. There is no upsert: a second row for the same uuid (or
    /// the same account) is rejected by the table's unique keys.
    pub async fn create(&self, mapping: &Mapping) -> DbErrorResult<()> {
        let created_at = Utc::now().timestamp();

        sqlx::query(
            r#"
              INSERT INTO keycloak_user (ku_uuid, ku_user, created_at)
              VALUES (?, ?, ?)
              "#,
        )
        .bind(&mapping.uuid)
        .bind(mapping.local_account_id)
        .bind(created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn count(&self) -> DbErrorResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM keycloak_user")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}
