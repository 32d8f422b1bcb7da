use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::confirmations::models::UserStats;
use crate::features::reports::models::Report;
use crate::shared::constants::POINTS_PER_CONFIRMATION;

use super::{CommunityStore, ConfirmationInsert};

/// Postgres-backed store.
///
/// Uses sqlx's runtime-checked query API so the crate builds without a live
/// database; the schema lives in `migrations/`.
pub struct PgCommunityStore {
    pool: PgPool,
}

impl PgCommunityStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommunityStore for PgCommunityStore {
    async fn report_owner(&self, report_id: Uuid) -> Result<Option<String>> {
        sqlx::query_scalar::<_, String>("SELECT user_id FROM reports WHERE id = $1")
            .bind(report_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to look up report owner: {:?}", e);
                AppError::Database(e)
            })
    }

    async fn record_confirmation(
        &self,
        report_id: Uuid,
        user_id: &str,
    ) -> Result<ConfirmationInsert> {
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;

        // The composite primary key on (report_id, user_id) resolves races
        // between concurrent attempts for the same pair: exactly one insert
        // wins, the rest see zero rows affected.
        let inserted = sqlx::query(
            r#"
            INSERT INTO report_confirmations (report_id, user_id)
            VALUES ($1, $2)
            ON CONFLICT (report_id, user_id) DO NOTHING
            "#,
        )
        .bind(report_id)
        .bind(user_id)
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            tracing::error!("Failed to insert confirmation: {:?}", e);
            AppError::Database(e)
        })?;

        if inserted.rows_affected() == 0 {
            tx.rollback().await.map_err(AppError::Database)?;
            return Ok(ConfirmationInsert::DuplicatePair);
        }

        // Relative increments keep concurrent confirmations of the same
        // report from losing updates. The report may have been deleted
        // since the caller's owner check; that is a missing report, not a
        // storage failure.
        let confirmation_count = sqlx::query_scalar::<_, i32>(
            r#"
            UPDATE reports
            SET confirmation_count = confirmation_count + 1
            WHERE id = $1
            RETURNING confirmation_count
            "#,
        )
        .bind(report_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| {
            tracing::error!("Failed to increment confirmation count: {:?}", e);
            AppError::Database(e)
        })?;

        let Some(confirmation_count) = confirmation_count else {
            tx.rollback().await.map_err(AppError::Database)?;
            return Err(AppError::NotFound(format!("Report {} not found", report_id)));
        };

        sqlx::query(
            r#"
            INSERT INTO user_stats (user_id, score)
            VALUES ($1, $2)
            ON CONFLICT (user_id)
            DO UPDATE SET score = user_stats.score + $2, updated_at = now()
            "#,
        )
        .bind(user_id)
        .bind(POINTS_PER_CONFIRMATION)
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            tracing::error!("Failed to upsert user stats: {:?}", e);
            AppError::Database(e)
        })?;

        tx.commit().await.map_err(AppError::Database)?;

        Ok(ConfirmationInsert::Inserted { confirmation_count })
    }

    async fn reports_by_recency(&self, limit: i64) -> Result<Vec<Report>> {
        sqlx::query_as::<_, Report>(
            r#"
            SELECT id, user_id, issue_type, description, image_url,
                   priority, status, confirmation_count, created_at
            FROM reports
            ORDER BY created_at DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list reports: {:?}", e);
            AppError::Database(e)
        })
    }

    async fn confirmed_report_ids(&self, user_id: &str) -> Result<Vec<Uuid>> {
        sqlx::query_scalar::<_, Uuid>(
            "SELECT report_id FROM report_confirmations WHERE user_id = $1",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list user confirmations: {:?}", e);
            AppError::Database(e)
        })
    }

    async fn user_stats(&self, user_id: &str) -> Result<Option<UserStats>> {
        sqlx::query_as::<_, UserStats>(
            "SELECT user_id, score, updated_at FROM user_stats WHERE user_id = $1",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch user stats: {:?}", e);
            AppError::Database(e)
        })
    }
}
