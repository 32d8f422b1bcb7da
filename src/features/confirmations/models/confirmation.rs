use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Join record stating that `user_id` corroborated `report_id`.
///
/// The (report_id, user_id) pair is the composite primary key in the store;
/// that constraint, not application code, enforces the at-most-once rule.
#[derive(Debug, Clone, FromRow)]
#[allow(dead_code)]
pub struct Confirmation {
    pub report_id: Uuid,
    pub user_id: String,
    pub created_at: DateTime<Utc>,
}
