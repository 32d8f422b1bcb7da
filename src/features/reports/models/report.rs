use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for a road-hazard report.
///
/// `status` and `priority` are carried as stored tags rather than closed
/// enums: presentation classification must map values it does not recognize
/// to a neutral class instead of failing to deserialize the row.
#[derive(Debug, Clone, FromRow)]
pub struct Report {
    pub id: Uuid,
    /// Identity-provider subject of the reporting user (the owner)
    pub user_id: String,
    pub issue_type: String,
    pub description: String,
    pub image_url: Option<String>,
    pub priority: String,
    pub status: String,
    /// Number of distinct users who confirmed this report. Mutated only by
    /// the confirmation transaction, always as a relative increment.
    pub confirmation_count: i32,
    pub created_at: DateTime<Utc>,
}
