use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Per-user contribution aggregate.
///
/// Created lazily on a user's first confirmation and mutated only inside the
/// confirmation transaction, so `score` always equals the number of
/// confirmations the user has made.
#[derive(Debug, Clone, FromRow)]
pub struct UserStats {
    pub user_id: String,
    pub score: i32,
    pub updated_at: DateTime<Utc>,
}
