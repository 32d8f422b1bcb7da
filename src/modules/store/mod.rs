//! Persistent store contract for the confirmation core.
//!
//! Services talk to the store through [`CommunityStore`] so the invariant
//! logic can be tested against an in-memory implementation while production
//! runs against Postgres.

mod pg_store;

#[cfg(test)]
pub mod memory;

use async_trait::async_trait;
use uuid::Uuid;

use crate::core::error::Result;
use crate::features::confirmations::models::UserStats;
use crate::features::reports::models::Report;

pub use pg_store::PgCommunityStore;

/// Result of attempting to record a confirmation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmationInsert {
    /// The confirmation row was inserted; both aggregates were updated in
    /// the same transaction. Carries the report's post-commit count.
    Inserted { confirmation_count: i32 },
    /// The (report_id, user_id) pair already existed; nothing was written.
    DuplicatePair,
}

/// Storage operations the confirmation core depends on.
///
/// `record_confirmation` is the single atomic entry point for writes: the
/// confirmation insert, the report counter increment and the user-stats
/// upsert must commit together or not at all. Both counter updates are
/// relative ("add 1"), never read-then-write, so concurrent confirmers of
/// the same report cannot lose updates.
#[async_trait]
pub trait CommunityStore: Send + Sync {
    /// Owner (reporting user) of a report, or `None` if the report does not exist.
    async fn report_owner(&self, report_id: Uuid) -> Result<Option<String>>;

    /// Atomically insert the confirmation row, increment the report's
    /// confirmation count and upsert the confirming user's score. A
    /// duplicate (report_id, user_id) pair is detected by the store's
    /// uniqueness constraint and reported as
    /// [`ConfirmationInsert::DuplicatePair`] with no state change.
    async fn record_confirmation(
        &self,
        report_id: Uuid,
        user_id: &str,
    ) -> Result<ConfirmationInsert>;

    /// Reports ordered by creation time descending, at most `limit` rows.
    async fn reports_by_recency(&self, limit: i64) -> Result<Vec<Report>>;

    /// Ids of all reports the given user has confirmed.
    async fn confirmed_report_ids(&self, user_id: &str) -> Result<Vec<Uuid>>;

    /// Stats row for the user; `None` until their first confirmation.
    async fn user_stats(&self, user_id: &str) -> Result<Option<UserStats>>;
}
