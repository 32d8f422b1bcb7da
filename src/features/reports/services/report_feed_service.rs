//! Read-side queries over the report feed.

use std::sync::Arc;

use crate::core::error::Result;
use crate::features::reports::models::Report;
use crate::modules::store::CommunityStore;
use crate::shared::constants::MAX_FEED_LIMIT;

/// Service for the community report feed. Read-only; a stale read here only
/// delays a UI refresh, it never affects the confirmation invariants.
pub struct ReportFeedService {
    store: Arc<dyn CommunityStore>,
}

impl ReportFeedService {
    pub fn new(store: Arc<dyn CommunityStore>) -> Self {
        Self { store }
    }

    /// Most recent reports, newest first, at most `limit` entries.
    /// The limit is clamped to [1, MAX_FEED_LIMIT].
    pub async fn list_recent(&self, limit: i64) -> Result<Vec<Report>> {
        let limit = limit.clamp(1, MAX_FEED_LIMIT);
        self.store.reports_by_recency(limit).await
    }
}
