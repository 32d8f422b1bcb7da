//! In-memory [`CommunityStore`] used by tests.
//!
//! A single mutex over the whole state makes `record_confirmation` atomic,
//! mirroring the transactional guarantee the Postgres store gets from its
//! composite primary key and single transaction.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::core::error::Result;
use crate::features::confirmations::models::{Confirmation, UserStats};
use crate::features::reports::models::Report;
use crate::shared::constants::POINTS_PER_CONFIRMATION;

use super::{CommunityStore, ConfirmationInsert};

#[derive(Default)]
struct MemoryState {
    reports: HashMap<Uuid, Report>,
    confirmations: HashMap<(Uuid, String), Confirmation>,
    stats: HashMap<String, UserStats>,
}

#[derive(Default)]
pub struct MemoryStore {
    state: Mutex<MemoryState>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert_report(&self, report: Report) {
        let mut state = self.state.lock().await;
        state.reports.insert(report.id, report);
    }

    pub async fn confirmation_count(&self, report_id: Uuid) -> Option<i32> {
        let state = self.state.lock().await;
        state.reports.get(&report_id).map(|r| r.confirmation_count)
    }

    pub async fn confirmation_rows(&self, report_id: Uuid) -> usize {
        let state = self.state.lock().await;
        state
            .confirmations
            .values()
            .filter(|c| c.report_id == report_id)
            .count()
    }
}

/// Build a report with the given owner and creation time; everything else
/// takes placeholder values.
pub fn sample_report(owner: &str, created_at: DateTime<Utc>) -> Report {
    Report {
        id: Uuid::new_v4(),
        user_id: owner.to_string(),
        issue_type: "Pothole".to_string(),
        description: "Deep pothole near the crossing".to_string(),
        image_url: None,
        priority: "Medium".to_string(),
        status: "Pending".to_string(),
        confirmation_count: 0,
        created_at,
    }
}

#[async_trait]
impl CommunityStore for MemoryStore {
    async fn report_owner(&self, report_id: Uuid) -> Result<Option<String>> {
        let state = self.state.lock().await;
        Ok(state.reports.get(&report_id).map(|r| r.user_id.clone()))
    }

    async fn record_confirmation(
        &self,
        report_id: Uuid,
        user_id: &str,
    ) -> Result<ConfirmationInsert> {
        let mut state = self.state.lock().await;

        let key = (report_id, user_id.to_string());
        if state.confirmations.contains_key(&key) {
            return Ok(ConfirmationInsert::DuplicatePair);
        }

        // Same contract as the Postgres store: a report that vanished
        // before the write is a NotFound, and nothing is recorded.
        let confirmation_count = {
            let report = state.reports.get_mut(&report_id).ok_or_else(|| {
                crate::core::error::AppError::NotFound(format!("Report {} not found", report_id))
            })?;
            report.confirmation_count += 1;
            report.confirmation_count
        };

        state.confirmations.insert(
            key,
            Confirmation {
                report_id,
                user_id: user_id.to_string(),
                created_at: Utc::now(),
            },
        );

        let stats = state
            .stats
            .entry(user_id.to_string())
            .or_insert_with(|| UserStats {
                user_id: user_id.to_string(),
                score: 0,
                updated_at: Utc::now(),
            });
        stats.score += POINTS_PER_CONFIRMATION;
        stats.updated_at = Utc::now();

        Ok(ConfirmationInsert::Inserted { confirmation_count })
    }

    async fn reports_by_recency(&self, limit: i64) -> Result<Vec<Report>> {
        let state = self.state.lock().await;
        let mut reports: Vec<Report> = state.reports.values().cloned().collect();
        reports.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        reports.truncate(limit.max(0) as usize);
        Ok(reports)
    }

    async fn confirmed_report_ids(&self, user_id: &str) -> Result<Vec<Uuid>> {
        let state = self.state.lock().await;
        Ok(state
            .confirmations
            .values()
            .filter(|c| c.user_id == user_id)
            .map(|c| c.report_id)
            .collect())
    }

    async fn user_stats(&self, user_id: &str) -> Result<Option<UserStats>> {
        let state = self.state.lock().await;
        Ok(state.stats.get(user_id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::AppError;

    #[tokio::test]
    async fn test_recording_against_missing_report_is_not_found() {
        let store = MemoryStore::new();
        let missing_id = Uuid::new_v4();

        let result = store.record_confirmation(missing_id, "citizen-1").await;
        assert!(matches!(result, Err(AppError::NotFound(_))));

        // Nothing may be recorded for the failed attempt
        assert_eq!(store.confirmation_rows(missing_id).await, 0);
        assert!(store.user_stats("citizen-1").await.unwrap().is_none());
    }
}
