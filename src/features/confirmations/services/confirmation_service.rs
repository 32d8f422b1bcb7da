//! Confirmation Service - crowd confirmation and contributor scoring
//!
//! Enforces the at-most-once confirmation rule and performs the atomic dual
//! update of the report's confirmation count and the confirming user's
//! score. Self-confirmation and duplicate confirmation are explicit typed
//! outcomes here; the presentation layer only hides buttons, it never
//! carries an invariant.

use std::sync::Arc;

use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::confirmations::models::UserStats;
use crate::modules::store::{CommunityStore, ConfirmationInsert};

/// Result of a confirmation attempt that reached the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmationOutcome {
    /// First confirmation by this user for this report; both aggregates
    /// were updated in one transaction.
    Confirmed { confirmation_count: i32 },
    /// The user had already confirmed this report. Nothing was written, so
    /// repeated clicks are harmless.
    AlreadyConfirmed,
}

pub struct ConfirmationService {
    store: Arc<dyn CommunityStore>,
}

impl ConfirmationService {
    pub fn new(store: Arc<dyn CommunityStore>) -> Self {
        Self { store }
    }

    /// Record that `user_id` confirms `report_id`.
    ///
    /// Fails with `NotFound` for an unknown report and `Forbidden` when a
    /// user tries to confirm their own report. A duplicate confirmation is
    /// not an error: it returns [`ConfirmationOutcome::AlreadyConfirmed`]
    /// without touching the store, relying on the (report_id, user_id)
    /// uniqueness constraint to resolve concurrent duplicates.
    pub async fn confirm(&self, report_id: Uuid, user_id: &str) -> Result<ConfirmationOutcome> {
        let owner = self
            .store
            .report_owner(report_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Report {} not found", report_id)))?;

        if owner == user_id {
            return Err(AppError::Forbidden(
                "You cannot confirm your own report".to_string(),
            ));
        }

        match self.store.record_confirmation(report_id, user_id).await? {
            ConfirmationInsert::Inserted { confirmation_count } => {
                tracing::info!(
                    "Report confirmed: report_id={}, user_id={}, count={}",
                    report_id,
                    user_id,
                    confirmation_count
                );
                Ok(ConfirmationOutcome::Confirmed { confirmation_count })
            }
            ConfirmationInsert::DuplicatePair => Ok(ConfirmationOutcome::AlreadyConfirmed),
        }
    }

    /// Ids of reports the user has already confirmed. The presentation
    /// layer uses this to hide the confirm action; the store constraint
    /// remains the source of truth.
    pub async fn confirmed_report_ids(&self, user_id: &str) -> Result<Vec<Uuid>> {
        self.store.confirmed_report_ids(user_id).await
    }

    /// The user's contribution stats, or `None` if they have never
    /// confirmed anything.
    pub async fn user_stats(&self, user_id: &str) -> Result<Option<UserStats>> {
        self.store.user_stats(user_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::store::memory::{sample_report, MemoryStore};
    use chrono::Utc;

    fn service_with_store() -> (ConfirmationService, Arc<MemoryStore>) {
        let store = Arc::new(MemoryStore::new());
        (ConfirmationService::new(store.clone()), store)
    }

    #[tokio::test]
    async fn test_first_confirmation_updates_both_aggregates() {
        let (service, store) = service_with_store();
        let report = sample_report("owner-1", Utc::now());
        let report_id = report.id;
        store.insert_report(report).await;

        let outcome = service.confirm(report_id, "user-2").await.unwrap();

        assert_eq!(
            outcome,
            ConfirmationOutcome::Confirmed {
                confirmation_count: 1
            }
        );
        assert_eq!(store.confirmation_count(report_id).await, Some(1));
        let stats = service.user_stats("user-2").await.unwrap().unwrap();
        assert_eq!(stats.score, 1);
    }

    #[tokio::test]
    async fn test_second_confirmation_is_idempotent() {
        let (service, store) = service_with_store();
        let report = sample_report("owner-1", Utc::now());
        let report_id = report.id;
        store.insert_report(report).await;

        service.confirm(report_id, "user-2").await.unwrap();
        let second = service.confirm(report_id, "user-2").await.unwrap();

        assert_eq!(second, ConfirmationOutcome::AlreadyConfirmed);
        assert_eq!(store.confirmation_count(report_id).await, Some(1));
        assert_eq!(store.confirmation_rows(report_id).await, 1);
        let stats = service.user_stats("user-2").await.unwrap().unwrap();
        assert_eq!(stats.score, 1);
    }

    #[tokio::test]
    async fn test_self_confirmation_is_rejected_and_writes_nothing() {
        let (service, store) = service_with_store();
        let report = sample_report("owner-1", Utc::now());
        let report_id = report.id;
        store.insert_report(report).await;

        let err = service.confirm(report_id, "owner-1").await.unwrap_err();

        assert!(matches!(err, AppError::Forbidden(_)));
        assert_eq!(store.confirmation_count(report_id).await, Some(0));
        assert_eq!(store.confirmation_rows(report_id).await, 0);
        assert!(service.user_stats("owner-1").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_unknown_report_is_not_found() {
        let (service, _store) = service_with_store();

        let err = service.confirm(Uuid::new_v4(), "user-2").await.unwrap_err();

        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_confirmed_scenario_from_count_three() {
        // Report with three prior confirmations; a fourth user confirms.
        let (service, store) = service_with_store();
        let report = sample_report("u1", Utc::now());
        let report_id = report.id;
        store.insert_report(report).await;
        for i in 0..3 {
            service
                .confirm(report_id, &format!("prior-{}", i))
                .await
                .unwrap();
        }

        let outcome = service.confirm(report_id, "u2").await.unwrap();
        assert_eq!(
            outcome,
            ConfirmationOutcome::Confirmed {
                confirmation_count: 4
            }
        );
        assert_eq!(service.user_stats("u2").await.unwrap().unwrap().score, 1);

        let again = service.confirm(report_id, "u2").await.unwrap();
        assert_eq!(again, ConfirmationOutcome::AlreadyConfirmed);
        assert_eq!(store.confirmation_count(report_id).await, Some(4));
    }

    #[tokio::test]
    async fn test_concurrent_distinct_users_lose_no_updates() {
        let (service, store) = service_with_store();
        let service = Arc::new(service);
        let report = sample_report("owner-1", Utc::now());
        let report_id = report.id;
        store.insert_report(report).await;

        let n = 32;
        let mut handles = Vec::with_capacity(n);
        for i in 0..n {
            let service = service.clone();
            handles.push(tokio::spawn(async move {
                service.confirm(report_id, &format!("user-{}", i)).await
            }));
        }
        for handle in handles {
            assert!(matches!(
                handle.await.unwrap().unwrap(),
                ConfirmationOutcome::Confirmed { .. }
            ));
        }

        assert_eq!(store.confirmation_count(report_id).await, Some(n as i32));
        assert_eq!(store.confirmation_rows(report_id).await, n);
    }

    #[tokio::test]
    async fn test_concurrent_duplicates_confirm_exactly_once() {
        let (service, store) = service_with_store();
        let service = Arc::new(service);
        let report = sample_report("owner-1", Utc::now());
        let report_id = report.id;
        store.insert_report(report).await;

        let mut handles = Vec::new();
        for _ in 0..16 {
            let service = service.clone();
            handles.push(tokio::spawn(async move {
                service.confirm(report_id, "same-user").await
            }));
        }

        let mut confirmed = 0;
        let mut already = 0;
        for handle in handles {
            match handle.await.unwrap().unwrap() {
                ConfirmationOutcome::Confirmed { .. } => confirmed += 1,
                ConfirmationOutcome::AlreadyConfirmed => already += 1,
            }
        }

        assert_eq!(confirmed, 1);
        assert_eq!(already, 15);
        assert_eq!(store.confirmation_count(report_id).await, Some(1));
        assert_eq!(
            service.user_stats("same-user").await.unwrap().unwrap().score,
            1
        );
    }

    #[tokio::test]
    async fn test_confirmed_report_ids_reflects_committed_rows() {
        let (service, store) = service_with_store();
        let first = sample_report("owner-1", Utc::now());
        let second = sample_report("owner-2", Utc::now());
        let (first_id, second_id) = (first.id, second.id);
        store.insert_report(first).await;
        store.insert_report(second).await;

        service.confirm(first_id, "user-9").await.unwrap();
        service.confirm(second_id, "user-9").await.unwrap();

        let mut ids = service.confirmed_report_ids("user-9").await.unwrap();
        ids.sort();
        let mut expected = vec![first_id, second_id];
        expected.sort();
        assert_eq!(ids, expected);
        assert!(service
            .confirmed_report_ids("someone-else")
            .await
            .unwrap()
            .is_empty());
    }
}
