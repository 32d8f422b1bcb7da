//! Report feed routes

use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::reports::handlers;
use crate::features::reports::services::ReportFeedService;

/// Create routes for the reports feature
///
/// Protected routes require the auth middleware to be applied by the caller.
pub fn routes(service: Arc<ReportFeedService>) -> Router {
    Router::new()
        .route(
            "/api/reports/community",
            get(handlers::list_community_reports),
        )
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::store::memory::{sample_report, MemoryStore};
    use crate::shared::test_helpers::{create_citizen_user, with_test_auth};
    use axum_test::TestServer;
    use chrono::Utc;
    use serde_json::Value;

    #[tokio::test]
    async fn test_feed_carries_presentation_classes() {
        let store = Arc::new(MemoryStore::new());
        let mut report = sample_report("owner-1", Utc::now());
        report.status = "Pending".to_string();
        report.priority = "High".to_string();
        store.insert_report(report).await;

        let mut odd = sample_report("owner-2", Utc::now());
        odd.status = "Archived".to_string();
        odd.priority = "Unset".to_string();
        store.insert_report(odd).await;

        let service = Arc::new(ReportFeedService::new(store));
        let router = with_test_auth(routes(service), create_citizen_user("viewer"));
        let server = TestServer::new(router).unwrap();

        let response = server.get("/api/reports/community").await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["meta"]["total"], 2);
        let data = body["data"].as_array().unwrap();

        let pending = data
            .iter()
            .find(|r| r["status"] == "Pending")
            .unwrap();
        assert_eq!(pending["statusClass"], "pending");
        assert_eq!(pending["priorityClass"], "high");

        // Unrecognized stored values degrade to the neutral class
        let archived = data
            .iter()
            .find(|r| r["status"] == "Archived")
            .unwrap();
        assert_eq!(archived["statusClass"], "neutral");
        assert_eq!(archived["priorityClass"], "neutral");
    }

    #[tokio::test]
    async fn test_feed_limit_query_param() {
        let store = Arc::new(MemoryStore::new());
        for _ in 0..5 {
            store.insert_report(sample_report("owner", Utc::now())).await;
        }
        let service = Arc::new(ReportFeedService::new(store));
        let router = with_test_auth(routes(service), create_citizen_user("viewer"));
        let server = TestServer::new(router).unwrap();

        let body: Value = server
            .get("/api/reports/community")
            .add_query_param("limit", 2)
            .await
            .json();
        assert_eq!(body["data"].as_array().unwrap().len(), 2);
    }
}
