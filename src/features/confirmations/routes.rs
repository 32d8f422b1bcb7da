//! Confirmation routes

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::confirmations::handlers;
use crate::features::confirmations::services::ConfirmationService;

/// Create routes for the confirmations feature
///
/// All routes require the auth middleware to be applied by the caller.
pub fn routes(service: Arc<ConfirmationService>) -> Router {
    Router::new()
        .route(
            "/api/reports/{id}/confirmations",
            post(handlers::confirm_report),
        )
        .route(
            "/api/me/confirmations",
            get(handlers::list_my_confirmations),
        )
        .route("/api/me/stats", get(handlers::get_my_stats))
        .with_state(service)
}
