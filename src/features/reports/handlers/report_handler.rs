//! Community feed handler

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};

use crate::core::error::Result;
use crate::features::auth::model::AuthenticatedUser;
use crate::features::reports::dtos::{ReportFeedQuery, ReportResponseDto};
use crate::features::reports::services::ReportFeedService;
use crate::shared::types::{ApiResponse, Meta};

/// List recent community reports
///
/// Returns the newest reports first so citizens can confirm issues reported
/// by others. Whether the caller may confirm a given report is decided by
/// the confirmation endpoint, not here.
#[utoipa::path(
    get,
    path = "/api/reports/community",
    params(ReportFeedQuery),
    responses(
        (status = 200, description = "Recent community reports", body = ApiResponse<Vec<ReportResponseDto>>),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearer_auth" = [])),
    tag = "reports"
)]
pub async fn list_community_reports(
    _user: AuthenticatedUser,
    State(service): State<Arc<ReportFeedService>>,
    Query(query): Query<ReportFeedQuery>,
) -> Result<Json<ApiResponse<Vec<ReportResponseDto>>>> {
    let reports = service.list_recent(query.limit).await?;
    let total = reports.len() as i64;
    let dtos: Vec<ReportResponseDto> = reports.into_iter().map(|r| r.into()).collect();

    Ok(Json(ApiResponse::success(
        Some(dtos),
        None,
        Some(Meta { total }),
    )))
}
