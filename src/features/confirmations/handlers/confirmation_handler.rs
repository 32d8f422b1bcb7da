//! Confirmation and contribution-stats handlers

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};

use crate::core::error::Result;
use crate::features::auth::model::AuthenticatedUser;
use crate::features::confirmations::dtos::{
    ConfirmationResponseDto, ConfirmedReportIdsDto, UserStatsResponseDto,
};
use crate::features::confirmations::services::ConfirmationService;
use crate::shared::types::ApiResponse;

/// Confirm a community report
///
/// Records that the caller corroborates the report. Confirming twice is a
/// harmless no-op reported as `already_confirmed`; confirming your own
/// report is rejected.
#[utoipa::path(
    post,
    path = "/api/reports/{id}/confirmations",
    params(
        ("id" = Uuid, Path, description = "Report ID")
    ),
    responses(
        (status = 200, description = "Confirmation outcome", body = ApiResponse<ConfirmationResponseDto>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Own report cannot be confirmed"),
        (status = 404, description = "Report not found")
    ),
    security(("bearer_auth" = [])),
    tag = "confirmations"
)]
pub async fn confirm_report(
    user: AuthenticatedUser,
    State(service): State<Arc<ConfirmationService>>,
    Path(id): Path<uuid::Uuid>,
) -> Result<Json<ApiResponse<ConfirmationResponseDto>>> {
    let outcome = service.confirm(id, &user.sub).await?;
    let dto = ConfirmationResponseDto::new(id, outcome);

    Ok(Json(ApiResponse::success(Some(dto), None, None)))
}

/// List the caller's confirmed report ids
///
/// The presentation layer uses this set to hide the confirm action on
/// reports the user already confirmed.
#[utoipa::path(
    get,
    path = "/api/me/confirmations",
    responses(
        (status = 200, description = "Report ids the caller has confirmed", body = ApiResponse<ConfirmedReportIdsDto>),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearer_auth" = [])),
    tag = "confirmations"
)]
pub async fn list_my_confirmations(
    user: AuthenticatedUser,
    State(service): State<Arc<ConfirmationService>>,
) -> Result<Json<ApiResponse<ConfirmedReportIdsDto>>> {
    let report_ids = service.confirmed_report_ids(&user.sub).await?;

    Ok(Json(ApiResponse::success(
        Some(ConfirmedReportIdsDto { report_ids }),
        None,
        None,
    )))
}

/// Get the caller's contribution stats
///
/// `data` is null until the user's first confirmation; the stats row is
/// created lazily by the confirmation transaction.
#[utoipa::path(
    get,
    path = "/api/me/stats",
    responses(
        (status = 200, description = "Caller's contribution stats (null if none yet)", body = ApiResponse<UserStatsResponseDto>),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearer_auth" = [])),
    tag = "confirmations"
)]
pub async fn get_my_stats(
    user: AuthenticatedUser,
    State(service): State<Arc<ConfirmationService>>,
) -> Result<Json<ApiResponse<UserStatsResponseDto>>> {
    let stats = service.user_stats(&user.sub).await?;

    Ok(Json(ApiResponse::success(
        stats.map(UserStatsResponseDto::from),
        None,
        None,
    )))
}
