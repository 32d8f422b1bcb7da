use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::features::confirmations::models::UserStats;
use crate::features::confirmations::services::ConfirmationOutcome;

/// How a confirmation attempt resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ConfirmationOutcomeDto {
    Confirmed,
    AlreadyConfirmed,
}

/// Response DTO for a confirmation attempt
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmationResponseDto {
    pub report_id: Uuid,
    pub outcome: ConfirmationOutcomeDto,
    /// Present only when this call recorded a new confirmation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confirmation_count: Option<i32>,
}

impl ConfirmationResponseDto {
    pub fn new(report_id: Uuid, outcome: ConfirmationOutcome) -> Self {
        match outcome {
            ConfirmationOutcome::Confirmed { confirmation_count } => Self {
                report_id,
                outcome: ConfirmationOutcomeDto::Confirmed,
                confirmation_count: Some(confirmation_count),
            },
            ConfirmationOutcome::AlreadyConfirmed => Self {
                report_id,
                outcome: ConfirmationOutcomeDto::AlreadyConfirmed,
                confirmation_count: None,
            },
        }
    }
}

/// Response DTO listing the reports the caller has confirmed
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmedReportIdsDto {
    pub report_ids: Vec<Uuid>,
}

/// Response DTO for per-user contribution stats
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserStatsResponseDto {
    pub user_id: String,
    pub score: i32,
    pub updated_at: DateTime<Utc>,
}

impl From<UserStats> for UserStatsResponseDto {
    fn from(s: UserStats) -> Self {
        Self {
            user_id: s.user_id,
            score: s.score,
            updated_at: s.updated_at,
        }
    }
}
