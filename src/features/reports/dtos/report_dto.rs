use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::features::reports::models::Report;
use crate::features::reports::presentation::{
    priority_class, status_class, PriorityClass, StatusClass,
};
use crate::shared::constants::DEFAULT_FEED_LIMIT;

/// Query parameters for the community feed
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct ReportFeedQuery {
    /// Maximum number of reports to return (default: 50, max: 100)
    #[serde(default = "default_limit")]
    #[param(minimum = 1, maximum = 100)]
    pub limit: i64,
}

fn default_limit() -> i64 {
    DEFAULT_FEED_LIMIT
}

impl Default for ReportFeedQuery {
    fn default() -> Self {
        Self {
            limit: DEFAULT_FEED_LIMIT,
        }
    }
}

/// Response DTO for a report in the community feed
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReportResponseDto {
    pub id: Uuid,
    pub user_id: String,
    pub issue_type: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub priority: String,
    pub status: String,
    /// Presentation class derived from `status`
    pub status_class: StatusClass,
    /// Presentation class derived from `priority`
    pub priority_class: PriorityClass,
    pub confirmation_count: i32,
    pub created_at: DateTime<Utc>,
}

impl From<Report> for ReportResponseDto {
    fn from(r: Report) -> Self {
        let status_class = status_class(&r.status);
        let priority_class = priority_class(&r.priority);
        Self {
            id: r.id,
            user_id: r.user_id,
            issue_type: r.issue_type,
            description: r.description,
            image_url: r.image_url,
            priority: r.priority,
            status: r.status,
            status_class,
            priority_class,
            confirmation_count: r.confirmation_count,
            created_at: r.created_at,
        }
    }
}
