//! Presentation classification for stored report fields.
//!
//! Total functions over the stored tags: the three known statuses and two
//! escalated priorities get their own class, everything else falls back to
//! `Neutral` so an unexpected stored value can never fail a render.

use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum StatusClass {
    Pending,
    InProgress,
    Resolved,
    Neutral,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum PriorityClass {
    High,
    Medium,
    Neutral,
}

pub fn status_class(status: &str) -> StatusClass {
    match status {
        "Pending" => StatusClass::Pending,
        // "In Progress" is the stored form; accept the compact spelling too
        "In Progress" | "InProgress" => StatusClass::InProgress,
        "Resolved" => StatusClass::Resolved,
        _ => StatusClass::Neutral,
    }
}

pub fn priority_class(priority: &str) -> PriorityClass {
    match priority {
        "High" => PriorityClass::High,
        "Medium" => PriorityClass::Medium,
        _ => PriorityClass::Neutral,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_classes_are_disjoint() {
        assert_eq!(status_class("Pending"), StatusClass::Pending);
        assert_eq!(status_class("In Progress"), StatusClass::InProgress);
        assert_eq!(status_class("InProgress"), StatusClass::InProgress);
        assert_eq!(status_class("Resolved"), StatusClass::Resolved);
    }

    #[test]
    fn test_unknown_status_maps_to_neutral() {
        assert_eq!(status_class("Archived"), StatusClass::Neutral);
        assert_eq!(status_class(""), StatusClass::Neutral);
        assert_eq!(status_class("pending"), StatusClass::Neutral); // case-sensitive
    }

    #[test]
    fn test_priority_classes() {
        assert_eq!(priority_class("High"), PriorityClass::High);
        assert_eq!(priority_class("Medium"), PriorityClass::Medium);
        assert_eq!(priority_class("Low"), PriorityClass::Neutral);
        assert_eq!(priority_class("Urgent"), PriorityClass::Neutral);
    }
}
