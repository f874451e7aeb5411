use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::posts::models::PostStatus;
use crate::features::reports::models::{Report, ReportStatus, ReportType};
use crate::features::reports::stores::ReportWithPost;

/// Request DTO for submitting a report
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateReportDto {
    /// The post being reported
    pub post_id: Uuid,

    /// Why the post is being reported
    #[serde(rename = "type")]
    pub report_type: ReportType,

    /// Free-text explanation, 10-500 characters
    #[validate(length(min = 10, max = 500, message = "Reason must be 10-500 characters"))]
    pub reason: String,
}

/// Response DTO for a single report
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReportResponseDto {
    pub id: Uuid,
    pub post_id: Uuid,
    #[serde(rename = "type")]
    pub report_type: ReportType,
    pub reason: String,
    pub status: ReportStatus,
    pub created_at: DateTime<Utc>,
}

impl From<Report> for ReportResponseDto {
    fn from(r: Report) -> Self {
        Self {
            id: r.id,
            post_id: r.post_id,
            report_type: r.report_type,
            reason: r.reason,
            status: r.status,
            created_at: r.created_at,
        }
    }
}

/// Minimal post context shown alongside a report
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReportPostContextDto {
    pub id: Uuid,
    pub title: String,
    pub status: PostStatus,
}

/// Response DTO for a report in the caller's own list
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReportWithPostDto {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub report_type: ReportType,
    pub reason: String,
    pub status: ReportStatus,
    pub created_at: DateTime<Utc>,
    pub post: ReportPostContextDto,
}

impl From<ReportWithPost> for ReportWithPostDto {
    fn from(r: ReportWithPost) -> Self {
        Self {
            id: r.id,
            report_type: r.report_type,
            reason: r.reason,
            status: r.status,
            created_at: r.created_at,
            post: ReportPostContextDto {
                id: r.post_id,
                title: r.post_title,
                status: r.post_status,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::constants::{REPORT_REASON_MAX_LEN, REPORT_REASON_MIN_LEN};
    use fake::uuid::UUIDv4;
    use fake::Fake;

    fn dto_with_reason(reason: &str) -> CreateReportDto {
        CreateReportDto {
            post_id: UUIDv4.fake(),
            report_type: ReportType::Spam,
            reason: reason.to_string(),
        }
    }

    #[test]
    fn test_reason_length_bounds() {
        assert!(dto_with_reason(&"x".repeat(REPORT_REASON_MIN_LEN - 1))
            .validate()
            .is_err());
        assert!(dto_with_reason(&"x".repeat(REPORT_REASON_MIN_LEN))
            .validate()
            .is_ok());
        assert!(dto_with_reason(&"x".repeat(REPORT_REASON_MAX_LEN))
            .validate()
            .is_ok());
        assert!(dto_with_reason(&"x".repeat(REPORT_REASON_MAX_LEN + 1))
            .validate()
            .is_err());
    }

    #[test]
    fn test_report_type_is_a_closed_enum() {
        let parsed: Result<CreateReportDto, _> = serde_json::from_value(serde_json::json!({
            "postId": Uuid::new_v4(),
            "type": "nonsense",
            "reason": "long enough reason",
        }));
        assert!(parsed.is_err());

        let parsed: Result<CreateReportDto, _> = serde_json::from_value(serde_json::json!({
            "postId": Uuid::new_v4(),
            "type": "spam",
            "reason": "long enough reason",
        }));
        assert!(parsed.is_ok());
    }
}
