use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Breakdown of the caller's submitted reports by status
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReportStatusCountsDto {
    pub pending: i64,
    pub reviewed: i64,
    pub resolved: i64,
    pub rejected: i64,
}

/// Per-user dashboard summary
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummaryDto {
    /// Posts authored by the caller
    pub total_posts: i64,
    pub published_posts: i64,
    /// Reports submitted by the caller
    pub total_reports: i64,
    pub reports: ReportStatusCountsDto,
    pub reports_this_week: i64,
    pub reports_this_month: i64,
}
