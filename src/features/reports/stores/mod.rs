#[cfg(test)]
pub mod memory;
pub mod pg;

pub use pg::{PgPostLookup, PgReportStore};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use crate::core::error::Result;
use crate::features::posts::models::PostStatus;
use crate::features::reports::models::{NewReport, Report, ReportStatus, ReportType};

/// The slice of a post the reporting workflow needs: its identity and
/// authorship, nothing else.
#[derive(Debug, Clone, FromRow)]
pub struct PostRef {
    pub id: Uuid,
    pub author_id: String,
}

/// A report joined with minimal post context for display
#[derive(Debug, Clone, FromRow)]
pub struct ReportWithPost {
    pub id: Uuid,
    pub reporter_id: String,
    pub post_id: Uuid,
    pub report_type: ReportType,
    pub reason: String,
    pub status: ReportStatus,
    pub created_at: DateTime<Utc>,
    pub post_title: String,
    pub post_status: PostStatus,
}

/// Read access to posts for the reporting workflow
#[async_trait]
pub trait PostLookup: Send + Sync {
    async fn find_by_id(&self, post_id: Uuid) -> Result<Option<PostRef>>;
}

/// Persistence for reports
#[async_trait]
pub trait ReportStore: Send + Sync {
    /// Insert a new report in pending status. Implementations must surface
    /// a Conflict when an active report for the same (reporter, post) pair
    /// already exists, so concurrent duplicate submissions cannot slip past
    /// the service-level pre-check.
    async fn insert(&self, report: NewReport) -> Result<Report>;

    /// Find a report from this reporter against this post that is still
    /// pending or under review
    async fn find_active(&self, reporter_id: &str, post_id: Uuid) -> Result<Option<Report>>;

    /// All reports submitted by this reporter, newest first
    async fn list_by_reporter(&self, reporter_id: &str) -> Result<Vec<ReportWithPost>>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Report>>;
}
