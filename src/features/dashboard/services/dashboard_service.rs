use sqlx::{PgPool, Row};

use crate::core::error::{AppError, Result};
use crate::features::dashboard::dtos::{DashboardSummaryDto, ReportStatusCountsDto};

/// Service for per-user dashboard queries
pub struct DashboardService {
    pool: PgPool,
}

impl DashboardService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Aggregate the caller's post and report counts in two passes,
    /// one per table
    pub async fn get_summary(&self, user_id: &str) -> Result<DashboardSummaryDto> {
        let posts = sqlx::query(
            "SELECT \
                 COUNT(*) AS total_posts, \
                 COUNT(*) FILTER (WHERE status = 'published') AS published_posts \
             FROM posts \
             WHERE author_id = $1",
        )
        .bind(user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get post counts: {:?}", e);
            AppError::Database(e)
        })?;

        let reports = sqlx::query(
            "SELECT \
                 COUNT(*) AS total_reports, \
                 COUNT(*) FILTER (WHERE status = 'pending') AS pending, \
                 COUNT(*) FILTER (WHERE status = 'reviewed') AS reviewed, \
                 COUNT(*) FILTER (WHERE status = 'resolved') AS resolved, \
                 COUNT(*) FILTER (WHERE status = 'rejected') AS rejected, \
                 COUNT(*) FILTER (WHERE created_at >= date_trunc('week', CURRENT_DATE)) AS reports_this_week, \
                 COUNT(*) FILTER (WHERE created_at >= date_trunc('month', CURRENT_DATE)) AS reports_this_month \
             FROM reports \
             WHERE reporter_id = $1",
        )
        .bind(user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get report counts: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(DashboardSummaryDto {
            total_posts: posts.get("total_posts"),
            published_posts: posts.get("published_posts"),
            total_reports: reports.get("total_reports"),
            reports: ReportStatusCountsDto {
                pending: reports.get("pending"),
                reviewed: reports.get("reviewed"),
                resolved: reports.get("resolved"),
                rejected: reports.get("rejected"),
            },
            reports_this_week: reports.get("reports_this_week"),
            reports_this_month: reports.get("reports_this_month"),
        })
    }
}
