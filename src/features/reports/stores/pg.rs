use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::reports::models::{NewReport, Report};
use crate::features::reports::stores::{PostLookup, PostRef, ReportStore, ReportWithPost};

const REPORT_COLUMNS: &str =
    "id, reporter_id, post_id, report_type, reason, status, created_at, updated_at";

/// Postgres-backed post lookup
pub struct PgPostLookup {
    pool: PgPool,
}

impl PgPostLookup {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PostLookup for PgPostLookup {
    async fn find_by_id(&self, post_id: Uuid) -> Result<Option<PostRef>> {
        sqlx::query_as::<_, PostRef>("SELECT id, author_id FROM posts WHERE id = $1")
            .bind(post_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to look up post: {:?}", e);
                AppError::Database(e)
            })
    }
}

/// Postgres-backed report store
pub struct PgReportStore {
    pool: PgPool,
}

impl PgReportStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReportStore for PgReportStore {
    async fn insert(&self, report: NewReport) -> Result<Report> {
        let query = format!(
            "INSERT INTO reports (reporter_id, post_id, report_type, reason) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {REPORT_COLUMNS}"
        );

        match sqlx::query_as::<_, Report>(&query)
            .bind(&report.reporter_id)
            .bind(report.post_id)
            .bind(report.report_type)
            .bind(&report.reason)
            .fetch_one(&self.pool)
            .await
        {
            Ok(created) => {
                tracing::info!(
                    "Report created: id={}, post={}, reporter={}",
                    created.id,
                    created.post_id,
                    created.reporter_id
                );
                Ok(created)
            }
            // Partial unique index on (reporter_id, post_id) for active
            // statuses; a concurrent duplicate lands here instead of
            // creating a second pending report.
            Err(e)
                if e.as_database_error()
                    .is_some_and(|db| db.is_unique_violation()) =>
            {
                Err(AppError::Conflict(
                    "You already have an open report for this post".to_string(),
                ))
            }
            Err(e) => {
                tracing::error!("Failed to insert report: {:?}", e);
                Err(AppError::Database(e))
            }
        }
    }

    async fn find_active(&self, reporter_id: &str, post_id: Uuid) -> Result<Option<Report>> {
        let query = format!(
            "SELECT {REPORT_COLUMNS} FROM reports \
             WHERE reporter_id = $1 AND post_id = $2 \
               AND status IN ('pending', 'reviewed')"
        );

        sqlx::query_as::<_, Report>(&query)
            .bind(reporter_id)
            .bind(post_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to find active report: {:?}", e);
                AppError::Database(e)
            })
    }

    async fn list_by_reporter(&self, reporter_id: &str) -> Result<Vec<ReportWithPost>> {
        sqlx::query_as::<_, ReportWithPost>(
            "SELECT r.id, r.reporter_id, r.post_id, r.report_type, r.reason, r.status, \
                    r.created_at, p.title AS post_title, p.status AS post_status \
             FROM reports r \
             JOIN posts p ON p.id = r.post_id \
             WHERE r.reporter_id = $1 \
             ORDER BY r.created_at DESC",
        )
        .bind(reporter_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list reports by reporter: {:?}", e);
            AppError::Database(e)
        })
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Report>> {
        let query = format!("SELECT {REPORT_COLUMNS} FROM reports WHERE id = $1");

        sqlx::query_as::<_, Report>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to get report by ID: {:?}", e);
                AppError::Database(e)
            })
    }
}
