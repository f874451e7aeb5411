//! In-memory store implementations for exercising the reporting workflow
//! without a database.

use async_trait::async_trait;
use chrono::{Duration, Utc};
use std::collections::HashMap;
use std::sync::Mutex;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::posts::models::PostStatus;
use crate::features::reports::models::{NewReport, Report, ReportStatus};
use crate::features::reports::stores::{PostLookup, PostRef, ReportStore, ReportWithPost};

pub struct InMemoryPosts {
    posts: HashMap<Uuid, PostRef>,
}

impl InMemoryPosts {
    pub fn new(posts: impl IntoIterator<Item = PostRef>) -> Self {
        Self {
            posts: posts.into_iter().map(|p| (p.id, p)).collect(),
        }
    }
}

#[async_trait]
impl PostLookup for InMemoryPosts {
    async fn find_by_id(&self, post_id: Uuid) -> Result<Option<PostRef>> {
        Ok(self.posts.get(&post_id).cloned())
    }
}

pub struct InMemoryReports {
    reports: Mutex<Vec<Report>>,
    post_context: HashMap<Uuid, (String, PostStatus)>,
}

impl InMemoryReports {
    pub fn new(post_context: HashMap<Uuid, (String, PostStatus)>) -> Self {
        Self {
            reports: Mutex::new(Vec::new()),
            post_context,
        }
    }

    /// Stand-in for the external moderation pipeline
    pub fn set_status(&self, id: Uuid, status: ReportStatus) {
        let mut reports = self.reports.lock().unwrap();
        let report = reports.iter_mut().find(|r| r.id == id).unwrap();
        report.status = status;
    }
}

#[async_trait]
impl ReportStore for InMemoryReports {
    async fn insert(&self, report: NewReport) -> Result<Report> {
        let mut reports = self.reports.lock().unwrap();

        // Mirror the database's partial unique index
        let duplicate = reports.iter().any(|r| {
            r.reporter_id == report.reporter_id
                && r.post_id == report.post_id
                && r.status.is_active()
        });
        if duplicate {
            return Err(AppError::Conflict(
                "You already have an open report for this post".to_string(),
            ));
        }

        // Spread creation times so ordering is observable
        let created_at = Utc::now() + Duration::microseconds(reports.len() as i64);
        let created = Report {
            id: Uuid::new_v4(),
            reporter_id: report.reporter_id,
            post_id: report.post_id,
            report_type: report.report_type,
            reason: report.reason,
            status: ReportStatus::Pending,
            created_at,
            updated_at: created_at,
        };
        reports.push(created.clone());
        Ok(created)
    }

    async fn find_active(&self, reporter_id: &str, post_id: Uuid) -> Result<Option<Report>> {
        let reports = self.reports.lock().unwrap();
        Ok(reports
            .iter()
            .find(|r| r.reporter_id == reporter_id && r.post_id == post_id && r.status.is_active())
            .cloned())
    }

    async fn list_by_reporter(&self, reporter_id: &str) -> Result<Vec<ReportWithPost>> {
        let reports = self.reports.lock().unwrap();
        let mut mine: Vec<ReportWithPost> = reports
            .iter()
            .filter(|r| r.reporter_id == reporter_id)
            .map(|r| {
                let (title, status) = self.post_context[&r.post_id].clone();
                ReportWithPost {
                    id: r.id,
                    reporter_id: r.reporter_id.clone(),
                    post_id: r.post_id,
                    report_type: r.report_type,
                    reason: r.reason.clone(),
                    status: r.status,
                    created_at: r.created_at,
                    post_title: title,
                    post_status: status,
                }
            })
            .collect();
        mine.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(mine)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Report>> {
        let reports = self.reports.lock().unwrap();
        Ok(reports.iter().find(|r| r.id == id).cloned())
    }
}
