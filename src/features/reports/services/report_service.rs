use std::sync::Arc;

use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::reports::models::{NewReport, Report, ReportType};
use crate::features::reports::stores::{PostLookup, ReportStore, ReportWithPost};

/// Service for the report submission and query workflow.
///
/// Collaborators are injected at composition time so the business rules can
/// be exercised against in-memory stores.
pub struct ReportService {
    posts: Arc<dyn PostLookup>,
    store: Arc<dyn ReportStore>,
}

impl ReportService {
    pub fn new(posts: Arc<dyn PostLookup>, store: Arc<dyn ReportStore>) -> Self {
        Self { posts, store }
    }

    /// Submit a report against a post.
    ///
    /// Fails with NotFound when the post does not exist, and with Conflict
    /// when the reporter authored the post or already has a pending or
    /// reviewed report against it. The duplicate pre-check races with
    /// concurrent submissions; the store's insert is the authoritative
    /// enforcement point.
    pub async fn submit(
        &self,
        reporter_id: &str,
        post_id: Uuid,
        report_type: ReportType,
        reason: String,
    ) -> Result<Report> {
        let post = self
            .posts
            .find_by_id(post_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Post '{}' not found", post_id)))?;

        if post.author_id == reporter_id {
            return Err(AppError::Conflict(
                "You cannot report your own post".to_string(),
            ));
        }

        if self
            .store
            .find_active(reporter_id, post_id)
            .await?
            .is_some()
        {
            return Err(AppError::Conflict(
                "You already have an open report for this post".to_string(),
            ));
        }

        self.store
            .insert(NewReport {
                reporter_id: reporter_id.to_string(),
                post_id,
                report_type,
                reason,
            })
            .await
    }

    /// List the caller's own reports, newest first, with post context
    pub async fn list_mine(&self, reporter_id: &str) -> Result<Vec<ReportWithPost>> {
        self.store.list_by_reporter(reporter_id).await
    }

    /// Get a single report. Reports are private to their submitter.
    pub async fn get_by_id(&self, id: Uuid, caller_id: &str) -> Result<Report> {
        let report = self
            .store
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Report '{}' not found", id)))?;

        if report.reporter_id != caller_id {
            return Err(AppError::Forbidden(
                "Reports are only visible to their submitter".to_string(),
            ));
        }

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::posts::models::PostStatus;
    use crate::features::reports::models::ReportStatus;
    use crate::features::reports::stores::memory::{InMemoryPosts, InMemoryReports};
    use crate::features::reports::stores::PostRef;

    fn setup(posts: &[(Uuid, &str, &str)]) -> (ReportService, Arc<InMemoryReports>) {
        let lookup = InMemoryPosts::new(posts.iter().map(|(id, author, _)| PostRef {
            id: *id,
            author_id: author.to_string(),
        }));
        let store = Arc::new(InMemoryReports::new(
            posts
                .iter()
                .map(|(id, _, title)| (*id, (title.to_string(), PostStatus::Published)))
                .collect(),
        ));
        let service =
            ReportService::new(Arc::new(lookup), Arc::clone(&store) as Arc<dyn ReportStore>);
        (service, store)
    }

    #[tokio::test]
    async fn test_submit_creates_pending_report() {
        let post = Uuid::new_v4();
        let (service, _) = setup(&[(post, "author", "A post")]);

        let report = service
            .submit("reporter", post, ReportType::Spam, "spam everywhere".to_string())
            .await
            .unwrap();

        assert_eq!(report.status, ReportStatus::Pending);
        assert_eq!(report.reporter_id, "reporter");
        assert_eq!(report.post_id, post);
        assert_eq!(report.report_type, ReportType::Spam);
    }

    #[tokio::test]
    async fn test_submit_unknown_post_is_not_found() {
        let (service, _) = setup(&[]);

        let err = service
            .submit("reporter", Uuid::new_v4(), ReportType::Spam, "spam everywhere".to_string())
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_submit_own_post_is_conflict() {
        let post = Uuid::new_v4();
        let (service, _) = setup(&[(post, "author", "A post")]);

        let err = service
            .submit("author", post, ReportType::Abuse, "reporting my own post".to_string())
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_duplicate_while_active_is_conflict() {
        let post = Uuid::new_v4();
        let (service, store) = setup(&[(post, "author", "A post")]);

        let first = service
            .submit("reporter", post, ReportType::Spam, "spam everywhere".to_string())
            .await
            .unwrap();

        let err = service
            .submit("reporter", post, ReportType::Spam, "still spam, honestly".to_string())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));

        // Still blocked while under review
        store.set_status(first.id, ReportStatus::Reviewed);
        let err = service
            .submit("reporter", post, ReportType::Spam, "still spam, honestly".to_string())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_resubmit_after_resolution_succeeds() {
        let post = Uuid::new_v4();
        let (service, store) = setup(&[(post, "author", "A post")]);

        let first = service
            .submit("reporter", post, ReportType::Spam, "spam everywhere".to_string())
            .await
            .unwrap();

        store.set_status(first.id, ReportStatus::Resolved);
        let second = service
            .submit("reporter", post, ReportType::Spam, "spam came back again".to_string())
            .await
            .unwrap();
        assert_eq!(second.status, ReportStatus::Pending);

        store.set_status(second.id, ReportStatus::Rejected);
        let third = service
            .submit("reporter", post, ReportType::Other, "one more try at this".to_string())
            .await
            .unwrap();
        assert_eq!(third.status, ReportStatus::Pending);
    }

    #[tokio::test]
    async fn test_get_by_id_is_private_to_submitter() {
        let post = Uuid::new_v4();
        let (service, store) = setup(&[(post, "author", "A post")]);

        let report = service
            .submit("reporter", post, ReportType::Harassment, "harassing comments".to_string())
            .await
            .unwrap();

        let err = service.get_by_id(report.id, "someone-else").await.unwrap_err();
        assert!(matches!(err, AppError::Forbidden(_)));

        // Forbidden regardless of status
        store.set_status(report.id, ReportStatus::Resolved);
        let err = service.get_by_id(report.id, "someone-else").await.unwrap_err();
        assert!(matches!(err, AppError::Forbidden(_)));

        let mine = service.get_by_id(report.id, "reporter").await.unwrap();
        assert_eq!(mine.id, report.id);
    }

    #[tokio::test]
    async fn test_get_by_id_unknown_is_not_found() {
        let (service, _) = setup(&[]);

        let err = service.get_by_id(Uuid::new_v4(), "reporter").await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_list_mine_is_scoped_and_ordered() {
        let post_a = Uuid::new_v4();
        let post_b = Uuid::new_v4();
        let (service, _) = setup(&[(post_a, "author", "First post"), (post_b, "author", "Second post")]);

        service
            .submit("reporter", post_a, ReportType::Spam, "spam everywhere".to_string())
            .await
            .unwrap();
        service
            .submit("reporter", post_b, ReportType::Abuse, "abusive language".to_string())
            .await
            .unwrap();
        service
            .submit("other", post_a, ReportType::Spam, "spam everywhere".to_string())
            .await
            .unwrap();

        let mine = service.list_mine("reporter").await.unwrap();
        assert_eq!(mine.len(), 2);
        assert!(mine.iter().all(|r| r.reporter_id == "reporter"));
        assert!(mine[0].created_at > mine[1].created_at);
        assert_eq!(mine[0].post_title, "Second post");
        assert_eq!(mine[1].post_title, "First post");
    }

    // The worked example: R1 reports P (authored by R2), R1 again -> Conflict,
    // R2 against own post -> Conflict, R3 reading R1's report -> Forbidden.
    #[tokio::test]
    async fn test_submission_scenario() {
        let post = Uuid::new_v4();
        let (service, _) = setup(&[(post, "r2", "P")]);

        let report = service
            .submit("r1", post, ReportType::Spam, "twelve chars".to_string())
            .await
            .unwrap();
        assert_eq!(report.status, ReportStatus::Pending);

        let err = service
            .submit("r1", post, ReportType::Spam, "twelve chars".to_string())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));

        let err = service
            .submit("r2", post, ReportType::Spam, "my very own post".to_string())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));

        let err = service.get_by_id(report.id, "r3").await.unwrap_err();
        assert!(matches!(err, AppError::Forbidden(_)));
    }
}
