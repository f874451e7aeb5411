use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::reports::handlers;
use crate::features::reports::services::ReportService;

/// Create routes for the reports feature
///
/// Note: This feature requires authentication
pub fn routes(service: Arc<ReportService>) -> Router {
    Router::new()
        .route("/api/reports", post(handlers::submit_report))
        .route("/api/reports/me", get(handlers::list_my_reports))
        .route("/api/reports/{id}", get(handlers::get_report))
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::posts::models::PostStatus;
    use crate::features::reports::stores::memory::{InMemoryPosts, InMemoryReports};
    use crate::features::reports::stores::{PostRef, ReportStore};
    use crate::shared::test_helpers::with_test_auth;
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::json;
    use uuid::Uuid;

    fn test_server(post_id: Uuid, author_id: &str) -> TestServer {
        let lookup = InMemoryPosts::new([PostRef {
            id: post_id,
            author_id: author_id.to_string(),
        }]);
        let store = Arc::new(InMemoryReports::new(
            [(post_id, ("A post".to_string(), PostStatus::Published))]
                .into_iter()
                .collect(),
        ));
        let service = Arc::new(ReportService::new(
            Arc::new(lookup),
            store as Arc<dyn ReportStore>,
        ));
        TestServer::new(with_test_auth(routes(service))).unwrap()
    }

    #[tokio::test]
    async fn test_submit_report_endpoint() {
        let post_id = Uuid::new_v4();
        let server = test_server(post_id, "someone-else");

        let response = server
            .post("/api/reports")
            .json(&json!({
                "postId": post_id,
                "type": "spam",
                "reason": "this post is full of spam links",
            }))
            .await;

        response.assert_status(StatusCode::CREATED);
        let body: serde_json::Value = response.json();
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["status"], "pending");

        // Second submission against the same post conflicts
        let response = server
            .post("/api/reports")
            .json(&json!({
                "postId": post_id,
                "type": "spam",
                "reason": "this post is full of spam links",
            }))
            .await;
        response.assert_status(StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn test_submit_report_rejects_short_reason() {
        let post_id = Uuid::new_v4();
        let server = test_server(post_id, "someone-else");

        let response = server
            .post("/api/reports")
            .json(&json!({
                "postId": post_id,
                "type": "spam",
                "reason": "too short",
            }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_list_my_reports_endpoint() {
        let post_id = Uuid::new_v4();
        let server = test_server(post_id, "someone-else");

        server
            .post("/api/reports")
            .json(&json!({
                "postId": post_id,
                "type": "abuse",
                "reason": "abusive content in this post",
            }))
            .await
            .assert_status(StatusCode::CREATED);

        let response = server.get("/api/reports/me").await;
        response.assert_status_ok();
        let body: serde_json::Value = response.json();
        assert_eq!(body["meta"]["total"], 1);
        assert_eq!(body["data"][0]["post"]["title"], "A post");
    }

    #[tokio::test]
    async fn test_get_unknown_report_is_404() {
        let server = test_server(Uuid::new_v4(), "someone-else");

        let response = server.get(&format!("/api/reports/{}", Uuid::new_v4())).await;
        response.assert_status_not_found();
    }
}
