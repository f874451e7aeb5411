use axum::{
    extract::DefaultBodyLimit,
    routing::{delete, get, post},
    Router,
};
use std::sync::Arc;

use crate::features::files::handlers::{delete_file_by_url, presign_file, upload_file};
use crate::features::files::services::FileService;
use crate::shared::constants::MAX_UPLOAD_SIZE;

/// Create routes for the files feature
pub fn routes(file_service: Arc<FileService>) -> Router {
    Router::new()
        .route(
            "/api/files/upload",
            // Allow body size up to MAX_UPLOAD_SIZE plus multipart overhead
            post(upload_file).layer(DefaultBodyLimit::max(MAX_UPLOAD_SIZE + 1024 * 1024)),
        )
        .route("/api/files/{id}/presign", get(presign_file))
        .route("/api/files", delete(delete_file_by_url))
        .with_state(file_service)
}
