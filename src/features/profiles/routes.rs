use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::profiles::handlers;
use crate::features::profiles::services::ProfileService;

/// Create protected routes for the profiles feature
pub fn routes(service: Arc<ProfileService>) -> Router {
    Router::new()
        .route(
            "/api/profile",
            get(handlers::get_my_profile).put(handlers::update_my_profile),
        )
        .with_state(service)
}

/// Create public routes for the profiles feature
pub fn public_routes(service: Arc<ProfileService>) -> Router {
    Router::new()
        .route(
            "/api/profiles/{username}",
            get(handlers::get_profile_by_username),
        )
        .with_state(service)
}
