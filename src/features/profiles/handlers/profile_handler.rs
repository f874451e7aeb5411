use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::auth::model::AuthenticatedUser;
use crate::features::profiles::dtos::{ProfileResponseDto, UpdateProfileDto};
use crate::features::profiles::services::ProfileService;
use crate::shared::types::ApiResponse;

/// Get the caller's own profile
#[utoipa::path(
    get,
    path = "/api/profile",
    responses(
        (status = 200, description = "The caller's profile", body = ApiResponse<ProfileResponseDto>),
        (status = 404, description = "Profile not set up yet")
    ),
    security(("bearer_auth" = [])),
    tag = "profiles"
)]
pub async fn get_my_profile(
    user: AuthenticatedUser,
    State(service): State<Arc<ProfileService>>,
) -> Result<Json<ApiResponse<ProfileResponseDto>>> {
    let profile = service.get_own(&user.sub).await?;
    Ok(Json(ApiResponse::success(Some(profile), None, None)))
}

/// Create or update the caller's profile
#[utoipa::path(
    put,
    path = "/api/profile",
    request_body = UpdateProfileDto,
    responses(
        (status = 200, description = "Profile saved", body = ApiResponse<ProfileResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Username already taken")
    ),
    security(("bearer_auth" = [])),
    tag = "profiles"
)]
pub async fn update_my_profile(
    user: AuthenticatedUser,
    State(service): State<Arc<ProfileService>>,
    AppJson(dto): AppJson<UpdateProfileDto>,
) -> Result<Json<ApiResponse<ProfileResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let profile = service.upsert(&user.sub, dto).await?;
    Ok(Json(ApiResponse::success(
        Some(profile),
        Some("Profile saved".to_string()),
        None,
    )))
}

/// Get a profile by username (public)
#[utoipa::path(
    get,
    path = "/api/profiles/{username}",
    params(
        ("username" = String, Path, description = "Profile username")
    ),
    responses(
        (status = 200, description = "Profile found", body = ApiResponse<ProfileResponseDto>),
        (status = 404, description = "Profile not found")
    ),
    tag = "profiles"
)]
pub async fn get_profile_by_username(
    State(service): State<Arc<ProfileService>>,
    Path(username): Path<String>,
) -> Result<Json<ApiResponse<ProfileResponseDto>>> {
    let profile = service.get_by_username(&username).await?;
    Ok(Json(ApiResponse::success(Some(profile), None, None)))
}
