use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::features::dashboard::{dtos as dashboard_dtos, handlers as dashboard_handlers};
use crate::features::files::{dtos as files_dtos, handlers as files_handlers};
use crate::features::posts::models as posts_models;
use crate::features::profiles::{dtos as profiles_dtos, handlers as profiles_handlers};
use crate::features::reports::{
    dtos as reports_dtos, handlers as reports_handlers, models as reports_models,
};
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Reports
        reports_handlers::report_handler::submit_report,
        reports_handlers::report_handler::list_my_reports,
        reports_handlers::report_handler::get_report,
        // Profiles
        profiles_handlers::profile_handler::get_my_profile,
        profiles_handlers::profile_handler::update_my_profile,
        profiles_handlers::profile_handler::get_profile_by_username,
        // Dashboard
        dashboard_handlers::dashboard_handler::get_summary,
        // Files
        files_handlers::file_handler::upload_file,
        files_handlers::file_handler::presign_file,
        files_handlers::file_handler::delete_file_by_url,
    ),
    components(
        schemas(
            // Shared
            Meta,
            // Posts
            posts_models::PostStatus,
            // Reports
            reports_models::ReportStatus,
            reports_models::ReportType,
            reports_dtos::CreateReportDto,
            reports_dtos::ReportResponseDto,
            reports_dtos::ReportPostContextDto,
            reports_dtos::ReportWithPostDto,
            ApiResponse<reports_dtos::ReportResponseDto>,
            ApiResponse<Vec<reports_dtos::ReportWithPostDto>>,
            // Profiles
            profiles_dtos::UpdateProfileDto,
            profiles_dtos::ProfileResponseDto,
            ApiResponse<profiles_dtos::ProfileResponseDto>,
            // Dashboard
            dashboard_dtos::ReportStatusCountsDto,
            dashboard_dtos::DashboardSummaryDto,
            ApiResponse<dashboard_dtos::DashboardSummaryDto>,
            // Files
            files_dtos::UploadFileDto,
            files_dtos::FileVisibilityDto,
            files_dtos::FileResponseDto,
            files_dtos::PresignedUrlDto,
            files_dtos::DeleteFileByUrlDto,
            files_dtos::DeleteFileResponseDto,
            ApiResponse<files_dtos::FileResponseDto>,
            ApiResponse<files_dtos::PresignedUrlDto>,
            ApiResponse<files_dtos::DeleteFileResponseDto>,
        )
    ),
    tags(
        (name = "reports", description = "Post reporting and moderation workflow"),
        (name = "profiles", description = "User profile management"),
        (name = "dashboard", description = "Per-user activity summary"),
        (name = "files", description = "File upload and management"),
    ),
    modifiers(&SecurityAddon),
    info(
        title = "Folio API",
        version = "0.1.0",
        description = "API documentation for Folio",
    )
)]
pub struct ApiDoc;

/// Adds Bearer JWT security scheme to OpenAPI spec
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
