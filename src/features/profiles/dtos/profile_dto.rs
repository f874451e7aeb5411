use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::profiles::models::UserProfile;
use crate::shared::validation::USERNAME_REGEX;

/// Request DTO for saving the caller's profile
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileDto {
    #[validate(
        length(min = 3, max = 32, message = "Username must be 3-32 characters"),
        regex(
            path = *USERNAME_REGEX,
            message = "Username must start with letter or underscore and contain only alphanumeric characters and underscores"
        )
    )]
    pub username: String,

    #[validate(length(max = 128, message = "Display name must not exceed 128 characters"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    #[validate(length(max = 160, message = "Headline must not exceed 160 characters"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headline: Option<String>,

    #[validate(length(max = 2000, message = "Bio must not exceed 2000 characters"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,

    #[validate(url(message = "Avatar must be a valid URL"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,

    #[validate(url(message = "Website must be a valid URL"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,

    #[validate(length(max = 128, message = "Location must not exceed 128 characters"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

/// Response DTO for a user profile
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponseDto {
    pub user_id: String,
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headline: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<UserProfile> for ProfileResponseDto {
    fn from(p: UserProfile) -> Self {
        Self {
            user_id: p.user_id,
            username: p.username,
            display_name: p.display_name,
            headline: p.headline,
            bio: p.bio,
            avatar_url: p.avatar_url,
            website: p.website,
            location: p.location,
            created_at: p.created_at,
            updated_at: p.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_dto() -> UpdateProfileDto {
        UpdateProfileDto {
            username: "jane_doe".to_string(),
            display_name: Some("Jane Doe".to_string()),
            headline: None,
            bio: None,
            avatar_url: None,
            website: Some("https://example.com".to_string()),
            location: None,
        }
    }

    #[test]
    fn test_valid_profile_passes() {
        assert!(valid_dto().validate().is_ok());
    }

    #[test]
    fn test_bad_username_fails() {
        let mut dto = valid_dto();
        dto.username = "jane-doe".to_string();
        assert!(dto.validate().is_err());

        dto.username = "jd".to_string();
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_bad_website_fails() {
        let mut dto = valid_dto();
        dto.website = Some("not a url".to_string());
        assert!(dto.validate().is_err());
    }
}
