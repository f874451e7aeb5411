use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::profiles::dtos::{ProfileResponseDto, UpdateProfileDto};
use crate::features::profiles::models::UserProfile;

const PROFILE_COLUMNS: &str = "user_id, username, display_name, headline, bio, avatar_url, \
     website, location, created_at, updated_at";

/// Service for profile operations
pub struct ProfileService {
    pool: PgPool,
}

impl ProfileService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Get the caller's own profile
    pub async fn get_own(&self, user_id: &str) -> Result<ProfileResponseDto> {
        let query = format!("SELECT {PROFILE_COLUMNS} FROM user_profiles WHERE user_id = $1");

        let profile = sqlx::query_as::<_, UserProfile>(&query)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to get profile: {:?}", e);
                AppError::Database(e)
            })?;

        profile
            .map(Into::into)
            .ok_or_else(|| AppError::NotFound("Profile not set up yet".to_string()))
    }

    /// Get a profile by username (public view)
    pub async fn get_by_username(&self, username: &str) -> Result<ProfileResponseDto> {
        let query = format!("SELECT {PROFILE_COLUMNS} FROM user_profiles WHERE username = $1");

        let profile = sqlx::query_as::<_, UserProfile>(&query)
            .bind(username)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to get profile by username: {:?}", e);
                AppError::Database(e)
            })?;

        profile
            .map(Into::into)
            .ok_or_else(|| AppError::NotFound(format!("Profile '{}' not found", username)))
    }

    /// Create or update the caller's profile
    pub async fn upsert(&self, user_id: &str, dto: UpdateProfileDto) -> Result<ProfileResponseDto> {
        let query = format!(
            "INSERT INTO user_profiles \
                 (user_id, username, display_name, headline, bio, avatar_url, website, location) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             ON CONFLICT (user_id) DO UPDATE SET \
                 username = EXCLUDED.username, \
                 display_name = EXCLUDED.display_name, \
                 headline = EXCLUDED.headline, \
                 bio = EXCLUDED.bio, \
                 avatar_url = EXCLUDED.avatar_url, \
                 website = EXCLUDED.website, \
                 location = EXCLUDED.location, \
                 updated_at = NOW() \
             RETURNING {PROFILE_COLUMNS}"
        );

        match sqlx::query_as::<_, UserProfile>(&query)
            .bind(user_id)
            .bind(&dto.username)
            .bind(&dto.display_name)
            .bind(&dto.headline)
            .bind(&dto.bio)
            .bind(&dto.avatar_url)
            .bind(&dto.website)
            .bind(&dto.location)
            .fetch_one(&self.pool)
            .await
        {
            Ok(profile) => {
                tracing::info!("Profile saved: user={}, username={}", user_id, dto.username);
                Ok(profile.into())
            }
            // Unique constraint on username
            Err(e)
                if e.as_database_error()
                    .is_some_and(|db| db.is_unique_violation()) =>
            {
                Err(AppError::Conflict(format!(
                    "Username '{}' is already taken",
                    dto.username
                )))
            }
            Err(e) => {
                tracing::error!("Failed to save profile: {:?}", e);
                Err(AppError::Database(e))
            }
        }
    }
}
