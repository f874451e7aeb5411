use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for user profile
///
/// Keyed by the identity provider's subject claim; created lazily on the
/// first profile save.
#[derive(Debug, Clone, FromRow)]
pub struct UserProfile {
    pub user_id: String,
    pub username: String,
    pub display_name: Option<String>,
    pub headline: Option<String>,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
