use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Identity attached to a request after the bearer token is validated.
/// `sub` is the stable user identifier from the identity provider.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AuthenticatedUser {
    pub sub: String,
    pub roles: Vec<String>,
}

impl AuthenticatedUser {
    /// Check if user has a specific role
    #[allow(dead_code)]
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }
}
