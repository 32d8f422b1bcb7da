use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// User identity established by the external identity provider.
///
/// The core treats `sub` as the authenticated user id everywhere; it never
/// performs authentication itself.
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
