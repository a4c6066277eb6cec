//! Display-only role classification of the current session

use crate::claims::{Role, decode_claims};
use crate::token_store::{TokenKey, TokenStore};

/// Role flags for conditional rendering.
///
/// Derived from the stored access token without checking expiry; the route
/// guard is what decides whether a session may see protected pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleInfo {
    pub role: Role,
    pub is_admin: bool,
    pub is_employee: bool,
    pub is_member: bool,
    pub is_authenticated: bool,
}

impl RoleInfo {
    /// Flags for a visitor without a usable token
    pub const fn anonymous() -> Self {
        Self {
            role: Role::Anonymous,
            is_admin: false,
            is_employee: false,
            is_member: false,
            is_authenticated: false,
        }
    }

    /// Classify the access token held by `store`
    pub fn from_store(store: &impl TokenStore) -> Self {
        Self::from_token(store.get(TokenKey::Access).as_deref())
    }

    /// Classify an access token
    pub fn from_token(token: Option<&str>) -> Self {
        let Some(token) = token else {
            return Self::anonymous();
        };

        match decode_claims(token) {
            Ok(claims) => {
                let role = claims.role();
                Self {
                    role,
                    is_admin: role == Role::Admin,
                    is_employee: role == Role::Employee,
                    is_member: role == Role::Member,
                    is_authenticated: true,
                }
            }
            Err(err) => {
                tracing::debug!("Treating session as anonymous: {err}");
                Self::anonymous()
            }
        }
    }
}

impl Default for RoleInfo {
    fn default() -> Self {
        Self::anonymous()
    }
}
