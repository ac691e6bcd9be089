//! Admin authorization: role table, permission rules and the resolver that
//! decides whether an admin may perform a named action.
//!
//! Every check fails closed. An unrecognized role, a missing override or an
//! unknown action all resolve to denial.

pub mod action;
pub mod overrides;
pub mod resolver;
pub mod role;

use thiserror::Error;

pub use action::PermissionTable;
pub use overrides::PermissionOverrides;
pub use resolver::PermissionResolver;
pub use role::{check_required_role, has_required_role, is_valid_role, AdminRole, ALLOWED_ADMIN_ROLES};

/// Reasons an authorization check can refuse a request
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthzError {
    #[error("Access denied: User is not an admin")]
    NotAdmin,

    #[error("Access denied: Insufficient permissions for '{action}'")]
    InsufficientPermission { action: String },

    #[error("Invalid admin role: {0}")]
    InvalidRole(String),
}

impl AuthzError {
    /// Stable code for API clients
    pub fn code(&self) -> &'static str {
        match self {
            AuthzError::NotAdmin => "NOT_ADMIN",
            AuthzError::InsufficientPermission { .. } => "INSUFFICIENT_PERMISSIONS",
            AuthzError::InvalidRole(_) => "INVALID_ROLE",
        }
    }
}
