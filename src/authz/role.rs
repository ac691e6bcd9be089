use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::AuthzError;

/// Privilege class held by an admin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdminRole {
    Superadmin,
    Manager,
    Viewer,
}

/// Recognized roles, highest privilege first
pub const ALLOWED_ADMIN_ROLES: [AdminRole; 3] = [AdminRole::Superadmin, AdminRole::Manager, AdminRole::Viewer];

impl AdminRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            AdminRole::Superadmin => "superadmin",
            AdminRole::Manager => "manager",
            AdminRole::Viewer => "viewer",
        }
    }

    /// Exact, case-sensitive match against the role identifiers
    pub fn parse(value: &str) -> Option<Self> {
        ALLOWED_ADMIN_ROLES.into_iter().find(|role| role.as_str() == value)
    }

    /// Position in the hierarchy, higher is more privileged
    pub fn rank(&self) -> u8 {
        match self {
            AdminRole::Superadmin => 3,
            AdminRole::Manager => 2,
            AdminRole::Viewer => 1,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            AdminRole::Superadmin => "Super Admin",
            AdminRole::Manager => "Manager",
            AdminRole::Viewer => "Viewer",
        }
    }

    /// Badge color used by dashboards
    pub fn badge_color(&self) -> &'static str {
        match self {
            AdminRole::Superadmin => "red",
            AdminRole::Manager => "blue",
            AdminRole::Viewer => "gray",
        }
    }
}

impl fmt::Display for AdminRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AdminRole {
    type Err = AuthzError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| AuthzError::InvalidRole(s.to_string()))
    }
}

pub fn is_valid_role(value: &str) -> bool {
    AdminRole::parse(value).is_some()
}

/// True if `actual` has equal or higher privilege than `required`
pub fn has_required_role(actual: AdminRole, required: AdminRole) -> bool {
    actual.rank() >= required.rank()
}

/// String form of [`has_required_role`]; unrecognized roles are an error, never a default
pub fn check_required_role(actual: &str, required: &str) -> Result<bool, AuthzError> {
    let actual: AdminRole = actual.parse()?;
    let required: AdminRole = required.parse()?;
    Ok(has_required_role(actual, required))
}
