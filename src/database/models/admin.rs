use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

use crate::authz::{AdminRole, PermissionOverrides};

/// Columns selected from the admins table
pub const ADMIN_COLUMNS: &str = "id, user_id, role, permissions, created_at, created_by";

/// Raw row from the admins table. `role` is unchecked text and may be
/// missing or outside the recognized roles.
#[derive(Debug, Clone, FromRow)]
pub struct AdminRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub role: Option<String>,
    pub permissions: Option<Json<serde_json::Value>>,
    pub created_at: DateTime<Utc>,
    pub created_by: Option<Uuid>,
}

/// One privileged operator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub role: Option<String>,
    #[serde(default)]
    pub permissions: PermissionOverrides,
    pub created_at: DateTime<Utc>,
    pub created_by: Option<Uuid>,
}

impl AdminRecord {
    pub fn new(user_id: Uuid, role: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            role: Some(role.into()),
            permissions: PermissionOverrides::new(),
            created_at: Utc::now(),
            created_by: None,
        }
    }

    pub fn with_permissions(mut self, permissions: PermissionOverrides) -> Self {
        self.permissions = permissions;
        self
    }

    /// The role, if it is one of the recognized identifiers
    pub fn admin_role(&self) -> Option<AdminRole> {
        self.role.as_deref().and_then(AdminRole::parse)
    }

    pub fn has_valid_role(&self) -> bool {
        self.admin_role().is_some()
    }
}

impl From<AdminRow> for AdminRecord {
    fn from(row: AdminRow) -> Self {
        let permissions = row
            .permissions
            .map(|Json(value)| PermissionOverrides::from_json(&value))
            .unwrap_or_default();

        Self {
            id: row.id,
            user_id: row.user_id,
            role: row.role,
            permissions,
            created_at: row.created_at,
            created_by: row.created_by,
        }
    }
}
