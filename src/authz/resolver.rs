use std::sync::Arc;

use super::{AdminRole, AuthzError, PermissionTable};
use crate::database::models::AdminRecord;

/// Decides whether an admin may perform an action.
///
/// Resolution order:
/// 1. an unrecognized role is denied everything, overrides included
/// 2. superadmins are allowed everything
/// 3. actions in the fixed table require that exact role (no hierarchy)
/// 4. any other action is allowed only if its override flag is `true`
///
/// Step 3 means a manager is denied `view_logs` even though a viewer is
/// granted it.
#[derive(Debug, Clone, Default)]
pub struct PermissionResolver {
    table: Arc<PermissionTable>,
}

impl PermissionResolver {
    pub fn new(table: Arc<PermissionTable>) -> Self {
        Self { table }
    }

    pub fn has_permission(&self, admin: &AdminRecord, action: &str) -> bool {
        let Some(role) = admin.admin_role() else {
            return false;
        };

        if role == AdminRole::Superadmin {
            return true;
        }

        match self.table.required_role(action) {
            Some(required) => role == required,
            None => admin.permissions.is_granted(action),
        }
    }

    /// Same decision as [`has_permission`](Self::has_permission) with the reason for a denial
    pub fn authorize(&self, admin: &AdminRecord, action: &str) -> Result<(), AuthzError> {
        if !admin.has_valid_role() {
            return Err(AuthzError::NotAdmin);
        }

        if self.has_permission(admin, action) {
            Ok(())
        } else {
            Err(AuthzError::InsufficientPermission {
                action: action.to_string(),
            })
        }
    }

    /// Fixed actions and override keys this admin is allowed, sorted
    pub fn granted_actions(&self, admin: &AdminRecord) -> Vec<String> {
        let mut granted: Vec<String> = self
            .table
            .actions()
            .into_iter()
            .chain(admin.permissions.granted())
            .filter(|action| self.has_permission(admin, action))
            .map(str::to_string)
            .collect();

        granted.sort_unstable();
        granted.dedup();
        granted
    }
}
