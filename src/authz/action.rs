use std::collections::HashMap;

use super::AdminRole;

pub const CREATE_ADMIN: &str = "create_admin";
pub const DELETE_ADMIN: &str = "delete_admin";
pub const UPDATE_ADMIN_ROLE: &str = "update_admin_role";
pub const APPROVE_THERAPIST: &str = "approve_therapist";
pub const REJECT_THERAPIST: &str = "reject_therapist";
pub const UPDATE_USER: &str = "update_user";
pub const DELETE_USER: &str = "delete_user";

pub const VIEW_USERS: &str = "view_users";
pub const VIEW_THERAPISTS: &str = "view_therapists";
pub const VIEW_PAYMENTS: &str = "view_payments";
pub const VIEW_LOGS: &str = "view_logs";

/// Mutating actions reserved for managers
pub const MANAGER_ACTIONS: [&str; 7] = [
    CREATE_ADMIN,
    DELETE_ADMIN,
    UPDATE_ADMIN_ROLE,
    APPROVE_THERAPIST,
    REJECT_THERAPIST,
    UPDATE_USER,
    DELETE_USER,
];

/// Read-only actions reserved for viewers
pub const VIEWER_ACTIONS: [&str; 4] = [VIEW_USERS, VIEW_THERAPISTS, VIEW_PAYMENTS, VIEW_LOGS];

/// Fixed action rules. Each listed action is granted to exactly one role
/// (no hierarchy); superadmins bypass the table entirely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermissionTable {
    rules: HashMap<String, AdminRole>,
}

impl PermissionTable {
    /// Table with no rules; every action falls through to overrides
    pub fn empty() -> Self {
        Self { rules: HashMap::new() }
    }

    pub fn with_rule(mut self, action: impl Into<String>, role: AdminRole) -> Self {
        self.rules.insert(action.into(), role);
        self
    }

    /// Role that must match exactly, or `None` if the action is not a fixed rule
    pub fn required_role(&self, action: &str) -> Option<AdminRole> {
        self.rules.get(action).copied()
    }

    /// Fixed actions in name order
    pub fn actions(&self) -> Vec<&str> {
        let mut actions: Vec<&str> = self.rules.keys().map(String::as_str).collect();
        actions.sort_unstable();
        actions
    }
}

impl Default for PermissionTable {
    fn default() -> Self {
        let table = MANAGER_ACTIONS
            .into_iter()
            .fold(Self::empty(), |table, action| table.with_rule(action, AdminRole::Manager));

        VIEWER_ACTIONS
            .into_iter()
            .fold(table, |table, action| table.with_rule(action, AdminRole::Viewer))
    }
}
