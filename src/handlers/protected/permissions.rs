use axum::extract::{Extension, Path, State};
use serde::Serialize;

use crate::authz::ALLOWED_ADMIN_ROLES;
use crate::middleware::{require_permission, ApiResponse, ApiResult, CurrentAdmin};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct RoleInfo {
    pub role: &'static str,
    pub rank: u8,
    pub name: &'static str,
    pub color: &'static str,
}

#[derive(Debug, Serialize)]
pub struct PermissionDecision {
    pub action: String,
    pub allowed: bool,
}

/// GET /api/roles - the role table, highest privilege first
pub async fn roles_list() -> ApiResponse<Vec<RoleInfo>> {
    let roles: Vec<RoleInfo> = ALLOWED_ADMIN_ROLES
        .iter()
        .map(|role| RoleInfo {
            role: role.as_str(),
            rank: role.rank(),
            name: role.display_name(),
            color: role.badge_color(),
        })
        .collect();

    ApiResponse::success(roles)
}

/// GET /api/permissions - actions the calling admin is allowed
pub async fn permissions_list(
    State(state): State<AppState>,
    Extension(CurrentAdmin(admin)): Extension<CurrentAdmin>,
) -> ApiResponse<Vec<String>> {
    ApiResponse::success(state.resolver.granted_actions(&admin))
}

/// GET /api/permissions/:action - 200 if allowed, 403 INSUFFICIENT_PERMISSIONS otherwise
pub async fn permission_check(
    State(state): State<AppState>,
    Extension(CurrentAdmin(admin)): Extension<CurrentAdmin>,
    Path(action): Path<String>,
) -> ApiResult<PermissionDecision> {
    require_permission(&state, &admin, &action)?;

    Ok(ApiResponse::success(PermissionDecision { action, allowed: true }))
}
