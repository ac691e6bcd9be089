use axum::extract::{Extension, State};
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult, AuthUser, CurrentAdmin};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct WhoamiResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub email: Option<String>,
    pub role: String,
    pub role_name: &'static str,
    pub role_color: &'static str,
    pub permissions: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub created_by: Option<Uuid>,
}

/// GET /api/auth/whoami - the calling admin and everything it may do
pub async fn whoami(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Extension(CurrentAdmin(admin)): Extension<CurrentAdmin>,
) -> ApiResult<WhoamiResponse> {
    // validate_admin_middleware only lets recognized roles through
    let role = admin.admin_role().ok_or_else(ApiError::not_admin)?;

    Ok(ApiResponse::success(WhoamiResponse {
        id: admin.id,
        user_id: admin.user_id,
        email: user.email,
        role: role.to_string(),
        role_name: role.display_name(),
        role_color: role.badge_color(),
        permissions: state.resolver.granted_actions(&admin),
        created_at: admin.created_at,
        created_by: admin.created_by,
    }))
}
