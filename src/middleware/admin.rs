use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use super::auth::AuthUser;
use crate::database::models::AdminRecord;
use crate::error::ApiError;
use crate::state::AppState;

/// Validated admin record for the authenticated user
#[derive(Clone, Debug)]
pub struct CurrentAdmin(pub AdminRecord);

/// Middleware that resolves the authenticated user to a valid admin record.
/// Lookup failures and unrecognized roles both reject with `NOT_ADMIN`.
pub async fn validate_admin_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let auth_user = request
        .extensions()
        .get::<AuthUser>()
        .cloned()
        .ok_or_else(|| ApiError::unauthorized("Authentication required before admin validation"))?;

    let admin = state.admins.validate_admin(auth_user.user_id).await.ok_or_else(|| {
        tracing::warn!("Admin validation failed for user {}", auth_user.user_id);
        ApiError::not_admin()
    })?;

    tracing::debug!(
        "Admin validation successful: admin {} ({:?}) for user {}",
        admin.id,
        admin.role,
        auth_user.user_id
    );

    request.extensions_mut().insert(CurrentAdmin(admin));

    Ok(next.run(request).await)
}

/// Gate a named action for the current admin
pub fn require_permission(state: &AppState, admin: &AdminRecord, action: &str) -> Result<(), ApiError> {
    state.resolver.authorize(admin, action).map_err(|e| {
        tracing::warn!("Denied '{}' for admin {}: {}", action, admin.id, e);
        ApiError::from(e)
    })
}
