use axum::extract::State;
use chrono::Utc;
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;

/// GET / - service description
pub async fn root() -> ApiResponse<Value> {
    ApiResponse::success(json!({
        "name": "Admin Console API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "health": "/health (public)",
            "whoami": "/api/auth/whoami (admin)",
            "roles": "/api/roles (admin)",
            "permissions": "/api/permissions[/:action] (admin)",
        }
    }))
}

/// GET /health - liveness plus admin store connectivity
pub async fn health(State(state): State<AppState>) -> ApiResult<Value> {
    state.admins.health_check().await.map_err(|e| {
        tracing::warn!("Health check failed: {}", e);
        ApiError::service_unavailable("database unavailable")
    })?;

    Ok(ApiResponse::success(json!({
        "status": "ok",
        "timestamp": Utc::now(),
        "database": "ok"
    })))
}
