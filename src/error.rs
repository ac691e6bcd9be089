// HTTP API Error Types
use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::{json, Value};

use crate::auth::JwtError;
use crate::authz::AuthzError;
use crate::database::manager::DatabaseError;

/// HTTP API error with appropriate status codes and client-friendly messages
#[derive(Debug)]
pub enum ApiError {
    // 400 Bad Request
    BadRequest { message: String, code: &'static str },

    // 401 Unauthorized
    Unauthorized(String),

    // 403 Forbidden
    Forbidden { message: String, code: &'static str },

    // 500 Internal Server Error
    InternalServerError(String),

    // 503 Service Unavailable
    ServiceUnavailable(String),
}

impl ApiError {
    /// Get HTTP status code
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden { .. } => StatusCode::FORBIDDEN,
            ApiError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    /// Get client-safe error message
    pub fn message(&self) -> &str {
        match self {
            ApiError::BadRequest { message, .. } => message,
            ApiError::Unauthorized(msg) => msg,
            ApiError::Forbidden { message, .. } => message,
            ApiError::InternalServerError(msg) => msg,
            ApiError::ServiceUnavailable(msg) => msg,
        }
    }

    /// Get error code for client handling
    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::BadRequest { code, .. } => *code,
            ApiError::Unauthorized(_) => "UNAUTHORIZED",
            ApiError::Forbidden { code, .. } => *code,
            ApiError::InternalServerError(_) => "INTERNAL_SERVER_ERROR",
            ApiError::ServiceUnavailable(_) => "SERVICE_UNAVAILABLE",
        }
    }

    /// Failure envelope: `{ "data": null, "error": { "message", "code" } }`
    pub fn to_json(&self) -> Value {
        json!({
            "data": null,
            "error": {
                "message": self.message(),
                "code": self.error_code()
            }
        })
    }
}

impl ApiError {
    pub fn unauthorized(message: impl Into<String>) -> Self {
        ApiError::Unauthorized(message.into())
    }

    pub fn internal_server_error(message: impl Into<String>) -> Self {
        ApiError::InternalServerError(message.into())
    }

    pub fn service_unavailable(message: impl Into<String>) -> Self {
        ApiError::ServiceUnavailable(message.into())
    }

    pub fn not_admin() -> Self {
        AuthzError::NotAdmin.into()
    }

    pub fn insufficient_permissions() -> Self {
        ApiError::Forbidden {
            message: "Access denied: Insufficient permissions for this action".to_string(),
            code: "INSUFFICIENT_PERMISSIONS",
        }
    }
}

impl From<AuthzError> for ApiError {
    fn from(err: AuthzError) -> Self {
        let code = err.code();
        match err {
            AuthzError::NotAdmin => ApiError::Forbidden {
                message: err.to_string(),
                code,
            },
            AuthzError::InsufficientPermission { .. } => ApiError::insufficient_permissions(),
            AuthzError::InvalidRole(_) => ApiError::BadRequest {
                message: "Invalid admin role".to_string(),
                code,
            },
        }
    }
}

impl From<JwtError> for ApiError {
    fn from(err: JwtError) -> Self {
        match err {
            JwtError::InvalidToken(_) | JwtError::InvalidSubject(_) => {
                tracing::debug!("Rejected session token: {}", err);
                ApiError::unauthorized("Invalid or expired session")
            }
            JwtError::TokenGeneration(_) | JwtError::InvalidSecret => {
                tracing::error!("Token authority error: {}", err);
                ApiError::internal_server_error("Authentication is misconfigured")
            }
        }
    }
}

impl From<DatabaseError> for ApiError {
    fn from(err: DatabaseError) -> Self {
        match err {
            DatabaseError::Unavailable(_) => ApiError::service_unavailable("Database temporarily unavailable"),
            DatabaseError::Sqlx(sqlx_err) => {
                // Log the real error but return generic message
                tracing::error!("SQLx error: {}", sqlx_err);
                ApiError::service_unavailable("Database temporarily unavailable")
            }
            other => {
                tracing::error!("Database error: {}", other);
                ApiError::internal_server_error("An error occurred while processing your request")
            }
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ApiError {}

// Automatic HTTP response conversion for Axum
impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        (self.status_code(), Json(self.to_json())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn authz_errors_map_to_codes() {
        let not_admin: ApiError = AuthzError::NotAdmin.into();
        assert_eq!(not_admin.status_code(), StatusCode::FORBIDDEN);
        assert_eq!(not_admin.error_code(), "NOT_ADMIN");
        assert_eq!(not_admin.message(), "Access denied: User is not an admin");

        let denied: ApiError = AuthzError::InsufficientPermission {
            action: "delete_user".to_string(),
        }
        .into();
        assert_eq!(denied.status_code(), StatusCode::FORBIDDEN);
        assert_eq!(denied.error_code(), "INSUFFICIENT_PERMISSIONS");

        let invalid: ApiError = AuthzError::InvalidRole("owner".to_string()).into();
        assert_eq!(invalid.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(invalid.error_code(), "INVALID_ROLE");
    }

    #[test]
    fn failure_envelope_shape() {
        let body = ApiError::unauthorized("Missing session").to_json();
        assert!(body["data"].is_null());
        assert_eq!(body["error"]["message"], "Missing session");
        assert_eq!(body["error"]["code"], "UNAUTHORIZED");
    }

    #[test]
    fn token_errors_are_unauthorized() {
        let err: ApiError = JwtError::InvalidToken("ExpiredSignature".to_string()).into();
        assert_eq!(err.status_code(), StatusCode::UNAUTHORIZED);
    }
}
