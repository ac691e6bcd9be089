pub mod admin;
pub mod auth;
pub mod response;

pub use admin::{require_permission, validate_admin_middleware, CurrentAdmin};
pub use auth::{jwt_auth_middleware, AuthUser};
pub use response::{ApiResponse, ApiResult};
