use axum::{
    extract::{Request, State},
    http::{header, HeaderMap},
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::auth::{extract_bearer_token, extract_cookie};
use crate::error::ApiError;
use crate::state::AppState;

/// Authenticated identity extracted from the session token
#[derive(Clone, Debug)]
pub struct AuthUser {
    pub user_id: Uuid,
    pub email: Option<String>,
}

/// Session gate: validates the bearer token (or session cookie) and injects `AuthUser`
pub async fn jwt_auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = extract_session_token(request.headers(), &state.session_cookie).map_err(ApiError::unauthorized)?;

    let claims = state.tokens.verify(&token)?;
    let user_id = claims.user_id()?;

    request.extensions_mut().insert(AuthUser {
        user_id,
        email: claims.email,
    });

    Ok(next.run(request).await)
}

/// Authorization header first, then the session cookie
fn extract_session_token(headers: &HeaderMap, cookie_name: &str) -> Result<String, String> {
    if let Some(auth_header) = headers.get(header::AUTHORIZATION) {
        let auth_str = auth_header
            .to_str()
            .map_err(|_| "Invalid Authorization header format".to_string())?;
        return extract_bearer_token(auth_str).map(str::to_string);
    }

    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .find_map(|cookies| extract_cookie(cookies, cookie_name))
        .map(str::to_string)
        .ok_or_else(|| "Missing session".to_string())
}
