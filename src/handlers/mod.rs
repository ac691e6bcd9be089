// handlers/mod.rs - two security tiers
//
// Public (no auth) → Protected (session token + valid admin record)
pub mod protected;
pub mod public;

use axum::{
    http::{header, HeaderValue, Method},
    middleware,
    routing::get,
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::{ApiConfig, SecurityConfig};
use crate::middleware::{jwt_auth_middleware, validate_admin_middleware};
use crate::state::AppState;

/// Application routes without outer layers
pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(public_routes())
        .merge(protected_routes(state.clone()))
        .with_state(state)
}

/// [`router`] wrapped in request tracing and CORS as configured
pub fn app(state: AppState, api: &ApiConfig, security: &SecurityConfig) -> Router {
    let mut app = router(state);

    if api.enable_request_logging {
        app = app.layer(TraceLayer::new_for_http());
    }

    if let Some(cors) = cors_layer(security) {
        app = app.layer(cors);
    }

    app
}

/// CORS for the configured origins; browsers send either the bearer header or the session cookie
pub fn cors_layer(security: &SecurityConfig) -> Option<CorsLayer> {
    if !security.enable_cors {
        return None;
    }

    let origins: Vec<HeaderValue> = security
        .cors_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    Some(
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([Method::GET])
            .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
            .allow_credentials(true),
    )
}

fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(public::root))
        .route("/health", get(public::health))
}

fn protected_routes(state: AppState) -> Router<AppState> {
    // Layers run bottom-up: the session gate before admin validation
    Router::new()
        .route("/api/auth/whoami", get(protected::whoami))
        .route("/api/roles", get(protected::roles_list))
        .route("/api/permissions", get(protected::permissions_list))
        .route("/api/permissions/:action", get(protected::permission_check))
        .layer(middleware::from_fn_with_state(state.clone(), validate_admin_middleware))
        .layer(middleware::from_fn_with_state(state, jwt_auth_middleware))
}
