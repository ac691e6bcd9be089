use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use admin_console::auth::TokenAuthority;
use admin_console::config;
use admin_console::database::DatabaseManager;
use admin_console::handlers;
use admin_console::services::PgAdminStore;
use admin_console::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up DATABASE_URL, SECURITY_JWT_SECRET, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = config::config();
    tracing::info!("Starting Admin Console API in {:?} mode", config.environment);

    let tokens = TokenAuthority::from_config(&config.security).context("SECURITY_JWT_SECRET must be set")?;
    let pool = DatabaseManager::connect(&config.database).await?;
    let store = PgAdminStore::new(pool, &config.database.admins_table)?;

    let state = AppState::new(Arc::new(store), tokens, config.security.session_cookie.clone());
    let app = handlers::app(state, &config.api, &config.security);

    let bind_addr = format!("0.0.0.0:{}", config.api.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;

    tracing::info!("Admin Console API listening on http://{}", bind_addr);

    axum::serve(listener, app).await?;
    Ok(())
}
