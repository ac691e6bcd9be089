use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use uuid::Uuid;

use admin_console::auth::TokenAuthority;
use admin_console::database::models::AdminRecord;
use admin_console::handlers;
use admin_console::services::MemoryAdminStore;
use admin_console::state::AppState;

pub const TEST_SECRET: &str = "integration-test-secret";

pub struct TestServer {
    pub base_url: String,
    pub tokens: TokenAuthority,
    pub client: reqwest::Client,
}

impl TestServer {
    /// Serve the full router over a memory store seeded with `records`
    pub async fn spawn(records: Vec<AdminRecord>) -> Result<Self> {
        let port = portpicker::pick_unused_port().context("failed to pick free port")?;
        let base_url = format!("http://127.0.0.1:{}", port);

        let tokens = TokenAuthority::new(TEST_SECRET, 1)?;
        let store = Arc::new(MemoryAdminStore::with_records(records));
        let state = AppState::new(store, tokens.clone(), "sb-access-token");

        let listener = tokio::net::TcpListener::bind(("127.0.0.1", port))
            .await
            .context("failed to bind test port")?;
        tokio::spawn(async move {
            let _ = axum::serve(listener, handlers::router(state)).await;
        });

        let server = Self {
            base_url,
            tokens,
            client: reqwest::Client::new(),
        };
        server.wait_ready(Duration::from_secs(5)).await?;
        Ok(server)
    }

    async fn wait_ready(&self, timeout: Duration) -> Result<()> {
        let deadline = tokio::time::Instant::now() + timeout;
        while tokio::time::Instant::now() < deadline {
            if self.client.get(self.url("/health")).send().await.is_ok() {
                return Ok(());
            }
            tokio::time::sleep(Duration::from_millis(50)).await;
        }
        anyhow::bail!("server did not become ready on {} within {:?}", self.base_url, timeout)
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub fn token_for(&self, user_id: Uuid) -> Result<String> {
        Ok(self.tokens.issue(user_id, Some("ops@example.com".to_string()))?)
    }

    /// GET `path` as `user_id` with a bearer token
    pub async fn get_as(&self, user_id: Uuid, path: &str) -> Result<reqwest::Response> {
        let token = self.token_for(user_id)?;
        Ok(self.client.get(self.url(path)).bearer_auth(token).send().await?)
    }
}
