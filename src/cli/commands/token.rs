use anyhow::Context;
use serde_json::json;
use uuid::Uuid;

use crate::auth::TokenAuthority;
use crate::cli::utils::output;
use crate::cli::OutputFormat;
use crate::config;

pub fn handle(user_id: Uuid, email: Option<String>, output_format: OutputFormat) -> anyhow::Result<()> {
    let security = &config::config().security;
    let tokens = TokenAuthority::from_config(security).context("SECURITY_JWT_SECRET must be set")?;
    let token = tokens.issue(user_id, email)?;

    output(
        output_format,
        &[token.clone()],
        &json!({
            "user_id": user_id,
            "token": token,
            "expires_in_hours": security.jwt_expiry_hours,
        }),
    )
}
