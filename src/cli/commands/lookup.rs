use std::sync::Arc;

use anyhow::Context;
use serde_json::json;
use uuid::Uuid;

use crate::authz::PermissionResolver;
use crate::cli::utils::output;
use crate::cli::OutputFormat;
use crate::config;
use crate::database::DatabaseManager;
use crate::services::{AdminService, PgAdminStore};

pub async fn handle(user_id: Uuid, output_format: OutputFormat) -> anyhow::Result<()> {
    let config = config::config();
    let pool = DatabaseManager::connect(&config.database)
        .await
        .context("failed to connect to the database")?;
    let store = PgAdminStore::new(pool, &config.database.admins_table)?;
    let service = AdminService::new(Arc::new(store));

    // Operators need to tell an outage from a missing record
    let admin = service
        .try_get_admin_by_user_id(user_id)
        .await
        .context("admin lookup failed")?;

    let Some(admin) = admin else {
        return output(
            output_format,
            &[format!("No admin record for user {}", user_id)],
            &json!({ "user_id": user_id, "admin": null }),
        );
    };

    let valid = admin.has_valid_role();
    let granted = PermissionResolver::default().granted_actions(&admin);

    let mut text = vec![
        format!("Admin {} for user {}", admin.id, admin.user_id),
        format!(
            "Role: {}{}",
            admin.role.as_deref().unwrap_or("<none>"),
            if valid { "" } else { " (INVALID - denied all actions)" }
        ),
        format!("Created: {} by {:?}", admin.created_at, admin.created_by),
    ];
    if !granted.is_empty() {
        text.push(format!("Allowed: {}", granted.join(", ")));
    }

    output(
        output_format,
        &text,
        &json!({
            "user_id": user_id,
            "admin": admin,
            "valid": valid,
            "allowed": granted,
        }),
    )
}
