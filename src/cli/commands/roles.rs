use serde_json::json;

use crate::authz::ALLOWED_ADMIN_ROLES;
use crate::cli::utils::output;
use crate::cli::OutputFormat;

pub fn handle(output_format: OutputFormat) -> anyhow::Result<()> {
    let text: Vec<String> = ALLOWED_ADMIN_ROLES
        .iter()
        .map(|role| format!("{:<12} rank {}  {} ({})", role.as_str(), role.rank(), role.display_name(), role.badge_color()))
        .collect();

    let data = json!(ALLOWED_ADMIN_ROLES
        .iter()
        .map(|role| json!({
            "role": role.as_str(),
            "rank": role.rank(),
            "name": role.display_name(),
            "color": role.badge_color(),
        }))
        .collect::<Vec<_>>());

    output(output_format, &text, &data)
}
