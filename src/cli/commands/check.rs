use serde_json::json;
use uuid::Uuid;

use crate::authz::{AuthzError, PermissionOverrides, PermissionResolver};
use crate::cli::utils::output;
use crate::cli::OutputFormat;
use crate::database::models::AdminRecord;

/// Parse `action=true|false`
pub fn parse_grant(value: &str) -> Result<(String, bool), String> {
    let (action, flag) = value
        .split_once('=')
        .ok_or_else(|| format!("expected action=true|false, got '{}'", value))?;

    if action.is_empty() {
        return Err("override action name is empty".to_string());
    }

    let flag = flag
        .parse::<bool>()
        .map_err(|_| format!("override value for '{}' must be true or false", action))?;

    Ok((action.to_string(), flag))
}

/// Outcome of a dry-run authorization; `reason` is set only on denial
#[derive(Debug, PartialEq)]
pub struct Verdict {
    pub allowed: bool,
    pub reason: Option<String>,
}

impl Verdict {
    pub fn label(&self) -> &'static str {
        if self.allowed {
            "ALLOW"
        } else {
            "DENY"
        }
    }
}

pub fn evaluate(resolver: &PermissionResolver, role: &str, action: &str, grants: Vec<(String, bool)>) -> Verdict {
    let admin = AdminRecord::new(Uuid::nil(), role).with_permissions(grants.into_iter().collect::<PermissionOverrides>());

    match resolver.authorize(&admin, action) {
        Ok(()) => Verdict {
            allowed: true,
            reason: None,
        },
        Err(e @ AuthzError::NotAdmin) => Verdict {
            allowed: false,
            reason: Some(format!("{} (unrecognized role '{}')", e, role)),
        },
        Err(e) => Verdict {
            allowed: false,
            reason: Some(e.to_string()),
        },
    }
}

pub fn handle(role: &str, action: &str, grants: Vec<(String, bool)>, output_format: OutputFormat) -> anyhow::Result<()> {
    let verdict = evaluate(&PermissionResolver::default(), role, action, grants);

    let mut text = vec![format!("{} {} -> {}", role, action, verdict.label())];
    text.extend(verdict.reason.clone());

    output(
        output_format,
        &text,
        &json!({
            "role": role,
            "action": action,
            "allowed": verdict.allowed,
            "reason": verdict.reason,
        }),
    )
}
