mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::Value;
use uuid::Uuid;

use admin_console::authz::PermissionOverrides;
use admin_console::database::models::AdminRecord;
use common::TestServer;

async fn check(server: &TestServer, user_id: Uuid, action: &str) -> Result<StatusCode> {
    let res = server.get_as(user_id, &format!("/api/permissions/{}", action)).await?;
    Ok(res.status())
}

#[tokio::test]
async fn superadmin_passes_every_gate() -> Result<()> {
    let user_id = Uuid::new_v4();
    let server = TestServer::spawn(vec![AdminRecord::new(user_id, "superadmin")]).await?;

    for action in ["delete_admin", "view_logs", "anything"] {
        assert_eq!(check(&server, user_id, action).await?, StatusCode::OK, "{action}");
    }
    Ok(())
}

#[tokio::test]
async fn fixed_rules_use_exact_role_match() -> Result<()> {
    let manager = Uuid::new_v4();
    let viewer = Uuid::new_v4();
    let server = TestServer::spawn(vec![
        AdminRecord::new(manager, "manager"),
        AdminRecord::new(viewer, "viewer"),
    ])
    .await?;

    assert_eq!(check(&server, manager, "delete_user").await?, StatusCode::OK);
    assert_eq!(check(&server, viewer, "delete_user").await?, StatusCode::FORBIDDEN);
    assert_eq!(check(&server, viewer, "view_logs").await?, StatusCode::OK);
    assert_eq!(check(&server, manager, "view_logs").await?, StatusCode::FORBIDDEN);
    Ok(())
}

#[tokio::test]
async fn denial_carries_insufficient_permissions_code() -> Result<()> {
    let viewer = Uuid::new_v4();
    let server = TestServer::spawn(vec![AdminRecord::new(viewer, "viewer")]).await?;

    let res = server.get_as(viewer, "/api/permissions/approve_therapist").await?;
    assert_eq!(res.status(), StatusCode::FORBIDDEN);

    let body = res.json::<Value>().await?;
    assert_eq!(body["error"]["code"], "INSUFFICIENT_PERMISSIONS");
    Ok(())
}

#[tokio::test]
async fn custom_actions_follow_overrides() -> Result<()> {
    let granted = Uuid::new_v4();
    let revoked = Uuid::new_v4();
    let server = TestServer::spawn(vec![
        AdminRecord::new(granted, "manager").with_permissions(PermissionOverrides::new().grant("custom_export", true)),
        AdminRecord::new(revoked, "manager").with_permissions(PermissionOverrides::new().grant("custom_export", false)),
    ])
    .await?;

    let res = server.get_as(granted, "/api/permissions/custom_export").await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body = res.json::<Value>().await?;
    assert_eq!(body["data"]["action"], "custom_export");
    assert_eq!(body["data"]["allowed"], true);

    assert_eq!(check(&server, revoked, "custom_export").await?, StatusCode::FORBIDDEN);
    Ok(())
}

#[tokio::test]
async fn lists_granted_actions() -> Result<()> {
    let viewer = Uuid::new_v4();
    let server = TestServer::spawn(vec![
        AdminRecord::new(viewer, "viewer").with_permissions(PermissionOverrides::new().grant("custom_export", true))
    ])
    .await?;

    let res = server.get_as(viewer, "/api/permissions").await?;
    assert_eq!(res.status(), StatusCode::OK);

    let body = res.json::<Value>().await?;
    assert_eq!(
        body["data"],
        serde_json::json!(["custom_export", "view_logs", "view_payments", "view_therapists", "view_users"])
    );
    Ok(())
}

#[tokio::test]
async fn lists_roles_by_rank() -> Result<()> {
    let viewer = Uuid::new_v4();
    let server = TestServer::spawn(vec![AdminRecord::new(viewer, "viewer")]).await?;

    let res = server.get_as(viewer, "/api/roles").await?;
    assert_eq!(res.status(), StatusCode::OK);

    let body = res.json::<Value>().await?;
    let roles: Vec<&str> = body["data"]
        .as_array()
        .expect("roles array")
        .iter()
        .filter_map(|role| role["role"].as_str())
        .collect();
    assert_eq!(roles, vec!["superadmin", "manager", "viewer"]);
    assert_eq!(body["data"][0]["name"], "Super Admin");
    Ok(())
}
