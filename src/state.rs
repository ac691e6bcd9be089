use std::sync::Arc;

use crate::auth::TokenAuthority;
use crate::authz::{PermissionResolver, PermissionTable};
use crate::services::{AdminService, AdminStore};

/// Shared request state. Everything here is immutable after startup.
#[derive(Clone)]
pub struct AppState {
    pub admins: AdminService,
    pub resolver: PermissionResolver,
    pub tokens: TokenAuthority,
    pub session_cookie: String,
}

impl AppState {
    pub fn new(store: Arc<dyn AdminStore>, tokens: TokenAuthority, session_cookie: impl Into<String>) -> Self {
        Self {
            admins: AdminService::new(store),
            resolver: PermissionResolver::new(Arc::new(PermissionTable::default())),
            tokens,
            session_cookie: session_cookie.into(),
        }
    }
}
