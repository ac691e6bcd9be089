use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use sqlx::PgPool;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::database::manager::{DatabaseError, DatabaseManager};
use crate::database::models::{AdminRecord, AdminRow, ADMIN_COLUMNS};

/// Source of admin records keyed by identity-provider user id
#[async_trait]
pub trait AdminStore: Send + Sync {
    /// At most one record for `user_id`
    async fn find_by_user_id(&self, user_id: Uuid) -> Result<Option<AdminRecord>, DatabaseError>;

    /// Connectivity probe used by the health endpoint
    async fn ping(&self) -> Result<(), DatabaseError> {
        Ok(())
    }
}

/// Admin store backed by the hosted Postgres service
pub struct PgAdminStore {
    pool: PgPool,
    select_query: String,
}

impl PgAdminStore {
    pub fn new(pool: PgPool, table: &str) -> Result<Self, DatabaseError> {
        if !DatabaseManager::is_valid_table_name(table) {
            return Err(DatabaseError::InvalidTableName(table.to_string()));
        }

        // LIMIT 2 so a duplicated user_id is detected instead of silently picking one
        let select_query = format!(
            "SELECT {} FROM {} WHERE user_id = $1 LIMIT 2",
            ADMIN_COLUMNS,
            DatabaseManager::quote_identifier(table)
        );

        Ok(Self { pool, select_query })
    }
}

#[async_trait]
impl AdminStore for PgAdminStore {
    async fn find_by_user_id(&self, user_id: Uuid) -> Result<Option<AdminRecord>, DatabaseError> {
        let mut rows = sqlx::query_as::<_, AdminRow>(&self.select_query)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await?;

        if rows.len() > 1 {
            return Err(DatabaseError::QueryError(format!(
                "multiple admin rows for user {}",
                user_id
            )));
        }

        Ok(rows.pop().map(AdminRecord::from))
    }

    async fn ping(&self) -> Result<(), DatabaseError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

/// In-process admin store for fixtures and tests
#[derive(Default)]
pub struct MemoryAdminStore {
    records: RwLock<HashMap<Uuid, AdminRecord>>,
}

impl MemoryAdminStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: impl IntoIterator<Item = AdminRecord>) -> Self {
        let records = records.into_iter().map(|record| (record.user_id, record)).collect();
        Self {
            records: RwLock::new(records),
        }
    }

    pub async fn insert(&self, record: AdminRecord) {
        self.records.write().await.insert(record.user_id, record);
    }
}

#[async_trait]
impl AdminStore for MemoryAdminStore {
    async fn find_by_user_id(&self, user_id: Uuid) -> Result<Option<AdminRecord>, DatabaseError> {
        Ok(self.records.read().await.get(&user_id).cloned())
    }
}

/// Admin Lookup: fetches an admin record fresh on every call, no caching
#[derive(Clone)]
pub struct AdminService {
    store: Arc<dyn AdminStore>,
}

impl AdminService {
    pub fn new(store: Arc<dyn AdminStore>) -> Self {
        Self { store }
    }

    /// Lookup that keeps store failures distinct from absence
    pub async fn try_get_admin_by_user_id(&self, user_id: Uuid) -> Result<Option<AdminRecord>, DatabaseError> {
        self.store.find_by_user_id(user_id).await
    }

    /// Lookup that treats store failures as "not an admin"
    pub async fn get_admin_by_user_id(&self, user_id: Uuid) -> Option<AdminRecord> {
        match self.try_get_admin_by_user_id(user_id).await {
            Ok(admin) => admin,
            Err(e) => {
                tracing::error!("Admin lookup failed for user {}: {}", user_id, e);
                None
            }
        }
    }

    /// Admin record only if its role is recognized
    pub async fn validate_admin(&self, user_id: Uuid) -> Option<AdminRecord> {
        let admin = self.get_admin_by_user_id(user_id).await?;

        if !admin.has_valid_role() {
            tracing::error!(
                "Invalid admin role {:?} for user {} (admin {})",
                admin.role,
                user_id,
                admin.id
            );
            return None;
        }

        Some(admin)
    }

    pub async fn health_check(&self) -> Result<(), DatabaseError> {
        self.store.ping().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingStore;

    #[async_trait]
    impl AdminStore for FailingStore {
        async fn find_by_user_id(&self, _user_id: Uuid) -> Result<Option<AdminRecord>, DatabaseError> {
            Err(DatabaseError::Unavailable("connection refused".to_string()))
        }

        async fn ping(&self) -> Result<(), DatabaseError> {
            Err(DatabaseError::Unavailable("connection refused".to_string()))
        }
    }

    fn service_with(records: Vec<AdminRecord>) -> AdminService {
        AdminService::new(Arc::new(MemoryAdminStore::with_records(records)))
    }

    #[tokio::test]
    async fn finds_admin_by_user_id() {
        let user_id = Uuid::new_v4();
        let service = service_with(vec![AdminRecord::new(user_id, "manager")]);

        let admin = service.get_admin_by_user_id(user_id).await.expect("admin");
        assert_eq!(admin.user_id, user_id);
        assert_eq!(admin.role.as_deref(), Some("manager"));
    }

    #[tokio::test]
    async fn missing_and_failing_lookups_look_the_same() {
        let missing = service_with(vec![]);
        let failing = AdminService::new(Arc::new(FailingStore));
        let user_id = Uuid::new_v4();

        assert!(missing.get_admin_by_user_id(user_id).await.is_none());
        assert!(failing.get_admin_by_user_id(user_id).await.is_none());
        assert!(failing.validate_admin(user_id).await.is_none());
    }

    #[tokio::test]
    async fn try_lookup_surfaces_store_errors() {
        let failing = AdminService::new(Arc::new(FailingStore));
        let result = failing.try_get_admin_by_user_id(Uuid::new_v4()).await;
        assert!(matches!(result, Err(DatabaseError::Unavailable(_))));
        assert!(failing.health_check().await.is_err());
    }

    #[tokio::test]
    async fn validate_rejects_unrecognized_role() {
        let user_id = Uuid::new_v4();
        let service = service_with(vec![AdminRecord::new(user_id, "owner")]);

        assert!(service.get_admin_by_user_id(user_id).await.is_some());
        assert!(service.validate_admin(user_id).await.is_none());
    }

    #[tokio::test]
    async fn validate_rejects_missing_role() {
        let user_id = Uuid::new_v4();
        let mut record = AdminRecord::new(user_id, "viewer");
        record.role = None;
        let service = service_with(vec![record]);

        assert!(service.validate_admin(user_id).await.is_none());
    }

    #[tokio::test]
    async fn validate_accepts_recognized_role() {
        let user_id = Uuid::new_v4();
        let store = Arc::new(MemoryAdminStore::new());
        store.insert(AdminRecord::new(user_id, "viewer")).await;
        let service = AdminService::new(store);

        let admin = service.validate_admin(user_id).await.expect("valid admin");
        assert!(admin.has_valid_role());
        assert!(service.health_check().await.is_ok());
    }

    #[tokio::test]
    async fn pg_store_rejects_bad_table_name() {
        // connect_lazy does not touch the network
        let pool = sqlx::postgres::PgPoolOptions::new()
            .connect_lazy("postgres://localhost/console")
            .expect("lazy pool");
        assert!(matches!(
            PgAdminStore::new(pool.clone(), "admins; --"),
            Err(DatabaseError::InvalidTableName(_))
        ));
        let store = PgAdminStore::new(pool, "admins").expect("store");
        assert_eq!(
            store.select_query,
            "SELECT id, user_id, role, permissions, created_at, created_by FROM \"admins\" WHERE user_id = $1 LIMIT 2"
        );
    }
}
