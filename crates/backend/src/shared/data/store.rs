use chrono::{DateTime, Utc};
use contracts::dashboards::d400_inventory_summary::DashboardStats;
use contracts::dashboards::d401_service_summary::ServiceStats;
use contracts::domain::a001_product::Product;
use contracts::domain::a002_category::CategoryNode;
use contracts::domain::a003_service::Service;
use contracts::domain::a004_appointment::Appointment;
use contracts::shared::logger::LogEntry;
use contracts::system::users::User;
use once_cell::sync::Lazy;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("{0}")]
    Conflict(String),
    #[error("store lock poisoned")]
    Poisoned,
}

/// User record together with its credential hash.
///
/// The hash never leaves the store layer; API responses carry only the
/// contract `User`.
#[derive(Debug, Clone)]
pub struct StoredUser {
    pub user: User,
    pub password_hash: String,
}

#[derive(Debug, Clone)]
pub struct RefreshTokenRecord {
    pub id: String,
    pub user_id: String,
    /// SHA-256 of the opaque token, the token itself is never stored
    pub token_hash: String,
    pub expires_at: DateTime<Utc>,
    pub revoked_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

/// Process-wide in-memory dataset backing every repository.
///
/// All data lives for the lifetime of the process and is re-seeded on
/// startup. Repositories take short-lived read/write locks; nothing holds a
/// guard across an await point.
#[derive(Debug)]
pub struct MockStore {
    pub products: Vec<Product>,
    pub categories: Vec<CategoryNode>,
    pub services: Vec<Service>,
    pub service_categories: Vec<CategoryNode>,
    pub appointments: Vec<Appointment>,
    pub dashboard_stats: Option<DashboardStats>,
    pub service_stats: Option<ServiceStats>,
    pub logs: Vec<LogEntry>,
    pub next_log_id: i64,
    pub users: Vec<StoredUser>,
    pub refresh_tokens: Vec<RefreshTokenRecord>,
}

impl Default for MockStore {
    fn default() -> Self {
        Self {
            products: Vec::new(),
            categories: Vec::new(),
            services: Vec::new(),
            service_categories: Vec::new(),
            appointments: Vec::new(),
            dashboard_stats: None,
            service_stats: None,
            logs: Vec::new(),
            next_log_id: 1,
            users: Vec::new(),
            refresh_tokens: Vec::new(),
        }
    }
}

static STORE: Lazy<RwLock<MockStore>> = Lazy::new(|| RwLock::new(MockStore::default()));

pub fn read() -> Result<RwLockReadGuard<'static, MockStore>, StoreError> {
    STORE.read().map_err(|_| StoreError::Poisoned)
}

pub fn write() -> Result<RwLockWriteGuard<'static, MockStore>, StoreError> {
    STORE.write().map_err(|_| StoreError::Poisoned)
}
