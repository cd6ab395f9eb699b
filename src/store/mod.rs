//! Persistence of status checks.
//!
//! Two backends implement [`StatusStore`]: [`SqliteStatusStore`] keeps status
//! checks in a database shared by every process opening the same file, and
//! [`MemoryStatusStore`] keeps them for the lifetime of the process only. The
//! backend is picked once at startup by [`open_store`] and never re-evaluated.

use crate::models::status_check::{StatusCheck, StatusCheckCreate};
use async_trait::async_trait;
use std::sync::Arc;

pub mod memory;
pub mod sqlite;

pub use memory::MemoryStatusStore;
pub use sqlite::SqliteStatusStore;

/// Maximum number of records returned by a database `list`.
pub const LIST_LIMIT: usize = 1000;

#[async_trait]
pub trait StatusStore: Send + Sync {
    /// Builds a status check from `input`, stores it and returns the stored value.
    async fn create(&self, input: StatusCheckCreate) -> anyhow::Result<StatusCheck>;

    /// All status checks, oldest first.
    async fn list(&self) -> anyhow::Result<Vec<StatusCheck>>;

    async fn get_by_id(&self, id: &str) -> anyhow::Result<Option<StatusCheck>>;

    fn backend(&self) -> &'static str;

    /// Releases the underlying connection, if any.
    async fn close(&self) {}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreBackend {
    Database { url: String, namespace: String },
    Memory,
}

impl StoreBackend {
    /// An in-memory SQLite URL resolves to [`StoreBackend::Memory`]: its tables
    /// vanish whenever the pool drops its last connection.
    pub fn from_config(database_url: Option<&str>, db_name: &str) -> Self {
        match database_url.map(str::trim) {
            Some(url) if !url.is_empty() && !is_sqlite_memory_url(url) => {
                StoreBackend::Database { url: url.to_string(), namespace: db_name.to_string() }
            }
            _ => StoreBackend::Memory,
        }
    }
}

fn is_sqlite_memory_url(url: &str) -> bool {
    url.contains(":memory:") || url.contains("mode=memory")
}

/// Opens the configured backend. A database that cannot be reached degrades to
/// the in-memory store.
pub async fn open_store(backend: &StoreBackend) -> Arc<dyn StatusStore> {
    match backend {
        StoreBackend::Database { url, namespace } => match SqliteStatusStore::connect(url, namespace).await {
            Ok(store) => {
                log::info!("Database connected successfully, namespace: {}", namespace);
                Arc::new(store)
            }
            Err(e) => {
                log::warn!("Database connection failed, status checks are kept in memory: {:?}", e);
                Arc::new(MemoryStatusStore::new())
            }
        },
        StoreBackend::Memory => {
            log::info!("No database configured, status checks are kept in memory");
            Arc::new(MemoryStatusStore::new())
        }
    }
}
