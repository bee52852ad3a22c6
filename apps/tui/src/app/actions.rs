use crate::db::{create_database_pool, MemoryStore, SqliteStore};
use crate::storage::DashboardStore;
use tracing::{info, warn};

/// Where the dashboard keeps its data for this session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    Sqlite,
    Memory,
}

impl StorageBackend {
    pub const fn describe(self) -> &'static str {
        match self {
            Self::Sqlite => "SQLite",
            Self::Memory => "in-memory (changes will not be saved)",
        }
    }
}

/// Opens the SQLite store at `database_url`. When the database cannot be
/// opened the session still runs, backed by memory.
pub async fn open_store(database_url: &str) -> (DashboardStore, StorageBackend) {
    match create_database_pool(database_url).await {
        Ok(pool) => {
            info!("using SQLite storage");
            (
                DashboardStore::new(Box::new(SqliteStore::new(pool))),
                StorageBackend::Sqlite,
            )
        }
        Err(e) => {
            warn!(error = %e, "database unavailable, falling back to memory storage");
            (
                DashboardStore::new(Box::new(MemoryStore::new())),
                StorageBackend::Memory,
            )
        }
    }
}
