pub mod kv;
pub mod migrations;
pub mod models;
pub mod queries;

pub use kv::{KeyValueStore, MemoryStore, SqliteStore, StoreError};
pub use migrations::{create_database_pool, create_memory_pool};
pub use models::{AppState, DateRange, Stats, Theme, VisibilityMap};
