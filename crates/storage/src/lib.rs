//! Storage Layer
//!
//! Provides SQLite persistence for storage telemetry records with a
//! repository pattern.

mod repository;

pub use repository::{normalize_database_url, Repository, StorageRecord};

use thiserror::Error;

/// Storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}
