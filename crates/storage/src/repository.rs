//! Repository Implementation

use crate::StorageError;
use serde::{Deserialize, Serialize};
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::{FromRow, SqlitePool};
use std::str::FromStr;
use tracing::{debug, info};

/// One persisted storage-system observation.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct StorageRecord {
    pub id: i64,
    pub company: String,
    pub capacity_used: f64,
    pub error_status: String,
}

/// Table schema, applied idempotently at connect time.
const SCHEMA: &str = "\
CREATE TABLE IF NOT EXISTS storage_records (
    id            INTEGER PRIMARY KEY AUTOINCREMENT,
    company       TEXT NOT NULL,
    capacity_used REAL NOT NULL,
    error_status  TEXT NOT NULL
)";

/// Rewrite a legacy `sqlite3://` scheme prefix to the `sqlite://` scheme the
/// driver expects. Any other URL is returned unchanged.
pub fn normalize_database_url(url: &str) -> String {
    match url.strip_prefix("sqlite3://") {
        Some(rest) => format!("sqlite://{rest}"),
        None => url.to_string(),
    }
}

/// Repository for telemetry record access, backed by a SQLite pool.
///
/// Cheap to clone; clones share the underlying pool. Construct once at
/// startup and call [`Repository::close`] at shutdown.
#[derive(Clone)]
pub struct Repository {
    pool: SqlitePool,
}

impl Repository {
    /// Open the database at `database_url`, creating the file and the
    /// schema if either is absent.
    pub async fn connect(database_url: &str) -> Result<Self, StorageError> {
        let url = normalize_database_url(database_url);
        info!("Opening database at {}", url);

        let options = SqliteConnectOptions::from_str(&url)?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await?;

        sqlx::query(SCHEMA).execute(&pool).await?;

        Ok(Self { pool })
    }

    /// Insert one record and return it with its freshly assigned id.
    pub async fn insert(
        &self,
        company: &str,
        capacity_used: f64,
        error_status: &str,
    ) -> Result<StorageRecord, StorageError> {
        let result = sqlx::query(
            "INSERT INTO storage_records (company, capacity_used, error_status) \
             VALUES (?1, ?2, ?3)",
        )
        .bind(company)
        .bind(capacity_used)
        .bind(error_status)
        .execute(&self.pool)
        .await?;

        let id = result.last_insert_rowid();
        debug!("Inserted record {}", id);

        Ok(StorageRecord {
            id,
            company: company.to_string(),
            capacity_used,
            error_status: error_status.to_string(),
        })
    }

    /// All records in insertion order.
    pub async fn list_all(&self) -> Result<Vec<StorageRecord>, StorageError> {
        let records = sqlx::query_as::<_, StorageRecord>(
            "SELECT id, company, capacity_used, error_status \
             FROM storage_records ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(records)
    }

    /// Delete every record inside a single transaction and return the count
    /// removed. A failure rolls the transaction back, so no rows are
    /// considered deleted.
    pub async fn delete_all(&self) -> Result<u64, StorageError> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query("DELETE FROM storage_records")
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        let deleted = result.rows_affected();
        info!("Deleted {} records", deleted);
        Ok(deleted)
    }

    /// Close the pool. Call once at shutdown.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    async fn open_repo() -> (TempDir, Repository) {
        let dir = tempfile::tempdir().unwrap();
        let url = format!("sqlite://{}", dir.path().join("telemetry.db").display());
        let repo = Repository::connect(&url).await.unwrap();
        (dir, repo)
    }

    #[test]
    fn legacy_scheme_is_rewritten() {
        assert_eq!(
            normalize_database_url("sqlite3:///var/data/telemetry.db"),
            "sqlite:///var/data/telemetry.db"
        );
    }

    #[test]
    fn other_urls_pass_through() {
        assert_eq!(
            normalize_database_url("sqlite://telemetry.db"),
            "sqlite://telemetry.db"
        );
        assert_eq!(normalize_database_url("sqlite::memory:"), "sqlite::memory:");
    }

    #[tokio::test]
    async fn insert_assigns_increasing_ids() {
        let (_dir, repo) = open_repo().await;

        let first = repo.insert("Dell", 42.5, "No errors").await.unwrap();
        let second = repo.insert("IBM", 77.25, "Disk failure").await.unwrap();

        assert!(second.id > first.id);
        assert_eq!(first.company, "Dell");
        assert_eq!(second.error_status, "Disk failure");
    }

    #[tokio::test]
    async fn list_all_preserves_insertion_order() {
        let (_dir, repo) = open_repo().await;

        repo.insert("NetApp", 10.0, "No errors").await.unwrap();
        repo.insert("Dell", 90.99, "Overheating detected").await.unwrap();
        repo.insert("IBM", 55.5, "Network issue").await.unwrap();

        let records = repo.list_all().await.unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].company, "NetApp");
        assert_eq!(records[1].capacity_used, 90.99);
        assert_eq!(records[2].error_status, "Network issue");
        assert!(records.windows(2).all(|w| w[0].id < w[1].id));
    }

    #[tokio::test]
    async fn delete_all_reports_count_and_empties_table() {
        let (_dir, repo) = open_repo().await;

        for _ in 0..4 {
            repo.insert("Dell", 33.0, "No errors").await.unwrap();
        }

        let deleted = repo.delete_all().await.unwrap();
        assert_eq!(deleted, 4);
        assert!(repo.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn delete_all_on_empty_table_is_zero() {
        let (_dir, repo) = open_repo().await;

        assert_eq!(repo.delete_all().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn schema_creation_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let url = format!("sqlite://{}", dir.path().join("telemetry.db").display());

        let repo = Repository::connect(&url).await.unwrap();
        repo.insert("IBM", 12.34, "No errors").await.unwrap();
        repo.close().await;

        // Reconnecting must keep existing rows intact.
        let repo = Repository::connect(&url).await.unwrap();
        assert_eq!(repo.list_all().await.unwrap().len(), 1);
    }
}
