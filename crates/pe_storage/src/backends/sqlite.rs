use async_trait::async_trait;
use pe_core::{AnalysisRepository, Error, Result, SavedAnalysis};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::Row;
use std::path::{Path, PathBuf};

pub const DEFAULT_PATH: &str = super::SQLITE_DEFAULT_PATH;

/// Row holding the saved list.
pub const BLOB_NAME: &str = "saved_analyses";

const MIGRATIONS: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS blobs (
        name TEXT PRIMARY KEY,
        value TEXT NOT NULL
    )
    "#,
    // Add future migrations here
];

fn storage_error(context: &str, e: sqlx::Error) -> Error {
    Error::Storage(format!("{}: {}", context, e))
}

/// The saved list as one named row in a SQLite database.
pub struct SQLiteStorage {
    pool: SqlitePool,
    db_path: PathBuf,
}

impl SQLiteStorage {
    pub async fn new_with_path(db_path: &Path) -> Result<Self> {
        if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        let options = SqliteConnectOptions::new()
            .filename(db_path)
            .create_if_missing(true);
        let pool = SqlitePool::connect_with(options)
            .await
            .map_err(|e| storage_error("Failed to connect to database", e))?;

        Self::migrate(pool, db_path.to_path_buf()).await
    }

    /// A private database that disappears with the pool.
    pub async fn in_memory() -> Result<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .map_err(|e| storage_error("Failed to open in-memory database", e))?;
        Self::migrate(pool, PathBuf::from(":memory:")).await
    }

    async fn migrate(pool: SqlitePool, db_path: PathBuf) -> Result<Self> {
        for (i, migration) in MIGRATIONS.iter().enumerate() {
            sqlx::query(migration)
                .execute(&pool)
                .await
                .map_err(|e| storage_error(&format!("Failed to run migration {}", i), e))?;
        }
        Ok(Self { pool, db_path })
    }

    pub fn get_db_path(&self) -> &Path {
        &self.db_path
    }
}

#[async_trait]
impl AnalysisRepository for SQLiteStorage {
    async fn load(&self) -> Result<Vec<SavedAnalysis>> {
        let row = sqlx::query("SELECT value FROM blobs WHERE name = ?")
            .bind(BLOB_NAME)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| storage_error("Failed to load saved analyses", e))?;

        match row {
            Some(row) => {
                let raw: String = row
                    .try_get("value")
                    .map_err(|e| storage_error("Failed to read saved analyses", e))?;
                Ok(serde_json::from_str(&raw)?)
            }
            None => Ok(Vec::new()),
        }
    }

    async fn save(&self, analyses: &[SavedAnalysis]) -> Result<()> {
        let raw = serde_json::to_string(analyses)?;
        sqlx::query("INSERT OR REPLACE INTO blobs (name, value) VALUES (?, ?)")
            .bind(BLOB_NAME)
            .bind(raw)
            .execute(&self.pool)
            .await
            .map_err(|e| storage_error("Failed to store saved analyses", e))?;
        Ok(())
    }

    fn name(&self) -> &str {
        "sqlite"
    }
}
