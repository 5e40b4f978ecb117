use pe_core::{AnalysisRepository, Error, Result};
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;

pub mod backends;
pub mod saved;

pub use backends::*;
pub use saved::{delete_analysis, save_analysis};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageKind {
    Memory,
    File,
    Sqlite,
}

impl StorageKind {
    pub fn default_path(&self) -> Option<&'static str> {
        match self {
            StorageKind::Memory => None,
            StorageKind::File => Some(backends::file::DEFAULT_PATH),
            StorageKind::Sqlite => Some(backends::SQLITE_DEFAULT_PATH),
        }
    }
}

impl FromStr for StorageKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "memory" => Ok(StorageKind::Memory),
            "file" | "json" => Ok(StorageKind::File),
            "sqlite" => Ok(StorageKind::Sqlite),
            other => Err(Error::Storage(format!(
                "Unknown storage backend: {} (expected memory, file or sqlite)",
                other
            ))),
        }
    }
}

impl fmt::Display for StorageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            StorageKind::Memory => "memory",
            StorageKind::File => "file",
            StorageKind::Sqlite => "sqlite",
        })
    }
}

/// Open the repository for `kind`. `path` overrides the backend's default location.
pub async fn create_storage(
    kind: StorageKind,
    path: Option<&Path>,
) -> Result<Arc<dyn AnalysisRepository>> {
    let path = path
        .map(Path::to_path_buf)
        .or_else(|| kind.default_path().map(Into::into));

    match (kind, path) {
        (StorageKind::Memory, _) => Ok(Arc::new(MemoryStorage::new())),
        (StorageKind::File, Some(path)) => Ok(Arc::new(FileStorage::new(path))),
        #[cfg(feature = "sqlite")]
        (StorageKind::Sqlite, Some(path)) => Ok(Arc::new(SQLiteStorage::new_with_path(&path).await?)),
        #[cfg(not(feature = "sqlite"))]
        (StorageKind::Sqlite, _) => Err(Error::Storage(
            "SQLite storage requires the `sqlite` feature".to_string(),
        )),
        (kind, None) => Err(Error::Storage(format!("No path for {} storage", kind))),
    }
}
