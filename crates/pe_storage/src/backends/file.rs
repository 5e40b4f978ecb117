use async_trait::async_trait;
use pe_core::{AnalysisRepository, Result, SavedAnalysis};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const DEFAULT_PATH: &str = "saved_analyses.json";

/// The whole list as one JSON document on disk.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Sibling file the blob is written to before it replaces `path`.
    fn staging_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl Default for FileStorage {
    fn default() -> Self {
        Self::new(DEFAULT_PATH)
    }
}

#[async_trait]
impl AnalysisRepository for FileStorage {
    async fn load(&self) -> Result<Vec<SavedAnalysis>> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };
        if raw.trim().is_empty() {
            return Ok(Vec::new());
        }
        Ok(serde_json::from_str(&raw)?)
    }

    async fn save(&self, analyses: &[SavedAnalysis]) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }
        let raw = serde_json::to_string(analyses)?;
        let staging = self.staging_path();
        tokio::fs::write(&staging, raw).await?;
        tokio::fs::rename(&staging, &self.path).await?;
        debug!(path = %self.path.display(), count = analyses.len(), "saved analyses written");
        Ok(())
    }

    fn name(&self) -> &str {
        "file"
    }
}
