use async_trait::async_trait;
use pe_core::{AnalysisRepository, Result, SavedAnalysis};
use tokio::sync::RwLock;

/// Keeps the list for the lifetime of the process.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    analyses: RwLock<Vec<SavedAnalysis>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AnalysisRepository for MemoryStorage {
    async fn load(&self) -> Result<Vec<SavedAnalysis>> {
        Ok(self.analyses.read().await.clone())
    }

    async fn save(&self, analyses: &[SavedAnalysis]) -> Result<()> {
        *self.analyses.write().await = analyses.to_vec();
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::sample;

    #[tokio::test]
    async fn test_memory_storage() {
        let storage = MemoryStorage::new();
        assert!(storage.load().await.unwrap().is_empty());

        let analyses = vec![sample("a"), sample("b")];
        storage.save(&analyses).await.unwrap();
        assert_eq!(storage.load().await.unwrap(), analyses);

        storage.save(&analyses[1..]).await.unwrap();
        assert_eq!(storage.load().await.unwrap(), vec![sample("b")]);
    }
}
