use async_trait::async_trait;
use crate::types::SavedAnalysis;
use crate::Result;

/// The persisted list of saved analyses, stored as one blob.
#[async_trait]
pub trait AnalysisRepository: Send + Sync {
    /// Load the whole list. A repository that was never written loads as empty.
    async fn load(&self) -> Result<Vec<SavedAnalysis>>;

    /// Replace the whole list.
    async fn save(&self, analyses: &[SavedAnalysis]) -> Result<()>;

    fn name(&self) -> &str;
}
