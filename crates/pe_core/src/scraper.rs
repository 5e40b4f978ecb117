use async_trait::async_trait;
use crate::types::{Article, ListItem, SourceMetadata};
use crate::Result;

/// Fetches a page body. Non-success statuses are errors.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<String>;
}

/// An outlet's editorial section.
#[async_trait]
pub trait EditorialSource: Send + Sync {
    fn source_metadata(&self) -> SourceMetadata;

    /// Returns true if `url` belongs to this outlet
    fn can_handle(&self, url: &str) -> bool;

    /// Returns a list of CLI shorthand names for this source
    fn cli_names(&self) -> Vec<&str>;

    /// Fetch the editorial listing page and extract its items
    async fn fetch_list(&self) -> Result<Vec<ListItem>>;

    /// Fetch one editorial page and extract the article
    async fn fetch_detail(&self, url: &str) -> Result<Article>;
}
