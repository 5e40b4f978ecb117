use std::sync::Arc;

use pe_core::{EditorialSource, Error, PageFetcher, Result};

use crate::scrapers::korea;

type SharedSource = Arc<dyn EditorialSource>;

/// Picks the outlet a request should go to.
#[derive(Clone)]
pub struct SourceManager {
    sources: Vec<SharedSource>,
    default_index: usize,
}

impl SourceManager {
    pub fn new(sources: Vec<SharedSource>, default_name: &str) -> Result<Self> {
        let default_index = position_by_name(&sources, default_name)
            .ok_or_else(|| Error::UnknownSource(default_name.to_string()))?;
        Ok(Self {
            sources,
            default_index,
        })
    }

    /// All configured outlets fetching through `fetcher`.
    pub fn with_fetcher(fetcher: Arc<dyn PageFetcher>, default_name: &str) -> Result<Self> {
        Self::new(korea::get_scrapers(fetcher)?, default_name)
    }

    pub fn sources(&self) -> &[SharedSource] {
        &self.sources
    }

    pub fn default_source(&self) -> SharedSource {
        self.sources[self.default_index].clone()
    }

    pub fn by_name(&self, name: &str) -> Result<SharedSource> {
        position_by_name(&self.sources, name)
            .map(|i| self.sources[i].clone())
            .ok_or_else(|| Error::UnknownSource(name.to_string()))
    }

    /// The named outlet, or the default one.
    pub fn select(&self, name: Option<&str>) -> Result<SharedSource> {
        match name {
            Some(name) => self.by_name(name),
            None => Ok(self.default_source()),
        }
    }

    /// The outlet owning `url`, else whatever [`select`](Self::select) picks.
    pub fn for_url(&self, url: &str, name: Option<&str>) -> Result<SharedSource> {
        match self.sources.iter().find(|s| s.can_handle(url)) {
            Some(source) => Ok(source.clone()),
            None => self.select(name),
        }
    }
}

fn position_by_name(sources: &[SharedSource], name: &str) -> Option<usize> {
    let name = name.trim().to_lowercase();
    sources
        .iter()
        .position(|s| s.cli_names().iter().any(|n| n.to_lowercase() == name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::StaticFetcher;

    fn manager(default_name: &str) -> Result<SourceManager> {
        SourceManager::with_fetcher(Arc::new(StaticFetcher::new()), default_name)
    }

    #[test]
    fn test_default_source() {
        let manager = manager("hani").unwrap();
        assert_eq!(manager.sources().len(), 2);
        assert_eq!(manager.default_source().source_metadata().name, "한겨레");

        let manager = self::manager("Kyunghyang").unwrap();
        assert_eq!(manager.default_source().source_metadata().name, "경향신문");
    }

    #[test]
    fn test_unknown_default() {
        assert!(matches!(manager("chosun"), Err(Error::UnknownSource(_))));
    }

    #[test]
    fn test_select_and_for_url() {
        let manager = manager("hani").unwrap();
        assert_eq!(manager.select(None).unwrap().source_metadata().name, "한겨레");
        assert_eq!(manager.select(Some("khan")).unwrap().source_metadata().name, "경향신문");
        assert!(manager.select(Some("nope")).is_err());

        let khan = manager
            .for_url("https://www.khan.co.kr/article/202405012003005", None)
            .unwrap();
        assert_eq!(khan.source_metadata().name, "경향신문");

        let fallback = manager.for_url("https://elsewhere.example/a", Some("khan")).unwrap();
        assert_eq!(fallback.source_metadata().name, "경향신문");
        let fallback = manager.for_url("https://elsewhere.example/a", None).unwrap();
        assert_eq!(fallback.source_metadata().name, "한겨레");
    }
}
