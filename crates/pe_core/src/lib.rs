pub mod analyzer;
pub mod error;
pub mod scraper;
pub mod storage;
pub mod types;

pub use analyzer::Analyzer;
pub use error::{Error, Result};
pub use scraper::{EditorialSource, PageFetcher};
pub use storage::AnalysisRepository;
pub use types::{
    Article, BestPractice, EditorialReport, ListItem, PrepAnalysis, PrepItem, Role,
    SavedAnalysis, SourceMetadata,
};

pub mod prelude {
    pub use crate::{Article, Error, ListItem, PrepAnalysis, Result, Role};
}
