use std::sync::Arc;
use pe_core::{Analyzer, AnalysisRepository};
use pe_scrapers::SourceManager;

pub struct AppState {
    pub sources: SourceManager,
    pub analyzer: Arc<dyn Analyzer>,
    pub storage: Arc<dyn AnalysisRepository>,
}
