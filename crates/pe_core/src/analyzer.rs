use crate::types::{Article, BestPractice, PrepAnalysis};

pub trait Analyzer: Send + Sync {
    fn name(&self) -> &str;

    /// Label the article's sentences with PREP roles.
    fn analyze(&self, article: &Article) -> PrepAnalysis;

    /// Wrap the labelled sentences in display phrases.
    fn best_practice(&self, article: &Article, analysis: &PrepAnalysis) -> BestPractice;
}
