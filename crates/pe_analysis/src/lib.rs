use pe_core::prelude::*;
use pe_core::{Analyzer, BestPractice, EditorialReport};
use tracing::debug;

pub mod classifier;
pub mod narrative;
pub mod splitter;

pub use classifier::{classify, RoleAssignment};
pub use splitter::split_sentences;

/// Split, classify and template in one step.
pub fn analyze_prep(content: &str, title: &str) -> PrepAnalysis {
    let sentences = split_sentences(content);
    let roles = classify(&sentences, title);
    debug!(sentences = sentences.len(), "classified editorial");
    narrative::prep_analysis(title, &roles)
}

/// The keyword heuristic behind [`Analyzer`].
#[derive(Debug, Default, Clone, Copy)]
pub struct RuleBasedAnalyzer;

impl RuleBasedAnalyzer {
    pub fn new() -> Self {
        Self
    }
}

impl Analyzer for RuleBasedAnalyzer {
    fn name(&self) -> &str {
        "PREP rules"
    }

    fn analyze(&self, article: &Article) -> PrepAnalysis {
        analyze_prep(&article.content, &article.title)
    }

    fn best_practice(&self, _article: &Article, analysis: &PrepAnalysis) -> BestPractice {
        narrative::best_practice(analysis)
    }
}

/// Run an analyzer over an article and bundle the response payload.
pub fn build_report(analyzer: &dyn Analyzer, editorial: Article) -> EditorialReport {
    let ai_analysis = analyzer.analyze(&editorial);
    let best_practice = analyzer.best_practice(&editorial, &ai_analysis);
    EditorialReport {
        editorial,
        ai_analysis,
        best_practice,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(content: &str) -> Article {
        Article {
            title: "[사설] 모호한 정책".to_string(),
            content: content.to_string(),
            date: "2024-05-01".to_string(),
            link: "https://www.hani.co.kr/arti/opinion/editorial/1139999.html".to_string(),
        }
    }

    #[test]
    fn test_empty_content_report() {
        let report = build_report(&RuleBasedAnalyzer::new(), article(""));
        for role in Role::ALL {
            assert_eq!(report.ai_analysis.get(role).source_text, "");
            assert_eq!(report.best_practice.get(role), "");
        }
    }

    #[test]
    fn test_report_over_paragraphs() {
        let content = "정부가 새로운 정책을 발표했다.\n\n하지만 시행 기준에 문제가 많다. \
                       시민들은 혼란을 겪고 있다.\n\n정부의 신속한 보완이 필요하다.";
        let report = build_report(&RuleBasedAnalyzer::new(), article(content));
        assert_eq!(report.ai_analysis.point1.source_text, "정부가 새로운 정책을 발표했다.");
        assert_eq!(report.ai_analysis.reason.source_text, "하지만 시행 기준에 문제가 많다.");
        assert_eq!(report.ai_analysis.example.source_text, "시민들은 혼란을 겪고 있다.");
        assert_eq!(report.ai_analysis.point2.source_text, "정부의 신속한 보완이 필요하다.");
        assert_eq!(report.editorial.date, "2024-05-01");

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["aiAnalysis"]["point2"]["sourceText"], "정부의 신속한 보완이 필요하다.");
    }

    #[test]
    fn test_analyze_prep_is_deterministic() {
        let content = "기업 실적이 2분기에 나빠졌다. 그 이유는 수출 부진 때문이다.";
        assert_eq!(
            analyze_prep(content, "[사설] 수출"),
            analyze_prep(content, "[사설] 수출")
        );
    }
}
