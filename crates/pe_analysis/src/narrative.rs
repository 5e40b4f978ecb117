use pe_core::{BestPractice, PrepAnalysis, PrepItem, Role};

use crate::classifier::{strip_title_tag, RoleAssignment};

pub const ELLIPSIS: &str = "...";

const TITLE_SUMMARY_CHARS: usize = 50;

/// Display limits for the best-practice phrases.
pub fn display_limit(role: Role) -> usize {
    match role {
        Role::Point1 => 80,
        Role::Reason | Role::Example => 60,
        Role::Point2 => 50,
    }
}

/// Keep the first `max_chars` characters, marking the cut with an ellipsis.
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(max_chars).collect();
    cut.push_str(ELLIPSIS);
    cut
}

fn summary(role: Role, title: &str) -> String {
    match role {
        Role::Point1 => format!(
            "'{}'에 대한 필자의 핵심 주장",
            truncate(&strip_title_tag(title), TITLE_SUMMARY_CHARS)
        ),
        Role::Reason => "주장을 뒷받침하는 근거와 문제 제기".to_string(),
        Role::Example => "주장을 구체화하는 사례와 현장의 모습".to_string(),
        Role::Point2 => "결론에서 다시 강조하는 요구와 제언".to_string(),
    }
}

fn connective(role: Role, sentence: &str) -> String {
    if sentence.is_empty() {
        return String::new();
    }
    let quoted = truncate(sentence, display_limit(role));
    match role {
        Role::Point1 => format!("이 사설의 핵심 주장은 \"{}\"입니다.", quoted),
        Role::Reason => format!("왜냐하면 \"{}\"라는 문제가 있기 때문입니다.", quoted),
        Role::Example => format!("실제로 \"{}\"라는 사례가 이를 보여줍니다.", quoted),
        Role::Point2 => format!("따라서 \"{}\"라고 다시 강조합니다.", quoted),
    }
}

/// Pair every role's sentence with its templated summary.
pub fn prep_analysis(title: &str, roles: &RoleAssignment) -> PrepAnalysis {
    let item = |role: Role| PrepItem {
        summary: summary(role, title),
        source_text: roles.get(role).to_string(),
    };
    PrepAnalysis {
        point1: item(Role::Point1),
        reason: item(Role::Reason),
        example: item(Role::Example),
        point2: item(Role::Point2),
    }
}

pub fn best_practice(analysis: &PrepAnalysis) -> BestPractice {
    let phrase = |role: Role| connective(role, &analysis.get(role).source_text);
    BestPractice {
        point1: phrase(Role::Point1),
        reason: phrase(Role::Reason),
        example: phrase(Role::Example),
        point2: phrase(Role::Point2),
    }
}
