//! Keyword-driven PREP role selection.
//!
//! Each role has a preferred candidate (a keyword hit or a positional
//! fallback) and a fallback start index. Roles are resolved in
//! [`Role::ALL`] order against a shared claimed set, so a sentence taken by
//! an earlier role is skipped by later ones. When every sentence from the
//! fallback index onwards is already claimed, the role keeps its preferred
//! candidate, which may then duplicate an earlier role or be empty.

use std::collections::HashSet;

use lazy_static::lazy_static;
use pe_core::Role;
use regex::Regex;
use tracing::debug;

/// Tag prefixed to editorial titles.
pub const EDITORIAL_TAG: &str = "[사설]";

/// because, reason, flaw, problem, ambiguous
pub const REASON_KEYWORDS: &[&str] = &["때문", "이유", "결함", "문제", "모호"];

/// for example, case, field, actual, structure, contract, company
pub const EXAMPLE_KEYWORDS: &[&str] = &["예를 들어", "사례", "현장", "실제", "구조", "계약", "기업"];

/// urge, necessary, should, hope, require, therefore
pub const CONCLUSION_KEYWORDS: &[&str] = &["촉구", "필요", "해야", "바란다", "요구", "따라서"];

/// Title tokens must be longer than this to count as keywords.
const MIN_TITLE_KEYWORD_CHARS: usize = 2;

lazy_static! {
    static ref DIGITS: Regex = Regex::new(r"\d+").expect("digit pattern");
    static ref TITLE_SEPARATORS: Regex = Regex::new(r"[\s,]+").expect("title separator pattern");
}

/// Remove the editorial tag from a title.
pub fn strip_title_tag(title: &str) -> String {
    title.replacen(EDITORIAL_TAG, "", 1).trim().to_string()
}

pub fn title_keywords(title: &str) -> Vec<String> {
    TITLE_SEPARATORS
        .split(&strip_title_tag(title))
        .filter(|token| token.chars().count() > MIN_TITLE_KEYWORD_CHARS)
        .map(str::to_string)
        .collect()
}

/// The sentence chosen for each role. Empty when nothing was available.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoleAssignment {
    pub point1: String,
    pub reason: String,
    pub example: String,
    pub point2: String,
}

impl RoleAssignment {
    pub fn get(&self, role: Role) -> &str {
        match role {
            Role::Point1 => &self.point1,
            Role::Reason => &self.reason,
            Role::Example => &self.example,
            Role::Point2 => &self.point2,
        }
    }

    fn set(&mut self, role: Role, sentence: String) {
        match role {
            Role::Point1 => self.point1 = sentence,
            Role::Reason => self.reason = sentence,
            Role::Example => self.example = sentence,
            Role::Point2 => self.point2 = sentence,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Candidate {
    role: Role,
    preferred: String,
    fallback_start: usize,
}

fn first_containing(sentences: &[String], needles: &[impl AsRef<str>]) -> Option<String> {
    sentences
        .iter()
        .find(|sentence| needles.iter().any(|needle| sentence.contains(needle.as_ref())))
        .cloned()
}

fn nth_or_empty(sentences: &[String], index: usize) -> String {
    sentences.get(index).cloned().unwrap_or_default()
}

fn candidates(sentences: &[String], title: &str) -> [Candidate; 4] {
    let keywords = title_keywords(title);

    let point1 = first_containing(sentences, &keywords).unwrap_or_else(|| nth_or_empty(sentences, 0));

    let reason = first_containing(sentences, REASON_KEYWORDS).unwrap_or_else(|| nth_or_empty(sentences, 1));

    let example = sentences
        .iter()
        .find(|sentence| {
            DIGITS.is_match(sentence) || EXAMPLE_KEYWORDS.iter().any(|keyword| sentence.contains(keyword))
        })
        .cloned()
        .unwrap_or_else(|| nth_or_empty(sentences, 2));

    let point2 = first_containing(sentences, CONCLUSION_KEYWORDS)
        .or_else(|| sentences.last().cloned())
        .unwrap_or_default();

    [
        Candidate { role: Role::Point1, preferred: point1, fallback_start: 0 },
        Candidate { role: Role::Reason, preferred: reason, fallback_start: 1 },
        Candidate { role: Role::Example, preferred: example, fallback_start: 2 },
        Candidate {
            role: Role::Point2,
            preferred: point2,
            fallback_start: sentences.len().saturating_sub(1),
        },
    ]
}

/// Sentences already taken by an earlier role.
struct ClaimSet<'a> {
    sentences: &'a [String],
    claimed: HashSet<String>,
}

impl<'a> ClaimSet<'a> {
    fn new(sentences: &'a [String]) -> Self {
        Self {
            sentences,
            claimed: HashSet::new(),
        }
    }

    fn resolve(&mut self, candidate: Candidate) -> String {
        if !candidate.preferred.is_empty() && !self.claimed.contains(&candidate.preferred) {
            self.claimed.insert(candidate.preferred.clone());
            return candidate.preferred;
        }

        let unclaimed = self
            .sentences
            .iter()
            .skip(candidate.fallback_start)
            .find(|sentence| !self.claimed.contains(*sentence))
            .cloned();

        match unclaimed {
            Some(sentence) => {
                debug!(role = %candidate.role, "preferred sentence taken, using next unclaimed");
                self.claimed.insert(sentence.clone());
                sentence
            }
            None => {
                debug!(role = %candidate.role, "no unclaimed sentence left, keeping preferred");
                candidate.preferred
            }
        }
    }
}

/// Assign one sentence to each PREP role.
pub fn classify(sentences: &[String], title: &str) -> RoleAssignment {
    let mut claims = ClaimSet::new(sentences);
    let mut assignment = RoleAssignment::default();

    for candidate in candidates(sentences, title) {
        let role = candidate.role;
        let sentence = claims.resolve(candidate);
        assignment.set(role, sentence);
    }

    assignment
}
