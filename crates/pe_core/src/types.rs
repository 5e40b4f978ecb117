use serde::{Deserialize, Serialize};
use std::fmt;

/// An editorial as extracted from its detail page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    /// Paragraphs joined by a blank line.
    pub content: String,
    /// Publication date, `YYYY-MM-DD`.
    pub date: String,
    pub link: String,
}

/// One row of an outlet's editorial listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListItem {
    pub title: String,
    pub link: String,
    pub date: String,
}

/// The four PREP roles, in the order they are assigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Point1,
    Reason,
    Example,
    Point2,
}

impl Role {
    pub const ALL: [Role; 4] = [Role::Point1, Role::Reason, Role::Example, Role::Point2];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Point1 => "point1",
            Role::Reason => "reason",
            Role::Example => "example",
            Role::Point2 => "point2",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrepItem {
    pub summary: String,
    pub source_text: String,
}

/// Per-role summaries and the sentences they were drawn from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrepAnalysis {
    pub point1: PrepItem,
    pub reason: PrepItem,
    pub example: PrepItem,
    pub point2: PrepItem,
}

impl PrepAnalysis {
    pub fn get(&self, role: Role) -> &PrepItem {
        match role {
            Role::Point1 => &self.point1,
            Role::Reason => &self.reason,
            Role::Example => &self.example,
            Role::Point2 => &self.point2,
        }
    }
}

/// Display strings that wrap each role's sentence in a connective phrase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BestPractice {
    pub point1: String,
    pub reason: String,
    pub example: String,
    pub point2: String,
}

impl BestPractice {
    pub fn get(&self, role: Role) -> &str {
        match role {
            Role::Point1 => &self.point1,
            Role::Reason => &self.reason,
            Role::Example => &self.example,
            Role::Point2 => &self.point2,
        }
    }
}

/// Payload returned for a single editorial.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorialReport {
    pub editorial: Article,
    pub ai_analysis: PrepAnalysis,
    pub best_practice: BestPractice,
}

/// An analysis the user chose to keep.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedAnalysis {
    pub id: String,
    pub editorial: Article,
    pub prep: PrepAnalysis,
    /// RFC 3339, UTC.
    pub saved_at: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceMetadata {
    pub name: &'static str,
    pub emoji: &'static str,
    pub homepage: &'static str,
}
