//! Read-modify-write operations on the saved list.
//!
//! Two writers racing on the same repository can overwrite each other; the
//! last `save` wins.

use chrono::{SecondsFormat, Utc};
use pe_core::{AnalysisRepository, Article, PrepAnalysis, Result, SavedAnalysis};
use tracing::info;
use uuid::Uuid;

/// Prepend a new entry and write the list back.
pub async fn save_analysis(
    repo: &dyn AnalysisRepository,
    editorial: Article,
    prep: PrepAnalysis,
) -> Result<SavedAnalysis> {
    let entry = SavedAnalysis {
        id: Uuid::new_v4().to_string(),
        editorial,
        prep,
        saved_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    };

    let mut analyses = repo.load().await?;
    analyses.insert(0, entry.clone());
    repo.save(&analyses).await?;

    info!(id = %entry.id, title = %entry.editorial.title, "💾 analysis saved");
    Ok(entry)
}

/// Drop the entry with `id`, if any, and return what remains.
pub async fn delete_analysis(repo: &dyn AnalysisRepository, id: &str) -> Result<Vec<SavedAnalysis>> {
    let analyses = repo.load().await?;
    let before = analyses.len();
    let remaining: Vec<SavedAnalysis> = analyses.into_iter().filter(|a| a.id != id).collect();
    repo.save(&remaining).await?;

    info!(%id, removed = before - remaining.len(), "🗑️ analysis deleted");
    Ok(remaining)
}
