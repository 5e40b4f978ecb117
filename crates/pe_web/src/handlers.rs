use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    response::{IntoResponse, Response},
    Json,
};
use pe_analysis::build_report;
use pe_core::{Article, PrepAnalysis, SavedAnalysis};
use serde::Deserialize;
use std::sync::Arc;
use tracing::info;

use crate::error::{ApiError, DETAIL_FAILED, LIST_FAILED, SAVED_FAILED};
use crate::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct EditorialQuery {
    pub url: Option<String>,
    pub source: Option<String>,
}

/// Listing without `url`, full analysis with it.
pub async fn get_editorial(
    State(state): State<Arc<AppState>>,
    query: Result<Query<EditorialQuery>, QueryRejection>,
) -> Result<Response, ApiError> {
    let Query(query) = query?;
    let source_name = query.source.as_deref();
    let url = query.url.as_deref().map(str::trim).filter(|url| !url.is_empty());

    match url {
        None => {
            let source = state
                .sources
                .select(source_name)
                .map_err(ApiError::unknown_source)?;
            let items = source
                .fetch_list()
                .await
                .map_err(|e| ApiError::internal(LIST_FAILED, e))?;
            Ok(Json(items).into_response())
        }
        Some(url) => {
            let source = state
                .sources
                .for_url(url, source_name)
                .map_err(ApiError::unknown_source)?;
            let editorial = source
                .fetch_detail(url)
                .await
                .map_err(|e| ApiError::internal(DETAIL_FAILED, e))?;
            info!(title = %editorial.title, analyzer = state.analyzer.name(), "📰 analyzing editorial");
            let report = build_report(state.analyzer.as_ref(), editorial);
            Ok(Json(report).into_response())
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SaveRequest {
    pub editorial: Article,
    pub prep: PrepAnalysis,
}

pub async fn list_saved(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<SavedAnalysis>>, ApiError> {
    let analyses = state
        .storage
        .load()
        .await
        .map_err(|e| ApiError::internal(SAVED_FAILED, e))?;
    Ok(Json(analyses))
}

pub async fn create_saved(
    State(state): State<Arc<AppState>>,
    request: Result<Json<SaveRequest>, JsonRejection>,
) -> Result<Json<SavedAnalysis>, ApiError> {
    let Json(request) = request?;
    let saved = pe_storage::save_analysis(state.storage.as_ref(), request.editorial, request.prep)
        .await
        .map_err(|e| ApiError::internal(SAVED_FAILED, e))?;
    Ok(Json(saved))
}

pub async fn delete_saved(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Vec<SavedAnalysis>>, ApiError> {
    let remaining = pe_storage::delete_analysis(state.storage.as_ref(), &id)
        .await
        .map_err(|e| ApiError::internal(SAVED_FAILED, e))?;
    Ok(Json(remaining))
}
