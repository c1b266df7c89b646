use axum::extract::{Path, State};
use axum::Json;

use crate::db::models::{Document, Navigation};
use crate::db::repository::DocumentRepository;
use crate::error::AppError;
use crate::state::AppState;

pub const FETCH_DOCS_ERROR: &str = "Error fetching documentation";
pub const FETCH_NAVIGATION_ERROR: &str = "Error fetching navigation";
pub const DOC_NOT_FOUND: &str = "Documentation not found";

/// Look up one document; a missing slug is a 404, anything else unexpected
/// collapses into the generic fetch error.
pub async fn process_get_doc(
    repo: &dyn DocumentRepository,
    slug: &str,
) -> Result<Document, AppError> {
    repo.find_by_slug(slug)
        .await
        .map_err(|e| e.or_internal(FETCH_DOCS_ERROR))?
        .ok_or_else(|| AppError::NotFound(DOC_NOT_FOUND.into()))
}

/// Axum handler for `GET /api/docs`.
pub async fn list_docs_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<Document>>, AppError> {
    let docs = state
        .document_repo
        .list_all()
        .await
        .map_err(|e| e.or_internal(FETCH_DOCS_ERROR))?;
    Ok(Json(docs))
}

/// Axum handler for `GET /api/docs/{slug}`.
pub async fn get_doc_handler(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<Document>, AppError> {
    let doc = process_get_doc(state.document_repo.as_ref(), &slug)
        .await
        .inspect_err(|e| tracing::debug!(%slug, error = %e, "Document lookup failed"))?;
    Ok(Json(doc))
}

/// Axum handler for `GET /api/docs/category/{category}`.
pub async fn list_by_category_handler(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> Result<Json<Vec<Document>>, AppError> {
    let docs = state
        .document_repo
        .list_by_category(&category)
        .await
        .map_err(|e| e.or_internal(FETCH_DOCS_ERROR))?;
    Ok(Json(docs))
}

/// Axum handler for `GET /api/navigation`.
pub async fn navigation_handler(
    State(state): State<AppState>,
) -> Result<Json<Navigation>, AppError> {
    let navigation = state
        .document_repo
        .navigation()
        .await
        .map_err(|e| e.or_internal(FETCH_NAVIGATION_ERROR))?;
    Ok(Json(navigation))
}
