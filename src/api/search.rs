use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;

use crate::db::models::Document;
use crate::db::repository::DocumentRepository;
use crate::error::AppError;
use crate::state::AppState;

pub const SEARCH_ERROR: &str = "Error searching documentation";

#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
}

/// Core search logic, shared by the REST endpoint and the search page.
///
/// An absent, empty or whitespace-only query yields no results without
/// touching the store. Otherwise the query is passed through unchanged.
pub async fn process_search(
    repo: &dyn DocumentRepository,
    query: Option<&str>,
) -> Result<Vec<Document>, AppError> {
    let Some(query) = query.filter(|q| !q.trim().is_empty()) else {
        return Ok(Vec::new());
    };

    let results = repo
        .search(query)
        .await
        .map_err(|e| e.or_internal(SEARCH_ERROR))?;
    tracing::debug!(query, hits = results.len(), "Search completed");
    Ok(results)
}

/// Axum handler for `GET /api/search?q=`.
///
/// A query string that does not deserialize is treated like a missing `q`.
pub async fn search_handler(
    State(state): State<AppState>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> Result<Json<Vec<Document>>, AppError> {
    let params = match params {
        Ok(Query(params)) => params,
        Err(rejection) => {
            tracing::warn!(%rejection, "Ignoring unparsable search parameters");
            SearchParams::default()
        }
    };

    let results = process_search(state.document_repo.as_ref(), params.q.as_deref()).await?;
    Ok(Json(results))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::models::NewDocument;
    use crate::db::repository::InMemoryDocumentRepository;

    async fn seeded_repo() -> InMemoryDocumentRepository {
        let repo = InMemoryDocumentRepository::new(Vec::new());
        for (slug, title) in [("introduction", "Introduction to Caldera"), ("faq", "FAQ")] {
            repo.create(NewDocument {
                slug: slug.to_string(),
                title: title.to_string(),
                content: format!("# {title}"),
                category: "Getting Started".to_string(),
                subcategory: None,
                order: 0,
                metadata: None,
            })
            .await
            .unwrap();
        }
        repo
    }

    #[tokio::test]
    async fn test_blank_queries_return_nothing() {
        let repo = seeded_repo().await;
        for query in [None, Some(""), Some("   "), Some("\t\n")] {
            let results = process_search(&repo, query).await.unwrap();
            assert!(results.is_empty(), "query {query:?} should return []");
        }
    }

    #[tokio::test]
    async fn test_query_is_case_insensitive() {
        let repo = seeded_repo().await;
        let upper = process_search(&repo, Some("CALDERA")).await.unwrap();
        let lower = process_search(&repo, Some("caldera")).await.unwrap();
        assert_eq!(upper, lower);
        assert_eq!(upper.len(), 1);
    }

    #[tokio::test]
    async fn test_query_is_not_trimmed() {
        let repo = seeded_repo().await;
        // " faq" only matches where a space precedes "faq"
        let results = process_search(&repo, Some(" faq")).await.unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].slug, "faq");
        assert!(process_search(&repo, Some("caldera ")).await.unwrap().is_empty());
    }
}
