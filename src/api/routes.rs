use axum::routing::get;
use axum::Router;

use crate::api::{assets, docs, search};
use crate::state::AppState;

/// REST routes. The Leptos routes and static files are added in `main`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/docs", get(docs::list_docs_handler))
        .route(
            "/api/docs/category/{category}",
            get(docs::list_by_category_handler),
        )
        .route("/api/docs/{slug}", get(docs::get_doc_handler))
        .route("/api/search", get(search::search_handler))
        .route("/api/navigation", get(docs::navigation_handler))
        .route("/assets/highlight.css", get(assets::highlight_css_handler))
}
