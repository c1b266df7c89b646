use std::sync::Arc;

use crate::db::repository::DocumentRepository;

/// Shared application state, handed to axum handlers and provided as Leptos
/// context to server functions.
#[derive(Clone)]
pub struct AppState {
    pub document_repo: Arc<dyn DocumentRepository>,
    /// Stylesheet for highlighted code, generated once at start-up.
    pub highlight_css: Arc<str>,
    pub leptos_options: leptos::prelude::LeptosOptions,
}

impl axum::extract::FromRef<AppState> for leptos::prelude::LeptosOptions {
    fn from_ref(state: &AppState) -> Self {
        state.leptos_options.clone()
    }
}

impl AppState {
    pub fn new(
        document_repo: Arc<dyn DocumentRepository>,
        highlight_css: impl Into<Arc<str>>,
        leptos_options: leptos::prelude::LeptosOptions,
    ) -> Self {
        Self {
            document_repo,
            highlight_css: highlight_css.into(),
            leptos_options,
        }
    }

    /// The state provided to server functions by `leptos_routes_with_context`.
    pub fn from_context() -> Result<Self, leptos::prelude::ServerFnError> {
        leptos::prelude::use_context::<AppState>()
            .ok_or_else(|| leptos::prelude::ServerFnError::new("AppState not found in context"))
    }
}
