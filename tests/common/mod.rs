use std::sync::Arc;

use axum::Router;

use caldera_docs::api::routes::router;
use caldera_docs::db::repository::{DocumentRepository, InMemoryDocumentRepository};
use caldera_docs::seed::{sample_navigation, seed_sample_docs};
use caldera_docs::state::AppState;

#[allow(dead_code)]
pub const TEST_HIGHLIGHT_CSS: &str = ".hl-keyword { color: #b48ead; }";

/// The REST router wired to a document store.
pub struct TestEnv {
    pub router: Router,
    #[allow(dead_code)]
    pub repo: Arc<dyn DocumentRepository>,
}

impl TestEnv {
    /// In-memory store loaded with the bundled sample docs and navigation.
    pub async fn seeded() -> Self {
        let navigation = sample_navigation().expect("Failed to load sample navigation");
        let repo = Arc::new(InMemoryDocumentRepository::new(navigation));
        seed_sample_docs(repo.as_ref())
            .await
            .expect("Failed to seed sample docs");
        Self::with_repo(repo)
    }

    /// Build the router around any repository implementation.
    pub fn with_repo(repo: Arc<dyn DocumentRepository>) -> Self {
        let leptos_options = leptos::prelude::LeptosOptions::builder()
            .output_name("caldera-docs")
            .build();

        let app_state = AppState::new(repo.clone(), TEST_HIGHLIGHT_CSS, leptos_options);
        let router = router().with_state(app_state);

        Self { router, repo }
    }

    /// Build an `axum_test::TestServer` from this environment's router.
    pub fn server(&self) -> axum_test::TestServer {
        axum_test::TestServer::builder()
            .expect_success_by_default()
            .try_build(self.router.clone())
            .expect("Failed to build TestServer")
    }

    /// Build a `TestServer` that does NOT expect success by default (for error tests).
    pub fn server_permissive(&self) -> axum_test::TestServer {
        axum_test::TestServer::builder()
            .try_build(self.router.clone())
            .expect("Failed to build TestServer")
    }
}

/// Slugs of a JSON array of documents, in response order.
#[allow(dead_code)]
pub fn slugs(docs: &[serde_json::Value]) -> Vec<String> {
    docs.iter()
        .filter_map(|doc| doc["slug"].as_str().map(str::to_string))
        .collect()
}
