mod common;

use std::sync::Arc;

use async_trait::async_trait;
use mockall::mock;

use caldera_docs::db::models::{Document, DocumentPatch, Navigation, NewDocument};
use caldera_docs::db::repository::DocumentRepository;
use caldera_docs::error::AppError;

mock! {
    pub Repo {}

    #[async_trait]
    impl DocumentRepository for Repo {
        async fn list_all(&self) -> Result<Vec<Document>, AppError>;
        async fn find_by_slug(&self, slug: &str) -> Result<Option<Document>, AppError>;
        async fn list_by_category(&self, category: &str) -> Result<Vec<Document>, AppError>;
        async fn create(&self, doc: NewDocument) -> Result<Document, AppError>;
        async fn update(&self, id: u64, patch: DocumentPatch) -> Result<Option<Document>, AppError>;
        async fn delete(&self, id: u64) -> Result<bool, AppError>;
        async fn search(&self, query: &str) -> Result<Vec<Document>, AppError>;
        async fn navigation(&self) -> Result<Navigation, AppError>;
    }
}

fn poisoned() -> AppError {
    AppError::Store("document store lock poisoned".into())
}

#[tokio::test]
async fn failing_search_returns_generic_500() {
    let mut repo = MockRepo::new();
    repo.expect_search().times(1).returning(|_| Err(poisoned()));
    let env = common::TestEnv::with_repo(Arc::new(repo));
    let server = env.server_permissive();

    let response = server
        .get("/api/search")
        .add_query_param("q", "caldera")
        .await;

    response.assert_status_internal_server_error();
    response.assert_json(&serde_json::json!({ "message": "Error searching documentation" }));
}

#[tokio::test]
async fn blank_search_does_not_touch_the_store() {
    // No expectations: any store call would panic the handler
    let env = common::TestEnv::with_repo(Arc::new(MockRepo::new()));
    let server = env.server();

    let response = server.get("/api/search").add_query_param("q", " ").await;

    response.assert_json(&serde_json::json!([]));
}

#[tokio::test]
async fn failing_lookup_returns_generic_500() {
    let mut repo = MockRepo::new();
    repo.expect_find_by_slug().returning(|_| Err(poisoned()));
    repo.expect_list_all().returning(|| Err(poisoned()));
    repo.expect_list_by_category().returning(|_| Err(poisoned()));
    let env = common::TestEnv::with_repo(Arc::new(repo));
    let server = env.server_permissive();

    for path in [
        "/api/docs",
        "/api/docs/introduction",
        "/api/docs/category/Guides",
    ] {
        let response = server.get(path).await;
        response.assert_status_internal_server_error();
        response.assert_json(&serde_json::json!({ "message": "Error fetching documentation" }));
    }
}

#[tokio::test]
async fn failing_navigation_returns_generic_500() {
    let mut repo = MockRepo::new();
    repo.expect_navigation().returning(|| Err(poisoned()));
    let env = common::TestEnv::with_repo(Arc::new(repo));
    let server = env.server_permissive();

    let response = server.get("/api/navigation").await;

    response.assert_status_internal_server_error();
    response.assert_json(&serde_json::json!({ "message": "Error fetching navigation" }));
}
