use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use chrono::Utc;

use crate::db::models::{Document, DocumentPatch, Navigation, NewDocument};
use crate::error::AppError;

/// Repository trait for document operations.
///
/// The HTTP handlers and server functions only see this trait, so tests can
/// substitute a failing or mocked implementation.
#[async_trait]
pub trait DocumentRepository: Send + Sync {
    /// All documents, in insertion order.
    async fn list_all(&self) -> Result<Vec<Document>, AppError>;

    /// Find a document by its exact slug.
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Document>, AppError>;

    /// All documents whose category matches exactly (case-sensitive).
    async fn list_by_category(&self, category: &str) -> Result<Vec<Document>, AppError>;

    /// Store a new document, assigning its id and timestamps.
    async fn create(&self, doc: NewDocument) -> Result<Document, AppError>;

    /// Merge `patch` into the document with `id` and refresh `updated_at`.
    ///
    /// Returns `None` when no document has that id.
    async fn update(&self, id: u64, patch: DocumentPatch) -> Result<Option<Document>, AppError>;

    /// Remove a document. Returns whether anything was removed.
    async fn delete(&self, id: u64) -> Result<bool, AppError>;

    /// Case-insensitive substring match on title and content.
    ///
    /// Matching is binary and results keep insertion order. An empty query
    /// matches every document; callers that want "no query, no results" must
    /// check before calling.
    async fn search(&self, query: &str) -> Result<Vec<Document>, AppError>;

    /// The static navigation tree.
    async fn navigation(&self) -> Result<Navigation, AppError>;
}

#[derive(Debug, Default)]
struct StoreState {
    /// Keyed by id. Ids are handed out in increasing order, so key order is
    /// insertion order.
    documents: BTreeMap<u64, Document>,
    next_id: u64,
}

impl StoreState {
    fn slug_owner(&self, slug: &str) -> Option<u64> {
        self.documents
            .values()
            .find(|doc| doc.slug == slug)
            .map(|doc| doc.id)
    }
}

/// In-memory implementation of the DocumentRepository.
///
/// Single writer, last write wins. The lock is never held across an await.
#[derive(Debug)]
pub struct InMemoryDocumentRepository {
    state: RwLock<StoreState>,
    navigation: Navigation,
}

impl InMemoryDocumentRepository {
    pub fn new(navigation: Navigation) -> Self {
        Self {
            state: RwLock::new(StoreState {
                documents: BTreeMap::new(),
                next_id: 1,
            }),
            navigation,
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, StoreState>, AppError> {
        self.state
            .read()
            .map_err(|_| AppError::Store("document store lock poisoned".into()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, StoreState>, AppError> {
        self.state
            .write()
            .map_err(|_| AppError::Store("document store lock poisoned".into()))
    }

    fn filter(&self, predicate: impl Fn(&Document) -> bool) -> Result<Vec<Document>, AppError> {
        Ok(self
            .read()?
            .documents
            .values()
            .filter(|&doc| predicate(doc))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl DocumentRepository for InMemoryDocumentRepository {
    async fn list_all(&self) -> Result<Vec<Document>, AppError> {
        self.filter(|_| true)
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Document>, AppError> {
        Ok(self
            .read()?
            .documents
            .values()
            .find(|doc| doc.slug == slug)
            .cloned())
    }

    async fn list_by_category(&self, category: &str) -> Result<Vec<Document>, AppError> {
        self.filter(|doc| doc.category == category)
    }

    async fn create(&self, doc: NewDocument) -> Result<Document, AppError> {
        let mut state = self.write()?;

        if state.slug_owner(&doc.slug).is_some() {
            return Err(AppError::Conflict(format!(
                "A document with slug '{}' already exists",
                doc.slug
            )));
        }

        let id = state.next_id;
        state.next_id += 1;

        let now = Utc::now();
        let document = Document {
            id,
            slug: doc.slug,
            title: doc.title,
            content: doc.content,
            category: doc.category,
            subcategory: doc.subcategory,
            order: doc.order,
            metadata: doc.metadata,
            created_at: now,
            updated_at: now,
        };

        state.documents.insert(id, document.clone());
        tracing::debug!(id, slug = %document.slug, "document created");

        Ok(document)
    }

    async fn update(&self, id: u64, patch: DocumentPatch) -> Result<Option<Document>, AppError> {
        let mut state = self.write()?;

        if !state.documents.contains_key(&id) {
            return Ok(None);
        }

        if let Some(slug) = &patch.slug {
            if matches!(state.slug_owner(slug), Some(owner) if owner != id) {
                return Err(AppError::Conflict(format!(
                    "A document with slug '{}' already exists",
                    slug
                )));
            }
        }

        let Some(doc) = state.documents.get_mut(&id) else {
            return Ok(None);
        };

        patch.apply_to(doc);
        doc.updated_at = Utc::now();

        Ok(Some(doc.clone()))
    }

    async fn delete(&self, id: u64) -> Result<bool, AppError> {
        Ok(self.write()?.documents.remove(&id).is_some())
    }

    async fn search(&self, query: &str) -> Result<Vec<Document>, AppError> {
        let needle = query.to_lowercase();
        self.filter(|doc| {
            doc.title.to_lowercase().contains(&needle) || doc.content.to_lowercase().contains(&needle)
        })
    }

    async fn navigation(&self) -> Result<Navigation, AppError> {
        Ok(self.navigation.clone())
    }
}
