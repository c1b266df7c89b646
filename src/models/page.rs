use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::db::models::TocEntry;

/// Everything the document page needs, rendered on the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocPage {
    pub slug: String,
    pub title: String,
    pub category: String,
    pub subcategory: Option<String>,
    /// Rendered and sanitized HTML of the Markdown body.
    pub html: String,
    pub toc: Vec<TocEntry>,
    pub prev: Option<String>,
    pub next: Option<String>,
    pub updated_at: DateTime<Utc>,
}

/// A search result as shown on the search page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHit {
    pub slug: String,
    pub title: String,
    pub category: String,
    /// First paragraph of the document, truncated.
    pub excerpt: String,
}
