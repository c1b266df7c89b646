use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A documentation page held by the document store.
///
/// Serialized with camelCase field names (`createdAt`, `updatedAt`), which is
/// the shape the REST API returns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// Store-assigned identifier, unique for the process lifetime.
    pub id: u64,
    /// URL-safe identifier (e.g. `quick-start`). Unique within the store.
    pub slug: String,
    /// Human-readable title.
    pub title: String,
    /// Raw Markdown content.
    pub content: String,
    /// Top-level grouping, matched case-sensitively.
    pub category: String,
    pub subcategory: Option<String>,
    /// Sort hint within the category. Gaps and duplicates are allowed.
    pub order: i32,
    pub metadata: Option<DocMetadata>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Page-level links and the table of contents.
///
/// `prev`/`next` are slugs of sibling pages. They are not checked against the
/// store, so a dangling slug renders as a dead link.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocMetadata {
    #[serde(default)]
    pub prev: Option<String>,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub toc: Vec<TocEntry>,
}

/// One line of a table of contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TocEntry {
    pub title: String,
    /// Anchor id of the heading on the rendered page.
    pub slug: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<u8>,
}

/// Input for creating a document. The store assigns id and timestamps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewDocument {
    pub slug: String,
    pub title: String,
    pub content: String,
    pub category: String,
    #[serde(default)]
    pub subcategory: Option<String>,
    #[serde(default)]
    pub order: i32,
    #[serde(default)]
    pub metadata: Option<DocMetadata>,
}

/// Partial update. `None` leaves a field untouched; for the nullable fields
/// `Some(None)` clears the value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentPatch {
    pub slug: Option<String>,
    pub title: Option<String>,
    pub content: Option<String>,
    pub category: Option<String>,
    pub subcategory: Option<Option<String>>,
    pub order: Option<i32>,
    pub metadata: Option<Option<DocMetadata>>,
}

impl DocumentPatch {
    /// Merge the present fields into `doc`. Timestamps are left to the caller.
    pub fn apply_to(self, doc: &mut Document) {
        if let Some(slug) = self.slug {
            doc.slug = slug;
        }
        if let Some(title) = self.title {
            doc.title = title;
        }
        if let Some(content) = self.content {
            doc.content = content;
        }
        if let Some(category) = self.category {
            doc.category = category;
        }
        if let Some(subcategory) = self.subcategory {
            doc.subcategory = subcategory;
        }
        if let Some(order) = self.order {
            doc.order = order;
        }
        if let Some(metadata) = self.metadata {
            doc.metadata = metadata;
        }
    }
}

/// The sidebar menu: ordered sections of entries.
pub type Navigation = Vec<NavSection>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavSection {
    pub title: String,
    /// Material icon name shown next to the section title.
    pub icon: String,
    pub items: Vec<NavEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavEntry {
    pub title: String,
    /// Target slug; may carry a `#fragment` pointing at a heading.
    pub slug: String,
    #[serde(default)]
    pub items: Vec<NavLink>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavLink {
    pub title: String,
    pub slug: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_document() -> Document {
        let now = Utc::now();
        Document {
            id: 1,
            slug: "introduction".to_string(),
            title: "Introduction to Caldera".to_string(),
            content: "# Intro\n## What is Caldera\nbody".to_string(),
            category: "Getting Started".to_string(),
            subcategory: Some("Introduction".to_string()),
            order: 1,
            metadata: Some(DocMetadata {
                prev: None,
                next: Some("installation".to_string()),
                toc: vec![TocEntry {
                    title: "What is Caldera".to_string(),
                    slug: "what-is-caldera".to_string(),
                    level: Some(2),
                }],
            }),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_document_serializes_camel_case() {
        let json = serde_json::to_value(sample_document()).unwrap();
        assert!(json.get("createdAt").is_some());
        assert!(json.get("updatedAt").is_some());
        assert!(json.get("created_at").is_none());
        assert_eq!(json["metadata"]["next"], "installation");
        assert_eq!(json["metadata"]["toc"][0]["level"], 2);
    }

    #[test]
    fn test_toc_entry_level_is_optional() {
        let entry: TocEntry =
            serde_json::from_str(r#"{"title": "Key Features", "slug": "key-features"}"#).unwrap();
        assert_eq!(entry.level, None);

        let json = serde_json::to_string(&entry).unwrap();
        assert!(!json.contains("level"));
    }

    #[test]
    fn test_patch_merges_present_fields_only() {
        let mut doc = sample_document();
        DocumentPatch {
            title: Some("Caldera Overview".to_string()),
            subcategory: Some(None),
            ..Default::default()
        }
        .apply_to(&mut doc);

        assert_eq!(doc.title, "Caldera Overview");
        assert_eq!(doc.subcategory, None);
        assert_eq!(doc.slug, "introduction");
        assert_eq!(doc.order, 1);
        assert!(doc.metadata.is_some());
    }

    #[test]
    fn test_nav_entry_items_default_to_empty() {
        let entry: NavEntry =
            serde_json::from_str(r#"{"title": "Installation", "slug": "installation"}"#).unwrap();
        assert!(entry.items.is_empty());
    }
}
