use serde::Deserialize;

use crate::db::models::{DocMetadata, Navigation, NewDocument};
use crate::db::repository::DocumentRepository;
use crate::error::AppError;
use crate::rendering::toc::extract_toc;

// Using include_str! to embed sample content directly into the binary
const SAMPLE_DOCS: &[(&str, &str)] = &[
    ("introduction.md", include_str!("../demo_data/introduction.md")),
    ("installation.md", include_str!("../demo_data/installation.md")),
    ("quick-start.md", include_str!("../demo_data/quick-start.md")),
];

const SAMPLE_NAVIGATION: &str = include_str!("../demo_data/navigation.yaml");

/// YAML header of a seed document.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FrontMatter {
    pub slug: String,
    pub title: String,
    pub category: String,
    #[serde(default)]
    pub subcategory: Option<String>,
    #[serde(default)]
    pub order: i32,
    #[serde(default)]
    pub prev: Option<String>,
    #[serde(default)]
    pub next: Option<String>,
}

/// Split a `---` delimited YAML header from the Markdown body.
pub fn parse_front_matter(source: &str) -> Result<(FrontMatter, &str), AppError> {
    let rest = source
        .strip_prefix("---")
        .ok_or_else(|| AppError::Config("document has no front matter".into()))?;
    let (header, body) = rest
        .split_once("\n---")
        .ok_or_else(|| AppError::Config("front matter is not terminated by '---'".into()))?;

    let front: FrontMatter = serde_yaml::from_str(header)
        .map_err(|e| AppError::Config(format!("invalid front matter: {e}")))?;

    Ok((front, body.trim_start()))
}

/// Turn a Markdown file with front matter into a document ready to store.
/// The table of contents is derived from the body.
pub fn parse_seed_document(source: &str) -> Result<NewDocument, AppError> {
    let (front, body) = parse_front_matter(source)?;

    Ok(NewDocument {
        slug: front.slug,
        title: front.title,
        content: body.to_string(),
        category: front.category,
        subcategory: front.subcategory,
        order: front.order,
        metadata: Some(DocMetadata {
            prev: front.prev,
            next: front.next,
            toc: extract_toc(body),
        }),
    })
}

/// The navigation tree shipped with the binary.
pub fn sample_navigation() -> Result<Navigation, AppError> {
    serde_yaml::from_str(SAMPLE_NAVIGATION)
        .map_err(|e| AppError::Config(format!("invalid navigation tree: {e}")))
}

/// Load the bundled sample documents into `repo`.
///
/// Documents whose slug already exists are skipped. Returns how many were
/// created.
pub async fn seed_sample_docs(repo: &dyn DocumentRepository) -> Result<usize, AppError> {
    tracing::info!("Starting sample docs seeding...");

    let mut created = 0;
    for (file, source) in SAMPLE_DOCS {
        let doc = parse_seed_document(source)
            .map_err(|e| AppError::Config(format!("{file}: {e}")))?;
        let slug = doc.slug.clone();

        match repo.create(doc).await {
            Ok(stored) => {
                tracing::info!(id = stored.id, slug = %stored.slug, "Seeded document");
                created += 1;
            }
            Err(AppError::Conflict(_)) => {
                tracing::info!("Document '{}' already exists, skipping.", slug);
            }
            Err(e) => return Err(e),
        }
    }

    tracing::info!(created, "Sample docs seeding complete");
    Ok(created)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::InMemoryDocumentRepository;

    #[test]
    fn test_parse_front_matter() {
        let source = "---\nslug: faq\ntitle: FAQ\ncategory: Resources\n---\n\n# FAQ\n\nAnswers.";
        let (front, body) = parse_front_matter(source).unwrap();
        assert_eq!(front.slug, "faq");
        assert_eq!(front.order, 0);
        assert_eq!(front.prev, None);
        assert_eq!(body, "# FAQ\n\nAnswers.");
    }

    #[test]
    fn test_missing_front_matter() {
        let err = parse_front_matter("# Just markdown").unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }

    #[test]
    fn test_unterminated_front_matter() {
        let err = parse_front_matter("---\nslug: faq\n# FAQ").unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }

    #[test]
    fn test_seed_document_toc_is_derived() {
        let doc = parse_seed_document(SAMPLE_DOCS[0].1).unwrap();
        assert_eq!(doc.slug, "introduction");
        assert_eq!(doc.subcategory.as_deref(), Some("Introduction"));

        let metadata = doc.metadata.unwrap();
        assert_eq!(metadata.prev, None);
        assert_eq!(metadata.next.as_deref(), Some("installation"));

        let slugs: Vec<&str> = metadata.toc.iter().map(|e| e.slug.as_str()).collect();
        assert_eq!(
            slugs,
            vec![
                "what-is-caldera",
                "key-features",
                "architecture-overview",
                "core-components",
                "getting-started",
                "basic-configuration",
                "next-steps",
            ]
        );
    }

    #[test]
    fn test_installation_toc_keeps_numbered_anchors() {
        let doc = parse_seed_document(SAMPLE_DOCS[1].1).unwrap();
        let toc = doc.metadata.unwrap().toc;
        assert!(toc.iter().any(|e| e.slug == "1-install-the-caldera-cli"));
        // level 4 headings are included, the shell comments in fences are not
        assert!(toc.iter().any(|e| e.slug == "api-connection-errors" && e.level == Some(4)));
        assert!(!toc.iter().any(|e| e.title.contains("Smart contracts")));
    }

    #[test]
    fn test_sample_navigation() {
        let nav = sample_navigation().unwrap();
        let titles: Vec<&str> = nav.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(
            titles,
            vec!["Getting Started", "Core Concepts", "API Reference", "Guides", "Resources"]
        );
        assert_eq!(nav[0].icon, "rocket_launch");
        assert_eq!(nav[0].items[0].items[1].slug, "introduction#key-features");
        assert!(nav[0].items[1].items.is_empty());
    }

    #[tokio::test]
    async fn test_seed_sample_docs_is_idempotent() {
        let repo = InMemoryDocumentRepository::new(Vec::new());

        assert_eq!(seed_sample_docs(&repo).await.unwrap(), 3);
        assert_eq!(seed_sample_docs(&repo).await.unwrap(), 0);

        let all = repo.list_all().await.unwrap();
        let slugs: Vec<&str> = all.iter().map(|d| d.slug.as_str()).collect();
        assert_eq!(slugs, vec!["introduction", "installation", "quick-start"]);
    }
}
