use crate::db::models::Document;
use crate::models::page::{DocPage, SearchHit};
use crate::rendering::markdown::render_markdown;
use crate::rendering::summary::{extract_summary, EXCERPT_LENGTH};
use crate::rendering::toc::extract_toc;

/// Build the page view model for a stored document.
///
/// A table of contents stored in the metadata wins; otherwise it is derived
/// from the content so it always lines up with the rendered heading ids.
pub fn build_doc_page(doc: &Document) -> DocPage {
    let metadata = doc.metadata.clone().unwrap_or_default();
    let toc = if metadata.toc.is_empty() {
        extract_toc(&doc.content)
    } else {
        metadata.toc
    };

    DocPage {
        slug: doc.slug.clone(),
        title: doc.title.clone(),
        category: doc.category.clone(),
        subcategory: doc.subcategory.clone(),
        html: render_markdown(&doc.content),
        toc,
        prev: metadata.prev,
        next: metadata.next,
        updated_at: doc.updated_at,
    }
}

pub fn build_search_hit(doc: &Document) -> SearchHit {
    SearchHit {
        slug: doc.slug.clone(),
        title: doc.title.clone(),
        category: doc.category.clone(),
        excerpt: extract_summary(&doc.content, EXCERPT_LENGTH),
    }
}
