use leptos::prelude::*;
use leptos_meta::Title;

use crate::client::timer::PendingTimeout;
use crate::components::breadcrumbs::{doc_trail, Breadcrumbs};
use crate::components::toc::TableOfContents;
use crate::models::page::DocPage;
use crate::rendering::slug::humanize_slug;

/// Load and render a document page. `None` when the slug is unknown.
#[server(prefix = "/rpc")]
pub async fn get_doc_page(slug: String) -> Result<Option<DocPage>, ServerFnError> {
    use crate::api::docs::FETCH_DOCS_ERROR;
    use crate::rendering::page::build_doc_page;
    use crate::state::AppState;

    let state = AppState::from_context()?;
    let doc = state
        .document_repo
        .find_by_slug(&slug)
        .await
        .map_err(|e| e.or_internal(FETCH_DOCS_ERROR).into_server_error())?;

    Ok(doc.as_ref().map(build_doc_page))
}

#[component]
pub fn DocumentView(#[prop(into)] slug: Signal<String>) -> impl IntoView {
    let page = Resource::new(move || slug.get(), get_doc_page);

    view! {
        <Suspense fallback=|| view! { <p class="loading">"Loading..."</p> }>
            {move || page.get().map(|res| match res {
                Ok(Some(page)) => view! { <DocArticle page /> }.into_any(),
                Ok(None) => view! { <crate::app::NotFound /> }.into_any(),
                Err(e) => view! {
                    <div class="error">
                        <h1>"Error Loading Documentation"</h1>
                        <p>"We couldn't load the documentation you requested. Please try again later."</p>
                        <p class="error-detail">{e.to_string()}</p>
                        <a href="/">"Return Home"</a>
                    </div>
                }.into_any(),
            })}
        </Suspense>
    }
}

/// Where the sources of the published pages are edited.
pub const EDIT_PAGE_BASE_URL: &str = "https://github.com/caldera/docs/edit/main";

pub fn edit_page_url(slug: &str) -> String {
    format!("{EDIT_PAGE_BASE_URL}/{slug}.md")
}

#[component]
fn DocArticle(page: DocPage) -> impl IntoView {
    let copy_ack = PendingTimeout::new();

    // The content only exists once the page data has loaded
    #[cfg(feature = "hydrate")]
    Effect::new(move |_| crate::client::scroll::scroll_to_location_hash());

    let on_content_click = move |ev: leptos::ev::MouseEvent| {
        #[cfg(feature = "hydrate")]
        crate::client::clipboard::copy_code_block(&ev, copy_ack);
        #[cfg(not(feature = "hydrate"))]
        let _ = (ev, copy_ack);
    };

    let trail = doc_trail(&page.category, page.subcategory.as_deref(), &page.title);
    let updated = page.updated_at.format("%B %-d, %Y").to_string();

    view! {
        <Title text=format!("{} | Caldera Docs", page.title) />
        <div class="doc-layout">
            <article class="doc">
                <header class="doc-header">
                    <Breadcrumbs items=trail />
                    <div class="doc-title">
                        <h1>{page.title.clone()}</h1>
                        <a
                            class="edit-link"
                            href=edit_page_url(&page.slug)
                            target="_blank"
                            rel="noopener noreferrer"
                        >
                            <span class="material-icons">"edit"</span>
                            "Edit this page"
                        </a>
                    </div>
                </header>
                <div class="doc-content" inner_html=page.html on:click=on_content_click></div>
                <PrevNext prev=page.prev next=page.next />
                <p class="doc-updated">"Last updated " {updated}</p>
            </article>
            <TableOfContents entries=page.toc />
        </div>
    }
}

/// Footer links to the neighbouring pages. The slugs are not checked, so a
/// missing page simply leads to the not-found view.
#[component]
fn PrevNext(prev: Option<String>, next: Option<String>) -> impl IntoView {
    if prev.is_none() && next.is_none() {
        return ().into_any();
    }

    view! {
        <nav class="prev-next">
            {match prev {
                Some(slug) => view! {
                    <a class="prev" href=format!("/docs/{slug}")>
                        <span class="material-icons">"chevron_left"</span>
                        <span class="direction">"Previous"</span>
                        <span class="label">{humanize_slug(&slug)}</span>
                    </a>
                }.into_any(),
                None => view! { <span></span> }.into_any(),
            }}
            {next.map(|slug| view! {
                <a class="next" href=format!("/docs/{slug}")>
                    <span class="direction">"Next"</span>
                    <span class="label">{humanize_slug(&slug)}</span>
                    <span class="material-icons">"chevron_right"</span>
                </a>
            })}
        </nav>
    }
    .into_any()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edit_page_url() {
        assert_eq!(
            edit_page_url("quick-start"),
            "https://github.com/caldera/docs/edit/main/quick-start.md"
        );
    }
}
