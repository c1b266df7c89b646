use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::db::models::{NavSection, Navigation};

#[server(prefix = "/rpc")]
pub async fn get_navigation() -> Result<Navigation, ServerFnError> {
    use crate::api::docs::FETCH_NAVIGATION_ERROR;
    use crate::state::AppState;

    let state = AppState::from_context()?;
    state
        .document_repo
        .navigation()
        .await
        .map_err(|e| e.or_internal(FETCH_NAVIGATION_ERROR).into_server_error())
}

/// Link target for a navigation slug, which may carry a `#fragment`.
pub fn doc_href(slug: &str) -> String {
    format!("/docs/{slug}")
}

/// Whether `pathname` is the page a navigation slug points at.
fn is_current(pathname: &str, slug: &str) -> bool {
    let page = slug.split('#').next().unwrap_or(slug);
    pathname == doc_href(page)
}

/// Navigation menu. On narrow screens it is hidden unless `open`.
#[component]
pub fn Sidebar(#[prop(into)] open: Signal<bool>) -> impl IntoView {
    let navigation = Resource::new(|| (), |_| get_navigation());

    view! {
        <aside class="sidebar" class:open=move || open.get()>
            <Suspense fallback=|| view! { <p class="loading">"Loading navigation..."</p> }>
                {move || navigation.get().map(|res| match res {
                    Ok(sections) => sections
                        .into_iter()
                        .map(|section| view! { <SidebarSection section /> })
                        .collect_view()
                        .into_any(),
                    Err(e) => view! { <p class="error">"Navigation unavailable: " {e.to_string()}</p> }.into_any(),
                })}
            </Suspense>
        </aside>
    }
}

#[component]
fn SidebarSection(section: NavSection) -> impl IntoView {
    let location = use_location();
    let pathname = location.pathname;

    view! {
        <details class="nav-section" open=true>
            <summary>
                <span class="material-icons">{section.icon}</span>
                <span>{section.title}</span>
            </summary>
            <ul>
                {section
                    .items
                    .into_iter()
                    .map(|entry| {
                        let slug = entry.slug.clone();
                        view! {
                            <li>
                                <a
                                    href=doc_href(&entry.slug)
                                    class:active=move || is_current(&pathname.read(), &slug)
                                >
                                    {entry.title}
                                </a>
                                {(!entry.items.is_empty()).then(|| view! {
                                    <ul class="nav-links">
                                        {entry
                                            .items
                                            .into_iter()
                                            .map(|link| view! { <li><a href=doc_href(&link.slug)>{link.title}</a></li> })
                                            .collect_view()}
                                    </ul>
                                })}
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </details>
    }
}
