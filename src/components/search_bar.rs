use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

use crate::client::timer::{PendingTimeout, SEARCH_DEBOUNCE_MS};
use crate::models::page::SearchHit;

/// Search the documentation for the search page.
///
/// Blank queries return no hits without touching the store.
#[server(prefix = "/rpc")]
pub async fn search_docs(query: String) -> Result<Vec<SearchHit>, ServerFnError> {
    use crate::api::search::process_search;
    use crate::rendering::page::build_search_hit;
    use crate::state::AppState;

    let state = AppState::from_context()?;
    let docs = process_search(state.document_repo.as_ref(), Some(&query))
        .await
        .map_err(|e| e.into_server_error())?;

    Ok(docs.iter().map(build_search_hit).collect())
}

/// URL of the search page for `query`.
pub fn search_url(query: &str) -> String {
    format!("/search?q={}", urlencoding::encode(query))
}

/// Navigation for a query typed on the search page: the current history
/// entry is rewritten in place and the scroll position is kept.
pub fn live_search_navigation() -> NavigateOptions {
    NavigateOptions {
        replace: true,
        scroll: false,
        ..Default::default()
    }
}

/// Search input with a clear button.
///
/// Typing reports the value to `on_search` once input has been quiet for
/// 300 ms. Submitting a non-blank query navigates to the search page.
#[component]
pub fn SearchBar(
    /// Value to show, kept in sync when it changes (e.g. the URL's `q`).
    #[prop(optional, into)]
    initial_query: Option<Signal<String>>,
    #[prop(optional)] on_search: Option<Callback<String>>,
) -> impl IntoView {
    let (query, set_query) = signal(
        initial_query
            .map(|initial| initial.get_untracked())
            .unwrap_or_default(),
    );
    if let Some(initial) = initial_query {
        Effect::new(move |_| set_query.set(initial.get()));
    }

    let debounce = PendingTimeout::new();
    let navigate = use_navigate();

    let on_input = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        set_query.set(value.clone());
        if let Some(on_search) = on_search {
            debounce.schedule(SEARCH_DEBOUNCE_MS, move || on_search.run(value));
        }
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let value = query.get_untracked();
        if !value.trim().is_empty() {
            debounce.cancel();
            navigate(&search_url(&value), Default::default());
        }
    };

    let on_clear = move |_: leptos::ev::MouseEvent| {
        debounce.cancel();
        set_query.set(String::new());
        if let Some(on_search) = on_search {
            on_search.run(String::new());
        }
    };

    view! {
        <form class="search-bar" role="search" on:submit=on_submit>
            <span class="material-icons search-icon">"search"</span>
            <input
                type="text"
                placeholder="Search documentation..."
                aria-label="Search documentation"
                on:input=on_input
                prop:value=query
            />
            <Show when=move || !query.read().is_empty()>
                <button type="button" class="clear-button" aria-label="Clear search" on:click=on_clear>
                    <span class="material-icons">"close"</span>
                </button>
            </Show>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_url_encodes_query() {
        assert_eq!(search_url("caldera"), "/search?q=caldera");
        assert_eq!(search_url("quick start & more"), "/search?q=quick%20start%20%26%20more");
    }

    #[test]
    fn test_live_search_replaces_history_entry() {
        let options = live_search_navigation();
        assert!(options.replace);
        assert!(!options.scroll);
        assert!(options.resolve);
    }
}
