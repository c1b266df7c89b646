use leptos::prelude::*;
use leptos_meta::{provide_meta_context, MetaTags, Stylesheet, Title};
use leptos_router::components::*;
use leptos_router::hooks::{use_location, use_navigate, use_params_map, use_query_map};
use leptos_router::path;

use crate::components::document_view::DocumentView;
use crate::components::search_bar::{live_search_navigation, search_docs, search_url, SearchBar};
use crate::components::sidebar::{doc_href, get_navigation, Sidebar};
use crate::components::theme_toggle::ThemeToggle;

/// HTML document wrapping the app for server-side rendering.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/caldera-docs.css" />
        <Stylesheet id="highlight" href="/assets/highlight.css" />
        <Title text="Caldera Docs" />

        <Router>
            <SiteLayout>
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/docs/:slug") view=DocPage />
                    <Route path=path!("/search") view=SearchPage />
                    <Route path=path!("/about") view=AboutPage />
                </Routes>
            </SiteLayout>
        </Router>
    }
}

/// Header, navigation sidebar and the routed content.
#[component]
fn SiteLayout(children: Children) -> impl IntoView {
    let sidebar_open = RwSignal::new(false);
    let pathname = use_location().pathname;

    // Close the mobile sidebar once a link in it has been followed
    Effect::new(move |_| {
        pathname.track();
        sidebar_open.set(false);
    });

    let toggle_sidebar = move |_: leptos::ev::MouseEvent| sidebar_open.update(|open| *open = !*open);
    let close_sidebar = move |_: leptos::ev::MouseEvent| sidebar_open.set(false);

    view! {
        <header class="top-nav">
            <button
                type="button"
                class="icon-button menu-button"
                aria-label="Toggle navigation"
                on:click=toggle_sidebar
            >
                <span class="material-icons">
                    {move || if sidebar_open.get() { "close" } else { "menu" }}
                </span>
            </button>
            <a href="/" class="logo">
                <span class="logo-mark">"C"</span>
                <span>"Caldera Docs"</span>
            </a>
            <SearchBar />
            <nav class="nav-links">
                <a href="/about">"About"</a>
            </nav>
            <ThemeToggle />
        </header>
        <div class="layout">
            <Sidebar open=sidebar_open />
            <Show when=move || sidebar_open.get()>
                <div class="sidebar-backdrop" on:click=close_sidebar></div>
            </Show>
            <main class="content">{children()}</main>
        </div>
    }
}

#[component]
fn HomePage() -> impl IntoView {
    let navigation = Resource::new(|| (), |_| get_navigation());

    view! {
        <section class="home">
            <h1>"Caldera Documentation"</h1>
            <p class="lead">
                "Guides, concepts and API reference for building decentralized applications with Caldera."
            </p>
            <a class="button" href=doc_href("introduction")>"Get started"</a>
            <Suspense fallback=|| ()>
                {move || navigation.get().and_then(Result::ok).map(|sections| view! {
                    <div class="section-grid">
                        {sections
                            .into_iter()
                            .map(|section| {
                                let first = section.items.first().map(|entry| doc_href(&entry.slug));
                                view! {
                                    <a class="section-card" href=first.unwrap_or_else(|| "/".to_string())>
                                        <span class="material-icons">{section.icon}</span>
                                        <h3>{section.title}</h3>
                                        <p>{format!("{} pages", section.items.len())}</p>
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                })}
            </Suspense>
        </section>
    }
}

#[component]
fn DocPage() -> impl IntoView {
    let params = use_params_map();
    let slug = Memo::new(move |_| params.get().get("slug").unwrap_or_default());

    view! { <DocumentView slug /> }
}

#[component]
fn SearchPage() -> impl IntoView {
    let query_map = use_query_map();
    let query = Memo::new(move |_| query_map.get().get("q").unwrap_or_default());

    // Typing rewrites the address bar in place; the URL drives the results
    let navigate = use_navigate();
    let on_search = Callback::new(move |q: String| {
        navigate(&search_url(&q), live_search_navigation());
    });

    let results = Resource::new(move || query.get(), search_docs);

    view! {
        <Title text="Search | Caldera Docs" />
        <section class="search-page">
            <h1>"Search"</h1>
            <SearchBar initial_query=query on_search />
            <Suspense fallback=|| view! { <p class="loading">"Searching..."</p> }>
                {move || results.get().map(|res| match res {
                    Ok(hits) if hits.is_empty() => {
                        if query.read().trim().is_empty() {
                            view! { <p class="hint">"Type a query to search the documentation."</p> }.into_any()
                        } else {
                            view! { <p class="empty">"No results found for \"" {query.get()} "\"."</p> }.into_any()
                        }
                    }
                    Ok(hits) => view! {
                        <ul class="search-results">
                            {hits
                                .into_iter()
                                .map(|hit| view! {
                                    <li>
                                        <a href=doc_href(&hit.slug)>{hit.title}</a>
                                        <span class="category">{hit.category}</span>
                                        <p>{hit.excerpt}</p>
                                    </li>
                                })
                                .collect_view()}
                        </ul>
                    }.into_any(),
                    Err(e) => view! { <p class="error">"Search error: " {e.to_string()}</p> }.into_any(),
                })}
            </Suspense>
        </section>
    }
}

#[component]
fn AboutPage() -> impl IntoView {
    view! {
        <Title text="About | Caldera Docs" />
        <section class="about">
            <header class="about-hero">
                <h1>"About Caldera"</h1>
                <p class="lead">
                    "Building the foundation for decentralized social applications with integrated DeFi capabilities."
                </p>
            </header>

            <h2>"Our Mission"</h2>
            <p>
                "Caldera provides open, permissionless infrastructure for decentralized social applications \
                 that integrate seamlessly with DeFi protocols. Developers build applications where users own \
                 their data, their content and their economic relationships."
            </p>
            <p>
                "We build in public: the code is open source and the roadmap is shaped together with the \
                 community."
            </p>

            <h2>"Grants & Funding"</h2>
            <p>
                "Development has been supported by ecosystem grant programs, including Gitcoin Grants rounds \
                 and Optimism's Retroactive Public Goods Funding, and by the contributors who improve the \
                 code and this documentation."
            </p>

            <h2>"Roadmap"</h2>
            <ol class="roadmap">
                {ROADMAP
                    .iter()
                    .map(|(milestone, summary)| view! {
                        <li>
                            <h3>{*milestone}</h3>
                            <p>{*summary}</p>
                        </li>
                    })
                    .collect_view()}
            </ol>
        </section>
    }
}

const ROADMAP: &[(&str, &str)] = &[
    ("Foundation", "Core SDK, basic social features and the documentation site."),
    ("DeFi Integration", "Wallet integration, tipping and support for multiple chains."),
    ("Community Growth", "Rewards system, governance module and expanded documentation."),
    ("Ecosystem Expansion", "Developer grants, improved tooling and more DeFi integrations."),
];

#[component]
pub fn NotFound() -> impl IntoView {
    #[cfg(feature = "ssr")]
    if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
        response.set_status(axum::http::StatusCode::NOT_FOUND);
    }

    view! {
        <Title text="Not Found | Caldera Docs" />
        <section class="not-found">
            <h1>"Page not found"</h1>
            <p>"The page you are looking for does not exist or has been moved."</p>
            <a href="/">"Return Home"</a>
        </section>
    }
}
