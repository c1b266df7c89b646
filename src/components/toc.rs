use leptos::prelude::*;

use crate::db::models::TocEntry;

/// "On this page" panel. The entry for the heading currently being read is
/// highlighted once the page is hydrated.
#[component]
pub fn TableOfContents(entries: Vec<TocEntry>) -> impl IntoView {
    let active = RwSignal::new(None::<String>);

    #[cfg(feature = "hydrate")]
    {
        use crate::client::scrollspy::HeadingObserver;

        let ids: Vec<String> = entries.iter().map(|entry| entry.slug.clone()).collect();
        let observer = StoredValue::new_local(None::<HeadingObserver>);
        Effect::new(move |_| {
            match HeadingObserver::observe(&ids, move |id| active.set(Some(id))) {
                Ok(heading_observer) => observer.set_value(Some(heading_observer)),
                Err(e) => leptos::logging::error!("Failed to observe headings: {e:?}"),
            }
        });
    }

    if entries.is_empty() {
        return ().into_any();
    }

    view! {
        <aside class="toc">
            <h4>"On this page"</h4>
            <nav>
                <ul>
                    {entries
                        .into_iter()
                        .map(|entry| {
                            let slug = entry.slug.clone();
                            let nested = entry.level.is_some_and(|level| level > 2);
                            view! {
                                <li>
                                    <a
                                        href=format!("#{}", entry.slug)
                                        class:nested=nested
                                        class:active=move || active.read().as_deref() == Some(slug.as_str())
                                    >
                                        {entry.title}
                                    </a>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </nav>
        </aside>
    }
    .into_any()
}
