use leptos::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Crumb {
    pub label: String,
    pub href: Option<String>,
}

/// Trail for a document page: Docs › category › subcategory › title.
pub fn doc_trail(category: &str, subcategory: Option<&str>, title: &str) -> Vec<Crumb> {
    let mut trail = vec![Crumb {
        label: "Docs".to_string(),
        href: Some("/".to_string()),
    }];
    trail.push(Crumb {
        label: category.to_string(),
        href: None,
    });
    if let Some(subcategory) = subcategory.filter(|s| !s.is_empty()) {
        trail.push(Crumb {
            label: subcategory.to_string(),
            href: None,
        });
    }
    trail.push(Crumb {
        label: title.to_string(),
        href: None,
    });
    trail
}

#[component]
pub fn Breadcrumbs(items: Vec<Crumb>) -> impl IntoView {
    let last = items.len().saturating_sub(1);

    view! {
        <nav class="breadcrumbs" aria-label="Breadcrumb">
            <ol>
                {items
                    .into_iter()
                    .enumerate()
                    .map(|(index, crumb)| {
                        let current = index == last;
                        view! {
                            <li class:current=current>
                                {match crumb.href {
                                    Some(href) if !current => view! { <a href=href>{crumb.label}</a> }.into_any(),
                                    _ => view! { <span>{crumb.label}</span> }.into_any(),
                                }}
                            </li>
                        }
                    })
                    .collect_view()}
            </ol>
        </nav>
    }
}
