use leptos::prelude::*;

use crate::client::theme::Theme;

/// Header button switching between the light and dark colour schemes.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    // Light until hydrated; the stylesheet already follows the system preference
    let theme = RwSignal::new(Theme::default());

    #[cfg(feature = "hydrate")]
    Effect::new(move |_| {
        let initial = crate::client::theme::document::initial_theme();
        crate::client::theme::document::show_theme(initial);
        theme.set(initial);
    });

    let on_click = move |_: leptos::ev::MouseEvent| {
        let next = theme.get_untracked().toggled();
        theme.set(next);
        #[cfg(feature = "hydrate")]
        {
            crate::client::theme::document::show_theme(next);
            crate::client::theme::document::save_theme(next);
        }
    };

    view! {
        <button
            type="button"
            class="icon-button theme-toggle"
            title="Toggle dark mode"
            aria-label="Toggle dark mode"
            on:click=on_click
        >
            <span class="material-icons">{move || theme.get().toggle_icon()}</span>
        </button>
    }
}
