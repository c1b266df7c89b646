//! Light/dark colour scheme.
//!
//! The choice is stored in `localStorage` and applied as a `data-theme`
//! attribute on `<html>`. Without a stored choice the stylesheet follows the
//! system preference.

pub const THEME_STORAGE_KEY: &str = "caldera-docs-theme";
pub const THEME_ATTRIBUTE: &str = "data-theme";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Parse a stored value. Anything unknown is ignored.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Material icon for the button that switches away from this theme.
    pub fn toggle_icon(self) -> &'static str {
        match self {
            Theme::Light => "dark_mode",
            Theme::Dark => "light_mode",
        }
    }
}

#[cfg(feature = "hydrate")]
pub mod document {
    use super::{Theme, THEME_ATTRIBUTE, THEME_STORAGE_KEY};

    /// The stored choice, else the system preference.
    pub fn initial_theme() -> Theme {
        stored_theme().unwrap_or_else(preferred_theme)
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }

    fn stored_theme() -> Option<Theme> {
        let value = storage()?.get_item(THEME_STORAGE_KEY).ok().flatten()?;
        Theme::from_name(&value)
    }

    fn preferred_theme() -> Theme {
        let prefers_dark = web_sys::window()
            .and_then(|window| window.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .is_some_and(|query| query.matches());
        if prefers_dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn show_theme(theme: Theme) {
        let root = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.document_element());
        if let Some(root) = root {
            if let Err(e) = root.set_attribute(THEME_ATTRIBUTE, theme.as_str()) {
                leptos::logging::warn!("Failed to apply theme: {e:?}");
            }
        }
    }

    pub fn save_theme(theme: Theme) {
        let Some(storage) = storage() else {
            return;
        };
        if let Err(e) = storage.set_item(THEME_STORAGE_KEY, theme.as_str()) {
            leptos::logging::warn!("Failed to store theme: {e:?}");
        }
    }
}
