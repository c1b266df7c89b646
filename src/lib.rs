pub mod app;
pub mod error;
pub mod db {
    pub mod models;
    #[cfg(feature = "ssr")]
    pub mod repository;
}
pub mod models {
    pub mod page;
}
pub mod rendering {
    pub mod slug;
    pub mod summary;
    pub mod toc;
    #[cfg(feature = "ssr")]
    pub mod highlight;
    #[cfg(feature = "ssr")]
    pub mod markdown;
    #[cfg(feature = "ssr")]
    pub mod page;
}
pub mod components {
    pub mod breadcrumbs;
    pub mod document_view;
    pub mod search_bar;
    pub mod sidebar;
    pub mod theme_toggle;
    pub mod toc;
}
pub mod client {
    pub mod scroll;
    pub mod scrollspy;
    pub mod theme;
    pub mod timer;
    #[cfg(feature = "hydrate")]
    pub mod clipboard;
}
#[cfg(feature = "ssr")]
pub mod api {
    pub mod assets;
    pub mod docs;
    pub mod errors;
    pub mod routes;
    pub mod search;
}
#[cfg(feature = "ssr")]
pub mod config;
#[cfg(feature = "ssr")]
pub mod seed;
#[cfg(feature = "ssr")]
pub mod state;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(app::App);
}
