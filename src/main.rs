#[cfg(feature = "ssr")]
#[derive(Debug, clap::Parser)]
#[command(name = "caldera-docs", version, about = "Caldera documentation server")]
struct ServerArgs {
    /// Settings file (TOML, YAML or JSON). Environment variables still win.
    #[arg(long)]
    config: Option<std::path::PathBuf>,

    /// Start with an empty document store.
    #[arg(long)]
    no_seed: bool,

    /// Listen address, overriding `site-addr` / `LEPTOS_SITE_ADDR`.
    #[arg(long)]
    addr: Option<std::net::SocketAddr>,
}

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use std::sync::Arc;

    use anyhow::Context;
    use caldera_docs::api::routes::router;
    use caldera_docs::app::{shell, App};
    use caldera_docs::config::AppConfig;
    use caldera_docs::db::repository::InMemoryDocumentRepository;
    use caldera_docs::rendering::highlight::theme_css;
    use caldera_docs::seed;
    use caldera_docs::state::AppState;
    use clap::Parser;
    use leptos::prelude::*;
    use leptos_axum::{generate_route_list, LeptosRoutes};
    use tower_http::services::ServeDir;
    use tower_http::trace::TraceLayer;

    let args = ServerArgs::parse();
    let config = AppConfig::load(args.config.as_deref())?;

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter.as_str().into()),
        )
        .init();

    tracing::info!("Starting Caldera docs server...");

    // Load Leptos options from Cargo.toml metadata
    let conf = get_configuration(None).context("failed to load Leptos configuration")?;
    let mut leptos_options = conf.leptos_options;
    if let Some(addr) = args.addr {
        leptos_options.site_addr = addr;
    }
    let addr = leptos_options.site_addr;
    let site_root = leptos_options.site_root.to_string();

    // Build the document store
    let document_repo = Arc::new(InMemoryDocumentRepository::new(seed::sample_navigation()?));
    if config.seed_sample_docs && !args.no_seed {
        seed::seed_sample_docs(document_repo.as_ref()).await?;
    } else {
        tracing::info!("Sample docs seeding disabled, starting with an empty store");
    }

    let highlight_css = theme_css(&config.highlight_theme)?;
    tracing::info!(theme = %config.highlight_theme, "Highlight stylesheet generated");

    let app_state = AppState::new(document_repo, highlight_css, leptos_options.clone());

    // Generate the Leptos route list for SSR
    let routes = generate_route_list(App);

    // Build the Axum router
    let app = router()
        // Leptos SSR routes; server functions get the state as context
        .leptos_routes_with_context(
            &app_state,
            routes,
            {
                let app_state = app_state.clone();
                move || provide_context(app_state.clone())
            },
            {
                let leptos_options = leptos_options.clone();
                move || shell(leptos_options.clone())
            },
        )
        // Static files (compiled WASM, JS and CSS)
        .fallback_service(ServeDir::new(&site_root))
        .layer(TraceLayer::new_for_http());

    let app = match cors::layer(&config.cors_allowed_origins)? {
        Some(cors) => {
            tracing::info!(origins = ?config.cors_allowed_origins, "CORS enabled");
            app.layer(cors)
        }
        None => app,
    };
    let app = app.with_state(app_state);

    // Start the server
    tracing::info!("Listening on http://{}", addr);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}

#[cfg(feature = "ssr")]
mod cors {
    use anyhow::Context;
    use axum::http::{HeaderValue, Method};
    use tower_http::cors::{AllowOrigin, CorsLayer};

    /// Read-only CORS for the configured origins. `None` when the list is empty.
    pub fn layer(origins: &[String]) -> anyhow::Result<Option<CorsLayer>> {
        if origins.is_empty() {
            return Ok(None);
        }

        let origins = origins
            .iter()
            .map(|origin| {
                origin
                    .parse::<HeaderValue>()
                    .with_context(|| format!("invalid CORS origin '{origin}'"))
            })
            .collect::<anyhow::Result<Vec<_>>>()?;

        Ok(Some(
            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods([Method::GET]),
        ))
    }
}

// When compiled for WASM (client-side), there's no main function.
// The hydrate() function in lib.rs handles client-side initialization.
#[cfg(not(feature = "ssr"))]
fn main() {
    // This is intentionally empty.
    // Client-side hydration is handled by lib.rs::hydrate()
}
