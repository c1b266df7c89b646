use std::path::Path;

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;

use crate::error::AppError;

pub const DEFAULT_LOG_FILTER: &str = "caldera_docs=info,tower_http=info";
pub const DEFAULT_HIGHLIGHT_THEME: &str = "base16-ocean.dark";

/// Server settings.
///
/// Layered, last one wins: built-in defaults, the optional `--config` file,
/// then `CALDERA_*` environment variables (e.g. `CALDERA_SEED_SAMPLE_DOCS=false`,
/// `CALDERA_CORS_ALLOWED_ORIGINS=https://a.example,https://b.example`).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AppConfig {
    /// `tracing_subscriber` filter directive, used unless `RUST_LOG` is set.
    pub log_filter: String,
    /// Load the bundled sample documents at start-up.
    pub seed_sample_docs: bool,
    /// syntect theme used to generate `/assets/highlight.css`.
    pub highlight_theme: String,
    /// Origins allowed to call the API cross-origin. Empty disables CORS.
    pub cors_allowed_origins: Vec<String>,
}

impl From<ConfigError> for AppError {
    fn from(err: ConfigError) -> Self {
        AppError::Config(err.to_string())
    }
}

impl AppConfig {
    /// Load settings, reading `path` if given. A given path must exist.
    pub fn load(path: Option<&Path>) -> Result<Self, AppError> {
        let mut builder = defaults()?;
        if let Some(path) = path {
            builder = builder.add_source(File::from(path).required(true));
        }
        let builder = builder.add_source(
            Environment::with_prefix("CALDERA")
                .try_parsing(true)
                .list_separator(",")
                .with_list_parse_key("cors_allowed_origins"),
        );
        Self::build(builder)
    }

    fn build(builder: ConfigBuilder<DefaultState>) -> Result<Self, AppError> {
        Ok(builder.build()?.try_deserialize()?)
    }
}

fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder()
        .set_default("log_filter", DEFAULT_LOG_FILTER)?
        .set_default("seed_sample_docs", true)?
        .set_default("highlight_theme", DEFAULT_HIGHLIGHT_THEME)?
        .set_default("cors_allowed_origins", Vec::<String>::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    #[test]
    fn test_defaults() {
        let config = AppConfig::build(defaults().unwrap()).unwrap();
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
        assert!(config.seed_sample_docs);
        assert_eq!(config.highlight_theme, DEFAULT_HIGHLIGHT_THEME);
        assert!(config.cors_allowed_origins.is_empty());
    }

    #[test]
    fn test_file_overrides_defaults() {
        let builder = defaults().unwrap().add_source(File::from_str(
            r#"
seed_sample_docs = false
highlight_theme = "InspiredGitHub"
cors_allowed_origins = ["http://localhost:5173"]
"#,
            FileFormat::Toml,
        ));
        let config = AppConfig::build(builder).unwrap();
        assert!(!config.seed_sample_docs);
        assert_eq!(config.highlight_theme, "InspiredGitHub");
        assert_eq!(config.cors_allowed_origins, vec!["http://localhost:5173"]);
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
    }

    #[test]
    fn test_missing_config_file_is_an_error() {
        let err = AppConfig::load(Some(Path::new("/nonexistent/caldera.toml"))).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }

    #[test]
    fn test_wrong_type_is_an_error() {
        let builder = defaults()
            .unwrap()
            .add_source(File::from_str("seed_sample_docs = \"maybe\"", FileFormat::Toml));
        assert!(matches!(AppConfig::build(builder), Err(AppError::Config(_))));
    }
}
