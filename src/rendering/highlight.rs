use std::sync::LazyLock;

use syntect::highlighting::ThemeSet;
use syntect::html::{css_for_theme_with_class_style, ClassStyle, ClassedHTMLGenerator};
use syntect::parsing::SyntaxSet;
use syntect::util::LinesWithEndings;

use crate::error::AppError;

static SYNTAXES: LazyLock<SyntaxSet> = LazyLock::new(SyntaxSet::load_defaults_newlines);

/// Token spans are emitted as `<span class="hl-keyword hl-rust">`, so the
/// stylesheet from [`theme_css`] cannot collide with page styles.
const CLASS_STYLE: ClassStyle = ClassStyle::SpacedPrefixed { prefix: "hl-" };

/// Highlight `code` as `language`, returning HTML token spans.
///
/// Returns `None` when the language tag is unknown or highlighting fails;
/// callers fall back to escaped plain text.
pub fn highlight_code(code: &str, language: &str) -> Option<String> {
    let syntax = SYNTAXES.find_syntax_by_token(language)?;
    let mut generator =
        ClassedHTMLGenerator::new_with_class_style(syntax, &SYNTAXES, CLASS_STYLE);

    for line in LinesWithEndings::from(code) {
        if let Err(e) = generator.parse_html_for_line_which_includes_newline(line) {
            tracing::warn!(language, error = %e, "Syntax highlighting failed");
            return None;
        }
    }

    Some(generator.finalize())
}

/// Stylesheet for highlighted code blocks using one of syntect's bundled themes.
pub fn theme_css(theme_name: &str) -> Result<String, AppError> {
    let themes = ThemeSet::load_defaults();
    let theme = themes.themes.get(theme_name).ok_or_else(|| {
        let known: Vec<&str> = themes.themes.keys().map(String::as_str).collect();
        AppError::Config(format!(
            "unknown highlight theme '{theme_name}', expected one of: {}",
            known.join(", ")
        ))
    })?;

    css_for_theme_with_class_style(theme, CLASS_STYLE)
        .map_err(|e| AppError::Config(format!("failed to build highlight stylesheet: {e}")))
}
