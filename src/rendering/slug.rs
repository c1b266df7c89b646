/// Derive a URL/anchor-safe slug from heading or title text.
///
/// Lower-cases the text, turns whitespace runs into a single `-`, drops every
/// character outside `[a-z0-9_-]`, collapses repeated hyphens and trims
/// hyphens from both ends. The output is stable: `slugify(slugify(x)) ==
/// slugify(x)`.
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_hyphen = false;

    for ch in text.to_lowercase().chars() {
        let keep = if ch.is_whitespace() || ch == '-' {
            pending_hyphen = true;
            continue;
        } else if ch.is_ascii_alphanumeric() || ch == '_' {
            ch
        } else {
            continue;
        };

        if pending_hyphen && !slug.is_empty() {
            slug.push('-');
        }
        pending_hyphen = false;
        slug.push(keep);
    }

    slug
}

/// Turn a slug back into a readable label: `quick-start` → `Quick start`.
pub fn humanize_slug(slug: &str) -> String {
    let spaced = slug.replace('-', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_heading() {
        assert_eq!(slugify("What is X"), "what-is-x");
        assert_eq!(slugify("Key Features"), "key-features");
    }

    #[test]
    fn test_punctuation_removed() {
        assert_eq!(slugify("What is Caldera?"), "what-is-caldera");
        assert_eq!(slugify("1. Install the Caldera CLI"), "1-install-the-caldera-cli");
        assert_eq!(slugify("Use `caldera.config.js`"), "use-calderaconfigjs");
    }

    #[test]
    fn test_hyphen_runs_collapse() {
        assert_eq!(slugify("Errors -- and -  Recovery"), "errors-and-recovery");
        assert_eq!(slugify("a - b"), "a-b");
    }

    #[test]
    fn test_trims_hyphens() {
        assert_eq!(slugify("  -Leading and trailing-  "), "leading-and-trailing");
        assert_eq!(slugify("!!!"), "");
        assert_eq!(slugify(""), "");
    }

    #[test]
    fn test_hyphen_only_between_kept_chars() {
        // Punctuation between words must not leave a stray hyphen
        assert_eq!(slugify("Q & A"), "q-a");
        assert_eq!(slugify("snake_case stays"), "snake_case-stays");
    }

    #[test]
    fn test_non_ascii_dropped() {
        assert_eq!(slugify("Café Setup"), "caf-setup");
    }

    #[test]
    fn test_idempotent_and_charset() {
        let titles = [
            "What is Caldera?",
            "  Spaces   everywhere  ",
            "--dashes--",
            "Mixed_CASE and 123 numbers!",
            "Émojis 🚀 and symbols #$%",
            "",
        ];

        for title in titles {
            let once = slugify(title);
            let twice = slugify(&once);
            assert_eq!(once, twice, "slugify should be idempotent for {title:?}");
            assert!(
                once.chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '-'),
                "unexpected character in {once:?}"
            );
            assert!(!once.starts_with('-') && !once.ends_with('-'), "{once:?}");
            assert!(!once.contains("--"), "{once:?}");
        }
    }

    #[test]
    fn test_humanize_slug() {
        assert_eq!(humanize_slug("quick-start"), "Quick start");
        assert_eq!(humanize_slug("faq"), "Faq");
        assert_eq!(humanize_slug(""), "");
    }
}
