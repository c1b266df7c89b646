use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};

/// Length of the excerpt shown under a search hit.
pub const EXCERPT_LENGTH: usize = 200;

/// Extract the first paragraph of `markdown` as plain text.
///
/// Headings, code blocks and images are skipped, links keep their text.
/// Output longer than `max_len` characters is cut and suffixed with `...`.
pub fn extract_summary(markdown: &str, max_len: usize) -> String {
    let options = Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH;
    let parser = Parser::new_ext(markdown, options);

    let mut text = String::new();
    let mut skip_depth = 0usize;
    let mut in_paragraph = false;

    for event in parser {
        match event {
            Event::Start(Tag::Heading { .. } | Tag::CodeBlock(_) | Tag::Image { .. }) => {
                skip_depth += 1;
            }
            Event::End(TagEnd::Heading(_) | TagEnd::CodeBlock | TagEnd::Image) => {
                skip_depth = skip_depth.saturating_sub(1);
            }
            _ if skip_depth > 0 => {}
            Event::Start(Tag::Paragraph) => in_paragraph = true,
            Event::End(TagEnd::Paragraph) => {
                in_paragraph = false;
                if !text.trim().is_empty() {
                    break;
                }
                text.clear();
            }
            Event::Text(t) if in_paragraph => text.push_str(&t),
            Event::SoftBreak | Event::HardBreak if in_paragraph => text.push(' '),
            _ => {}
        }
    }

    truncate_with_ellipsis(text.trim(), max_len)
}

fn truncate_with_ellipsis(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_len).collect();
    format!("{}...", cut.trim_end())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_paragraph_after_title() {
        let md = "# Introduction to Caldera\n\nCaldera provides a robust infrastructure.\n\n## What is Caldera?\n\nMore text.";
        assert_eq!(
            extract_summary(md, 200),
            "Caldera provides a robust infrastructure."
        );
    }

    #[test]
    fn test_code_blocks_skipped() {
        let md = "```bash\nnpm install\n```\n\nInstall the CLI first.";
        assert_eq!(extract_summary(md, 200), "Install the CLI first.");
    }

    #[test]
    fn test_inline_code_removed_and_links_keep_text() {
        let md = "Create `caldera.config.js` and read the [installation guide](installation).";
        assert_eq!(
            extract_summary(md, 200),
            "Create  and read the installation guide."
        );
    }

    #[test]
    fn test_images_removed() {
        let md = "![diagram](arch.png) The architecture at a glance.";
        assert_eq!(extract_summary(md, 200), "The architecture at a glance.");
    }

    #[test]
    fn test_soft_breaks_become_spaces() {
        assert_eq!(extract_summary("line one\nline two", 200), "line one line two");
    }

    #[test]
    fn test_truncation_adds_ellipsis() {
        let md = "word ".repeat(100);
        let summary = extract_summary(&md, 20);
        assert!(summary.ends_with("..."));
        assert!(summary.chars().count() <= 23);
    }

    #[test]
    fn test_short_text_not_truncated() {
        assert_eq!(extract_summary("Short.", 20), "Short.");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(extract_summary("", 200), "");
        assert_eq!(extract_summary("# Only a heading", 200), "");
    }
}
