use std::str::Lines;
use std::sync::LazyLock;

use pulldown_cmark::{Event, Options, Parser};
use regex::Regex;

use crate::db::models::TocEntry;
use crate::rendering::slug::slugify;

/// ATX heading on a single line: 1-6 `#`, whitespace, text.
static HEADING_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(#{1,6})\s+(.+)$").expect("heading regex is valid"));

/// Trailing attribute block: `## Title {#anchor .class key=value}`.
static ATTRIBUTE_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.*?)\s*\{([^{}<>\\]*)\}$").expect("attribute block regex is valid"));

/// Shallowest and deepest heading levels listed in a table of contents.
/// Level 1 is the page title.
pub const TOC_MIN_LEVEL: u8 = 2;
pub const TOC_MAX_LEVEL: u8 = 4;

/// A heading found in Markdown source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    /// Plain text as displayed: entities decoded, inline markup removed.
    pub title: String,
    /// Anchor id: the `#anchor` of an attribute block if present, otherwise
    /// `slugify(title)`.
    pub slug: String,
    pub level: u8,
}

impl From<Heading> for TocEntry {
    fn from(heading: Heading) -> Self {
        TocEntry {
            title: heading.title,
            slug: heading.slug,
            level: Some(heading.level),
        }
    }
}

/// Lazy iterator over the headings of a Markdown document.
///
/// A clone continues from the same position; call [`headings`] again to scan
/// from the top.
#[derive(Debug, Clone)]
pub struct Headings<'a> {
    lines: Lines<'a>,
    /// Marker of the code fence we are inside, e.g. "```" or "~~~~".
    open_fence: Option<&'a str>,
}

/// Scan `markdown` for line-anchored ATX headings.
///
/// Lines inside fenced code blocks are skipped.
pub fn headings(markdown: &str) -> Headings<'_> {
    Headings {
        lines: markdown.lines(),
        open_fence: None,
    }
}

impl<'a> Iterator for Headings<'a> {
    type Item = Heading;

    fn next(&mut self) -> Option<Heading> {
        for line in self.lines.by_ref() {
            if let Some(marker) = fence_marker(line) {
                match self.open_fence {
                    None => self.open_fence = Some(marker),
                    Some(open) if closes_fence(open, marker, line) => self.open_fence = None,
                    Some(_) => {}
                }
                continue;
            }
            if self.open_fence.is_some() {
                continue;
            }
            if let Some(heading) = parse_heading(line) {
                return Some(heading);
            }
        }
        None
    }
}

/// Build a table of contents: headings of level 2-4, in document order.
pub fn extract_toc(markdown: &str) -> Vec<TocEntry> {
    headings(markdown)
        .filter(|h| (TOC_MIN_LEVEL..=TOC_MAX_LEVEL).contains(&h.level))
        .map(TocEntry::from)
        .collect()
}

fn parse_heading(line: &str) -> Option<Heading> {
    let caps = HEADING_LINE.captures(line)?;
    let level = caps[1].len() as u8;
    let (text, explicit_id) = split_attribute_block(strip_closing_sequence(caps[2].trim()));

    let title = inline_text(text);
    if title.trim().is_empty() {
        return None;
    }
    let slug = match explicit_id {
        Some(id) => id.to_string(),
        None => slugify(&title),
    };

    Some(Heading { title, slug, level })
}

/// Separate a trailing `{...}` attribute block from the heading text.
///
/// Classes and `key=value` pairs are dropped; the last `#id` token, if any,
/// is returned as the explicit anchor.
fn split_attribute_block(text: &str) -> (&str, Option<&str>) {
    let Some(caps) = ATTRIBUTE_BLOCK.captures(text) else {
        return (text, None);
    };
    let title = caps.get(1).map_or("", |m| m.as_str());
    let id = caps.get(2).and_then(|block| {
        block
            .as_str()
            .split_whitespace()
            .filter_map(|token| token.strip_prefix('#'))
            .filter(|id| !id.is_empty())
            .last()
    });
    (title, id)
}

/// Heading source reduced to the text a reader sees.
fn inline_text(source: &str) -> String {
    // Parsed as a heading so `1. Intro` or `- item` stay inline text
    let heading = format!("# {source}");
    let options = Options::ENABLE_STRIKETHROUGH | Options::ENABLE_SMART_PUNCTUATION;

    Parser::new_ext(&heading, options).fold(String::new(), |mut text, event| {
        match event {
            Event::Text(chunk) | Event::Code(chunk) | Event::InlineHtml(chunk) => {
                text.push_str(&chunk)
            }
            Event::SoftBreak | Event::HardBreak => text.push(' '),
            _ => {}
        }
        text
    })
}

/// Drop an optional closing `#` run: `## Title ##` → `Title`.
fn strip_closing_sequence(text: &str) -> &str {
    let without_hashes = text.trim_end_matches('#');
    if without_hashes.len() == text.len() {
        return text;
    }
    if without_hashes.is_empty() || without_hashes.ends_with(char::is_whitespace) {
        without_hashes.trim_end()
    } else {
        // `C#` is text, not a closing sequence
        text
    }
}

/// The fence marker (run of ``` ` ``` or `~`, at least three) opening `line`,
/// allowing up to three spaces of indentation.
fn fence_marker(line: &str) -> Option<&str> {
    let indent = line.len() - line.trim_start_matches(' ').len();
    if indent > 3 {
        return None;
    }
    let rest = &line[indent..];
    let fence_char = rest.chars().next().filter(|c| *c == '`' || *c == '~')?;
    let run = rest.len() - rest.trim_start_matches(fence_char).len();
    (run >= 3).then(|| &rest[..run])
}

/// A closing fence uses the same character, is at least as long as the
/// opening one and carries no info string.
fn closes_fence(open: &str, marker: &str, line: &str) -> bool {
    marker.starts_with(&open[..1]) && marker.len() >= open.len() && line.trim().len() == marker.len()
}
