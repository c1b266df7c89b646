use std::ops::Range;

use html_escape::{encode_double_quoted_attribute, encode_text};
use pulldown_cmark::{html, CodeBlockKind, CowStr, Event, LinkType, Options, Parser, Tag, TagEnd};

use crate::rendering::highlight::highlight_code;
use crate::rendering::slug::slugify;
use crate::rendering::toc::headings;

type Spanned<'a> = (Event<'a>, Range<usize>);

/// Elements whose whole subtree is consumed before rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Element {
    Heading,
    CodeBlock,
    Image,
    HtmlBlock,
}

impl Element {
    fn opens(self, tag: &Tag<'_>) -> bool {
        matches!(
            (self, tag),
            (Element::Heading, Tag::Heading { .. })
                | (Element::CodeBlock, Tag::CodeBlock(_))
                | (Element::Image, Tag::Image { .. })
                | (Element::HtmlBlock, Tag::HtmlBlock)
        )
    }

    fn closes(self, end: &TagEnd) -> bool {
        matches!(
            (self, end),
            (Element::Heading, TagEnd::Heading(_))
                | (Element::CodeBlock, TagEnd::CodeBlock)
                | (Element::Image, TagEnd::Image)
                | (Element::HtmlBlock, TagEnd::HtmlBlock)
        )
    }
}

/// Render a raw Markdown string to HTML for the documentation page.
///
/// Supports GitHub Flavored Markdown (tables, footnotes, strikethrough, task
/// lists) plus `{#anchor}` heading attributes. On top of the plain CommonMark
/// output:
///
/// - every heading carries an `id` matching its table-of-contents slug
/// - fenced code is syntax highlighted and wrapped with a copy button
/// - links leaving the site open in a new tab
/// - images load lazily
/// - raw HTML blocks are sanitized, inline HTML is shown as text
pub fn render_markdown(raw: &str) -> String {
    let options = Options::ENABLE_TABLES
        | Options::ENABLE_FOOTNOTES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS
        | Options::ENABLE_SMART_PUNCTUATION
        | Options::ENABLE_HEADING_ATTRIBUTES;

    let parser = Parser::new_ext(raw, options).into_offset_iter();
    let mut events = Vec::new();
    transform(raw, parser, &mut events);

    let mut html_output = String::new();
    html::push_html(&mut html_output, events.into_iter());
    html_output
}

fn transform<'a, I>(source: &'a str, mut events: I, out: &mut Vec<Event<'a>>)
where
    I: Iterator<Item = Spanned<'a>>,
{
    while let Some((event, range)) = events.next() {
        match event {
            Event::Start(Tag::Heading {
                level,
                id,
                classes,
                attrs,
            }) => {
                let inner = collect_subtree(&mut events, Element::Heading);
                let anchor = match id {
                    Some(id) => id,
                    None => CowStr::from(heading_anchor(&source[range], &inner)),
                };
                out.push(Event::Start(Tag::Heading {
                    level,
                    id: Some(anchor),
                    classes,
                    attrs,
                }));
                transform(source, inner.into_iter(), out);
                out.push(Event::End(TagEnd::Heading(level)));
            }
            Event::Start(Tag::CodeBlock(kind)) => {
                let inner = collect_subtree(&mut events, Element::CodeBlock);
                let code: String = inner
                    .iter()
                    .filter_map(|(event, _)| match event {
                        Event::Text(text) => Some(text.as_ref()),
                        _ => None,
                    })
                    .collect();
                let language = match &kind {
                    CodeBlockKind::Fenced(info) => info.split_whitespace().next(),
                    CodeBlockKind::Indented => None,
                };
                out.push(Event::Html(render_code_block(&code, language).into()));
            }
            Event::Start(Tag::Image {
                dest_url, title, ..
            }) => {
                let inner = collect_subtree(&mut events, Element::Image);
                out.push(Event::Html(
                    render_image(&dest_url, &title, &plain_text(&inner)).into(),
                ));
            }
            Event::Start(Tag::HtmlBlock) => {
                let inner = collect_subtree(&mut events, Element::HtmlBlock);
                let raw_html: String = inner
                    .iter()
                    .filter_map(|(event, _)| match event {
                        Event::Html(html) => Some(html.as_ref()),
                        _ => None,
                    })
                    .collect();
                out.push(Event::Html(ammonia::clean(&raw_html).into()));
            }
            Event::Start(Tag::Link {
                link_type,
                dest_url,
                title,
                ..
            }) => {
                out.push(Event::Html(link_open_tag(link_type, &dest_url, &title).into()));
            }
            Event::End(TagEnd::Link) => out.push(Event::Html("</a>".into())),
            // Escaped: pushed as text, not markup
            Event::InlineHtml(html) => out.push(Event::Text(html)),
            other => out.push(other),
        }
    }
}

/// Take events up to the end tag matching an already consumed `element` start.
fn collect_subtree<'a, I>(events: &mut I, element: Element) -> Vec<Spanned<'a>>
where
    I: Iterator<Item = Spanned<'a>>,
{
    let mut depth = 0usize;
    let mut inner = Vec::new();
    for (event, range) in events.by_ref() {
        match &event {
            Event::Start(tag) if element.opens(tag) => depth += 1,
            Event::End(end) if element.closes(end) => {
                if depth == 0 {
                    break;
                }
                depth -= 1;
            }
            _ => {}
        }
        inner.push((event, range));
    }
    inner
}

/// Anchor for a heading without an explicit id.
///
/// ATX headings reuse the heading extractor on the source line so the anchor
/// always matches the table of contents. Setext headings fall back to the
/// rendered text.
fn heading_anchor(source: &str, inner: &[Spanned<'_>]) -> String {
    headings(source)
        .next()
        .map(|heading| heading.slug)
        .unwrap_or_else(|| slugify(&plain_text(inner)))
}

fn plain_text(events: &[Spanned<'_>]) -> String {
    events
        .iter()
        .filter_map(|(event, _)| match event {
            Event::Text(text) | Event::Code(text) => Some(text.as_ref()),
            _ => None,
        })
        .collect()
}

fn render_code_block(code: &str, language: Option<&str>) -> String {
    let body = language
        .and_then(|lang| highlight_code(code, lang))
        .unwrap_or_else(|| encode_text(code).into_owned());
    let class_attr = language
        .map(|lang| format!(" class=\"language-{}\"", encode_double_quoted_attribute(lang)))
        .unwrap_or_default();

    format!(
        "<div class=\"code-block\"><pre class=\"highlight\"><code{class_attr}>{body}</code></pre>\
         <button type=\"button\" class=\"copy-button\" title=\"Copy code\" aria-label=\"Copy code\">Copy</button></div>\n"
    )
}

fn render_image(src: &str, title: &str, alt: &str) -> String {
    let mut tag = format!(
        "<img src=\"{}\" alt=\"{}\"",
        encode_double_quoted_attribute(src),
        encode_double_quoted_attribute(alt)
    );
    if !title.is_empty() {
        tag.push_str(&format!(" title=\"{}\"", encode_double_quoted_attribute(title)));
    }
    tag.push_str(" loading=\"lazy\" />");
    tag
}

fn link_open_tag(link_type: LinkType, dest_url: &str, title: &str) -> String {
    let href = if link_type == LinkType::Email {
        format!("mailto:{dest_url}")
    } else {
        dest_url.to_string()
    };

    let mut tag = format!("<a href=\"{}\"", encode_double_quoted_attribute(&href));
    if !title.is_empty() {
        tag.push_str(&format!(" title=\"{}\"", encode_double_quoted_attribute(title)));
    }
    if !is_same_site(&href) {
        tag.push_str(" target=\"_blank\" rel=\"noopener noreferrer\"");
    }
    tag.push('>');
    tag
}

/// Root-relative paths and in-page fragments stay in the current tab.
fn is_same_site(href: &str) -> bool {
    href.starts_with('/') || href.starts_with('#')
}
