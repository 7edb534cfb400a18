//! Markdown to HTML rendering.
//!
//! Conversion is delegated to pulldown-cmark. The only thing added on top is a slug `id` on
//! every heading, so links of the form `#token-handling` can scroll to a section.

use hub_config::{Preferences, Theme};
use pulldown_cmark::{CowStr, Event, HeadingLevel, Options, Parser, Tag, TagEnd, html};
use serde::Serialize;

use crate::Slugifier;

/// A heading found while rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeadingAnchor {
    /// Heading level, 1 through 6.
    pub level: u8,
    /// Plain heading text.
    pub text: String,
    /// The `id` attribute assigned to the heading.
    pub slug: String,
}

/// Rendered HTML and the headings it contains.
#[derive(Debug, Clone)]
pub struct RenderedPage {
    /// HTML fragment.
    pub html: String,
    /// Headings in document order.
    pub headings: Vec<HeadingAnchor>,
}

/// Markdown extensions enabled for topic content.
fn options() -> Options {
    Options::ENABLE_TABLES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS
        | Options::ENABLE_HEADING_ATTRIBUTES
}

/// Renders markdown to an HTML fragment with anchored headings.
pub fn render_html(markdown: &str) -> RenderedPage {
    let mut slugifier = Slugifier::new();
    let mut headings = Vec::new();
    let mut events: Vec<Event<'_>> = Vec::new();
    // Events of the heading currently being read: its start tag and inner events.
    let mut pending: Option<(Tag<'_>, Vec<Event<'_>>)> = None;

    for event in Parser::new_ext(markdown, options()) {
        match event {
            Event::Start(tag @ Tag::Heading { .. }) => pending = Some((tag, Vec::new())),
            Event::End(TagEnd::Heading(level)) => {
                let Some((tag, inner)) = pending.take() else {
                    continue;
                };
                let text = plain_text(&inner);
                let Tag::Heading {
                    id, classes, attrs, ..
                } = tag
                else {
                    continue;
                };
                // An explicit `{#id}` wins over the generated slug.
                let slug = id.map_or_else(|| slugifier.slugify(&text), |id| id.to_string());
                headings.push(HeadingAnchor {
                    level: level_number(level),
                    text,
                    slug: slug.clone(),
                });
                events.push(Event::Start(Tag::Heading {
                    level,
                    id: Some(CowStr::from(slug)),
                    classes,
                    attrs,
                }));
                events.extend(inner);
                events.push(Event::End(TagEnd::Heading(level)));
            }
            other => match pending.as_mut() {
                Some((_, inner)) => inner.push(other),
                None => events.push(other),
            },
        }
    }

    let mut out = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut out, events.into_iter());

    RenderedPage {
        html: out,
        headings,
    }
}

/// Wraps a rendered fragment in a standalone page styled by the user's preferences.
pub fn page_html(title: &str, body: &str, prefs: &Preferences) -> String {
    let mut classes = vec![prefs.font_size.css_class()];
    if prefs.theme == Theme::Light {
        classes.push("light-theme");
    }

    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{title}</title>\n</head>\n<body class=\"{classes}\">\n\
         <main id=\"markdown-content\">\n{body}</main>\n</body>\n</html>\n",
        title = escape_html(title),
        classes = classes.join(" "),
    )
}

/// Concatenates the text carried by heading events.
fn plain_text(events: &[Event<'_>]) -> String {
    let mut text = String::new();
    for event in events {
        if let Event::Text(t) | Event::Code(t) = event {
            text.push_str(t);
        }
    }
    text
}

/// Converts a heading level to its number.
fn level_number(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}

/// Escapes text for use inside HTML element content.
fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
