//! Shared state for document rendering.
//!
//! Tracks context while walking pulldown-cmark events: code block
//! buffering (content arrives as multiple text fragments) and heading
//! collection for the table of contents.

use std::collections::HashMap;

/// State for buffering code block content between fence events.
#[derive(Default)]
pub(crate) struct CodeBlockState {
    active: bool,
    language: Option<String>,
    metastring: Option<String>,
    buffer: String,
}

impl CodeBlockState {
    /// Enter a code block.
    pub(crate) fn start(&mut self, language: Option<&str>, metastring: Option<&str>) {
        self.active = true;
        self.language = language.map(ToOwned::to_owned);
        self.metastring = metastring.map(ToOwned::to_owned);
        self.buffer.clear();
    }

    /// Leave the code block, returning `(language, metastring, content)`.
    pub(crate) fn end(&mut self) -> (Option<String>, Option<String>, String) {
        self.active = false;
        (
            self.language.take(),
            self.metastring.take(),
            std::mem::take(&mut self.buffer),
        )
    }

    pub(crate) fn is_active(&self) -> bool {
        self.active
    }

    /// Append a content fragment.
    pub(crate) fn push_str(&mut self, fragment: &str) {
        self.buffer.push_str(fragment);
    }
}

/// Table of contents entry.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TocEntry {
    /// Heading level (1-6).
    pub level: u8,
    /// Heading text, stripped of inline markup.
    pub title: String,
    /// Anchor ID for linking.
    pub id: String,
}

/// State for heading collection: anchor ids, table of contents, and
/// first-H1 title extraction.
#[derive(Default)]
pub(crate) struct HeadingState {
    current: Option<u8>,
    text: String,
    title: Option<String>,
    toc: Vec<TocEntry>,
    id_counts: HashMap<String, usize>,
}

impl HeadingState {
    /// Enter a heading.
    pub(crate) fn start(&mut self, level: u8) {
        self.current = Some(level);
        self.text.clear();
    }

    pub(crate) fn is_active(&self) -> bool {
        self.current.is_some()
    }

    /// Append plain text from the heading's inline content.
    pub(crate) fn push_text(&mut self, text: &str) {
        self.text.push_str(text);
    }

    /// Leave the heading, returning `(level, anchor id)`.
    ///
    /// The first H1 becomes the document title and is left out of the
    /// table of contents; every other heading gets a ToC entry.
    pub(crate) fn finish(&mut self, fallback_level: u8) -> (u8, String) {
        let level = self.current.take().unwrap_or(fallback_level);
        let text = std::mem::take(&mut self.text).trim().to_owned();
        let id = self.generate_id(&text);

        if level == 1 && self.title.is_none() {
            self.title = Some(text);
        } else {
            self.toc.push(TocEntry {
                level,
                title: text,
                id: id.clone(),
            });
        }

        (level, id)
    }

    /// Generate a unique anchor id for a heading.
    fn generate_id(&mut self, text: &str) -> String {
        let base = slugify(text);
        let count = self.id_counts.entry(base.clone()).or_default();
        let id = match *count {
            0 => base,
            n => format!("{base}-{n}"),
        };
        *count += 1;
        id
    }

    /// Take the extracted document title.
    pub(crate) fn take_title(&mut self) -> Option<String> {
        self.title.take()
    }

    /// Take the collected table of contents.
    pub(crate) fn take_toc(&mut self) -> Vec<TocEntry> {
        std::mem::take(&mut self.toc)
    }
}

/// Convert heading text to a URL-safe anchor slug.
///
/// Lowercases, collapses whitespace/dashes/underscores to single dashes,
/// and drops every other non-alphanumeric character.
#[must_use]
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_dash = false;

    for c in text.trim().chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c.to_ascii_lowercase());
        } else if c.is_whitespace() || c == '-' || c == '_' {
            pending_dash = true;
        }
    }

    slug
}

/// Escape HTML special characters.
#[must_use]
pub fn escape_html(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
