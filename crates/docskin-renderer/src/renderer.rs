//! Markdown document rendering.
//!
//! [`DocRenderer`] walks pulldown-cmark events, intercepting two things:
//! fenced code blocks (rendered through [`CodeBlockRenderer`] so highlight
//! directives apply) and headings (anchor ids, first-H1 title extraction,
//! table of contents). Everything else passes through pulldown-cmark's
//! HTML writer untouched.

use pulldown_cmark::html::push_html;
use pulldown_cmark::{CodeBlockKind, Event, HeadingLevel, Options, Parser, Tag, TagEnd};

use crate::code_block::CodeBlockRenderer;
use crate::fence::parse_fence_info;
use crate::state::{CodeBlockState, HeadingState, TocEntry};

/// Result of rendering a markdown document.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RenderResult {
    /// Rendered HTML fragment.
    pub html: String,
    /// Title extracted from the first H1 heading, if any.
    pub title: Option<String>,
    /// Table of contents entries (the title H1 excluded).
    pub toc: Vec<TocEntry>,
}

/// Markdown renderer with directive-aware code blocks.
///
/// # Example
///
/// ```
/// use docskin_renderer::DocRenderer;
///
/// let result = DocRenderer::new().render("# Hi\n\n## Section\n\nText");
/// assert_eq!(result.title.as_deref(), Some("Hi"));
/// assert_eq!(result.toc.len(), 1);
/// assert!(result.html.contains(r#"<h2 id="section">"#));
/// ```
pub struct DocRenderer {
    code_blocks: CodeBlockRenderer,
    gfm: bool,
}

impl Default for DocRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl DocRenderer {
    /// Create a renderer with GFM enabled.
    #[must_use]
    pub fn new() -> Self {
        Self {
            code_blocks: CodeBlockRenderer::new(),
            gfm: true,
        }
    }

    /// Replace the code block renderer.
    #[must_use]
    pub fn with_code_block_renderer(mut self, code_blocks: CodeBlockRenderer) -> Self {
        self.code_blocks = code_blocks;
        self
    }

    /// Enable or disable GitHub Flavored Markdown extensions.
    #[must_use]
    pub fn with_gfm(mut self, enabled: bool) -> Self {
        self.gfm = enabled;
        self
    }

    fn parser_options(&self) -> Options {
        if self.gfm {
            Options::ENABLE_TABLES
                | Options::ENABLE_STRIKETHROUGH
                | Options::ENABLE_TASKLISTS
                | Options::ENABLE_GFM
        } else {
            Options::empty()
        }
    }

    /// Render a markdown document.
    #[must_use]
    pub fn render(&self, markdown: &str) -> RenderResult {
        let parser = Parser::new_ext(markdown, self.parser_options());

        let mut events: Vec<Event> = Vec::new();
        let mut heading_events: Vec<Event> = Vec::new();
        let mut code = CodeBlockState::default();
        let mut heading = HeadingState::default();

        for event in parser {
            match event {
                Event::Start(Tag::CodeBlock(ref kind)) => {
                    let (language, metastring) = match kind {
                        CodeBlockKind::Fenced(info) => parse_fence_info(info),
                        CodeBlockKind::Indented => (None, None),
                    };
                    code.start(language, metastring);
                }
                Event::End(TagEnd::CodeBlock) => {
                    let (language, metastring, content) = code.end();
                    let html = self.code_blocks.render(
                        language.as_deref(),
                        metastring.as_deref(),
                        &content,
                    );
                    events.push(Event::Html(html.into()));
                }
                Event::Text(ref text) if code.is_active() => code.push_str(text),
                Event::Start(Tag::Heading { level, .. }) => {
                    heading.start(level_to_num(level));
                    heading_events.clear();
                }
                Event::End(TagEnd::Heading(level)) => {
                    let (level, id) = heading.finish(level_to_num(level));
                    events.push(Event::Html(format!(r#"<h{level} id="{id}">"#).into()));
                    events.append(&mut heading_events);
                    events.push(Event::Html(format!("</h{level}>").into()));
                }
                Event::Text(ref text) | Event::Code(ref text) if heading.is_active() => {
                    heading.push_text(text);
                    heading_events.push(event);
                }
                other if heading.is_active() => heading_events.push(other),
                other => events.push(other),
            }
        }

        let mut html = String::with_capacity(markdown.len() * 2);
        push_html(&mut html, events.into_iter());

        RenderResult {
            html,
            title: heading.take_title(),
            toc: heading.take_toc(),
        }
    }
}

fn level_to_num(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}
