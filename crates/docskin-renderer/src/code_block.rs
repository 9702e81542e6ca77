//! Directive-aware code block rendering.
//!
//! Runs the highlight-directive resolver, tokenizes the cleaned code, and
//! emits the code block container: optional title bar, one span per
//! source line (highlighted lines flagged with a modifier class), and a
//! copy button whose `data-copy-text` attribute carries the exact cleaned
//! code. Wiring the button to the clipboard is the embedding page's
//! concern.

use std::fmt::Write;

use docskin_highlight::{DirectiveResolver, parse_code_block_title};

use crate::highlighter::Highlighter;
use crate::line::{StyledLine, StyledToken};
use crate::state::escape_html;

/// Renders fenced code blocks to HTML.
///
/// # Example
///
/// ```
/// use docskin_renderer::CodeBlockRenderer;
///
/// let renderer = CodeBlockRenderer::new();
/// let html = renderer.render(Some("js"), None, "// highlight-next-line\nconst x = 1;\n");
///
/// assert!(html.contains("code-line--highlighted"));
/// assert!(!html.contains("highlight-next-line"));
/// ```
#[derive(Default)]
pub struct CodeBlockRenderer {
    resolver: DirectiveResolver,
    highlighter: Highlighter,
}

impl CodeBlockRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a custom resolver (e.g. one with a default language).
    #[must_use]
    pub fn with_resolver(mut self, resolver: DirectiveResolver) -> Self {
        self.resolver = resolver;
        self
    }

    /// Use a custom tokenizer (e.g. one with a named theme).
    #[must_use]
    pub fn with_highlighter(mut self, highlighter: Highlighter) -> Self {
        self.highlighter = highlighter;
        self
    }

    /// Render one code block to HTML.
    #[must_use]
    pub fn render(
        &self,
        language: Option<&str>,
        metastring: Option<&str>,
        raw_text: &str,
    ) -> String {
        // The default language applies to tokenization as well as
        // directive scanning.
        let language = language.or_else(|| self.resolver.default_language());
        let resolved = self.resolver.resolve(language, metastring, raw_text);
        let title = metastring.and_then(parse_code_block_title);
        let lines = self.highlighter.highlight(&resolved.code, language);

        let mut out = String::with_capacity(resolved.code.len() * 3);
        out.push_str(r#"<div class="code-block">"#);

        if let Some(title) = &title {
            write!(
                out,
                r#"<div class="code-block-title">{}</div>"#,
                escape_html(title)
            )
            .unwrap();
        }

        match language {
            Some(language) => write!(
                out,
                r#"<pre class="code-block-pre"><code class="code-block-lines language-{}">"#,
                escape_html(language)
            )
            .unwrap(),
            None => out.push_str(r#"<pre class="code-block-pre"><code class="code-block-lines">"#),
        }

        for (index, line) in lines.iter().enumerate() {
            render_line(line, resolved.highlights.contains(&(index + 1)), &mut out);
        }

        out.push_str("</code></pre>");
        write!(
            out,
            r#"<button type="button" class="copy-button" data-copy-text="{}">Copy</button>"#,
            escape_html(&resolved.code)
        )
        .unwrap();
        out.push_str("</div>");
        out
    }
}

/// Render one line-group, flagged when it is in the highlight set.
fn render_line(line: &StyledLine, highlighted: bool, out: &mut String) {
    let class = if highlighted {
        "code-line code-line--highlighted"
    } else {
        "code-line"
    };
    write!(out, r#"<span class="{class}">"#).unwrap();
    for token in &line.tokens {
        render_token(token, out);
    }
    // Newline inside the span so <pre> keeps line breaks without styling
    out.push('\n');
    out.push_str("</span>");
}

fn render_token(token: &StyledToken, out: &mut String) {
    let mut style = String::new();
    if let Some(color) = token.color {
        write!(style, "color:{}", color.to_css()).unwrap();
    }
    if token.bold {
        if !style.is_empty() {
            style.push(';');
        }
        style.push_str("font-weight:bold");
    }
    if token.italic {
        if !style.is_empty() {
            style.push(';');
        }
        style.push_str("font-style:italic");
    }

    if style.is_empty() {
        write!(out, "<span>{}</span>", escape_html(&token.text)).unwrap();
    } else {
        write!(
            out,
            r#"<span style="{style}">{}</span>"#,
            escape_html(&token.text)
        )
        .unwrap();
    }
}
