//! Tokenizer bridge: wraps syntect behind a single [`Highlighter`] type.
//!
//! Syntax and theme sets are expensive to construct, so they are loaded
//! once per process and shared by every code block. Syntect types never
//! leak out of this module; callers receive neutral [`StyledLine`]
//! values.

use std::sync::LazyLock;

use syntect::easy::HighlightLines;
use syntect::highlighting::{FontStyle, Style, Theme, ThemeSet};
use syntect::parsing::SyntaxSet;
use syntect::util::LinesWithEndings;

use crate::line::{Rgb, StyledLine, StyledToken};

static SYNTAX_SET: LazyLock<SyntaxSet> = LazyLock::new(SyntaxSet::load_defaults_newlines);
static THEME_SET: LazyLock<ThemeSet> = LazyLock::new(ThemeSet::load_defaults);

/// Theme used when none is configured.
const DEFAULT_THEME: &str = "base16-ocean.dark";

/// Blocks larger than this skip tokenization; syntect's regex engine can
/// exhaust memory on pathological inputs.
const MAX_HIGHLIGHT_BYTES: usize = 512 * 1024;

/// Tokenizer configuration error.
#[derive(Debug, thiserror::Error)]
pub enum HighlightError {
    /// The requested theme is not in the built-in theme set.
    #[error("unknown theme: {0}")]
    UnknownTheme(String),
}

/// Syntax tokenizer for code blocks.
#[derive(Debug)]
pub struct Highlighter {
    theme: &'static Theme,
}

impl Highlighter {
    /// Create a tokenizer with the default theme.
    #[must_use]
    pub fn new() -> Self {
        Self {
            theme: &THEME_SET.themes[DEFAULT_THEME],
        }
    }

    /// Create a tokenizer with a named built-in theme.
    ///
    /// # Errors
    ///
    /// Returns [`HighlightError::UnknownTheme`] when no built-in theme has
    /// this name.
    pub fn with_theme(name: &str) -> Result<Self, HighlightError> {
        let theme = THEME_SET
            .themes
            .get(name)
            .ok_or_else(|| HighlightError::UnknownTheme(name.to_owned()))?;
        Ok(Self { theme })
    }

    /// Tokenize `code`, returning one [`StyledLine`] per source line.
    ///
    /// The language is matched by token (`"rust"`, `"py"`, `"js"`);
    /// unknown or absent languages fall back to plain text. A line that
    /// fails to tokenize degrades to a single unstyled token rather than
    /// aborting the block.
    #[must_use]
    pub fn highlight(&self, code: &str, language: Option<&str>) -> Vec<StyledLine> {
        if code.len() > MAX_HIGHLIGHT_BYTES {
            tracing::debug!(
                bytes = code.len(),
                "code block too large to tokenize, emitting plain lines"
            );
            return code.lines().map(StyledLine::plain).collect();
        }

        let syntax = language
            .and_then(|lang| SYNTAX_SET.find_syntax_by_token(lang))
            .unwrap_or_else(|| {
                if let Some(lang) = language {
                    tracing::debug!(language = lang, "no syntax definition, using plain text");
                }
                SYNTAX_SET.find_syntax_plain_text()
            });

        let mut highlighter = HighlightLines::new(syntax, self.theme);
        let mut lines = Vec::new();

        for line in LinesWithEndings::from(code) {
            let Ok(ranges) = highlighter.highlight_line(line, &SYNTAX_SET) else {
                lines.push(StyledLine::plain(line.trim_end_matches(['\r', '\n'])));
                continue;
            };

            let tokens = ranges
                .iter()
                .map(|&(style, text)| to_token(text.trim_end_matches(['\r', '\n']), style))
                .filter(|token| !token.text.is_empty())
                .collect();

            lines.push(StyledLine { tokens });
        }

        lines
    }
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::new()
    }
}

/// Convert a syntect styled segment into a neutral token.
fn to_token(text: &str, style: Style) -> StyledToken {
    StyledToken {
        text: text.to_owned(),
        color: Some(Rgb {
            r: style.foreground.r,
            g: style.foreground.g,
            b: style.foreground.b,
        }),
        bold: style.font_style.contains(FontStyle::BOLD),
        italic: style.font_style.contains(FontStyle::ITALIC),
    }
}
