//! Neutral styled-line types produced by the tokenizer bridge.
//!
//! These are the "line-group" units the renderer zips against the
//! resolved highlight set. Keeping them free of syntect types means the
//! tokenizer can be swapped without touching the rest of the crate.

/// An RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Format as a CSS hex color (`#rrggbb`).
    #[must_use]
    pub fn to_css(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// A single styled token within a line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StyledToken {
    /// Token text, without line endings.
    pub text: String,
    /// Foreground color; `None` for unstyled text.
    pub color: Option<Rgb>,
    pub bold: bool,
    pub italic: bool,
}

impl StyledToken {
    /// An unstyled token.
    #[must_use]
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            color: None,
            bold: false,
            italic: false,
        }
    }
}

/// One source line as an ordered sequence of styled tokens.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StyledLine {
    pub tokens: Vec<StyledToken>,
}

impl StyledLine {
    /// A line containing a single unstyled token.
    ///
    /// Empty text yields a line with no tokens at all.
    #[must_use]
    pub fn plain(text: &str) -> Self {
        if text.is_empty() {
            Self::default()
        } else {
            Self {
                tokens: vec![StyledToken::plain(text)],
            }
        }
    }

    /// Concatenated text of all tokens.
    #[must_use]
    pub fn text(&self) -> String {
        self.tokens.iter().map(|t| t.text.as_str()).collect()
    }
}
