//! Directive-aware code block and document rendering.
//!
//! This crate turns markdown documents into HTML with syntax-highlighted
//! code blocks. Code blocks run through the `docskin-highlight` resolver
//! first, so metadata ranges (`{1,3-5}`) and directive comments
//! (`// highlight-next-line`) flag lines for emphasis; the cleaned code is
//! then tokenized with syntect and emitted line by line, flagged lines
//! carrying a distinguishing class.
//!
//! # Architecture
//!
//! - [`Highlighter`]: leaf bridge around syntect; the rest of the crate
//!   only sees neutral [`StyledLine`] values.
//! - [`CodeBlockRenderer`]: one code block → HTML (title bar, per-line
//!   spans, copy button).
//! - [`DocRenderer`]: whole document → [`RenderResult`] (HTML, extracted
//!   title, table of contents).
//!
//! # Example
//!
//! ```
//! use docskin_renderer::DocRenderer;
//!
//! let markdown = "# Title\n\n```js\n// highlight-next-line\nconst x = 1;\n```\n";
//! let result = DocRenderer::new().render(markdown);
//!
//! assert_eq!(result.title.as_deref(), Some("Title"));
//! assert!(result.html.contains("code-line--highlighted"));
//! ```

mod code_block;
mod fence;
mod highlighter;
mod line;
mod renderer;
mod state;

pub use code_block::CodeBlockRenderer;
pub use fence::parse_fence_info;
pub use highlighter::{HighlightError, Highlighter};
pub use line::{Rgb, StyledLine, StyledToken};
pub use renderer::{DocRenderer, RenderResult};
pub use state::{TocEntry, escape_html, slugify};
