//! Highlight-directive resolution for fenced code blocks.
//!
//! Documentation authors mark lines for visual emphasis in two ways: an
//! explicit range in the code block's metadata string (`{3,5-7}`), or
//! directive comments embedded in the code itself:
//!
//! ```text
//! function greet() {
//!   // highlight-next-line
//!   return "hello";
//! }
//! ```
//!
//! [`DirectiveResolver`] turns `(language, metastring, raw text)` into the
//! cleaned source (directive lines removed) plus the set of 1-based line
//! numbers to highlight. The two mechanisms are mutually exclusive per
//! block: an explicit metadata range suppresses directive scanning
//! entirely.
//!
//! Tokenization and HTML output are out of scope here; see the
//! `docskin-renderer` crate for the rendering side.
//!
//! # Example
//!
//! ```
//! use docskin_highlight::DirectiveResolver;
//!
//! let resolver = DirectiveResolver::new();
//! let resolved = resolver.resolve(
//!     Some("js"),
//!     None,
//!     "a\n// highlight-next-line\nb\nc\n",
//! );
//!
//! assert_eq!(resolved.code, "a\nb\nc");
//! assert_eq!(resolved.highlights, [2].into_iter().collect());
//! ```

mod comment;
mod metastring;
mod range;
mod resolver;

pub use metastring::parse_code_block_title;
pub use range::parse_metastring_range;
pub use resolver::{DirectiveResolver, Resolved};
