//! Code block title extraction from metadata strings.
//!
//! Authors attach a display title to a fenced block via the metadata
//! string: ```` ```rust title="src/main.rs" ````. The title is rendered as
//! a header bar above the code; it has no effect on highlighting.

use std::sync::LazyLock;

use regex::Regex;

/// Matches `title="..."` or `title='...'` anywhere in a metadata string.
static TITLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"title=(?:"([^"]*)"|'([^']*)')"#).unwrap());

/// Extract the `title` annotation from a metadata string.
///
/// Both double- and single-quoted forms are accepted; an unquoted value
/// yields `None`.
///
/// # Example
///
/// ```
/// use docskin_highlight::parse_code_block_title;
///
/// assert_eq!(
///     parse_code_block_title(r#"title="src/main.rs" {1,2}"#).as_deref(),
///     Some("src/main.rs")
/// );
/// assert_eq!(parse_code_block_title("{1,2}"), None);
/// ```
#[must_use]
pub fn parse_code_block_title(metastring: &str) -> Option<String> {
    let caps = TITLE_RE.captures(metastring)?;
    caps.get(1)
        .or_else(|| caps.get(2))
        .map(|m| m.as_str().to_owned())
}
