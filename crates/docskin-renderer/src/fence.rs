//! Fence info string parsing.
//!
//! The text after an opening fence carries a language token and an
//! optional metadata string, e.g. `rust title="src/main.rs" {1,3}`.
//!
//! The first whitespace-separated token is the language tag; everything
//! after it is the metadata string, whose semantics (title, highlight
//! range) belong to `docskin-highlight`.

/// Split a fence info string into `(language, metastring)`.
///
/// Both parts are `None` when absent. An info string that starts with a
/// brace (```` ```{1,2} ````) is all metadata and carries no language.
#[must_use]
pub fn parse_fence_info(info: &str) -> (Option<&str>, Option<&str>) {
    let info = info.trim();
    if info.is_empty() {
        return (None, None);
    }
    if info.starts_with('{') {
        return (None, Some(info));
    }

    match info.split_once(char::is_whitespace) {
        Some((language, rest)) => {
            let rest = rest.trim();
            (Some(language), (!rest.is_empty()).then_some(rest))
        }
        None => (Some(info), None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_only() {
        assert_eq!(parse_fence_info("rust"), (Some("rust"), None));
    }

    #[test]
    fn test_language_with_range() {
        assert_eq!(parse_fence_info("js {1,3-5}"), (Some("js"), Some("{1,3-5}")));
    }

    #[test]
    fn test_language_with_title_and_range() {
        assert_eq!(
            parse_fence_info(r#"python title="demo.py" {2}"#),
            (Some("python"), Some(r#"title="demo.py" {2}"#))
        );
    }

    #[test]
    fn test_empty() {
        assert_eq!(parse_fence_info(""), (None, None));
        assert_eq!(parse_fence_info("   "), (None, None));
    }

    #[test]
    fn test_metadata_without_language() {
        assert_eq!(parse_fence_info("{1,2}"), (None, Some("{1,2}")));
    }

    #[test]
    fn test_surrounding_whitespace_trimmed() {
        assert_eq!(parse_fence_info("  rust  {1}  "), (Some("rust"), Some("{1}")));
    }
}
