//! Directive-comment table and per-language matchers.
//!
//! A fixed set of comment styles describes how a highlight directive is
//! written in each language family (`// highlight-next-line`,
//! `# highlight-start`, `<!-- highlight-end -->`, ...). Matchers are
//! compiled once per language group and shared process-wide.

use std::sync::LazyLock;

use regex::Regex;

/// A highlight directive recognized in a comment line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Directive {
    /// Mark the line immediately following the comment.
    NextLine,
    /// Open a highlighted block.
    BlockStart,
    /// Close a highlighted block.
    BlockEnd,
}

impl Directive {
    fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "highlight-next-line" => Some(Self::NextLine),
            "highlight-start" => Some(Self::BlockStart),
            "highlight-end" => Some(Self::BlockEnd),
            _ => None,
        }
    }
}

/// Comment wrapper for one style, as regex fragments.
///
/// `end` is empty for line comments that run to the end of the line.
struct CommentSyntax {
    start: &'static str,
    end: &'static str,
}

/// `// highlight-next-line`
const JS_LINE: CommentSyntax = CommentSyntax { start: "//", end: "" };
/// `/* highlight-next-line */`
const JS_BLOCK: CommentSyntax = CommentSyntax {
    start: r"/\*",
    end: r"\*/",
};
/// `{/* highlight-next-line */}` (JSX expression comment)
const JSX: CommentSyntax = CommentSyntax {
    start: r"\{\s*/\*",
    end: r"\*/\s*\}",
};
/// `# highlight-next-line`
const HASH: CommentSyntax = CommentSyntax { start: "#", end: "" };
/// `<!-- highlight-next-line -->`
const HTML: CommentSyntax = CommentSyntax {
    start: "<!--",
    end: "-->",
};

const KEYWORDS: &str = "highlight-next-line|highlight-start|highlight-end";

/// Build a matcher accepting any of the given comment styles.
///
/// The opening and closing wrappers of an alternative must both match, and
/// nothing but whitespace may surround the comment: the directive has to
/// be the sole content of its line.
fn directive_regex(styles: &[CommentSyntax]) -> Regex {
    let alternatives = styles
        .iter()
        .map(|style| format!(r"(?:{}\s*({KEYWORDS})\s*{})", style.start, style.end))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"^\s*(?:{alternatives})\s*$")).unwrap()
}

static JS_RE: LazyLock<Regex> = LazyLock::new(|| directive_regex(&[JS_LINE, JS_BLOCK]));
static JSX_RE: LazyLock<Regex> = LazyLock::new(|| directive_regex(&[JS_LINE, JS_BLOCK, JSX]));
static HTML_RE: LazyLock<Regex> = LazyLock::new(|| directive_regex(&[JS_LINE, JS_BLOCK, HTML]));
static HASH_RE: LazyLock<Regex> = LazyLock::new(|| directive_regex(&[HASH]));
static ANY_RE: LazyLock<Regex> =
    LazyLock::new(|| directive_regex(&[JS_LINE, JS_BLOCK, JSX, HASH, HTML]));

/// Select the directive matcher for a language tag.
///
/// Unknown languages get the union of all comment styles so directives in
/// unrecognized blocks keep working.
pub(crate) fn directive_matcher(language: &str) -> &'static Regex {
    match language {
        "js" | "javascript" | "ts" | "typescript" => &JS_RE,
        "jsx" | "tsx" => &JSX_RE,
        "html" => &HTML_RE,
        "python" | "py" => &HASH_RE,
        _ => &ANY_RE,
    }
}

/// Match a source line that consists solely of one directive comment.
pub(crate) fn match_directive(matcher: &Regex, line: &str) -> Option<Directive> {
    let caps = matcher.captures(line)?;
    // One capture group per comment style; exactly one participates.
    caps.iter()
        .skip(1)
        .flatten()
        .next()
        .and_then(|m| Directive::from_keyword(m.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_js_line_comment() {
        let re = directive_matcher("js");
        assert_eq!(
            match_directive(re, "// highlight-next-line"),
            Some(Directive::NextLine)
        );
        assert_eq!(
            match_directive(re, "  // highlight-start  "),
            Some(Directive::BlockStart)
        );
        assert_eq!(
            match_directive(re, "//highlight-end"),
            Some(Directive::BlockEnd)
        );
    }

    #[test]
    fn test_js_block_comment() {
        let re = directive_matcher("typescript");
        assert_eq!(
            match_directive(re, "/* highlight-next-line */"),
            Some(Directive::NextLine)
        );
        assert_eq!(
            match_directive(re, "/*highlight-start*/"),
            Some(Directive::BlockStart)
        );
    }

    #[test]
    fn test_jsx_expression_comment() {
        let re = directive_matcher("jsx");
        assert_eq!(
            match_directive(re, "{/* highlight-next-line */}"),
            Some(Directive::NextLine)
        );
        assert_eq!(
            match_directive(re, "{ /* highlight-end */ }"),
            Some(Directive::BlockEnd)
        );
        // Plain JS comments still work in JSX blocks
        assert_eq!(
            match_directive(re, "// highlight-start"),
            Some(Directive::BlockStart)
        );
    }

    #[test]
    fn test_python_hash_comment() {
        let re = directive_matcher("python");
        assert_eq!(
            match_directive(re, "# highlight-next-line"),
            Some(Directive::NextLine)
        );
        // JS comment styles are not recognized for python
        assert_eq!(match_directive(re, "// highlight-next-line"), None);
    }

    #[test]
    fn test_html_comment() {
        let re = directive_matcher("html");
        assert_eq!(
            match_directive(re, "<!-- highlight-start -->"),
            Some(Directive::BlockStart)
        );
        assert_eq!(
            match_directive(re, "<!--highlight-end-->"),
            Some(Directive::BlockEnd)
        );
    }

    #[test]
    fn test_unknown_language_accepts_all_styles() {
        let re = directive_matcher("rust");
        assert_eq!(
            match_directive(re, "// highlight-next-line"),
            Some(Directive::NextLine)
        );
        assert_eq!(
            match_directive(re, "# highlight-next-line"),
            Some(Directive::NextLine)
        );
        assert_eq!(
            match_directive(re, "<!-- highlight-next-line -->"),
            Some(Directive::NextLine)
        );
        assert_eq!(
            match_directive(re, "{/* highlight-next-line */}"),
            Some(Directive::NextLine)
        );
    }

    #[test]
    fn test_directive_must_be_sole_content() {
        let re = directive_matcher("js");
        assert_eq!(match_directive(re, "let x = 1; // highlight-next-line"), None);
        assert_eq!(match_directive(re, "// highlight-next-line let x = 1;"), None);
        assert_eq!(match_directive(re, "/* highlight-start */ {"), None);
    }

    #[test]
    fn test_unknown_keyword_rejected() {
        let re = directive_matcher("js");
        assert_eq!(match_directive(re, "// highlight-all"), None);
        assert_eq!(match_directive(re, "// a comment"), None);
        assert_eq!(match_directive(re, "//"), None);
    }

    #[test]
    fn test_mismatched_wrappers_rejected() {
        let re = directive_matcher("jsx");
        // Opening and closing wrapper must come from the same style
        assert_eq!(match_directive(re, "{/* highlight-next-line"), None);
        assert_eq!(match_directive(re, "/* highlight-next-line */}"), None);
    }
}
