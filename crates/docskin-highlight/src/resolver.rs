//! Single-pass highlight-directive resolution.

use std::collections::BTreeSet;

use crate::comment::{Directive, directive_matcher, match_directive};
use crate::range::parse_metastring_range;

/// Outcome of resolving a code block's highlight directives.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Resolved {
    /// Source text with directive-comment lines removed.
    pub code: String,
    /// 1-based line numbers to highlight, relative to [`code`](Self::code).
    pub highlights: BTreeSet<usize>,
}

/// Resolves highlight directives for fenced code blocks.
///
/// Two mutually exclusive mechanisms select the highlighted lines:
///
/// 1. An explicit range in the metadata string (`{1,3-5}`). The code is
///    left untouched; directive comments, if any, stay in the output
///    verbatim.
/// 2. Directive comments in the code (`highlight-next-line`,
///    `highlight-start`/`highlight-end`), each on a line of its own in
///    the block language's comment syntax. Directive lines are removed
///    and all recorded line numbers refer to the text after removal.
///
/// # Example
///
/// ```
/// use docskin_highlight::DirectiveResolver;
///
/// let resolver = DirectiveResolver::new();
/// let resolved = resolver.resolve(
///     Some("python"),
///     None,
///     "x = 1\n# highlight-start\ny = 2\n# highlight-end\nz = 3\n",
/// );
///
/// assert_eq!(resolved.code, "x = 1\ny = 2\nz = 3");
/// assert_eq!(resolved.highlights, [2].into_iter().collect());
/// ```
#[derive(Clone, Debug, Default)]
pub struct DirectiveResolver {
    default_language: Option<String>,
}

impl DirectiveResolver {
    /// Create a resolver with no default language.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Language assumed for blocks that carry no language tag.
    ///
    /// Without a default, untagged blocks skip directive scanning
    /// entirely: no comment syntax can be determined for them.
    #[must_use]
    pub fn with_default_language(mut self, language: impl Into<String>) -> Self {
        self.default_language = Some(language.into());
        self
    }

    /// The configured default language, if any.
    #[must_use]
    pub fn default_language(&self) -> Option<&str> {
        self.default_language.as_deref()
    }

    /// Resolve a code block into cleaned code and highlighted lines.
    ///
    /// `raw_text` is first stripped of exactly one trailing newline (the
    /// fenced-block convention). When the metadata string carries a
    /// `{...}` range, that range wins and the text is returned unchanged;
    /// otherwise the block is scanned for directive comments in the
    /// syntax of `language` (or the configured default).
    #[must_use]
    pub fn resolve(
        &self,
        language: Option<&str>,
        metastring: Option<&str>,
        raw_text: &str,
    ) -> Resolved {
        let code = raw_text.strip_suffix('\n').unwrap_or(raw_text);

        // An explicit range suppresses directive scanning entirely, even
        // when every value in it is discarded.
        if let Some(highlights) = metastring.and_then(parse_metastring_range) {
            return Resolved {
                code: code.to_owned(),
                highlights,
            };
        }

        let Some(language) = language.or(self.default_language.as_deref()) else {
            return Resolved {
                code: code.to_owned(),
                highlights: BTreeSet::new(),
            };
        };

        self.scan_directives(language, code)
    }

    /// Scan the block line by line, splicing out directive lines.
    ///
    /// The cursor advances only past non-matching lines, so every recorded
    /// number already refers to the post-removal text. This is what keeps
    /// `highlight-next-line` and block-end arithmetic correct.
    fn scan_directives(&self, language: &str, code: &str) -> Resolved {
        let matcher = directive_matcher(language);
        let mut lines: Vec<&str> = code.split('\n').collect();
        let mut highlights = BTreeSet::new();
        let mut pending_start: Option<usize> = None;

        let mut index = 0;
        while index < lines.len() {
            // 1-based position of this line in the post-removal text
            let position = index + 1;
            match match_directive(matcher, lines[index]) {
                Some(Directive::NextLine) => {
                    highlights.insert(position);
                    lines.remove(index);
                }
                Some(Directive::BlockStart) => {
                    // A second start before an end overwrites the pending
                    // marker (last start wins).
                    pending_start = Some(position);
                    lines.remove(index);
                }
                Some(Directive::BlockEnd) => {
                    match pending_start.take() {
                        // The markers themselves are never highlighted;
                        // an empty block yields no lines.
                        Some(start) => highlights.extend(start..position),
                        None => {
                            tracing::warn!(
                                language,
                                line = position,
                                "highlight-end without highlight-start, ignoring"
                            );
                        }
                    }
                    lines.remove(index);
                }
                None => index += 1,
            }
        }

        Resolved {
            code: lines.join("\n"),
            highlights,
        }
    }
}
