//! Highlight-range parsing for code block metadata strings.
//!
//! A metadata string may carry an explicit highlight range anywhere in its
//! text: `{3}`, `{1-4}`, `{1,3-5,8}`. The annotation is a comma-separated
//! mix of single integers and inclusive dash-ranges inside one pair of
//! literal braces.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

/// Matches the `{1,3-5}` annotation anywhere in a metadata string.
static RANGE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\{([\d,-]+)\}").unwrap());

/// Largest span a single dash-range may cover. Anything wider is clamped;
/// real documentation blocks are orders of magnitude smaller.
const MAX_RANGE_SPAN: u64 = 10_000;

/// Extract the highlight-range annotation from a metadata string.
///
/// Returns the expanded set of 1-based line numbers, or `None` when the
/// metadata string carries no `{...}` annotation at all. An annotation
/// whose values are all invalid (e.g. `{0}`) yields an empty set, which
/// still counts as an explicit range.
///
/// # Example
///
/// ```
/// use docskin_highlight::parse_metastring_range;
///
/// let lines = parse_metastring_range(r#"title="main.rs" {1,3-5}"#).unwrap();
/// assert_eq!(lines, [1, 3, 4, 5].into_iter().collect());
/// ```
#[must_use]
pub fn parse_metastring_range(metastring: &str) -> Option<BTreeSet<usize>> {
    let caps = RANGE_RE.captures(metastring)?;
    Some(expand_range_list(&caps[1]))
}

/// Expand a comma-separated range list (`1,3-5,8`) into line numbers.
///
/// Dash-ranges are inclusive at both ends; a descending range covers the
/// same lines as its ascending twin. Values `<= 0` and unparseable tokens
/// are dropped without complaint.
pub(crate) fn expand_range_list(list: &str) -> BTreeSet<usize> {
    let mut lines = BTreeSet::new();
    for token in list.split(',') {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }
        if let Some((a, b)) = token.split_once('-') {
            let (Ok(a), Ok(b)) = (a.trim().parse::<u64>(), b.trim().parse::<u64>()) else {
                continue;
            };
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            let hi = hi.min(lo.saturating_add(MAX_RANGE_SPAN));
            for n in lo..=hi {
                if let Ok(n) = usize::try_from(n) {
                    if n > 0 {
                        lines.insert(n);
                    }
                }
            }
        } else if let Ok(n) = token.parse::<u64>() {
            if let Ok(n) = usize::try_from(n) {
                if n > 0 {
                    lines.insert(n);
                }
            }
        }
    }
    lines
}
