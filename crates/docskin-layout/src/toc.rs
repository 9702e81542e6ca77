//! Table of contents rendering.

use std::fmt::Write;

use docskin_renderer::{TocEntry, escape_html};

/// Renders [`TocEntry`] lists as nested HTML lists.
///
/// Entries outside the configured level range are dropped before
/// rendering; nesting follows the remaining entries' levels.
#[derive(Clone, Debug)]
pub struct TocRenderer {
    min_level: u8,
    max_level: u8,
}

impl Default for TocRenderer {
    fn default() -> Self {
        Self {
            min_level: 2,
            max_level: 3,
        }
    }
}

impl TocRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Heading levels included in the list (inclusive bounds).
    #[must_use]
    pub fn with_levels(mut self, min: u8, max: u8) -> Self {
        self.min_level = min;
        self.max_level = max;
        self
    }

    /// Render the sidebar variant.
    ///
    /// Returns an empty string when no entry falls inside the level range.
    #[must_use]
    pub fn render(&self, entries: &[TocEntry]) -> String {
        let mut out = String::new();
        self.render_list(entries, &mut out);
        out
    }

    /// Render the collapsible variant used on narrow layouts.
    #[must_use]
    pub fn render_collapsible(&self, entries: &[TocEntry], summary: &str) -> String {
        let list = self.render(entries);
        if list.is_empty() {
            return String::new();
        }
        format!(
            r#"<details class="toc-collapsible"><summary>{}</summary>{list}</details>"#,
            escape_html(summary)
        )
    }

    fn render_list(&self, entries: &[TocEntry], out: &mut String) {
        let mut stack: Vec<u8> = Vec::new();

        for entry in entries {
            if entry.level < self.min_level || entry.level > self.max_level {
                continue;
            }

            loop {
                match stack.last().copied() {
                    // Open a new (sub)list for a first or deeper entry
                    None => {
                        out.push_str(r#"<ul class="toc-list">"#);
                        stack.push(entry.level);
                        break;
                    }
                    Some(top) if entry.level > top => {
                        out.push_str(r#"<ul class="toc-list">"#);
                        stack.push(entry.level);
                        break;
                    }
                    // Sibling: close the previous item
                    Some(top) if entry.level == top => {
                        out.push_str("</li>");
                        break;
                    }
                    // Shallower: close the sublist and try again
                    Some(_) => {
                        stack.pop();
                        out.push_str("</li></ul>");
                    }
                }
            }

            write!(
                out,
                r##"<li><a href="#{}">{}</a>"##,
                escape_html(&entry.id),
                escape_html(&entry.title)
            )
            .unwrap();
        }

        while stack.pop().is_some() {
            out.push_str("</li></ul>");
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn entry(level: u8, title: &str) -> TocEntry {
        TocEntry {
            level,
            title: title.to_owned(),
            id: docskin_renderer::slugify(title),
        }
    }

    #[test]
    fn test_flat_list() {
        let html = TocRenderer::new().render(&[entry(2, "One"), entry(2, "Two")]);
        assert_eq!(
            html,
            r##"<ul class="toc-list"><li><a href="#one">One</a></li><li><a href="#two">Two</a></li></ul>"##
        );
    }

    #[test]
    fn test_nested_list() {
        let html = TocRenderer::new().render(&[entry(2, "Top"), entry(3, "Sub"), entry(2, "Next")]);
        assert_eq!(
            html,
            r##"<ul class="toc-list"><li><a href="#top">Top</a><ul class="toc-list"><li><a href="#sub">Sub</a></li></ul></li><li><a href="#next">Next</a></li></ul>"##
        );
    }

    #[test]
    fn test_levels_filtered() {
        let html = TocRenderer::new().render(&[
            entry(2, "Keep"),
            entry(4, "Too Deep"),
            entry(1, "Too Shallow"),
        ]);
        assert!(html.contains("Keep"));
        assert!(!html.contains("Too Deep"));
        assert!(!html.contains("Too Shallow"));
    }

    #[test]
    fn test_custom_level_range() {
        let html = TocRenderer::new()
            .with_levels(2, 4)
            .render(&[entry(4, "Deep")]);
        assert!(html.contains("Deep"));
    }

    #[test]
    fn test_empty_when_no_entries_in_range() {
        assert_eq!(TocRenderer::new().render(&[entry(5, "Deep")]), "");
        assert_eq!(TocRenderer::new().render(&[]), "");
    }

    #[test]
    fn test_collapsible_variant() {
        let html = TocRenderer::new().render_collapsible(&[entry(2, "One")], "On this page");
        assert!(html.starts_with(r#"<details class="toc-collapsible"><summary>On this page</summary>"#));
        assert!(html.ends_with("</details>"));
        assert!(html.contains(r##"<a href="#one">One</a>"##));
    }

    #[test]
    fn test_collapsible_empty() {
        assert_eq!(TocRenderer::new().render_collapsible(&[], "ToC"), "");
    }

    #[test]
    fn test_titles_escaped() {
        let html = TocRenderer::new().render(&[entry(2, "a < b")]);
        assert!(html.contains("a &lt; b"));
    }
}
