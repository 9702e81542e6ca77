//! Document page composition.
//!
//! [`DocPage`] assembles the full page fragment: version banner, badge,
//! collapsible ToC, article content with an optionally synthesized title,
//! footer, pagination, and the sidebar ToC column.

use std::fmt::Write;

use docskin_renderer::{RenderResult, escape_html};

use crate::banner::{render_version_badge, render_version_banner};
use crate::footer::render_footer;
use crate::metadata::PageMetadata;
use crate::paginator::render_paginator;
use crate::toc::TocRenderer;

/// A documentation page ready to render.
pub struct DocPage<'a> {
    metadata: &'a PageMetadata,
    content: &'a RenderResult,
    toc: TocRenderer,
}

impl<'a> DocPage<'a> {
    #[must_use]
    pub fn new(metadata: &'a PageMetadata, content: &'a RenderResult) -> Self {
        Self {
            metadata,
            content,
            toc: TocRenderer::new(),
        }
    }

    /// Replace the ToC renderer (e.g. to widen the level range).
    #[must_use]
    pub fn with_toc_renderer(mut self, toc: TocRenderer) -> Self {
        self.toc = toc;
        self
    }

    /// Render the page fragment.
    #[must_use]
    pub fn render(&self) -> String {
        let toc_html = if self.metadata.hide_table_of_contents {
            String::new()
        } else {
            self.toc.render(&self.content.toc)
        };

        let mut out = String::with_capacity(self.content.html.len() + 1024);
        out.push_str(r#"<div class="doc-page">"#);
        out.push_str(r#"<div class="doc-page-main">"#);

        if let Some(version) = &self.metadata.version {
            out.push_str(&render_version_banner(version));
        }

        out.push_str(r#"<article class="doc-article">"#);
        if let Some(version) = &self.metadata.version {
            out.push_str(&render_version_badge(version));
        }
        if !toc_html.is_empty() {
            out.push_str(
                &self
                    .toc
                    .render_collapsible(&self.content.toc, "On this page"),
            );
        }

        out.push_str(r#"<div class="doc-markdown">"#);
        if self.should_add_title() {
            write!(out, "<h1>{}</h1>", escape_html(&self.metadata.title)).unwrap();
        }
        out.push_str(&self.content.html);
        out.push_str("</div>");

        out.push_str(&render_footer(self.metadata));
        out.push_str("</article>");
        out.push_str(&render_paginator(
            self.metadata.previous.as_ref(),
            self.metadata.next.as_ref(),
        ));
        out.push_str("</div>");

        if !toc_html.is_empty() {
            write!(out, r#"<aside class="doc-page-toc">{toc_html}</aside>"#).unwrap();
        }

        out.push_str("</div>");
        out
    }

    /// A title is synthesized only when the author did not hide it and the
    /// markdown content did not already produce one.
    fn should_add_title(&self) -> bool {
        !self.metadata.hide_title && self.content.title.is_none()
    }
}

#[cfg(test)]
mod tests {
    use docskin_renderer::DocRenderer;

    use super::*;
    use crate::metadata::{PaginationLink, VersionInfo, VersionStatus};

    fn metadata(title: &str) -> PageMetadata {
        PageMetadata {
            title: title.to_owned(),
            ..Default::default()
        }
    }

    fn rendered(markdown: &str) -> RenderResult {
        DocRenderer::new().render(markdown)
    }

    #[test]
    fn test_composition_order() {
        let content = rendered("# Guide\n\n## Install\n\nSteps.");
        let mut meta = metadata("Guide");
        meta.version = Some(VersionInfo {
            label: "next".to_owned(),
            status: VersionStatus::Unreleased,
            badge: true,
            latest_permalink: None,
        });
        meta.next = Some(PaginationLink {
            title: "Usage".to_owned(),
            permalink: "/usage".to_owned(),
        });
        meta.edit_url = Some("https://example.com/edit".to_owned());

        let html = DocPage::new(&meta, &content).render();

        let banner = html.find("version-banner").unwrap();
        let badge = html.find("version-badge").unwrap();
        let collapsible = html.find("toc-collapsible").unwrap();
        let markdown = html.find("doc-markdown").unwrap();
        let footer = html.find("doc-footer").unwrap();
        let paginator = html.find(r#"<nav class="paginator">"#).unwrap();
        let sidebar = html.find("doc-page-toc").unwrap();

        assert!(banner < badge);
        assert!(badge < collapsible);
        assert!(collapsible < markdown);
        assert!(markdown < footer);
        assert!(footer < paginator);
        assert!(paginator < sidebar);
    }

    #[test]
    fn test_title_synthesized_when_content_has_none() {
        let content = rendered("Just a paragraph.");
        let html = DocPage::new(&metadata("Standalone"), &content).render();
        assert!(html.contains("<h1>Standalone</h1>"));
    }

    #[test]
    fn test_title_not_synthesized_when_content_has_h1() {
        let content = rendered("# Real Title\n\nBody");
        let html = DocPage::new(&metadata("Ignored"), &content).render();
        assert!(!html.contains("<h1>Ignored</h1>"));
        assert!(html.contains("Real Title"));
    }

    #[test]
    fn test_hide_title() {
        let content = rendered("Paragraph only.");
        let mut meta = metadata("Hidden");
        meta.hide_title = true;
        let html = DocPage::new(&meta, &content).render();
        assert!(!html.contains("<h1>"));
    }

    #[test]
    fn test_hide_table_of_contents() {
        let content = rendered("# T\n\n## Section\n\nBody");
        let mut meta = metadata("T");
        meta.hide_table_of_contents = true;
        let html = DocPage::new(&meta, &content).render();
        assert!(!html.contains("doc-page-toc"));
        assert!(!html.contains("toc-collapsible"));
    }

    #[test]
    fn test_no_toc_column_when_no_headings() {
        let content = rendered("No headings at all.");
        let html = DocPage::new(&metadata("T"), &content).render();
        assert!(!html.contains("doc-page-toc"));
    }

    #[test]
    fn test_no_banner_for_current_version() {
        let content = rendered("# T");
        let mut meta = metadata("T");
        meta.version = Some(VersionInfo {
            label: "3.1".to_owned(),
            status: VersionStatus::Current,
            badge: false,
            latest_permalink: None,
        });
        let html = DocPage::new(&meta, &content).render();
        assert!(!html.contains("version-banner"));
        assert!(!html.contains("version-badge"));
    }

    #[test]
    fn test_code_block_flows_through_page() {
        let content = rendered("# T\n\n```js\n// highlight-next-line\nlet a = 1;\n```");
        let html = DocPage::new(&metadata("T"), &content).render();
        assert!(html.contains("code-line--highlighted"));
        assert!(html.contains("copy-button"));
    }

    #[test]
    fn test_custom_toc_levels() {
        let content = rendered("# T\n\n#### Deep Section");
        let meta = metadata("T");

        let page = DocPage::new(&meta, &content);
        assert!(!page.render().contains("doc-page-toc"));

        let page = page.with_toc_renderer(TocRenderer::new().with_levels(2, 4));
        assert!(page.render().contains("doc-page-toc"));
    }
}
