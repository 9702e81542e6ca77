//! Documentation page layout.
//!
//! Composes rendered markdown content into a full documentation page:
//! version banner and badge, table of contents (sidebar and collapsible
//! variants), synthesized title, footer (tags, edit link, last-updated),
//! and previous/next pagination.
//!
//! Everything here is declarative string assembly; the interesting logic
//! (highlight resolution, tokenization, ToC extraction) lives in
//! `docskin-highlight` and `docskin-renderer`.
//!
//! # Example
//!
//! ```
//! use docskin_layout::{DocPage, PageMetadata};
//! use docskin_renderer::DocRenderer;
//!
//! let content = DocRenderer::new().render("# Guide\n\n## Install\n\nSteps.");
//! let metadata = PageMetadata {
//!     title: "Guide".to_owned(),
//!     ..Default::default()
//! };
//!
//! let html = DocPage::new(&metadata, &content).render();
//! assert!(html.contains(r#"<aside class="doc-page-toc">"#));
//! ```

mod banner;
mod footer;
mod metadata;
mod page;
mod paginator;
mod toc;

pub use banner::{render_version_badge, render_version_banner};
pub use footer::render_footer;
pub use metadata::{LastUpdated, PageMetadata, PaginationLink, TagRef, VersionInfo, VersionStatus};
pub use page::DocPage;
pub use paginator::render_paginator;
pub use toc::TocRenderer;
