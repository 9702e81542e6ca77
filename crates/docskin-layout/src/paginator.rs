//! Previous/next pagination links.

use std::fmt::Write;

use docskin_renderer::escape_html;

use crate::metadata::PaginationLink;

/// Render the previous/next navigation row.
///
/// Returns an empty string when the page has no neighbors.
#[must_use]
pub fn render_paginator(
    previous: Option<&PaginationLink>,
    next: Option<&PaginationLink>,
) -> String {
    if previous.is_none() && next.is_none() {
        return String::new();
    }

    let mut out = String::from(r#"<nav class="paginator">"#);
    if let Some(previous) = previous {
        write_link(&mut out, previous, "previous", "Previous");
    }
    if let Some(next) = next {
        write_link(&mut out, next, "next", "Next");
    }
    out.push_str("</nav>");
    out
}

fn write_link(out: &mut String, link: &PaginationLink, direction: &str, sublabel: &str) {
    write!(
        out,
        r#"<a class="paginator-link paginator-link--{direction}" href="{}"><span class="paginator-sublabel">{sublabel}</span><span class="paginator-label">{}</span></a>"#,
        escape_html(&link.permalink),
        escape_html(&link.title)
    )
    .unwrap();
}
