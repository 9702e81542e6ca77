//! Page footer: tags, edit link, last-updated info.

use std::fmt::Write;

use docskin_renderer::escape_html;

use crate::metadata::PageMetadata;

/// Render the page footer.
///
/// Each section (tags, edit link, last-updated) is omitted when its data
/// is absent; a page with none of them gets no footer at all.
#[must_use]
pub fn render_footer(metadata: &PageMetadata) -> String {
    let has_tags = !metadata.tags.is_empty();
    let has_edit = metadata.edit_url.is_some();
    let has_updated = !metadata.last_updated.is_empty();
    if !has_tags && !has_edit && !has_updated {
        return String::new();
    }

    let mut out = String::from(r#"<footer class="doc-footer">"#);

    if has_tags {
        out.push_str(r#"<ul class="doc-tags">"#);
        for tag in &metadata.tags {
            write!(
                out,
                r#"<li><a class="doc-tag" href="{}">{}</a></li>"#,
                escape_html(&tag.permalink),
                escape_html(&tag.label)
            )
            .unwrap();
        }
        out.push_str("</ul>");
    }

    if let Some(edit_url) = &metadata.edit_url {
        write!(
            out,
            r#"<a class="doc-edit-link" href="{}">Edit this page</a>"#,
            escape_html(edit_url)
        )
        .unwrap();
    }

    if has_updated {
        out.push_str(r#"<span class="doc-last-updated">Last updated"#);
        if let Some(date) = &metadata.last_updated.date {
            write!(out, r#" on <time datetime="{0}">{0}</time>"#, escape_html(date)).unwrap();
        }
        if let Some(author) = &metadata.last_updated.author {
            write!(out, " by {}", escape_html(author)).unwrap();
        }
        out.push_str("</span>");
    }

    out.push_str("</footer>");
    out
}
