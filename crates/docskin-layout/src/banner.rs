//! Version banner and badge rendering.

use std::fmt::Write;

use docskin_renderer::escape_html;

use crate::metadata::{VersionInfo, VersionStatus};

/// Render the banner shown on pages of a non-current version.
///
/// Current versions produce no banner at all.
#[must_use]
pub fn render_version_banner(version: &VersionInfo) -> String {
    let message = match version.status {
        VersionStatus::Current => return String::new(),
        VersionStatus::Unreleased => {
            "This is unreleased documentation; content may change before the release."
        }
        VersionStatus::Unmaintained => {
            "This is documentation for a version that is no longer actively maintained."
        }
    };

    let mut out = String::new();
    write!(
        out,
        r#"<div class="version-banner version-banner--{}"><p>{message}</p>"#,
        version.status.as_str()
    )
    .unwrap();
    if let Some(latest) = &version.latest_permalink {
        write!(
            out,
            r#"<p>For up-to-date documentation, see the <a href="{}">latest version</a>.</p>"#,
            escape_html(latest)
        )
        .unwrap();
    }
    out.push_str("</div>");
    out
}

/// Render the version badge when the version carries one.
#[must_use]
pub fn render_version_badge(version: &VersionInfo) -> String {
    if !version.badge {
        return String::new();
    }
    format!(
        r#"<span class="version-badge">Version: {}</span>"#,
        escape_html(&version.label)
    )
}
