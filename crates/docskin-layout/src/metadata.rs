//! Page-level metadata consumed by the layout.
//!
//! All fields beyond the title are optional; sections whose data is
//! absent are simply not rendered. The struct is serde-friendly so a
//! site generator can hand pages over as JSON or YAML.

use serde::{Deserialize, Serialize};

/// Lifecycle status of a documentation version.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VersionStatus {
    /// The latest released version.
    #[default]
    Current,
    /// A development version that has not been released yet.
    Unreleased,
    /// An old version that is no longer maintained.
    Unmaintained,
}

impl VersionStatus {
    /// Stable identifier used in CSS class names.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Current => "current",
            Self::Unreleased => "unreleased",
            Self::Unmaintained => "unmaintained",
        }
    }
}

/// Documentation version a page belongs to.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionInfo {
    /// Display label (e.g. "2.4.1", "next").
    pub label: String,
    /// Lifecycle status; non-current versions get a banner.
    #[serde(default)]
    pub status: VersionStatus,
    /// Whether to show the version badge on the page.
    #[serde(default)]
    pub badge: bool,
    /// Permalink to this page in the latest version.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latest_permalink: Option<String>,
}

/// Neighbor link for previous/next pagination.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationLink {
    pub title: String,
    pub permalink: String,
}

/// A tag attached to a page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagRef {
    pub label: String,
    pub permalink: String,
}

/// Last-modification info shown in the footer.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LastUpdated {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    /// ISO-8601 date of the last change.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

impl LastUpdated {
    /// Check whether there is anything to display.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.author.is_none() && self.date.is_none()
    }
}

/// Metadata for one documentation page.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMetadata {
    /// Page title, used when the markdown content has no top-level H1.
    pub title: String,
    /// Page description for display in navigation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Version this page belongs to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<VersionInfo>,
    /// Previous page in reading order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous: Option<PaginationLink>,
    /// Next page in reading order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<PaginationLink>,
    /// URL for the "edit this page" footer link.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edit_url: Option<String>,
    /// Last-modification info for the footer.
    #[serde(default, skip_serializing_if = "LastUpdated::is_empty")]
    pub last_updated: LastUpdated,
    /// Tags shown in the footer.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<TagRef>,
    /// Suppress the synthesized page title.
    #[serde(default)]
    pub hide_title: bool,
    /// Suppress the table of contents column.
    #[serde(default)]
    pub hide_table_of_contents: bool,
}
