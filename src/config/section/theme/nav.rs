//! `themeConfig.nav` entries.

use macros::Config;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::config::util::is_site_path;
use crate::config::{ConfigDiagnostics, FieldPath};

/// Link to the site home page; rendered with the home layout.
pub const HOME_LINK: &str = "/";

/// A top-level link in the site header.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "")]
pub struct NavItem {
    /// Display label.
    pub text: String,
    /// Target site path, e.g. `/guide/`.
    pub link: String,
}

impl NavItem {
    pub fn new(text: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            link: link.into(),
        }
    }

    #[inline]
    pub fn is_home(&self) -> bool {
        self.link == HOME_LINK
    }

    /// Whether the link is well-formed enough to be resolved against the sidebar.
    #[inline]
    pub fn has_site_link(&self) -> bool {
        is_site_path(&self.link)
    }

    fn validate(&self, path: &FieldPath, diag: &mut ConfigDiagnostics) {
        if self.text.trim().is_empty() {
            diag.error(path.join(&Self::FIELDS.text), "nav label is empty");
        }

        if self.link.is_empty() {
            diag.error(path.join(&Self::FIELDS.link), "nav link is empty");
        } else if !self.has_site_link() {
            diag.error_with_hint(
                path.join(&Self::FIELDS.link),
                format!("nav link '{}' must start with `/`", self.link),
                format!("use a site path, e.g. \"/{}\"", self.link.trim_start_matches("./")),
            );
        }
    }
}

/// Validate every nav item and reject duplicate links.
pub(super) fn validate_nav(nav: &[NavItem], base: &FieldPath, diag: &mut ConfigDiagnostics) {
    let mut seen: FxHashMap<&str, usize> = FxHashMap::default();

    for (i, item) in nav.iter().enumerate() {
        let path = base.index(i);
        item.validate(&path, diag);

        if item.link.is_empty() {
            continue;
        }
        if let Some(first) = seen.get(item.link.as_str()) {
            diag.error(
                path.join(&NavItem::FIELDS.link),
                format!("duplicate nav link '{}' (already used by nav[{}])", item.link, first),
            );
        } else {
            seen.insert(&item.link, i);
        }
    }
}
