//! `themeConfig.sidebar` sections.
//!
//! The sidebar maps a URL prefix to the groups shown on pages under it:
//!
//! ```toml
//! [[themeConfig.sidebar."/guide/"]]
//! text = "快速开始"
//! items = [{ text = "介绍", link = "/guide/" }]
//! ```

use std::collections::BTreeMap;
use std::fmt;

use macros::Config;
use rustc_hash::FxHashSet;
use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

use crate::config::util::is_site_path;
use crate::config::{ConfigDiagnostics, FieldPath};

/// Sidebar sections keyed by URL prefix. Sorted for stable output.
pub type Sidebar = BTreeMap<String, Vec<SidebarGroup>>;

/// A labeled cluster of links in the side panel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "")]
pub struct SidebarGroup {
    pub text: String,
    pub items: Vec<SidebarItem>,
}

/// A single sidebar link.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "")]
pub struct SidebarItem {
    pub text: String,
    pub link: String,
}

impl SidebarGroup {
    pub fn new(text: impl Into<String>, items: Vec<SidebarItem>) -> Self {
        Self {
            text: text.into(),
            items,
        }
    }
}

impl SidebarItem {
    pub fn new(text: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            link: link.into(),
        }
    }
}

/// Deserialize a [`Sidebar`], rejecting a key that appears twice.
///
/// TOML parsers already refuse duplicate keys; JSON ones keep the last.
pub(super) fn deserialize_unique<'de, D>(deserializer: D) -> Result<Sidebar, D::Error>
where
    D: Deserializer<'de>,
{
    struct UniqueKeys;

    impl<'de> Visitor<'de> for UniqueKeys {
        type Value = Sidebar;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a map from URL prefixes to sidebar groups")
        }

        fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Sidebar, A::Error> {
            let mut sidebar = Sidebar::new();
            while let Some(key) = map.next_key::<String>()? {
                if sidebar.contains_key(&key) {
                    return Err(de::Error::custom(format_args!(
                        "duplicate sidebar key `{key}`"
                    )));
                }
                let groups = map.next_value()?;
                sidebar.insert(key, groups);
            }
            Ok(sidebar)
        }
    }

    deserializer.deserialize_map(UniqueKeys)
}

/// Validate sidebar keys, groups and items.
///
/// Reachability from the nav is checked by the caller, which sees both.
pub(super) fn validate_sidebar(sidebar: &Sidebar, base: &FieldPath, diag: &mut ConfigDiagnostics) {
    for (key, groups) in sidebar {
        let key_path = base.key(key);
        let key_ok = is_site_path(key);

        if !key_ok {
            diag.error_with_hint(
                key_path.clone(),
                format!("sidebar key '{}' must start with `/`", key),
                format!("use a URL prefix such as \"/{}\"", key),
            );
        } else if !key.ends_with('/') {
            diag.warn(
                key_path.clone(),
                format!(
                    "sidebar key '{}' does not end with `/` and will also match '{}-*' pages",
                    key, key
                ),
            );
        }

        if groups.is_empty() {
            diag.warn(key_path.clone(), "sidebar section has no groups");
        }

        let mut seen: FxHashSet<&str> = FxHashSet::default();
        for (gi, group) in groups.iter().enumerate() {
            let group_path = key_path.index(gi);

            if group.text.trim().is_empty() {
                diag.error(group_path.join(&SidebarGroup::FIELDS.text), "sidebar group label is empty");
            }
            if group.items.is_empty() {
                diag.warn(group_path.join(&SidebarGroup::FIELDS.items), "sidebar group has no items");
            }

            for (ii, item) in group.items.iter().enumerate() {
                let item_path = group_path.join(&SidebarGroup::FIELDS.items).index(ii);

                if item.text.trim().is_empty() {
                    diag.error(item_path.join(&SidebarItem::FIELDS.text), "sidebar item label is empty");
                }

                let link_path = item_path.join(&SidebarItem::FIELDS.link);
                if item.link.is_empty() {
                    diag.error(link_path, "sidebar link is empty");
                    continue;
                }
                if !is_site_path(&item.link) {
                    diag.error(
                        link_path,
                        format!("sidebar link '{}' must start with `/`", item.link),
                    );
                    continue;
                }
                if key_ok && !item.link.starts_with(key.as_str()) {
                    diag.warn(
                        link_path.clone(),
                        format!("link '{}' is outside sidebar section '{}'", item.link, key),
                    );
                }
                if !seen.insert(&item.link) {
                    diag.warn(
                        link_path,
                        format!("link '{}' appears more than once in section '{}'", item.link, key),
                    );
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validate(sidebar: &Sidebar) -> ConfigDiagnostics {
        let mut diag = ConfigDiagnostics::new();
        validate_sidebar(sidebar, &FieldPath::new("themeConfig.sidebar"), &mut diag);
        diag
    }

    fn section(key: &str, items: Vec<SidebarItem>) -> Sidebar {
        Sidebar::from([(key.to_string(), vec![SidebarGroup::new("Group", items)])])
    }

    #[test]
    fn test_valid_section() {
        let sidebar = section(
            "/guide/",
            vec![
                SidebarItem::new("介绍", "/guide/"),
                SidebarItem::new("安装", "/guide/install"),
            ],
        );
        let diag = validate(&sidebar);
        assert!(diag.is_empty());
        assert!(diag.warnings().is_empty());
    }

    #[test]
    fn test_key_must_start_with_slash() {
        let diag = validate(&section("guide/", vec![SidebarItem::new("Intro", "/guide/")]));
        assert_eq!(diag.len(), 1);
        assert_eq!(diag.errors()[0].field.as_str(), "themeConfig.sidebar.\"guide/\"");
    }

    #[test]
    fn test_key_without_trailing_slash_warns() {
        let diag = validate(&section("/guide", vec![SidebarItem::new("Intro", "/guide/")]));
        assert!(diag.is_empty());
        assert_eq!(diag.warnings().len(), 1);
    }

    #[test]
    fn test_item_errors_carry_full_path() {
        let diag = validate(&section(
            "/api/",
            vec![SidebarItem::new("Overview", "/api/"), SidebarItem::new("", "api/x")],
        ));
        let fields: Vec<_> = diag.errors().iter().map(|e| e.field.as_str()).collect();
        assert_eq!(
            fields,
            [
                "themeConfig.sidebar.\"/api/\"[0].items[1].text",
                "themeConfig.sidebar.\"/api/\"[0].items[1].link",
            ]
        );
    }

    #[test]
    fn test_link_outside_section_and_duplicate_warn() {
        let diag = validate(&section(
            "/faq/",
            vec![
                SidebarItem::new("FAQ", "/faq/"),
                SidebarItem::new("Guide", "/guide/"),
                SidebarItem::new("FAQ again", "/faq/"),
            ],
        ));
        assert!(diag.is_empty());
        assert_eq!(diag.warnings().len(), 2);
    }

    #[derive(Debug, Deserialize)]
    struct Wrapper {
        #[serde(deserialize_with = "deserialize_unique")]
        sidebar: Sidebar,
    }

    #[test]
    fn test_duplicate_key_rejected() {
        let json = r#"{"sidebar": {
            "/guide/": [{"text": "First", "items": []}],
            "/guide/": [{"text": "Second", "items": []}]
        }}"#;
        let err = serde_json::from_str::<Wrapper>(json).unwrap_err();
        assert!(err.to_string().contains("duplicate sidebar key `/guide/`"));
    }

    #[test]
    fn test_distinct_keys_kept_in_order() {
        let json = r#"{"sidebar": {
            "/guide/": [{"text": "Guide", "items": []}],
            "/api/": [{"text": "API", "items": []}]
        }}"#;
        let wrapper: Wrapper = serde_json::from_str(json).unwrap();
        let keys: Vec<_> = wrapper.sidebar.keys().map(String::as_str).collect();
        assert_eq!(keys, ["/api/", "/guide/"]);
    }

    #[test]
    fn test_empty_section_and_group_warn() {
        let mut sidebar = Sidebar::new();
        sidebar.insert("/prd/".into(), Vec::new());
        sidebar.insert("/faq/".into(), vec![SidebarGroup::new("FAQ", Vec::new())]);
        let diag = validate(&sidebar);
        assert!(diag.is_empty());
        assert_eq!(diag.warnings().len(), 2);
    }
}
