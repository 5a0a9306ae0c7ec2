//! `themeConfig` section: navigation, sidebar, social links and footer.
//!
//! # Example
//!
//! ```toml
//! [themeConfig]
//! nav = [
//!     { text = "首页", link = "/" },
//!     { text = "快速开始", link = "/guide/" },
//! ]
//! socialLinks = [
//!     { icon = "github", mode = "link", content = "https://github.com/org/repo" },
//! ]
//!
//! [[themeConfig.sidebar."/guide/"]]
//! text = "快速开始"
//! items = [{ text = "介绍", link = "/guide/" }]
//!
//! [themeConfig.footer]
//! message = "Released under the MIT License."
//! ```
//!
//! Every nav link except the home link `/` must resolve to a sidebar
//! section, and every sidebar section must be reachable from the nav.

mod footer;
mod nav;
mod sidebar;
mod social;

pub use footer::FooterConfig;
pub use nav::NavItem;
pub use sidebar::{Sidebar, SidebarGroup, SidebarItem};
pub use social::SocialLink;

use macros::Config;
use serde::{Deserialize, Serialize};

use crate::config::ConfigDiagnostics;

/// Presentation and navigation settings passed to the renderer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Config)]
#[serde(default, rename_all = "camelCase")]
#[config(section = "themeConfig")]
pub struct ThemeConfig {
    /// Header links, in display order.
    pub nav: Vec<NavItem>,

    /// Side panel groups keyed by URL prefix.
    #[serde(deserialize_with = "sidebar::deserialize_unique")]
    pub sidebar: Sidebar,

    /// Header social icons, in display order.
    pub social_links: Vec<SocialLink>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<FooterConfig>,
}

impl ThemeConfig {
    /// Find the sidebar section a link resolves to.
    ///
    /// The longest key that prefixes `link` wins, so `/guide/advanced/`
    /// beats `/guide/` for `/guide/advanced/hooks`.
    pub fn sidebar_for(&self, link: &str) -> Option<(&str, &[SidebarGroup])> {
        self.sidebar
            .iter()
            .filter(|(key, _)| !key.is_empty() && link.starts_with(key.as_str()))
            .max_by_key(|(key, _)| key.len())
            .map(|(key, groups)| (key.as_str(), groups.as_slice()))
    }

    /// Nav items paired with the sidebar section each one opens.
    pub fn routes(&self) -> impl Iterator<Item = (&NavItem, Option<&str>)> {
        self.nav
            .iter()
            .map(|item| (item, self.sidebar_for(&item.link).map(|(key, _)| key)))
    }

    /// Total number of sidebar links across all sections.
    pub fn sidebar_link_count(&self) -> usize {
        self.sidebar
            .values()
            .flatten()
            .map(|group| group.items.len())
            .sum()
    }

    /// Validate the theme section.
    ///
    /// # Checks
    /// - nav items, sidebar sections, social links and footer individually
    /// - each nav link (except home) has a sidebar section
    /// - each sidebar section is reachable from some nav link
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        nav::validate_nav(&self.nav, &Self::FIELDS.nav, diag);
        sidebar::validate_sidebar(&self.sidebar, &Self::FIELDS.sidebar, diag);

        for (i, link) in self.social_links.iter().enumerate() {
            link.validate(&Self::FIELDS.social_links.index(i), diag);
        }

        if let Some(footer) = &self.footer {
            footer.validate(diag);
        }

        self.validate_consistency(diag);
    }

    /// Cross-check nav links against sidebar keys.
    fn validate_consistency(&self, diag: &mut ConfigDiagnostics) {
        for (i, item) in self.nav.iter().enumerate() {
            // Malformed links are already reported by validate_nav.
            if !item.has_site_link() || item.is_home() {
                continue;
            }
            if self.sidebar_for(&item.link).is_none() {
                diag.error_with_hint(
                    Self::FIELDS.nav.index(i).join(&NavItem::FIELDS.link),
                    format!("missing sidebar entry for {}", item.link),
                    format!(
                        "add a {} entry keyed by \"{}\" or a prefix of it",
                        Self::FIELDS.sidebar,
                        item.link
                    ),
                );
            }
        }

        for key in self.sidebar.keys() {
            let reachable = self
                .nav
                .iter()
                .any(|item| item.link.starts_with(key.as_str()));
            if !reachable {
                diag.error_with_hint(
                    Self::FIELDS.sidebar.key(key),
                    format!("sidebar entry {} is not reachable from any nav link", key),
                    format!("add a nav item linking to \"{}\", or remove the entry", key),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn guide_nav() -> Vec<NavItem> {
        vec![NavItem::new("Guide", "/guide/")]
    }

    fn guide_sidebar() -> Sidebar {
        Sidebar::from([(
            "/guide/".to_string(),
            vec![SidebarGroup::new(
                "Guide",
                vec![SidebarItem::new("Intro", "/guide/")],
            )],
        )])
    }

    fn diagnose(theme: &ThemeConfig) -> ConfigDiagnostics {
        let mut diag = ConfigDiagnostics::new();
        theme.validate(&mut diag);
        diag
    }

    #[test]
    fn test_guide_scenario_valid() {
        let theme = ThemeConfig {
            nav: guide_nav(),
            sidebar: guide_sidebar(),
            ..Default::default()
        };
        let diag = diagnose(&theme);
        assert!(diag.is_empty(), "{:?}", diag.errors());
    }

    #[test]
    fn test_guide_scenario_missing_sidebar() {
        let theme = ThemeConfig {
            nav: guide_nav(),
            ..Default::default()
        };
        let diag = diagnose(&theme);
        assert_eq!(diag.len(), 1);
        assert_eq!(diag.errors()[0].field.as_str(), "themeConfig.nav[0].link");
        assert!(
            diag.errors()[0]
                .message
                .contains("missing sidebar entry for /guide/")
        );
    }

    #[test]
    fn test_home_link_needs_no_sidebar() {
        let theme = ThemeConfig {
            nav: vec![NavItem::new("Home", "/")],
            ..Default::default()
        };
        assert!(diagnose(&theme).is_empty());
    }

    #[test]
    fn test_dangling_sidebar_entry() {
        let mut sidebar = guide_sidebar();
        sidebar.insert(
            "/internal/".into(),
            vec![SidebarGroup::new(
                "Internal",
                vec![SidebarItem::new("Notes", "/internal/")],
            )],
        );
        let theme = ThemeConfig {
            nav: guide_nav(),
            sidebar,
            ..Default::default()
        };
        let diag = diagnose(&theme);
        assert_eq!(diag.len(), 1);
        assert_eq!(
            diag.errors()[0].field.as_str(),
            "themeConfig.sidebar.\"/internal/\""
        );
    }

    #[test]
    fn test_sidebar_key_reachable_through_deeper_nav_link() {
        let theme = ThemeConfig {
            nav: vec![NavItem::new("Install", "/guide/install")],
            sidebar: guide_sidebar(),
            ..Default::default()
        };
        assert!(diagnose(&theme).is_empty());
    }

    #[test]
    fn test_sidebar_for_longest_prefix() {
        let mut sidebar = guide_sidebar();
        sidebar.insert(
            "/guide/advanced/".into(),
            vec![SidebarGroup::new(
                "Advanced",
                vec![SidebarItem::new("Hooks", "/guide/advanced/hooks")],
            )],
        );
        let theme = ThemeConfig {
            sidebar,
            ..Default::default()
        };

        let (key, groups) = theme.sidebar_for("/guide/advanced/hooks").unwrap();
        assert_eq!(key, "/guide/advanced/");
        assert_eq!(groups[0].text, "Advanced");

        assert_eq!(theme.sidebar_for("/guide/").unwrap().0, "/guide/");
        assert!(theme.sidebar_for("/api/").is_none());
        assert!(theme.sidebar_for("/").is_none());
    }

    #[test]
    fn test_routes() {
        let theme = ThemeConfig {
            nav: vec![NavItem::new("Home", "/"), NavItem::new("Guide", "/guide/")],
            sidebar: guide_sidebar(),
            ..Default::default()
        };
        let routes: Vec<_> = theme
            .routes()
            .map(|(item, key)| (item.link.as_str(), key))
            .collect();
        assert_eq!(routes, [("/", None), ("/guide/", Some("/guide/"))]);
        assert_eq!(theme.sidebar_link_count(), 1);
    }

    #[test]
    fn test_collects_errors_across_parts() {
        let theme = ThemeConfig {
            nav: vec![NavItem::new("", "/guide/")],
            sidebar: guide_sidebar(),
            social_links: vec![SocialLink::default()],
            footer: Some(FooterConfig::default()),
        };
        let fields: Vec<_> = diagnose(&theme)
            .errors()
            .iter()
            .map(|e| e.field.as_str().to_string())
            .collect();
        assert_eq!(
            fields,
            [
                "themeConfig.nav[0].text",
                "themeConfig.socialLinks[0].icon",
                "themeConfig.socialLinks[0].content",
                "themeConfig.footer.message",
            ]
        );
    }
}
