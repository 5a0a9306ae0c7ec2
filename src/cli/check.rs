//! `docsite check`: summarize a loaded config.
//!
//! Validation itself happens while loading; reaching this point means the
//! config is valid.

use anyhow::Result;

use crate::config::SiteConfig;
use crate::utils::plural_count;
use crate::{debug, log};

/// Print a one-line summary and, with `--verbose`, the nav→sidebar routes.
pub fn check_site(config: &SiteConfig) -> Result<()> {
    let name = config
        .config_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    log!("check"; "{} is valid", name);
    log!("check"; "{}", summary(config));

    for (item, section) in config.theme_config.routes() {
        match section {
            Some(key) => debug!("route"; "{} {} -> sidebar {}", item.text, item.link, key),
            None => debug!("route"; "{} {} -> (home)", item.text, item.link),
        }
    }
    for link in &config.theme_config.social_links {
        debug!("social"; "{} [{}] {}", link.icon, link.mode.as_str(), link.content);
    }
    Ok(())
}

/// `7 nav items, 6 sidebar sections, 6 sidebar links, 1 social link`
fn summary(config: &SiteConfig) -> String {
    let theme = &config.theme_config;
    [
        plural_count(theme.nav.len(), "nav item"),
        plural_count(theme.sidebar.len(), "sidebar section"),
        plural_count(theme.sidebar_link_count(), "sidebar link"),
        plural_count(theme.social_links.len(), "social link"),
    ]
    .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ConfigFormat, PIXEL_SEED_TOML};

    #[test]
    fn test_summary() {
        let config = SiteConfig::parse(PIXEL_SEED_TOML, ConfigFormat::Toml).unwrap();
        assert_eq!(
            summary(&config),
            "7 nav items, 6 sidebar sections, 6 sidebar links, 1 social link"
        );
    }

    #[test]
    fn test_summary_empty() {
        assert_eq!(
            summary(&SiteConfig::default()),
            "0 nav items, 0 sidebar sections, 0 sidebar links, 0 social links"
        );
    }
}
