//! Configuration file generation.
//!
//! Creates a starter config and ignore files for new sites.

use anyhow::{Context, Result};
use std::{fs, path::Path};

use super::structure::CONTENT_DIR;
use crate::config::{
    ConfigFormat, FooterConfig, NavItem, Sidebar, SidebarGroup, SidebarItem, SiteConfig,
    ThemeConfig,
};

/// Files to write ignore patterns to
const IGNORE_FILES: &[&str] = &[".gitignore", ".ignore"];

/// Renderer build output, relative to the site root.
const BUILD_OUTPUT: &str = "doc_build";

/// A minimal config: home + guide nav, one guide sidebar section.
pub fn starter_config() -> SiteConfig {
    let sidebar = Sidebar::from([(
        "/guide/".to_string(),
        vec![SidebarGroup::new(
            "Guide",
            vec![SidebarItem::new("Introduction", "/guide/")],
        )],
    )]);

    SiteConfig {
        root: CONTENT_DIR.into(),
        title: "My Docs".into(),
        description: "Project documentation".into(),
        theme_config: ThemeConfig {
            nav: vec![NavItem::new("Home", "/"), NavItem::new("Guide", "/guide/")],
            sidebar,
            social_links: Vec::new(),
            footer: Some(FooterConfig {
                message: "Released under the MIT License.".into(),
            }),
        },
        ..Default::default()
    }
}

/// Render the starter config, with a comment header for TOML.
pub fn generate_config(format: ConfigFormat) -> Result<String> {
    let body = starter_config().emit(format)?;
    Ok(match format {
        ConfigFormat::Toml => format!(
            "# docsite configuration file (v{})\n# Validate with `docsite check`.\n\n{}",
            env!("CARGO_PKG_VERSION"),
            body
        ),
        ConfigFormat::Json => body,
    })
}

/// Write the starter config to `path`
pub fn write_config(path: &Path, format: ConfigFormat) -> Result<()> {
    let content = generate_config(format)?;
    fs::write(path, content)
        .with_context(|| format!("Failed to write config file '{}'", path.display()))?;
    Ok(())
}

/// Write .gitignore and .ignore files with standard patterns
///
/// Patterns include:
/// - Renderer output directory (`/doc_build/`)
/// - OS-specific files (`.DS_Store`)
pub fn write_ignore_files(root: &Path) -> Result<()> {
    let content = [format!("/{BUILD_OUTPUT}/"), ".DS_Store".to_string()].join("\n");

    for filename in IGNORE_FILES {
        let path = root.join(filename);
        // Only create if doesn't exist (don't overwrite user's ignore files)
        if !path.exists() {
            fs::write(&path, &content)
                .with_context(|| format!("Failed to write '{}'", path.display()))?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_starter_config_has_no_errors_besides_root() {
        let diag = starter_config().diagnose();
        // root is relative until loaded from disk
        assert!(diag.errors().iter().all(|e| e.field.as_str() == "root"));
        assert!(diag.warnings().is_empty());
    }

    #[test]
    fn test_generate_toml_has_header() {
        let content = generate_config(ConfigFormat::Toml).unwrap();
        assert!(content.starts_with("# docsite configuration file"));
        assert!(content.contains("themeConfig"));
        let parsed = SiteConfig::parse(&content, ConfigFormat::Toml).unwrap();
        assert_eq!(parsed, starter_config());
    }

    #[test]
    fn test_write_ignore_files() {
        let temp = TempDir::new().unwrap();
        write_ignore_files(temp.path()).unwrap();

        let content = fs::read_to_string(temp.path().join(".gitignore")).unwrap();
        assert!(content.contains("/doc_build/"));
        assert!(temp.path().join(".ignore").exists());
    }

    #[test]
    fn test_ignore_files_not_overwritten() {
        let temp = TempDir::new().unwrap();
        let gitignore = temp.path().join(".gitignore");
        fs::write(&gitignore, "custom content").unwrap();

        write_ignore_files(temp.path()).unwrap();

        let content = fs::read_to_string(&gitignore).unwrap();
        assert_eq!(content, "custom content");
    }
}
