//! Site configuration management for `docsite.toml` / `docsite.json`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── asset      # image reference checks
//! │   ├── logo       # logo
//! │   └── theme/     # themeConfig (nav, sidebar, socialLinks, footer)
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   └── field      # FieldPath
//! ├── format         # TOML / JSON codecs
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! # Keys
//!
//! | Key           | Purpose                                          |
//! |---------------|--------------------------------------------------|
//! | `root`        | Content source tree, relative to the config file |
//! | `title`       | Site title                                       |
//! | `description` | Site description                                 |
//! | `icon`        | Favicon reference                                |
//! | `logo`        | `{ light, dark }` logo references                |
//! | `themeConfig` | Nav, sidebar, social links, footer               |
//!
//! Key names are camelCase because the renderer reads the same shape.

mod format;
pub mod section;
pub mod types;
mod util;

pub use format::ConfigFormat;
pub use section::{
    FooterConfig, LogoConfig, NavItem, Sidebar, SidebarGroup, SidebarItem, ThemeConfig,
};
pub use types::{ConfigDiagnostics, ConfigError, FieldPath};

use section::AssetRefChecker;
use util::find_config_file;

use crate::{cli::Cli, debug, log};
use anyhow::{Result, bail};
use macros::Config;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure.
///
/// Built once at startup and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Config)]
#[serde(default, rename_all = "camelCase")]
#[config(section = "")]
pub struct SiteConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Content source tree. Relative paths are resolved against the
    /// config file's directory at load time.
    pub root: PathBuf,

    pub title: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,

    /// Favicon reference (site path or URL).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<LogoConfig>,

    pub theme_config: ThemeConfig,
}

impl SiteConfig {
    /// Load configuration from CLI arguments.
    ///
    /// Searches upward from cwd to find the config file.
    pub fn load(cli: &Cli) -> Result<Self> {
        let Some(config_path) = find_config_file(&cli.config) else {
            bail!(ConfigError::Validation(format!(
                "config file '{}' not found, run `docsite init` to create one",
                cli.config.display()
            )));
        };
        Self::load_from(&config_path, cli.strict)
    }

    /// Read, normalize and validate the config file at `path`.
    ///
    /// Unknown fields are reported as warnings, or rejected when `strict`.
    pub fn load_from(path: &Path, strict: bool) -> Result<Self> {
        let format = ConfigFormat::from_path(path);
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (mut config, ignored) = Self::parse_with_ignored(&content, format)?;

        if !ignored.is_empty() {
            if strict {
                bail!(ConfigError::UnknownFields(ignored));
            }
            Self::print_unknown_fields_warning(&ignored, path);
        }

        config.config_path = crate::utils::path::normalize_path(path);
        config.normalize_root();
        config.validate()?;

        debug!("config"; "loaded {} ({:?})", config.config_path.display(), format);
        Ok(config)
    }

    /// Parse configuration without validating it.
    pub fn parse(content: &str, format: ConfigFormat) -> Result<Self> {
        Ok(format.parse_with(content, |_| {})?)
    }

    /// Serialize in the shape the renderer consumes.
    pub fn emit(&self, format: ConfigFormat) -> Result<String> {
        Ok(format.serialize(self)?)
    }

    /// Parse content, collecting any unknown fields.
    fn parse_with_ignored(content: &str, format: ConfigFormat) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let config = format.parse_with(content, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    /// Directory containing the config file.
    pub fn config_dir(&self) -> &Path {
        self.config_path.parent().unwrap_or_else(|| Path::new(""))
    }

    /// Resolve `root` against the config directory, expanding `~`.
    fn normalize_root(&mut self) {
        if self.root.as_os_str().is_empty() {
            return;
        }

        let expanded = shellexpand::tilde(&self.root.to_string_lossy()).into_owned();
        let root = PathBuf::from(expanded);
        let full = if root.is_relative() {
            self.config_dir().join(root)
        } else {
            root
        };
        self.root = crate::utils::path::normalize_path(&full);
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate the whole configuration.
    ///
    /// Collects all errors and returns them at once; warnings are printed.
    pub fn validate(&self) -> Result<()> {
        let diag = self.diagnose();
        diag.print_warnings();
        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }

    /// Run every check without printing anything.
    pub fn diagnose(&self) -> ConfigDiagnostics {
        let mut diag = ConfigDiagnostics::new();

        self.validate_root(&mut diag);

        if self.title.trim().is_empty() {
            diag.error_with_hint(
                Self::FIELDS.title,
                "required field is missing or empty",
                "set a site title, e.g. title = \"My Docs\"",
            );
        }
        if self.description.trim().is_empty() {
            diag.warn(Self::FIELDS.description, "site description is empty");
        }

        let assets = AssetRefChecker::new(&self.root);
        if let Some(icon) = &self.icon {
            assets.check(icon, Self::FIELDS.icon, &mut diag);
        }
        if let Some(logo) = &self.logo {
            logo.validate(&assets, &mut diag);
        }

        self.theme_config.validate(&mut diag);
        diag
    }

    /// `root` must name an existing directory.
    fn validate_root(&self, diag: &mut ConfigDiagnostics) {
        if self.root.as_os_str().is_empty() {
            diag.error_with_hint(
                Self::FIELDS.root,
                "required field is missing or empty",
                "set the content directory, e.g. root = \"docs\"",
            );
        } else if !self.root.exists() {
            diag.error(
                Self::FIELDS.root,
                format!("directory '{}' does not exist", self.root.display()),
            );
        } else if !self.root.is_dir() {
            diag.error(
                Self::FIELDS.root,
                format!("'{}' is not a directory", self.root.display()),
            );
        }
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse a TOML config with `root` and `title` filled in.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(extra: &str) -> SiteConfig {
    let config = format!("root = \"docs\"\ntitle = \"Test\"\n{extra}");
    let (parsed, ignored) = SiteConfig::parse_with_ignored(&config, ConfigFormat::Toml).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

/// The Pixel Seed documentation site config, in TOML.
#[cfg(test)]
pub const PIXEL_SEED_TOML: &str = r#"
root = "docs"
title = "Pixel Seed 文档"
description = "AI 驱动的像素风游戏生成器 - 完整文档"
icon = "/rspress-icon.png"

[logo]
light = "/rspress-light-logo.png"
dark = "/rspress-dark-logo.png"

[themeConfig]
nav = [
    { text = "首页", link = "/" },
    { text = "快速开始", link = "/guide/" },
    { text = "API 文档", link = "/api/" },
    { text = "架构设计", link = "/architecture/" },
    { text = "产品需求", link = "/prd/" },
    { text = "常见问题", link = "/faq/" },
    { text = "部署指南", link = "/deployment/" },
]
socialLinks = [
    { icon = "github", mode = "link", content = "https://github.com/pixel-seed/pixel-seed" },
]

[[themeConfig.sidebar."/guide/"]]
text = "快速开始"
items = [{ text = "介绍", link = "/guide/" }]

[[themeConfig.sidebar."/api/"]]
text = "API 文档"
items = [{ text = "API 概览", link = "/api/" }]

[[themeConfig.sidebar."/architecture/"]]
text = "架构设计"
items = [{ text = "系统架构", link = "/architecture/" }]

[[themeConfig.sidebar."/prd/"]]
text = "产品需求文档"
items = [{ text = "PRD 概览", link = "/prd/" }]

[[themeConfig.sidebar."/faq/"]]
text = "常见问题"
items = [{ text = "FAQ", link = "/faq/" }]

[[themeConfig.sidebar."/deployment/"]]
text = "部署指南"
items = [{ text = "部署配置", link = "/deployment/" }]

[themeConfig.footer]
message = "Released under the MIT License. Copyright © 2024 Pixel Seed Team"
"#;

// ============================================================================
// tests
// ============================================================================
