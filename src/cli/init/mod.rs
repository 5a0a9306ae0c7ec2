//! Site initialization module.
//!
//! Creates a content tree and a starter config that passes `docsite check`.
//!
//! # Module Structure
//!
//! - [`validate`]: Pre-initialization validation
//! - [`structure`]: Content directory creation
//! - [`config`]: Configuration file generation

mod config;
mod structure;
mod validate;

use crate::{cli::Cli, config::ConfigFormat, log};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

pub use validate::InitMode;

/// Create a new site with default structure
///
/// # Steps
/// 1. Validate target directory
/// 2. Create content structure
/// 3. Write config and ignore files
///
/// If `dry_run` is true, only prints the starter config to stdout
pub fn new_site(cli: &Cli, name: Option<&Path>, dry_run: bool) -> Result<()> {
    let format = ConfigFormat::from_path(&cli.config);

    if dry_run {
        print!("{}", config::generate_config(format)?);
        return Ok(());
    }

    let root = resolve_root(name)?;
    let mode = if name.is_some() {
        InitMode::NewDir
    } else {
        InitMode::CurrentDir
    };
    init_at(&root, mode, &cli.config)?;

    log!("init"; "site initialized at {}", root.display());
    Ok(())
}

/// Initialize `root` with a config written to `root/config_name`.
pub fn init_at(root: &Path, mode: InitMode, config_name: &Path) -> Result<()> {
    validate::validate_target(root, mode, config_name)?;

    structure::create_structure(root)?;

    let format = ConfigFormat::from_path(config_name);
    config::write_config(&root.join(config_name), format)?;
    config::write_ignore_files(root)?;
    Ok(())
}

fn resolve_root(name: Option<&Path>) -> Result<PathBuf> {
    let cwd = std::env::current_dir().context("Failed to get current working directory")?;
    Ok(match name {
        Some(name) => cwd.join(name),
        None => cwd,
    })
}
