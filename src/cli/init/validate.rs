//! Target directory checks before scaffolding.

use anyhow::{Context, Result, bail};
use std::{fs, path::Path};

/// Where `docsite init` writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitMode {
    /// `docsite init`: the working directory, which may only hold dotfiles.
    CurrentDir,
    /// `docsite init <name>`: a directory that must not exist yet.
    NewDir,
}

/// Refuse to scaffold over existing content.
///
/// Dotfiles such as `.git` are tolerated in the working directory so a
/// freshly cloned repository can be initialized in place. The config name
/// must be a bare file name: the starter `root` is relative to it.
pub fn validate_target(root: &Path, mode: InitMode, config_name: &Path) -> Result<()> {
    if config_name.file_name() != Some(config_name.as_os_str()) {
        bail!(
            "'{}' is not a plain file name.\n\
             `docsite init` writes the config at the site root; pass e.g. `-C docsite.json`.",
            config_name.display()
        );
    }

    match mode {
        InitMode::CurrentDir => {
            if root.join(config_name).exists() {
                bail!(
                    "'{}' already exists in this directory.\n\
                     Run `docsite check` to validate it.",
                    config_name.display()
                );
            }
            if let Some(entry) = first_visible_entry(root)? {
                bail!(
                    "Current directory is not empty (found '{}').\n\
                     Use `docsite init <name>` to create in a new subdirectory.",
                    entry
                );
            }
        }
        InitMode::NewDir => {
            if root.exists() {
                bail!(
                    "Directory '{}' already exists.\n\
                     Choose a different name or remove the existing directory.",
                    root.display()
                );
            }
        }
    }
    Ok(())
}

/// Name of the first entry not starting with `.`, if any.
fn first_visible_entry(path: &Path) -> Result<Option<String>> {
    if !path.exists() {
        return Ok(None);
    }
    for entry in fs::read_dir(path)
        .with_context(|| format!("Failed to read directory '{}'", path.display()))?
    {
        let name = entry?.file_name().to_string_lossy().into_owned();
        if !name.starts_with('.') {
            return Ok(Some(name));
        }
    }
    Ok(None)
}
