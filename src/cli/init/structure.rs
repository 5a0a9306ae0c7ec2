//! Content directory structure creation.

use anyhow::{Context, Result};
use std::{fs, path::Path};

use crate::config::section::asset::PUBLIC_DIR;

/// Content root written into the starter config.
pub const CONTENT_DIR: &str = "docs";

/// Pages matching the starter nav.
const PAGES: &[(&str, &str)] = &[
    ("index.md", "# My Docs\n\nWelcome.\n"),
    ("guide/index.md", "# Introduction\n\nStart here.\n"),
];

/// Create the content tree at the given root.
///
/// The root directory is created if it doesn't exist. Existing pages are kept.
pub fn create_structure(root: &Path) -> Result<()> {
    let content = root.join(CONTENT_DIR);

    for dir in [content.join(PUBLIC_DIR), content.join("guide")] {
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create directory '{}'", dir.display()))?;
    }

    for (page, body) in PAGES {
        let path = content.join(page);
        if !path.exists() {
            fs::write(&path, body)
                .with_context(|| format!("Failed to write '{}'", path.display()))?;
        }
    }

    Ok(())
}
