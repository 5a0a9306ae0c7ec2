//! `docsite export`: write the validated config in the renderer's shape.

use anyhow::{Context, Result};
use std::{fs, io::Write, path::Path};

use super::ExportArgs;
use crate::config::SiteConfig;
use crate::log;

/// Serialize `config` and write it to `args.output`, or stdout.
pub fn export_config(config: &SiteConfig, args: &ExportArgs) -> Result<()> {
    let content = config.emit(args.format)?;

    match &args.output {
        Some(path) => {
            write_export(path, &content)?;
            log!("export"; "wrote {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(content.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}

/// Write export output, creating parent directories as needed.
fn write_export(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory '{}'", parent.display()))?;
    }
    fs::write(path, content)
        .with_context(|| format!("Failed to write export file '{}'", path.display()))
}
