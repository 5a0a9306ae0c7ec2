//! Image reference checks shared by `icon` and `logo`.

use std::path::{Path, PathBuf};

use crate::config::util::{is_http_url, is_site_path};
use crate::config::{ConfigDiagnostics, FieldPath};

/// Directory under the content root that the renderer serves verbatim.
pub const PUBLIC_DIR: &str = "public";

/// Validates image references such as `/logo-light.png` or `https://cdn/x.svg`.
///
/// Site paths are looked up under `<root>/public/` when the content root
/// exists on disk; a missing file is a warning since the renderer may
/// still resolve it from elsewhere.
pub struct AssetRefChecker {
    public_dir: Option<PathBuf>,
}

impl AssetRefChecker {
    pub fn new(root: &Path) -> Self {
        let public_dir = root.is_absolute().then(|| root.join(PUBLIC_DIR));
        Self {
            public_dir: public_dir.filter(|dir| dir.is_dir()),
        }
    }

    /// A checker that never touches the filesystem.
    #[cfg(test)]
    pub fn detached() -> Self {
        Self { public_dir: None }
    }

    pub fn check(&self, reference: &str, field: FieldPath, diag: &mut ConfigDiagnostics) {
        let reference = reference.trim();

        if reference.is_empty() {
            diag.error(field, "image reference is empty");
            return;
        }

        if is_site_path(reference) {
            if let Some(public_dir) = &self.public_dir {
                let file = public_dir.join(reference.trim_start_matches('/'));
                if !file.exists() {
                    diag.warn(
                        field,
                        format!("'{}' not found under {}/", reference, PUBLIC_DIR),
                    );
                }
            }
            return;
        }

        if !is_http_url(reference) {
            diag.error_with_hint(
                field,
                format!("'{}' is neither a site path nor an http(s) URL", reference),
                "use a path like \"/logo.png\" or a URL like \"https://example.com/logo.png\"",
            );
        }
    }
}
