//! `themeConfig.footer` configuration.

use macros::Config;
use serde::{Deserialize, Serialize};

use crate::config::ConfigDiagnostics;

/// Page footer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "themeConfig.footer")]
pub struct FooterConfig {
    /// Text shown at the bottom of every page.
    pub message: String,
}

impl FooterConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.message.trim().is_empty() {
            diag.error_with_hint(
                Self::FIELDS.message,
                "footer message is empty",
                "set a message or remove the footer table",
            );
        }
    }
}
