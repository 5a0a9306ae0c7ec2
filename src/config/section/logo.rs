//! `logo` configuration.
//!
//! # Example
//!
//! ```toml
//! [logo]
//! light = "/rspress-light-logo.png"
//! dark = "/rspress-dark-logo.png"
//! ```

use macros::Config;
use serde::{Deserialize, Serialize};

use super::asset::AssetRefChecker;
use crate::config::ConfigDiagnostics;

/// Logo variants for light and dark color schemes.
///
/// Both variants are optional at parse time so that a half-filled table
/// can be reported instead of rejected by the parser.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "logo")]
pub struct LogoConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub light: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub dark: Option<String>,
}

impl LogoConfig {
    /// Validate the logo pair.
    ///
    /// # Checks
    /// - `light` and `dark` are both set or both omitted
    /// - each set variant is a valid image reference
    pub fn validate(&self, assets: &AssetRefChecker, diag: &mut ConfigDiagnostics) {
        match (&self.light, &self.dark) {
            (Some(_), None) => diag.error_with_hint(
                Self::FIELDS.dark,
                format!("{} is set but {} is missing", Self::FIELDS.light, Self::FIELDS.dark),
                "set both logo variants, or remove the logo table",
            ),
            (None, Some(_)) => diag.error_with_hint(
                Self::FIELDS.light,
                format!("{} is set but {} is missing", Self::FIELDS.dark, Self::FIELDS.light),
                "set both logo variants, or remove the logo table",
            ),
            _ => {}
        }

        if let Some(light) = &self.light {
            assets.check(light, Self::FIELDS.light, diag);
        }
        if let Some(dark) = &self.dark {
            assets.check(dark, Self::FIELDS.dark, diag);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validate(logo: &LogoConfig) -> ConfigDiagnostics {
        let mut diag = ConfigDiagnostics::new();
        logo.validate(&AssetRefChecker::detached(), &mut diag);
        diag
    }

    #[test]
    fn test_both_variants() {
        let logo = LogoConfig {
            light: Some("/rspress-light-logo.png".into()),
            dark: Some("/rspress-dark-logo.png".into()),
        };
        assert!(validate(&logo).is_empty());
    }

    #[test]
    fn test_both_omitted() {
        assert!(validate(&LogoConfig::default()).is_empty());
    }

    #[test]
    fn test_partial_logo_rejected() {
        let only_light = LogoConfig {
            light: Some("/light.png".into()),
            dark: None,
        };
        let diag = validate(&only_light);
        assert_eq!(diag.len(), 1);
        assert_eq!(diag.errors()[0].field.as_str(), "logo.dark");

        let only_dark = LogoConfig {
            light: None,
            dark: Some("/dark.png".into()),
        };
        let diag = validate(&only_dark);
        assert_eq!(diag.len(), 1);
        assert_eq!(diag.errors()[0].field.as_str(), "logo.light");
    }

    #[test]
    fn test_invalid_reference() {
        let logo = LogoConfig {
            light: Some("light.png".into()),
            dark: Some("/dark.png".into()),
        };
        let diag = validate(&logo);
        assert_eq!(diag.len(), 1);
        assert_eq!(diag.errors()[0].field.as_str(), "logo.light");
    }
}
