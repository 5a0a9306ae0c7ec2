//! Settings file formats.
//!
//! TOML is the native format; JSON matches what the site renderer reads.
//! The format is picked from the file extension.

use super::ConfigError;
use clap::ValueEnum;
use serde::{Serialize, de::DeserializeOwned};
use std::path::Path;

/// Supported settings file formats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ConfigFormat {
    #[default]
    Toml,
    Json,
}

impl ConfigFormat {
    /// Detect format from extension: `.json` is JSON, anything else TOML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case(Self::Json.extension()) => Self::Json,
            _ => Self::Toml,
        }
    }

    /// Canonical file extension.
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Toml => "toml",
            Self::Json => "json",
        }
    }

    /// Deserialize, reporting every key that no field consumed via `on_ignored`.
    pub fn parse_with<T, F>(self, content: &str, on_ignored: F) -> Result<T, ConfigError>
    where
        T: DeserializeOwned,
        F: FnMut(serde_ignored::Path),
    {
        match self {
            Self::Toml => {
                let deserializer = toml::Deserializer::new(content);
                Ok(serde_ignored::deserialize(deserializer, on_ignored)?)
            }
            Self::Json => {
                let mut deserializer = serde_json::Deserializer::from_str(content);
                let value = serde_ignored::deserialize(&mut deserializer, on_ignored)?;
                deserializer.end()?;
                Ok(value)
            }
        }
    }

    /// Serialize in a human-friendly layout, always ending with a newline.
    pub fn serialize<T: Serialize>(self, value: &T) -> Result<String, ConfigError> {
        let mut out = match self {
            Self::Toml => toml::to_string_pretty(value)?,
            Self::Json => serde_json::to_string_pretty(value)?,
        };
        if !out.ends_with('\n') {
            out.push('\n');
        }
        Ok(out)
    }
}
