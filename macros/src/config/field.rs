//! Field information structures and parsing.

use crate::config::attr::{get_custom_name, has_attr};
use crate::config::types::apply_rename_rule;

/// Parsed field information.
pub struct FieldInfo {
    pub name: syn::Ident,
    /// Name as it appears in the serialized config.
    pub wire_name: String,
    pub skip: bool,
}

impl FieldInfo {
    /// Parse field info from a syn::Field.
    pub fn from_field(field: &syn::Field, rename_all: Option<&str>) -> Option<Self> {
        let ident = field.ident.as_ref()?;
        let attrs = &field.attrs;

        let raw = ident.to_string();
        let raw = raw.strip_prefix("r#").unwrap_or(&raw);
        let wire_name = get_custom_name(attrs).unwrap_or_else(|| match rename_all {
            Some(rule) => apply_rename_rule(raw, rule),
            None => raw.to_string(),
        });

        Some(Self {
            name: ident.clone(),
            wire_name,
            skip: has_attr(attrs, "config", "skip") || has_attr(attrs, "serde", "skip"),
        })
    }
}
