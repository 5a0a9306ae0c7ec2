//! Attribute parsing helpers for Config derive macro.

use syn::Attribute;
use syn::meta::ParseNestedMeta;

/// Get section name from #[config(section = "xxx")].
pub fn get_section(attrs: &[Attribute]) -> Option<String> {
    get_string_attr(attrs, "config", "section")
}

/// Get rename rule from #[serde(rename_all = "xxx")].
pub fn get_rename_all(attrs: &[Attribute]) -> Option<String> {
    get_string_attr(attrs, "serde", "rename_all")
}

/// Get custom field name from #[config(name = "xxx")] or #[serde(rename = "xxx")].
pub fn get_custom_name(attrs: &[Attribute]) -> Option<String> {
    get_string_attr(attrs, "config", "name").or_else(|| get_string_attr(attrs, "serde", "rename"))
}

/// Get string value from #[ns(key = "value")].
fn get_string_attr(attrs: &[Attribute], ns: &str, key: &str) -> Option<String> {
    for attr in attrs {
        if !attr.path().is_ident(ns) {
            continue;
        }
        let mut value = None;
        let _ = attr.parse_nested_meta(|meta| {
            if meta.path.is_ident(key) && meta.input.peek(syn::Token![=]) {
                let lit: syn::LitStr = meta.value()?.parse()?;
                value = Some(lit.value());
                Ok(())
            } else {
                skip_value(&meta)
            }
        });
        if value.is_some() {
            return value;
        }
    }
    None
}

/// Check if attribute has a flag like #[config(skip)].
pub fn has_attr(attrs: &[Attribute], ns: &str, key: &str) -> bool {
    for attr in attrs {
        if !attr.path().is_ident(ns) {
            continue;
        }
        let mut found = false;
        let _ = attr.parse_nested_meta(|meta| {
            if meta.path.is_ident(key) && !meta.input.peek(syn::Token![=]) {
                found = true;
            }
            skip_value(&meta)
        });
        if found {
            return true;
        }
    }
    false
}

/// Consume `= value` or `(...)` after a nested meta key we don't care about.
fn skip_value(meta: &ParseNestedMeta) -> syn::Result<()> {
    if meta.input.peek(syn::Token![=]) {
        let _: syn::Lit = meta.value()?.parse()?;
    } else if meta.input.peek(syn::token::Paren) {
        meta.parse_nested_meta(|inner| skip_value(&inner))?;
    }
    Ok(())
}
