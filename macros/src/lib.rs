//! Proc macros for docsite.
//!
//! # Config derive macro
//!
//! Generates compile-time checked field paths for diagnostics.
//!
//! ```ignore
//! #[derive(Serialize, Deserialize, Config)]
//! #[serde(rename_all = "camelCase")]
//! #[config(section = "themeConfig")]
//! pub struct ThemeConfig {
//!     pub nav: Vec<NavItem>,
//!     pub social_links: Vec<SocialLink>,
//!
//!     #[config(skip)]
//!     pub internal: String,
//! }
//!
//! // Generates:
//! // - ThemeConfig::FIELDS.nav          -> FieldPath("themeConfig.nav")
//! // - ThemeConfig::FIELDS.social_links -> FieldPath("themeConfig.socialLinks")
//! //! ```
//!
//! # Attributes
//!
//! Struct-level:
//! - `#[config(section = "path")]` - dotted section path (`""` for the root
//!   and for sequence elements, which are joined at the call site)
//! - `#[serde(rename_all = "...")]` - applied to field names
//!
//! Field-level:
//! - `#[config(skip)]` / `#[serde(skip)]` - no field path
//! - `#[config(name = "x")]` / `#[serde(rename = "x")]` - custom field name
//!
//! # Section inference
//!
//! Without `section` attribute, inferred from struct name:
//! - `FooterConfig` → `footer`
//! - `SidebarGroup` → `sidebar_group`

mod config;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Derive macro that generates FIELDS.
#[proc_macro_derive(Config, attributes(config))]
pub fn derive_config(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    config::derive(&input).into()
}
