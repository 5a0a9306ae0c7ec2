//! Configuration section definitions.
//!
//! Each module corresponds to a part of the settings file:
//!
//! | Module  | Key           | Purpose                                   |
//! |---------|---------------|-------------------------------------------|
//! | `asset` | -             | Image reference checks (`icon`, `logo`)   |
//! | `logo`  | `logo`        | Light/dark logo pair                      |
//! | `theme` | `themeConfig` | Nav, sidebar, social links, footer        |

pub mod asset;
mod logo;
pub mod theme;

pub use asset::AssetRefChecker;
pub use logo::LogoConfig;
pub use theme::{FooterConfig, NavItem, Sidebar, SidebarGroup, SidebarItem, ThemeConfig};
