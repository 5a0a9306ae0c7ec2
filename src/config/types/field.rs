//! Type-safe config field path.

use owo_colors::{OwoColorize, Stream::Stderr};
use std::borrow::Cow;
use std::fmt;

/// A dotted path to a config field, as written in the settings file.
///
/// Static paths come from `#[derive(Config)]`; paths into sequences and
/// maps are built at the call site with [`index`](Self::index),
/// [`key`](Self::key) and [`join`](Self::join).
///
/// # Example
///
/// ```ignore
/// #[derive(Config)]
/// #[serde(rename_all = "camelCase")]
/// #[config(section = "themeConfig")]
/// pub struct ThemeConfig {
///     pub nav: Vec<NavItem>,
/// }
///
/// // themeConfig.nav[2].link
/// let path = ThemeConfig::FIELDS.nav.index(2).join(&NavItem::FIELDS.link);
/// diag.error(path, "must start with `/`");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldPath(Cow<'static, str>);

impl FieldPath {
    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(Cow::Borrowed(path))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Path to the `i`-th element of a sequence field.
    pub fn index(&self, i: usize) -> Self {
        Self(Cow::Owned(format!("{}[{}]", self.0, i)))
    }

    /// Path to the entry `key` of a map field. Keys are quoted.
    pub fn key(&self, key: &str) -> Self {
        Self(Cow::Owned(format!("{}.\"{}\"", self.0, key)))
    }

    /// Append a relative child path.
    pub fn join(&self, child: &FieldPath) -> Self {
        match (self.0.is_empty(), child.0.is_empty()) {
            (true, _) => child.clone(),
            (_, true) => self.clone(),
            _ => Self(Cow::Owned(format!("{}.{}", self.0, child.0))),
        }
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let quoted = format!("`{}`", self.0);
        write!(f, "{}", quoted.if_supports_color(Stderr, |t| t.bright_blue()))
    }
}

impl AsRef<str> for FieldPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
