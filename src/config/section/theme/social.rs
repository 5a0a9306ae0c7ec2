//! `themeConfig.socialLinks` entries.

use macros::Config;
use serde::{Deserialize, Serialize};

use crate::config::util::{is_http_url, is_site_path};
use crate::config::{ConfigDiagnostics, FieldPath};

/// How the renderer presents a social link.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialLinkMode {
    /// Icon links to `content` (a URL).
    #[default]
    Link,
    /// Hovering shows `content` as text.
    Text,
    /// Hovering shows the image at `content`.
    Img,
    /// Hovering shows `content` as raw HTML.
    Dom,
}

impl SocialLinkMode {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Link => "link",
            Self::Text => "text",
            Self::Img => "img",
            Self::Dom => "dom",
        }
    }
}

/// A social icon shown in the site header.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "")]
pub struct SocialLink {
    /// Icon identifier, e.g. `github`.
    pub icon: String,
    pub mode: SocialLinkMode,
    /// Target; its meaning depends on `mode`.
    pub content: String,
}

impl SocialLink {
    pub fn validate(&self, path: &FieldPath, diag: &mut ConfigDiagnostics) {
        if self.icon.trim().is_empty() {
            diag.error(path.join(&Self::FIELDS.icon), "social icon is empty");
        }

        let content = path.join(&Self::FIELDS.content);
        if self.content.trim().is_empty() {
            diag.error(content, "social link content is empty");
            return;
        }

        match self.mode {
            SocialLinkMode::Link if !is_http_url(&self.content) => diag.error_with_hint(
                content,
                format!("'{}' is not an http(s) URL", self.content),
                "mode \"link\" needs a URL like \"https://github.com/org/repo\"",
            ),
            SocialLinkMode::Img if !is_site_path(&self.content) && !is_http_url(&self.content) => {
                diag.error(
                    content,
                    format!("'{}' is neither a site path nor an http(s) URL", self.content),
                )
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validate(link: &SocialLink) -> ConfigDiagnostics {
        let mut diag = ConfigDiagnostics::new();
        link.validate(&FieldPath::new("themeConfig.socialLinks").index(0), &mut diag);
        diag
    }

    fn github() -> SocialLink {
        SocialLink {
            icon: "github".into(),
            mode: SocialLinkMode::Link,
            content: "https://github.com/pixel-seed/pixel-seed".into(),
        }
    }

    #[test]
    fn test_link_mode() {
        assert!(validate(&github()).is_empty());

        let broken = SocialLink {
            content: "github.com/pixel-seed".into(),
            ..github()
        };
        let diag = validate(&broken);
        assert_eq!(diag.len(), 1);
        assert_eq!(
            diag.errors()[0].field.as_str(),
            "themeConfig.socialLinks[0].content"
        );
    }

    #[test]
    fn test_text_mode_accepts_anything() {
        let wechat = SocialLink {
            icon: "wechat".into(),
            mode: SocialLinkMode::Text,
            content: "pixel-seed-team".into(),
        };
        assert!(validate(&wechat).is_empty());
    }

    #[test]
    fn test_img_mode() {
        let qr = SocialLink {
            icon: "qq".into(),
            mode: SocialLinkMode::Img,
            content: "/qrcode.png".into(),
        };
        assert!(validate(&qr).is_empty());

        let bad = SocialLink {
            content: "qrcode.png".into(),
            ..qr
        };
        assert_eq!(validate(&bad).len(), 1);
    }

    #[test]
    fn test_empty_fields() {
        let diag = validate(&SocialLink::default());
        let fields: Vec<_> = diag.errors().iter().map(|e| e.field.as_str()).collect();
        assert_eq!(
            fields,
            ["themeConfig.socialLinks[0].icon", "themeConfig.socialLinks[0].content"]
        );
    }

    #[test]
    fn test_mode_wire_names() {
        assert_eq!(serde_json::to_string(&SocialLinkMode::Dom).unwrap(), "\"dom\"");
        let mode: SocialLinkMode = serde_json::from_str("\"img\"").unwrap();
        assert_eq!(mode.as_str(), "img");
    }
}
