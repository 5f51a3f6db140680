/// Static page content around the rendering surface
use serde::Serialize;

use crate::config::PageConfig;
use crate::error::{Error, Result};
use crate::projection::CameraConfig;

/// Page background behind the canvas (gray-900)
pub const PAGE_BACKGROUND: &str = "#111827";

/// Vertical offset of the logo image above the page middle, in CSS pixels
pub const LOGO_OFFSET_PX: u32 = 300;

/// Social icon color at rest and on hover (gray-400)
pub const ICON_COLOR: &str = "#ffffff";
pub const ICON_HOVER_COLOR: &str = "#9ca3af";

/// Rendered edge length of a social icon
pub const ICON_SIZE: &str = "1.5rem";

/// Brand glyph drawn inside a social link, as a single SVG path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialIcon {
    pub view_box: &'static str,
    pub path: &'static str,
}

impl SocialIcon {
    /// Inline `<svg>` filled with the link's current text color
    pub fn svg(&self) -> String {
        format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="{}" width="{ICON_SIZE}" height="{ICON_SIZE}" fill="currentColor" aria-hidden="true"><path d="{}"/></svg>"#,
            self.view_box, self.path
        )
    }
}

const GITHUB_ICON: SocialIcon = SocialIcon {
    view_box: "0 0 24 24",
    path: "M12 2a10 10 0 0 0-3.2 19.5c.5.1.7-.2.7-.5v-1.7c-2.8.6-3.4-1.3-3.4-1.3-.5-1.2-1.1-1.5-1.1-1.5-.9-.6.1-.6.1-.6 1 .1 1.5 1 1.5 1 .9 1.5 2.4 1.1 2.9.8.1-.6.4-1.1.6-1.3-2.2-.3-4.6-1.1-4.6-5 0-1.1.4-2 1-2.7-.1-.3-.4-1.3.1-2.7 0 0 .8-.3 2.7 1a9.4 9.4 0 0 1 5 0c1.9-1.3 2.7-1 2.7-1 .5 1.4.2 2.4.1 2.7.6.7 1 1.6 1 2.7 0 3.9-2.4 4.7-4.6 5 .4.3.7.9.7 1.9v2.8c0 .3.2.6.7.5A10 10 0 0 0 12 2Z",
};

const TELEGRAM_ICON: SocialIcon = SocialIcon {
    view_box: "0 0 24 24",
    path: "M12 2a10 10 0 1 0 0 20 10 10 0 0 0 0-20Zm4.6 6.8-1.6 7.7c-.1.5-.4.7-.9.4l-2.5-1.8-1.2 1.2c-.1.1-.3.2-.5.2l.2-2.6 4.7-4.3c.2-.2 0-.3-.3-.1l-5.8 3.7-2.5-.8c-.5-.2-.5-.5.1-.8l9.8-3.8c.4-.1.8.1.5 1Z",
};

const TWITTER_ICON: SocialIcon = SocialIcon {
    view_box: "0 0 24 24",
    path: "M23 4.6a9 9 0 0 1-2.6.7 4.5 4.5 0 0 0 2-2.5 9 9 0 0 1-2.9 1.1 4.5 4.5 0 0 0-7.7 4.1A12.8 12.8 0 0 1 1.5 3.3a4.5 4.5 0 0 0 1.4 6 4.5 4.5 0 0 1-2-.6v.1a4.5 4.5 0 0 0 3.6 4.4 4.5 4.5 0 0 1-2 .1 4.5 4.5 0 0 0 4.2 3.1A9 9 0 0 1 0 18.3a12.8 12.8 0 0 0 6.9 2c8.3 0 12.8-6.9 12.8-12.8v-.6A9.1 9.1 0 0 0 23 4.6Z",
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialKind {
    Github,
    Telegram,
    Twitter,
}

impl SocialKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Github => "GitHub",
            Self::Telegram => "Telegram",
            Self::Twitter => "Twitter",
        }
    }

    pub fn icon(&self) -> SocialIcon {
        match self {
            Self::Github => GITHUB_ICON,
            Self::Telegram => TELEGRAM_ICON,
            Self::Twitter => TWITTER_ICON,
        }
    }
}

/// Outbound link rendered as an icon; opens in a new tab
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SocialLink {
    pub kind: SocialKind,
    pub href: String,
}

impl SocialLink {
    pub const TARGET: &'static str = "_blank";
    pub const REL: &'static str = "noopener noreferrer";
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogoImage {
    pub src: String,
    pub alt: String,
}

/// Overlay elements plus the canvas camera the page mounts
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageShell {
    pub links: Vec<SocialLink>,
    pub logo: LogoImage,
    pub camera: CameraConfig,
}

impl PageShell {
    pub fn new(config: &PageConfig) -> Self {
        let link = |kind, href: &str| SocialLink {
            kind,
            href: href.to_string(),
        };

        Self {
            links: vec![
                link(SocialKind::Github, &config.github_url),
                link(SocialKind::Telegram, &config.telegram_url),
                link(SocialKind::Twitter, &config.twitter_url),
            ],
            logo: LogoImage {
                src: config.logo_src.clone(),
                alt: config.logo_alt.clone(),
            },
            camera: CameraConfig::default(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(Error::Encode)
    }

    /// One-line text rendition of the overlay for non-graphical front ends
    pub fn caption(&self) -> String {
        let links: Vec<String> = self
            .links
            .iter()
            .map(|link| format!("{}: {}", link.kind.label(), link.href))
            .collect();
        format!("[{}] {}", self.logo.alt, links.join(" | "))
    }
}

/// Where a page view is in its mount sequence: built, first frame handed over, device attached
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lifecycle {
    #[default]
    Detached,
    Mounted,
    Attached,
}

impl Lifecycle {
    /// Move to `Mounted`. False if the page was already mounted.
    pub fn mount(&mut self) -> bool {
        if *self != Self::Detached {
            return false;
        }
        *self = Self::Mounted;
        true
    }

    /// Move to `Attached` after the first frame. False unless freshly mounted.
    pub fn attach(&mut self) -> bool {
        if *self != Self::Mounted {
            return false;
        }
        *self = Self::Attached;
        true
    }

    pub fn is_mounted(&self) -> bool {
        *self != Self::Detached
    }
}

impl Default for PageShell {
    fn default() -> Self {
        Self::new(&PageConfig::default())
    }
}
