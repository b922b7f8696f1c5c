//! Social profile link rendering.
//!
//! Turns a [`SocialHandles`] map into a row of outbound profile links. Only
//! registered platforms with a non-blank handle produce a link, capped at
//! [`RenderOptions::max_links`] and kept in the map's order.
//!
//! # Example
//!
//! ```rust
//! use civic_core::SocialHandles;
//! use civic_render::social::SocialLinkRenderer;
//!
//! let handles: SocialHandles = [("twitter", "SenOssoff"), ("facebook", "SenOssoff")]
//!     .into_iter()
//!     .collect();
//! let links = SocialLinkRenderer::default().links(&handles);
//!
//! assert_eq!(links.len(), 2);
//! assert_eq!(links[0].url, "https://twitter.com/SenOssoff");
//! assert_eq!(links[1].url, "https://facebook.com/SenOssoff");
//! ```

use crate::node::{Element, Node};
use civic_core::config::SocialSection;
use civic_core::social::LinkStyle;
use civic_core::{SocialHandles, SocialPlatform};

/// Options controlling how links are drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Show the platform glyph.
    pub show_icons: bool,
    /// Show the platform name.
    pub show_labels: bool,
    /// Row layout.
    pub style: LinkStyle,
    /// Maximum number of links.
    pub max_links: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            show_icons: true,
            show_labels: false,
            style: LinkStyle::Horizontal,
            max_links: 6,
        }
    }
}

impl From<&SocialSection> for RenderOptions {
    fn from(section: &SocialSection) -> Self {
        Self {
            show_icons: section.show_icons,
            show_labels: section.show_labels,
            style: section.style,
            max_links: section.max_links,
        }
    }
}

/// A resolved profile link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocialLink {
    /// Target platform.
    pub platform: SocialPlatform,
    /// Handle as written in the data.
    pub handle: String,
    /// Profile URL.
    pub url: String,
}

/// Renders handle maps as rows of profile links.
#[derive(Debug, Clone, Default)]
pub struct SocialLinkRenderer {
    options: RenderOptions,
}

impl SocialLinkRenderer {
    /// Create a renderer with the given options.
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// The options in use.
    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Resolve the links that would be rendered, without building nodes.
    pub fn links(&self, handles: &SocialHandles) -> Vec<SocialLink> {
        handles
            .platforms()
            .take(self.options.max_links)
            .map(|(platform, handle)| SocialLink {
                platform,
                handle: handle.to_string(),
                url: platform.profile_url(handle),
            })
            .collect()
    }

    /// Render the link row.
    ///
    /// Returns `None` when no link survives filtering, so callers can show
    /// fallback text instead of an empty container.
    pub fn render(&self, handles: &SocialHandles) -> Option<Node> {
        let links = self.links(handles);
        if links.is_empty() {
            return None;
        }

        let container = Element::new("div")
            .with_class(format!(
                "social-media-links social-media-links--{}",
                self.options.style.as_str()
            ))
            .with_attr("role", "list")
            .with_attr("aria-label", "Social media profiles")
            .with_children(links.iter().map(|link| self.link_element(link)));
        Some(container.into())
    }

    fn link_element(&self, link: &SocialLink) -> Element {
        let info = link.platform.info();
        let mut element = Element::new("a")
            .with_attr("href", link.url.as_str())
            .with_attr("target", "_blank")
            .with_attr("rel", "noopener noreferrer")
            .with_class("social-link")
            .with_attr("role", "listitem")
            .with_attr("aria-label", format!("{} profile", info.name))
            .with_attr("title", format!("Follow on {}", info.name))
            .with_attr("style", format!("color: {}", info.color));

        if self.options.show_icons {
            element.push(
                Element::new("span")
                    .with_class("social-icon")
                    .with_attr("aria-hidden", "true")
                    .with_text(info.icon),
            );
        }
        if self.options.show_labels {
            element.push(Element::new("span").with_class("social-label").with_text(info.name));
        }
        if !self.options.show_icons && !self.options.show_labels {
            element.push(info.icon);
        }
        element
    }
}
