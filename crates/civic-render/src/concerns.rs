//! Concerns page rendering.
//!
//! The page has a header, a news sources section, a grid of concern cards
//! sorted by `order`, and a "Last updated" footer when the document carries
//! metadata. Each concern card links to the officials page filtered to the
//! concern's relevant officials.

use crate::node::{Element, Node};
use chrono::{DateTime, NaiveDate};
use civic_core::{Concern, ConcernsDocument, NewsSource, contact_officials_url};
use std::ops::Range;

/// News sources shown per page in the mobile carousel.
pub const SOURCES_PER_PAGE: usize = 3;

/// How the news sources section is laid out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NewsLayout {
    /// Every source in one grid.
    #[default]
    Grid,
    /// Pages of [`SOURCES_PER_PAGE`] sources with prev/next controls.
    Carousel,
}

// ============================================================================
// NewsCarousel
// ============================================================================

/// Paging state for the mobile news carousel. Paging wraps around.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewsCarousel {
    total_sources: usize,
    page: usize,
}

impl NewsCarousel {
    /// A carousel over `total_sources` sources, on the first page.
    pub fn new(total_sources: usize) -> Self {
        Self {
            total_sources,
            page: 0,
        }
    }

    /// Number of pages; at least one.
    pub fn total_pages(&self) -> usize {
        self.total_sources.div_ceil(SOURCES_PER_PAGE).max(1)
    }

    /// Zero-based current page.
    pub fn page(&self) -> usize {
        self.page
    }

    /// Advance one page, wrapping to the first.
    pub fn next(&mut self) {
        self.page = (self.page + 1) % self.total_pages();
    }

    /// Go back one page, wrapping to the last.
    pub fn prev(&mut self) {
        let total = self.total_pages();
        self.page = (self.page + total - 1) % total;
    }

    /// Indices of the sources on the current page.
    pub fn visible(&self) -> Range<usize> {
        let start = (self.page * SOURCES_PER_PAGE).min(self.total_sources);
        let end = (start + SOURCES_PER_PAGE).min(self.total_sources);
        start..end
    }

    /// Page indicator text: `"1/3"`.
    pub fn indicator(&self) -> String {
        format!("{}/{}", self.page + 1, self.total_pages())
    }
}

// ============================================================================
// News sources
// ============================================================================

/// Render one news source as an outbound logo link.
pub fn render_news_source(source: &NewsSource) -> Element {
    Element::new("a")
        .with_attr("href", source.url.as_str())
        .with_class("news-source")
        .with_attr("target", "_blank")
        .with_attr("rel", "noopener noreferrer")
        .with_attr("aria-label", format!("Visit {} website", source.name))
        .with_child(
            Element::new("img")
                .with_attr("src", source.logo_url.as_str())
                .with_attr("alt", format!("{} logo", source.name))
                .with_class("news-source-logo"),
        )
        .with_child(
            Element::new("span")
                .with_class("news-source-name")
                .with_text(source.name.as_str()),
        )
}

/// Render the news sources section.
///
/// With [`NewsLayout::Carousel`], only the page selected by `carousel` is
/// shown, and navigation appears when there is more than one page.
pub fn render_news_sources(
    sources: &[NewsSource],
    layout: NewsLayout,
    carousel: &NewsCarousel,
) -> Element {
    let (class, visible) = match layout {
        NewsLayout::Grid => ("news-sources-grid", 0..sources.len()),
        NewsLayout::Carousel => ("news-sources-carousel", carousel.visible()),
    };

    let mut container = Element::new("div")
        .with_class("news-sources-container")
        .with_child(
            Element::new("h2")
                .with_class("section-title")
                .with_text("WHAT'S HAPPENING RIGHT NOW"),
        )
        .with_child(
            Element::new("p")
                .with_class("section-subtitle")
                .with_text("Stay informed with coverage from multiple perspectives"),
        )
        .with_child(
            Element::new("div")
                .with_class(class)
                .with_children(
                    sources
                        .get(visible)
                        .unwrap_or_default()
                        .iter()
                        .map(render_news_source),
                ),
        );

    if layout == NewsLayout::Carousel && carousel.total_pages() > 1 {
        container.push(
            Element::new("div")
                .with_class("news-sources-navigation")
                .with_child(nav_button("<", "Previous page", "prev"))
                .with_child(
                    Element::new("span")
                        .with_class("page-indicator")
                        .with_text(carousel.indicator()),
                )
                .with_child(nav_button(">", "Next page", "next")),
        );
    }
    container
}

fn nav_button(text: &str, label: &str, direction: &str) -> Element {
    Element::new("button")
        .with_attr("type", "button")
        .with_class("nav-button")
        .with_attr("aria-label", label)
        .with_attr("data-direction", direction)
        .with_text(text)
}

// ============================================================================
// Concern cards
// ============================================================================

/// Render one concern card.
pub fn render_concern_card(concern: &Concern) -> Element {
    let mut card = Element::new("div").with_class(if concern.is_rotating {
        "concern-card rotating"
    } else {
        "concern-card"
    });

    if concern.is_rotating {
        card.push(
            Element::new("div")
                .with_class("rotating-badge")
                .with_text("Current Issue"),
        );
    }

    card.push(
        Element::new("h3")
            .with_class("concern-title")
            .with_text(concern.title.as_str()),
    );
    if let Some(subtitle) = concern.subtitle.as_deref().filter(|s| !s.trim().is_empty()) {
        card.push(
            Element::new("h4")
                .with_class("concern-subtitle")
                .with_text(subtitle),
        );
    }
    card.push(
        Element::new("p")
            .with_class("concern-description")
            .with_text(concern.description.as_str()),
    );

    if !concern.related_links.is_empty() {
        let items = concern.related_links.iter().map(|link| {
            let mut anchor = Element::new("a")
                .with_attr("href", link.url.as_str())
                .with_attr("target", "_blank")
                .with_attr("rel", "noopener noreferrer")
                .with_class("concern-link")
                .with_text(link.title.as_str());
            if let Some(source) = link.source.as_deref() {
                anchor.push(
                    Element::new("span")
                        .with_class("link-source")
                        .with_text(format!(" ({source})")),
                );
            }
            Element::new("li").with_child(anchor)
        });
        card.push(
            Element::new("div")
                .with_class("concern-links")
                .with_child(
                    Element::new("h5")
                        .with_class("links-heading")
                        .with_text("Related Resources:"),
                )
                .with_child(Element::new("ul").with_class("links-list").with_children(items)),
        );
    }

    card.with_child(
        Element::new("a")
            .with_class("contact-button")
            .with_attr("href", contact_officials_url(concern))
            .with_attr("role", "button")
            .with_attr(
                "aria-label",
                format!("Contact officials about {}", concern.title),
            )
            .with_text("CONTACT OFFICIALS"),
    )
}

// ============================================================================
// Page
// ============================================================================

/// Render the whole concerns page.
pub fn render_concerns_page(document: &ConcernsDocument, layout: NewsLayout) -> Node {
    let mut page = Element::new("div").with_class("concerns-page").with_child(
        Element::new("header")
            .with_class("concerns-header")
            .with_child(
                Element::new("h1")
                    .with_class("concerns-title")
                    .with_text("YOUR CONCERNS"),
            )
            .with_child(
                Element::new("p")
                    .with_class("concerns-subtitle")
                    .with_text("Your voice matters in our democracy"),
            ),
    );

    if !document.news_sources.is_empty() {
        let carousel = NewsCarousel::new(document.news_sources.len());
        page.push(
            Element::new("section")
                .with_class("news-sources-section")
                .with_child(render_news_sources(&document.news_sources, layout, &carousel)),
        );
    }

    let cards = document.sorted_concerns().into_iter().map(|concern| {
        Element::new("div")
            .with_class("concern-card-wrapper")
            .with_child(render_concern_card(concern))
    });
    page.push(
        Element::new("section")
            .with_class("concerns-section")
            .with_child(Element::new("div").with_class("concerns-grid").with_children(cards)),
    );

    if let Some(metadata) = &document.metadata {
        page.push(
            Element::new("footer").with_class("concerns-footer").with_child(
                Element::new("p")
                    .with_class("last-updated")
                    .with_text(format!(
                        "Last updated: {}",
                        format_last_updated(&metadata.last_updated)
                    )),
            ),
        );
    }

    page.into()
}

/// Format a `lastUpdated` value as `M/D/YYYY`.
///
/// Accepts RFC 3339 timestamps and plain `YYYY-MM-DD` dates; anything else
/// is returned unchanged.
///
/// ```
/// use civic_render::concerns::format_last_updated;
///
/// assert_eq!(format_last_updated("2025-03-07"), "3/7/2025");
/// assert_eq!(format_last_updated("2025-10-10T14:30:00Z"), "10/10/2025");
/// assert_eq!(format_last_updated("last week"), "last week");
/// ```
pub fn format_last_updated(raw: &str) -> String {
    let raw = raw.trim();
    let date = DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.date_naive())
        .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"));
    match date {
        Ok(date) => date.format("%-m/%-d/%Y").to_string(),
        Err(_) => raw.to_string(),
    }
}
