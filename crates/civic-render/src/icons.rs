//! Contact row kinds and their SVG icons.

use crate::node::Element;

const MAP_PIN: &str = "M12 2C8.13 2 5 5.13 5 9c0 5.25 7 13 7 13s7-7.75 7-13c0-3.87-3.13-7-7-7zm0 9.5c-1.38 0-2.5-1.12-2.5-2.5s1.12-2.5 2.5-2.5 2.5 1.12 2.5 2.5-1.12 2.5-2.5 2.5z";
const ENVELOPE: &str = "M20 4H4c-1.1 0-1.99.9-1.99 2L2 18c0 1.1.89 2 2 2h16c1.1 0 2-.9 2-2V6c0-1.1-.9-2-2-2zm0 4l-8 5-8-5V6l8 5 8-5v2z";
const HANDSET: &str = "M6.62 10.79c1.44 2.83 3.76 5.14 6.59 6.59l2.2-2.2c.27-.27.67-.36 1.02-.24 1.12.37 2.33.57 3.57.57.55 0 1 .45 1 1V20c0 .55-.45 1-1 1-9.39 0-17-7.61-17-17 0-.55.45-1 1-1h3.5c.55 0 1 .45 1 1 0 1.25.2 2.45.57 3.57.11.35.03.74-.25 1.02l-2.2 2.2z";
const CHECK_CIRCLE: &str = "M12 2C6.48 2 2 6.48 2 12s4.48 10 10 10 10-4.48 10-10S17.52 2 12 2zm-2 15l-5-5 1.41-1.41L10 14.17l7.59-7.59L19 8l-9 9z";
const SHARE: &str = "M12 2C6.48 2 2 6.48 2 12s4.48 10 10 10 10-4.48 10-10S17.52 2 12 2zm3.5 6L12 10.5 8.5 8 12 5.5 15.5 8zM8.5 16L12 13.5l3.5 2.5L12 18.5 8.5 16z";

/// The kinds of row a contact card can contain, in card order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactKind {
    /// Two-letter state.
    State,
    /// `mailto:` link.
    Email,
    /// Dial link wired to phone dispatch.
    Phone,
    /// Office location.
    Office,
    /// External website link.
    Website,
    /// Row of social profile links.
    Social,
    /// Judicial appointment line.
    Appointment,
}

impl ContactKind {
    /// Rows rendered from a single optional field, in card order.
    pub const STANDARD: [ContactKind; 5] = [
        ContactKind::State,
        ContactKind::Email,
        ContactKind::Phone,
        ContactKind::Office,
        ContactKind::Website,
    ];

    /// Lowercase name used in CSS classes.
    pub fn slug(&self) -> &'static str {
        match self {
            Self::State => "state",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Office => "office",
            Self::Website => "website",
            Self::Social => "social",
            Self::Appointment => "appointment",
        }
    }

    /// SVG path data for the row icon.
    ///
    /// Kinds without a dedicated glyph use the website icon.
    pub fn icon_path(&self) -> &'static str {
        match self {
            Self::State | Self::Office => MAP_PIN,
            Self::Email => ENVELOPE,
            Self::Phone => HANDSET,
            Self::Social => SHARE,
            _ => CHECK_CIRCLE,
        }
    }

    /// The row icon as an `<svg>` element.
    pub fn icon(&self) -> Element {
        Element::new("svg")
            .with_class("contact-icon")
            .with_attr("viewBox", "0 0 24 24")
            .with_attr("aria-hidden", "true")
            .with_child(Element::new("path").with_attr("d", self.icon_path()))
    }
}
