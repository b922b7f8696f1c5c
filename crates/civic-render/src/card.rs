//! Official contact cards.
//!
//! A card is a header (name, title, party badge) followed by contact rows in
//! a fixed order: state, email, phone, office, website, social profiles,
//! appointment. Rows whose field is absent or blank are left out.
//!
//! Rendering is a pure function of the record. The phone row carries the
//! dial URI as its `href` plus `data-dial`/`data-number` attributes that a
//! host adapter hands to [`PhoneDispatcher`](crate::dispatch::PhoneDispatcher).

use crate::icons::ContactKind;
use crate::node::{Element, Node};
use crate::social::SocialLinkRenderer;
use civic_core::Official;
use civic_core::official::present;

/// Parties with a dedicated badge style.
pub const KNOWN_PARTIES: [&str; 5] = [
    "democratic",
    "republican",
    "independent",
    "conservative",
    "liberal",
];

/// Badge class for a party label: `party-{lowercased}` for known parties,
/// `party-default` otherwise.
pub fn party_class(party: &str) -> String {
    let lowered = party.trim().to_lowercase();
    if KNOWN_PARTIES.contains(&lowered.as_str()) {
        format!("party-{lowered}")
    } else {
        "party-default".to_string()
    }
}

/// Renders [`Official`] records as contact cards.
#[derive(Debug, Clone, Default)]
pub struct CardRenderer {
    social: SocialLinkRenderer,
}

impl CardRenderer {
    /// Create a card renderer using `social` for profile rows.
    pub fn new(social: SocialLinkRenderer) -> Self {
        Self { social }
    }

    /// Render a card, or nothing when there is no record.
    pub fn render(&self, official: Option<&Official>) -> Option<Node> {
        let official = official?;
        let card = Element::new("div")
            .with_class("official-card")
            .with_attr("role", "article")
            .with_attr(
                "aria-label",
                format!("Contact information for {}", official.name),
            )
            .with_child(self.header(official))
            .with_child(self.details(official));
        Some(card.into())
    }

    fn header(&self, official: &Official) -> Element {
        let names = Element::new("div")
            .with_child(
                Element::new("div")
                    .with_class("official-name")
                    .with_text(official.name.as_str()),
            )
            .with_child(
                Element::new("div")
                    .with_class("official-title")
                    .with_text(official.display_title()),
            );

        let mut header = Element::new("div")
            .with_class("official-header")
            .with_child(names);
        if let Some(party) = present(&official.party) {
            header.push(
                Element::new("span")
                    .with_class(format!("party-badge {}", party_class(party)))
                    .with_text(party),
            );
        }
        header
    }

    fn details(&self, official: &Official) -> Element {
        let mut details = Element::new("div").with_class("official-details");

        for kind in ContactKind::STANDARD {
            if let Some(value) = field(official, kind) {
                details.push(contact_row(kind, value, official));
            }
        }

        if !official.social_media.is_empty() {
            details.push(self.social_row(official));
        }

        if let Some(appointment) = official.appointment() {
            details.push(
                Element::new("div")
                    .with_class("contact-item appointment-item")
                    .with_child(Element::new("strong").with_text("Appointed:"))
                    .with_text(format!(" {appointment}")),
            );
        }

        details
    }

    fn social_row(&self, official: &Official) -> Element {
        let row = Element::new("div")
            .with_class("contact-item social-media-item")
            .with_attr(
                "aria-label",
                format!("Social media profiles for {}", official.name),
            )
            .with_child(ContactKind::Social.icon());

        match self.social.render(&official.social_media) {
            Some(links) => row.with_child(links),
            None => row.with_text("Social Media"),
        }
    }
}

/// Render a card with default social options.
///
/// ```rust
/// use civic_core::Official;
/// use civic_render::card::render_official_card;
///
/// assert!(render_official_card(None).is_none());
///
/// let official = Official::new("Jon Ossoff", "Senator").with_phone("202-224-3521");
/// let html = render_official_card(Some(&official)).unwrap().to_html();
/// assert!(html.contains(r#"href="tel:+12022243521""#));
/// ```
pub fn render_official_card(official: Option<&Official>) -> Option<Node> {
    CardRenderer::default().render(official)
}

fn field(official: &Official, kind: ContactKind) -> Option<&str> {
    match kind {
        ContactKind::State => present(&official.state),
        ContactKind::Email => present(&official.email),
        ContactKind::Phone => present(&official.phone),
        ContactKind::Office => present(&official.office),
        ContactKind::Website => present(&official.website),
        ContactKind::Social | ContactKind::Appointment => None,
    }
}

fn contact_row(kind: ContactKind, value: &str, official: &Official) -> Element {
    Element::new("div")
        .with_class(format!("contact-item {}-item", kind.slug()))
        .with_child(kind.icon())
        .with_child(contact_content(kind, value, official))
}

fn contact_content(kind: ContactKind, value: &str, official: &Official) -> Node {
    match kind {
        ContactKind::Email => Element::new("a")
            .with_attr("href", format!("mailto:{value}"))
            .with_attr("aria-label", format!("Send email to {}", official.name))
            .with_text(value)
            .into(),
        ContactKind::Phone => {
            let dial = civic_core::dial_uri(value);
            Element::new("a")
                .with_class("phone-link")
                .with_attr("href", dial.as_str())
                .with_attr("data-dial", dial.as_str())
                .with_attr("data-number", value)
                .with_attr("title", format!("Click to call {value}"))
                .with_attr("aria-label", format!("Call {} at {value}", official.name))
                .with_text(value)
                .into()
        }
        ContactKind::Website => Element::new("a")
            .with_attr("href", value)
            .with_attr("target", "_blank")
            .with_attr("rel", "noopener noreferrer")
            .with_attr(
                "aria-label",
                format!("Visit {}'s official website", official.name),
            )
            .with_text("Official Website")
            .into(),
        _ => Node::text(value),
    }
}
