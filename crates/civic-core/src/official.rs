//! Official contact records and government branches.
//!
//! An [`Official`] is a flat contact record. Only `name` and `title` are
//! required; every other field is optional and renderers must check it
//! before use. Records are read-only once loaded and no uniqueness is
//! enforced: the same person may appear in several collections.

use crate::phone::PhoneNumber;
use crate::social::SocialHandles;
use crate::util::ids::normalize_id;
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Branch
// ============================================================================

/// Branch of government a collection belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Branch {
    /// President, Vice President, Cabinet.
    Executive,
    /// Senate and House.
    Legislative,
    /// Supreme Court.
    Judicial,
}

impl Branch {
    /// Every branch, in page order.
    pub const ALL: [Branch; 3] = [Self::Executive, Self::Legislative, Self::Judicial];

    /// Lowercase slug used for file names and container ids.
    pub fn slug(&self) -> &'static str {
        match self {
            Self::Executive => "executive",
            Self::Legislative => "legislative",
            Self::Judicial => "judicial",
        }
    }

    /// Section heading for the branch.
    pub fn heading(&self) -> &'static str {
        match self {
            Self::Executive => "Executive Branch",
            Self::Legislative => "Legislative Branch",
            Self::Judicial => "Judicial Branch",
        }
    }
}

impl fmt::Display for Branch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.slug())
    }
}

impl std::str::FromStr for Branch {
    type Err = crate::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "executive" => Ok(Self::Executive),
            "legislative" => Ok(Self::Legislative),
            "judicial" => Ok(Self::Judicial),
            other => Err(crate::Error::parse(format!("unknown branch '{other}'"))),
        }
    }
}

// ============================================================================
// Official
// ============================================================================

/// A person holding a government office.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Official {
    /// Explicit identifier; see [`Official::id`] for the derived fallback.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Full display name.
    pub name: String,
    /// Office title ("Senator", "Secretary of Labor", ...).
    pub title: String,
    /// Party or judicial leaning as free text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub party: Option<String>,
    /// Two-letter state code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    /// Congressional district; data tables use numbers or strings.
    #[serde(
        default,
        deserialize_with = "string_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub district: Option<String>,
    /// Contact email address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Phone number in any human format.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Office location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub office: Option<String>,
    /// Official website URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    /// Mailing address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// Free-text description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Grouping used by some executive tables ("Cabinet", ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Social profiles in document order.
    #[serde(default, skip_serializing_if = "SocialHandles::is_empty")]
    pub social_media: SocialHandles,
    /// Year of appointment (judicial records).
    #[serde(
        default,
        rename = "appointment_year",
        alias = "appointmentYear",
        deserialize_with = "string_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub appointment_year: Option<String>,
    /// Appointing authority (judicial records).
    #[serde(
        default,
        rename = "appointed_by",
        alias = "appointedBy",
        skip_serializing_if = "Option::is_none"
    )]
    pub appointed_by: Option<String>,
}

impl Official {
    /// Create a record with only the required fields set.
    pub fn new(name: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            title: title.into(),
            party: None,
            state: None,
            district: None,
            email: None,
            phone: None,
            office: None,
            website: None,
            address: None,
            description: None,
            category: None,
            social_media: SocialHandles::new(),
            appointment_year: None,
            appointed_by: None,
        }
    }

    /// Identifier used by concerns to reference this official.
    ///
    /// Returns the explicit `id` when present, otherwise the kebab-case
    /// form of the name.
    ///
    /// ```
    /// use civic_core::Official;
    ///
    /// let official = Official::new("Jon Ossoff", "Senator");
    /// assert_eq!(official.id(), "jon-ossoff");
    /// ```
    pub fn id(&self) -> String {
        match self.id.as_deref().map(str::trim) {
            Some(id) if !id.is_empty() => id.to_string(),
            _ => normalize_id(&self.name),
        }
    }

    /// Title with the district appended when present: `"Representative - 5"`.
    pub fn display_title(&self) -> String {
        match present(&self.district) {
            Some(district) => format!("{} - {district}", self.title),
            None => self.title.clone(),
        }
    }

    /// Parsed phone number, if the record has a non-blank one.
    pub fn phone_number(&self) -> Option<PhoneNumber> {
        present(&self.phone).map(PhoneNumber::new)
    }

    /// Appointment line for judicial records: `"2005 by George W. Bush"`.
    ///
    /// Returns `None` without an `appointment_year`. A missing appointer is
    /// rendered as "Unknown".
    pub fn appointment(&self) -> Option<String> {
        let year = present(&self.appointment_year)?;
        let by = present(&self.appointed_by).unwrap_or("Unknown");
        Some(format!("{year} by {by}"))
    }

    /// Builder-style setter for the phone number.
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    /// Builder-style setter for the email address.
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Builder-style setter for the party.
    pub fn with_party(mut self, party: impl Into<String>) -> Self {
        self.party = Some(party.into());
        self
    }

    /// Builder-style setter for the state.
    pub fn with_state(mut self, state: impl Into<String>) -> Self {
        self.state = Some(state.into());
        self
    }

    /// Builder-style setter for the office.
    pub fn with_office(mut self, office: impl Into<String>) -> Self {
        self.office = Some(office.into());
        self
    }

    /// Builder-style setter for the website.
    pub fn with_website(mut self, website: impl Into<String>) -> Self {
        self.website = Some(website.into());
        self
    }

    /// Builder-style setter for the social handles.
    pub fn with_social_media(mut self, handles: SocialHandles) -> Self {
        self.social_media = handles;
        self
    }
}

/// Non-blank view of an optional field.
pub fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

// ============================================================================
// Serde helpers
// ============================================================================

struct StringOrNumber;

impl<'de> Visitor<'de> for StringOrNumber {
    type Value = Option<String>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a string, an integer, or null")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<Self::Value, E> {
        Ok(Some(v.to_string()))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> std::result::Result<Self::Value, E> {
        Ok(Some(v.to_string()))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> std::result::Result<Self::Value, E> {
        Ok(Some(v.to_string()))
    }

    fn visit_unit<E: de::Error>(self) -> std::result::Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_none<E: de::Error>(self) -> std::result::Result<Self::Value, E> {
        Ok(None)
    }
}

fn string_or_number<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> std::result::Result<Option<String>, D::Error> {
    deserializer.deserialize_any(StringOrNumber)
}

// ============================================================================
// Tests
// ============================================================================
