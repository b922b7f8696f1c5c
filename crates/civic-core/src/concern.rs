//! Concerns documents, news sources, and official filtering.
//!
//! The concerns feature is driven by a single JSON document:
//!
//! ```json
//! {
//!   "concerns": [{
//!     "id": "healthcare", "title": "Healthcare", "description": "...",
//!     "relevantOfficials": ["jon-ossoff"], "isActive": true,
//!     "order": 1, "isRotating": false
//!   }],
//!   "newsSources": [{"name": "AP", "url": "https://apnews.com", "logoUrl": "/logos/ap.png"}],
//!   "metadata": {"lastUpdated": "2025-10-10"}
//! }
//! ```
//!
//! The document is loaded once and never mutated.

use crate::error::{Error, Result};
use crate::official::Official;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Page that lists officials; concern cards link here.
pub const OFFICIALS_PAGE: &str = "officials.html";

// ============================================================================
// Document types
// ============================================================================

/// An external resource attached to a concern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelatedLink {
    /// Link text.
    pub title: String,
    /// Target URL.
    pub url: String,
    /// Publisher shown after the title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

/// A topical civic issue linked to a subset of officials.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Concern {
    /// Stable identifier.
    pub id: String,
    /// Card heading.
    pub title: String,
    /// Optional secondary heading.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    /// Body text.
    pub description: String,
    /// Supporting resources.
    #[serde(default)]
    pub related_links: Vec<RelatedLink>,
    /// Ids of officials to contact about this concern.
    #[serde(default)]
    pub relevant_officials: Vec<String>,
    /// Sort key; lower comes first.
    #[serde(default)]
    pub order: i64,
    /// Marks the "Current Issue" slot.
    #[serde(default)]
    pub is_rotating: bool,
    /// Whether the concern is currently published.
    #[serde(default = "default_true")]
    pub is_active: bool,
}

/// A news outlet shown above the concerns grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsSource {
    /// Outlet name.
    pub name: String,
    /// Outlet home page.
    pub url: String,
    /// Logo image URL.
    pub logo_url: String,
}

/// Provenance of a concerns document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConcernsMetadata {
    /// ISO-8601 date or timestamp of the last edit.
    pub last_updated: String,
    /// Optional document version.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

/// The full concerns document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConcernsDocument {
    /// Concern cards, unsorted.
    #[serde(default)]
    pub concerns: Vec<Concern>,
    /// News outlets.
    #[serde(default)]
    pub news_sources: Vec<NewsSource>,
    /// Provenance, if recorded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<ConcernsMetadata>,
}

fn default_true() -> bool {
    true
}

impl ConcernsDocument {
    /// Parse a document from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| Error::parse(format!("Failed to parse concerns document: {e}")))
    }

    /// Load a document from disk.
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| Error::io_with_path(e, path))?;
        let doc = Self::from_json(&content)?;
        log::debug!(
            "Loaded {} concerns and {} news sources from {}",
            doc.concerns.len(),
            doc.news_sources.len(),
            path.display()
        );
        Ok(doc)
    }

    /// Concerns sorted by `order`, ties keeping document order.
    pub fn sorted_concerns(&self) -> Vec<&Concern> {
        let mut sorted: Vec<&Concern> = self.concerns.iter().collect();
        sorted.sort_by_key(|c| c.order);
        sorted
    }

    /// The first rotating concern in sorted order.
    pub fn rotating(&self) -> Option<&Concern> {
        self.sorted_concerns().into_iter().find(|c| c.is_rotating)
    }

    /// Look up a concern by id.
    pub fn concern(&self, id: &str) -> Option<&Concern> {
        self.concerns.iter().find(|c| c.id == id)
    }
}

// ============================================================================
// Filtering and navigation
// ============================================================================

/// Officials whose id appears in `relevant_officials`, in directory order.
///
/// Returns an empty list when the concern id or either list is empty.
///
/// ```
/// use civic_core::{Official, filter_officials_by_concern};
///
/// let officials = vec![
///     Official::new("Jon Ossoff", "Senator"),
///     Official::new("Raphael Warnock", "Senator"),
/// ];
/// let relevant = vec!["raphael-warnock".to_string()];
/// let found = filter_officials_by_concern("voting", &relevant, &officials);
/// assert_eq!(found.len(), 1);
/// assert_eq!(found[0].name, "Raphael Warnock");
/// ```
pub fn filter_officials_by_concern<'a>(
    concern_id: &str,
    relevant_officials: &[String],
    officials: &'a [Official],
) -> Vec<&'a Official> {
    if concern_id.trim().is_empty() || relevant_officials.is_empty() || officials.is_empty() {
        return Vec::new();
    }
    officials
        .iter()
        .filter(|official| {
            let id = official.id();
            relevant_officials.iter().any(|r| *r == id)
        })
        .collect()
}

/// Link from a concern card to the filtered officials page.
///
/// ```
/// use civic_core::{Concern, contact_officials_url};
///
/// let concern: Concern = serde_json::from_str(r#"{
///     "id": "healthcare", "title": "Healthcare", "description": "",
///     "relevantOfficials": ["jon-ossoff", "raphael-warnock"]
/// }"#).unwrap();
/// assert_eq!(
///     contact_officials_url(&concern),
///     "officials.html?concernId=healthcare&officials=jon-ossoff%2Craphael-warnock"
/// );
/// ```
pub fn contact_officials_url(concern: &Concern) -> String {
    let mut url = format!(
        "{OFFICIALS_PAGE}?concernId={}",
        encode_query_component(&concern.id)
    );
    if !concern.relevant_officials.is_empty() {
        url.push_str("&officials=");
        url.push_str(&encode_query_component(
            &concern.relevant_officials.join(","),
        ));
    }
    url
}

/// `application/x-www-form-urlencoded` encoding of a single value.
fn encode_query_component(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'*' => {
                out.push(byte as char)
            }
            b' ' => out.push('+'),
            other => out.push_str(&format!("%{other:02X}")),
        }
    }
    out
}

// ============================================================================
// Tests
// ============================================================================
