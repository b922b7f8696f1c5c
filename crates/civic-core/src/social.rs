//! Social platform registry and ordered handle maps.
//!
//! Officials list their profiles as a JSON object of platform key → handle:
//!
//! ```json
//! { "twitter": "SenOssoff", "facebook": "SenOssoff" }
//! ```
//!
//! [`SocialHandles`] keeps those entries in document order, which is the
//! order links are rendered in. Only keys recognised by [`SocialPlatform`]
//! ever become links; unknown keys survive a round trip untouched.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

// ============================================================================
// SocialPlatform
// ============================================================================

/// Display and URL metadata for a social platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlatformInfo {
    /// Short display name ("Twitter", "LinkedIn", ...).
    pub name: &'static str,
    /// Icon glyph shown in compact link rows.
    pub icon: &'static str,
    /// Profile URL prefix; the handle is appended verbatim.
    pub base_url: &'static str,
    /// Brand colour used for link styling.
    pub color: &'static str,
}

/// The closed set of platforms that can be rendered as profile links.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SocialPlatform {
    /// Twitter / X. Accepts both `twitter` and `x` keys.
    Twitter,
    /// Facebook.
    Facebook,
    /// Instagram.
    Instagram,
    /// LinkedIn (personal profile URLs).
    LinkedIn,
    /// YouTube.
    YouTube,
    /// TikTok.
    TikTok,
}

const TWITTER: PlatformInfo = PlatformInfo {
    name: "Twitter",
    icon: "🐦",
    base_url: "https://twitter.com/",
    color: "#1DA1F2",
};

const FACEBOOK: PlatformInfo = PlatformInfo {
    name: "Facebook",
    icon: "📘",
    base_url: "https://facebook.com/",
    color: "#1877F2",
};

const INSTAGRAM: PlatformInfo = PlatformInfo {
    name: "Instagram",
    icon: "📷",
    base_url: "https://instagram.com/",
    color: "#E4405F",
};

const LINKEDIN: PlatformInfo = PlatformInfo {
    name: "LinkedIn",
    icon: "💼",
    base_url: "https://linkedin.com/in/",
    color: "#0A66C2",
};

const YOUTUBE: PlatformInfo = PlatformInfo {
    name: "YouTube",
    icon: "📹",
    base_url: "https://youtube.com/",
    color: "#FF0000",
};

const TIKTOK: PlatformInfo = PlatformInfo {
    name: "TikTok",
    icon: "🎵",
    base_url: "https://tiktok.com/@",
    color: "#000000",
};

impl SocialPlatform {
    /// Every registered platform, in registry order.
    pub const ALL: [SocialPlatform; 6] = [
        Self::Twitter,
        Self::Facebook,
        Self::Instagram,
        Self::LinkedIn,
        Self::YouTube,
        Self::TikTok,
    ];

    /// Look up a platform by its handle-map key.
    ///
    /// Keys are matched case-insensitively; `x` is an alias for Twitter.
    ///
    /// ```
    /// use civic_core::SocialPlatform;
    ///
    /// assert_eq!(SocialPlatform::from_key("twitter"), Some(SocialPlatform::Twitter));
    /// assert_eq!(SocialPlatform::from_key("x"), Some(SocialPlatform::Twitter));
    /// assert_eq!(SocialPlatform::from_key("truth"), None);
    /// ```
    pub fn from_key(key: &str) -> Option<Self> {
        match key.trim().to_ascii_lowercase().as_str() {
            "twitter" | "x" => Some(Self::Twitter),
            "facebook" => Some(Self::Facebook),
            "instagram" => Some(Self::Instagram),
            "linkedin" => Some(Self::LinkedIn),
            "youtube" => Some(Self::YouTube),
            "tiktok" => Some(Self::TikTok),
            _ => None,
        }
    }

    /// Canonical handle-map key.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Twitter => "twitter",
            Self::Facebook => "facebook",
            Self::Instagram => "instagram",
            Self::LinkedIn => "linkedin",
            Self::YouTube => "youtube",
            Self::TikTok => "tiktok",
        }
    }

    /// Registry metadata for this platform.
    pub fn info(&self) -> &'static PlatformInfo {
        match self {
            Self::Twitter => &TWITTER,
            Self::Facebook => &FACEBOOK,
            Self::Instagram => &INSTAGRAM,
            Self::LinkedIn => &LINKEDIN,
            Self::YouTube => &YOUTUBE,
            Self::TikTok => &TIKTOK,
        }
    }

    /// Build the profile URL for a handle.
    ///
    /// A single leading `@` is stripped; nothing else is validated.
    ///
    /// ```
    /// use civic_core::SocialPlatform;
    ///
    /// assert_eq!(
    ///     SocialPlatform::Twitter.profile_url("@SenOssoff"),
    ///     "https://twitter.com/SenOssoff"
    /// );
    /// assert_eq!(
    ///     SocialPlatform::TikTok.profile_url("senator"),
    ///     "https://tiktok.com/@senator"
    /// );
    /// ```
    pub fn profile_url(&self, handle: &str) -> String {
        let handle = handle.trim();
        let handle = handle.strip_prefix('@').unwrap_or(handle);
        format!("{}{}", self.info().base_url, handle)
    }
}

impl fmt::Display for SocialPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.info().name)
    }
}

// ============================================================================
// LinkStyle
// ============================================================================

/// Layout of a rendered row of social links.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkStyle {
    /// Links flow left to right and wrap.
    #[default]
    Horizontal,
    /// Links stack in a column.
    Vertical,
}

impl LinkStyle {
    /// Lowercase name, also used as a CSS modifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Horizontal => "horizontal",
            Self::Vertical => "vertical",
        }
    }
}

// ============================================================================
// SocialHandles
// ============================================================================

/// Ordered mapping of platform key → handle.
///
/// Preserves the order entries appear in the source document. Inserting an
/// existing key replaces its handle in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SocialHandles {
    entries: Vec<(String, String)>,
}

impl SocialHandles {
    /// Create an empty handle map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a handle, keeping the original position on replace.
    pub fn insert(&mut self, key: impl Into<String>, handle: impl Into<String>) {
        let key = key.into();
        let handle = handle.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = handle,
            None => self.entries.push((key, handle)),
        }
    }

    /// Get the handle stored under a raw key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, h)| h.as_str())
    }

    /// Number of raw entries, including unrecognised platforms.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if there are no entries at all.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate raw `(key, handle)` pairs in document order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, h)| (k.as_str(), h.as_str()))
    }

    /// Iterate renderable entries: registered platforms with non-blank
    /// handles, in document order.
    pub fn platforms(&self) -> impl Iterator<Item = (SocialPlatform, &str)> {
        self.iter().filter_map(|(key, handle)| {
            if handle.trim().is_empty() {
                return None;
            }
            SocialPlatform::from_key(key).map(|platform| (platform, handle))
        })
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for SocialHandles {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut handles = SocialHandles::new();
        for (key, handle) in iter {
            handles.insert(key, handle);
        }
        handles
    }
}

impl Serialize for SocialHandles {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, handle) in &self.entries {
            map.serialize_entry(key, handle)?;
        }
        map.end()
    }
}

struct SocialHandlesVisitor;

impl<'de> Visitor<'de> for SocialHandlesVisitor {
    type Value = SocialHandles;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of social platform keys to handles")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> std::result::Result<Self::Value, A::Error> {
        let mut handles = SocialHandles::new();
        while let Some((key, handle)) = access.next_entry::<String, Option<String>>()? {
            // null handles are treated as absent
            if let Some(handle) = handle {
                handles.insert(key, handle);
            }
        }
        Ok(handles)
    }

    fn visit_unit<E: serde::de::Error>(self) -> std::result::Result<Self::Value, E> {
        Ok(SocialHandles::new())
    }

    fn visit_none<E: serde::de::Error>(self) -> std::result::Result<Self::Value, E> {
        Ok(SocialHandles::new())
    }
}

impl<'de> Deserialize<'de> for SocialHandles {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_any(SocialHandlesVisitor)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_from_key_all_registered() {
        for platform in SocialPlatform::ALL {
            assert_eq!(SocialPlatform::from_key(platform.key()), Some(platform));
        }
    }

    #[test]
    fn test_from_key_case_insensitive_and_alias() {
        assert_eq!(SocialPlatform::from_key("YouTube"), Some(SocialPlatform::YouTube));
        assert_eq!(SocialPlatform::from_key("X"), Some(SocialPlatform::Twitter));
        assert_eq!(SocialPlatform::from_key("mastodon"), None);
    }

    #[test]
    fn test_profile_url_strips_single_leading_at() {
        assert_eq!(
            SocialPlatform::Instagram.profile_url("@senkatiebrittal"),
            "https://instagram.com/senkatiebrittal"
        );
        assert_eq!(
            SocialPlatform::LinkedIn.profile_url("jane-doe"),
            "https://linkedin.com/in/jane-doe"
        );
    }

    #[test]
    fn test_display_uses_registry_name() {
        assert_eq!(SocialPlatform::LinkedIn.to_string(), "LinkedIn");
        assert_eq!(SocialPlatform::TikTok.to_string(), "TikTok");
    }

    #[test]
    fn test_deserialize_preserves_document_order() {
        let json = r#"{"youtube": "a", "twitter": "b", "facebook": "c"}"#;
        let handles: SocialHandles = serde_json::from_str(json).unwrap();
        let keys: Vec<&str> = handles.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["youtube", "twitter", "facebook"]);
    }

    #[test]
    fn test_deserialize_null_is_empty() {
        let handles: SocialHandles = serde_json::from_str("null").unwrap();
        assert!(handles.is_empty());
    }

    #[test]
    fn test_deserialize_skips_null_handles() {
        let handles: SocialHandles =
            serde_json::from_str(r#"{"twitter": null, "facebook": "SenOssoff"}"#).unwrap();
        assert_eq!(handles.len(), 1);
        assert_eq!(handles.get("facebook"), Some("SenOssoff"));
    }

    #[test]
    fn test_serialize_keeps_order() {
        let handles: SocialHandles = [("x", "SenTuberville"), ("facebook", "SenatorTuberville")]
            .into_iter()
            .collect();
        let json = serde_json::to_string(&handles).unwrap();
        assert_eq!(json, r#"{"x":"SenTuberville","facebook":"SenatorTuberville"}"#);
    }

    #[test]
    fn test_insert_replaces_in_place() {
        let mut handles = SocialHandles::new();
        handles.insert("twitter", "old");
        handles.insert("facebook", "fb");
        handles.insert("twitter", "new");
        let pairs: Vec<(&str, &str)> = handles.iter().collect();
        assert_eq!(pairs, vec![("twitter", "new"), ("facebook", "fb")]);
    }

    #[test]
    fn test_platforms_filters_unknown_and_blank() {
        let handles: SocialHandles = [
            ("x", "realDonaldTrump"),
            ("truth", "realDonaldTrump"),
            ("instagram", "  "),
            ("tiktok", "whitehouse"),
        ]
        .into_iter()
        .collect();
        let platforms: Vec<SocialPlatform> = handles.platforms().map(|(p, _)| p).collect();
        assert_eq!(platforms, vec![SocialPlatform::Twitter, SocialPlatform::TikTok]);
    }
}
