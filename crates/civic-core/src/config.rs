//! Site configuration.
//!
//! [`SiteConfig`] is read from TOML. Every section and field has a default,
//! so an empty or missing file yields a working configuration:
//!
//! ```toml
//! [site]
//! title = "Contact Your Officials"
//! base_url = "/"
//!
//! [data]
//! dir = "data"
//!
//! [output]
//! dir = "public"
//!
//! [social]
//! show_icons = true
//! show_labels = false
//! style = "horizontal"
//! max_links = 6
//!
//! [dispatch]
//! overlay_delay_ms = 500
//! ```

use crate::directory::CONCERNS_FILE;
use crate::social::LinkStyle;
use crate::traits::ConfigManager;
use crate::util::paths::expand_path;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Top-level site configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Page metadata.
    pub site: SiteSection,
    /// Input data location.
    pub data: DataSection,
    /// Output location for generated pages.
    pub output: OutputSection,
    /// Social link rendering defaults.
    pub social: SocialSection,
    /// Phone dispatch settings.
    pub dispatch: DispatchSection,
}

/// `[site]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSection {
    /// Document title prefix.
    pub title: String,
    /// Base URL that generated links are relative to.
    pub base_url: String,
}

impl Default for SiteSection {
    fn default() -> Self {
        Self {
            title: "Contact Your Officials".to_string(),
            base_url: "/".to_string(),
        }
    }
}

/// `[data]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataSection {
    /// Directory holding branch JSON files and `concerns.json`.
    pub dir: String,
}

impl Default for DataSection {
    fn default() -> Self {
        Self {
            dir: "data".to_string(),
        }
    }
}

/// `[output]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSection {
    /// Directory generated pages are written to.
    pub dir: String,
}

impl Default for OutputSection {
    fn default() -> Self {
        Self {
            dir: "public".to_string(),
        }
    }
}

/// `[social]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialSection {
    /// Show platform icon glyphs.
    pub show_icons: bool,
    /// Show platform names.
    pub show_labels: bool,
    /// Row layout.
    pub style: LinkStyle,
    /// Maximum links rendered per official.
    pub max_links: usize,
}

impl Default for SocialSection {
    fn default() -> Self {
        Self {
            show_icons: true,
            show_labels: false,
            style: LinkStyle::Horizontal,
            max_links: 6,
        }
    }
}

/// `[dispatch]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DispatchSection {
    /// Delay before the call-options overlay appears on desktop hosts.
    pub overlay_delay_ms: u64,
}

impl Default for DispatchSection {
    fn default() -> Self {
        Self {
            overlay_delay_ms: 500,
        }
    }
}

impl DispatchSection {
    /// The overlay delay as a [`Duration`].
    pub fn overlay_delay(&self) -> Duration {
        Duration::from_millis(self.overlay_delay_ms)
    }
}

impl SiteConfig {
    /// Expanded data directory.
    pub fn data_dir(&self) -> PathBuf {
        expand_path(&self.data.dir)
    }

    /// Expanded output directory.
    pub fn output_dir(&self) -> PathBuf {
        expand_path(&self.output.dir)
    }

    /// Path of the concerns document inside the data directory.
    pub fn concerns_path(&self) -> PathBuf {
        self.data_dir().join(CONCERNS_FILE)
    }
}

impl ConfigManager for SiteConfig {
    fn project_name() -> &'static str {
        "civic"
    }
}
