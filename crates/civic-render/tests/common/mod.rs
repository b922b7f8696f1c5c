//! Common test utilities for civic-render integration tests.

use async_trait::async_trait;
use civic_render::dispatch::{CallOptions, Host};
use std::path::Path;
use std::sync::Mutex;

/// Something the dispatcher asked the host to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostEvent {
    Navigate(String),
    Present(String),
    Dismiss,
    Notify(String),
}

/// A host that records every call and can be told to fail clipboard writes.
#[derive(Debug, Default)]
pub struct RecordingHost {
    events: Mutex<Vec<HostEvent>>,
    clipboard: Mutex<Option<String>>,
    clipboard_fails: bool,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// A host whose clipboard writes are rejected.
    pub fn with_failing_clipboard() -> Self {
        Self {
            clipboard_fails: true,
            ..Self::default()
        }
    }

    pub fn events(&self) -> Vec<HostEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn navigations(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                HostEvent::Navigate(uri) => Some(uri),
                _ => None,
            })
            .collect()
    }

    pub fn notices(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                HostEvent::Notify(message) => Some(message),
                _ => None,
            })
            .collect()
    }

    pub fn presented(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                HostEvent::Present(number) => Some(number),
                _ => None,
            })
            .collect()
    }

    pub fn clipboard(&self) -> Option<String> {
        self.clipboard.lock().unwrap().clone()
    }

    fn record(&self, event: HostEvent) {
        self.events.lock().unwrap().push(event);
    }
}

#[async_trait]
impl Host for RecordingHost {
    fn navigate(&self, uri: &str) {
        self.record(HostEvent::Navigate(uri.to_string()));
    }

    fn present_overlay(&self, overlay: &CallOptions) {
        self.record(HostEvent::Present(overlay.number().formatted().to_string()));
    }

    fn dismiss_overlay(&self) {
        self.record(HostEvent::Dismiss);
    }

    async fn write_clipboard(&self, text: &str) -> civic_render::Result<()> {
        if self.clipboard_fails {
            return Err(civic_render::Error::clipboard("permission denied"));
        }
        *self.clipboard.lock().unwrap() = Some(text.to_string());
        Ok(())
    }

    fn notify(&self, message: &str) {
        self.record(HostEvent::Notify(message.to_string()));
    }
}

pub const EXECUTIVE_JSON: &str = r#"[
    {"name": "JD Vance", "title": "Vice President", "party": "Republican",
     "phone": "202-456-1111", "website": "https://www.whitehouse.gov"}
]"#;

pub const LEGISLATIVE_JSON: &str = r#"[
    {"name": "Jon Ossoff", "title": "Senator", "party": "Democratic", "state": "GA",
     "phone": "(202) 224-3521", "email": "senator@ossoff.senate.gov",
     "socialMedia": {"twitter": "SenOssoff", "facebook": "SenOssoff"}},
    {"name": "Barry Moore", "title": "Representative", "party": "Republican",
     "state": "AL", "district": 1}
]"#;

pub const JUDICIAL_JSON: &str = r#"[
    {"name": "Elena Kagan", "title": "Associate Justice", "party": "Liberal",
     "appointment_year": 2010, "appointed_by": "Barack Obama"}
]"#;

pub const CONCERNS_JSON: &str = r#"{
    "concerns": [
        {"id": "healthcare", "title": "Healthcare", "description": "Access and cost",
         "relevantOfficials": ["jon-ossoff"], "isActive": true, "order": 2},
        {"id": "voting", "title": "Voting Rights", "description": "Ballot access",
         "relevantOfficials": ["jon-ossoff", "barry-moore"], "isActive": true,
         "order": 1, "isRotating": true}
    ],
    "newsSources": [{"name": "AP", "url": "https://apnews.com", "logoUrl": "/logos/ap.png"}],
    "metadata": {"lastUpdated": "2025-10-10"}
}"#;

/// Write a complete data directory.
pub fn write_data_dir(dir: &Path) {
    std::fs::write(dir.join("executive.json"), EXECUTIVE_JSON).unwrap();
    std::fs::write(dir.join("legislative.json"), LEGISLATIVE_JSON).unwrap();
    std::fs::write(dir.join("judicial.json"), JUDICIAL_JSON).unwrap();
    std::fs::write(dir.join("concerns.json"), CONCERNS_JSON).unwrap();
}
