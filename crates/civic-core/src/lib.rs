//! Civic Core: shared types, data loading, validation, and configuration.
//!
//! This crate provides the foundational types used across all Civic crates.
//! It has no internal Civic dependencies (dependency level 0).
//!
//! # Modules
//!
//! - [`error`]: Error types and Result alias
//! - [`official`]: Official contact records and government branches
//! - [`social`]: Social platform registry and ordered handle maps
//! - [`phone`]: Phone number normalization and dial URIs
//! - [`concern`]: Concerns documents, news sources, and official filtering
//! - [`schema`]: JSON Schema validation of concerns documents
//! - [`directory`]: Loading official collections from a data directory
//! - [`config`]: Site configuration
//! - [`traits`]: The [`ConfigManager`] trait
//! - [`util`]: ID and path utilities

#![doc = include_str!("../README.md")]

pub mod concern;
pub mod config;
pub mod directory;
pub mod error;
pub mod official;
pub mod phone;
pub mod schema;
pub mod social;
pub mod traits;
pub mod util;

// Re-export key types at crate root for convenience
pub use concern::{
    ConcernsDocument, ConcernsMetadata, Concern, NewsSource, RelatedLink,
    contact_officials_url, filter_officials_by_concern,
};
pub use config::SiteConfig;
pub use directory::Directory;
pub use error::{Error, Result};
pub use official::{Branch, Official};
pub use phone::{PhoneNumber, dial_uri, normalize_digits};
pub use schema::{SchemaError, ValidationReport, validate_concerns_data};
pub use social::{LinkStyle, SocialHandles, SocialPlatform};
pub use traits::ConfigManager;

// Convenience re-exports from util
pub use util::ids::normalize_id;
