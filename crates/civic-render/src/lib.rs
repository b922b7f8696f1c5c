//! Civic Render: contact cards, social links, phone dispatch, and pages.
//!
//! This crate turns [`civic_core`] records into HTML node trees and runs the
//! phone dispatch protocol against a host environment.
//!
//! # Modules
//!
//! - [`error`]: Error types and Result alias
//! - [`node`]: Owned HTML node tree
//! - [`icons`]: Contact row kinds and SVG icons
//! - [`social`]: Social profile link rendering
//! - [`card`]: Official contact cards
//! - [`dispatch`]: Phone dispatch protocol and call-options overlay
//! - [`page`]: Pages with named mount points
//! - [`concerns`]: Concerns page rendering
//! - [`site`]: Static site output
//!
//! # Usage
//!
//! ```rust
//! use civic_core::Official;
//! use civic_render::Page;
//!
//! let mut page = Page::new("Officials");
//! page.add_container("legislative-officials", Some("Legislative Branch"));
//! page.display_officials(
//!     "legislative-officials",
//!     &[Official::new("Jon Ossoff", "Senator").with_party("Democratic")],
//! );
//!
//! assert!(page.to_html().contains("party-democratic"));
//! ```

#![doc = include_str!("../README.md")]

pub mod card;
pub mod concerns;
pub mod dispatch;
pub mod error;
pub mod icons;
pub mod node;
pub mod page;
pub mod site;
pub mod social;

// Re-export key types at crate root for convenience
pub use card::{CardRenderer, render_official_card};
pub use concerns::{NewsCarousel, NewsLayout, render_concern_card, render_concerns_page};
pub use dispatch::{
    ActionOutcome, CallAction, CallOptions, Capabilities, DispatchOutcome, Host, PhoneDispatcher,
    ScheduledTask,
};
pub use error::{Error, Result};
pub use icons::ContactKind;
pub use node::{Element, Node};
pub use page::Page;
pub use site::{BuildReport, SiteBuilder};
pub use social::{RenderOptions, SocialLink, SocialLinkRenderer};
