//! # civic-cli
//!
//! Command-line tools for a Civic site:
//! - Building `officials.html` and `concerns.html` from a data directory
//! - Validating concerns documents against the schema
//! - Showing how phone numbers normalize and dial
//! - Listing concerns and the officials to contact about each
//! - Managing the TOML configuration file

#![doc = include_str!("../README.md")]

pub mod cli;
pub mod commands;
pub mod config_handlers;
pub mod error;

pub use cli::{Cli, Command, ConfigAction};
pub use commands::run;
pub use error::{Error, Result};
