//! Integration test suite for civic-cli.
//!
//! Runs parsed command lines end to end against temporary data directories
//! and config files.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

mod integration;
