//! Utility modules for ID computation and path handling.
//!
//! # Modules
//!
//! - [`ids`]: ID normalization
//! - [`paths`]: Tilde/environment expansion for configured paths

pub mod ids;
pub mod paths;
