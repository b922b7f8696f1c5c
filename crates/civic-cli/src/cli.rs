//! Command-line argument definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Civic - build and inspect the Contact Your Officials site
#[derive(Parser, Debug)]
#[command(name = "civic")]
#[command(version, about = "Build and inspect the Contact Your Officials site", long_about = None)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render officials.html and concerns.html
    Build {
        /// Data directory (overrides `data.dir`)
        #[arg(long)]
        data: Option<PathBuf>,

        /// Output directory (overrides `output.dir`)
        #[arg(long)]
        out: Option<PathBuf>,

        /// Fail when concerns.json has schema errors
        #[arg(long)]
        strict: bool,
    },

    /// Validate a concerns document against the schema
    Validate {
        /// Path to the concerns document
        file: PathBuf,
    },

    /// Show how a phone number normalizes and dials
    Dial {
        /// Phone number in any format
        number: String,
    },

    /// List concerns, or the officials to contact about one
    Concerns {
        /// Data directory (overrides `data.dir`)
        #[arg(long)]
        data: Option<PathBuf>,

        /// Concern id
        id: Option<String>,
    },

    /// Configuration management
    Config {
        /// Config operation
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show the resolved config file path
    Path,

    /// Get a value by dotted key
    Get {
        /// Dotted key, e.g. `social.style`
        key: String,
    },

    /// Set a value by dotted key
    Set {
        /// Dotted key, e.g. `social.max_links`
        key: String,
        /// New value; booleans and numbers are detected
        value: String,
    },

    /// Write a default config file
    Init {
        /// Destination (defaults to the platform config dir)
        #[arg(long)]
        file: Option<String>,

        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },

    /// Print the configuration as environment variables
    Export {
        /// Format as `--env KEY=VALUE` for docker
        #[arg(long)]
        docker_env: bool,
    },
}
