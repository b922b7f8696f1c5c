//! Subcommand implementations.
//!
//! Each `cmd_*` function prints its output to stdout. The pieces worth
//! testing on their own (`validate_file`, `dial_summary`, `concern_listing`,
//! `concern_contacts`) return values instead of printing.

use crate::cli::{Cli, Command};
use crate::config_handlers::handle_config_command;
use crate::error::{Error, Result};
use civic_core::directory::CONCERNS_FILE;
use civic_core::traits::ConfigManager;
use civic_core::{
    ConcernsDocument, Directory, PhoneNumber, SiteConfig, ValidationReport,
    contact_officials_url, filter_officials_by_concern, validate_concerns_data,
};
use civic_render::{BuildReport, SiteBuilder};
use std::path::{Path, PathBuf};

/// Run a parsed command line.
pub async fn run(cli: Cli) -> Result<()> {
    let config_path = cli.config.as_deref();
    match cli.command {
        Command::Config { action } => handle_config_command(config_path, action)?,
        Command::Dial { number } => cmd_dial(&number),
        Command::Validate { file } => cmd_validate(&file).await?,
        Command::Build { data, out, strict } => {
            let config = SiteConfig::load(config_path)?;
            cmd_build(config, data, out, strict).await?;
        }
        Command::Concerns { data, id } => {
            let config = SiteConfig::load(config_path)?;
            let data_dir = data.unwrap_or_else(|| config.data_dir());
            cmd_concerns(&data_dir, id.as_deref()).await?;
        }
    }
    Ok(())
}

// ============================================================================
// build
// ============================================================================

/// Build the site, with optional directory overrides.
pub async fn cmd_build(
    config: SiteConfig,
    data: Option<PathBuf>,
    out: Option<PathBuf>,
    strict: bool,
) -> Result<BuildReport> {
    let mut builder = SiteBuilder::new(config).strict(strict);
    if let Some(data) = data {
        builder = builder.with_data_dir(data);
    }
    if let Some(out) = out {
        builder = builder.with_output_dir(out);
    }

    let report = builder.build().await?;
    for page in &report.pages {
        println!("Wrote {}", page.display());
    }
    if let Some(validation) = report.validation.as_ref().filter(|v| !v.is_valid()) {
        println!(
            "Warning: concerns.json has {} schema error(s); run `civic validate` for details",
            validation.errors().len()
        );
    }
    Ok(report)
}

// ============================================================================
// validate
// ============================================================================

/// Validate a concerns document file.
pub async fn validate_file(path: &Path) -> Result<ValidationReport> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| civic_core::Error::io_with_path(e, path))?;
    let value: serde_json::Value = serde_json::from_str(&content)?;
    Ok(validate_concerns_data(&value)?)
}

/// Validate a concerns document and print every schema error.
pub async fn cmd_validate(path: &Path) -> Result<()> {
    let report = validate_file(path).await?;
    log::debug!(
        "Validated {} ({} error(s))",
        path.display(),
        report.errors().len()
    );
    if report.is_valid() {
        println!("{} is valid", path.display());
        return Ok(());
    }
    for error in report.errors() {
        println!("  {error}");
    }
    Err(Error::invalid(path, report.errors().len()))
}

// ============================================================================
// dial
// ============================================================================

/// Describe how a raw phone string normalizes and dials.
pub fn dial_summary(raw: &str) -> Vec<String> {
    let number = PhoneNumber::new(raw);
    if number.is_vanity() {
        log::warn!("{raw} contains letters; only its digits are dialed");
    }
    let mut lines = vec![
        format!("Number: {}", number.formatted()),
        format!("Digits: {}", number.digits()),
        format!("Dial:   {}", number.dial_uri()),
    ];
    if number.is_vanity() {
        lines.push("Warning: letters are dropped, so this number will not dial as written".into());
    }
    lines
}

/// Print how a phone number dials.
pub fn cmd_dial(raw: &str) {
    for line in dial_summary(raw) {
        println!("{line}");
    }
}

// ============================================================================
// concerns
// ============================================================================

/// One line per concern, in page order.
pub fn concern_listing(document: &ConcernsDocument) -> Vec<String> {
    document
        .sorted_concerns()
        .into_iter()
        .map(|concern| {
            let marker = if concern.is_rotating {
                " [current issue]"
            } else {
                ""
            };
            format!("{}  {}{marker}", concern.id, concern.title)
        })
        .collect()
}

/// The officials to contact about a concern, and the officials page link.
pub fn concern_contacts(
    document: &ConcernsDocument,
    directory: &Directory,
    id: &str,
) -> Result<(Vec<String>, String)> {
    let concern = document
        .concern(id)
        .ok_or_else(|| civic_core::Error::not_found(format!("concern '{id}'")))?;
    let officials = directory.all();
    let lines = filter_officials_by_concern(&concern.id, &concern.relevant_officials, &officials)
        .into_iter()
        .map(|official| {
            let phone = official.phone.as_deref().unwrap_or("no phone listed");
            format!("{} ({}): {phone}", official.name, official.display_title())
        })
        .collect();
    Ok((lines, contact_officials_url(concern)))
}

/// List concerns, or the officials to contact about `id`.
pub async fn cmd_concerns(data_dir: &Path, id: Option<&str>) -> Result<()> {
    let path = data_dir.join(CONCERNS_FILE);
    log::debug!("Loading concerns from {}", path.display());
    let document = ConcernsDocument::load(&path).await?;
    let Some(id) = id else {
        for line in concern_listing(&document) {
            println!("{line}");
        }
        return Ok(());
    };

    let directory = Directory::load(data_dir).await?;
    let (officials, url) = concern_contacts(&document, &directory, id)?;
    if officials.is_empty() {
        println!("No officials listed for {id}");
    }
    for line in officials {
        println!("{line}");
    }
    println!("{url}");
    Ok(())
}
