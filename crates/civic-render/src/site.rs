//! Static site output.
//!
//! [`SiteBuilder`] loads a data directory, validates the concerns document,
//! and writes `officials.html` and `concerns.html` to the output directory.
//!
//! Schema errors are logged and reported back in [`BuildReport`]. They only
//! stop the build when the builder is strict.

use crate::card::CardRenderer;
use crate::concerns::{NewsLayout, render_concerns_page};
use crate::error::{Error, Result};
use crate::page::{Page, html_document};
use crate::social::{RenderOptions, SocialLinkRenderer};
use civic_core::concern::OFFICIALS_PAGE;
use civic_core::{
    Branch, ConcernsDocument, Directory, SiteConfig, ValidationReport, validate_concerns_data,
};
use std::path::{Path, PathBuf};

/// File name of the generated concerns page.
pub const CONCERNS_PAGE: &str = "concerns.html";

/// What a build produced.
///
/// `validation` is set whenever a concerns document exists, even when the
/// document was too malformed to render.
#[derive(Debug, Clone, Default)]
pub struct BuildReport {
    /// Officials rendered across all branches.
    pub officials: usize,
    /// Concerns rendered.
    pub concerns: usize,
    /// Pages written, in write order.
    pub pages: Vec<PathBuf>,
    /// Schema validation result; `None` when there is no concerns document.
    pub validation: Option<ValidationReport>,
}

/// Builds the static site from a [`SiteConfig`].
#[derive(Debug, Clone)]
pub struct SiteBuilder {
    config: SiteConfig,
    data_dir: PathBuf,
    output_dir: PathBuf,
    strict: bool,
}

impl SiteBuilder {
    /// Create a builder using the config's data and output directories.
    pub fn new(config: SiteConfig) -> Self {
        let data_dir = config.data_dir();
        let output_dir = config.output_dir();
        Self {
            config,
            data_dir,
            output_dir,
            strict: false,
        }
    }

    /// Override the data directory.
    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = dir.into();
        self
    }

    /// Override the output directory.
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Fail the build when the concerns document has schema errors.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Data directory in use.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Output directory in use.
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    fn card_renderer(&self) -> CardRenderer {
        CardRenderer::new(SocialLinkRenderer::new(RenderOptions::from(
            &self.config.social,
        )))
    }

    /// Render the officials page with one section per branch.
    pub fn officials_page(&self, directory: &Directory) -> Page {
        let mut page = Page::with_renderer(
            format!("{} | Officials", self.config.site.title),
            self.card_renderer(),
        );
        page.set_base_url(self.config.site.base_url.as_str());
        for branch in Branch::ALL {
            let id = format!("{}-officials", branch.slug());
            page.add_container(id.as_str(), Some(branch.heading()));
            page.display_officials(&id, directory.branch(branch));
        }
        page
    }

    /// Render the concerns page document.
    pub fn concerns_html(&self, document: &ConcernsDocument) -> String {
        html_document(
            &format!("{} | Your Concerns", self.config.site.title),
            &self.config.site.base_url,
            &render_concerns_page(document, NewsLayout::Grid),
        )
    }

    /// Load, validate, render, and write every page.
    pub async fn build(&self) -> Result<BuildReport> {
        let directory = Directory::load(&self.data_dir).await?;
        let concerns = self.load_concerns().await?;

        let mut report = BuildReport {
            officials: directory.len(),
            ..BuildReport::default()
        };

        if let Some((_, validation)) = &concerns {
            for error in validation.errors() {
                log::warn!("concerns.json {error}");
            }
            if self.strict && !validation.is_valid() {
                return Err(Error::validation(validation.errors().len()));
            }
        }

        tokio::fs::create_dir_all(&self.output_dir)
            .await
            .map_err(|e| Error::io_with_path(e, &self.output_dir))?;

        let officials_html = self.officials_page(&directory).to_html();
        report
            .pages
            .push(self.write_page(OFFICIALS_PAGE, &officials_html).await?);

        if let Some((document, validation)) = concerns {
            if let Some(document) = document {
                let html = self.concerns_html(&document);
                report.pages.push(self.write_page(CONCERNS_PAGE, &html).await?);
                report.concerns = document.concerns.len();
            }
            report.validation = Some(validation);
        }

        log::info!(
            "Built {} pages ({} officials, {} concerns) into {}",
            report.pages.len(),
            report.officials,
            report.concerns,
            self.output_dir.display()
        );
        Ok(report)
    }

    /// Read and validate the concerns document.
    ///
    /// The document is `None` when it fails schema validation and cannot be
    /// deserialised; the page is then skipped and the report carries the
    /// errors.
    async fn load_concerns(
        &self,
    ) -> Result<Option<(Option<ConcernsDocument>, ValidationReport)>> {
        let path = self.concerns_path();
        let content = match tokio::fs::read_to_string(&path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("No concerns document at {}; skipping", path.display());
                return Ok(None);
            }
            Err(e) => return Err(Error::io_with_path(e, &path)),
        };

        let value: serde_json::Value = serde_json::from_str(&content)?;
        let validation = validate_concerns_data(&value)?;
        match ConcernsDocument::from_json(&content) {
            Ok(document) => Ok(Some((Some(document), validation))),
            Err(e) if !validation.is_valid() => {
                log::warn!("Skipping {CONCERNS_PAGE}: {e}");
                Ok(Some((None, validation)))
            }
            Err(e) => Err(e.into()),
        }
    }

    fn concerns_path(&self) -> PathBuf {
        self.data_dir.join(civic_core::directory::CONCERNS_FILE)
    }

    async fn write_page(&self, name: &str, html: &str) -> Result<PathBuf> {
        let path = self.output_dir.join(name);
        tokio::fs::write(&path, html)
            .await
            .map_err(|e| Error::io_with_path(e, &path))?;
        log::debug!("Wrote {}", path.display());
        Ok(path)
    }
}
