//! Loading official collections from a data directory.
//!
//! A data directory holds one JSON array of [`Official`] records per branch:
//!
//! ```text
//! data/
//! ├── executive.json
//! ├── legislative.json
//! ├── judicial.json
//! └── concerns.json
//! ```
//!
//! A missing branch file is treated as an empty branch and logged; a file
//! that exists but does not parse is an error.

use crate::error::{Error, Result};
use crate::official::{Branch, Official};
use std::path::{Path, PathBuf};

/// File name of the concerns document inside a data directory.
pub const CONCERNS_FILE: &str = "concerns.json";

/// Read-only collections of officials, one per branch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Directory {
    executive: Vec<Official>,
    legislative: Vec<Official>,
    judicial: Vec<Official>,
}

impl Directory {
    /// Build a directory from in-memory collections.
    pub fn new(
        executive: Vec<Official>,
        legislative: Vec<Official>,
        judicial: Vec<Official>,
    ) -> Self {
        Self {
            executive,
            legislative,
            judicial,
        }
    }

    /// Path of the JSON file holding a branch inside `data_dir`.
    pub fn branch_path(data_dir: &Path, branch: Branch) -> PathBuf {
        data_dir.join(format!("{}.json", branch.slug()))
    }

    /// Load every branch file from `data_dir`.
    pub async fn load(data_dir: impl AsRef<Path>) -> Result<Self> {
        let data_dir = data_dir.as_ref();
        let mut directory = Directory::default();
        for branch in Branch::ALL {
            let officials = load_branch(&Self::branch_path(data_dir, branch)).await?;
            log::info!("Loaded {} {branch} officials", officials.len());
            *directory.branch_mut(branch) = officials;
        }
        Ok(directory)
    }

    /// Officials in a branch, in file order.
    pub fn branch(&self, branch: Branch) -> &[Official] {
        match branch {
            Branch::Executive => &self.executive,
            Branch::Legislative => &self.legislative,
            Branch::Judicial => &self.judicial,
        }
    }

    fn branch_mut(&mut self, branch: Branch) -> &mut Vec<Official> {
        match branch {
            Branch::Executive => &mut self.executive,
            Branch::Legislative => &mut self.legislative,
            Branch::Judicial => &mut self.judicial,
        }
    }

    /// Every official, branch by branch in page order.
    pub fn all(&self) -> Vec<Official> {
        Branch::ALL
            .iter()
            .flat_map(|b| self.branch(*b).iter().cloned())
            .collect()
    }

    /// Total number of records across branches.
    pub fn len(&self) -> usize {
        self.executive.len() + self.legislative.len() + self.judicial.len()
    }

    /// Returns `true` if no branch has any records.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Officials whose id appears in `ids`, in directory order.
    pub fn find_by_ids(&self, ids: &[String]) -> Vec<&Official> {
        Branch::ALL
            .iter()
            .flat_map(|b| self.branch(*b).iter())
            .filter(|official| {
                let id = official.id();
                ids.iter().any(|wanted| *wanted == id)
            })
            .collect()
    }
}

async fn load_branch(path: &Path) -> Result<Vec<Official>> {
    let content = match tokio::fs::read_to_string(path).await {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            log::warn!("No data file at {}; branch will be empty", path.display());
            return Ok(Vec::new());
        }
        Err(e) => return Err(Error::io_with_path(e, path)),
    };
    serde_json::from_str(&content)
        .map_err(|e| Error::parse(format!("Failed to parse {}: {e}", path.display())))
}
