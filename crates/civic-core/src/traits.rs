//! Configuration management trait.
//!
//! [`ConfigManager`] gives a configuration type its file location, TOML
//! loading and serialisation, and environment-variable export. The CLI's
//! `config` subcommands are written against this trait rather than a
//! concrete config type.

use crate::error::{Error, Result};
use crate::util::paths::expand_path;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::path::PathBuf;

/// Behaviour shared by TOML-backed configuration types.
pub trait ConfigManager: Serialize + DeserializeOwned + Default {
    /// Short project name; used for the config directory and env prefix.
    fn project_name() -> &'static str;

    /// Prefix for exported environment variables (`CIVIC`).
    fn env_prefix() -> String {
        Self::project_name().to_ascii_uppercase().replace('-', "_")
    }

    /// Default config location: `<config_dir>/<project>/config.toml`.
    fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(Self::project_name()).join("config.toml"))
    }

    /// Resolve the config path: explicit flag, then `<PREFIX>_CONFIG`, then
    /// the default location.
    fn resolve_config_path(explicit: Option<&str>) -> Option<PathBuf> {
        if let Some(path) = explicit {
            return Some(expand_path(path));
        }
        match std::env::var(format!("{}_CONFIG", Self::env_prefix())) {
            Ok(path) if !path.trim().is_empty() => Some(expand_path(&path)),
            _ => Self::default_config_path(),
        }
    }

    /// Load configuration.
    ///
    /// An explicitly named file must exist. When falling back to the env
    /// var or default location, a missing file yields defaults.
    fn load(explicit: Option<&str>) -> Result<Self> {
        let Some(path) = Self::resolve_config_path(explicit) else {
            log::debug!("No config directory on this platform; using defaults");
            return Ok(Self::default());
        };

        if !path.exists() {
            if explicit.is_some() {
                return Err(Error::config(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            log::debug!("No config at {}; using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path).map_err(|e| Error::io_with_path(e, &path))?;
        let config = toml::from_str(&content)
            .map_err(|e| Error::config(format!("Failed to parse {}: {e}", path.display())))?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Serialise to pretty TOML.
    fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::config(e.to_string()))
    }

    /// Flatten into `PREFIX_SECTION_KEY=value` pairs, sorted by key.
    fn to_env_vars(&self) -> Result<Vec<(String, String)>> {
        let value = toml::Value::try_from(self).map_err(|e| Error::config(e.to_string()))?;
        let mut vars = Vec::new();
        flatten_env(&Self::env_prefix(), &value, &mut vars);
        vars.sort();
        Ok(vars)
    }
}

fn flatten_env(prefix: &str, value: &toml::Value, out: &mut Vec<(String, String)>) {
    match value {
        toml::Value::Table(table) => {
            for (key, child) in table {
                let name = format!("{prefix}_{}", key.to_ascii_uppercase().replace('-', "_"));
                flatten_env(&name, child, out);
            }
        }
        toml::Value::String(s) => out.push((prefix.to_string(), s.clone())),
        toml::Value::Array(items) => {
            let joined = items
                .iter()
                .map(|item| match item {
                    toml::Value::String(s) => s.clone(),
                    other => other.to_string(),
                })
                .collect::<Vec<_>>()
                .join(",");
            out.push((prefix.to_string(), joined));
        }
        other => out.push((prefix.to_string(), other.to_string())),
    }
}
