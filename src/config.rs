use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use anyhow::{Context, Result};
use crate::policy::PermissibleLicenses;

pub const DEFAULT_OUTPUT_FILE: &str = "THIRD_PARTY_LIBRARY_LICENSES";

/// Per-project overrides read from `[package.metadata.license-attribution]`
/// in Cargo.toml. Everything is optional; defaults apply when the file, the
/// table, or a key is absent.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Ordered allow-list override (first match wins)
    pub permissible: Option<Vec<String>>,

    /// Output filename override
    pub output: Option<String>,
}

impl Config {
    pub fn permissible_licenses(&self) -> PermissibleLicenses {
        match &self.permissible {
            Some(identifiers) if !identifiers.is_empty() => {
                PermissibleLicenses::new(identifiers.clone())
            }
            _ => PermissibleLicenses::default(),
        }
    }

    pub fn output_path(&self) -> PathBuf {
        PathBuf::from(self.output.as_deref().unwrap_or(DEFAULT_OUTPUT_FILE))
    }
}

/// Load configuration from ./Cargo.toml
pub fn load_config() -> Result<Config> {
    let manifest_path = std::env::current_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .join("Cargo.toml");
    load_config_from(&manifest_path)
}

/// Load configuration from a specific manifest
pub fn load_config_from(manifest_path: &Path) -> Result<Config> {
    if !manifest_path.exists() {
        return Ok(Config::default());
    }

    let content = fs::read_to_string(manifest_path)
        .with_context(|| format!("Failed to read {}", manifest_path.display()))?;

    let manifest: toml::Value = toml::from_str(&content)
        .with_context(|| format!("Failed to parse {}", manifest_path.display()))?;

    // Extract [package.metadata.license-attribution] section
    if let Some(section) = manifest
        .get("package")
        .and_then(|package| package.get("metadata"))
        .and_then(|metadata| metadata.get("license-attribution"))
    {
        let config: Config = section
            .clone()
            .try_into()
            .context("Failed to parse [package.metadata.license-attribution] section")?;
        return Ok(config);
    }

    Ok(Config::default())
}
