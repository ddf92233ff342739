use serde::{Deserialize, Serialize};
use std::process::Command;
use anyhow::{Context, Result};

/// Top-level JSON document emitted by `cargo bundle-licenses --format json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LicenseBundle {
    pub third_party_libraries: Vec<ThirdPartyLibrary>,
}

/// One third-party package with its declared license options, in the order
/// the bundling tool reported them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThirdPartyLibrary {
    pub package_name: String,
    pub licenses: Vec<LicenseEntry>,
}

/// A single SPDX-like identifier plus the full license body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LicenseEntry {
    pub license: String,
    pub text: String,
}

pub struct BundleRunner;

impl BundleRunner {
    /// Run `cargo bundle-licenses --format json` in the current directory
    /// and parse its stdout.
    pub fn collect() -> Result<LicenseBundle> {
        let output = Command::new("cargo")
            .args(["bundle-licenses", "--format", "json"])
            .output()
            .context("Failed to run 'cargo bundle-licenses'. Is cargo-bundle-licenses installed?")?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            anyhow::bail!(
                "cargo bundle-licenses failed ({}): {}",
                output.status,
                stderr.trim()
            );
        }

        let stdout = String::from_utf8(output.stdout)
            .context("cargo bundle-licenses emitted non-UTF-8 output")?;

        Self::parse_bundle(&stdout)
    }

    /// Parse the JSON document emitted by cargo-bundle-licenses.
    ///
    /// Unknown keys are ignored so newer bundler versions that add fields
    /// keep parsing; a missing or ill-typed `third_party_libraries` key is
    /// an error.
    pub fn parse_bundle(json: &str) -> Result<LicenseBundle> {
        if json.trim().is_empty() {
            return Err(anyhow::anyhow!("cargo bundle-licenses produced no output"));
        }

        let bundle: LicenseBundle = serde_json::from_str(json)
            .context("Failed to parse cargo bundle-licenses output as JSON")?;

        if bundle.third_party_libraries.is_empty() {
            eprintln!("Warning: license bundle contains no third-party libraries");
        }

        Ok(bundle)
    }
}
