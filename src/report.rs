use serde::{Deserialize, Serialize};
use crate::bundle::LicenseBundle;
use crate::policy::PermissibleLicenses;

/// One row of the attribution report: a package, its chosen license
/// identifier, and the full license body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttributionEntry {
    pub package_name: String,
    pub license: String,
    pub text: String,
}

/// Validation failure for a single library. The first failure aborts the
/// whole report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributionError {
    NoLicenses(String),
    NoPermissibleLicenses(String),
}

impl std::fmt::Display for AttributionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AttributionError::NoLicenses(package) => {
                write!(f, "{} has no licenses", package)
            }
            AttributionError::NoPermissibleLicenses(package) => {
                write!(f, "{} has no permissible licenses", package)
            }
        }
    }
}

impl std::error::Error for AttributionError {}

/// Build the attribution report from a parsed bundle.
///
/// Libraries are processed in bundle order and the first invalid one
/// short-circuits the rest, so callers see either a complete report or the
/// offending package name.
pub fn build_report(
    bundle: &LicenseBundle,
    permissible: &PermissibleLicenses,
) -> Result<Vec<AttributionEntry>, AttributionError> {
    let mut entries = Vec::with_capacity(bundle.third_party_libraries.len());

    for library in &bundle.third_party_libraries {
        if library.licenses.is_empty() {
            return Err(AttributionError::NoLicenses(library.package_name.clone()));
        }

        let chosen = permissible
            .select(library)
            .ok_or_else(|| AttributionError::NoPermissibleLicenses(library.package_name.clone()))?;

        entries.push(AttributionEntry {
            package_name: library.package_name.clone(),
            license: chosen.license.clone(),
            text: chosen.text.clone(),
        });
    }

    Ok(entries)
}
