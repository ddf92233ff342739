use serde::{Deserialize, Serialize};
use crate::bundle::{LicenseEntry, ThirdPartyLibrary};

/// Ordered allow-list of license identifiers.
///
/// Order defines priority: when a library declares several licenses, the
/// first identifier in this list that appears among them is the one
/// selected, regardless of the library's own ordering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PermissibleLicenses {
    identifiers: Vec<String>,
}

impl Default for PermissibleLicenses {
    fn default() -> Self {
        Self {
            identifiers: vec!["MIT".to_string()],
        }
    }
}

impl PermissibleLicenses {
    pub fn new(identifiers: Vec<String>) -> Self {
        Self { identifiers }
    }

    pub fn identifiers(&self) -> &[String] {
        &self.identifiers
    }

    /// Select a library's license by allow-list priority.
    ///
    /// Matching is case-sensitive and exact. Returns None when none of the
    /// library's licenses is permissible.
    pub fn select<'a>(&self, library: &'a ThirdPartyLibrary) -> Option<&'a LicenseEntry> {
        self.identifiers.iter().find_map(|permitted| {
            library
                .licenses
                .iter()
                .find(|entry| &entry.license == permitted)
        })
    }
}
