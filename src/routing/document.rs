//! Per-alias routing documents for the node web proxy.
//!
//! # Responsibilities
//! - Derive `routes_alias-<alias>.json` from the gear's `routes.json`
//! - Remove a derived document when its alias goes away
//!
//! # Design Decisions
//! - The canonical document is opaque text: literal, global substitution of
//!   the canonical hostname, no JSON parsing
//! - Derivation is best-effort and reports a `DocumentOutcome` instead of
//!   failing the alias operation

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::frontend::error::{FrontendError, FrontendResult};
use crate::gear::{GearIdentity, GearLayout};

/// Result of a best-effort derivation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DocumentOutcome {
    Written { path: PathBuf },
    Failed { path: PathBuf, reason: String },
}

impl DocumentOutcome {
    pub fn is_written(&self) -> bool {
        matches!(self, DocumentOutcome::Written { .. })
    }
}

/// Routing documents for one gear.
#[derive(Debug, Clone)]
pub struct RouteDocuments {
    layout: GearLayout,
    gear: GearIdentity,
    canonical_host: String,
}

impl RouteDocuments {
    pub fn new(layout: GearLayout, gear: GearIdentity, cloud_domain: &str) -> Self {
        let canonical_host = gear.canonical_hostname(cloud_domain);
        Self {
            layout,
            gear,
            canonical_host,
        }
    }

    /// Hostname replaced in derived documents.
    pub fn canonical_host(&self) -> &str {
        &self.canonical_host
    }

    /// Write the alias document, substituting `alias` for the canonical host.
    pub fn derive(&self, alias: &str) -> DocumentOutcome {
        let path = self.layout.alias_routes(&self.gear, alias);

        match self.try_derive(alias, &path) {
            Ok(()) => {
                tracing::debug!(gear = %self.gear.uuid(), path = %path.display(), "Alias routes written");
                DocumentOutcome::Written { path }
            }
            Err(e) => {
                tracing::error!(
                    alert = true,
                    gear = %self.gear.uuid(),
                    alias = %alias,
                    error = %e,
                    "ERROR: Failure trying to create routes alias json file"
                );
                DocumentOutcome::Failed {
                    path,
                    reason: e.to_string(),
                }
            }
        }
    }

    fn try_derive(&self, alias: &str, path: &Path) -> io::Result<()> {
        let source = fs::read_to_string(self.layout.default_routes(&self.gear))?;
        fs::write(path, source.replace(&self.canonical_host, alias))
    }

    /// Remove the alias document. Returns whether a file was deleted.
    pub fn remove(&self, alias: &str) -> FrontendResult<bool> {
        let path = self.layout.alias_routes(&self.gear, alias);
        match fs::remove_file(&path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(FrontendError::io(&self.gear, path, e)),
        }
    }
}
