//! Alias marker files.
//!
//! # Responsibilities
//! - Write a `ServerAlias` marker into the owning gear's directory
//! - Find markers by alias name, in one gear or across the node
//! - Remove a gear's markers for an alias
//!
//! # Design Decisions
//! - Names are compared case-insensitively; older markers may be mixed case
//! - A marker's filename keeps the casing the caller supplied
//! - Unreadable directory entries are skipped with a warning

use std::fs;
use std::io;
use std::path::PathBuf;

use crate::frontend::error::{FrontendError, FrontendResult};
use crate::gear::{GearIdentity, GearLayout};

/// Alias markers belonging to one gear.
#[derive(Debug, Clone)]
pub struct AliasStore {
    layout: GearLayout,
    gear: GearIdentity,
}

impl AliasStore {
    pub fn new(layout: GearLayout, gear: GearIdentity) -> Self {
        Self { layout, gear }
    }

    /// Marker paths whose embedded name equals `dname`, ignoring case.
    ///
    /// With `fleet_wide` every gear on the node is searched; otherwise only
    /// this gear's directory.
    pub fn search(&self, dname: &str, fleet_wide: bool) -> FrontendResult<Vec<PathBuf>> {
        let pattern = if fleet_wide {
            self.layout.fleet_marker_pattern()
        } else {
            self.layout.gear_marker_pattern(&self.gear)
        };

        let matches = self
            .markers(&pattern)?
            .into_iter()
            .filter(|path| {
                GearLayout::alias_from_marker(path)
                    .map(|name| name.eq_ignore_ascii_case(dname))
                    .unwrap_or(false)
            })
            .collect();
        Ok(matches)
    }

    /// Write the marker for `alias` into this gear's directory.
    pub fn write_marker(&self, alias: &str) -> FrontendResult<PathBuf> {
        let path = self.layout.alias_marker(&self.gear, alias);
        fs::write(&path, format!("ServerAlias {alias}"))
            .map_err(|e| FrontendError::io(&self.gear, &path, e))?;

        tracing::debug!(gear = %self.gear.uuid(), path = %path.display(), "Alias marker written");
        Ok(path)
    }

    /// Delete every marker in this gear matching `dname`.
    ///
    /// Returns the removed paths; no match is not an error.
    pub fn remove_markers(&self, dname: &str) -> FrontendResult<Vec<PathBuf>> {
        let found = self.search(dname, false)?;
        let mut removed = Vec::with_capacity(found.len());

        for path in found {
            match fs::remove_file(&path) {
                Ok(()) => removed.push(path),
                Err(e) if e.kind() == io::ErrorKind::NotFound => {}
                Err(e) => return Err(FrontendError::io(&self.gear, &path, e)),
            }
        }
        Ok(removed)
    }

    /// Alias names recorded for this gear, sorted.
    pub fn list(&self) -> FrontendResult<Vec<String>> {
        let pattern = self.layout.gear_marker_pattern(&self.gear);
        let mut names: Vec<String> = self
            .markers(&pattern)?
            .iter()
            .filter_map(|path| GearLayout::alias_from_marker(path))
            .map(str::to_owned)
            .collect();
        names.sort();
        Ok(names)
    }

    fn markers(&self, pattern: &str) -> FrontendResult<Vec<PathBuf>> {
        let entries = glob::glob(pattern).map_err(|source| FrontendError::Search {
            gear: self.gear.clone(),
            pattern: pattern.to_string(),
            source,
        })?;

        let mut paths = Vec::new();
        for entry in entries {
            match entry {
                Ok(path) => paths.push(path),
                Err(e) => {
                    tracing::warn!(gear = %self.gear.uuid(), error = %e, "Skipping unreadable alias entry");
                }
            }
        }
        Ok(paths)
    }
}
