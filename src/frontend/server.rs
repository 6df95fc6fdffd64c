//! Per-gear front-end configuration handle.
//!
//! # Responsibilities
//! - Reset and tear down a gear's `.httpd.d` directory
//! - Add and remove hostname aliases with node-wide uniqueness
//! - Keep derived routing documents in step with aliases
//! - Reload the virtual-host engine and node web proxy after changes
//!
//! # Design Decisions
//! - Everything is synchronous; the caller blocks on filesystem and reloads
//! - The marker write is the commit point of `add_alias`; routing documents
//!   and reloads after it are reported, never rolled back
//! - Configuration is passed in, never looked up globally

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Serialize;

use crate::config::FrontendConfig;
use crate::frontend::error::{FrontendError, FrontendResult};
use crate::gear::{GearIdentity, GearLayout};
use crate::observability::metrics;
use crate::reload::{CommandRunner, ReloadOrchestrator, ReloadOutput, SystemRunner};
use crate::routing::hostname;
use crate::routing::{AliasStore, DocumentOutcome, FleetLock, RouteDocuments};

/// Outcome of a successful `add_alias`.
#[derive(Debug, Clone, Serialize)]
pub struct AliasAdded {
    /// Normalized alias name.
    pub alias: String,
    /// Marker file that records the alias.
    pub marker: PathBuf,
    /// Best-effort derived routing document.
    pub routes: DocumentOutcome,
    pub reload: ReloadOutput,
}

/// Outcome of `remove_alias`.
#[derive(Debug, Clone, Serialize)]
pub struct AliasRemoved {
    /// Normalized alias name.
    pub alias: String,
    /// Marker files deleted; empty when the alias was not present.
    pub markers: Vec<PathBuf>,
    /// Whether a derived routing document was deleted.
    pub routes_removed: bool,
    pub reload: ReloadOutput,
}

/// Front-end HTTP configuration for one gear.
///
/// Note: this manages the Apache virtual-host and node web proxy files;
/// it does not serve traffic.
#[derive(Debug, Clone)]
pub struct FrontendHttpServer {
    gear: GearIdentity,
    layout: GearLayout,
    aliases: AliasStore,
    documents: RouteDocuments,
    reloader: ReloadOrchestrator,
}

impl FrontendHttpServer {
    /// Create a handle that runs reload commands on the host.
    pub fn new(gear: GearIdentity, config: &FrontendConfig) -> Self {
        Self::with_runner(gear, config, Arc::new(SystemRunner))
    }

    /// Create a handle with a custom command runner.
    pub fn with_runner(gear: GearIdentity, config: &FrontendConfig, runner: Arc<dyn CommandRunner>) -> Self {
        let layout = GearLayout::new(&config.gear_base_dir);
        Self {
            aliases: AliasStore::new(layout.clone(), gear.clone()),
            documents: RouteDocuments::new(layout.clone(), gear.clone(), &config.cloud_domain),
            reloader: ReloadOrchestrator::new(config.reload.clone(), runner, gear.uuid()),
            layout,
            gear,
        }
    }

    pub fn gear(&self) -> &GearIdentity {
        &self.gear
    }

    pub fn layout(&self) -> &GearLayout {
        &self.layout
    }

    /// Start the gear with an empty configuration directory.
    ///
    /// Anything already in the directory is removed first.
    pub fn create(&self) -> FrontendResult<()> {
        let path = self.layout.gear_dir(&self.gear);

        remove_path(&path).map_err(|e| FrontendError::io(&self.gear, &path, e))?;
        fs::create_dir_all(&path).map_err(|e| FrontendError::io(&self.gear, &path, e))?;

        tracing::info!(gear = %self.gear.uuid(), path = %path.display(), "Frontend configuration created");
        Ok(())
    }

    /// Remove every configuration directory carrying this gear's uuid, then
    /// reload.
    ///
    /// Matches on uuid alone, so directories left under an older namespace
    /// or name are removed too.
    pub fn destroy(&self, background: bool) -> FrontendResult<ReloadOutput> {
        let pattern = self.layout.uuid_pattern(&self.gear);
        let entries = glob::glob(&pattern).map_err(|source| FrontendError::Search {
            gear: self.gear.clone(),
            pattern: pattern.clone(),
            source,
        })?;

        let mut removed = 0usize;
        for entry in entries {
            let path = match entry {
                Ok(path) => path,
                Err(e) => {
                    tracing::warn!(gear = %self.gear.uuid(), error = %e, "Skipping unreadable gear entry");
                    continue;
                }
            };
            remove_path(&path).map_err(|e| FrontendError::io(&self.gear, &path, e))?;
            removed += 1;
        }

        tracing::info!(gear = %self.gear.uuid(), removed, "Frontend configuration destroyed");
        Ok(self.reload_all(background))
    }

    /// Connect a path element to a back-end URI for this gear.
    pub fn connect(&self, path: &str, uri: &str, options: &HashMap<String, String>) -> FrontendResult<()> {
        tracing::debug!(gear = %self.gear.uuid(), path, uri, ?options, "connect requested");
        Err(self.not_implemented("connect"))
    }

    /// Disconnect a path element from this gear.
    pub fn disconnect(&self, path: &str) -> FrontendResult<()> {
        tracing::debug!(gear = %self.gear.uuid(), path, "disconnect requested");
        Err(self.not_implemented("disconnect"))
    }

    /// Add a hostname alias.
    ///
    /// Fails if any gear on the node already holds the alias, compared
    /// without regard to case. The marker keeps the casing of `name`.
    pub fn add_alias(&self, name: &str) -> FrontendResult<AliasAdded> {
        let dname = self.validate_name(name)?;

        let marker = {
            let lock_path = self.layout.lock_path();
            let _lock = FleetLock::acquire(&lock_path).map_err(|source| FrontendError::Lock {
                gear: self.gear.clone(),
                path: lock_path.clone(),
                source,
            })?;

            if !self.aliases.search(&dname, true)?.is_empty() {
                metrics::record_alias_operation("add", "conflict");
                return Err(FrontendError::AliasAlreadyExists {
                    gear: self.gear.clone(),
                    alias: dname,
                });
            }
            self.aliases.write_marker(name)?
        };

        let routes = self.documents.derive(&dname);
        let reload = self.reload_all(false);

        metrics::record_alias_operation("add", "success");
        tracing::info!(gear = %self.gear.uuid(), alias = %dname, reload_exit_code = reload.exit_code, "Alias added");
        Ok(AliasAdded {
            alias: dname,
            marker,
            routes,
            reload,
        })
    }

    /// Remove a hostname alias from this gear. Removing an unknown alias
    /// succeeds.
    pub fn remove_alias(&self, name: &str) -> FrontendResult<AliasRemoved> {
        let dname = self.validate_name(name)?;

        let routes_removed = self.documents.remove(&dname)?;
        let markers = self.aliases.remove_markers(&dname)?;
        let reload = self.reload_all(false);

        metrics::record_alias_operation("remove", "success");
        tracing::info!(
            gear = %self.gear.uuid(),
            alias = %dname,
            markers = markers.len(),
            reload_exit_code = reload.exit_code,
            "Alias removed"
        );
        Ok(AliasRemoved {
            alias: dname,
            markers,
            routes_removed,
            reload,
        })
    }

    /// Alias names recorded for this gear.
    pub fn aliases(&self) -> FrontendResult<Vec<String>> {
        self.aliases.list()
    }

    /// Marker files matching `name`, in this gear or across the node.
    pub fn search_aliases(&self, name: &str, fleet_wide: bool) -> FrontendResult<Vec<PathBuf>> {
        let dname = self.validate_name(name)?;
        self.aliases.search(&dname, fleet_wide)
    }

    /// Validate a hostname and return it lower-cased.
    pub fn validate_name(&self, name: &str) -> FrontendResult<String> {
        hostname::normalize(name).map_err(|(kind, name)| FrontendError::Name {
            gear: self.gear.clone(),
            name,
            kind,
        })
    }

    /// Reload the node web proxy and the virtual-host engine.
    pub fn reload_all(&self, background: bool) -> ReloadOutput {
        self.reloader.reload_all(background)
    }

    fn not_implemented(&self, operation: &'static str) -> FrontendError {
        FrontendError::NotImplemented {
            gear: self.gear.clone(),
            operation,
        }
    }
}

/// Remove a file or directory tree; a missing path is fine.
fn remove_path(path: &Path) -> io::Result<()> {
    match fs::symlink_metadata(path) {
        Ok(meta) if meta.is_dir() => fs::remove_dir_all(path),
        Ok(_) => fs::remove_file(path),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reload::CommandOutput;
    use crate::routing::NameViolation;

    #[derive(Debug)]
    struct AlwaysOk;

    impl CommandRunner for AlwaysOk {
        fn run(&self, _program: &str, _args: &[String]) -> CommandOutput {
            CommandOutput::default()
        }
    }

    fn server(base: &Path) -> FrontendHttpServer {
        let config = FrontendConfig {
            gear_base_dir: base.to_path_buf(),
            cloud_domain: "cloud.example".to_string(),
            ..FrontendConfig::default()
        };
        FrontendHttpServer::with_runner(GearIdentity::new("u1", "app", "ns"), &config, Arc::new(AlwaysOk))
    }

    #[test]
    fn test_validate_name_attaches_gear() {
        let dir = tempfile::tempdir().unwrap();
        let err = server(dir.path()).validate_name("foo_bar").unwrap_err();

        match err {
            FrontendError::Name { gear, name, kind } => {
                assert_eq!(gear.uuid(), "u1");
                assert_eq!(name, "foo_bar");
                assert_eq!(kind, NameViolation::InvalidCharacters);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_connect_and_disconnect_are_stubs() {
        let dir = tempfile::tempdir().unwrap();
        let server = server(dir.path());

        let err = server
            .connect("/", "http://127.0.250.1:8080/", &HashMap::new())
            .unwrap_err();
        assert!(matches!(err, FrontendError::NotImplemented { operation: "connect", .. }));

        let err = server.disconnect("/").unwrap_err();
        assert!(matches!(err, FrontendError::NotImplemented { operation: "disconnect", .. }));
    }

    #[test]
    fn test_create_replaces_a_stray_file() {
        let dir = tempfile::tempdir().unwrap();
        let server = server(dir.path());
        let path = server.layout().gear_dir(server.gear());
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "not a directory").unwrap();

        server.create().unwrap();
        assert!(path.is_dir());
    }

    #[test]
    fn test_add_alias_marker_keeps_caller_casing() {
        let dir = tempfile::tempdir().unwrap();
        let server = server(dir.path());
        server.create().unwrap();

        let added = server.add_alias("Foo.Example.com").unwrap();
        assert_eq!(added.alias, "foo.example.com");
        assert!(added.marker.ends_with("server_alias-Foo.Example.com.conf"));
        assert_eq!(server.aliases().unwrap(), vec!["Foo.Example.com".to_string()]);
    }

    #[test]
    fn test_remove_path_missing_is_ok() {
        let dir = tempfile::tempdir().unwrap();
        assert!(remove_path(&dir.path().join("missing")).is_ok());
    }
}
