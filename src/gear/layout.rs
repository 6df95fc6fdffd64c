//! Naming convention for per-gear front-end configuration.
//!
//! ```text
//! <base>/.httpd.d/<uuid>_<namespace>_<name>/
//!     server_alias-<alias>.conf
//!     routes.json
//!     routes_alias-<alias>.json
//! ```

use std::path::{Path, PathBuf};

use glob::Pattern;

use crate::gear::GearIdentity;

/// Directory under the gear base directory holding all front-end state.
pub const CONFIG_DIR: &str = ".httpd.d";

const MARKER_PREFIX: &str = "server_alias-";
const MARKER_SUFFIX: &str = ".conf";
const ROUTES_FILE: &str = "routes.json";
const ALIAS_ROUTES_PREFIX: &str = "routes_alias-";
const ALIAS_ROUTES_SUFFIX: &str = ".json";
const LOCK_FILE: &str = ".alias.lock";

/// Resolves every front-end path for the gears on one node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GearLayout {
    root: PathBuf,
}

impl GearLayout {
    pub fn new(gear_base_dir: impl AsRef<Path>) -> Self {
        Self {
            root: gear_base_dir.as_ref().join(CONFIG_DIR),
        }
    }

    /// The shared `.httpd.d` directory all gears live under.
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn gear_dir(&self, gear: &GearIdentity) -> PathBuf {
        self.root.join(gear.token())
    }

    /// Marker file for `alias`, named exactly as given.
    pub fn alias_marker(&self, gear: &GearIdentity, alias: &str) -> PathBuf {
        self.gear_dir(gear)
            .join(format!("{MARKER_PREFIX}{alias}{MARKER_SUFFIX}"))
    }

    pub fn alias_routes(&self, gear: &GearIdentity, alias: &str) -> PathBuf {
        self.gear_dir(gear)
            .join(format!("{ALIAS_ROUTES_PREFIX}{alias}{ALIAS_ROUTES_SUFFIX}"))
    }

    pub fn default_routes(&self, gear: &GearIdentity) -> PathBuf {
        self.gear_dir(gear).join(ROUTES_FILE)
    }

    /// Lock file serializing alias creation across the node.
    pub fn lock_path(&self) -> PathBuf {
        self.root.join(LOCK_FILE)
    }

    /// Glob over the marker files of every gear.
    pub fn fleet_marker_pattern(&self) -> String {
        format!(
            "{}/*/{MARKER_PREFIX}*{MARKER_SUFFIX}",
            Pattern::escape(&self.root.to_string_lossy())
        )
    }

    /// Glob over the marker files of one gear.
    pub fn gear_marker_pattern(&self, gear: &GearIdentity) -> String {
        format!(
            "{}/{MARKER_PREFIX}*{MARKER_SUFFIX}",
            Pattern::escape(&self.gear_dir(gear).to_string_lossy())
        )
    }

    /// Glob over every directory whose token starts with the gear's uuid.
    ///
    /// Looser than [`GearLayout::gear_dir`]: namespace and name are ignored.
    pub fn uuid_pattern(&self, gear: &GearIdentity) -> String {
        format!(
            "{}/{}_*",
            Pattern::escape(&self.root.to_string_lossy()),
            Pattern::escape(gear.uuid())
        )
    }

    /// Alias name embedded in a marker file path, if it is one.
    pub fn alias_from_marker(path: &Path) -> Option<&str> {
        path.file_name()?
            .to_str()?
            .strip_prefix(MARKER_PREFIX)?
            .strip_suffix(MARKER_SUFFIX)
    }
}
