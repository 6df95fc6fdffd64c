//! Front-end error definitions.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::gear::GearIdentity;
use crate::routing::hostname::NameViolation;

/// Errors raised by front-end operations.
///
/// Every variant carries the gear it was raised for; messages append the
/// gear's uuid, container name and namespace.
#[derive(Debug, Error)]
pub enum FrontendError {
    /// A hostname or alias failed validation.
    #[error("{kind}: {gear}: {name}")]
    Name {
        gear: GearIdentity,
        name: String,
        kind: NameViolation,
    },

    /// Another gear on the node (or this one) already owns the alias.
    #[error("Already exists: {gear}: {alias}")]
    AliasAlreadyExists { gear: GearIdentity, alias: String },

    /// Operation is an extension point with no implementation.
    #[error("Not implemented: {operation}: {gear}")]
    NotImplemented {
        gear: GearIdentity,
        operation: &'static str,
    },

    /// Filesystem failure on a primary (non best-effort) step.
    #[error("I/O error on {}: {source}: {gear}", .path.display())]
    Io {
        gear: GearIdentity,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A search pattern could not be compiled.
    #[error("Invalid search pattern {pattern}: {source}: {gear}")]
    Search {
        gear: GearIdentity,
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    /// The node-wide alias lock could not be taken.
    #[error("Failed to lock {}: {source}: {gear}", .path.display())]
    Lock {
        gear: GearIdentity,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl FrontendError {
    pub(crate) fn io(gear: &GearIdentity, path: impl Into<PathBuf>, source: io::Error) -> Self {
        FrontendError::Io {
            gear: gear.clone(),
            path: path.into(),
            source,
        }
    }

    /// The gear this error was raised for.
    pub fn gear(&self) -> &GearIdentity {
        match self {
            FrontendError::Name { gear, .. }
            | FrontendError::AliasAlreadyExists { gear, .. }
            | FrontendError::NotImplemented { gear, .. }
            | FrontendError::Io { gear, .. }
            | FrontendError::Search { gear, .. }
            | FrontendError::Lock { gear, .. } => gear,
        }
    }
}

/// Result type for front-end operations.
pub type FrontendResult<T> = Result<T, FrontendError>;
