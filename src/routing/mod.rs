//! Alias routing subsystem.
//!
//! # Data Flow
//! ```text
//! add_alias(name)
//!     → hostname.rs (normalize + validate)
//!     → lock.rs (node-wide exclusive lock)
//!     → alias.rs (fleet-wide search, write marker)
//!     → document.rs (derive routes_alias-<alias>.json, best-effort)
//!
//! remove_alias(name)
//!     → hostname.rs
//!     → document.rs (remove derived document)
//!     → alias.rs (gear-local search, remove markers)
//! ```
//!
//! # Design Decisions
//! - Uniqueness is node-wide and case-insensitive
//! - Derived documents never block or undo an alias change
//! - Reloading downstream services is left to the caller

pub mod alias;
pub mod document;
pub mod hostname;
pub mod lock;

pub use alias::AliasStore;
pub use document::{DocumentOutcome, RouteDocuments};
pub use hostname::NameViolation;
pub use lock::FleetLock;
