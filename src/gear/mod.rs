//! Gear identity and on-disk layout.
//!
//! # Data Flow
//! ```text
//! (uuid, container name, namespace)
//!     → identity.rs (GearIdentity, directory token)
//!     → layout.rs (GearLayout: directories, marker files, routing documents)
//!     → consumed by routing/ and frontend/
//! ```
//!
//! # Design Decisions
//! - Identity is immutable once a handle is built
//! - Path derivation is pure: no I/O, no validation of identity parts
//! - Glob patterns escape every caller-supplied component

pub mod identity;
pub mod layout;

pub use identity::GearIdentity;
pub use layout::GearLayout;
