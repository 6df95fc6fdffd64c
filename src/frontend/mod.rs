//! Front-end HTTP configuration handle.
//!
//! # Data Flow
//! ```text
//! gear lifecycle manager
//!     → FrontendHttpServer::new(gear, &config)
//!     → create / destroy                    (gear directory)
//!     → add_alias / remove_alias            (routing/)
//!     → reload_all                          (reload/)
//! ```
//!
//! # Design Decisions
//! - One handle per gear; identity never changes after construction
//! - Validation and conflict errors are raised before anything is written
//! - connect/disconnect are present but unimplemented

pub mod error;
pub mod server;

pub use error::{FrontendError, FrontendResult};
pub use server::{AliasAdded, AliasRemoved, FrontendHttpServer};
