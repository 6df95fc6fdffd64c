//! Reload orchestration subsystem.
//!
//! # Data Flow
//! ```text
//! reload_all(background)
//!     → orchestrator.rs
//!         → runner.rs: node web proxy reload   (stdout, stderr, rc)
//!         → runner.rs: virtual-host reload     (stdout, stderr, rc)
//!     → concatenated stdout/stderr, last non-zero rc
//! ```
//!
//! # Design Decisions
//! - Synchronous: the caller blocks until both commands return
//! - No short-circuit: the second reload runs even if the first failed
//! - Failures are alerts plus exit codes, never errors
//! - `CommandRunner` is the seam tests replace

pub mod orchestrator;
pub mod runner;

pub use orchestrator::{ReloadOrchestrator, ReloadOutput};
pub use runner::{CommandOutput, CommandRunner, SystemRunner};
