//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (structured log events, alert-level diagnostics)
//!     → metrics.rs (counters)
//!
//! Consumers:
//!     → stderr (text or JSON lines)
//!     → whatever metrics recorder the host process installs
//! ```
//!
//! # Design Decisions
//! - Reload and routing-document failures are `error` events tagged
//!   `alert = true`, never returned errors
//! - Every event carries the gear uuid

pub mod logging;
pub mod metrics;
