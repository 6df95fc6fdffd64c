//! Per-gear front-end routing configuration for a multi-tenant node.
//!
//! Maps public hostnames and aliases of each gear to on-disk files read by
//! the Apache virtual-host engine and the node web proxy, and reloads both
//! after every change.

pub mod config;
pub mod frontend;
pub mod gear;
pub mod observability;
pub mod reload;
pub mod routing;

pub use config::FrontendConfig;
pub use frontend::{FrontendError, FrontendHttpServer};
pub use gear::GearIdentity;
