//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → FrontendConfig (validated, immutable)
//!     → passed by value to each FrontendHttpServer handle
//! ```
//!
//! # Design Decisions
//! - No process-wide settings store: callers hand the config to the handle
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::FrontendConfig;
pub use schema::ObservabilityConfig;
pub use schema::ReloadCommand;
pub use schema::ReloadConfig;
