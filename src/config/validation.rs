//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check the base directory and cloud domain are usable
//! - Check reload commands name a program
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: FrontendConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is handed to any gear handle

use std::fmt;

use crate::config::schema::{FrontendConfig, ReloadCommand};
use crate::routing::hostname;

/// One semantic problem with a configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validate a parsed configuration.
pub fn validate_config(config: &FrontendConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.gear_base_dir.as_os_str().is_empty() {
        errors.push(ValidationError::new("gear_base_dir", "must not be empty"));
    } else if !config.gear_base_dir.is_absolute() {
        errors.push(ValidationError::new("gear_base_dir", "must be an absolute path"));
    }

    if let Err((kind, _)) = hostname::normalize(&config.cloud_domain) {
        errors.push(ValidationError::new("cloud_domain", kind.to_string()));
    }

    check_command("reload.httpd", &config.reload.httpd, &mut errors);
    check_command("reload.proxy", &config.reload.proxy, &mut errors);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_command(field: &'static str, command: &ReloadCommand, errors: &mut Vec<ValidationError>) {
    if command.program.trim().is_empty() {
        errors.push(ValidationError::new(field, "program must not be empty"));
    }
    if let Some(flag) = &command.background_flag {
        if flag.trim().is_empty() {
            errors.push(ValidationError::new(field, "background_flag must not be blank"));
        }
    }
}
