//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from the TOML config
//! file, and every field has a default so a minimal file is enough.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Root configuration for the gear front-end manager.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct FrontendConfig {
    /// Directory holding gear state; front-end files live in `.httpd.d` below it.
    pub gear_base_dir: PathBuf,

    /// Domain suffix of every gear's canonical hostname.
    pub cloud_domain: String,

    /// Commands that make downstream services re-read their configuration.
    pub reload: ReloadConfig,

    /// Logging settings.
    pub observability: ObservabilityConfig,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            gear_base_dir: PathBuf::from("/var/lib/openshift"),
            cloud_domain: "example.com".to_string(),
            reload: ReloadConfig::default(),
            observability: ObservabilityConfig::default(),
        }
    }
}

/// Reload commands for the two downstream consumers.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ReloadConfig {
    /// Virtual-host engine (Apache) reload.
    pub httpd: ReloadCommand,

    /// Node web proxy reload.
    pub proxy: ReloadCommand,
}

impl Default for ReloadConfig {
    fn default() -> Self {
        Self {
            httpd: ReloadCommand {
                program: "/usr/sbin/oo-httpd-singular".to_string(),
                args: vec!["graceful".to_string()],
                background_flag: Some("-b".to_string()),
            },
            proxy: ReloadCommand {
                program: "service".to_string(),
                args: vec!["openshift-node-web-proxy".to_string(), "reload".to_string()],
                background_flag: None,
            },
        }
    }
}

/// One external reload command.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct ReloadCommand {
    /// Executable to run.
    pub program: String,

    /// Fixed arguments.
    #[serde(default)]
    pub args: Vec<String>,

    /// Flag placed before `args` when the reload should background itself.
    #[serde(default)]
    pub background_flag: Option<String>,
}

impl ReloadCommand {
    /// Full argument list for one invocation.
    pub fn argv(&self, background: bool) -> Vec<String> {
        let mut argv = Vec::with_capacity(self.args.len() + 1);
        if background {
            if let Some(flag) = &self.background_flag {
                argv.push(flag.clone());
            }
        }
        argv.extend(self.args.iter().cloned());
        argv
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Emit JSON log lines instead of human-readable ones.
    pub json: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            json: false,
        }
    }
}
