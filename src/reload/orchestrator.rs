//! Combined reload of the node web proxy and the virtual-host engine.

use std::sync::Arc;

use crate::config::{ReloadCommand, ReloadConfig};
use crate::observability::metrics;
use crate::reload::runner::{CommandOutput, CommandRunner};

/// Aggregated output of a combined reload.
pub type ReloadOutput = CommandOutput;

/// Triggers reloads of both downstream consumers.
#[derive(Debug, Clone)]
pub struct ReloadOrchestrator {
    config: ReloadConfig,
    runner: Arc<dyn CommandRunner>,
    gear_uuid: String,
}

impl ReloadOrchestrator {
    pub fn new(config: ReloadConfig, runner: Arc<dyn CommandRunner>, gear_uuid: impl Into<String>) -> Self {
        Self {
            config,
            runner,
            gear_uuid: gear_uuid.into(),
        }
    }

    /// Reload the proxy, then the virtual hosts, and combine the results.
    ///
    /// Both reloads always run. Outputs are concatenated in that order and
    /// the exit code is the last non-zero one seen, or 0.
    pub fn reload_all(&self, background: bool) -> ReloadOutput {
        let mut combined = ReloadOutput::default();

        for out in [self.reload_proxy(), self.reload_httpd(background)] {
            combined.stdout.push_str(&out.stdout);
            combined.stderr.push_str(&out.stderr);
            if out.exit_code != 0 {
                combined.exit_code = out.exit_code;
            }
        }
        combined
    }

    /// Reload the virtual-host engine, optionally in the background.
    pub fn reload_httpd(&self, background: bool) -> CommandOutput {
        self.invoke("httpd", &self.config.httpd, background)
    }

    /// Reload the node web proxy.
    pub fn reload_proxy(&self) -> CommandOutput {
        self.invoke("proxy", &self.config.proxy, false)
    }

    fn invoke(&self, consumer: &'static str, command: &ReloadCommand, background: bool) -> CommandOutput {
        let out = self.runner.run(&command.program, &command.argv(background));

        if out.is_success() {
            tracing::debug!(gear = %self.gear_uuid, consumer, "Reload succeeded");
        } else {
            tracing::error!(
                alert = true,
                gear = %self.gear_uuid,
                consumer,
                program = %command.program,
                exit_code = out.exit_code,
                stdout = %out.stdout,
                stderr = %out.stderr,
                "ERROR: reload command failed"
            );
        }
        metrics::record_reload(consumer, out.is_success());
        out
    }
}
