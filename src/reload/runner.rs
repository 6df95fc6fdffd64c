//! Process invocation for reload commands.

use std::fmt::Debug;
use std::io;
use std::process::Command;

use serde::Serialize;

/// Exit code reported when a command could not be started at all.
pub const SPAWN_FAILURE_EXIT_CODE: i32 = 127;

/// Captured result of one command.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
}

impl CommandOutput {
    pub fn new(stdout: impl Into<String>, stderr: impl Into<String>, exit_code: i32) -> Self {
        Self {
            stdout: stdout.into(),
            stderr: stderr.into(),
            exit_code,
        }
    }

    pub fn is_success(&self) -> bool {
        self.exit_code == 0
    }

    fn spawn_failure(program: &str, err: &io::Error) -> Self {
        Self::new(
            String::new(),
            format!("failed to run {program}: {err}"),
            SPAWN_FAILURE_EXIT_CODE,
        )
    }
}

/// Runs an external command to completion.
///
/// Never fails: anything that goes wrong is folded into the exit code and
/// stderr so reloads stay best-effort.
pub trait CommandRunner: Send + Sync + Debug {
    fn run(&self, program: &str, args: &[String]) -> CommandOutput;
}

/// Runs commands on the host with `std::process::Command`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[String]) -> CommandOutput {
        tracing::debug!(program, ?args, "Running command");

        match Command::new(program).args(args).output() {
            Ok(output) => CommandOutput {
                stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
                // Terminated by a signal.
                exit_code: output.status.code().unwrap_or(-1),
            },
            Err(e) => {
                tracing::warn!(program, error = %e, "Failed to spawn command");
                CommandOutput::spawn_failure(program, &e)
            }
        }
    }
}
