//! Shared fixtures for integration tests.

use std::collections::VecDeque;
use std::path::Path;
use std::sync::{Arc, Mutex};

use gear_frontend::config::FrontendConfig;
use gear_frontend::reload::{CommandOutput, CommandRunner};
use gear_frontend::{FrontendHttpServer, GearIdentity};

pub const CLOUD_DOMAIN: &str = "cloud.example";

/// Command runner that records invocations and replays queued outputs.
///
/// Once the queue is empty every command succeeds with no output.
#[derive(Debug, Default)]
pub struct ScriptedRunner {
    outputs: Mutex<VecDeque<CommandOutput>>,
    calls: Mutex<Vec<Vec<String>>>,
}

#[allow(dead_code)]
impl ScriptedRunner {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn push(&self, output: CommandOutput) {
        self.outputs.lock().unwrap().push_back(output);
    }

    /// Every call as `[program, args...]`.
    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls.lock().unwrap().clone()
    }
}

impl CommandRunner for ScriptedRunner {
    fn run(&self, program: &str, args: &[String]) -> CommandOutput {
        let mut call = vec![program.to_string()];
        call.extend(args.iter().cloned());
        self.calls.lock().unwrap().push(call);
        self.outputs.lock().unwrap().pop_front().unwrap_or_default()
    }
}

/// A temporary node with any number of gears.
pub struct Fleet {
    pub dir: tempfile::TempDir,
    pub runner: Arc<ScriptedRunner>,
}

#[allow(dead_code)]
impl Fleet {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
            runner: ScriptedRunner::new(),
        }
    }

    pub fn base(&self) -> &Path {
        self.dir.path()
    }

    pub fn config(&self) -> FrontendConfig {
        FrontendConfig {
            gear_base_dir: self.base().to_path_buf(),
            cloud_domain: CLOUD_DOMAIN.to_string(),
            ..FrontendConfig::default()
        }
    }

    /// Handle for a gear; its directory is not created.
    pub fn handle(&self, uuid: &str, name: &str, namespace: &str) -> FrontendHttpServer {
        FrontendHttpServer::with_runner(
            GearIdentity::new(uuid, name, namespace),
            &self.config(),
            self.runner.clone(),
        )
    }

    /// Handle for a freshly created gear with a random uuid.
    pub fn gear(&self, name: &str, namespace: &str) -> FrontendHttpServer {
        let uuid = uuid::Uuid::new_v4().simple().to_string();
        let server = self.handle(&uuid, name, namespace);
        server.create().unwrap();
        server
    }
}
