//! Gear front-end manager CLI.
//!
//! Manages one gear's front-end routing files and reloads the downstream
//! services, the same way the gear lifecycle manager drives the library.
//!
//! ```text
//! gear-frontend --uuid U --name N --namespace NS add-alias www.example.com
//! ```

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use serde::Serialize;
use serde_json::json;

use gear_frontend::config::{load_config, validation::validate_config, ConfigError, FrontendConfig};
use gear_frontend::observability::logging::init_logging;
use gear_frontend::reload::SystemRunner;
use gear_frontend::{FrontendHttpServer, GearIdentity};

const DEFAULT_CONFIG_PATH: &str = "/etc/openshift/frontend.toml";

#[derive(Parser)]
#[command(name = "gear-frontend")]
#[command(about = "Manage per-gear front-end routing configuration", long_about = None)]
struct Cli {
    /// Configuration file (TOML).
    #[arg(short, long, env = "GEAR_FRONTEND_CONFIG")]
    config: Option<PathBuf>,

    /// Override the gear base directory.
    #[arg(long, env = "GEAR_BASE_DIR")]
    gear_base_dir: Option<PathBuf>,

    /// Override the cloud domain.
    #[arg(long, env = "CLOUD_DOMAIN")]
    cloud_domain: Option<String>,

    /// Gear uuid.
    #[arg(long)]
    uuid: String,

    /// Gear container name.
    #[arg(long)]
    name: String,

    /// Gear namespace.
    #[arg(long)]
    namespace: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Reset the gear's configuration directory
    Create,
    /// Remove the gear's configuration and reload
    Destroy {
        /// Wait for the virtual-host reload instead of backgrounding it
        #[arg(long)]
        foreground: bool,
    },
    /// Add a hostname alias
    AddAlias { alias: String },
    /// Remove a hostname alias
    RemoveAlias { alias: String },
    /// List the gear's aliases
    ListAliases,
    /// Reload the node web proxy and virtual hosts
    Reload {
        /// Ask the virtual-host reload to background itself
        #[arg(long)]
        background: bool,
    },
    /// Connect a path to a back-end URI (not implemented)
    Connect { path: String, uri: String },
    /// Disconnect a path (not implemented)
    Disconnect { path: String },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match resolve_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };
    init_logging(&config.observability);

    let gear = GearIdentity::new(&cli.uuid, &cli.name, &cli.namespace);
    let server = FrontendHttpServer::with_runner(gear, &config, Arc::new(SystemRunner));

    match run(&server, cli.command) {
        Ok(0) => ExitCode::SUCCESS,
        Ok(code) => ExitCode::from(u8::try_from(code).unwrap_or(1)),
        Err(e) => {
            tracing::error!(error = %e, "Command failed");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Load the config file (explicit, else the default path if present), then
/// apply command-line and environment overrides.
fn resolve_config(cli: &Cli) -> Result<FrontendConfig, ConfigError> {
    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None if Path::new(DEFAULT_CONFIG_PATH).exists() => load_config(Path::new(DEFAULT_CONFIG_PATH))?,
        None => FrontendConfig::default(),
    };

    if let Some(dir) = &cli.gear_base_dir {
        config.gear_base_dir = dir.clone();
    }
    if let Some(domain) = &cli.cloud_domain {
        config.cloud_domain = domain.clone();
    }
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

/// Run one command; returns the reload exit code to exit with.
fn run(server: &FrontendHttpServer, command: Commands) -> Result<i32, Box<dyn std::error::Error>> {
    match command {
        Commands::Create => {
            server.create()?;
            print_json(&json!({ "status": "created", "gear": server.gear() }))?;
            Ok(0)
        }
        Commands::Destroy { foreground } => {
            let reload = server.destroy(!foreground)?;
            print_json(&reload)?;
            Ok(reload.exit_code)
        }
        Commands::AddAlias { alias } => {
            let added = server.add_alias(&alias)?;
            print_json(&added)?;
            Ok(added.reload.exit_code)
        }
        Commands::RemoveAlias { alias } => {
            let removed = server.remove_alias(&alias)?;
            print_json(&removed)?;
            Ok(removed.reload.exit_code)
        }
        Commands::ListAliases => {
            print_json(&server.aliases()?)?;
            Ok(0)
        }
        Commands::Reload { background } => {
            let reload = server.reload_all(background);
            print_json(&reload)?;
            Ok(reload.exit_code)
        }
        Commands::Connect { path, uri } => {
            server.connect(&path, &uri, &HashMap::new())?;
            Ok(0)
        }
        Commands::Disconnect { path } => {
            server.disconnect(&path)?;
            Ok(0)
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
