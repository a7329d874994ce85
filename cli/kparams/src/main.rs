//! kparams CLI — resolve platform parameters from the command line.

mod commands;
mod config;

use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use config::KparamsConfig;

#[derive(Parser)]
#[command(name = "kparams", version, about = "Platform parameter registry")]
struct Cli {
    /// Config file (default: kparams.toml in the current directory or an ancestor)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct PlatformArgs {
    /// Machine identifier (e.g., iPhone8,2)
    #[arg(long)]
    machine: Option<String>,
    /// OS build identifier (e.g., 16E227)
    #[arg(long)]
    build: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the parameters resolved for a platform
    Resolve {
        #[command(flatten)]
        platform: PlatformArgs,
        /// Output format (text, json)
        #[arg(long)]
        format: Option<String>,
        /// Print a single parameter, e.g. "SIZE(ipc_port)"
        #[arg(long)]
        key: Option<String>,
    },
    /// Check whether a platform is recognized (exit status 2 if not)
    Check {
        #[command(flatten)]
        platform: PlatformArgs,
    },
    /// List the built-in rule tables
    Tables {
        #[command(flatten)]
        platform: PlatformArgs,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("error: {e:#}");
            process::exit(1);
        }
    }
}

fn load_config(explicit: Option<&PathBuf>) -> Result<KparamsConfig> {
    if let Some(path) = explicit {
        return KparamsConfig::load(path);
    }
    let cwd = std::env::current_dir()?;
    match KparamsConfig::find_and_load(&cwd)? {
        Some((config, path)) => {
            log::debug!("using config {}", path.display());
            Ok(config)
        }
        None => Ok(KparamsConfig::default()),
    }
}

fn run(cli: Cli) -> Result<i32> {
    let config = load_config(cli.config.as_ref())?;

    match cli.command {
        Commands::Resolve {
            platform,
            format,
            key,
        } => {
            let platform = commands::require_platform(
                platform.machine.as_deref(),
                platform.build.as_deref(),
                &config,
            )?;
            commands::resolve::run(platform, &config.policy, format.as_deref(), key.as_deref())?;
            Ok(0)
        }

        Commands::Check { platform } => {
            let platform = commands::require_platform(
                platform.machine.as_deref(),
                platform.build.as_deref(),
                &config,
            )?;
            let recognized = commands::check::run(platform, &config.policy)?;
            Ok(if recognized { 0 } else { 2 })
        }

        Commands::Tables { platform } => {
            let platform = commands::resolve_platform(
                platform.machine.as_deref(),
                platform.build.as_deref(),
                &config,
            )?;
            commands::tables::run(platform)?;
            Ok(0)
        }
    }
}
