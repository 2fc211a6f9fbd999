use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use swarm_stack::StackManager;
use swarm_stack::config::{self, Config};
use swarm_stack::docker::Stack;

#[derive(Parser)]
#[command(name = "swarm-stack")]
#[command(about = "Registry logins and swarm stack deploys through the docker CLI", long_about = None)]
struct Cli {
    /// Config file (defaults to ./swarm-stack.yml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Directory containing the docker binary (overrides the config)
    #[arg(long, global = true)]
    binary_path: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in to every authenticated registry, then Docker Hub
    Login,

    /// Log out of the default registry
    Logout,

    /// Deploy the stack
    Deploy {
        /// Stack name
        #[arg(short, long)]
        name: Option<String>,

        /// Project directory holding the compose file
        #[arg(short, long)]
        project_path: Option<PathBuf>,

        /// Compose file, relative to the project directory
        #[arg(short, long)]
        entry_point: Option<String>,
    },

    /// Remove the stack
    Remove {
        /// Stack name
        #[arg(short, long)]
        name: Option<String>,
    },
}

fn main() -> ExitCode {
    init_tracing();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("swarm_stack=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let mut cfg = load_config(cli.config.as_deref())?;
    if let Some(dir) = cli.binary_path {
        cfg.binary_path = dir;
    }

    let manager = StackManager::new(cfg.binary_path.clone());

    match cli.command {
        Commands::Login => manager.login(&cfg.dockerhub, &cfg.registries, &cfg.endpoint)?,
        Commands::Logout => manager.logout(&cfg.endpoint)?,
        Commands::Deploy {
            name,
            project_path,
            entry_point,
        } => {
            let stack = resolve_stack(cfg.stack.clone(), name, project_path, entry_point)?;
            manager.deploy(&stack, &cfg.endpoint)?;
        }
        Commands::Remove { name } => {
            let stack = resolve_stack(cfg.stack.clone(), name, None, None)?;
            manager.remove(&stack, &cfg.endpoint)?;
        }
    }

    Ok(())
}

/// Explicit `--config`, or `swarm-stack.yml` in the working directory.
fn load_config(path: Option<&std::path::Path>) -> Result<Config> {
    if let Some(path) = path {
        return config::load(path);
    }

    let cwd = std::env::current_dir().context("failed to read the working directory")?;
    match config::load_from_dir(&cwd)? {
        Some(cfg) => Ok(cfg),
        None => bail!(
            "no {} in {}; pass --config",
            config::CONFIG_FILE_NAME,
            cwd.display()
        ),
    }
}

/// Apply command-line overrides to the configured stack.
fn resolve_stack(
    mut stack: Stack,
    name: Option<String>,
    project_path: Option<PathBuf>,
    entry_point: Option<String>,
) -> Result<Stack> {
    if let Some(name) = name {
        stack.name = name;
    }
    if let Some(project_path) = project_path {
        stack.project_path = project_path;
    }
    if let Some(entry_point) = entry_point {
        stack.entry_point = entry_point;
    }

    if stack.name.trim().is_empty() {
        bail!("stack name must be set (config `stack.name` or --name)");
    }
    Ok(stack)
}
