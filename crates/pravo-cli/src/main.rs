use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use pravo_config::{PROJECT_DIR, PravoConfig};

mod bootstrap;
mod cli;
mod commands;
mod context;
mod device;
mod output;
mod progress;
mod ui;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("pravo error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    let flags = cli.global_flags();
    init_tracing(flags.quiet, flags.verbose)?;
    ui::init(&flags);

    let project_root = match &cli.command {
        cli::Commands::Init => commands::init::prepare_project_root(flags.project.as_deref())?,
        _ => resolve_project_root(flags.project.as_deref())?,
    };

    bootstrap::load_project_dotenv(&project_root)?;
    let config = PravoConfig::load_for_project(&project_root)
        .context("failed to load pravo configuration")?;
    config.validate().context("invalid pravo configuration")?;
    context::warn_unconfigured(&config);

    let ctx = context::AppContext::init(project_root, config)
        .await
        .context("failed to initialize pravo application context")?;

    commands::dispatch::dispatch(cli.command, &ctx, &flags).await
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("PRAVO_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}

fn resolve_project_root(project_override: Option<&str>) -> anyhow::Result<PathBuf> {
    if let Some(path) = project_override {
        let explicit = context::strip_project_dir(PathBuf::from(path));
        if explicit.join(PROJECT_DIR).is_dir() {
            return Ok(explicit);
        }
        anyhow::bail!(
            "invalid --project '{}': no {PROJECT_DIR} directory. Run 'pravo init' first.",
            explicit.display()
        );
    }

    let start = std::env::current_dir().context("failed to read current directory")?;
    context::find_project_root(&start)
        .context("not a pravo project (no .pravo directory found). Run 'pravo init' first.")
}
