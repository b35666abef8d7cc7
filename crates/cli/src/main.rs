//! count-blocks - PGE File Library sample client
//!
//! Activates the level component, creates an empty level, appends blocks
//! and prints `Num of blocks: N`. Logs go to stderr.

use anyhow::Context;
use clap::Parser;
use pgefile_cli::{run, Assignment, RunOptions};
use pgefile_client::ComponentFactory;
use pgefile_config::{ClientConfig, DEFAULT_CONFIG_FILE};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "count-blocks", version, about = "Create a level, add blocks, report the block count")]
struct Cli {
    /// Config file (defaults to ./filelib.txt when present)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Component identifier to activate
    #[arg(long, value_name = "ID")]
    component: Option<String>,

    /// Number of blocks to append
    #[arg(long, value_name = "N")]
    blocks: Option<usize>,

    /// Block property assignment, applied to every appended block
    #[arg(long = "set", value_name = "MEMBER=VALUE")]
    assignments: Vec<Assignment>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // An explicit config path must load; the default one is optional.
    // A default-file failure is logged once the subscriber is up.
    let mut fallback = None;
    let (config, config_source) = match &cli.config {
        Some(path) => {
            let config = ClientConfig::load_from_file(path)
                .with_context(|| format!("failed to load config {}", path.display()))?;
            (config, Some(path.clone()))
        }
        None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
            match ClientConfig::load_from_file(DEFAULT_CONFIG_FILE) {
                Ok(config) => (config, Some(PathBuf::from(DEFAULT_CONFIG_FILE))),
                Err(e) => {
                    fallback = Some(e);
                    (ClientConfig::default(), None)
                }
            }
        }
        None => (ClientConfig::default(), None),
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match (&config_source, fallback) {
        (Some(path), _) => info!("Loaded configuration from {}", path.display()),
        (None, Some(e)) => warn!("{}; using default configuration", e),
        (None, None) => debug!("No {} found, using defaults", DEFAULT_CONFIG_FILE),
    }
    config.display();

    let options = RunOptions::resolve(&config, cli.component, cli.blocks, cli.assignments);

    let factory = ComponentFactory::with_defaults();
    let stdout = std::io::stdout();
    run(&factory, &options, &mut stdout.lock())?;
    Ok(())
}
