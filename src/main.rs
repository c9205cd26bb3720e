//! crumbs: condense paths and breadcrumb trails to fit a display budget

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::debug;

use crumbs::commands::config::handle_config_command;
use crumbs::commands::items::handle_items_command;
use crumbs::commands::path::handle_path_command;
use crumbs::commands::DisplayArgs;
use crumbs::core::Settings;

#[derive(Parser)]
#[command(name = "crumbs")]
#[command(about = "Condense paths and breadcrumb trails with an ellipsis")]
#[command(version)]
struct Cli {
    /// Config file to use instead of the default location
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log decisions to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Condense a filesystem path (default: current directory)
    Path {
        path: Option<PathBuf>,

        /// Keep the home directory spelled out instead of `~`
        #[arg(long)]
        no_home: bool,

        #[command(flatten)]
        display: DisplayArgs,
    },
    /// Condense a JSON array of breadcrumbs read from FILE or stdin
    Items {
        /// JSON file, or `-` for stdin
        file: Option<PathBuf>,

        #[command(flatten)]
        display: DisplayArgs,
    },
    /// Show the effective settings and where they came from
    Config,
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "crumbs=debug" } else { "crumbs=warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let (settings, source) = Settings::load(cli.config.as_deref())?;
    debug!(?source, "settings loaded");

    let output = match cli.command {
        Commands::Path { path, no_home, display } => handle_path_command(path, no_home, &display, &settings)?,
        Commands::Items { file, display } => handle_items_command(file, &display, &settings)?,
        Commands::Config => handle_config_command(&settings, &source)?,
    };

    println!("{output}");
    Ok(())
}
