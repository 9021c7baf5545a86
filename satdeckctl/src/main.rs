use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Args as ClapArgs, Parser, Subcommand};
use satdeck_config::{ConfigLoad, ConfigLoader};
use satdeck_model::{ObjectType, OrbitCode};
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod render;

/// CLI entry point
#[derive(Parser, Debug)]
#[command(name = "satdeckctl", version)]
#[command(about = "Browse, search and sort the satellite catalog")]
struct Cli {
    /// Configuration file (TOML or JSON). Overrides SATDECK_CONFIG_PATH
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log filter directive, e.g. `debug` or `satdeck_core=trace`.
    /// Takes precedence over RUST_LOG and the configured filter
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List the catalog with the saved or given filters applied
    List(ListArgs),
    /// Search the full catalog by name or NORAD id
    Search(SearchArgs),
    /// Show selected satellites in the tracked view
    Tracked(TrackedArgs),
    /// Manage the saved filter selections
    #[command(subcommand)]
    Filters(FiltersCommand),
}

#[derive(ClapArgs, Debug, Clone, Default)]
struct SourceArgs {
    /// Catalog API base URL (overrides config)
    #[arg(long, conflicts_with = "file")]
    api: Option<String>,

    /// Read the catalog from a JSON dump instead of the API
    #[arg(long)]
    file: Option<PathBuf>,
}

#[derive(ClapArgs, Debug, Clone, Default)]
struct FilterArgs {
    /// Object type to include, e.g. PAYLOAD or "ROCKET BODY" (repeatable)
    #[arg(long = "object-type", value_name = "TYPE")]
    object_types: Vec<ObjectType>,

    /// Orbit code to include, e.g. LEO (repeatable)
    #[arg(long = "orbit-code", value_name = "CODE")]
    orbit_codes: Vec<OrbitCode>,
}

#[derive(ClapArgs, Debug)]
struct ListArgs {
    #[command(flatten)]
    source: SourceArgs,

    #[command(flatten)]
    filters: FilterArgs,

    /// Only show rows matching this query
    #[arg(long)]
    search: Option<String>,

    /// Sort by this field, e.g. name or launchDate
    #[arg(long, value_name = "KEY")]
    sort: Option<String>,

    /// Sort descending
    #[arg(long, requires = "sort")]
    desc: bool,

    /// Secondary ascending sort keys, applied to ties (repeatable)
    #[arg(long = "then-by", value_name = "KEY", requires = "sort")]
    then_by: Vec<String>,

    /// Show at most N rows
    #[arg(long, value_name = "N")]
    limit: Option<usize>,

    /// Print JSON instead of a table
    #[arg(long)]
    json: bool,
}

#[derive(ClapArgs, Debug)]
struct SearchArgs {
    /// Name fragment or NORAD id
    query: String,

    #[command(flatten)]
    source: SourceArgs,

    /// Print the search result as JSON
    #[arg(long)]
    json: bool,
}

#[derive(ClapArgs, Debug)]
struct TrackedArgs {
    /// NORAD id to select (repeatable)
    #[arg(long = "id", value_name = "NORAD_ID", required = true)]
    ids: Vec<String>,

    #[command(flatten)]
    source: SourceArgs,

    /// Narrow the tracked list by name, NORAD id or country code
    #[arg(long)]
    search: Option<String>,

    /// Print JSON instead of a table
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Subcommand)]
enum FiltersCommand {
    /// Print the saved filters
    Show,
    /// Replace the saved filters
    Set(FilterArgs),
    /// Remove the saved filters
    Clear,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut loader = ConfigLoader::new();
    if let Some(path) = &cli.config {
        loader = loader.with_config_path(path);
    }
    let ConfigLoad {
        config,
        source,
        env_file_loaded,
    } = loader.load().context("failed to load configuration")?;

    init_tracing(cli.log_level.as_deref(), &config.logging.filter);
    if env_file_loaded {
        info!("loaded .env file");
    }
    debug!(source = %source.describe(), "configuration resolved");

    let mut out = std::io::stdout().lock();
    match cli.command {
        Command::List(args) => commands::list(&config, args, &mut out).await?,
        Command::Search(args) => {
            commands::search(&config, args, &mut out).await?
        }
        Command::Tracked(args) => {
            commands::tracked(&config, args, &mut out).await?
        }
        Command::Filters(command) => {
            commands::filters(&config, command, &mut out)?
        }
    }
    out.flush()?;
    Ok(())
}

/// Logs go to stderr so table and JSON output stay machine-readable.
fn init_tracing(cli_filter: Option<&str>, configured: &str) {
    let filter = match cli_filter {
        Some(directive) => EnvFilter::new(directive),
        None => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(configured)),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
