//! cityfind: command-line prefix search over the bundled city dataset
//!
//! Usage examples
//! --------------
//!
//! - Show overall stats
//!   $ cityfind stats
//!
//! - Search by prefix (case-insensitive, name then country code)
//!   $ cityfind search al
//!   $ cityfind search "paris, u"
//!
//! - List everything in search order
//!   $ cityfind list -n 10
//!
//! Data source
//! -----------
//!
//! By default the CLI reads `cities.json` bundled with `cityfind-core`.
//! Use `--input <path>` (or `CITYFIND_DATA`) for another `.json`/`.json.gz`
//! file, or `--embedded` for the copy compiled into the binary.

use anyhow::{bail, Context};
use cityfind_cli::args::{CliArgs, Commands};
use cityfind_cli::output;
use cityfind_core::{BundledCities, CityRepository, FlagDirectory, LoadState};
use clap::Parser;
use std::io::{self, Write};
use std::sync::Arc;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    init_logging(&args)?;

    let source = match (&args.input, args.embedded) {
        (_, true) => BundledCities::embedded(),
        (Some(path), false) => BundledCities::from_path(path),
        (None, false) => BundledCities::default(),
    };
    let flags = args
        .flags
        .clone()
        .map(FlagDirectory::new)
        .unwrap_or_default();
    debug!(source = ?source.location(), flags = %flags.root().display(), "configured");

    let repo = Arc::new(CityRepository::new(source, flags));

    // Preload in the background; the command path only waits for the result.
    let preload = tokio::task::spawn_blocking({
        let repo = Arc::clone(&repo);
        move || repo.load()
    });

    let snapshot = match repo.wait_settled().await {
        LoadState::Success(cities) => cities,
        LoadState::Error { message, cause } => {
            bail!("{message}: {cause}");
        }
        other => bail!("dataset load did not settle: {other:?}"),
    };
    preload.await.context("preload task failed")?;
    info!(cities = snapshot.len(), "dataset ready");

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match args.command {
        Commands::Stats => {
            if let Some(stats) = repo.stats() {
                output::write_stats(&mut out, stats)?;
            }
        }

        Commands::List { limit, json } => {
            let cities = take(&snapshot[..], limit);
            if json {
                output::write_json(&mut out, cities)?;
            } else {
                output::write_text(&mut out, cities)?;
            }
        }

        Commands::Search { query, limit, json } => {
            let matches = repo.search(&query);
            let cities = take(matches.as_slice(), limit);
            if json {
                output::write_json(&mut out, cities)?;
            } else if cities.is_empty() {
                writeln!(out, "No cities found matching: {query}")?;
            } else {
                output::write_text(&mut out, cities)?;
            }
        }
    }

    Ok(())
}

fn take<T>(items: &[T], limit: Option<usize>) -> &[T] {
    match limit {
        Some(n) => &items[..n.min(items.len())],
        None => items,
    }
}

fn init_logging(args: &CliArgs) -> anyhow::Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(args.log_level().to_string())?,
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
    Ok(())
}
