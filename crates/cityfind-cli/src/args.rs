use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;
use tracing::level_filters::LevelFilter;

/// CLI arguments for cityfind
#[derive(Debug, Parser)]
#[command(
    name = "cityfind",
    version,
    about = "Prefix search over the bundled city dataset"
)]
pub struct CliArgs {
    /// Path to a cities JSON (or .json.gz) file (default: the bundled cities.json)
    #[arg(short = 'i', long = "input", env = "CITYFIND_DATA", global = true)]
    pub input: Option<PathBuf>,

    /// Use the dataset compiled into the binary instead of reading a file
    #[arg(long, global = true, conflicts_with = "input")]
    pub embedded: bool,

    /// Directory containing flag_<code>.png images
    #[arg(long = "flags", env = "CITYFIND_FLAGS", global = true)]
    pub flags: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace). RUST_LOG wins if set.
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

impl CliArgs {
    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show a summary of the dataset
    Stats,

    /// List all cities in search order
    List {
        /// Print at most this many cities
        #[arg(short = 'n', long)]
        limit: Option<usize>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Search cities by name prefix (case-insensitive)
    Search {
        /// Prefix to search, e.g. "al" or "london, g"
        query: String,

        /// Print at most this many cities
        #[arg(short = 'n', long)]
        limit: Option<usize>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}
