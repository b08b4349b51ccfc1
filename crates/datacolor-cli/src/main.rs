//! # datacolor CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use datacolor_cli::color::{run_color, ColorArgs};
use datacolor_cli::dump::{run_dump, DumpArgs};
use datacolor_cli::nearest::{run_nearest, NearestArgs};
use datacolor_cli::preset::{run_preset, PresetArgs};
use datacolor_cli::snapshot::{run_snapshot, SnapshotArgs};
use datacolor_gradient::DEFAULT_CACHE_CAPACITY;

/// Map data points to colors.
///
/// A factory configuration lists dimensions, each a gradient of anchor
/// colors over a numeric range, and a blend method that combines the
/// per-dimension colors into one.
#[derive(Parser, Debug)]
#[command(name = "datacolor", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Maximum number of memoized results per factory.
    #[arg(long, global = true, default_value_t = DEFAULT_CACHE_CAPACITY)]
    cache_capacity: usize,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Evaluate a factory configuration at one data point.
    Color(ColorArgs),

    /// Print a human-readable listing of a factory configuration.
    Dump(DumpArgs),

    /// Print the canonical snapshot and fingerprint of a configuration.
    Snapshot(SnapshotArgs),

    /// Find the CSS color name nearest to a color.
    Nearest(NearestArgs),

    /// Dump or evaluate a built-in demo factory.
    Preset(PresetArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(cache_capacity = cli.cache_capacity, "datacolor starting");

    let result = match &cli.command {
        Commands::Color(args) => run_color(args, cli.cache_capacity),
        Commands::Dump(args) => run_dump(args, cli.cache_capacity),
        Commands::Snapshot(args) => run_snapshot(args, cli.cache_capacity),
        Commands::Nearest(args) => run_nearest(args),
        Commands::Preset(args) => run_preset(args, cli.cache_capacity),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
