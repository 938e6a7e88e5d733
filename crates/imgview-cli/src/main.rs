mod commands;
mod logging;
mod summary;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "imgview",
    about = "Inspect image files: metadata, value range, histogram, pixels"
)]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Append log output to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show image metadata and value range
    Info(commands::info::InfoArgs),
    /// Print per-channel histogram counts
    Histogram(commands::histogram::HistogramArgs),
    /// Read one pixel (and optionally its neighbourhood)
    Pixel(commands::pixel::PixelArgs),
    /// Print the default viewer config as TOML
    Config(commands::config::ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let dispatch = logging::build_dispatch(cli.verbose, cli.log_file.as_deref())?;
    let _log_guard = tracing::dispatcher::set_default(&dispatch);

    match &cli.command {
        Commands::Info(args) => commands::info::run(args),
        Commands::Histogram(args) => commands::histogram::run(args),
        Commands::Pixel(args) => commands::pixel::run(args),
        Commands::Config(args) => commands::config::run(args),
    }
}
