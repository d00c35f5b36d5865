//! HEXMAP CLI - Command-line interface
//!
//! Commands:
//! - locate: Convert a world position to a hex and back
//! - connect: Flood fill a territory from a seed hex
//! - border: Extract the border loop around a territory
//! - summary: Report owners and regions of a map layout

mod border_cmd;
mod connect_cmd;
mod locate;
mod summary;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "hexmap")]
#[command(about = "HEXMAP hex-grid territory tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a world position to a hex and back
    Locate(locate::LocateArgs),
    /// Flood fill a territory from a seed hex
    Connect(connect_cmd::ConnectArgs),
    /// Extract the border loop around a territory
    Border(border_cmd::BorderArgs),
    /// Report owners and regions of a map layout
    Summary(summary::SummaryArgs),
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Locate(args) => locate::run(args),
        Commands::Connect(args) => connect_cmd::run(args),
        Commands::Border(args) => border_cmd::run(args),
        Commands::Summary(args) => summary::run(args),
    }
}
