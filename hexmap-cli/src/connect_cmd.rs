//! Connect command - flood fill a territory from a seed hex
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: load_board(), query_territory(), report()
//! - Level 3: (delegated to hexmap-core)

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use hexmap_core::{connected, ConnectedByOwner, ConnectivityResult, HexBoard, HexCoord, MapLayout};

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args)]
pub struct ConnectArgs {
    /// Map layout JSON file
    #[arg(long, value_name = "FILE")]
    pub map: PathBuf,

    /// Seed column
    #[arg(long)]
    pub q: i32,

    /// Seed row
    #[arg(long)]
    pub r: i32,

    /// Owner to match (defaults to the seed's owner)
    #[arg(long)]
    pub owner: Option<i32>,

    /// Output result as JSON
    #[arg(long)]
    pub json: bool,
}

/// A territory query and its outcome
pub struct Territory {
    pub board: HexBoard,
    pub seed: HexCoord,
    pub owner: i32,
    pub connectivity: ConnectivityResult,
}

#[derive(Serialize)]
struct ConnectReport {
    seed: HexCoord,
    owner: i32,
    matched: Vec<HexCoord>,
    border: Vec<HexCoord>,
    rim: Vec<HexCoord>,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run connect command
pub fn run(args: ConnectArgs) -> Result<()> {
    let board = load_board(&args.map)?;
    let territory = query_territory(board, HexCoord::new(args.q, args.r), args.owner)?;

    report(&territory, args.json)
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

/// Load a layout and build its board
pub fn load_board(path: &Path) -> Result<HexBoard> {
    let layout = MapLayout::load(path)?;
    tracing::info!(
        "Loaded {}x{} map with {} territories from {}",
        layout.width,
        layout.height,
        layout.territories.len(),
        path.display()
    );
    layout.build_board()
}

/// Flood fill the territory holding `seed`
pub fn query_territory(board: HexBoard, seed: HexCoord, owner: Option<i32>) -> Result<Territory> {
    let owner = match owner {
        Some(owner) => owner,
        None => board.at(seed).with_context(|| format!("Seed {} is not on the map", seed))?.owner,
    };

    let connectivity = connected(&board, seed, ConnectedByOwner(owner).predicate())
        .with_context(|| format!("Failed to search from {}", seed))?;

    tracing::info!(
        "Owner {} from {}: {} cells, {} border cells",
        owner,
        seed,
        connectivity.matched.len(),
        connectivity.border.len()
    );

    Ok(Territory {
        board,
        seed,
        owner,
        connectivity,
    })
}

fn report(territory: &Territory, json: bool) -> Result<()> {
    let conn = &territory.connectivity;
    let report = ConnectReport {
        seed: territory.seed,
        owner: territory.owner,
        matched: conn.matched_sorted(),
        border: conn.border_sorted(),
        rim: conn.rim_sorted(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("Seed:    {} (owner {})", report.seed, report.owner);
        println!("Matched: {}", format_hexes(&report.matched));
        println!("Border:  {}", format_hexes(&report.border));
        println!("Rim:     {}", format_hexes(&report.rim));
    }

    Ok(())
}

// ============================================================================
// LEVEL 4 - FORMATTING
// ============================================================================

pub fn format_hexes(hexes: &[HexCoord]) -> String {
    if hexes.is_empty() {
        return "-".to_string();
    }
    hexes.iter().map(|h| h.to_string()).collect::<Vec<_>>().join(" ")
}

// ============================================================================
// TESTS
// ============================================================================
