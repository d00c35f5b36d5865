//! Border command - extract the border loop around a territory

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use hexmap_core::{extract_edges, BorderLoop, HexCoord, HexDirection};

use crate::connect_cmd::{load_board, query_territory, Territory};

#[derive(Args)]
pub struct BorderArgs {
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

#[derive(Serialize)]
struct EdgeReport {
    hex: HexCoord,
    edges: Vec<HexDirection>,
}

#[derive(Serialize)]
struct BorderReport {
    seed: HexCoord,
    owner: i32,
    closed: bool,
    border_len: usize,
    cells: Vec<EdgeReport>,
}

/// Run border command
pub fn run(args: BorderArgs) -> Result<()> {
    let board = load_board(&args.map)?;
    let territory = query_territory(board, HexCoord::new(args.q, args.r), args.owner)?;
    let ring = border_loop(&territory)?;

    let report = BorderReport {
        seed: territory.seed,
        owner: territory.owner,
        closed: ring.is_closed(),
        border_len: ring.border_len,
        cells: ring
            .edges
            .iter()
            .map(|mask| EdgeReport {
                hex: mask.hex,
                edges: mask.edges(),
            })
            .collect(),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!(
        "Border of owner {} from {}: {} of {} cells, {}",
        report.owner,
        report.seed,
        report.cells.len(),
        report.border_len,
        if report.closed { "closed" } else { "open" }
    );
    for (i, cell) in report.cells.iter().enumerate() {
        let dirs: Vec<&str> = cell.edges.iter().map(|d| d.short_name()).collect();
        println!("{:4}  {:<10} {}", i, cell.hex.to_string(), dirs.join(","));
    }

    Ok(())
}

fn border_loop(territory: &Territory) -> Result<BorderLoop> {
    let ring = extract_edges(&territory.board, &territory.connectivity)
        .with_context(|| format!("Territory at {} has no border", territory.seed))?;

    if !ring.is_complete() {
        tracing::info!(
            "Border walk visited {} of {} cells",
            ring.len(),
            ring.border_len
        );
    }

    Ok(ring)
}
