//! Locate command - world position to hex and back
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: configure_grid(), locate()
//! - Level 4: formatting

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use hexmap_core::{GridConfig, HexBoard, HexCoord, HexGrid, MapLayout, WorldPoint};

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args)]
pub struct LocateArgs {
    /// World x position
    #[arg(long, allow_hyphen_values = true)]
    pub x: f64,

    /// World y position
    #[arg(long, allow_hyphen_values = true)]
    pub y: f64,

    /// Map layout JSON file; its grid spacing replaces the spacing flags
    #[arg(long, value_name = "FILE")]
    pub map: Option<PathBuf>,

    /// Horizontal spacing between hex centres
    #[arg(long, default_value = "1.0")]
    pub x_spacing: f64,

    /// Vertical spacing between hex centres
    #[arg(long, default_value = "1.0")]
    pub y_spacing: f64,

    /// Output result as JSON
    #[arg(long)]
    pub json: bool,
}

/// Where a world position lands on the grid
#[derive(Clone, Debug, Serialize)]
struct Location {
    hex: HexCoord,
    centre: WorldPoint,
    neighbors: Vec<HexCoord>,
    /// Owner of the hex, when a map was given and the hex is on it
    #[serde(skip_serializing_if = "Option::is_none")]
    owner: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    on_board: Option<bool>,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run locate command
pub fn run(args: LocateArgs) -> Result<()> {
    let (grid, board) = configure_grid(&args)?;
    let location = locate(&grid, board.as_ref(), WorldPoint::planar(args.x, args.y));

    if args.json {
        println!("{}", serde_json::to_string_pretty(&location)?);
    } else {
        let adjacency = grid.adjacent(location.hex);
        println!("Hex:       {}", location.hex);
        println!("Centre:    ({:.3}, {:.3})", location.centre.x, location.centre.y);
        println!("Adjacent:  {}", adjacency);
        match (location.on_board, location.owner) {
            (Some(true), Some(owner)) => println!("Owner:     {}", owner),
            (Some(false), _) => println!("Owner:     (off map)"),
            _ => {}
        }
    }

    Ok(())
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

/// Grid from the map layout if one is given, otherwise from the spacing flags
fn configure_grid(args: &LocateArgs) -> Result<(HexGrid, Option<HexBoard>)> {
    match &args.map {
        Some(path) => {
            let layout = MapLayout::load(path)?;
            let grid = layout
                .grid()
                .with_context(|| format!("Bad grid spacing in {}", path.display()))?;
            tracing::info!(
                "Using spacing ({}, {}) from {}",
                layout.grid.x_spacing,
                layout.grid.y_spacing,
                path.display()
            );
            Ok((grid, Some(layout.build_board()?)))
        }
        None => Ok((HexGrid::new(GridConfig::new(args.x_spacing, args.y_spacing))?, None)),
    }
}

fn locate(grid: &HexGrid, board: Option<&HexBoard>, pos: WorldPoint) -> Location {
    let hex = grid.world_to_hex(pos);
    let cell = board.and_then(|b| b.at(hex).ok());
    Location {
        hex,
        centre: grid.hex_to_world(hex, true),
        neighbors: grid.adjacent(hex).to_vec(),
        owner: cell.map(|c| c.owner),
        on_board: board.map(|b| b.is_valid(hex)),
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locate_snaps_to_centre() {
        let grid = HexGrid::new(GridConfig::game()).unwrap();
        let location = locate(&grid, None, WorldPoint::planar(3.1, 2.5));
        assert_eq!(grid.world_to_hex(location.centre), location.hex);
        assert_eq!(location.neighbors.len(), 6);
        assert_eq!(location.on_board, None);
    }

    #[test]
    fn test_locate_uses_map_spacing() {
        let path = std::env::temp_dir().join("hexmap_locate_spacing.json");
        let layout = MapLayout::new(4, 4)
            .with_grid(GridConfig::game())
            .with_territory(3, vec![HexCoord::new(2, 1)]);
        std::fs::write(&path, layout.to_json().unwrap()).unwrap();

        let args = LocateArgs {
            x: 3.0,
            y: 1.732050807,
            map: Some(path.clone()),
            x_spacing: 1.0,
            y_spacing: 1.0,
            json: false,
        };
        let (grid, board) = configure_grid(&args).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(grid.config(), GridConfig::game());
        let location = locate(&grid, board.as_ref(), WorldPoint::planar(args.x, args.y));
        assert_eq!(location.hex, HexCoord::new(2, 1));
        assert_eq!(location.owner, Some(3));
        assert_eq!(location.on_board, Some(true));

        let off_map = locate(&grid, board.as_ref(), WorldPoint::planar(-6.0, 0.0));
        assert_eq!(off_map.on_board, Some(false));
        assert_eq!(off_map.owner, None);
    }
}
