//! Summary command - owners and regions of a map layout

use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use hexmap_core::{regions, ConnectedByOwner, HexBoard, NEUTRAL};

use crate::connect_cmd::load_board;

#[derive(Args)]
pub struct SummaryArgs {
    /// Map layout JSON file
    #[arg(long, value_name = "FILE")]
    pub map: PathBuf,

    /// Output result as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
struct OwnerSummary {
    owner: i32,
    cells: usize,
    regions: usize,
    largest_region: usize,
}

#[derive(Serialize)]
struct MapSummary {
    width: usize,
    height: usize,
    owners: Vec<OwnerSummary>,
}

/// Run summary command
pub fn run(args: SummaryArgs) -> Result<()> {
    let board = load_board(&args.map)?;
    let summary = summarize(&board)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!("Map: {}x{}", summary.width, summary.height);
    println!("{:>6} {:>6} {:>8} {:>8}", "owner", "cells", "regions", "largest");
    for o in &summary.owners {
        println!("{:>6} {:>6} {:>8} {:>8}", o.owner, o.cells, o.regions, o.largest_region);
    }

    Ok(())
}

fn summarize(board: &HexBoard) -> Result<MapSummary> {
    let counts: BTreeMap<i32, usize> = board.count_by_owner();
    let mut owners = Vec::with_capacity(counts.len());

    for (&owner, &cells) in &counts {
        // Neutral cells are not a territory; report them without regions
        let found = if owner == NEUTRAL {
            Vec::new()
        } else {
            regions(board, ConnectedByOwner(owner).predicate())?
        };
        owners.push(OwnerSummary {
            owner,
            cells,
            regions: found.len(),
            largest_region: found.iter().map(|r| r.len()).max().unwrap_or(0),
        });
    }

    let (width, height) = board.size();
    Ok(MapSummary { width, height, owners })
}

#[cfg(test)]
mod tests {
    use super::*;
    use hexmap_core::{HexCoord, MapLayout};

    #[test]
    fn test_summarize() {
        let board = MapLayout::new(6, 3)
            .with_territory(1, vec![HexCoord::new(0, 0), HexCoord::new(1, 0), HexCoord::new(4, 2)])
            .with_territory(2, vec![HexCoord::new(3, 0)])
            .build_board()
            .unwrap();

        let summary = summarize(&board).unwrap();
        assert_eq!((summary.width, summary.height), (6, 3));
        assert_eq!(
            summary.owners,
            vec![
                OwnerSummary { owner: NEUTRAL, cells: 14, regions: 0, largest_region: 0 },
                OwnerSummary { owner: 1, cells: 3, regions: 2, largest_region: 2 },
                OwnerSummary { owner: 2, cells: 1, regions: 1, largest_region: 1 },
            ]
        );
    }
}
