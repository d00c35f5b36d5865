//! Region connectivity search
//!
//! Flood fill over the implicit hex graph of a [`HexBoard`], driven by a
//! caller-supplied cell predicate.

use crate::board::{BoardCell, HexBoard};
use crate::coord::HexCoord;
use crate::error::HexError;
use crate::geometry::adjacent;
use rustc_hash::FxHashSet;
use std::collections::VecDeque;

/// Outcome of a flood fill
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConnectivityResult {
    /// Matching cells reachable from the seed through matching cells
    pub matched: FxHashSet<HexCoord>,
    /// Non-matching cells adjacent to at least one matched cell
    pub border: FxHashSet<HexCoord>,
    /// Matching cells seen from an explored non-matching cell
    pub rim: FxHashSet<HexCoord>,
}

impl ConnectivityResult {
    pub fn matched_sorted(&self) -> Vec<HexCoord> {
        sorted(&self.matched)
    }

    pub fn border_sorted(&self) -> Vec<HexCoord> {
        sorted(&self.border)
    }

    pub fn rim_sorted(&self) -> Vec<HexCoord> {
        sorted(&self.rim)
    }
}

fn sorted(set: &FxHashSet<HexCoord>) -> Vec<HexCoord> {
    let mut v: Vec<HexCoord> = set.iter().copied().collect();
    v.sort();
    v
}

/// Matches cells held by one player; never matches neutral cells
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ConnectedByOwner(pub i32);

impl ConnectedByOwner {
    pub fn matches(&self, cell: &BoardCell) -> bool {
        self.0 >= 0 && cell.owner == self.0
    }

    /// Predicate closure for [`connected`] and [`regions`]
    pub fn predicate(self) -> impl Fn(&BoardCell) -> bool {
        move |cell| self.matches(cell)
    }
}

/// Flood fill from `seed`, expanding only through cells where `predicate` holds
pub fn connected<P>(board: &HexBoard, seed: HexCoord, predicate: P) -> Result<ConnectivityResult, HexError>
where
    P: Fn(&BoardCell) -> bool,
{
    // Fail fast on a bad seed
    board.at(seed)?;

    let mut result = ConnectivityResult::default();
    let mut queued: FxHashSet<HexCoord> = FxHashSet::default();
    let mut frontier = VecDeque::new();
    let mut misses = Vec::new();

    queued.insert(seed);
    frontier.push_back(seed);

    while let Some(check) = frontier.pop_front() {
        let neighbors = adjacent(check);

        if predicate(board.at(check)?) {
            result.matched.insert(check);
            for (_, coord) in neighbors.iter() {
                if board.is_valid(coord) && queued.insert(coord) {
                    frontier.push_back(coord);
                }
            }
        } else {
            for (_, coord) in neighbors.iter() {
                if board.is_valid(coord) && predicate(board.at(coord)?) {
                    result.rim.insert(coord);
                }
            }
            misses.push(check);
        }
    }

    // A miss borders the region once the fill is complete and one of its
    // neighbors was matched. Only a non-matching seed can fail this.
    for miss in misses {
        if adjacent(miss).iter().any(|(_, c)| result.matched.contains(&c)) {
            result.border.insert(miss);
        }
    }

    tracing::debug!(
        "connected from {}: {} matched, {} border, {} rim",
        seed,
        result.matched.len(),
        result.border.len(),
        result.rim.len()
    );

    Ok(result)
}

/// Split every matching cell into connected regions
///
/// Regions are found in row-major order of their first cell; each region is
/// sorted.
pub fn regions<P>(board: &HexBoard, predicate: P) -> Result<Vec<Vec<HexCoord>>, HexError>
where
    P: Fn(&BoardCell) -> bool,
{
    let mut claimed: FxHashSet<HexCoord> = FxHashSet::default();
    let mut found = Vec::new();

    for coord in board.coords() {
        if claimed.contains(&coord) || !predicate(board.at(coord)?) {
            continue;
        }
        let region = connected(board, coord, &predicate)?.matched_sorted();
        claimed.extend(region.iter().copied());
        found.push(region);
    }

    Ok(found)
}
