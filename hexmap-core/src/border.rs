//! Border loop extraction
//!
//! Walks the border cells of a [`ConnectivityResult`] into an ordered ring,
//! recording for each cell which of its six edges face other territory.
//!
//! The owner used to classify edges is read once from the starting cell and
//! applied to the whole walk. Border sets that mix several owners will have
//! some edges misclassified.

use crate::board::HexBoard;
use crate::connectivity::ConnectivityResult;
use crate::coord::{EdgeMask, HexCoord, HexDirection};
use crate::error::HexError;
use crate::geometry::adjacent;
use rustc_hash::FxHashSet;

/// Ordered walk around a border set
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BorderLoop {
    pub edges: Vec<EdgeMask>,
    /// Size of the border set the walk was taken from
    pub border_len: usize,
    closed: bool,
}

impl BorderLoop {
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// True when the walk stepped back onto its starting cell
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// True when every border cell was visited
    pub fn is_complete(&self) -> bool {
        self.edges.len() == self.border_len
    }

    pub fn coords(&self) -> Vec<HexCoord> {
        self.edges.iter().map(|e| e.hex).collect()
    }
}

/// Edge mask for one cell: edges leading off the board or to another owner
fn edge_mask(board: &HexBoard, hex: HexCoord, owner: i32) -> Result<EdgeMask, HexError> {
    let mut mask = EdgeMask::new(hex);
    for (dir, neighbor) in adjacent(hex).iter() {
        if !board.is_valid(neighbor) || board.at(neighbor)?.owner != owner {
            mask.add_edge(dir);
        }
    }
    Ok(mask)
}

/// Directions worth stepping along from a cell with the given edges
///
/// Each border edge contributes the two directions flanking it. Edges are
/// visited starting from N and wrapping round to NW.
fn step_candidates(mask: &EdgeMask) -> Vec<HexDirection> {
    let mut dirs = Vec::with_capacity(12);
    for i in 0..6 {
        let edge = HexDirection::from_index(i + 1);
        if mask.has_edge(edge) {
            dirs.push(edge.rotate(-1));
            dirs.push(edge.rotate(1));
        }
    }
    dirs
}

/// Walk the border of a connectivity result into an ordered loop
///
/// Starts at the smallest border coordinate. Stops on returning to the start,
/// after one mask per border cell, or when no unvisited neighbor is
/// reachable; in the last case the partial loop is returned.
pub fn extract_edges(board: &HexBoard, connectivity: &ConnectivityResult) -> Result<BorderLoop, HexError> {
    let start = connectivity
        .border
        .iter()
        .min()
        .copied()
        .ok_or(HexError::EmptyBorderSet)?;
    let owner = board.at(start)?.owner;
    let border_len = connectivity.border.len();

    let mut unvisited: FxHashSet<HexCoord> = connectivity.border.clone();
    let mut edges = Vec::with_capacity(border_len);
    let mut closed = false;
    let mut coord = start;

    while edges.len() < border_len {
        let mask = edge_mask(board, coord, owner)?;
        edges.push(mask);

        let neighbors = adjacent(coord);
        let next = step_candidates(&mask)
            .into_iter()
            .map(|dir| neighbors.get(dir))
            .find(|hex| unvisited.contains(hex));

        match next {
            Some(hex) => {
                unvisited.remove(&hex);
                if hex == start {
                    closed = true;
                    break;
                }
                coord = hex;
            }
            None => break,
        }
    }

    if closed {
        tracing::trace!("border loop from {} closed after {} cells", start, edges.len());
    } else {
        tracing::warn!(
            "border loop from {} did not close: {} of {} cells",
            start,
            edges.len(),
            border_len
        );
    }

    Ok(BorderLoop {
        edges,
        border_len,
        closed,
    })
}
