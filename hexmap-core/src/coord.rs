//! Hex addresses, directions and per-cell direction sets

use serde::{Deserialize, Serialize};
use std::fmt;

/// Offset-column hex coordinates (odd columns sit half a row higher)
///
/// Ordering is lexicographic on `(q, r)`, which is what the border walk
/// uses to pick a reproducible starting cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct HexCoord {
    pub q: i32,
    pub r: i32,
}

impl HexCoord {
    pub const fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }

    /// True for odd columns, including negative ones
    pub const fn is_odd_column(&self) -> bool {
        self.q & 1 == 1
    }

    /// Neighbor in the given direction; wraps at the edge of the `i32` range
    pub fn neighbor(&self, dir: HexDirection) -> HexCoord {
        let table = if self.is_odd_column() { &ODD_COLUMN } else { &EVEN_COLUMN };
        let (dq, dr) = table[dir.index()];
        HexCoord::new(self.q.wrapping_add(dq), self.r.wrapping_add(dr))
    }
}

impl fmt::Display for HexCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.q, self.r)
    }
}

impl From<(i32, i32)> for HexCoord {
    fn from((q, r): (i32, i32)) -> Self {
        HexCoord::new(q, r)
    }
}

/// Neighbor deltas (dq, dr) for odd columns
/// Index: 0=NW, 1=N, 2=NE, 3=SE, 4=S, 5=SW
const ODD_COLUMN: [(i32, i32); 6] = [
    (-1, 1), // NW
    (0, 1),  // N
    (1, 1),  // NE
    (1, 0),  // SE
    (0, -1), // S
    (-1, 0), // SW
];

/// Neighbor deltas (dq, dr) for even columns
const EVEN_COLUMN: [(i32, i32); 6] = [
    (-1, 0),  // NW
    (0, 1),   // N
    (1, 0),   // NE
    (1, -1),  // SE
    (0, -1),  // S
    (-1, -1), // SW
];

/// The six neighbor directions, in bit order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HexDirection {
    NorthWest = 0,
    North = 1,
    NorthEast = 2,
    SouthEast = 3,
    South = 4,
    SouthWest = 5,
}

impl HexDirection {
    pub const ALL: [HexDirection; 6] = [
        HexDirection::NorthWest,
        HexDirection::North,
        HexDirection::NorthEast,
        HexDirection::SouthEast,
        HexDirection::South,
        HexDirection::SouthWest,
    ];

    /// Direction for an index, wrapping modulo 6
    pub const fn from_index(index: usize) -> Self {
        Self::ALL[index % 6]
    }

    pub const fn index(self) -> usize {
        self as usize
    }

    /// Bit used for this direction in an edge mask
    pub const fn bit(self) -> u8 {
        1 << (self as u8)
    }

    /// Rotate clockwise by `steps` (counter-clockwise for negative steps)
    pub const fn rotate(self, steps: i32) -> Self {
        Self::from_index((self as i32 + steps).rem_euclid(6) as usize)
    }

    pub const fn opposite(self) -> Self {
        self.rotate(3)
    }

    pub const fn short_name(self) -> &'static str {
        match self {
            HexDirection::NorthWest => "nw",
            HexDirection::North => "n",
            HexDirection::NorthEast => "ne",
            HexDirection::SouthEast => "se",
            HexDirection::South => "s",
            HexDirection::SouthWest => "sw",
        }
    }
}

impl fmt::Display for HexDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

/// The six neighbors of a hex, one per direction
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdjacencySet {
    neighbors: [HexCoord; 6],
}

impl AdjacencySet {
    pub fn of(origin: HexCoord) -> Self {
        Self {
            neighbors: HexDirection::ALL.map(|dir| origin.neighbor(dir)),
        }
    }

    pub fn get(&self, dir: HexDirection) -> HexCoord {
        self.neighbors[dir.index()]
    }

    /// Neighbors in NW, N, NE, SE, S, SW order
    pub fn iter(&self) -> impl Iterator<Item = (HexDirection, HexCoord)> + '_ {
        HexDirection::ALL.into_iter().zip(self.neighbors.iter().copied())
    }

    pub fn to_vec(&self) -> Vec<HexCoord> {
        self.neighbors.to_vec()
    }
}

impl fmt::Display for AdjacencySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .iter()
            .map(|(dir, hex)| format!("{} {}", dir, hex))
            .collect();
        f.write_str(&parts.join(" "))
    }
}

/// Border edges of a single cell, stored in the low 6 bits
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EdgeMask {
    pub hex: HexCoord,
    bits: u8,
}

impl EdgeMask {
    pub fn new(hex: HexCoord) -> Self {
        Self { hex, bits: 0 }
    }

    pub fn add_edge(&mut self, dir: HexDirection) {
        self.bits |= dir.bit();
    }

    pub fn has_edge(&self, dir: HexDirection) -> bool {
        self.bits & dir.bit() != 0
    }

    /// Border edges in direction order
    pub fn edges(&self) -> Vec<HexDirection> {
        HexDirection::ALL
            .into_iter()
            .filter(|&dir| self.has_edge(dir))
            .collect()
    }

    pub fn bits(&self) -> u8 {
        self.bits
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    pub fn reset(&mut self) {
        self.bits = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_parity() {
        assert!(HexCoord::new(1, 0).is_odd_column());
        assert!(HexCoord::new(-1, 0).is_odd_column());
        assert!(!HexCoord::new(0, 5).is_odd_column());
        assert!(!HexCoord::new(-2, 5).is_odd_column());
    }

    #[test]
    fn test_direction_rotation() {
        assert_eq!(HexDirection::NorthWest.rotate(-1), HexDirection::SouthWest);
        assert_eq!(HexDirection::SouthWest.rotate(1), HexDirection::NorthWest);
        assert_eq!(HexDirection::North.opposite(), HexDirection::South);
        assert_eq!(HexDirection::NorthEast.opposite(), HexDirection::SouthWest);
        assert_eq!(HexDirection::NorthWest.opposite(), HexDirection::SouthEast);
    }

    #[test]
    fn test_direction_bits() {
        let bits: Vec<u8> = HexDirection::ALL.iter().map(|d| d.bit()).collect();
        assert_eq!(bits, vec![1, 2, 4, 8, 16, 32]);
    }

    #[test]
    fn test_edge_mask() {
        let mut mask = EdgeMask::new(HexCoord::new(3, 4));
        assert!(mask.is_empty());

        mask.add_edge(HexDirection::South);
        mask.add_edge(HexDirection::NorthWest);
        mask.add_edge(HexDirection::South);

        assert!(mask.has_edge(HexDirection::South));
        assert!(!mask.has_edge(HexDirection::North));
        assert_eq!(mask.bits(), 0b01_0001);
        assert_eq!(mask.edges(), vec![HexDirection::NorthWest, HexDirection::South]);

        mask.reset();
        assert!(mask.edges().is_empty());
    }

    #[test]
    fn test_neighbors_at_coordinate_limits() {
        let edge = HexCoord::new(i32::MAX, 0);
        let adj = AdjacencySet::of(edge);
        assert_eq!(adj.get(HexDirection::NorthEast), HexCoord::new(i32::MIN, 1));
        // Wrapping keeps the neighbor relation symmetric
        for (dir, neighbor) in adj.iter() {
            assert_eq!(neighbor.neighbor(dir.opposite()), edge);
        }

        let corner = HexCoord::new(i32::MIN, i32::MIN);
        assert_eq!(corner.neighbor(HexDirection::SouthWest), HexCoord::new(i32::MAX, i32::MAX));
    }

    #[test]
    fn test_adjacency_display() {
        let adj = AdjacencySet::of(HexCoord::new(2, 2));
        assert_eq!(
            adj.to_string(),
            "nw [1, 2] n [2, 3] ne [3, 2] se [3, 1] s [2, 1] sw [1, 1]"
        );
    }
}
