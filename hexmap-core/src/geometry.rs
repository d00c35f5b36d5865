//! Pure hex geometry: world <-> hex conversion and adjacency
//!
//! The grid is modelled as the x+y+z=0 plane of a cube lattice viewed
//! isometrically. World positions are continuous; hex addresses use the
//! offset-column layout of [`HexCoord`].

use crate::coord::{AdjacencySet, HexCoord};
use serde::{Deserialize, Serialize};

/// A continuous position in world space (z is carried but never used for lookup)
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct WorldPoint {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl WorldPoint {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub const fn planar(x: f64, y: f64) -> Self {
        Self { x, y, z: 0.0 }
    }
}

/// Cube axes are held within this magnitude so the fix-up sums fit in i64
const CUBE_LIMIT: f64 = (1u64 << 40) as f64;

/// Round half up, never to even
fn round_half_up(v: f64) -> i64 {
    (v + 0.5).floor().clamp(-CUBE_LIMIT, CUBE_LIMIT) as i64
}

fn saturate(v: i64) -> i32 {
    v.clamp(i32::MIN as i64, i32::MAX as i64) as i32
}

/// Nearest hex to a world position, given the grid spacing
///
/// Positions beyond the `i32` coordinate range saturate to its edge.
pub fn world_to_hex(pos: WorldPoint, x_spacing: f64, y_spacing: f64) -> HexCoord {
    let x = pos.x / x_spacing;
    let wy = pos.y / y_spacing;
    let z = -0.5 * x - wy;
    let y = wy - 0.5 * x;

    let mut ix = round_half_up(x);
    let mut iy = round_half_up(y);
    let mut iz = round_half_up(z);

    // Push the rounding error onto the axis that moved furthest
    let s = ix + iy + iz;
    if s != 0 {
        let dx = (ix as f64 - x).abs();
        let dy = (iy as f64 - y).abs();
        let dz = (iz as f64 - z).abs();
        if dx >= dy && dx >= dz {
            ix -= s;
        } else if dy >= dx && dy >= dz {
            iy -= s;
        } else {
            iz -= s;
        }
    }

    let t = iy - iz;
    let r = if t < 0 {
        (t - 1 + ((ix + 1) & 1)) / 2
    } else {
        (t + 1 - (ix & 1)) / 2
    };

    HexCoord::new(saturate(ix), saturate(r))
}

/// World-space centre of a hex; odd columns are lifted by half a row
pub fn hex_to_world(hex: HexCoord, x_spacing: f64, y_spacing: f64) -> WorldPoint {
    let q = hex.q as f64;
    let even_q = (if hex.is_odd_column() { hex.q - 1 } else { hex.q }) as f64;
    let x = q * x_spacing;
    let y = (hex.r as f64 + 0.5 * q - 0.5 * even_q) * y_spacing;
    WorldPoint::new(x, y, 0.0)
}

/// Six neighbors in NW, N, NE, SE, S, SW order. No bounds checking.
pub fn adjacent(hex: HexCoord) -> AdjacencySet {
    AdjacencySet::of(hex)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coord::HexDirection;

    #[test]
    fn test_hex_to_world_unit() {
        assert_eq!(hex_to_world(HexCoord::new(0, 0), 1.0, 1.0), WorldPoint::planar(0.0, 0.0));
        assert_eq!(hex_to_world(HexCoord::new(2, 3), 1.0, 1.0), WorldPoint::planar(2.0, 3.0));
        assert_eq!(hex_to_world(HexCoord::new(1, 0), 1.0, 1.0), WorldPoint::planar(1.0, 0.5));
        assert_eq!(hex_to_world(HexCoord::new(-1, 0), 1.0, 1.0), WorldPoint::planar(-1.0, 0.5));
    }

    #[test]
    fn test_world_to_hex_centres() {
        assert_eq!(world_to_hex(WorldPoint::planar(0.0, 0.0), 1.0, 1.0), HexCoord::new(0, 0));
        assert_eq!(world_to_hex(WorldPoint::planar(1.0, 0.5), 1.0, 1.0), HexCoord::new(1, 0));
        assert_eq!(world_to_hex(WorldPoint::planar(3.0, -1.5), 1.0, 1.0), HexCoord::new(3, -2));
        assert_eq!(world_to_hex(WorldPoint::planar(-2.0, -4.0), 1.0, 1.0), HexCoord::new(-2, -4));
    }

    #[test]
    fn test_world_to_hex_ignores_z() {
        let flat = world_to_hex(WorldPoint::new(4.1, 2.2, 0.0), 1.5, 1.732050807);
        let raised = world_to_hex(WorldPoint::new(4.1, 2.2, 30.0), 1.5, 1.732050807);
        assert_eq!(flat, raised);
    }

    #[test]
    fn test_world_to_hex_near_centre() {
        // Small offsets from a centre stay in the same hex
        let centre = hex_to_world(HexCoord::new(5, 7), 1.5, 1.732050807);
        for (dx, dy) in [(0.2, 0.0), (-0.2, 0.1), (0.0, -0.3), (0.1, 0.3)] {
            let p = WorldPoint::planar(centre.x + dx, centre.y + dy);
            assert_eq!(world_to_hex(p, 1.5, 1.732050807), HexCoord::new(5, 7));
        }
    }

    #[test]
    fn test_world_to_hex_rounds_ties_up() {
        // y and z both sit on .5: floor(v + 0.5) gives iy = 2, iz = -1 and the
        // y axis takes the fix-up. Rounding half away from zero would give (0, 2).
        assert_eq!(world_to_hex(WorldPoint::planar(0.0, 1.5), 1.0, 1.0), HexCoord::new(0, 1));
        assert_eq!(world_to_hex(WorldPoint::planar(0.0, -0.5), 1.0, 1.0), HexCoord::new(0, -1));
    }

    #[test]
    fn test_world_to_hex_fix_up_prefers_x() {
        // x and y are equally far from their rounded values; x is corrected
        assert_eq!(world_to_hex(WorldPoint::planar(-1.5, -0.25), 1.0, 1.0), HexCoord::new(-2, 0));
        assert_eq!(world_to_hex(WorldPoint::planar(-1.5, 0.75), 1.0, 1.0), HexCoord::new(-2, 1));
    }

    #[test]
    fn test_world_to_hex_saturates() {
        assert_eq!(
            world_to_hex(WorldPoint::planar(1e10, 0.0), 1.0, 1.0),
            HexCoord::new(i32::MAX, 0)
        );
        let far = world_to_hex(WorldPoint::planar(1.0, 1.0), 1e-300, 1e-300);
        assert_eq!(far.q, i32::MAX);
        let near_min = world_to_hex(WorldPoint::planar(-1e15, -1e15), 1.0, 1.0);
        assert_eq!(near_min.q, i32::MIN);
        assert_eq!(world_to_hex(WorldPoint::planar(f64::NAN, 0.0), 1.0, 1.0), HexCoord::new(0, 0));
    }

    #[test]
    fn test_adjacent_odd_column() {
        let adj = adjacent(HexCoord::new(1, 1));
        assert_eq!(adj.get(HexDirection::NorthWest), HexCoord::new(0, 2));
        assert_eq!(adj.get(HexDirection::North), HexCoord::new(1, 2));
        assert_eq!(adj.get(HexDirection::NorthEast), HexCoord::new(2, 2));
        assert_eq!(adj.get(HexDirection::SouthEast), HexCoord::new(2, 1));
        assert_eq!(adj.get(HexDirection::South), HexCoord::new(1, 0));
        assert_eq!(adj.get(HexDirection::SouthWest), HexCoord::new(0, 1));
    }

    #[test]
    fn test_adjacent_even_column() {
        let adj = adjacent(HexCoord::new(2, 1));
        assert_eq!(
            adj.to_vec(),
            vec![
                HexCoord::new(1, 1),
                HexCoord::new(2, 2),
                HexCoord::new(3, 1),
                HexCoord::new(3, 0),
                HexCoord::new(2, 0),
                HexCoord::new(1, 0),
            ]
        );
    }

    #[test]
    fn test_adjacent_does_not_clip() {
        let adj = adjacent(HexCoord::new(0, 0));
        assert_eq!(adj.get(HexDirection::SouthWest), HexCoord::new(-1, -1));
        assert_eq!(adj.get(HexDirection::South), HexCoord::new(0, -1));
    }

    #[test]
    fn test_adjacency_symmetry() {
        for q in -4..=4 {
            for r in -4..=4 {
                let hex = HexCoord::new(q, r);
                for (dir, neighbor) in adjacent(hex).iter() {
                    assert_eq!(
                        adjacent(neighbor).get(dir.opposite()),
                        hex,
                        "{} -> {} via {}",
                        hex,
                        neighbor,
                        dir
                    );
                }
            }
        }
    }
}
