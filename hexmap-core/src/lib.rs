//! HEXMAP Core - Hex-grid spatial engine
//!
//! This crate provides the spatial core of the hex strategy map:
//! - Offset-column hex coordinates, directions and adjacency
//! - World <-> hex conversion with configurable spacing
//! - Fixed-size board storage with bounds checking
//! - Predicate-driven region flood fill
//! - Border loop extraction around a region

pub mod coord;
pub mod geometry;
pub mod grid;
pub mod board;
pub mod connectivity;
pub mod border;
pub mod error;
pub mod layout;

// Re-exports for convenient access
pub use coord::{AdjacencySet, EdgeMask, HexCoord, HexDirection};
pub use geometry::{adjacent, hex_to_world, world_to_hex, WorldPoint};
pub use grid::{GridConfig, HexGrid};
pub use board::{BoardCell, Color, HexBoard, NEUTRAL};
pub use connectivity::{connected, regions, ConnectedByOwner, ConnectivityResult};
pub use border::{extract_edges, BorderLoop};
pub use error::HexError;
pub use layout::{MapLayout, TerritorySpec};
