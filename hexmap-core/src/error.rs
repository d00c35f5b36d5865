//! Error types for board access and border extraction

use crate::coord::HexCoord;

/// Errors raised by the hex engine
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum HexError {
    #[error("hex {coord} is outside the {width}x{height} board")]
    OutOfBounds {
        coord: HexCoord,
        width: usize,
        height: usize,
    },

    #[error("no border to extract")]
    EmptyBorderSet,

    #[error("board dimensions must be positive, got {width}x{height}")]
    EmptyBoard { width: usize, height: usize },

    #[error("board {width}x{height} is too large: each side must fit in i32")]
    BoardTooLarge { width: usize, height: usize },

    #[error("grid spacing must be positive and finite, got ({x}, {y})")]
    InvalidSpacing { x: f64, y: f64 },
}
