//! Fixed-size hex board with bounds-checked cell access

use crate::coord::HexCoord;
use crate::error::HexError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Owner id of unclaimed cells
pub const NEUTRAL: i32 = -1;

/// RGBA display colour, carried through the engine untouched
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Dark grey used for unclaimed cells
    pub const NEUTRAL: Color = Color::new(0.15, 0.15, 0.15, 1.0);
}

impl Default for Color {
    fn default() -> Self {
        Color::NEUTRAL
    }
}

/// A single board cell
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardCell {
    /// Player id, or [`NEUTRAL`]
    pub owner: i32,
    /// 0 for sea, 1 for land
    pub land: u8,
    pub color: Color,
}

impl Default for BoardCell {
    fn default() -> Self {
        Self {
            owner: NEUTRAL,
            land: 0,
            color: Color::NEUTRAL,
        }
    }
}

impl BoardCell {
    pub fn is_land(&self) -> bool {
        self.land != 0
    }
}

/// Dense width x height board, stored row-major
#[derive(Clone, Debug)]
pub struct HexBoard {
    width: usize,
    height: usize,
    cells: Vec<BoardCell>,
}

impl HexBoard {
    /// Create a board with every cell neutral
    pub fn new(width: usize, height: usize) -> Result<Self, HexError> {
        if width == 0 || height == 0 {
            return Err(HexError::EmptyBoard { width, height });
        }
        // Every valid coordinate must be addressable by an i32 HexCoord
        if width > i32::MAX as usize || height > i32::MAX as usize {
            return Err(HexError::BoardTooLarge { width, height });
        }
        Ok(Self {
            width,
            height,
            cells: vec![BoardCell::default(); width * height],
        })
    }

    /// (width, height)
    pub fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Check if a coordinate lies on the board
    pub fn is_valid(&self, coord: HexCoord) -> bool {
        coord.q >= 0
            && coord.r >= 0
            && (coord.q as usize) < self.width
            && (coord.r as usize) < self.height
    }

    fn index(&self, coord: HexCoord) -> Result<usize, HexError> {
        if self.is_valid(coord) {
            Ok(coord.r as usize * self.width + coord.q as usize)
        } else {
            Err(HexError::OutOfBounds {
                coord,
                width: self.width,
                height: self.height,
            })
        }
    }

    pub fn at(&self, coord: HexCoord) -> Result<&BoardCell, HexError> {
        let idx = self.index(coord)?;
        Ok(&self.cells[idx])
    }

    pub fn at_mut(&mut self, coord: HexCoord) -> Result<&mut BoardCell, HexError> {
        let idx = self.index(coord)?;
        Ok(&mut self.cells[idx])
    }

    pub fn set_owner(&mut self, coord: HexCoord, owner: i32) -> Result<(), HexError> {
        self.at_mut(coord)?.owner = owner;
        Ok(())
    }

    pub fn set_land(&mut self, coord: HexCoord, land: u8) -> Result<(), HexError> {
        self.at_mut(coord)?.land = land;
        Ok(())
    }

    /// Reset every cell to neutral sea
    pub fn clear(&mut self) {
        self.cells.fill(BoardCell::default());
    }

    /// Every valid coordinate, row by row
    pub fn coords(&self) -> impl Iterator<Item = HexCoord> {
        let width = self.width as i32;
        let height = self.height as i32;
        (0..height).flat_map(move |r| (0..width).map(move |q| HexCoord::new(q, r)))
    }

    /// Number of cells held by each owner (neutral included)
    pub fn count_by_owner(&self) -> BTreeMap<i32, usize> {
        let mut counts = BTreeMap::new();
        for cell in &self.cells {
            *counts.entry(cell.owner).or_insert(0) += 1;
        }
        counts
    }
}
