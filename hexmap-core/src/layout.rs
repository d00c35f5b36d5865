//! MapLayout - board size, grid spacing and initial territories

use crate::board::{HexBoard, NEUTRAL};
use crate::coord::HexCoord;
use crate::grid::{GridConfig, HexGrid};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Cells assigned to one owner
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TerritorySpec {
    pub owner: i32,
    /// Land flag applied to every cell (defaults to land)
    #[serde(default = "default_land")]
    pub land: u8,
    pub cells: Vec<HexCoord>,
}

fn default_land() -> u8 {
    1
}

/// Map description loaded from JSON
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MapLayout {
    pub width: usize,
    pub height: usize,
    #[serde(default)]
    pub grid: GridConfig,
    #[serde(default)]
    pub territories: Vec<TerritorySpec>,
}

impl MapLayout {
    /// Empty layout of the given size
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            grid: GridConfig::default(),
            territories: Vec::new(),
        }
    }

    /// Set grid spacing
    pub fn with_grid(mut self, grid: GridConfig) -> Self {
        self.grid = grid;
        self
    }

    /// Add a territory
    pub fn with_territory(mut self, owner: i32, cells: Vec<HexCoord>) -> Self {
        self.territories.push(TerritorySpec {
            owner,
            land: default_land(),
            cells,
        });
        self
    }

    /// Load from a JSON file
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read map layout: {}", path.display()))?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> anyhow::Result<Self> {
        let layout: MapLayout = serde_json::from_str(content).context("Invalid map layout JSON")?;
        layout.grid.validate()?;
        Ok(layout)
    }

    pub fn to_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn grid(&self) -> anyhow::Result<HexGrid> {
        Ok(HexGrid::new(self.grid)?)
    }

    /// Build the board, placing every territory. Later territories overwrite earlier ones.
    pub fn build_board(&self) -> anyhow::Result<HexBoard> {
        let mut board = HexBoard::new(self.width, self.height)?;
        for territory in &self.territories {
            if territory.owner < NEUTRAL {
                anyhow::bail!("Invalid owner id: {}", territory.owner);
            }
            for &coord in &territory.cells {
                let cell = board
                    .at_mut(coord)
                    .with_context(|| format!("Territory {} places a cell off the board", territory.owner))?;
                cell.owner = territory.owner;
                cell.land = territory.land;
            }
        }
        tracing::debug!(
            "Built {}x{} board with {} territories",
            self.width,
            self.height,
            self.territories.len()
        );
        Ok(board)
    }
}
