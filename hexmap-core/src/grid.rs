//! Spacing-aware hex grid
//!
//! Wraps the pure geometry functions with a world-space x/y spacing.

use crate::coord::{AdjacencySet, HexCoord};
use crate::error::HexError;
use crate::geometry::{self, WorldPoint};
use serde::{Deserialize, Serialize};

/// Horizontal and vertical distance between hex centres
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub x_spacing: f64,
    pub y_spacing: f64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            x_spacing: 1.0,
            y_spacing: 1.0,
        }
    }
}

impl GridConfig {
    /// Create config with the given spacing
    pub fn new(x_spacing: f64, y_spacing: f64) -> Self {
        Self { x_spacing, y_spacing }
    }

    /// Spacing for unit-radius flat-top hexagons (1.5, sqrt(3))
    pub fn game() -> Self {
        Self::new(1.5, 1.732050807)
    }

    pub fn validate(&self) -> Result<(), HexError> {
        let ok = |v: f64| v.is_finite() && v > 0.0;
        if ok(self.x_spacing) && ok(self.y_spacing) {
            Ok(())
        } else {
            Err(HexError::InvalidSpacing {
                x: self.x_spacing,
                y: self.y_spacing,
            })
        }
    }
}

/// Hex grid with configurable world spacing
#[derive(Clone, Debug, Default)]
pub struct HexGrid {
    config: GridConfig,
}

impl HexGrid {
    pub fn new(config: GridConfig) -> Result<Self, HexError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> GridConfig {
        self.config
    }

    /// Replace both spacings. The old spacing is kept if the new one is rejected.
    pub fn set_spacing(&mut self, x_spacing: f64, y_spacing: f64) -> Result<(), HexError> {
        let config = GridConfig::new(x_spacing, y_spacing);
        config.validate()?;
        self.config = config;
        Ok(())
    }

    pub fn world_to_hex(&self, pos: WorldPoint) -> HexCoord {
        geometry::world_to_hex(pos, self.config.x_spacing, self.config.y_spacing)
    }

    /// Centre of a hex; `scaled = false` gives unit-spacing coordinates
    pub fn hex_to_world(&self, hex: HexCoord, scaled: bool) -> WorldPoint {
        if scaled {
            geometry::hex_to_world(hex, self.config.x_spacing, self.config.y_spacing)
        } else {
            geometry::hex_to_world(hex, 1.0, 1.0)
        }
    }

    pub fn adjacent(&self, hex: HexCoord) -> AdjacencySet {
        geometry::adjacent(hex)
    }
}
