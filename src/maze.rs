//! Maze descriptions on disk.
//!
//! A maze file is one JSON object naming the grid dimensions, the source
//! and target cells and any obstacles. Coordinates are `[row, col]`
//! pairs. [`MazeSpec::load`] reads and validates a file;
//! [`crate::Grid::from_spec`] turns the description into a solvable grid.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::Coords;
use crate::error::{Error, Result};

/// On-disk description of a maze
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MazeSpec {
    /// Grid height, at least 2
    pub n_rows: i32,
    /// Grid width, at least 2
    pub n_columns: i32,
    /// Cell searches start from
    pub source: Coords,
    /// Cell searches aim for
    pub target: Coords,
    /// Impassable cells, may be empty or absent
    #[serde(default)]
    pub obstacles: Vec<Coords>,
}

impl MazeSpec {
    /// Check dimensions and positions without building a grid
    pub fn validate(&self) -> Result<()> {
        if self.n_rows < 2 || self.n_columns < 2 {
            return Err(Error::DimensionTooSmall {
                n_rows: self.n_rows,
                n_columns: self.n_columns,
            });
        }
        self.check_bounds("source", self.source)?;
        self.check_bounds("target", self.target)?;
        for &obstacle in &self.obstacles {
            self.check_bounds("obstacle", obstacle)?;
        }
        Ok(())
    }

    /// Parse from JSON string and validate
    pub fn from_json(text: &str) -> Result<Self> {
        let spec: MazeSpec = serde_json::from_str(text)?;
        spec.validate()?;
        Ok(spec)
    }

    /// Load and validate a maze description from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Write the description to a JSON file, pretty-printed
    pub fn save(&self, path: &Path) -> Result<()> {
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    fn check_bounds(&self, what: &'static str, coords: Coords) -> Result<()> {
        if coords.row >= 0
            && coords.col >= 0
            && coords.row < self.n_rows
            && coords.col < self.n_columns
        {
            Ok(())
        } else {
            Err(Error::OutOfBounds {
                what,
                coords,
                n_rows: self.n_rows,
                n_columns: self.n_columns,
            })
        }
    }
}
