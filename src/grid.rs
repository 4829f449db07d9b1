//! Maze grid storage and neighbor resolution.
//!
//! Cells live in one flat row-major `Vec`; every cross-cell reference
//! (source, target, predecessor links) is a flat index into that vector,
//! so the grid stays the sole owner of all cells.

use crate::core::{Cell, CellKind, Coords};
use crate::error::{Error, Result};
use crate::maze::MazeSpec;

/// A rectangular maze of weighted cells.
///
/// The grid tracks which cell is the search source and which is the target,
/// plus a per-run counter of distinct cells discovered. [`Grid::reset`]
/// clears all per-run state while preserving cell kinds and costs, so one
/// grid can be solved repeatedly.
#[derive(Clone, Debug)]
pub struct Grid {
    /// Row-major cell storage, `n_rows * n_cols` entries
    cells: Vec<Cell>,
    /// Grid height in cells
    n_rows: usize,
    /// Grid width in cells
    n_cols: usize,
    /// Flat index of the source cell
    source: Option<usize>,
    /// Flat index of the target cell
    target: Option<usize>,
    /// Distinct cells discovered during the current run
    pub(crate) checked_cells: usize,
}

impl Grid {
    /// Create a grid of normal unit-cost cells
    pub fn new(n_rows: usize, n_cols: usize) -> Self {
        let mut cells = Vec::with_capacity(n_rows * n_cols);
        for row in 0..n_rows {
            for col in 0..n_cols {
                cells.push(Cell::new(Coords::new(row as i32, col as i32)));
            }
        }
        Self {
            cells,
            n_rows,
            n_cols,
            source: None,
            target: None,
            checked_cells: 0,
        }
    }

    /// Build a grid from a validated maze description.
    ///
    /// Obstacles are applied first, then the target, then the source, so a
    /// coinciding target overrides an obstacle and a coinciding source
    /// overrides the target (last write wins).
    pub fn from_spec(spec: &MazeSpec) -> Result<Self> {
        spec.validate()?;
        let mut grid = Grid::new(spec.n_rows as usize, spec.n_columns as usize);
        for &obstacle in &spec.obstacles {
            grid.set_obstacle(obstacle)?;
        }
        grid.set_target(spec.target)?;
        grid.set_source(spec.source)?;
        Ok(grid)
    }

    /// Grid height in cells
    #[inline]
    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    /// Grid width in cells
    #[inline]
    pub fn n_cols(&self) -> usize {
        self.n_cols
    }

    /// Total number of cells
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Check if coordinates are within bounds
    #[inline]
    pub fn in_bounds(&self, coords: Coords) -> bool {
        coords.row >= 0
            && coords.col >= 0
            && (coords.row as usize) < self.n_rows
            && (coords.col as usize) < self.n_cols
    }

    /// Flat index for coordinates, `None` when out of bounds
    #[inline]
    pub fn idx(&self, coords: Coords) -> Option<usize> {
        if self.in_bounds(coords) {
            Some(coords.row as usize * self.n_cols + coords.col as usize)
        } else {
            None
        }
    }

    /// Cell by flat index
    #[inline]
    pub fn cell(&self, idx: usize) -> &Cell {
        &self.cells[idx]
    }

    /// Mutable cell by flat index
    #[inline]
    pub fn cell_mut(&mut self, idx: usize) -> &mut Cell {
        &mut self.cells[idx]
    }

    /// Cell by coordinates, `None` when out of bounds
    #[inline]
    pub fn cell_at(&self, coords: Coords) -> Option<&Cell> {
        self.idx(coords).map(|i| &self.cells[i])
    }

    /// All cells in row-major order
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Flat index of the source cell
    #[inline]
    pub fn source(&self) -> Option<usize> {
        self.source
    }

    /// Flat index of the target cell
    #[inline]
    pub fn target(&self) -> Option<usize> {
        self.target
    }

    /// Distinct cells discovered during the current run
    #[inline]
    pub fn checked_cells(&self) -> usize {
        self.checked_cells
    }

    /// Mark a cell as the search source (out-of-bounds rejected).
    ///
    /// A previous source cell is demoted to normal. Placing the source on
    /// the target cell keeps the target index but overrides its kind.
    pub fn set_source(&mut self, coords: Coords) -> Result<()> {
        let idx = self.checked_idx("source", coords)?;
        if let Some(old) = self.source.take() {
            if self.cells[old].kind.is_source() {
                self.cells[old].kind = CellKind::Normal;
            }
        }
        self.cells[idx].kind = CellKind::Source;
        self.source = Some(idx);
        Ok(())
    }

    /// Mark a cell as the search target (out-of-bounds rejected)
    pub fn set_target(&mut self, coords: Coords) -> Result<()> {
        let idx = self.checked_idx("target", coords)?;
        if let Some(old) = self.target.take() {
            if self.cells[old].kind.is_target() {
                self.cells[old].kind = CellKind::Normal;
            }
        }
        self.cells[idx].kind = CellKind::Target;
        self.target = Some(idx);
        Ok(())
    }

    /// Mark a cell as an obstacle (out-of-bounds rejected).
    ///
    /// Turning the current source or target cell into an obstacle unsets
    /// that role; obstacle cells are never source or target.
    pub fn set_obstacle(&mut self, coords: Coords) -> Result<()> {
        let idx = self.checked_idx("obstacle", coords)?;
        if self.source == Some(idx) {
            self.source = None;
        }
        if self.target == Some(idx) {
            self.target = None;
        }
        self.cells[idx].kind = CellKind::Obstacle;
        Ok(())
    }

    /// Assign a traversal weight to a cell (must be positive)
    pub fn set_cost(&mut self, coords: Coords, cost: f64) -> Result<()> {
        let idx = self.checked_idx("cell", coords)?;
        if !(cost > 0.0) {
            return Err(Error::NonPositiveCost { coords, cost });
        }
        self.cells[idx].cost = cost;
        Ok(())
    }

    /// Traversable in-bounds neighbors of a cell, probed in the fixed
    /// order west, south, east, north.
    ///
    /// The order is not semantically significant but must stay stable: it
    /// drives discovery order and therefore tie-breaking, so changing it
    /// changes reported paths and instrumentation.
    pub fn neighbors(&self, idx: usize) -> Vec<usize> {
        let Coords { row, col } = self.cells[idx].coords;
        let probes = [
            Coords::new(row, col - 1),
            Coords::new(row + 1, col),
            Coords::new(row, col + 1),
            Coords::new(row - 1, col),
        ];
        let mut out = Vec::with_capacity(4);
        for probe in probes {
            if let Some(i) = self.idx(probe) {
                if self.cells[i].kind.is_traversable() {
                    out.push(i);
                }
            }
        }
        out
    }

    /// Clear per-run search state on every cell and zero the discovery
    /// counter. Kinds and costs survive, so the maze itself is unchanged.
    pub fn reset(&mut self) {
        for cell in self.cells.iter_mut() {
            cell.reset();
        }
        self.checked_cells = 0;
    }

    /// ASCII rendering of the maze, one row per line
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.cells.len() + self.n_rows);
        for row in 0..self.n_rows {
            for col in 0..self.n_cols {
                out.push(self.cells[row * self.n_cols + col].kind.as_char());
            }
            out.push('\n');
        }
        out
    }

    fn checked_idx(&self, what: &'static str, coords: Coords) -> Result<usize> {
        self.idx(coords).ok_or(Error::OutOfBounds {
            what,
            coords,
            n_rows: self.n_rows as i32,
            n_columns: self.n_cols as i32,
        })
    }
}
