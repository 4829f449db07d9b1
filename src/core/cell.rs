//! Cell types and per-cell search state.

use serde::{Deserialize, Serialize};

use super::Coords;

/// Cell role within the maze
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum CellKind {
    /// Plain traversable cell
    #[default]
    Normal = 0,
    /// Start of the search
    Source = 1,
    /// Goal of the search
    Target = 2,
    /// Permanently blocked cell, excluded from traversal
    Obstacle = 3,
}

impl CellKind {
    /// Check if the cell blocks traversal
    #[inline]
    pub fn is_obstacle(&self) -> bool {
        matches!(self, CellKind::Obstacle)
    }

    /// Check if the cell can be entered by a search
    #[inline]
    pub fn is_traversable(&self) -> bool {
        !self.is_obstacle()
    }

    /// Check if this is the source cell
    #[inline]
    pub fn is_source(&self) -> bool {
        matches!(self, CellKind::Source)
    }

    /// Check if this is the target cell
    #[inline]
    pub fn is_target(&self) -> bool {
        matches!(self, CellKind::Target)
    }

    /// Get display character for visualization
    pub fn as_char(&self) -> char {
        match self {
            CellKind::Normal => '.',
            CellKind::Source => 'S',
            CellKind::Target => 'T',
            CellKind::Obstacle => '#',
        }
    }
}

/// A single maze cell with its per-run search state
///
/// Cells are owned exclusively by the [`Grid`](crate::Grid); searches mutate
/// them in place. The three distance fields start at +infinity, which doubles
/// as the "unvisited" sentinel. `predecessor` is a flat index into the owning
/// grid's cell vector, never an owning reference.
#[derive(Clone, Debug)]
pub struct Cell {
    /// Position in the grid (immutable after construction)
    pub coords: Coords,
    /// Cell role
    pub kind: CellKind,
    /// Traversal weight, positive, 1.0 by default
    pub cost: f64,
    /// g: accumulated cost from the source along the discovered path
    pub passed_distance: f64,
    /// h: heuristic estimate of remaining cost to the target
    pub ongoing_distance: f64,
    /// f: frontier ordering key; g+h for A*, h for greedy, g for DFS/BFS
    pub total_distance: f64,
    /// Flat index of the cell this one was discovered from
    pub predecessor: Option<usize>,
}

impl Cell {
    /// Create a normal cell at the given coordinates with unit cost
    pub fn new(coords: Coords) -> Self {
        Self {
            coords,
            kind: CellKind::Normal,
            cost: 1.0,
            passed_distance: f64::INFINITY,
            ongoing_distance: f64::INFINITY,
            total_distance: f64::INFINITY,
            predecessor: None,
        }
    }

    /// Check if a search has committed a distance to this cell
    #[inline]
    pub fn is_discovered(&self) -> bool {
        self.passed_distance.is_finite()
    }

    /// Clear per-run search state, preserving kind and cost
    pub fn reset(&mut self) {
        self.passed_distance = f64::INFINITY;
        self.ongoing_distance = f64::INFINITY;
        self.total_distance = f64::INFINITY;
        self.predecessor = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_predicates() {
        assert!(CellKind::Obstacle.is_obstacle());
        assert!(!CellKind::Obstacle.is_traversable());
        assert!(CellKind::Normal.is_traversable());
        assert!(CellKind::Source.is_source());
        assert!(CellKind::Target.is_target());
        assert!(!CellKind::Normal.is_source());
    }

    #[test]
    fn test_kind_default_is_normal() {
        assert_eq!(CellKind::default(), CellKind::Normal);
    }

    #[test]
    fn test_display_chars() {
        assert_eq!(CellKind::Normal.as_char(), '.');
        assert_eq!(CellKind::Source.as_char(), 'S');
        assert_eq!(CellKind::Target.as_char(), 'T');
        assert_eq!(CellKind::Obstacle.as_char(), '#');
    }

    #[test]
    fn test_new_cell_is_unvisited() {
        let cell = Cell::new(Coords::new(2, 3));
        assert_eq!(cell.kind, CellKind::Normal);
        assert_eq!(cell.cost, 1.0);
        assert!(!cell.is_discovered());
        assert!(cell.passed_distance.is_infinite());
        assert!(cell.ongoing_distance.is_infinite());
        assert!(cell.total_distance.is_infinite());
        assert!(cell.predecessor.is_none());
    }

    #[test]
    fn test_reset_preserves_kind_and_cost() {
        let mut cell = Cell::new(Coords::new(0, 0));
        cell.kind = CellKind::Target;
        cell.cost = 4.5;
        cell.passed_distance = 12.0;
        cell.ongoing_distance = 3.0;
        cell.total_distance = 15.0;
        cell.predecessor = Some(7);

        cell.reset();

        assert_eq!(cell.kind, CellKind::Target);
        assert_eq!(cell.cost, 4.5);
        assert!(!cell.is_discovered());
        assert!(cell.predecessor.is_none());
    }
}
