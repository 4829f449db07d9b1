//! Grid coordinate type.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Grid coordinates (integer row/column indices)
///
/// The derived ordering is row-major (row first, then column), which the
/// search frontiers use as a deterministic tie-break key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(from = "(i32, i32)", into = "(i32, i32)")]
pub struct Coords {
    /// Row index
    pub row: i32,
    /// Column index
    pub col: i32,
}

impl Coords {
    /// Create a new coordinate
    #[inline]
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Chebyshev distance (max of row and column distance)
    #[inline]
    pub fn chebyshev_distance(&self, other: &Coords) -> i32 {
        (self.row - other.row).abs().max((self.col - other.col).abs())
    }

    /// Manhattan distance to another coordinate
    #[inline]
    pub fn manhattan_distance(&self, other: &Coords) -> i32 {
        (self.row - other.row).abs() + (self.col - other.col).abs()
    }

    /// Euclidean (straight-line) distance to another coordinate
    #[inline]
    pub fn euclidean_distance(&self, other: &Coords) -> f64 {
        let dr = (self.row - other.row) as f64;
        let dc = (self.col - other.col) as f64;
        (dr * dr + dc * dc).sqrt()
    }
}

impl From<(i32, i32)> for Coords {
    #[inline]
    fn from((row, col): (i32, i32)) -> Self {
        Self { row, col }
    }
}

impl From<Coords> for (i32, i32) {
    #[inline]
    fn from(c: Coords) -> Self {
        (c.row, c.col)
    }
}

impl fmt::Display for Coords {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_major_ordering() {
        assert!(Coords::new(0, 5) < Coords::new(1, 0));
        assert!(Coords::new(2, 1) < Coords::new(2, 3));
        assert_eq!(Coords::new(4, 4), Coords::new(4, 4));
    }

    #[test]
    fn test_distances() {
        let a = Coords::new(0, 0);
        let b = Coords::new(3, 4);
        assert_eq!(a.chebyshev_distance(&b), 4);
        assert_eq!(a.manhattan_distance(&b), 7);
        assert!((a.euclidean_distance(&b) - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_distances_are_symmetric() {
        let a = Coords::new(7, 2);
        let b = Coords::new(1, 9);
        assert_eq!(a.manhattan_distance(&b), b.manhattan_distance(&a));
        assert_eq!(a.chebyshev_distance(&b), b.chebyshev_distance(&a));
        assert_eq!(a.euclidean_distance(&b), b.euclidean_distance(&a));
    }

    #[test]
    fn test_serializes_as_pair() {
        let c = Coords::new(3, 7);
        assert_eq!(serde_json::to_string(&c).unwrap(), "[3,7]");
        let back: Coords = serde_json::from_str("[3,7]").unwrap();
        assert_eq!(back, c);
    }
}
