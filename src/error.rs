//! Error types for marga-search

use crate::core::Coords;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// marga-search error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed maze description (JSON syntax or field type)
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Grid dimensions below the 2x2 minimum
    #[error("Grid too small: {n_rows}x{n_columns}, need at least 2x2")]
    DimensionTooSmall {
        /// Requested row count
        n_rows: i32,
        /// Requested column count
        n_columns: i32,
    },

    /// Coordinate outside the grid
    #[error("{what} {coords} outside {n_rows}x{n_columns} grid")]
    OutOfBounds {
        /// Which field held the coordinate ("source", "target", "obstacle", ...)
        what: &'static str,
        /// The offending coordinate
        coords: Coords,
        /// Grid row count
        n_rows: i32,
        /// Grid column count
        n_columns: i32,
    },

    /// Traversal weight must be positive
    #[error("Non-positive cost {cost} at {coords}")]
    NonPositiveCost {
        /// Cell the cost was assigned to
        coords: Coords,
        /// The rejected value
        cost: f64,
    },

    /// Generator range empty or density impossible
    #[error("Invalid generator config: {0}")]
    InvalidGeneratorConfig(String),

    /// A run was requested on a grid with no source cell
    #[error("Grid has no source cell")]
    SourceUnset,

    /// A run was requested on a grid with no target cell
    #[error("Grid has no target cell")]
    TargetUnset,

    /// Unrecognized algorithm name
    #[error("Unknown algorithm: {0}")]
    UnknownAlgorithm(String),

    /// Unrecognized heuristic name
    #[error("Unknown heuristic: {0}")]
    UnknownHeuristic(String),

    /// Predecessor chain did not terminate at the source cell
    #[error("Predecessor chain broken at {at}")]
    BrokenPredecessorChain {
        /// Last cell reached before the chain failed
        at: Coords,
    },
}
