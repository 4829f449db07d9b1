//! Distance heuristics for informed search.
//!
//! All three estimates are admissible on a unit-cost 4-connected grid.
//! Heuristics are pure functions of two coordinates and never read
//! mutable cell state.

use std::fmt;
use std::str::FromStr;

use crate::core::Coords;
use crate::error::Error;

/// Remaining-distance estimate used by A* and greedy best-first
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Heuristic {
    /// `max(|dr|, |dc|)`
    Chebyshev,
    /// `|dr| + |dc|`
    #[default]
    Manhattan,
    /// `sqrt(dr^2 + dc^2)`
    Euclidean,
}

impl Heuristic {
    /// Every heuristic, in a stable order for batch iteration
    pub const ALL: [Heuristic; 3] = [
        Heuristic::Chebyshev,
        Heuristic::Manhattan,
        Heuristic::Euclidean,
    ];

    /// Estimate the remaining distance from `from` to `to`
    #[inline]
    pub fn estimate(&self, from: Coords, to: Coords) -> f64 {
        match self {
            Heuristic::Chebyshev => from.chebyshev_distance(&to) as f64,
            Heuristic::Manhattan => from.manhattan_distance(&to) as f64,
            Heuristic::Euclidean => from.euclidean_distance(&to),
        }
    }

    /// Lowercase name, as accepted by [`FromStr`]
    pub fn name(&self) -> &'static str {
        match self {
            Heuristic::Chebyshev => "chebyshev",
            Heuristic::Manhattan => "manhattan",
            Heuristic::Euclidean => "euclidean",
        }
    }
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Heuristic {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "chebyshev" => Ok(Heuristic::Chebyshev),
            "manhattan" => Ok(Heuristic::Manhattan),
            "euclidean" => Ok(Heuristic::Euclidean),
            _ => Err(Error::UnknownHeuristic(s.to_string())),
        }
    }
}
