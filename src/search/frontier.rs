//! Frontier node shared by the best-first searches.

use std::cmp::Ordering;

use crate::core::Coords;

/// An entry in a best-first frontier.
///
/// `key` is f = g + h for A* and plain h for greedy best-first. Entries may
/// go stale when A* relaxes a cell; consumers skip entries whose cell is
/// already finalized.
#[derive(Clone, Debug)]
pub(super) struct FrontierNode {
    /// Flat index of the cell
    pub idx: usize,
    /// Cell position, used as the deterministic tie-break
    pub coords: Coords,
    /// Priority key, smaller is better
    pub key: f64,
}

impl Eq for FrontierNode {}

impl PartialEq for FrontierNode {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key && self.coords == other.coords
    }
}

impl Ord for FrontierNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap behavior; equal keys pop in
        // row-major coordinate order.
        other
            .key
            .partial_cmp(&self.key)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.coords.cmp(&self.coords))
    }
}

impl PartialOrd for FrontierNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
