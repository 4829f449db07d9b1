//! Breadth-first search over a FIFO queue.
//!
//! Cells are committed (distance and predecessor) at first discovery and
//! never relaxed, so with non-uniform costs the reported distance is the
//! cost along the first-discovered hop path, not the minimum-weight path.
//! That discovery-order semantic is deliberate; this is not Dijkstra.

use std::collections::VecDeque;

use log::{debug, trace};

use super::{SearchObserver, Traversal};
use crate::grid::Grid;

pub(super) fn run(
    grid: &mut Grid,
    source: usize,
    target: usize,
    observer: &mut dyn SearchObserver,
) -> Traversal {
    let start = grid.cell_mut(source);
    start.passed_distance = 0.0;
    start.total_distance = 0.0;
    grid.checked_cells += 1;
    observer.on_discovered(grid.cell(source));

    let mut queue = VecDeque::new();
    queue.push_back(source);
    let mut peak = 1;

    while let Some(idx) = queue.pop_front() {
        observer.on_finalized(grid.cell(idx));
        if idx == target {
            debug!(
                "[BFS] reached target {} g={:.1}, peak queue {}",
                grid.cell(idx).coords,
                grid.cell(idx).passed_distance,
                peak
            );
            return Traversal {
                reached: true,
                memory: peak,
            };
        }

        for neighbor in grid.neighbors(idx) {
            if grid.cell(neighbor).is_discovered() {
                continue;
            }
            let g = grid.cell(idx).passed_distance + grid.cell(neighbor).cost;
            let cell = grid.cell_mut(neighbor);
            cell.passed_distance = g;
            cell.total_distance = g;
            cell.predecessor = Some(idx);
            grid.checked_cells += 1;
            observer.on_discovered(grid.cell(neighbor));
            trace!("[BFS] discovered {} g={:.1}", grid.cell(neighbor).coords, g);
            queue.push_back(neighbor);
            peak = peak.max(queue.len());
        }
    }

    debug!(
        "[BFS] queue exhausted after {} cells, target unreachable",
        grid.checked_cells
    );
    Traversal {
        reached: false,
        memory: peak,
    }
}
