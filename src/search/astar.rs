//! A* search: best-first over f = g + h with relaxation.

use std::collections::BinaryHeap;

use log::{debug, trace};

use super::frontier::FrontierNode;
use super::{SearchObserver, Traversal};
use crate::grid::Grid;
use crate::heuristics::Heuristic;

pub(super) fn run(
    grid: &mut Grid,
    source: usize,
    target: usize,
    heuristic: Heuristic,
    observer: &mut dyn SearchObserver,
) -> Traversal {
    let target_coords = grid.cell(target).coords;

    let h0 = heuristic.estimate(grid.cell(source).coords, target_coords);
    let start = grid.cell_mut(source);
    start.passed_distance = 0.0;
    start.ongoing_distance = h0;
    start.total_distance = h0;
    grid.checked_cells += 1;
    observer.on_discovered(grid.cell(source));

    let mut frontier = BinaryHeap::new();
    frontier.push(FrontierNode {
        idx: source,
        coords: grid.cell(source).coords,
        key: h0,
    });
    let mut peak = 1;
    let mut finalized = vec![false; grid.cell_count()];

    while let Some(node) = frontier.pop() {
        if finalized[node.idx] {
            // Stale entry left behind by a relaxation.
            continue;
        }
        finalized[node.idx] = true;
        observer.on_finalized(grid.cell(node.idx));
        if node.idx == target {
            debug!(
                "[AStar] reached target {} g={:.1}, peak frontier {}",
                target_coords,
                grid.cell(target).passed_distance,
                peak
            );
            return Traversal {
                reached: true,
                memory: peak,
            };
        }
        trace!("[AStar] expand {} f={:.1}", node.coords, node.key);

        for neighbor in grid.neighbors(node.idx) {
            if finalized[neighbor] {
                continue;
            }
            let g = grid.cell(node.idx).passed_distance + grid.cell(neighbor).cost;
            let h = heuristic.estimate(grid.cell(neighbor).coords, target_coords);
            let f = g + h;

            let first = grid.cell(neighbor).total_distance.is_infinite();
            if !first && grid.cell(neighbor).total_distance <= f {
                continue;
            }
            if !first {
                trace!(
                    "[AStar] relaxed {} f {:.1} -> {:.1}",
                    grid.cell(neighbor).coords,
                    grid.cell(neighbor).total_distance,
                    f
                );
            }
            let cell = grid.cell_mut(neighbor);
            cell.passed_distance = g;
            cell.ongoing_distance = h;
            cell.total_distance = f;
            cell.predecessor = Some(node.idx);
            if first {
                grid.checked_cells += 1;
                observer.on_discovered(grid.cell(neighbor));
            }
            frontier.push(FrontierNode {
                idx: neighbor,
                coords: grid.cell(neighbor).coords,
                key: f,
            });
            peak = peak.max(frontier.len());
        }
    }

    debug!(
        "[AStar] FAILED: frontier exhausted after {} cells, target unreachable",
        grid.checked_cells
    );
    Traversal {
        reached: false,
        memory: peak,
    }
}
