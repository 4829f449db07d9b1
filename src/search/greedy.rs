//! Greedy best-first search: frontier ordered by the heuristic alone.
//!
//! Cells are committed at first discovery and never relaxed, so the first
//! route to reach a cell keeps it permanently. The reported distance is
//! the accumulated path cost at the target, not the heuristic value, and
//! carries no optimality guarantee.

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

    while let Some(node) = frontier.pop() {
        observer.on_finalized(grid.cell(node.idx));
        if node.idx == target {
            debug!(
                "[Greedy] reached target {} g={:.1}, peak frontier {}",
                target_coords,
                grid.cell(target).passed_distance,
                peak
            );
            return Traversal {
                reached: true,
                memory: peak,
            };
        }
        trace!("[Greedy] expand {} h={:.1}", node.coords, node.key);

        for neighbor in grid.neighbors(node.idx) {
            if grid.cell(neighbor).is_discovered() {
                continue;
            }
            let g = grid.cell(node.idx).passed_distance + grid.cell(neighbor).cost;
            let h = heuristic.estimate(grid.cell(neighbor).coords, target_coords);
            let cell = grid.cell_mut(neighbor);
            cell.passed_distance = g;
            cell.ongoing_distance = h;
            cell.total_distance = h;
            cell.predecessor = Some(node.idx);
            grid.checked_cells += 1;
            observer.on_discovered(grid.cell(neighbor));
            frontier.push(FrontierNode {
                idx: neighbor,
                coords: grid.cell(neighbor).coords,
                key: h,
            });
            peak = peak.max(frontier.len());
        }
    }

    debug!(
        "[Greedy] frontier exhausted after {} cells, target unreachable",
        grid.checked_cells
    );
    Traversal {
        reached: false,
        memory: peak,
    }
}

#[cfg(test)]
mod tests {
    use crate::core::Coords;
    use crate::search::{solve, Algorithm};
    use crate::{Grid, Heuristic};

    #[test]
    fn test_heuristic_guides_expansion() {
        let mut grid = Grid::new(3, 3);
        grid.set_source(Coords::new(0, 0)).unwrap();
        grid.set_target(Coords::new(2, 2)).unwrap();

        let report = solve(&mut grid, Algorithm::Greedy, Some(Heuristic::Manhattan)).unwrap();
        assert_eq!(report.total_distance, 4.0);
        // Cells behind the source never look promising, so unlike BFS the
        // search finishes without discovering the whole grid.
        assert_eq!(report.checked_cells, 7);
        assert_eq!(
            report.path.unwrap(),
            vec![
                Coords::new(0, 0),
                Coords::new(0, 1),
                Coords::new(0, 2),
                Coords::new(1, 2),
                Coords::new(2, 2),
            ]
        );
    }

    #[test]
    fn test_first_discovery_wins_over_cheaper_route() {
        // (0,1) and (1,0) tie on h; the row-major tie-break pops (0,1)
        // first, so the target is discovered through the cost-100 cell
        // and the cheap route through (1,0) never replaces it.
        let mut grid = Grid::new(2, 2);
        grid.set_source(Coords::new(0, 0)).unwrap();
        grid.set_target(Coords::new(1, 1)).unwrap();
        grid.set_cost(Coords::new(0, 1), 100.0).unwrap();

        let report = solve(&mut grid, Algorithm::Greedy, Some(Heuristic::Manhattan)).unwrap();
        assert_eq!(report.total_distance, 101.0);
        assert_eq!(
            report.path.unwrap(),
            vec![Coords::new(0, 0), Coords::new(0, 1), Coords::new(1, 1)]
        );
    }

    #[test]
    fn test_reports_path_cost_not_heuristic() {
        let mut grid = Grid::new(2, 2);
        grid.set_source(Coords::new(0, 0)).unwrap();
        grid.set_target(Coords::new(1, 1)).unwrap();
        grid.set_cost(Coords::new(1, 0), 10.0).unwrap();

        let report = solve(&mut grid, Algorithm::Greedy, Some(Heuristic::Manhattan)).unwrap();
        // h at the target is 0; the report must carry the accumulated g.
        assert_eq!(report.total_distance, 2.0);
    }
}
