//! Depth-first search over an explicit frame stack.
//!
//! The stack mirrors what native recursion would do: one frame per cell
//! being expanded, siblings tried in neighbor-probe order. Distances are
//! committed pre-order at first discovery and never corrected on
//! backtrack, so DFS distance is not guaranteed shortest.

use log::{debug, trace, warn};

use super::{SearchObserver, Traversal};
use crate::grid::Grid;

/// Deepest frame the search may enter; deeper branches are abandoned
/// unexplored, so a target beyond this depth is reported unreachable.
pub const MAX_DEPTH: usize = 2500;

/// A suspended expansion: the cell being explored and how many of its
/// neighbors have been tried so far.
struct Frame {
    idx: usize,
    neighbors: Vec<usize>,
    next: usize,
}

enum Entered {
    /// The cell is the target; the search is done
    Found,
    /// A frame was pushed and expansion continues below it
    Deepened,
    /// The depth ceiling was hit; the frame unwound without expanding
    Abandoned,
}

/// Enter a cell as a new frame. The depth guard runs before the target
/// check, so a target deeper than [`MAX_DEPTH`] stays unfound.
fn descend(
    grid: &Grid,
    stack: &mut Vec<Frame>,
    idx: usize,
    target: usize,
    peak: &mut usize,
) -> Entered {
    let depth = stack.len() + 1;
    *peak = (*peak).max(depth);
    if depth > MAX_DEPTH {
        trace!(
            "[DFS] depth {} exceeds ceiling {}, abandoning branch at {}",
            depth,
            MAX_DEPTH,
            grid.cell(idx).coords
        );
        return Entered::Abandoned;
    }
    if idx == target {
        return Entered::Found;
    }
    stack.push(Frame {
        idx,
        neighbors: grid.neighbors(idx),
        next: 0,
    });
    Entered::Deepened
}

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

    let mut stack: Vec<Frame> = Vec::new();
    let mut peak = 0;
    let mut abandoned = 0usize;

    match descend(grid, &mut stack, source, target, &mut peak) {
        Entered::Found => {
            observer.on_finalized(grid.cell(target));
            return Traversal {
                reached: true,
                memory: peak,
            };
        }
        Entered::Abandoned => unreachable!("source frame is within the depth ceiling"),
        Entered::Deepened => {}
    }

    while !stack.is_empty() {
        let top = stack.len() - 1;
        let (parent, neighbor) = {
            let frame = &mut stack[top];
            match frame.neighbors.get(frame.next) {
                Some(&n) => {
                    frame.next += 1;
                    (frame.idx, n)
                }
                None => {
                    observer.on_finalized(grid.cell(frame.idx));
                    stack.pop();
                    continue;
                }
            }
        };

        if grid.cell(neighbor).is_discovered() {
            continue;
        }

        // Pre-order commit: final for this run even if the branch is a
        // dead end, and even if the frame below aborts on depth.
        let g = grid.cell(parent).passed_distance + grid.cell(neighbor).cost;
        let cell = grid.cell_mut(neighbor);
        cell.passed_distance = g;
        cell.total_distance = g;
        cell.predecessor = Some(parent);
        grid.checked_cells += 1;
        observer.on_discovered(grid.cell(neighbor));
        trace!(
            "[DFS] discovered {} g={:.1} depth={}",
            grid.cell(neighbor).coords,
            g,
            stack.len() + 1
        );

        match descend(grid, &mut stack, neighbor, target, &mut peak) {
            Entered::Found => {
                observer.on_finalized(grid.cell(neighbor));
                debug!(
                    "[DFS] reached target {} g={:.1}, peak depth {}",
                    grid.cell(neighbor).coords,
                    g,
                    peak
                );
                return Traversal {
                    reached: true,
                    memory: peak,
                };
            }
            Entered::Abandoned => abandoned += 1,
            Entered::Deepened => {}
        }
    }

    if abandoned > 0 {
        warn!(
            "[DFS] target unreachable within depth ceiling {}, {} branches abandoned",
            MAX_DEPTH, abandoned
        );
    } else {
        debug!(
            "[DFS] exhausted after {} cells, target unreachable",
            grid.checked_cells
        );
    }
    Traversal {
        reached: false,
        memory: peak,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Coords;
    use crate::search::{solve, Algorithm};

    fn corridor(length: usize, target_col: i32) -> Grid {
        let mut grid = Grid::new(1, length);
        grid.set_source(Coords::new(0, 0)).unwrap();
        grid.set_target(Coords::new(0, target_col)).unwrap();
        grid
    }

    #[test]
    fn test_first_route_wins_even_when_longer() {
        // Probe order (west, south, east, north) sends DFS south before
        // east, so it snakes through all nine cells of an open 3x3 and
        // reaches (0,2) with g=8 where the direct route costs 2.
        let mut grid = Grid::new(3, 3);
        grid.set_source(Coords::new(0, 0)).unwrap();
        grid.set_target(Coords::new(0, 2)).unwrap();

        let report = solve(&mut grid, Algorithm::Dfs, None).unwrap();
        assert_eq!(report.total_distance, 8.0);
        assert_eq!(report.checked_cells, 9);
        assert_eq!(report.memory, 9);
        assert_eq!(report.path.as_ref().unwrap().len(), 9);
    }

    #[test]
    fn test_target_on_depth_boundary_is_found() {
        // Depth equals frame count: the cell at column 2499 sits in frame
        // 2500, exactly at the ceiling.
        let mut grid = corridor(2501, 2499);
        let report = solve(&mut grid, Algorithm::Dfs, None).unwrap();
        assert_eq!(report.total_distance, 2499.0);
        assert_eq!(report.memory, 2500);
    }

    #[test]
    fn test_target_past_depth_boundary_is_unreachable() {
        let mut grid = corridor(2501, 2500);
        let report = solve(&mut grid, Algorithm::Dfs, None).unwrap();
        assert!(report.total_distance.is_infinite());
        assert!(report.path.is_none());
        // The aborted frame was entered and counts toward the peak.
        assert_eq!(report.memory, MAX_DEPTH + 1);
    }

    #[test]
    fn test_walled_off_target_is_unreachable() {
        let mut grid = Grid::new(3, 3);
        grid.set_source(Coords::new(0, 0)).unwrap();
        grid.set_target(Coords::new(2, 2)).unwrap();
        for row in 0..3 {
            grid.set_obstacle(Coords::new(row, 1)).unwrap();
        }
        let report = solve(&mut grid, Algorithm::Dfs, None).unwrap();
        assert!(report.total_distance.is_infinite());
        assert_eq!(report.checked_cells, 3);
    }
}
