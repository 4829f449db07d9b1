//! Search algorithms and the shared run driver.
//!
//! Four algorithms operate on the same grid state: depth-first,
//! breadth-first, A* and greedy best-first. They all commit distances
//! and predecessor links directly into the grid's cells; [`solve`] wraps
//! a run with reset, timing, path reconstruction and report assembly.

mod astar;
mod bfs;
mod dfs;
mod frontier;
mod greedy;

pub use dfs::MAX_DEPTH;

use std::fmt;
use std::str::FromStr;
use std::time::Instant;

use log::debug;

use crate::core::Cell;
use crate::error::{Error, Result};
use crate::grid::Grid;
use crate::heuristics::Heuristic;
use crate::path::reconstruct_path;
use crate::report::RunReport;

/// What a single algorithm run produced beyond the state committed to
/// the grid itself.
///
/// `reached` must be explicit: the depth-limited search can commit a
/// finite distance to the target and still abandon the branch above it,
/// so a finite target distance alone does not prove arrival.
pub(crate) struct Traversal {
    /// Whether the run arrived at the target cell
    pub reached: bool,
    /// Peak size of the pending set (stack, queue or frontier)
    pub memory: usize,
}

/// Callbacks fired as a search progresses.
///
/// `on_discovered` fires exactly once per cell, at the moment a distance
/// is first committed to it; later relaxations do not re-fire it.
/// `on_finalized` fires when a cell leaves the pending set: at dequeue
/// or pop for the frontier searches, at frame unwind for depth-first.
pub trait SearchObserver {
    fn on_discovered(&mut self, _cell: &Cell) {}
    fn on_finalized(&mut self, _cell: &Cell) {}
}

/// Observer that discards every event
pub struct NullObserver;

impl SearchObserver for NullObserver {}

/// Search algorithm selector
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Algorithm {
    /// Depth-first walk, first route wins, depth-limited
    Dfs,
    /// Breadth-first sweep, shortest in hops
    Bfs,
    /// Cost-so-far plus heuristic, relaxing committed routes
    AStar,
    /// Heuristic-only frontier, fast and unguaranteed
    Greedy,
}

impl Algorithm {
    /// All algorithms in canonical reporting order
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Dfs,
        Algorithm::Bfs,
        Algorithm::AStar,
        Algorithm::Greedy,
    ];

    /// Whether the algorithm consults a heuristic
    #[inline]
    pub fn uses_heuristic(&self) -> bool {
        matches!(self, Algorithm::AStar | Algorithm::Greedy)
    }

    /// Lowercase identifier used in reports and on the command line
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Dfs => "dfs",
            Algorithm::Bfs => "bfs",
            Algorithm::AStar => "astar",
            Algorithm::Greedy => "greedy",
        }
    }

    fn tag(&self) -> &'static str {
        match self {
            Algorithm::Dfs => "DFS",
            Algorithm::Bfs => "BFS",
            Algorithm::AStar => "AStar",
            Algorithm::Greedy => "Greedy",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "dfs" => Ok(Algorithm::Dfs),
            "bfs" => Ok(Algorithm::Bfs),
            "astar" | "a_star" | "a*" => Ok(Algorithm::AStar),
            "greedy" | "gbfs" => Ok(Algorithm::Greedy),
            _ => Err(Error::UnknownAlgorithm(s.to_string())),
        }
    }
}

/// Run one algorithm over the grid and report the outcome.
///
/// The grid is reset first, so repeated calls on the same grid are
/// independent. The heuristic only matters for [`Algorithm::AStar`] and
/// [`Algorithm::Greedy`]; `None` falls back to Manhattan.
pub fn solve(
    grid: &mut Grid,
    algorithm: Algorithm,
    heuristic: Option<Heuristic>,
) -> Result<RunReport> {
    solve_observed(grid, algorithm, heuristic, &mut NullObserver)
}

/// [`solve`] with callbacks on every discovery and finalization
pub fn solve_observed(
    grid: &mut Grid,
    algorithm: Algorithm,
    heuristic: Option<Heuristic>,
    observer: &mut dyn SearchObserver,
) -> Result<RunReport> {
    let source = grid.source().ok_or(Error::SourceUnset)?;
    let target = grid.target().ok_or(Error::TargetUnset)?;
    grid.reset();
    let heuristic = heuristic.unwrap_or_default();

    debug!(
        "[{}] solving {}x{} grid, source {}, target {}",
        algorithm.tag(),
        grid.n_rows(),
        grid.n_cols(),
        grid.cell(source).coords,
        grid.cell(target).coords
    );
    if algorithm.uses_heuristic() {
        debug!("[{}] using {} heuristic", algorithm.tag(), heuristic);
    }

    let started = Instant::now();

    if source == target {
        let cell = grid.cell_mut(source);
        cell.passed_distance = 0.0;
        cell.total_distance = 0.0;
        debug!("[{}] source equals target, trivial path", algorithm.tag());
        return Ok(RunReport {
            total_distance: 0.0,
            elapsed: started.elapsed(),
            checked_cells: 0,
            memory: 0,
            path: Some(vec![grid.cell(source).coords]),
        });
    }

    let traversal = match algorithm {
        Algorithm::Dfs => dfs::run(grid, source, target, observer),
        Algorithm::Bfs => bfs::run(grid, source, target, observer),
        Algorithm::AStar => astar::run(grid, source, target, heuristic, observer),
        Algorithm::Greedy => greedy::run(grid, source, target, heuristic, observer),
    };
    let elapsed = started.elapsed();

    let (total_distance, path) = if traversal.reached {
        let distance = grid.cell(target).passed_distance;
        (distance, Some(reconstruct_path(grid)?))
    } else {
        (f64::INFINITY, None)
    };

    debug!(
        "[{}] done in {:.6}s: distance {}, {} cells checked, peak memory {}",
        algorithm.tag(),
        elapsed.as_secs_f64(),
        total_distance,
        grid.checked_cells(),
        traversal.memory
    );

    Ok(RunReport {
        total_distance,
        elapsed,
        checked_cells: grid.checked_cells(),
        memory: traversal.memory,
        path,
    })
}
