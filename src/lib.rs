//! # Marga-Search: Maze Search Algorithm Engine
//!
//! A 2-D grid pathfinding library that runs four classic search
//! algorithms over the same weighted maze and reports comparable
//! per-run statistics for each.
//!
//! ## Features
//!
//! - **Four Algorithms**: depth-first, breadth-first, A* and greedy
//!   best-first, all committing into one shared grid representation
//! - **Per-Run Instrumentation**: path cost, wall-clock time, cells
//!   checked and peak pending-set size, comparable across algorithms
//! - **Pluggable Heuristics**: Chebyshev, Manhattan and Euclidean
//!   distance estimates for the informed searches
//! - **Maze Files and Generation**: JSON maze descriptions plus a
//!   seedable random generator for building test corpora
//!
//! ## Quick Start
//!
//! ```rust
//! use marga_search::{solve, Algorithm, Coords, Grid, Heuristic};
//!
//! # fn main() -> marga_search::Result<()> {
//! let mut grid = Grid::new(3, 3);
//! grid.set_source(Coords::new(0, 0))?;
//! grid.set_target(Coords::new(2, 2))?;
//! grid.set_obstacle(Coords::new(1, 1))?;
//!
//! let report = solve(&mut grid, Algorithm::Bfs, None)?;
//! assert_eq!(report.total_distance, 4.0);
//!
//! let report = solve(&mut grid, Algorithm::AStar, Some(Heuristic::Euclidean))?;
//! assert_eq!(report.total_distance, 4.0);
//! println!("{report}");
//! # Ok(())
//! # }
//! ```
//!
//! ## Coordinates
//!
//! Cells are addressed as `(row, col)` pairs of signed integers:
//! - **Row 0 is the top** of the maze and rows grow downward
//! - **Column 0 is the left edge** and columns grow rightward
//! - Storage and tie-breaking are row-major: `(0, 9)` sorts before `(1, 0)`
//!
//! ## Architecture
//!
//! The library is organized into modules:
//!
//! - [`core`]: fundamental types (Coords, Cell, CellKind)
//! - [`grid`]: flat grid storage and neighbor resolution
//! - [`heuristics`]: distance estimates for the informed searches
//! - [`search`]: the four algorithms and the shared run driver
//! - [`path`]: route reconstruction from predecessor links
//! - [`report`]: per-run outcome reports
//! - [`maze`]: JSON maze descriptions
//! - [`generator`]: random maze generation
//!
//! ## Data Flow
//!
//! ```text
//!     ┌───────────────┐        ┌───────────────────┐
//!     │   maze .json  │───────►│      MazeSpec     │
//!     └───────────────┘  load  │    (validated)    │
//!     ┌───────────────┐        └─────────┬─────────┘
//!     │ MazeGenerator │──────────────────┤
//!     └───────────────┘  generate        │ Grid::from_spec
//!                                        ▼
//!                              ┌───────────────────┐
//!                              │        Grid       │
//!                              │  flat Vec<Cell>,  │
//!                              │   source/target   │
//!                              └─────────┬─────────┘
//!                                        │ solve(algorithm, heuristic)
//!                    ┌─────────┬─────────┼─────────┐
//!                    ▼         ▼         ▼         ▼
//!                ┌───────┐ ┌───────┐ ┌───────┐ ┌────────┐
//!                │  DFS  │ │  BFS  │ │   A*  │ │ Greedy │
//!                └───┬───┘ └───┬───┘ └───┬───┘ └───┬────┘
//!                    └─────────┴────┬────┴─────────┘
//!                                   │ distances + predecessor links
//!                                   ▼
//!                         ┌───────────────────┐
//!                         │     RunReport     │
//!                         │  distance, time,  │
//!                         │  checked, memory, │
//!                         │       path        │
//!                         └───────────────────┘
//! ```

pub mod core;
pub mod error;
pub mod generator;
pub mod grid;
pub mod heuristics;
pub mod maze;
pub mod path;
pub mod report;
pub mod search;

// Re-export the main types at crate root
pub use crate::core::{Cell, CellKind, Coords};
pub use error::{Error, Result};
pub use generator::{GeneratorConfig, MazeGenerator};
pub use grid::Grid;
pub use heuristics::Heuristic;
pub use maze::MazeSpec;
pub use path::reconstruct_path;
pub use report::RunReport;
pub use search::{solve, solve_observed, Algorithm, NullObserver, SearchObserver, MAX_DEPTH};
