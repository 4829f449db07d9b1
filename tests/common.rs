//! Shared maze builders and assertions for the integration tests.

#![allow(dead_code)]

use marga_search::{Coords, Grid, RunReport};

/// Open grid with the source at the top-left and the target at the
/// bottom-right corner.
pub fn open_grid(n_rows: usize, n_cols: usize) -> Grid {
    let mut grid = Grid::new(n_rows, n_cols);
    grid.set_source(Coords::new(0, 0)).unwrap();
    grid.set_target(Coords::new(n_rows as i32 - 1, n_cols as i32 - 1))
        .unwrap();
    grid
}

/// 5x5 grid with a horizontal wall across row 2. With `with_opening` the
/// wall leaves column 4 open; without it the target is sealed off.
pub fn walled_grid(with_opening: bool) -> Grid {
    let mut grid = open_grid(5, 5);
    let walled_cols = if with_opening { 4 } else { 5 };
    for col in 0..walled_cols {
        grid.set_obstacle(Coords::new(2, col)).unwrap();
    }
    grid
}

/// Serpentine corridor, 51 rows by 101 columns. Even rows are open, odd
/// rows are walls with a single gap alternating between the right and
/// left edge, so the only route snakes through all 2651 open cells.
pub fn serpentine() -> Grid {
    let n_rows: i32 = 51;
    let n_cols: i32 = 101;
    let mut grid = Grid::new(n_rows as usize, n_cols as usize);
    for row in (1..n_rows).step_by(2) {
        let gap = if row % 4 == 1 { n_cols - 1 } else { 0 };
        for col in 0..n_cols {
            if col != gap {
                grid.set_obstacle(Coords::new(row, col)).unwrap();
            }
        }
    }
    grid.set_source(Coords::new(0, 0)).unwrap();
    grid.set_target(Coords::new(n_rows - 1, 0)).unwrap();
    grid
}

/// Assert a reported route is contiguous, runs from `source` to `target`
/// and matches the reported distance. Valid on unit-cost grids only,
/// where the distance equals the hop count.
pub fn assert_unit_path(report: &RunReport, source: Coords, target: Coords) {
    let path = report.path.as_ref().expect("report carries no path");
    assert_eq!(path.first(), Some(&source));
    assert_eq!(path.last(), Some(&target));
    for pair in path.windows(2) {
        assert_eq!(
            pair[0].manhattan_distance(&pair[1]),
            1,
            "non-adjacent step {} -> {}",
            pair[0],
            pair[1]
        );
    }
    assert_eq!(report.total_distance, (path.len() - 1) as f64);
}
