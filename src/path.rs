//! Route reconstruction from committed predecessor links.

use crate::core::Coords;
use crate::error::{Error, Result};
use crate::grid::Grid;

/// Walk predecessor links from the target back to the source and return
/// the route in source-to-target order.
///
/// Expects a run that actually reached the target. A cell without a
/// predecessor before the source is reached, or a chain longer than the
/// grid itself (a link cycle), is reported as
/// [`Error::BrokenPredecessorChain`].
pub fn reconstruct_path(grid: &Grid) -> Result<Vec<Coords>> {
    let source = grid.source().ok_or(Error::SourceUnset)?;
    let target = grid.target().ok_or(Error::TargetUnset)?;

    let mut path = Vec::new();
    let mut current = target;
    path.push(grid.cell(current).coords);
    while current != source {
        let at = grid.cell(current).coords;
        current = grid
            .cell(current)
            .predecessor
            .ok_or(Error::BrokenPredecessorChain { at })?;
        path.push(grid.cell(current).coords);
        if path.len() > grid.cell_count() {
            return Err(Error::BrokenPredecessorChain {
                at: grid.cell(current).coords,
            });
        }
    }
    path.reverse();
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reconstructs_in_source_to_target_order() {
        let mut grid = Grid::new(2, 3);
        grid.set_source(Coords::new(0, 0)).unwrap();
        grid.set_target(Coords::new(0, 2)).unwrap();
        let a = grid.idx(Coords::new(0, 0)).unwrap();
        let b = grid.idx(Coords::new(0, 1)).unwrap();
        let c = grid.idx(Coords::new(0, 2)).unwrap();
        grid.cell_mut(b).predecessor = Some(a);
        grid.cell_mut(c).predecessor = Some(b);

        let path = reconstruct_path(&grid).unwrap();
        assert_eq!(
            path,
            vec![Coords::new(0, 0), Coords::new(0, 1), Coords::new(0, 2)]
        );
    }

    #[test]
    fn test_trivial_when_source_is_target() {
        let mut grid = Grid::new(2, 2);
        grid.set_target(Coords::new(1, 1)).unwrap();
        grid.set_source(Coords::new(1, 1)).unwrap();
        assert_eq!(reconstruct_path(&grid).unwrap(), vec![Coords::new(1, 1)]);
    }

    #[test]
    fn test_missing_link_is_reported() {
        let mut grid = Grid::new(2, 2);
        grid.set_source(Coords::new(0, 0)).unwrap();
        grid.set_target(Coords::new(1, 1)).unwrap();
        assert!(matches!(
            reconstruct_path(&grid),
            Err(Error::BrokenPredecessorChain { at }) if at == Coords::new(1, 1)
        ));
    }

    #[test]
    fn test_cycle_is_reported() {
        let mut grid = Grid::new(2, 2);
        grid.set_source(Coords::new(0, 0)).unwrap();
        grid.set_target(Coords::new(1, 1)).unwrap();
        let b = grid.idx(Coords::new(0, 1)).unwrap();
        let d = grid.idx(Coords::new(1, 1)).unwrap();
        grid.cell_mut(b).predecessor = Some(d);
        grid.cell_mut(d).predecessor = Some(b);
        assert!(matches!(
            reconstruct_path(&grid),
            Err(Error::BrokenPredecessorChain { .. })
        ));
    }
}
