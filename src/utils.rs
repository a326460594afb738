use fnv::FnvHashSet;

use crate::cells::{Cell, Direction};
use crate::grid_traits::MazeView;

/// Flood fill through open passages from `from`.
pub fn open_cells_reachable<M: MazeView>(maze: &M, from: Cell) -> FnvHashSet<Cell> {
    let mut seen = FnvHashSet::default();
    seen.reserve(maze.dimensions().size().0);
    let _ = seen.insert(from);
    let mut frontier = vec![from];
    while let Some(cell) = frontier.pop() {
        for &dir in Direction::ALL.iter() {
            if let Some(next) = maze.step(cell, dir) {
                if seen.insert(next) {
                    frontier.push(next);
                }
            }
        }
    }
    seen
}
