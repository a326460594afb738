use std::fmt;

use bit_set::BitSet;

use crate::cells::{Cell, Direction};
use crate::grid_dimensions::GridDimensions;

/// The walls still standing around one cell.
#[derive(Eq, PartialEq, Copy, Clone, Hash)]
pub struct WallMask(u8);

impl WallMask {
    pub const ALL: WallMask = WallMask(0b1111);
    pub const NONE: WallMask = WallMask(0);

    #[inline]
    pub fn contains(self, direction: Direction) -> bool {
        self.0 & direction.bit() != 0
    }

    #[inline]
    fn remove(&mut self, direction: Direction) {
        self.0 &= !direction.bit();
    }

    /// Raw 4 bit pattern: North, South, West, East from the least significant bit.
    #[inline]
    pub fn bits(self) -> u8 {
        self.0
    }

    pub fn count(self) -> usize {
        self.0.count_ones() as usize
    }
}

impl fmt::Debug for WallMask {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let letters = [(Direction::North, 'N'),
                       (Direction::South, 'S'),
                       (Direction::West, 'W'),
                       (Direction::East, 'E')];
        let shown = letters.iter()
            .map(|&(dir, letter)| if self.contains(dir) { letter } else { '.' })
            .collect::<String>();
        write!(f, "WallMask({})", shown)
    }
}

/// Per-cell walls plus the set of cells already absorbed into the maze.
///
/// Only the maze builder mutates this; everyone else gets it through a `Maze`.
#[derive(Clone, PartialEq, Eq)]
pub struct WallState {
    dimensions: GridDimensions,
    walls: Vec<WallMask>,
    in_maze: BitSet,
}

impl WallState {
    /// Every wall present, no cell in the maze.
    pub(crate) fn filled(dimensions: GridDimensions) -> WallState {
        let cells_count = dimensions.size().0;
        WallState {
            dimensions,
            walls: vec![WallMask::ALL; cells_count],
            in_maze: BitSet::with_capacity(cells_count),
        }
    }

    #[inline]
    pub fn dimensions(&self) -> &GridDimensions {
        &self.dimensions
    }

    /// The walls around `cell`. Panics if the cell is outside the grid.
    #[inline]
    pub fn wall_mask(&self, cell: Cell) -> WallMask {
        self.walls[self.index(cell)]
    }

    #[inline]
    pub fn has_wall(&self, cell: Cell, direction: Direction) -> bool {
        self.wall_mask(cell).contains(direction)
    }

    #[inline]
    pub fn is_in_maze(&self, cell: Cell) -> bool {
        self.in_maze.contains(self.index(cell))
    }

    pub fn in_maze_count(&self) -> usize {
        self.in_maze.len()
    }

    /// Knock down the wall between `cell` and its neighbour in `direction`, on both sides.
    ///
    /// Panics if there is no neighbour, the outer boundary is only opened with `open_boundary`.
    pub(crate) fn remove_wall(&mut self, cell: Cell, direction: Direction) {
        let neighbour = self.dimensions
            .neighbour(cell, direction)
            .unwrap_or_else(|| panic!("no neighbour {:?} of {} to remove a wall towards",
                                      direction, cell));
        let cell_index = self.index(cell);
        let neighbour_index = self.index(neighbour);
        self.walls[cell_index].remove(direction);
        self.walls[neighbour_index].remove(direction.opposite());
    }

    /// Remove a wall on the outer boundary of the grid, e.g. a maze entrance or exit.
    pub(crate) fn open_boundary(&mut self, cell: Cell, direction: Direction) {
        assert!(self.dimensions.is_boundary(cell, direction),
                "{:?} wall of {} is not on the grid boundary",
                direction,
                cell);
        let cell_index = self.index(cell);
        self.walls[cell_index].remove(direction);
    }

    /// Membership is monotonic, there is no way to take a cell back out.
    #[inline]
    pub(crate) fn mark_in_maze(&mut self, cell: Cell) {
        let index = self.index(cell);
        let _ = self.in_maze.insert(index);
    }

    #[inline]
    fn index(&self, cell: Cell) -> usize {
        self.dimensions
            .linear_index(cell)
            .unwrap_or_else(|| panic!("cell {} is outside the grid", cell))
    }
}

impl fmt::Debug for WallState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f,
               "WallState :: dimensions: {:?}, in maze: {}/{}",
               self.dimensions,
               self.in_maze_count(),
               self.walls.len())
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::units::{ColumnsCount, RowsCount};

    fn walls(rows: usize, columns: usize) -> WallState {
        WallState::filled(GridDimensions::new(RowsCount(rows), ColumnsCount(columns)).unwrap())
    }

    #[test]
    fn starts_filled() {
        let w = walls(3, 3);
        for cell in w.dimensions().iter() {
            assert_eq!(w.wall_mask(cell), WallMask::ALL);
            assert!(!w.is_in_maze(cell));
        }
        assert_eq!(w.in_maze_count(), 0);
    }

    #[test]
    fn removing_a_wall_opens_both_sides() {
        let mut w = walls(3, 3);
        let a = Cell::new(1, 1);
        w.remove_wall(a, Direction::North);
        assert!(!w.has_wall(a, Direction::North));
        assert!(!w.has_wall(Cell::new(1, 2), Direction::South));

        // nothing else moved
        assert!(w.has_wall(a, Direction::South));
        assert!(w.has_wall(a, Direction::East));
        assert!(w.has_wall(a, Direction::West));
        assert_eq!(w.wall_mask(Cell::new(1, 2)).count(), 3);

        w.remove_wall(a, Direction::West);
        assert!(!w.has_wall(Cell::new(0, 1), Direction::East));
        assert_eq!(w.wall_mask(a).count(), 2);
    }

    #[test]
    fn removing_a_wall_twice_is_harmless() {
        let mut w = walls(2, 2);
        w.remove_wall(Cell::new(0, 0), Direction::East);
        w.remove_wall(Cell::new(1, 0), Direction::West);
        assert!(!w.has_wall(Cell::new(0, 0), Direction::East));
        assert!(!w.has_wall(Cell::new(1, 0), Direction::West));
    }

    #[test]
    #[should_panic]
    fn removing_a_boundary_wall_as_interior_panics() {
        let mut w = walls(2, 2);
        w.remove_wall(Cell::new(0, 0), Direction::West);
    }

    #[test]
    fn open_boundary_wall() {
        let mut w = walls(2, 2);
        w.open_boundary(Cell::new(0, 1), Direction::West);
        assert!(!w.has_wall(Cell::new(0, 1), Direction::West));
        assert_eq!(w.wall_mask(Cell::new(0, 1)).count(), 3);
    }

    #[test]
    #[should_panic]
    fn open_boundary_on_interior_wall_panics() {
        let mut w = walls(2, 2);
        w.open_boundary(Cell::new(0, 0), Direction::East);
    }

    #[test]
    fn membership_is_monotonic() {
        let mut w = walls(2, 2);
        let c = Cell::new(1, 0);
        w.mark_in_maze(c);
        w.mark_in_maze(c);
        assert!(w.is_in_maze(c));
        assert!(!w.is_in_maze(Cell::new(0, 0)));
        assert_eq!(w.in_maze_count(), 1);
    }

    #[test]
    fn mask_debug_text() {
        let mut w = walls(2, 2);
        w.remove_wall(Cell::new(0, 0), Direction::North);
        assert_eq!(format!("{:?}", w.wall_mask(Cell::new(0, 0))), "WallMask(.SWE)");
        assert_eq!(WallMask::NONE.count(), 0);
        assert_eq!(WallMask::ALL.bits(), 0b1111);
    }
}
