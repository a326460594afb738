use crate::cells::{Cell, CellSmallVec, Direction, DirectionSmallVec};
use crate::errors::*;
use crate::grid_iterators::CellIter;
use crate::units::{CellsCount, ColumnsCount, RowsCount};

/// Order in which `valid_directions` lists the open directions of a cell.
/// Scripted random sources index into this order, so it must never change.
const WALK_DIRECTION_ORDER: [Direction; 4] = [Direction::West,
                                              Direction::South,
                                              Direction::East,
                                              Direction::North];

/// The pure geometry of an `Nx × Ny` grid.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct GridDimensions {
    rows: RowsCount,
    columns: ColumnsCount,
}

impl GridDimensions {
    pub fn new(rows: RowsCount, columns: ColumnsCount) -> Result<GridDimensions> {
        if rows.0 == 0 || columns.0 == 0 {
            bail!(ErrorKind::InvalidDimensions(rows.0, columns.0));
        }
        if rows.0.checked_mul(columns.0).is_none() {
            bail!(ErrorKind::InvalidDimensions(rows.0, columns.0));
        }
        Ok(GridDimensions { rows, columns })
    }

    #[inline(always)]
    pub fn rows(&self) -> RowsCount {
        self.rows
    }

    #[inline(always)]
    pub fn columns(&self) -> ColumnsCount {
        self.columns
    }

    #[inline(always)]
    pub fn size(&self) -> CellsCount {
        CellsCount(self.rows.0 * self.columns.0)
    }

    #[inline]
    pub fn is_valid_cell(&self, cell: Cell) -> bool {
        cell.row < self.rows.0 && cell.col < self.columns.0
    }

    /// Convert a cell to a one dimensional row-major index in the range 0...size.
    /// Returns None if the cell is outside the grid.
    #[inline]
    pub fn linear_index(&self, cell: Cell) -> Option<usize> {
        if self.is_valid_cell(cell) {
            Some(cell.row * self.columns.0 + cell.col)
        } else {
            None
        }
    }

    /// Inverse of `linear_index`. The index must be smaller than `size()`.
    #[inline]
    pub fn cell_at(&self, index: usize) -> Cell {
        debug_assert!(index < self.size().0, "cell index {} out of range", index);
        Cell::new(index / self.columns.0, index % self.columns.0)
    }

    pub fn neighbour(&self, cell: Cell, direction: Direction) -> Option<Cell> {
        cell.offset(direction).filter(|&adjacent| self.is_valid_cell(adjacent))
    }

    /// Cells to the North, South, East or West of `cell` that are inside the grid.
    pub fn neighbours(&self, cell: Cell) -> CellSmallVec {
        self.valid_directions(cell)
            .iter()
            .filter_map(|&dir| self.neighbour(cell, dir))
            .collect()
    }

    /// The directions leading to an in-bounds neighbour, in a fixed order.
    pub fn valid_directions(&self, cell: Cell) -> DirectionSmallVec {
        WALK_DIRECTION_ORDER.iter()
            .cloned()
            .filter(|&dir| self.neighbour(cell, dir).is_some())
            .collect()
    }

    /// Does a step from `cell` in `direction` cross the outer boundary of the grid?
    #[inline]
    pub fn is_boundary(&self, cell: Cell, direction: Direction) -> bool {
        self.is_valid_cell(cell) && self.neighbour(cell, direction).is_none()
    }

    /// Row-major iteration: increasing row, then increasing column within the row.
    #[inline]
    pub fn iter(&self) -> CellIter {
        CellIter::new(*self)
    }
}

#[cfg(test)]
mod tests {

    use itertools::Itertools;

    use super::*;

    fn dims(rows: usize, columns: usize) -> GridDimensions {
        GridDimensions::new(RowsCount(rows), ColumnsCount(columns)).expect("valid dimensions")
    }

    #[test]
    fn zero_dimensions_are_rejected() {
        assert!(GridDimensions::new(RowsCount(0), ColumnsCount(3)).is_err());
        assert!(GridDimensions::new(RowsCount(3), ColumnsCount(0)).is_err());
        assert!(GridDimensions::new(RowsCount(1), ColumnsCount(1)).is_ok());
    }

    #[test]
    fn grid_size() {
        let d = dims(4, 7);
        assert_eq!(d.size(), CellsCount(28));
        assert_eq!(d.rows(), RowsCount(4));
        assert_eq!(d.columns(), ColumnsCount(7));
    }

    #[test]
    fn linear_index_is_a_bijection() {
        let d = dims(3, 4);
        let indices = d.iter().map(|c| d.linear_index(c).unwrap()).collect::<Vec<_>>();
        assert_eq!(indices, (0..12).collect::<Vec<_>>());
        for i in 0..12 {
            assert_eq!(d.linear_index(d.cell_at(i)), Some(i));
        }
        assert_eq!(d.linear_index(Cell::new(3, 0)), None);
        assert_eq!(d.linear_index(Cell::new(0, 4)), None);
        assert_eq!(d.linear_index(Cell::new(usize::MAX, usize::MAX)), None);
    }

    #[test]
    fn neighbour_at_dir() {
        let d = dims(2, 2);
        let gc = |r, c| Cell::new(r, c);
        let check_neighbour = |cell, dir: Direction, expected| {
            assert_eq!(d.neighbour(cell, dir), expected);
        };
        check_neighbour(gc(0, 0), Direction::North, Some(gc(0, 1)));
        check_neighbour(gc(0, 0), Direction::South, None);
        check_neighbour(gc(0, 0), Direction::East, Some(gc(1, 0)));
        check_neighbour(gc(0, 0), Direction::West, None);

        check_neighbour(gc(1, 1), Direction::North, None);
        check_neighbour(gc(1, 1), Direction::South, Some(gc(1, 0)));
        check_neighbour(gc(1, 1), Direction::East, None);
        check_neighbour(gc(1, 1), Direction::West, Some(gc(0, 1)));
    }

    #[test]
    fn neighbour_cells() {
        let d = dims(10, 10);
        let gc = |r, c| Cell::new(r, c);
        let check_expected_neighbours = |cell, expected: &[Cell]| {
            let found = d.neighbours(cell).iter().cloned().sorted().collect::<Vec<_>>();
            let wanted = expected.iter().cloned().sorted().collect::<Vec<_>>();
            assert_eq!(found, wanted);
        };

        // corners
        check_expected_neighbours(gc(0, 0), &[gc(1, 0), gc(0, 1)]);
        check_expected_neighbours(gc(9, 0), &[gc(8, 0), gc(9, 1)]);
        check_expected_neighbours(gc(0, 9), &[gc(0, 8), gc(1, 9)]);
        check_expected_neighbours(gc(9, 9), &[gc(9, 8), gc(8, 9)]);

        // sides
        check_expected_neighbours(gc(1, 0), &[gc(0, 0), gc(1, 1), gc(2, 0)]);
        check_expected_neighbours(gc(9, 8), &[gc(9, 7), gc(9, 9), gc(8, 8)]);

        check_expected_neighbours(gc(1, 1), &[gc(0, 1), gc(1, 0), gc(2, 1), gc(1, 2)]);
    }

    #[test]
    fn valid_direction_counts() {
        let d = dims(5, 5);
        assert_eq!(d.valid_directions(Cell::new(0, 0)).len(), 2);
        assert_eq!(d.valid_directions(Cell::new(4, 4)).len(), 2);
        assert_eq!(d.valid_directions(Cell::new(0, 2)).len(), 3);
        assert_eq!(d.valid_directions(Cell::new(2, 4)).len(), 3);
        assert_eq!(d.valid_directions(Cell::new(2, 2)).len(), 4);
    }

    #[test]
    fn valid_directions_keep_walk_order() {
        let d = dims(3, 3);
        assert_eq!(&*d.valid_directions(Cell::new(1, 1)),
                   &[Direction::West, Direction::South, Direction::East, Direction::North]);
        assert_eq!(&*d.valid_directions(Cell::new(0, 0)),
                   &[Direction::East, Direction::North]);
        assert_eq!(&*d.valid_directions(Cell::new(2, 2)),
                   &[Direction::West, Direction::South]);
    }

    #[test]
    fn single_cell_grid_has_no_directions() {
        let d = dims(1, 1);
        assert!(d.valid_directions(Cell::new(0, 0)).is_empty());
        for dir in Direction::ALL.iter() {
            assert!(d.is_boundary(Cell::new(0, 0), *dir));
        }
    }

    #[test]
    fn boundaries() {
        let d = dims(3, 3);
        assert!(d.is_boundary(Cell::new(0, 1), Direction::West));
        assert!(d.is_boundary(Cell::new(2, 1), Direction::East));
        assert!(!d.is_boundary(Cell::new(1, 1), Direction::East));
        assert!(!d.is_boundary(Cell::new(5, 5), Direction::East));
    }
}
