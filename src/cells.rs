use std::fmt;

use smallvec::SmallVec;

/// A grid cell position.
///
/// `row` runs West to East and `col` runs South to North, so `row` is the
/// horizontal axis when a maze is drawn with North at the top.
#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug, Ord, PartialOrd)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub fn new(row: usize, col: usize) -> Cell {
        Cell { row, col }
    }

    /// The cell one step away in `direction`, or None if that would need a negative index.
    /// Upper bounds are not checked here, that is the job of `GridDimensions::neighbour`.
    #[inline]
    pub fn offset(self, direction: Direction) -> Option<Cell> {
        let (row, col) = (self.row, self.col);
        match direction {
            Direction::North => Some(Cell::new(row, col + 1)),
            Direction::South => col.checked_sub(1).map(|c| Cell::new(row, c)),
            Direction::East => Some(Cell::new(row + 1, col)),
            Direction::West => row.checked_sub(1).map(|r| Cell::new(r, col)),
        }
    }
}

impl From<(usize, usize)> for Cell {
    fn from(row_col_pair: (usize, usize)) -> Cell {
        Cell::new(row_col_pair.0, row_col_pair.1)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug, Ord, PartialOrd)]
pub enum Direction {
    North,
    South,
    West,
    East,
}

pub type DirectionSmallVec = SmallVec<[Direction; 4]>;
pub type CellSmallVec = SmallVec<[Cell; 4]>;

impl Direction {
    pub const ALL: [Direction; 4] = [Direction::North,
                                     Direction::South,
                                     Direction::West,
                                     Direction::East];

    #[inline]
    pub fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
            Direction::East => Direction::West,
        }
    }

    /// Bit position of this direction's wall inside a `WallMask`.
    #[inline]
    pub(crate) fn bit(self) -> u8 {
        match self {
            Direction::North => 1,
            Direction::South => 1 << 1,
            Direction::West => 1 << 2,
            Direction::East => 1 << 3,
        }
    }

    /// Parse a single compass letter, as used by the driver's `--moves` option.
    pub fn from_letter(letter: char) -> Option<Direction> {
        match letter.to_ascii_uppercase() {
            'N' => Some(Direction::North),
            'S' => Some(Direction::South),
            'W' => Some(Direction::West),
            'E' => Some(Direction::East),
            _ => None,
        }
    }
}
