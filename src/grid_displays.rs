use std::fmt;

use crate::cells::{Cell, Direction};
use crate::grid_traits::{CellDisplay, MazeView};
use crate::maze::Maze;
use crate::units::{ColumnsCount, RowsCount};

/// Blank cells.
#[derive(Debug, Copy, Clone)]
pub struct EmptyDisplay;
impl CellDisplay for EmptyDisplay {}

/// Marks the entrance with an 'S' and the exit with an 'E'.
#[derive(Debug, Copy, Clone)]
pub struct StartEndDisplay {
    start: Cell,
    end: Cell,
}

impl StartEndDisplay {
    pub fn new(start: Cell, end: Cell) -> StartEndDisplay {
        StartEndDisplay { start, end }
    }

    pub fn of<M: MazeView>(maze: &M) -> StartEndDisplay {
        StartEndDisplay::new(maze.start(), maze.end())
    }
}

impl CellDisplay for StartEndDisplay {
    fn render_cell_body(&self, cell: Cell) -> String {
        if cell == self.start {
            String::from(" S ")
        } else if cell == self.end {
            String::from(" E ")
        } else {
            String::from("   ")
        }
    }
}

/// Marks where a walker currently is with an '@', on top of the start and end markers.
#[derive(Debug, Copy, Clone)]
pub struct PositionDisplay {
    position: Cell,
    start_end: StartEndDisplay,
}

impl PositionDisplay {
    pub fn new<M: MazeView>(maze: &M, position: Cell) -> PositionDisplay {
        PositionDisplay {
            position,
            start_end: StartEndDisplay::of(maze),
        }
    }
}

impl CellDisplay for PositionDisplay {
    fn render_cell_body(&self, cell: Cell) -> String {
        if cell == self.position {
            String::from(" @ ")
        } else {
            self.start_end.render_cell_body(cell)
        }
    }
}

/// A maze drawn with box characters, North at the top and West on the left.
pub struct MazeDisplay<'a, D: CellDisplay + ?Sized> {
    maze: &'a Maze,
    cells: &'a D,
}

impl Maze {
    pub fn display_with<'a, D: CellDisplay + ?Sized>(&'a self, cells: &'a D) -> MazeDisplay<'a, D> {
        MazeDisplay { maze: self, cells }
    }
}

impl<'a, D: CellDisplay + ?Sized> MazeDisplay<'a, D> {
    // Text columns follow the maze rows (West to East), text lines follow the maze
    // columns from North to South.
    fn width(&self) -> usize {
        let RowsCount(rows) = self.maze.dimensions().rows();
        rows
    }

    fn height(&self) -> usize {
        let ColumnsCount(columns) = self.maze.dimensions().columns();
        columns
    }

    fn cell_at(&self, x: usize, y: usize) -> Cell {
        Cell::new(x, self.height() - 1 - y)
    }

    /// Wall on the West side of the text cell at `(x, y)`, or the East side of the last one.
    fn vertical_wall(&self, x: usize, y: usize) -> bool {
        if x == self.width() {
            self.maze.has_wall(self.cell_at(x - 1, y), Direction::East)
        } else {
            self.maze.has_wall(self.cell_at(x, y), Direction::West)
        }
    }

    /// Wall on the North side of the text cell at `(x, y)`, or the South side of the last one.
    fn horizontal_wall(&self, x: usize, y: usize) -> bool {
        if y == self.height() {
            self.maze.has_wall(self.cell_at(x, y - 1), Direction::South)
        } else {
            self.maze.has_wall(self.cell_at(x, y), Direction::North)
        }
    }

    /// The glyph where wall lines meet at the top left corner of text cell `(x, y)`.
    fn junction(&self, x: usize, y: usize) -> &'static str {
        const WALL_L: &str = "╴";
        const WALL_R: &str = "╶";
        const WALL_U: &str = "╵";
        const WALL_D: &str = "╷";
        const WALL_LR: &str = "─";
        const WALL_UD: &str = "│";
        const WALL_LD: &str = "┐";
        const WALL_RU: &str = "└";
        const WALL_LU: &str = "┘";
        const WALL_RD: &str = "┌";
        const WALL_LRU: &str = "┴";
        const WALL_LRD: &str = "┬";
        const WALL_LRUD: &str = "┼";
        const WALL_RUD: &str = "├";
        const WALL_LUD: &str = "┤";

        let left = x > 0 && self.horizontal_wall(x - 1, y);
        let right = x < self.width() && self.horizontal_wall(x, y);
        let up = y > 0 && self.vertical_wall(x, y - 1);
        let down = y < self.height() && self.vertical_wall(x, y);

        match (left, right, up, down) {
            (true, true, true, true) => WALL_LRUD,
            (true, true, true, false) => WALL_LRU,
            (true, true, false, true) => WALL_LRD,
            (true, false, true, true) => WALL_LUD,
            (false, true, true, true) => WALL_RUD,
            (true, true, false, false) => WALL_LR,
            (false, false, true, true) => WALL_UD,
            (false, true, true, false) => WALL_RU,
            (true, false, false, true) => WALL_LD,
            (true, false, true, false) => WALL_LU,
            (false, true, false, true) => WALL_RD,
            (true, false, false, false) => WALL_L,
            (false, true, false, false) => WALL_R,
            (false, false, true, false) => WALL_U,
            (false, false, false, true) => WALL_D,
            (false, false, false, false) => " ",
        }
    }
}

impl<'a, D: CellDisplay + ?Sized> fmt::Display for MazeDisplay<'a, D> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        const WALL_LR_3: &str = "───";
        const WALL_UD: &str = "│";

        let (width, height) = (self.width(), self.height());
        let mut output = String::new();

        for y in 0..=height {
            // The wall line above text row y
            for x in 0..=width {
                output.push_str(self.junction(x, y));
                if x < width {
                    output.push_str(if self.horizontal_wall(x, y) { WALL_LR_3 } else { "   " });
                }
            }
            output.push('\n');

            if y == height {
                break;
            }

            // The cell bodies of text row y
            for x in 0..=width {
                output.push_str(if self.vertical_wall(x, y) { WALL_UD } else { " " });
                if x < width {
                    output.push_str(&self.cells.render_cell_body(self.cell_at(x, y)));
                }
            }
            output.push('\n');
        }

        write!(f, "{}", output)
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.display_with(&StartEndDisplay::of(self)))
    }
}
