use crate::cells::{Cell, Direction};
use crate::grid_dimensions::GridDimensions;

/// Read-only navigation queries over a finished maze.
pub trait MazeView {
    fn dimensions(&self) -> &GridDimensions;

    /// Is the wall on `direction` side of `cell` standing? Panics for cells outside the grid.
    fn has_wall(&self, cell: Cell, direction: Direction) -> bool;

    fn start(&self) -> Cell;
    fn end(&self) -> Cell;

    /// Can a walker go from `cell` to its neighbour in `direction`?
    /// Never true across the outer boundary, even where the entrance or exit is open.
    fn can_move(&self, cell: Cell, direction: Direction) -> bool {
        self.dimensions().is_valid_cell(cell) &&
        self.dimensions().neighbour(cell, direction).is_some() &&
        !self.has_wall(cell, direction)
    }

    /// Where a move from `cell` in `direction` ends up, if the move is possible.
    fn step(&self, cell: Cell, direction: Direction) -> Option<Cell> {
        if self.can_move(cell, direction) {
            self.dimensions().neighbour(cell, direction)
        } else {
            None
        }
    }
}

pub trait CellDisplay {
    /// Render the contents of a maze cell as text.
    /// The String should be 3 glyphs long, padded if required.
    fn render_cell_body(&self, _: Cell) -> String {
        String::from("   ")
    }
}
