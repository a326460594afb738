use petgraph::graph::{NodeIndex, UnGraph};

use crate::cells::{Cell, Direction};
use crate::grid_dimensions::GridDimensions;
use crate::grid_traits::MazeView;
use crate::units::PassagesCount;
use crate::walls::{WallMask, WallState};

/// A finished maze: the walls plus an entrance and an exit.
///
/// Nothing can change a `Maze` once it is built; a new maze replaces it wholesale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    walls: WallState,
    start: Cell,
    end: Cell,
}

impl Maze {
    pub(crate) fn new(walls: WallState, start: Cell, end: Cell) -> Maze {
        Maze { walls, start, end }
    }

    #[inline]
    pub fn walls(&self) -> &WallState {
        &self.walls
    }

    #[inline]
    pub fn wall_mask(&self, cell: Cell) -> WallMask {
        self.walls.wall_mask(cell)
    }

    /// Every opening between two adjacent cells, each reported once.
    pub fn passages<'a>(&'a self) -> impl Iterator<Item = (Cell, Cell)> + 'a {
        let dimensions = *self.dimensions();
        dimensions.iter().flat_map(move |cell| {
            [Direction::East, Direction::North]
                .iter()
                .filter_map(|&dir| self.step(cell, dir).map(|neighbour| (cell, neighbour)))
                .collect::<Vec<_>>()
        })
    }

    pub fn passages_count(&self) -> PassagesCount {
        PassagesCount(self.passages().count())
    }

    /// The maze as an undirected graph: node `i` is the cell with linear index `i`,
    /// one edge per passage.
    pub fn passage_graph(&self) -> UnGraph<Cell, ()> {
        let dimensions = self.dimensions();
        let cells_count = dimensions.size().0;
        let mut graph = UnGraph::with_capacity(cells_count, cells_count);
        for cell in dimensions.iter() {
            let _ = graph.add_node(cell);
        }
        for (a, b) in self.passages() {
            let node = |cell| {
                NodeIndex::new(dimensions.linear_index(cell)
                    .expect("passages only join cells inside the grid"))
            };
            let _ = graph.add_edge(node(a), node(b), ());
        }
        graph
    }

    /// Walls removed from the outer boundary of the grid.
    pub fn boundary_openings(&self) -> Vec<(Cell, Direction)> {
        let dimensions = self.dimensions();
        dimensions.iter()
            .flat_map(|cell| {
                Direction::ALL.iter()
                    .filter(move |&&dir| dimensions.is_boundary(cell, dir))
                    .filter(move |&&dir| !self.has_wall(cell, dir))
                    .map(move |&dir| (cell, dir))
            })
            .collect()
    }
}

impl MazeView for Maze {
    #[inline]
    fn dimensions(&self) -> &GridDimensions {
        self.walls.dimensions()
    }

    #[inline]
    fn has_wall(&self, cell: Cell, direction: Direction) -> bool {
        self.walls.has_wall(cell, direction)
    }

    #[inline]
    fn start(&self) -> Cell {
        self.start
    }

    #[inline]
    fn end(&self) -> Cell {
        self.end
    }
}

#[cfg(test)]
mod tests {

    use itertools::Itertools;

    use super::*;
    use crate::units::{ColumnsCount, RowsCount};

    // A 2x2 maze shaped like a U: (0,0) - (0,1) - (1,1) - (1,0)
    fn u_shaped_maze() -> Maze {
        let dims = GridDimensions::new(RowsCount(2), ColumnsCount(2)).unwrap();
        let mut walls = WallState::filled(dims);
        walls.remove_wall(Cell::new(0, 0), Direction::North);
        walls.remove_wall(Cell::new(0, 1), Direction::East);
        walls.remove_wall(Cell::new(1, 1), Direction::South);
        walls.open_boundary(Cell::new(0, 0), Direction::West);
        walls.open_boundary(Cell::new(1, 0), Direction::East);
        for cell in dims.iter() {
            walls.mark_in_maze(cell);
        }
        Maze::new(walls, Cell::new(0, 0), Cell::new(1, 0))
    }

    #[test]
    fn can_move_follows_walls() {
        let m = u_shaped_maze();
        assert!(m.can_move(Cell::new(0, 0), Direction::North));
        assert!(m.can_move(Cell::new(0, 1), Direction::South));
        assert!(!m.can_move(Cell::new(0, 0), Direction::East));
        assert!(!m.can_move(Cell::new(1, 0), Direction::West));
        assert_eq!(m.step(Cell::new(0, 1), Direction::East), Some(Cell::new(1, 1)));
        assert_eq!(m.step(Cell::new(0, 1), Direction::North), None);
    }

    #[test]
    fn boundary_openings_are_not_moves() {
        let m = u_shaped_maze();
        assert!(!m.has_wall(m.start(), Direction::West));
        assert!(!m.can_move(m.start(), Direction::West));
        assert!(!m.can_move(m.end(), Direction::East));
        assert!(!m.can_move(Cell::new(9, 9), Direction::West));
    }

    #[test]
    fn queries_do_not_mutate() {
        let m = u_shaped_maze();
        let before = m.clone();
        for _ in 0..3 {
            for cell in m.dimensions().iter() {
                for dir in Direction::ALL.iter() {
                    let _ = m.can_move(cell, *dir);
                    let _ = m.has_wall(cell, *dir);
                }
            }
        }
        assert_eq!(m, before);
    }

    #[test]
    fn passages_are_listed_once() {
        let m = u_shaped_maze();
        let passages = m.passages().sorted().collect::<Vec<_>>();
        assert_eq!(passages,
                   vec![(Cell::new(0, 0), Cell::new(0, 1)),
                        (Cell::new(0, 1), Cell::new(1, 1)),
                        (Cell::new(1, 0), Cell::new(1, 1))]);
        assert_eq!(m.passages_count(), PassagesCount(3));
    }

    #[test]
    fn passage_graph_mirrors_passages() {
        let m = u_shaped_maze();
        let g = m.passage_graph();
        assert_eq!(g.node_count(), 4);
        assert_eq!(g.edge_count(), 3);
        assert_eq!(g[NodeIndex::new(3)], Cell::new(1, 1));
        assert!(g.find_edge(NodeIndex::new(0), NodeIndex::new(1)).is_some());
        assert!(g.find_edge(NodeIndex::new(0), NodeIndex::new(2)).is_none());
    }

    #[test]
    fn boundary_openings_listed() {
        let m = u_shaped_maze();
        assert_eq!(m.boundary_openings(),
                   vec![(Cell::new(0, 0), Direction::West), (Cell::new(1, 0), Direction::East)]);
    }
}
