use itertools::iproduct;
use log::{debug, trace};
use rand::Rng;

use crate::cells::{Cell, Direction};
use crate::config::{MazeConfig, Seeding};
use crate::errors::*;
use crate::grid_dimensions::GridDimensions;
use crate::grid_iterators::CellIter;
use crate::maze::Maze;
use crate::units::{ColumnsCount, RowsCount, SeedBlockSize};
use crate::walls::WallState;

/// Where the maze builder gets its randomness from.
pub trait RandomSource {
    /// A uniformly chosen index in `0..bound`. `bound` is never 0.
    fn next_index(&mut self, bound: usize) -> usize;
}

impl<R: Rng> RandomSource for R {
    #[inline]
    fn next_index(&mut self, bound: usize) -> usize {
        self.gen_range(0..bound)
    }
}

/// Replays a fixed sequence of numbers, starting over when it runs out.
/// Each number is reduced modulo the bound it is asked for.
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    script: Vec<usize>,
    position: usize,
}

impl ScriptedSource {
    pub fn new(script: Vec<usize>) -> ScriptedSource {
        assert!(!script.is_empty(), "a scripted source needs at least one number");
        ScriptedSource {
            script,
            position: 0,
        }
    }

    /// How many numbers have been drawn so far.
    pub fn draws(&self) -> usize {
        self.position
    }
}

impl RandomSource for ScriptedSource {
    fn next_index(&mut self, bound: usize) -> usize {
        let value = self.script[self.position % self.script.len()];
        self.position += 1;
        value % bound
    }
}

/// The direction each cell was last left by during the current random walk.
///
/// Loop erasure happens here: revisiting a cell during a walk discards the previously
/// recorded outgoing direction, so following the trace from the walk's origin never
/// goes round a loop. The storage lives for a whole build and is never cleared, stale
/// entries belong to cells already in the maze and are never consulted again.
#[derive(Debug, Clone)]
struct WalkTrace {
    dimensions: GridDimensions,
    departures: Vec<Option<Direction>>,
}

impl WalkTrace {
    fn new(dimensions: GridDimensions) -> WalkTrace {
        WalkTrace {
            dimensions,
            departures: vec![None; dimensions.size().0],
        }
    }

    #[inline]
    fn record(&mut self, cell: Cell, direction: Direction) {
        let index = self.index(cell);
        self.departures[index] = Some(direction);
    }

    #[inline]
    fn departure(&self, cell: Cell) -> Option<Direction> {
        self.departures[self.index(cell)]
    }

    #[inline]
    fn index(&self, cell: Cell) -> usize {
        self.dimensions.linear_index(cell).expect("walk left the grid")
    }
}

#[derive(Debug, Default, Copy, Clone)]
struct BuildStats {
    walks: usize,
    walk_steps: usize,
    passages: usize,
}

/// Builds a perfect maze with loop-erased random walks (Wilson's algorithm).
///
/// The exit is a random cell on the last row with its East wall open, the entrance a
/// random cell on the first row with its West wall open. Growth starts from either the
/// exit cell alone or an open square room in the middle of the grid. Random walks then
/// wander from each cell not yet in the maze until they hit the maze, and the loop-free
/// remainder of each walk is carved as a new corridor.
pub struct MazeBuilder<'s, S: RandomSource + ?Sized> {
    dimensions: GridDimensions,
    seeding: Seeding,
    walls: WallState,
    trace: WalkTrace,
    source: &'s mut S,
    stats: BuildStats,
}

impl<'s, S: RandomSource + ?Sized> MazeBuilder<'s, S> {
    /// Configuration errors are reported here, before any construction starts.
    pub fn new(config: &MazeConfig, source: &'s mut S) -> Result<MazeBuilder<'s, S>> {
        let dimensions = config.validate()?;
        Ok(MazeBuilder {
            dimensions,
            seeding: config.seeding(),
            walls: WallState::filled(dimensions),
            trace: WalkTrace::new(dimensions),
            source,
            stats: BuildStats::default(),
        })
    }

    pub fn build(mut self) -> Maze {
        let RowsCount(rows) = self.dimensions.rows();
        let ColumnsCount(columns) = self.dimensions.columns();

        let end = Cell::new(rows - 1, self.source.next_index(columns));
        self.walls.open_boundary(end, Direction::East);
        let start = Cell::new(0, self.source.next_index(columns));
        self.walls.open_boundary(start, Direction::West);
        debug!("building {}x{} maze, start {}, end {}, {:?}",
               rows,
               columns,
               start,
               end,
               self.seeding);

        match self.seeding {
            Seeding::SingleCell => self.walls.mark_in_maze(end),
            Seeding::CentralSquare(size) => self.seed_central_square(size),
        }

        self.grow_from(start);
        let mut scan = self.dimensions.iter();
        while let Some(origin) = next_uncovered(&self.walls, &mut scan) {
            self.grow_from(origin);
        }

        assert_eq!(self.walls.in_maze_count(),
                   self.dimensions.size().0,
                   "maze growth finished with cells left outside the maze");
        debug!("maze complete: {} walks, {} walk steps, {} passages carved",
               self.stats.walks,
               self.stats.walk_steps,
               self.stats.passages);

        Maze::new(self.walls, start, end)
    }

    /// Mark the block of cells around the grid centre as in the maze and open it up into
    /// a single room.
    fn seed_central_square(&mut self, size: SeedBlockSize) {
        let SeedBlockSize(side) = size;
        let first_row = (self.dimensions.rows().0 - side) / 2;
        let first_col = (self.dimensions.columns().0 - side) / 2;
        let block = iproduct!(first_row..first_row + side, first_col..first_col + side)
            .map(Cell::from)
            .collect::<Vec<_>>();

        for &cell in &block {
            self.walls.mark_in_maze(cell);
        }
        for &cell in &block {
            for &dir in Direction::ALL.iter() {
                let open_towards = self.dimensions
                    .neighbour(cell, dir)
                    .map_or(false, |neighbour| self.walls.is_in_maze(neighbour));
                if open_towards {
                    self.walls.remove_wall(cell, dir);
                }
            }
        }
        debug!("seeded {}x{} central square at {}", side, side, Cell::new(first_row, first_col));
    }

    /// Connect `origin` to the maze with a loop-erased random walk. Nothing to do if it is
    /// already part of the maze.
    fn grow_from(&mut self, origin: Cell) {
        if self.walls.is_in_maze(origin) {
            return;
        }
        self.random_walk(origin);
        let carved = self.carve_path(origin);
        trace!("carved {} passages from {}", carved, origin);
        self.stats.walks += 1;
        self.stats.passages += carved;
    }

    /// Wander from `origin` until a cell in the maze is reached, recording how each
    /// cell was left.
    fn random_walk(&mut self, origin: Cell) {
        let mut current = origin;
        while !self.walls.is_in_maze(current) {
            let directions = self.dimensions.valid_directions(current);
            assert!(!directions.is_empty(), "{} has no neighbours to walk to", current);
            let direction = directions[self.source.next_index(directions.len())];
            self.trace.record(current, direction);
            current = self.dimensions
                .neighbour(current, direction)
                .expect("valid directions lead to cells in the grid");
            self.stats.walk_steps += 1;
        }
    }

    /// Follow the walk trace from `origin`, knocking down walls and adding cells to the
    /// maze until the existing maze is reached. Returns the number of passages carved.
    fn carve_path(&mut self, origin: Cell) -> usize {
        let cells_count = self.dimensions.size().0;
        let mut carved = 0;
        let mut current = origin;
        while !self.walls.is_in_maze(current) {
            assert!(carved < cells_count,
                    "path carved from {} never reached the maze",
                    origin);
            let direction = self.trace
                .departure(current)
                .unwrap_or_else(|| panic!("walk from {} never left {}", origin, current));
            self.walls.remove_wall(current, direction);
            self.walls.mark_in_maze(current);
            current = self.dimensions
                .neighbour(current, direction)
                .expect("recorded directions lead to cells in the grid");
            carved += 1;
        }
        carved
    }
}

/// The next cell in row-major order that is not yet in the maze.
/// Cells passed over are in the maze already and stay there, so the scan never restarts.
fn next_uncovered(walls: &WallState, scan: &mut CellIter) -> Option<Cell> {
    scan.find(|&cell| !walls.is_in_maze(cell))
}

/// Build a maze for `config` from the given randomness.
pub fn wilson<S: RandomSource + ?Sized>(config: &MazeConfig, source: &mut S) -> Result<Maze> {
    Ok(MazeBuilder::new(config, source)?.build())
}
