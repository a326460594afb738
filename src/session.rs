use log::{debug, info};
use rand::{Rng, SeedableRng};
use rand_xorshift::XorShiftRng;

use crate::cells::{Cell, Direction};
use crate::config::MazeConfig;
use crate::errors::*;
use crate::generators::wilson;
use crate::grid_traits::MazeView;
use crate::maze::Maze;

/// What happened when the player tried to move.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum MoveOutcome {
    /// A wall (or the grid edge) is in the way, the player stays put.
    Blocked,
    Moved(Cell),
    /// The player reached the exit; a fresh maze has replaced the old one.
    Escaped,
}

/// A maze being played: the current maze, the configuration it was built from and
/// where the player stands.
///
/// The maze itself is never edited, every regeneration swaps in a whole new one.
pub struct MazeSession<R: Rng> {
    config: MazeConfig,
    rng: R,
    maze: Maze,
    position: Cell,
}

impl MazeSession<XorShiftRng> {
    /// A reproducible session, the same seed and config always give the same mazes.
    pub fn from_seed(config: MazeConfig, seed: u64) -> Result<MazeSession<XorShiftRng>> {
        MazeSession::new(config, XorShiftRng::seed_from_u64(seed))
    }
}

impl<R: Rng> MazeSession<R> {
    pub fn new(config: MazeConfig, mut rng: R) -> Result<MazeSession<R>> {
        let maze = wilson(&config, &mut rng)?;
        let position = maze.start();
        Ok(MazeSession {
            config,
            rng,
            maze,
            position,
        })
    }

    #[inline]
    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    #[inline]
    pub fn position(&self) -> Cell {
        self.position
    }

    #[inline]
    pub fn config(&self) -> &MazeConfig {
        &self.config
    }

    /// Throw the current maze away and build another from the stored config.
    pub fn regenerate(&mut self) {
        // The stored config was validated before it was accepted.
        self.maze = wilson(&self.config, &mut self.rng)
            .unwrap_or_else(|e| panic!("stored maze config {:?} stopped being valid: {}",
                                       self.config, e));
        self.position = self.maze.start();
        debug!("Regenerated maze, start {} end {}", self.maze.start(), self.maze.end());
    }

    /// Replace the config and regenerate. A rejected config leaves the session untouched.
    pub fn set_config(&mut self, config: MazeConfig) -> Result<()> {
        let _ = config.validate()?;
        info!("Maze config changed from {:?} to {:?}", self.config, config);
        self.config = config;
        self.regenerate();
        Ok(())
    }

    pub fn try_move(&mut self, direction: Direction) -> MoveOutcome {
        match self.maze.step(self.position, direction) {
            None => MoveOutcome::Blocked,
            Some(cell) if cell == self.maze.end() => {
                info!("Escaped the maze at {}", cell);
                self.regenerate();
                MoveOutcome::Escaped
            }
            Some(cell) => {
                self.position = cell;
                MoveOutcome::Moved(cell)
            }
        }
    }
}
