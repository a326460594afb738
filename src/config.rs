use serde_derive::Deserialize;

use crate::errors::*;
use crate::grid_dimensions::GridDimensions;
use crate::units::{ColumnsCount, RowsCount, SeedBlockSize};

/// What the rest of the application may tweak between regenerations.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Deserialize)]
#[serde(default)]
pub struct MazeConfig {
    /// `Nx`: number of cells along the West/East axis.
    pub rows: usize,
    /// `Ny`: number of cells along the South/North axis.
    pub columns: usize,
    pub central_square: bool,
    pub central_square_size: usize,
}

impl Default for MazeConfig {
    fn default() -> MazeConfig {
        MazeConfig {
            rows: 32,
            columns: 32,
            central_square: true,
            central_square_size: 5,
        }
    }
}

/// How the maze is primed before any random walk happens.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Seeding {
    /// Only the exit cell starts in the maze.
    SingleCell,
    /// A block of cells around the grid centre starts in the maze as one open room.
    CentralSquare(SeedBlockSize),
}

impl MazeConfig {
    pub fn new(rows: usize, columns: usize) -> MazeConfig {
        MazeConfig {
            rows,
            columns,
            central_square: false,
            central_square_size: 0,
        }
    }

    pub fn with_central_square(self, size: usize) -> MazeConfig {
        MazeConfig {
            central_square: true,
            central_square_size: size,
            ..self
        }
    }

    /// A central square of size 0 means the same as no central square.
    pub fn seeding(&self) -> Seeding {
        if self.central_square && self.central_square_size > 0 {
            Seeding::CentralSquare(SeedBlockSize(self.central_square_size))
        } else {
            Seeding::SingleCell
        }
    }

    /// Check the configuration can be built, returning the grid it describes.
    pub fn validate(&self) -> Result<GridDimensions> {
        let dimensions = GridDimensions::new(RowsCount(self.rows), ColumnsCount(self.columns))?;
        if let Seeding::CentralSquare(SeedBlockSize(size)) = self.seeding() {
            if size > self.rows || size > self.columns {
                bail!(ErrorKind::SeedBlockOutOfBounds(size, self.rows, self.columns));
            }
        }
        Ok(dimensions)
    }
}
