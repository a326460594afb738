//! **amaze** builds perfect mazes on rectangular grids with loop-erased random walks
//! (Wilson's algorithm), optionally grown outwards from an open room in the middle of the grid.

#[macro_use]
extern crate error_chain;

pub mod cells;
pub mod config;
pub mod errors;
pub mod generators;
pub mod grid_dimensions;
pub mod grid_displays;
pub mod grid_iterators;
pub mod grid_traits;
pub mod maze;
pub mod session;
pub mod units;
pub mod walls;
#[cfg(test)]
mod utils;
