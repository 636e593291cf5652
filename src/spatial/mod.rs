//! Spatial data structures for the pipe grid
//!
//! This module contains:
//! - The tile bitmask and connection directions
//! - The fixed-size grid and cell addressing

/// Grid storage, neighbor lookup and completion checks
pub mod grid;
/// Tile bitmask and direction definitions
pub mod tiles;

pub use grid::{Grid, Point};
pub use tiles::{Direction, Tile};
