//! Pipe tile grid generation by constraint propagation and collapse
//!
//! Every cell starts open toward all four sides. Propagation closes the
//! connections a neighbor cannot accept, and collapse fixes one low-entropy
//! cell per step, until the whole grid is fixed and renders as connected
//! box-drawing pipes.

#![forbid(unsafe_code)]

/// Propagation, entropy scoring, cell resolution and the generation driver
pub mod algorithm;
/// Input/output operations and error handling
pub mod io;
/// Tile bitmask and grid data structures
pub mod spatial;

pub use io::error::{AlgorithmError, Result};
