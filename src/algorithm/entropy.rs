//! Entropy scoring of boundary cells
//!
//! Only unfixed cells touching at least one fixed cell are eligible for
//! collapse. Among those, the cells sharing the lowest score form the
//! candidate set the collapser draws from.

use crate::spatial::{Grid, Point};

/// Upper bound on any entropy score, one per side of a cell
pub const MAX_ENTROPY: usize = 4;

/// How a boundary cell's entropy is measured
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum EntropyPolicy {
    /// Four minus the number of fixed neighbors
    #[default]
    FixedNeighbors,
    /// Number of connections still open on the cell itself
    OpenConnections,
}

impl EntropyPolicy {
    /// Score the cell at `point`; lower scores collapse first
    ///
    /// Out-of-bounds points score as `MAX_ENTROPY`.
    pub fn score(self, grid: &Grid, point: Point) -> usize {
        match self {
            Self::FixedNeighbors => MAX_ENTROPY.saturating_sub(grid.fixed_neighbor_count(point)),
            Self::OpenConnections => grid
                .get(point)
                .map_or(MAX_ENTROPY, |tile| tile.open_count() as usize),
        }
    }
}

/// Minimum-entropy candidates found by a boundary scan
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EntropyScan {
    /// Lowest score among boundary cells, `None` when there are none
    pub min_entropy: Option<usize>,
    /// Boundary cells achieving the lowest score, in row-major order
    pub candidates: Vec<Point>,
}

impl EntropyScan {
    /// Whether no boundary cell exists
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

/// Whether `point` is an unfixed cell adjacent to a fixed one
pub fn is_boundary(grid: &Grid, point: Point) -> bool {
    grid.get(point).is_some_and(|tile| !tile.is_fixed()) && grid.fixed_neighbor_count(point) > 0
}

/// Score every boundary cell and keep those tied for the minimum
pub fn scan_boundary(grid: &Grid, policy: EntropyPolicy) -> EntropyScan {
    let mut scan = EntropyScan::default();

    for point in grid.points().filter(|&point| is_boundary(grid, point)) {
        let entropy = policy.score(grid, point);
        match scan.min_entropy {
            Some(min) if entropy > min => {}
            Some(min) if entropy == min => scan.candidates.push(point),
            _ => {
                scan.min_entropy = Some(entropy);
                scan.candidates.clear();
                scan.candidates.push(point);
            }
        }
    }

    scan
}
