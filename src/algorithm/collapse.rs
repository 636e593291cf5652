//! Collapse step: pick one cell and fix it
//!
//! Boundary cells with the lowest entropy are preferred. Before any cell is
//! fixed there is no boundary, and the collapser seeds generation with a
//! uniformly random unfixed cell instead.

use rand::Rng;
use tracing::debug;

use crate::algorithm::entropy::{EntropyPolicy, scan_boundary};
use crate::algorithm::resolution::{ResolutionPolicy, resolve_tile};
use crate::spatial::{Grid, Point, Tile};

/// Matched pair of entropy and resolution policies
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Fixed-neighbor entropy with neighbor-aware pruning
    #[default]
    NeighborAware,
    /// Open-connection entropy with independent random masks
    IndependentMask,
}

impl Strategy {
    /// Collapse configuration using this strategy's policy pair
    pub const fn config(self) -> CollapseConfig {
        match self {
            Self::NeighborAware => CollapseConfig {
                entropy: EntropyPolicy::FixedNeighbors,
                resolution: ResolutionPolicy::NeighborAware,
            },
            Self::IndependentMask => CollapseConfig {
                entropy: EntropyPolicy::OpenConnections,
                resolution: ResolutionPolicy::IndependentMask,
            },
        }
    }
}

/// Policies used by each collapse step
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct CollapseConfig {
    /// How boundary cells are scored
    pub entropy: EntropyPolicy,
    /// How the chosen cell's pattern is resolved
    pub resolution: ResolutionPolicy,
}

impl From<Strategy> for CollapseConfig {
    fn from(strategy: Strategy) -> Self {
        strategy.config()
    }
}

/// The cell fixed by one collapse step
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CollapseOutcome {
    /// Position of the collapsed cell
    pub point: Point,
    /// Final tile, fixed flag included
    pub tile: Tile,
    /// Entropy of the chosen cell, `None` when it was picked without a boundary
    pub entropy: Option<usize>,
}

/// Fix exactly one unfixed cell
///
/// Returns `None` when every cell is already fixed.
pub fn collapse<R: Rng>(
    grid: &mut Grid,
    config: CollapseConfig,
    rng: &mut R,
) -> Option<CollapseOutcome> {
    let scan = scan_boundary(grid, config.entropy);

    let (point, entropy) = if scan.is_empty() {
        (choose(&grid.unfixed_points(), rng)?, None)
    } else {
        (choose(&scan.candidates, rng)?, scan.min_entropy)
    };

    let tile = resolve_tile(grid, point, config.resolution, rng)?;
    debug!(
        row = point.row,
        col = point.col,
        entropy,
        candidates = scan.candidates.len(),
        ?tile,
        "collapsed cell"
    );

    Some(CollapseOutcome {
        point,
        tile,
        entropy,
    })
}

/// Uniformly random element of `points`
fn choose<R: Rng>(points: &[Point], rng: &mut R) -> Option<Point> {
    if points.is_empty() {
        return None;
    }
    points.get(rng.random_range(0..points.len())).copied()
}
