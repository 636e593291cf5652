//! Resolution of a single cell into its final connection pattern
//!
//! Resolution never opens a connection; it only closes some and sets the
//! fixed flag. The result may disagree with an already fixed neighbor, which
//! shows up as a dangling pipe end and is left as is.

use rand::Rng;

use crate::spatial::{Direction, Grid, Point, Tile};

/// Probability of closing or keeping a connection on each coin flip
pub const COIN_FLIP_PROBABILITY: f64 = 0.5;

/// How the pattern of a collapsed cell is chosen
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ResolutionPolicy {
    /// Close each connection facing a fixed neighbor with probability one half
    #[default]
    NeighborAware,
    /// Intersect the cell with a uniformly random direction mask
    IndependentMask,
}

/// Fix the cell at `point`, returning its final tile
///
/// Already fixed cells are returned unchanged. Returns `None` only when
/// `point` is out of bounds.
pub fn resolve_tile<R: Rng>(
    grid: &mut Grid,
    point: Point,
    policy: ResolutionPolicy,
    rng: &mut R,
) -> Option<Tile> {
    let tile = grid.get(point)?;
    if tile.is_fixed() {
        return Some(tile);
    }

    let resolved = match policy {
        ResolutionPolicy::NeighborAware => prune_toward_fixed(grid, point, tile, rng),
        ResolutionPolicy::IndependentMask => tile & random_mask(rng),
    }
    .fixed();

    grid.set(point, resolved);
    Some(resolved)
}

fn prune_toward_fixed<R: Rng>(grid: &Grid, point: Point, tile: Tile, rng: &mut R) -> Tile {
    Direction::ALL.into_iter().fold(tile, |pruned, direction| {
        // The coin is only flipped for sides with a fixed neighbor
        if grid.is_neighbor_fixed(point, direction) && rng.random_bool(COIN_FLIP_PROBABILITY) {
            pruned.without(direction)
        } else {
            pruned
        }
    })
}

/// Direction mask with each side included independently with probability one half
pub fn random_mask<R: Rng>(rng: &mut R) -> Tile {
    Direction::ALL.into_iter().fold(Tile::EMPTY, |mask, direction| {
        if rng.random_bool(COIN_FLIP_PROBABILITY) {
            mask.with(direction)
        } else {
            mask
        }
    })
}
