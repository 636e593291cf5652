//! Constraint propagation over the whole grid
//!
//! A single sweep visits cells in row-major order and closes every connection
//! the neighbor on that side cannot accept. The sweep writes in place, so a
//! cell sees changes already made to cells earlier in the same sweep but not
//! the reverse; repeated sweeps across the generation loop converge.

use tracing::trace;

use crate::spatial::{Direction, Grid, Point, Tile};

/// Summary of the changes made by one propagation sweep
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PropagationReport {
    /// Number of direction bits cleared
    pub cleared_connections: usize,
    /// Number of cells fixed because no connection remained
    pub walled_off: usize,
}

impl PropagationReport {
    /// Whether the sweep changed nothing
    pub const fn is_unchanged(&self) -> bool {
        self.cleared_connections == 0 && self.walled_off == 0
    }
}

/// Prune unsupported connections on every unfixed cell
///
/// A connection toward a side survives only if the neighbor there still offers
/// the opposite connection; the grid border offers nothing. A cell left with
/// no connections is fixed as the empty pattern.
pub fn propagate(grid: &mut Grid) -> PropagationReport {
    propagate_with(grid, |_, _| {})
}

/// Same sweep as [`propagate`], calling `on_change` with every rewritten cell
pub fn propagate_with<F>(grid: &mut Grid, mut on_change: F) -> PropagationReport
where
    F: FnMut(Point, Tile),
{
    let mut report = PropagationReport::default();
    for point in grid.points() {
        let Some(tile) = grid.get(point) else {
            continue;
        };
        if tile.is_fixed() {
            continue;
        }

        let mut pruned = tile;
        for direction in tile.open_directions() {
            if !accepts(grid.neighbor_tile(point, direction), direction) {
                pruned = pruned.without(direction);
                report.cleared_connections += 1;
            }
        }

        if pruned.is_empty_pattern() {
            pruned = pruned.fixed();
            report.walled_off += 1;
            trace!(row = point.row, col = point.col, "cell walled off");
        }

        if pruned != tile {
            grid.set(point, pruned);
            on_change(point, pruned);
        }
    }

    report
}

/// Whether `neighbor` can take a connection arriving from the `direction` side
const fn accepts(neighbor: Tile, direction: Direction) -> bool {
    neighbor.has(direction.opposite())
}
