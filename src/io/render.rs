//! Box-drawing text rendering of tiles and grids

use std::fmt::{self, Write as _};

use crate::io::configuration::{FIXED_HIGHLIGHT, HIGHLIGHT_RESET, PLACEHOLDER_GLYPH};
use crate::spatial::{Direction, Grid, Tile};

/// Glyph for every connection pattern, indexed by `Left | Right << 1 | Up << 2 | Down << 3`
const GLYPHS: [char; 16] = [
    ' ', '╴', '╶', '─', '╵', '┘', '└', '┴', '╷', '┐', '┌', '┬', '│', '┤', '├', '┼',
];

/// Presentation switches for text output
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Wrap fixed tiles in an ANSI colour escape
    pub highlight_fixed: bool,
}

fn glyph_index(tile: Tile) -> usize {
    Direction::ALL
        .into_iter()
        .enumerate()
        .filter(|&(_, direction)| tile.has(direction))
        .map(|(bit, _)| 1_usize << bit)
        .sum()
}

/// Box-drawing character for the tile's connection pattern
///
/// The fixed flag is ignored; the empty pattern renders as a space.
pub fn glyph(tile: Tile) -> char {
    GLYPHS
        .get(glyph_index(tile.directions()))
        .copied()
        .unwrap_or(PLACEHOLDER_GLYPH)
}

/// Render one tile, optionally highlighting it when fixed
pub fn render_tile(tile: Tile, options: RenderOptions) -> String {
    if options.highlight_fixed && tile.is_fixed() {
        format!("{FIXED_HIGHLIGHT}{}{HIGHLIGHT_RESET}", glyph(tile))
    } else {
        glyph(tile).to_string()
    }
}

/// Render the grid one newline-terminated line per row
pub fn render_grid(grid: &Grid, options: RenderOptions) -> String {
    let mut out = String::with_capacity(grid.cell_count() * 4 + grid.height());
    for row in grid.tiles().rows() {
        for &tile in row {
            out.push_str(&render_tile(tile, options));
        }
        out.push('\n');
    }
    out
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char(glyph(*self))
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_grid(self, RenderOptions::default()))
    }
}
