//! PNG export drawing each tile as a small pixel block

use std::path::Path;

use image::{Rgba, RgbaImage};
use ndarray::Array2;

use crate::io::configuration::{
    BACKGROUND_COLOR, FIXED_PIPE_COLOR, OPEN_PIPE_COLOR, TILE_PIXEL_SIZE,
};
use crate::io::error::{AlgorithmError, Result, ensure_parent_dir};
use crate::spatial::{Direction, Grid, Tile};

/// Draw a tile matrix with one `TILE_PIXEL_SIZE` square block per tile
///
/// The centre pixel of a block is lit when any connection is open, and the
/// pixels between centre and edge are lit for each open side.
pub fn rasterize_tiles(tiles: &Array2<Tile>) -> RgbaImage {
    let (rows, cols) = tiles.dim();
    let mut img = RgbaImage::from_pixel(
        cols as u32 * TILE_PIXEL_SIZE,
        rows as u32 * TILE_PIXEL_SIZE,
        Rgba(BACKGROUND_COLOR),
    );

    for ((row, col), &tile) in tiles.indexed_iter() {
        if tile.is_empty_pattern() {
            continue;
        }

        let color = if tile.is_fixed() {
            Rgba(FIXED_PIPE_COLOR)
        } else {
            Rgba(OPEN_PIPE_COLOR)
        };

        let half = TILE_PIXEL_SIZE / 2;
        let center_x = col as u32 * TILE_PIXEL_SIZE + half;
        let center_y = row as u32 * TILE_PIXEL_SIZE + half;
        img.put_pixel(center_x, center_y, color);

        for direction in tile.open_directions() {
            for step in 1..=half {
                let (x, y) = match direction {
                    Direction::Left => (center_x - step, center_y),
                    Direction::Right => (center_x + step, center_y),
                    Direction::Up => (center_x, center_y - step),
                    Direction::Down => (center_x, center_y + step),
                };
                img.put_pixel(x, y, color);
            }
        }
    }

    img
}

/// Export the grid as a PNG image with transparent background
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_grid_as_png(grid: &Grid, output_path: &Path) -> Result<()> {
    let img = rasterize_tiles(grid.tiles());

    ensure_parent_dir(output_path)?;

    img.save(output_path)
        .map_err(|e| AlgorithmError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}
