//! Fixed-size tile grid and cell addressing
//!
//! The grid is the single owner of all generation state. Tiles are stored
//! row-major in an `ndarray` matrix indexed by `(row, col)`; positions outside
//! the matrix read as the empty pattern so that border cells never keep a
//! connection leading off the grid.

use ndarray::Array2;

use crate::io::configuration::MAX_GRID_CELLS;
use crate::io::error::{Result, invalid_parameter};
use crate::spatial::tiles::{Direction, Tile};

/// Row and column of a grid cell
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    /// Row index, zero at the top
    pub row: usize,
    /// Column index, zero at the left
    pub col: usize,
}

impl Point {
    /// Create a point from row and column indices
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Rectangular grid of pipe tiles
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    tiles: Array2<Tile>,
}

impl Grid {
    /// Create a grid with every cell fully open and unfixed
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero or the grid would hold
    /// more than [`MAX_GRID_CELLS`] cells
    pub fn new(width: usize, height: usize) -> Result<Self> {
        Self::validate_dimensions(width, height)?;
        Ok(Self {
            tiles: Array2::from_elem((height, width), Tile::INITIAL),
        })
    }

    /// Wrap an existing tile matrix shaped `(height, width)`
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero or the matrix holds more
    /// than [`MAX_GRID_CELLS`] cells
    pub fn from_array(tiles: Array2<Tile>) -> Result<Self> {
        let (height, width) = tiles.dim();
        Self::validate_dimensions(width, height)?;
        Ok(Self { tiles })
    }

    /// Check that a `width` by `height` grid can be generated
    ///
    /// Any positive side length is accepted as long as the total cell count
    /// stays within [`MAX_GRID_CELLS`].
    ///
    /// # Errors
    ///
    /// Returns an error naming the offending dimension
    pub fn validate_dimensions(width: usize, height: usize) -> Result<()> {
        if width == 0 {
            return Err(invalid_parameter("width", &width, &"must be at least 1"));
        }
        if height == 0 {
            return Err(invalid_parameter("height", &height, &"must be at least 1"));
        }
        match width.checked_mul(height) {
            Some(cells) if cells <= MAX_GRID_CELLS => Ok(()),
            _ => Err(invalid_parameter(
                "width x height",
                &format!("{width}x{height}"),
                &format!("grid must not exceed {MAX_GRID_CELLS} cells"),
            )),
        }
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.tiles.ncols()
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.tiles.nrows()
    }

    /// Total number of cells
    pub fn cell_count(&self) -> usize {
        self.tiles.len()
    }

    /// Read-only view of the underlying matrix
    pub const fn tiles(&self) -> &Array2<Tile> {
        &self.tiles
    }

    /// Tile at `point`, or `None` when out of bounds
    pub fn get(&self, point: Point) -> Option<Tile> {
        self.tiles.get((point.row, point.col)).copied()
    }

    /// Overwrite the tile at `point`; out-of-bounds writes are ignored
    pub fn set(&mut self, point: Point, tile: Tile) {
        if let Some(cell) = self.tiles.get_mut((point.row, point.col)) {
            *cell = tile;
        }
    }

    /// Position of the neighbor on the given side, if it lies inside the grid
    pub fn neighbor(&self, point: Point, direction: Direction) -> Option<Point> {
        let (row_step, col_step) = direction.offset();
        let row = point.row.checked_add_signed(row_step)?;
        let col = point.col.checked_add_signed(col_step)?;
        (row < self.height() && col < self.width()).then_some(Point { row, col })
    }

    /// Tile of the neighbor on the given side, with the border reading as empty
    pub fn neighbor_tile(&self, point: Point, direction: Direction) -> Tile {
        self.neighbor(point, direction)
            .and_then(|neighbor| self.get(neighbor))
            .unwrap_or(Tile::EMPTY)
    }

    /// Whether the in-bounds neighbor on the given side is fixed
    pub fn is_neighbor_fixed(&self, point: Point, direction: Direction) -> bool {
        self.neighbor(point, direction)
            .and_then(|neighbor| self.get(neighbor))
            .is_some_and(Tile::is_fixed)
    }

    /// Number of in-bounds neighbors that are fixed
    pub fn fixed_neighbor_count(&self, point: Point) -> usize {
        Direction::ALL
            .into_iter()
            .filter(|&direction| self.is_neighbor_fixed(point, direction))
            .count()
    }

    /// All cell positions in row-major order
    pub fn points(&self) -> impl Iterator<Item = Point> + use<> {
        let width = self.width();
        let height = self.height();
        (0..height).flat_map(move |row| (0..width).map(move |col| Point { row, col }))
    }

    /// Positions of cells that are not yet fixed, in row-major order
    pub fn unfixed_points(&self) -> Vec<Point> {
        self.tiles
            .indexed_iter()
            .filter(|(_, tile)| !tile.is_fixed())
            .map(|((row, col), _)| Point { row, col })
            .collect()
    }

    /// Number of fixed cells
    pub fn fixed_count(&self) -> usize {
        self.tiles.iter().filter(|tile| tile.is_fixed()).count()
    }

    /// Whether every cell is fixed, which completes generation
    pub fn is_fixed(&self) -> bool {
        self.tiles.iter().all(|tile| tile.is_fixed())
    }
}
