//! Generation constants and runtime configuration defaults

// Default values for configurable parameters
/// Grid width used when none is given
pub const DEFAULT_WIDTH: usize = 20;
/// Grid height used when none is given
pub const DEFAULT_HEIGHT: usize = 10;
/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;

// Safety limit to prevent excessive memory allocation
/// Maximum number of cells in a generated grid
pub const MAX_GRID_CELLS: usize = 100_000_000;

// Terminal rendering
/// Glyph written for a mask outside the pipe alphabet
pub const PLACEHOLDER_GLYPH: char = '?';
/// Escape sequence opening the fixed-cell highlight
pub const FIXED_HIGHLIGHT: &str = "\x1b[31m";
/// Escape sequence closing the fixed-cell highlight
pub const HIGHLIGHT_RESET: &str = "\x1b[0m";

// Raster export
/// Side length in pixels of one tile in PNG and GIF output
pub const TILE_PIXEL_SIZE: u32 = 3;
/// Pipe colour of fixed tiles
pub const FIXED_PIPE_COLOR: [u8; 4] = [220, 50, 47, 255];
/// Pipe colour of tiles still being narrowed
pub const OPEN_PIPE_COLOR: [u8; 4] = [88, 110, 117, 255];
/// Background colour behind pipes
pub const BACKGROUND_COLOR: [u8; 4] = [0, 0, 0, 0];

// Progress bar display settings
/// Width of the progress bar in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;

// Output settings
/// Delay between GIF animation frames
pub const GIF_FRAME_DELAY_MS: u32 = 20;
/// Minimum frame delay that viewers reliably support (in milliseconds)
pub const VIEWER_MIN_FRAME_DELAY_MS: u32 = 50;
/// How many frame delays the final GIF frame is held for
pub const FINAL_FRAME_HOLD: u32 = 25;
