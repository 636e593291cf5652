/// Command-line parsing and run orchestration
pub mod cli;
/// Constants and defaults
pub mod configuration;
/// Error types
pub mod error;
/// PNG export
pub mod image;
/// Diagnostic logging setup
pub mod logging;
/// Progress display
pub mod progress;
/// Text rendering of tiles and grids
pub mod render;
/// Frame capture and GIF export
pub mod visualization;
