//! Command-line interface for generating and printing pipe grids

use crate::algorithm::collapse::Strategy;
use crate::algorithm::executor::{GenerationConfig, PipeCollapse};
use crate::io::configuration::{
    DEFAULT_HEIGHT, DEFAULT_SEED, DEFAULT_WIDTH, GIF_FRAME_DELAY_MS, MAX_GRID_CELLS,
};
use crate::io::error::Result;
use crate::io::image::export_grid_as_png;
use crate::io::progress::ProgressManager;
use crate::io::render::{RenderOptions, render_grid};
use crate::spatial::Grid;
use clap::{Parser, ValueEnum};
use std::io::Write;
use std::path::PathBuf;
use tracing::{info, warn};

/// Policy pair selectable from the command line
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum StrategyArg {
    /// Fewest unfixed neighbors first, prune toward fixed neighbors
    #[default]
    NeighborAware,
    /// Fewest open connections first, intersect with a random mask
    IndependentMask,
}

impl From<StrategyArg> for Strategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::NeighborAware => Self::NeighborAware,
            StrategyArg::IndependentMask => Self::IndependentMask,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "pipetile")]
#[command(
    author,
    version,
    about = "Generate a grid of connected pipe tiles by propagation and collapse",
    allow_negative_numbers = true
)]
/// Command-line arguments for the pipe grid generator
pub struct Cli {
    /// Grid width in tiles (falls back to the default when not a positive integer)
    ///
    /// Negative numbers are accepted and fall back; other values starting
    /// with `-` are read as flags.
    #[arg(value_name = "WIDTH")]
    pub width: Option<String>,

    /// Grid height in tiles (falls back to the default when not a positive integer)
    #[arg(value_name = "HEIGHT")]
    pub height: Option<String>,

    /// Random seed for reproducible generation
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Entropy and resolution policy pair
    #[arg(long, value_enum, default_value_t = StrategyArg::NeighborAware)]
    pub strategy: StrategyArg,

    /// Print the grid after every propagate and collapse step
    #[arg(short, long)]
    pub animate: bool,

    /// Colour fixed tiles when printing
    #[arg(short = 'c', long)]
    pub highlight_fixed: bool,

    /// Also write the final grid as a PNG image
    #[arg(long, value_name = "PATH")]
    pub png: Option<PathBuf>,

    /// Also write an animated GIF of every step
    #[arg(long, value_name = "PATH")]
    pub gif: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase log verbosity (repeatable)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Parse a grid dimension, falling back to `default` unless it is a positive integer
pub fn parse_dimension(arg: Option<&str>, default: usize) -> usize {
    arg.and_then(|value| value.trim().parse::<usize>().ok())
        .filter(|&value| value > 0)
        .unwrap_or(default)
}

impl Cli {
    /// Effective `(width, height)` after applying defaults
    ///
    /// A size whose cell count exceeds `MAX_GRID_CELLS` is replaced by the
    /// default size as a whole.
    pub fn dimensions(&self) -> (usize, usize) {
        let width = parse_dimension(self.width.as_deref(), DEFAULT_WIDTH);
        let height = parse_dimension(self.height.as_deref(), DEFAULT_HEIGHT);

        if Grid::validate_dimensions(width, height).is_ok() {
            (width, height)
        } else {
            warn!(
                width,
                height,
                max_cells = MAX_GRID_CELLS,
                "grid too large, using default size"
            );
            (DEFAULT_WIDTH, DEFAULT_HEIGHT)
        }
    }

    /// Generation parameters described by these arguments
    pub fn generation_config(&self) -> GenerationConfig {
        let (width, height) = self.dimensions();
        GenerationConfig {
            width,
            height,
            seed: self.seed,
            strategy: self.strategy.into(),
        }
    }

    /// Options for text rendering
    pub const fn render_options(&self) -> RenderOptions {
        RenderOptions {
            highlight_fixed: self.highlight_fixed,
        }
    }

    /// Check if progress should be displayed
    ///
    /// Animation output already shows progress, so the bar is only used when
    /// printing the final grid.
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet && !self.animate
    }
}

/// Runs one generation as described by the CLI arguments
pub struct GridRunner {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl GridRunner {
    /// Create a runner for the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self {
            cli,
            progress_manager: None,
        }
    }

    /// Generate the grid and write its rendering to `out`
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The grid dimensions are invalid
    /// - Writing to `out` fails
    /// - The PNG or GIF export fails
    pub fn process<W: Write>(&mut self, out: &mut W) -> Result<()> {
        let config = self.cli.generation_config();
        info!(
            width = config.width,
            height = config.height,
            seed = config.seed,
            strategy = ?config.strategy,
            "starting generation"
        );

        let mut executor = PipeCollapse::new(config)?;
        if self.cli.gif.is_some() {
            executor.enable_visualization();
        }

        if self.cli.should_show_progress() {
            self.progress_manager = Some(ProgressManager::new(executor.grid().cell_count()));
        }

        let options = self.cli.render_options();
        while !executor.is_complete() {
            executor.propagate_step();
            if self.cli.animate {
                writeln!(out, "{}", render_grid(executor.grid(), options))?;
            }

            executor.collapse_step();
            if self.cli.animate {
                writeln!(out, "{}", render_grid(executor.grid(), options))?;
            }

            if let Some(pm) = &self.progress_manager {
                pm.update(executor.grid().fixed_count());
            }
        }

        if let Some(pm) = &self.progress_manager {
            pm.finish();
        }

        if !self.cli.animate {
            write!(out, "{}", render_grid(executor.grid(), options))?;
        }
        out.flush()?;

        if let Some(path) = &self.cli.png {
            export_grid_as_png(executor.grid(), path)?;
        }

        if let Some(path) = &self.cli.gif {
            if let Some(visualization) = &executor.visualization {
                visualization.export_gif(path, GIF_FRAME_DELAY_MS)?;
            }
        }

        info!(iterations = executor.iteration, "generation complete");
        Ok(())
    }
}
