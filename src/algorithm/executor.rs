//! Generation driver alternating propagation sweeps and collapse steps

use rand::{SeedableRng, rngs::StdRng};
use tracing::{debug, info};

use crate::{
    algorithm::collapse::{CollapseConfig, CollapseOutcome, Strategy, collapse},
    algorithm::propagation::{PropagationReport, propagate_with},
    io::configuration::{DEFAULT_HEIGHT, DEFAULT_SEED, DEFAULT_WIDTH},
    io::error::Result,
    io::visualization::{CellChange, StepKind, VisualizationCapture},
    spatial::Grid,
};

/// Parameters of one generation run
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GenerationConfig {
    /// Number of columns
    pub width: usize,
    /// Number of rows
    pub height: usize,
    /// Seed for every random choice made during the run
    pub seed: u64,
    /// Entropy and resolution policy pair
    pub strategy: Strategy,
}

impl GenerationConfig {
    /// Check the dimensions before any grid is allocated
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero or the grid would exceed
    /// [`MAX_GRID_CELLS`]
    ///
    /// [`MAX_GRID_CELLS`]: crate::io::configuration::MAX_GRID_CELLS
    pub fn validate(&self) -> Result<()> {
        Grid::validate_dimensions(self.width, self.height)
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            seed: DEFAULT_SEED,
            strategy: Strategy::default(),
        }
    }
}

/// Propagate/collapse driver owning the grid and its random source
///
/// Each iteration runs one full propagation sweep followed by one collapse.
/// Propagation never unfixes a cell and every collapse fixes one, so a grid
/// of `n` cells completes within `n` iterations.
pub struct PipeCollapse {
    /// Grid being generated
    pub grid: Grid,
    /// Policies used by collapse steps
    pub collapse_config: CollapseConfig,
    /// Current iteration, counting completed collapse steps
    pub iteration: usize,
    /// Optional visualization capture
    pub visualization: Option<VisualizationCapture>,
    rng: StdRng,
}

impl PipeCollapse {
    /// Create a driver for a fresh grid
    ///
    /// # Errors
    ///
    /// Returns an error if the configured dimensions are invalid
    pub fn new(config: GenerationConfig) -> Result<Self> {
        config.validate()?;
        let grid = Grid::new(config.width, config.height)?;
        Ok(Self::from_grid(grid, config.strategy.config(), config.seed))
    }

    /// Create a driver for an existing grid with explicit policies
    pub fn from_grid(grid: Grid, collapse_config: CollapseConfig, seed: u64) -> Self {
        Self {
            grid,
            collapse_config,
            iteration: 0,
            visualization: None,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Access the grid
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Start recording the cells changed by every step
    pub fn enable_visualization(&mut self) {
        self.visualization = Some(VisualizationCapture::new(&self.grid, self.iteration));
    }

    /// Whether every cell is fixed
    pub fn is_complete(&self) -> bool {
        self.grid.is_fixed()
    }

    /// Run one propagation sweep
    pub fn propagate_step(&mut self) -> PropagationReport {
        let tracking = self.visualization.is_some();
        let mut changes = Vec::new();
        let report = propagate_with(&mut self.grid, |point, tile| {
            if tracking {
                changes.push(CellChange { point, tile });
            }
        });
        debug!(
            iteration = self.iteration,
            cleared = report.cleared_connections,
            walled_off = report.walled_off,
            "propagated"
        );
        self.capture(StepKind::Propagate, changes);
        report
    }

    /// Collapse one cell, or return `None` if the grid is complete
    pub fn collapse_step(&mut self) -> Option<CollapseOutcome> {
        let outcome = collapse(&mut self.grid, self.collapse_config, &mut self.rng)?;
        self.iteration += 1;
        self.capture(
            StepKind::Collapse,
            vec![CellChange {
                point: outcome.point,
                tile: outcome.tile,
            }],
        );
        Some(outcome)
    }

    /// Run one propagate/collapse iteration
    ///
    /// Returns whether generation should continue.
    pub fn execute_iteration(&mut self) -> bool {
        if self.is_complete() {
            return false;
        }
        self.propagate_step();
        self.collapse_step();
        !self.is_complete()
    }

    /// Iterate until every cell is fixed, returning the finished grid
    pub fn run(&mut self) -> &Grid {
        info!(
            width = self.grid.width(),
            height = self.grid.height(),
            "generation started"
        );
        while self.execute_iteration() {}
        info!(iterations = self.iteration, "generation finished");
        &self.grid
    }

    fn capture(&mut self, kind: StepKind, changes: Vec<CellChange>) {
        if let Some(visualization) = &mut self.visualization {
            visualization.record(kind, self.iteration, changes);
        }
    }
}
