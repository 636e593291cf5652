//! Step capture and GIF generation for generation playback
//!
//! Only the starting grid and the cells each step rewrote are kept. Frames
//! are rebuilt by replaying those changes while the GIF is encoded.

use std::path::Path;

use image::codecs::gif::GifEncoder;
use image::{Delay, Frame};
use ndarray::Array2;

use crate::io::configuration::{FINAL_FRAME_HOLD, VIEWER_MIN_FRAME_DELAY_MS};
use crate::io::error::{AlgorithmError, Result, ensure_parent_dir, nothing_to_export};
use crate::io::image::rasterize_tiles;
use crate::spatial::{Grid, Point, Tile};

/// Which step produced a captured frame
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepKind {
    /// State of the grid when capture started
    Initial,
    /// Frame taken after a propagation sweep
    Propagate,
    /// Frame taken after a collapse
    Collapse,
}

/// A cell rewritten during a step
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellChange {
    /// Position of the cell
    pub point: Point,
    /// Tile the cell holds after the step
    pub tile: Tile,
}

/// Cells rewritten by one generation step
#[derive(Debug, Clone)]
pub struct CapturedStep {
    /// Step that produced the changes
    pub kind: StepKind,
    /// Generation iteration the step belongs to
    pub iteration: usize,
    changes: Vec<CellChange>,
}

impl CapturedStep {
    /// Cells rewritten by this step, in the order they changed
    pub fn changes(&self) -> &[CellChange] {
        &self.changes
    }
}

/// Captures grid changes for visualization
///
/// Records the cells touched by every step during generation to enable
/// post-processing playback of the generation process
#[derive(Debug)]
pub struct VisualizationCapture {
    initial: Array2<Tile>,
    steps: Vec<CapturedStep>,
}

impl VisualizationCapture {
    /// Start capturing from the current state of `grid`
    pub fn new(grid: &Grid, iteration: usize) -> Self {
        Self {
            initial: grid.tiles().clone(),
            steps: vec![CapturedStep {
                kind: StepKind::Initial,
                iteration,
                changes: Vec::new(),
            }],
        }
    }

    /// Record the cells rewritten by one step
    pub fn record(&mut self, kind: StepKind, iteration: usize, changes: Vec<CellChange>) {
        self.steps.push(CapturedStep {
            kind,
            iteration,
            changes,
        });
    }

    /// Returns all recorded steps, starting with the initial state
    pub fn steps(&self) -> &[CapturedStep] {
        &self.steps
    }

    /// Returns the number of recorded steps, one frame each
    pub const fn step_count(&self) -> usize {
        self.steps.len()
    }

    /// Total number of cell changes held across all steps
    pub fn change_count(&self) -> usize {
        self.steps.iter().map(|step| step.changes.len()).sum()
    }

    /// Rebuild the grid as it was after the step at `index`
    ///
    /// Indices past the last step yield the final state.
    pub fn replay(&self, index: usize) -> Array2<Tile> {
        let mut tiles = self.initial.clone();
        for step in self.steps.iter().take(index.saturating_add(1)) {
            apply(&mut tiles, step);
        }
        tiles
    }

    /// Export the captured steps as a GIF with automatic frame skipping
    ///
    /// If the requested delay is shorter than viewers support, only every
    /// n-th frame is kept so the apparent playback speed is preserved.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No step was captured after the initial state
    /// - File system operations fail
    /// - GIF encoding fails
    pub fn export_gif(&self, output_path: &Path, frame_delay_ms: u32) -> Result<()> {
        if self.steps.len() < 2 {
            return Err(nothing_to_export(&"no generation steps captured"));
        }

        let frame_delay_ms = frame_delay_ms.max(1);
        let effective_delay_ms = frame_delay_ms.max(VIEWER_MIN_FRAME_DELAY_MS);
        let skip_factor = VIEWER_MIN_FRAME_DELAY_MS.div_ceil(frame_delay_ms).max(1) as usize;

        ensure_parent_dir(output_path)?;

        let file = std::fs::File::create(output_path).map_err(|e| AlgorithmError::FileSystem {
            path: output_path.to_path_buf(),
            operation: "create file",
            source: e,
        })?;

        let export_error = |e: image::ImageError| AlgorithmError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        };

        let mut encoder = GifEncoder::new(file);
        let mut tiles = self.initial.clone();
        for (index, step) in self.steps.iter().enumerate() {
            apply(&mut tiles, step);
            if index % skip_factor == 0 {
                encoder
                    .encode_frame(render_frame(&tiles, effective_delay_ms))
                    .map_err(export_error)?;
            }
        }

        // The last state is always shown, and held longer for visibility
        encoder
            .encode_frame(render_frame(
                &tiles,
                effective_delay_ms * FINAL_FRAME_HOLD,
            ))
            .map_err(export_error)?;

        Ok(())
    }
}

fn apply(tiles: &mut Array2<Tile>, step: &CapturedStep) {
    for change in &step.changes {
        if let Some(cell) = tiles.get_mut((change.point.row, change.point.col)) {
            *cell = change.tile;
        }
    }
}

fn render_frame(tiles: &Array2<Tile>, delay_ms: u32) -> Frame {
    Frame::from_parts(
        rasterize_tiles(tiles),
        0,
        0,
        Delay::from_numer_denom_ms(delay_ms, 1),
    )
}
