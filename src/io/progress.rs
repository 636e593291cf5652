//! Progress display counting fixed cells during generation

use std::sync::LazyLock;

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

use crate::io::configuration::PROGRESS_BAR_WIDTH;

static PROGRESS_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    let template = format!(
        "[{{elapsed_precise}}] {{msg}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} cells"
    );
    ProgressStyle::default_bar()
        .template(&template)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks how many cells of the grid are fixed
pub struct ProgressManager {
    bar: ProgressBar,
}

impl ProgressManager {
    /// Create a progress bar on stderr for a grid of `cell_count` cells
    pub fn new(cell_count: usize) -> Self {
        Self::with_target(cell_count, ProgressDrawTarget::stderr())
    }

    /// Create a progress bar that draws nothing, for quiet runs and tests
    pub fn hidden(cell_count: usize) -> Self {
        Self::with_target(cell_count, ProgressDrawTarget::hidden())
    }

    fn with_target(cell_count: usize, target: ProgressDrawTarget) -> Self {
        let bar = ProgressBar::with_draw_target(Some(cell_count as u64), target);
        bar.set_style(PROGRESS_STYLE.clone());
        bar.set_message("collapsing");
        Self { bar }
    }

    /// Report the current number of fixed cells
    pub fn update(&self, fixed_cells: usize) {
        self.bar.set_position(fixed_cells as u64);
    }

    /// Current reported position
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Total number of cells being tracked
    pub fn length(&self) -> Option<u64> {
        self.bar.length()
    }

    /// Clear the progress display
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
