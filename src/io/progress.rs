//! Progress reporting for the move loop

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static MOVE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("Moves [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Single progress bar tracking the shuffle move loop
pub struct ProgressManager {
    bar: ProgressBar,
}

impl ProgressManager {
    /// Create a progress bar sized to the total move count
    pub fn new(total_moves: usize) -> Self {
        let bar = ProgressBar::new(total_moves as u64);
        bar.set_style(MOVE_STYLE.clone());
        Self { bar }
    }

    /// Report a completed move
    pub fn update_move(&self, move_number: usize) {
        self.bar.set_position(move_number as u64);
    }

    /// Finish and clear the display
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
