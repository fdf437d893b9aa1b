//! Command-line interface for shuffling a PGM image as a sliding tile puzzle

use crate::io::configuration::{DEFAULT_SEED, RASTER_EXTENSION};
use crate::io::error::{PuzzleError, Result, invalid_parameter};
use crate::io::pgm;
use crate::io::progress::ProgressManager;
use crate::puzzle::Board;
use crate::puzzle::mosaic;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "tileshuffle")]
#[command(
    author,
    version,
    about = "Generate sliding-puzzle board states from a greyscale PGM image"
)]
/// Command-line arguments for the shuffle generator
pub struct Cli {
    /// Input PGM image to slice into tiles
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Grid dimension (the board is SIZE x SIZE tiles)
    #[arg(short = 's', long)]
    pub size: usize,

    /// Base name for per-move output files
    #[arg(short = 'o', long)]
    pub output: String,

    /// Number of random moves to apply
    #[arg(short = 'n', long)]
    pub moves: usize,

    /// Base name for the mosaic summary image (presence enables composition)
    #[arg(short = 'x', long)]
    pub summary: Option<String>,

    /// Random seed for reproducible shuffles
    #[arg(long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Orchestrates one shuffle run: decode, slice, move loop, optional mosaic
pub struct ShuffleRunner {
    cli: Cli,
}

impl ShuffleRunner {
    /// Create a runner from parsed CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the shuffle according to the CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if parameter validation, input decoding, board
    /// initialization, any move, or any file write fails.
    pub fn process(&mut self) -> Result<()> {
        self.validate_parameters()?;

        let source = pgm::decode(&self.cli.input)?;
        let tile_width = source.width() / self.cli.size;
        let tile_height = source.height() / self.cli.size;
        if tile_width == 0 || tile_height == 0 {
            return Err(PuzzleError::GridOversized {
                size: self.cli.size,
                tile_width,
                tile_height,
                image_width: source.width(),
                image_height: source.height(),
            });
        }

        let mut board = Board::new(self.cli.size, tile_width, tile_height, self.cli.seed)?;
        board.initialize(&source)?;

        let progress = self
            .cli
            .should_show_progress()
            .then(|| ProgressManager::new(self.cli.moves));

        // Frames are retained for in-memory mosaic handoff only when the
        // summary was requested
        let mut frames = Vec::with_capacity(if self.cli.summary.is_some() {
            self.cli.moves
        } else {
            0
        });

        for move_number in 1..=self.cli.moves {
            board.apply_random_move()?;
            let frame = board.render()?;

            let path = PathBuf::from(format!(
                "{}{move_number}{RASTER_EXTENSION}",
                self.cli.output
            ));
            pgm::encode(&frame, &path)?;

            if self.cli.summary.is_some() {
                frames.push(frame);
            }
            if let Some(ref bar) = progress {
                bar.update_move(move_number);
            }
        }

        if let Some(ref summary_base) = self.cli.summary {
            let summary = mosaic::compose(&frames)?;
            let path = PathBuf::from(format!("{summary_base}{RASTER_EXTENSION}"));
            pgm::encode(&summary, &path)?;
        }

        if let Some(ref bar) = progress {
            bar.finish();
        }
        Ok(())
    }

    fn validate_parameters(&self) -> Result<()> {
        if self.cli.size == 0 {
            return Err(invalid_parameter(
                "size",
                &self.cli.size,
                &"grid dimension must be at least 1",
            ));
        }
        if self.cli.moves == 0 {
            return Err(invalid_parameter(
                "moves",
                &self.cli.moves,
                &"move count must be at least 1",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_rejects_zero_parameters() {
        let cli = Cli {
            input: PathBuf::from("input.pgm"),
            size: 0,
            output: "out".to_string(),
            moves: 3,
            summary: None,
            seed: DEFAULT_SEED,
            quiet: true,
        };
        assert!(ShuffleRunner::new(cli).validate_parameters().is_err());

        let cli = Cli {
            input: PathBuf::from("input.pgm"),
            size: 2,
            output: "out".to_string(),
            moves: 0,
            summary: None,
            seed: DEFAULT_SEED,
            quiet: true,
        };
        assert!(ShuffleRunner::new(cli).validate_parameters().is_err());
    }
}
