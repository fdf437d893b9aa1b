//! Mosaic composition of per-move board frames
//!
//! Lays a sequence of rendered board rasters out in a near-square grid, in
//! row-major order. Frames rendered during the simulation loop are handed
//! over in memory; a file-based path re-reading previously written per-move
//! files is kept for batch composition run after the fact.

use crate::io::configuration::{MOSAIC_BACKGROUND, RASTER_EXTENSION};
use crate::io::error::{PuzzleError, Result, invalid_raster};
use crate::io::pgm;
use crate::raster::Raster;
use std::path::PathBuf;

/// Grid arrangement for a given number of mosaic frames
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MosaicLayout {
    /// Number of mosaic columns, `ceil(sqrt(frames))`
    pub columns: usize,
    /// Number of mosaic rows, `ceil(frames / columns)`
    pub rows: usize,
}

impl MosaicLayout {
    /// Compute the near-square layout for `frame_count` frames
    pub fn for_frame_count(frame_count: usize) -> Self {
        let columns = (frame_count as f64).sqrt().ceil() as usize;
        let rows = if columns == 0 {
            0
        } else {
            frame_count.div_ceil(columns)
        };
        Self { columns, rows }
    }

    /// Cell (row, col) of the zero-based frame `index`, row-major
    pub const fn cell_origin(&self, index: usize) -> (usize, usize) {
        (index / self.columns, index % self.columns)
    }
}

/// Compose rendered frames into one mosaic raster
///
/// The first frame's dimensions define the cell extent; the output is
/// pre-filled white so trailing cells without a frame stay blank. Every frame
/// is checked against the first and a mismatch aborts the whole composition.
///
/// # Errors
///
/// Returns an error if `frames` is empty or any frame's dimensions differ
/// from the first frame's.
pub fn compose(frames: &[Raster]) -> Result<Raster> {
    let Some(first) = frames.first() else {
        return Err(invalid_raster(&"cannot compose a mosaic from zero frames"));
    };
    let (cell_width, cell_height) = first.dimensions();
    let layout = MosaicLayout::for_frame_count(frames.len());

    let mut mosaic = Raster::filled(
        layout.columns * cell_width,
        layout.rows * cell_height,
        MOSAIC_BACKGROUND,
    )?;

    for (index, frame) in frames.iter().enumerate() {
        if frame.dimensions() != (cell_width, cell_height) {
            return Err(PuzzleError::FrameSizeMismatch {
                index,
                expected: (cell_width, cell_height),
                actual: frame.dimensions(),
            });
        }

        let (row, col) = layout.cell_origin(index);
        mosaic.insert_block(
            row * cell_height,
            col * cell_width,
            cell_width,
            cell_height,
            frame.pixels(),
        )?;
    }

    Ok(mosaic)
}

/// Compose a mosaic by re-reading previously written per-move files
///
/// Decodes `<base_name><move>.pgm` for move 1..=`total_moves` and delegates
/// to [`compose`]. A missing or malformed per-move file propagates; no cell
/// is ever substituted with a blank.
///
/// # Errors
///
/// Returns an error if any per-move file fails to decode or the decoded
/// frames disagree on dimensions.
pub fn compose_from_files(base_name: &str, total_moves: usize) -> Result<Raster> {
    let mut frames = Vec::with_capacity(total_moves);
    for move_number in 1..=total_moves {
        let path = PathBuf::from(format!("{base_name}{move_number}{RASTER_EXTENSION}"));
        frames.push(pgm::decode(&path)?);
    }
    compose(&frames)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_is_near_square() {
        assert_eq!(
            MosaicLayout::for_frame_count(5),
            MosaicLayout {
                columns: 3,
                rows: 2
            }
        );
        assert_eq!(
            MosaicLayout::for_frame_count(9),
            MosaicLayout {
                columns: 3,
                rows: 3
            }
        );
        assert_eq!(
            MosaicLayout::for_frame_count(10),
            MosaicLayout {
                columns: 4,
                rows: 3
            }
        );
        assert_eq!(
            MosaicLayout::for_frame_count(1),
            MosaicLayout {
                columns: 1,
                rows: 1
            }
        );
    }

    #[test]
    fn test_cell_origin_is_row_major() {
        let layout = MosaicLayout::for_frame_count(5);
        assert_eq!(layout.cell_origin(0), (0, 0));
        assert_eq!(layout.cell_origin(2), (0, 2));
        // Move 4 (frame index 3) starts the second row
        assert_eq!(layout.cell_origin(3), (1, 0));
        assert_eq!(layout.cell_origin(4), (1, 1));
    }
}
