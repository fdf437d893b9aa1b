//! Sliding-puzzle shuffle sequence generator for binary greyscale PGM rasters
//!
//! The system slices a source image into a square grid of tiles with one empty
//! slot, applies a sequence of legal random empty-slot moves, writes each
//! resulting board state as a PGM file, and optionally composes all states
//! into a single mosaic summary image.

#![forbid(unsafe_code)]

/// Input/output operations: PGM codec, CLI orchestration, and error handling
pub mod io;
/// Puzzle-board simulation: tile ownership, move legality, mosaic composition
pub mod puzzle;
/// Greyscale raster data model with checked block copy utilities
pub mod raster;

pub use io::error::{PuzzleError, Result};
