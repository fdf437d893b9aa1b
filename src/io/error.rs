//! Error types for codec, simulation, and composition operations

use std::fmt;
use std::path::PathBuf;

/// Main error type for all puzzle operations
#[derive(Debug)]
pub enum PuzzleError {
    /// PGM header is malformed (bad magic token, unparseable dimensions or maxval)
    MalformedHeader {
        /// Path to the offending file
        path: PathBuf,
        /// Description of what was found instead of a valid header field
        reason: String,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Pixel block ended before `width * height` bytes were read
    ShortPixelRead {
        /// Path to the truncated file
        path: PathBuf,
        /// Number of pixel bytes the header promised
        expected: usize,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Raster buffer or dimensions supplied programmatically are invalid
    InvalidRaster {
        /// Description of what's wrong with the raster data
        reason: String,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Tile grid does not fit inside the source raster
    GridOversized {
        /// Requested grid dimension (board is size x size)
        size: usize,
        /// Tile width in pixels
        tile_width: usize,
        /// Tile height in pixels
        tile_height: usize,
        /// Source raster width
        image_width: usize,
        /// Source raster height
        image_height: usize,
    },

    /// The empty slot has no legal direction to move
    ///
    /// Only reachable on a 1x1 board, where the single slot is the empty
    /// slot and no orthogonal neighbour exists.
    NoLegalMove {
        /// Current empty slot position (row, col)
        position: (usize, usize),
    },

    /// A mosaic frame's dimensions differ from the first frame's
    FrameSizeMismatch {
        /// Zero-based index of the offending frame
        index: usize,
        /// Dimensions of the first frame (width, height)
        expected: (usize, usize),
        /// Dimensions of the offending frame (width, height)
        actual: (usize, usize),
    },
}

impl fmt::Display for PuzzleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedHeader { path, reason } => {
                write!(f, "Malformed PGM header in '{}': {reason}", path.display())
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::ShortPixelRead {
                path,
                expected,
                source,
            } => {
                write!(
                    f,
                    "Pixel block in '{}' ended before {expected} bytes: {source}",
                    path.display()
                )
            }
            Self::InvalidRaster { reason } => {
                write!(f, "Invalid raster data: {reason}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::GridOversized {
                size,
                tile_width,
                tile_height,
                image_width,
                image_height,
            } => {
                write!(
                    f,
                    "Grid of {size}x{size} tiles sized {tile_width}x{tile_height} \
                     exceeds image dimensions {image_width}x{image_height}"
                )
            }
            Self::NoLegalMove { position } => {
                write!(
                    f,
                    "No legal move for empty slot at ({}, {})",
                    position.0, position.1
                )
            }
            Self::FrameSizeMismatch {
                index,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Mosaic frame {index} is {}x{} but the first frame is {}x{}",
                    actual.0, actual.1, expected.0, expected.1
                )
            }
        }
    }
}

impl std::error::Error for PuzzleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileSystem { source, .. } | Self::ShortPixelRead { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for puzzle results
pub type Result<T> = std::result::Result<T, PuzzleError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> PuzzleError {
    PuzzleError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid raster error
pub fn invalid_raster(reason: &impl ToString) -> PuzzleError {
    PuzzleError::InvalidRaster {
        reason: reason.to_string(),
    }
}
