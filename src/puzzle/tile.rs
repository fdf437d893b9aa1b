//! Fixed-size pixel blocks owned by board slots

use crate::io::error::{Result, invalid_raster};

/// A rectangular pixel block extracted from a source raster
///
/// Dimensions are fixed at construction and the buffer is always
/// `width * height` bytes. Exactly one board slot owns a tile at a time;
/// a move transfers the tile value between slots, never copies pixel data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    width: usize,
    height: usize,
    pixels: Vec<u8>,
}

impl Tile {
    /// Create a zero-filled tile of the given fixed dimensions
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width * height],
        }
    }

    /// Replace the tile's pixel content from a caller-supplied buffer
    ///
    /// # Errors
    ///
    /// Returns an error if the source is not exactly `width * height` bytes.
    /// The tile is unchanged on failure.
    pub fn set_pixels(&mut self, source: &[u8]) -> Result<()> {
        if source.len() != self.width * self.height {
            return Err(invalid_raster(&format!(
                "tile source holds {} bytes but {}x{} needs {}",
                source.len(),
                self.width,
                self.height,
                self.width * self.height
            )));
        }
        self.pixels.copy_from_slice(source);
        Ok(())
    }

    /// Tile width in pixels
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Tile height in pixels
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Row-major pixel samples, length `width * height`
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }
}
