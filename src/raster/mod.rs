//! Greyscale raster data model
//!
//! A [`Raster`] owns a flat row-major buffer of single-byte samples together
//! with its dimensions. Every constructor validates, so any `Raster` value a
//! consumer can hold satisfies `pixels.len() == width * height` with both
//! dimensions at least 1. Sub-rectangle reads and writes go through the
//! checked block helpers, which centralize the grid-to-pixel arithmetic used
//! by board slicing, rendering, and mosaic assembly.

use crate::io::error::{Result, invalid_raster};

/// A 2D grid of single-byte greyscale samples plus width/height
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    width: usize,
    height: usize,
    pixels: Vec<u8>,
}

impl Raster {
    /// Create a raster owning a private copy of the caller's buffer
    ///
    /// The resulting raster is independent of the source buffer's lifetime.
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero or the buffer is shorter
    /// than `width * height` bytes. No raster value is produced on failure.
    pub fn from_buffer(buffer: &[u8], width: usize, height: usize) -> Result<Self> {
        validate_dimensions(width, height)?;
        let expected = width * height;
        let pixels = buffer.get(..expected).ok_or_else(|| {
            invalid_raster(&format!(
                "buffer holds {} bytes but {width}x{height} needs {expected}",
                buffer.len()
            ))
        })?;
        Ok(Self {
            width,
            height,
            pixels: pixels.to_vec(),
        })
    }

    /// Create a raster taking ownership of an exactly-sized pixel vector
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero or the vector length is
    /// not exactly `width * height`.
    pub fn from_vec(pixels: Vec<u8>, width: usize, height: usize) -> Result<Self> {
        validate_dimensions(width, height)?;
        if pixels.len() != width * height {
            return Err(invalid_raster(&format!(
                "pixel vector holds {} bytes but {width}x{height} needs {}",
                pixels.len(),
                width * height
            )));
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Create a raster with every sample set to `value`
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero.
    pub fn filled(width: usize, height: usize, value: u8) -> Result<Self> {
        validate_dimensions(width, height)?;
        Ok(Self {
            width,
            height,
            pixels: vec![value; width * height],
        })
    }

    /// Raster width in pixels
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Raster height in pixels
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Raster dimensions as (width, height)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Row-major pixel samples, length `width * height`
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Copy a `block_width` x `block_height` region with top-left corner at
    /// (`top`, `left`) out of this raster
    ///
    /// # Errors
    ///
    /// Returns an error if the region extends past either raster edge.
    pub fn extract_block(
        &self,
        top: usize,
        left: usize,
        block_width: usize,
        block_height: usize,
    ) -> Result<Vec<u8>> {
        self.check_block_bounds(top, left, block_width, block_height)?;

        let mut block = Vec::with_capacity(block_width * block_height);
        for y in 0..block_height {
            let start = (top + y) * self.width + left;
            let row = self
                .pixels
                .get(start..start + block_width)
                .ok_or_else(|| invalid_raster(&"block row out of range"))?;
            block.extend_from_slice(row);
        }
        Ok(block)
    }

    /// Copy `block` into the `block_width` x `block_height` region with
    /// top-left corner at (`top`, `left`)
    ///
    /// # Errors
    ///
    /// Returns an error if the region extends past either raster edge or if
    /// `block` is not exactly `block_width * block_height` bytes. The raster
    /// is unchanged on failure.
    pub fn insert_block(
        &mut self,
        top: usize,
        left: usize,
        block_width: usize,
        block_height: usize,
        block: &[u8],
    ) -> Result<()> {
        self.check_block_bounds(top, left, block_width, block_height)?;
        if block.len() != block_width * block_height {
            return Err(invalid_raster(&format!(
                "block holds {} bytes but {block_width}x{block_height} needs {}",
                block.len(),
                block_width * block_height
            )));
        }

        for (y, source_row) in block.chunks_exact(block_width).enumerate() {
            let start = (top + y) * self.width + left;
            let target_row = self
                .pixels
                .get_mut(start..start + block_width)
                .ok_or_else(|| invalid_raster(&"block row out of range"))?;
            target_row.copy_from_slice(source_row);
        }
        Ok(())
    }

    fn check_block_bounds(
        &self,
        top: usize,
        left: usize,
        block_width: usize,
        block_height: usize,
    ) -> Result<()> {
        if left + block_width > self.width || top + block_height > self.height {
            return Err(invalid_raster(&format!(
                "{block_width}x{block_height} block at ({top}, {left}) exceeds \
                 raster dimensions {}x{}",
                self.width, self.height
            )));
        }
        Ok(())
    }
}

fn validate_dimensions(width: usize, height: usize) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(invalid_raster(&format!(
            "dimensions {width}x{height} must both be at least 1"
        )));
    }
    Ok(())
}
