//! Puzzle-board simulation with seeded random move selection
//!
//! The board is a square grid of tile slots with exactly one slot empty.
//! Moves exchange the empty slot with an orthogonal neighbour, rejecting the
//! exact inverse of the previous move so the shuffle never undoes itself on
//! the very next step. This one-step rule deliberately does not prevent
//! longer cycles returning to an earlier configuration.

use crate::io::configuration::{EMPTY_SLOT_SAMPLE, RASTER_EXTENSION};
use crate::io::error::{PuzzleError, Result, invalid_parameter};
use crate::io::pgm;
use crate::puzzle::tile::Tile;
use crate::raster::Raster;
use ndarray::Array2;
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::path::PathBuf;

/// The four orthogonal directions a tile may slide, as (drow, dcol) applied
/// to the empty slot
pub const MOVE_DELTAS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// An N x N grid of tile slots with exactly one empty slot
///
/// Constructed with all slots empty, populated once from a source raster,
/// then mutated move-by-move. The random source is seeded at construction so
/// move sequences are reproducible.
pub struct Board {
    size: usize,
    tile_width: usize,
    tile_height: usize,
    slots: Array2<Option<Tile>>,
    empty: (usize, usize),
    last_delta: Option<(isize, isize)>,
    rng: StdRng,
}

impl Board {
    /// Create a board with all slots empty and a seeded random source
    ///
    /// # Errors
    ///
    /// Returns an error if the grid dimension or either tile extent is zero.
    pub fn new(size: usize, tile_width: usize, tile_height: usize, seed: u64) -> Result<Self> {
        if size == 0 {
            return Err(invalid_parameter(
                "size",
                &size,
                &"grid dimension must be at least 1",
            ));
        }
        if tile_width == 0 || tile_height == 0 {
            return Err(invalid_parameter(
                "tile dimensions",
                &format!("{tile_width}x{tile_height}"),
                &"tile extents must both be at least 1",
            ));
        }

        Ok(Self {
            size,
            tile_width,
            tile_height,
            slots: Array2::from_elem((size, size), None),
            empty: (size - 1, size - 1),
            last_delta: None,
            rng: StdRng::seed_from_u64(seed),
        })
    }

    /// Populate every slot except the bottom-right from a source raster
    ///
    /// Each tile copies its pixel block from the source at offset
    /// `(row * tile_height, col * tile_width)`. The bottom-right slot is the
    /// designated empty slot.
    ///
    /// # Errors
    ///
    /// Returns an error if the tile grid does not fit inside the source
    /// raster dimensions.
    pub fn initialize(&mut self, source: &Raster) -> Result<()> {
        if self.size * self.tile_width > source.width()
            || self.size * self.tile_height > source.height()
        {
            return Err(PuzzleError::GridOversized {
                size: self.size,
                tile_width: self.tile_width,
                tile_height: self.tile_height,
                image_width: source.width(),
                image_height: source.height(),
            });
        }

        for row in 0..self.size {
            for col in 0..self.size {
                if (row, col) == (self.size - 1, self.size - 1) {
                    continue;
                }

                let block = source.extract_block(
                    row * self.tile_height,
                    col * self.tile_width,
                    self.tile_width,
                    self.tile_height,
                )?;
                let mut tile = Tile::new(self.tile_width, self.tile_height);
                tile.set_pixels(&block)?;

                if let Some(slot) = self.slots.get_mut((row, col)) {
                    *slot = Some(tile);
                }
            }
        }

        self.empty = (self.size - 1, self.size - 1);
        self.last_delta = None;
        Ok(())
    }

    /// Slide one tile into the empty slot, chosen uniformly at random
    ///
    /// Candidate directions are the orthogonal neighbours of the empty slot
    /// that stay in bounds, minus the exact inverse of the previous move.
    /// Returns the applied (drow, dcol).
    ///
    /// # Errors
    ///
    /// Returns [`PuzzleError::NoLegalMove`] when no candidate exists, which
    /// only happens on a 1x1 board.
    pub fn apply_random_move(&mut self) -> Result<(isize, isize)> {
        let (empty_row, empty_col) = self.empty;

        let mut candidates: Vec<(isize, isize)> = Vec::with_capacity(MOVE_DELTAS.len());
        for (drow, dcol) in MOVE_DELTAS {
            let row = empty_row as isize + drow;
            let col = empty_col as isize + dcol;
            if row < 0 || col < 0 || row >= self.size as isize || col >= self.size as isize {
                continue;
            }
            if self.last_delta == Some((-drow, -dcol)) {
                continue;
            }
            candidates.push((drow, dcol));
        }

        if candidates.is_empty() {
            return Err(PuzzleError::NoLegalMove {
                position: self.empty,
            });
        }

        let index = self.rng.random_range(0..candidates.len());
        let (drow, dcol) = candidates.swap_remove(index);
        let target = (
            (empty_row as isize + drow) as usize,
            (empty_col as isize + dcol) as usize,
        );

        // Ownership exchange: the neighbour tile moves into the vacated slot
        self.slots.swap(self.empty, target);
        self.empty = target;
        self.last_delta = Some((drow, dcol));
        Ok((drow, dcol))
    }

    /// Render the current board configuration as a raster
    ///
    /// Every occupied slot copies its tile block to the slot's sub-rectangle;
    /// the empty slot stays black.
    ///
    /// # Errors
    ///
    /// Returns an error if the frame raster cannot be allocated, which only
    /// happens for zero extents ruled out at construction.
    pub fn render(&self) -> Result<Raster> {
        let mut frame = Raster::filled(self.frame_width(), self.frame_height(), EMPTY_SLOT_SAMPLE)?;

        for ((row, col), slot) in self.slots.indexed_iter() {
            if let Some(tile) = slot {
                frame.insert_block(
                    row * self.tile_height,
                    col * self.tile_width,
                    self.tile_width,
                    self.tile_height,
                    tile.pixels(),
                )?;
            }
        }
        Ok(frame)
    }

    /// Render the board and encode it to `<base_name><move_number>.pgm`
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails or the file cannot be written.
    pub fn save_state(&self, base_name: &str, move_number: usize) -> Result<PathBuf> {
        let path = PathBuf::from(format!("{base_name}{move_number}{RASTER_EXTENSION}"));
        pgm::encode(&self.render()?, &path)?;
        Ok(path)
    }

    /// Grid dimension (the board is `size` x `size` slots)
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Tile width in pixels
    pub const fn tile_width(&self) -> usize {
        self.tile_width
    }

    /// Tile height in pixels
    pub const fn tile_height(&self) -> usize {
        self.tile_height
    }

    /// Width of a rendered frame in pixels
    pub const fn frame_width(&self) -> usize {
        self.size * self.tile_width
    }

    /// Height of a rendered frame in pixels
    pub const fn frame_height(&self) -> usize {
        self.size * self.tile_height
    }

    /// Position (row, col) of the currently empty slot
    pub const fn empty_position(&self) -> (usize, usize) {
        self.empty
    }

    /// The (drow, dcol) of the most recently applied move, if any
    pub const fn last_move(&self) -> Option<(isize, isize)> {
        self.last_delta
    }

    /// Number of slots currently holding a tile
    pub fn tile_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Pixel samples of the tile at (row, col), if that slot is occupied
    pub fn tile_pixels(&self, row: usize, col: usize) -> Option<&[u8]> {
        self.slots
            .get((row, col))
            .and_then(|slot| slot.as_ref().map(Tile::pixels))
    }
}
