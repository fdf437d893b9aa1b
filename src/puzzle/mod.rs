//! Puzzle-board simulation
//!
//! This module contains the sliding-puzzle core:
//! - Tile ownership and pixel block storage
//! - Board state, move legality, and frame rendering
//! - Mosaic layout and composition of rendered frames

/// Board state, move selection, and frame rendering
pub mod board;
/// Mosaic layout arithmetic and frame composition
pub mod mosaic;
/// Fixed-size pixel blocks owned by board slots
pub mod tile;

pub use board::Board;
pub use tile::Tile;
