//! Format constants and runtime configuration defaults

/// Magic token identifying a binary greyscale PGM file
pub const PGM_MAGIC: &str = "P5";

/// Comment line written after the magic token on encode
pub const ENCODER_COMMENT: &str = "# produced by tileshuffle";

/// Maximum sample value written on encode; anything else on decode is a warning
pub const MAX_SAMPLE_VALUE: u32 = 255;

/// Extension appended to per-move and summary output names
pub const RASTER_EXTENSION: &str = ".pgm";

/// Sample value rendered into the empty board slot
pub const EMPTY_SLOT_SAMPLE: u8 = 0;

/// Sample value pre-filled into mosaic cells with no frame
pub const MOSAIC_BACKGROUND: u8 = 255;

/// Fixed seed for reproducible shuffles
pub const DEFAULT_SEED: u64 = 42;
