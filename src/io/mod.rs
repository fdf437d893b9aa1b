//! Input/output operations and error handling

/// Command-line interface and run orchestration
pub mod cli;
/// Format constants and runtime configuration defaults
pub mod configuration;
/// Error types and result alias
pub mod error;
/// Binary PGM (P5) decode/encode
pub mod pgm;
/// Progress reporting for the move loop
pub mod progress;
