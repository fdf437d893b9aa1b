//! Binary PGM (P5) codec
//!
//! Decodes and encodes the whitespace-delimited header plus raw pixel block
//! format:
//!
//! ```text
//! P5
//! # optional comment lines
//! <width> <height>
//! <maxval>
//! <width * height raw bytes, row-major>
//! ```
//!
//! A maxval other than 255 is reported to stderr but decoding continues under
//! the single-byte-per-sample assumption. Short pixel blocks are reported as
//! errors, never silently zero-filled.

use crate::io::configuration::{ENCODER_COMMENT, MAX_SAMPLE_VALUE, PGM_MAGIC};
use crate::io::error::{PuzzleError, Result};
use crate::raster::Raster;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

/// Decode a binary PGM file into a raster
///
/// # Errors
///
/// Returns an error if the file cannot be opened, the magic token is not
/// `P5`, the width/height/maxval fields are absent or unparseable, or the
/// pixel block holds fewer than `width * height` bytes.
pub fn decode(path: &Path) -> Result<Raster> {
    let file = File::open(path).map_err(|e| PuzzleError::FileSystem {
        path: path.to_path_buf(),
        operation: "open for read",
        source: e,
    })?;
    let mut reader = BufReader::new(file);

    let magic = next_token(&mut reader, path)?;
    if magic != PGM_MAGIC {
        return Err(PuzzleError::MalformedHeader {
            path: path.to_path_buf(),
            reason: format!("magic token is '{magic}', expected '{PGM_MAGIC}'"),
        });
    }

    let width = parse_dimension(&mut reader, path, "width")?;
    let height = parse_dimension(&mut reader, path, "height")?;

    let maxval_token = next_token(&mut reader, path)?;
    let maxval: u32 = maxval_token
        .parse()
        .map_err(|_| PuzzleError::MalformedHeader {
            path: path.to_path_buf(),
            reason: format!("maximum sample value is '{maxval_token}', expected an integer"),
        })?;
    if maxval != MAX_SAMPLE_VALUE {
        // Decoding continues byte-per-sample; the caller is warned, not failed
        #[allow(clippy::print_stderr)]
        {
            eprintln!(
                "Warning: '{}' declares maximum sample value {maxval}, \
                 expected {MAX_SAMPLE_VALUE}; decoding byte-per-sample anyway",
                path.display()
            );
        }
    }

    // The tokenizer consumed the single whitespace byte after maxval, so the
    // binary block starts here
    let expected = width * height;
    let mut pixels = vec![0u8; expected];
    reader
        .read_exact(&mut pixels)
        .map_err(|e| PuzzleError::ShortPixelRead {
            path: path.to_path_buf(),
            expected,
            source: e,
        })?;

    Raster::from_vec(pixels, width, height)
}

/// Encode a raster as a binary PGM file
///
/// Writes the magic token, a producer comment, the dimensions, a maxval of
/// 255, and the raw pixel block. An invalid raster cannot be constructed, so
/// no partial file is ever produced from one.
///
/// # Errors
///
/// Returns an error if the destination cannot be opened or any write fails.
pub fn encode(raster: &Raster, path: &Path) -> Result<()> {
    let file = File::create(path).map_err(|e| PuzzleError::FileSystem {
        path: path.to_path_buf(),
        operation: "open for write",
        source: e,
    })?;
    let mut writer = BufWriter::new(file);

    write!(
        writer,
        "{PGM_MAGIC}\n{ENCODER_COMMENT}\n{} {}\n{MAX_SAMPLE_VALUE}\n",
        raster.width(),
        raster.height()
    )
    .map_err(|e| PuzzleError::FileSystem {
        path: path.to_path_buf(),
        operation: "write header",
        source: e,
    })?;

    writer
        .write_all(raster.pixels())
        .map_err(|e| PuzzleError::FileSystem {
            path: path.to_path_buf(),
            operation: "write pixel block",
            source: e,
        })?;

    writer.flush().map_err(|e| PuzzleError::FileSystem {
        path: path.to_path_buf(),
        operation: "flush",
        source: e,
    })
}

/// Read the next whitespace-delimited header token, skipping `#` comments
///
/// Consumes exactly one whitespace byte after the token, which is what
/// delimits the maxval field from the binary pixel block.
fn next_token<R: Read>(reader: &mut R, path: &Path) -> Result<String> {
    let mut token = Vec::new();
    let mut in_comment = false;

    loop {
        let Some(byte) = read_byte(reader, path)? else {
            if token.is_empty() {
                return Err(PuzzleError::MalformedHeader {
                    path: path.to_path_buf(),
                    reason: "header ended before all fields were read".to_string(),
                });
            }
            break;
        };

        if in_comment {
            in_comment = byte != b'\n';
            continue;
        }
        if byte == b'#' && token.is_empty() {
            in_comment = true;
            continue;
        }
        if byte.is_ascii_whitespace() {
            if token.is_empty() {
                continue;
            }
            break;
        }
        token.push(byte);
    }

    String::from_utf8(token).map_err(|_| PuzzleError::MalformedHeader {
        path: path.to_path_buf(),
        reason: "header contains non-UTF-8 bytes".to_string(),
    })
}

fn parse_dimension<R: Read>(reader: &mut R, path: &Path, field: &str) -> Result<usize> {
    let token = next_token(reader, path)?;
    match token.parse::<usize>() {
        Ok(value) if value >= 1 => Ok(value),
        _ => Err(PuzzleError::MalformedHeader {
            path: path.to_path_buf(),
            reason: format!("{field} is '{token}', expected a positive integer"),
        }),
    }
}

fn read_byte<R: Read>(reader: &mut R, path: &Path) -> Result<Option<u8>> {
    let mut byte = [0u8; 1];
    loop {
        match reader.read(&mut byte) {
            Ok(0) => return Ok(None),
            Ok(_) => return Ok(byte.first().copied()),
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => {}
            Err(e) => {
                return Err(PuzzleError::FileSystem {
                    path: path.to_path_buf(),
                    operation: "read header",
                    source: e,
                });
            }
        }
    }
}
