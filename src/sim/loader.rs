//! Program Loader.
//!
//! A machine-code file holds one decimal integer per line. Line `i` becomes
//! memory word `i`; the resulting image initialises both instruction and
//! data memory.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::common::error::LoadError;

/// Parses a machine-code listing into a memory image.
///
/// Only the first whitespace-delimited token of each line is read, so
/// trailing text on a line is ignored.
///
/// # Errors
///
/// * [`LoadError::CapacityExceeded`] if there are more than `capacity` lines.
/// * [`LoadError::Parse`] if a line does not start with a decimal `i32`.
pub fn parse_program(text: &str, capacity: usize) -> Result<Vec<i32>, LoadError> {
    let mut image = Vec::new();
    for (address, line) in text.lines().enumerate() {
        if address >= capacity {
            return Err(LoadError::CapacityExceeded { capacity });
        }
        let word = line
            .split_whitespace()
            .next()
            .and_then(|tok| tok.parse::<i32>().ok())
            .ok_or_else(|| LoadError::Parse {
                address,
                text: line.to_string(),
            })?;
        image.push(word);
    }
    Ok(image)
}

/// Reads and parses a machine-code file.
///
/// # Errors
///
/// Returns [`LoadError::Open`] if the file cannot be read, otherwise the
/// errors of [`parse_program`].
pub fn load_program(path: impl AsRef<Path>, capacity: usize) -> Result<Vec<i32>, LoadError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| LoadError::Open {
        path: path.display().to_string(),
        source,
    })?;
    let image = parse_program(&text, capacity)?;
    debug!(path = %path.display(), words = image.len(), "program loaded");
    Ok(image)
}
