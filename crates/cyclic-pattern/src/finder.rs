//! Offset lookup for windows of a cyclic pattern
//!
//! The rank of a window in the odometer enumeration is the window read as a
//! base-26 number, so the offset is computed directly instead of by walking
//! the pattern.

use tracing::{debug, trace};

use crate::alphabet::{RADIX, is_valid_window};
use crate::error::{Error, Result};
use crate::word::WordSize;

/// Find the offset at which `pattern_to_match` starts in the pattern that
/// [`create_pattern`](crate::create_pattern) produces for a block size equal
/// to the window's length.
pub fn find_pattern_offset(pattern_to_match: &str) -> Result<usize> {
    locate(pattern_to_match.as_bytes(), || pattern_to_match.to_string())
}

/// Same as [`find_pattern_offset`] for raw bytes, e.g. a slice of a memory dump
pub fn find_bytes_offset(bytes: &[u8]) -> Result<usize> {
    locate(bytes, || String::from_utf8_lossy(bytes).into_owned())
}

/// Find the offset of a register value captured while the pattern filled memory.
///
/// The value is taken apart in little-endian order and only the low
/// `word.bytes()` bytes are used.
pub fn find_register_offset(value: u64, word: WordSize) -> Result<usize> {
    let bytes = value.to_le_bytes();
    debug!("Looking up {} register value 0x{:X}", word, value);
    find_bytes_offset(&bytes[..word.bytes()])
}

fn locate(window: &[u8], supplied: impl Fn() -> String) -> Result<usize> {
    if !is_valid_window(window) {
        return Err(Error::InvalidPattern {
            supplied_pattern: supplied(),
        });
    }

    let block_size = window.len();
    let overflow = || Error::OffsetOverflow {
        supplied_pattern: supplied(),
    };

    let mut rank: usize = 0;
    for &symbol in window {
        let digit = usize::from(symbol - b'A');
        rank = rank
            .checked_mul(RADIX)
            .and_then(|r| r.checked_add(digit))
            .ok_or_else(overflow)?;
    }
    trace!("Window rank: {} (block_size={})", rank, block_size);

    let offset = rank.checked_mul(block_size).ok_or_else(overflow)?;
    debug!("Pattern offset: {}", offset);
    Ok(offset)
}
