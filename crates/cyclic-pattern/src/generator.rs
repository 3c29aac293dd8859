//! Cyclic pattern generation
//!
//! A pattern is the concatenation of every `block_size`-wide tuple over the
//! alphabet in odometer order (rightmost position varies fastest), cut to
//! the requested length:
//!
//! ```text
//! AAAA AAAB AAAC ... AAAZ AABA AABB ...
//! ```
//!
//! No aligned window repeats until all `26^block_size` blocks are used.

use std::iter::FusedIterator;

use tracing::debug;

use crate::alphabet::{ALPHABET, RADIX, max_pattern_size};
use crate::error::{Error, Result};

/// Block size used when the caller has no preference (one DWORD)
pub const DEFAULT_BLOCK_SIZE: usize = 4;

/// Lazy iterator over the symbols of a full cyclic pattern.
///
/// Yields `block_size * 26^block_size` symbols and then ends. Only the
/// digits that have moved off `A` are stored, so memory grows with the
/// number of blocks emitted rather than with the block size.
#[derive(Debug, Clone)]
pub struct PatternSymbols {
    block_size: usize,
    /// Odometer digits, least significant first
    digits: Vec<usize>,
    pos: usize,
    exhausted: bool,
}

impl PatternSymbols {
    pub fn new(block_size: usize) -> Result<Self> {
        if block_size == 0 {
            return Err(Error::InvalidBlockSize(block_size));
        }

        Ok(Self {
            block_size,
            digits: vec![0],
            pos: 0,
            exhausted: false,
        })
    }

    pub fn block_size(&self) -> usize {
        self.block_size
    }

    /// Digit shown at position `pos` of the current block
    fn digit_at(&self, pos: usize) -> usize {
        let significance = self.block_size - 1 - pos;
        self.digits.get(significance).copied().unwrap_or(0)
    }

    /// Step the odometer to the next block. Marks the iterator exhausted
    /// when the leftmost digit rolls over.
    fn advance_block(&mut self) {
        for digit in self.digits.iter_mut() {
            *digit += 1;
            if *digit < RADIX {
                return;
            }
            *digit = 0;
        }

        if self.digits.len() < self.block_size {
            self.digits.push(1);
        } else {
            self.exhausted = true;
        }
    }
}

impl Iterator for PatternSymbols {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        if self.exhausted {
            return None;
        }

        let symbol = char::from(ALPHABET[self.digit_at(self.pos)]);
        self.pos += 1;
        if self.pos == self.block_size {
            self.pos = 0;
            self.advance_block();
        }

        Some(symbol)
    }
}

impl FusedIterator for PatternSymbols {}

/// Generate a cyclic pattern of exactly `pattern_len` symbols.
///
/// Fails with [`Error::PatternTooLong`] when `pattern_len` exceeds
/// `26^block_size`, and with [`Error::InvalidBlockSize`] for a zero block size.
pub fn create_pattern(pattern_len: usize, block_size: usize) -> Result<String> {
    let symbols = PatternSymbols::new(block_size)?;

    let max_size = max_pattern_size(block_size);
    if pattern_len > max_size {
        return Err(Error::PatternTooLong {
            max_size,
            requested_size: pattern_len,
            block_size,
        });
    }

    debug!(
        "Generating pattern: length={}, block_size={}",
        pattern_len, block_size
    );

    if pattern_len == 0 {
        return Ok(String::new());
    }

    let mut pattern = String::with_capacity(pattern_len);
    pattern.extend(symbols.take(pattern_len));
    Ok(pattern)
}
