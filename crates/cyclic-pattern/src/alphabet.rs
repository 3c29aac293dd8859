//! Symbol alphabet shared by pattern generation and offset lookup
//!
//! Patterns are built from the 26 uppercase ASCII letters. A block of
//! `block_size` symbols is read as a base-26 number with `A` as the zero
//! digit, which is what makes rank computation a plain radix conversion.

/// Ordered pattern alphabet
pub const ALPHABET: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Number of distinct symbols (the radix of a block)
pub const RADIX: usize = ALPHABET.len();

/// Digit value of a symbol, or `None` if it is outside the alphabet
pub fn symbol_index(symbol: u8) -> Option<usize> {
    symbol
        .is_ascii_uppercase()
        .then(|| usize::from(symbol - b'A'))
}

/// Check that every byte is an alphabet symbol and there is at least one
pub fn is_valid_window(bytes: &[u8]) -> bool {
    !bytes.is_empty() && bytes.iter().all(u8::is_ascii_uppercase)
}

/// Number of distinct blocks of the given size: `26^block_size`
///
/// Returns `None` when the count does not fit in `usize`.
pub fn block_count(block_size: usize) -> Option<usize> {
    let exp = u32::try_from(block_size).ok()?;
    RADIX.checked_pow(exp)
}

/// Largest pattern length `create_pattern` accepts for a block size.
///
/// Saturates at `usize::MAX`, since no representable request can exceed a
/// capacity that large.
pub fn max_pattern_size(block_size: usize) -> usize {
    block_count(block_size).unwrap_or(usize::MAX)
}
