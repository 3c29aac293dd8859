//! # cyclic-pattern
//!
//! Generate and reverse cyclic patterns for locating overflow offsets.
//!
//! This crate provides:
//! - Pattern generation over the `A..=Z` alphabet with a configurable block size
//! - Offset lookup for a captured window, computed without building the pattern
//! - Register lookups for values captured as little-endian DWORDs/QWORDs
//!
//! ```
//! let pattern = cyclic_pattern::create_pattern(8, 4).unwrap();
//! assert_eq!(pattern, "AAAAAAAB");
//! assert_eq!(cyclic_pattern::find_pattern_offset("AAAB").unwrap(), 4);
//! ```

pub mod alphabet;
pub mod config;
pub mod error;
pub mod finder;
pub mod generator;
pub mod prelude;
pub mod word;

pub use alphabet::{ALPHABET, max_pattern_size};
pub use config::{PatternConfig, PatternConfigBuilder};
pub use error::{Error, Result};
pub use finder::{find_bytes_offset, find_pattern_offset, find_register_offset};
pub use generator::{DEFAULT_BLOCK_SIZE, PatternSymbols, create_pattern};
pub use word::WordSize;
