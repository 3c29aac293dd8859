//! Prelude module for convenient imports
//!
//! ```
//! use cyclic_pattern::prelude::*;
//!
//! let pattern = create_pattern(16, DEFAULT_BLOCK_SIZE).unwrap();
//! assert_eq!(find_pattern_offset(&pattern[8..12]).unwrap(), 8);
//! ```

pub use crate::config::{PatternConfig, PatternConfigBuilder};
pub use crate::error::{Error, Result};
pub use crate::finder::{find_bytes_offset, find_pattern_offset, find_register_offset};
pub use crate::generator::{DEFAULT_BLOCK_SIZE, PatternSymbols, create_pattern};
pub use crate::word::WordSize;
