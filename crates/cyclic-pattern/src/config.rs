//! Pattern configuration
//!
//! # Example
//!
//! ```
//! use cyclic_pattern::{PatternConfig, WordSize};
//!
//! let config = PatternConfig::builder()
//!     .block_size(WordSize::Qword.block_size())
//!     .max_pattern_len(4096)
//!     .build();
//!
//! let pattern = config.create_pattern(64).unwrap();
//! assert_eq!(config.find_offset(&pattern[16..24]).unwrap(), 16);
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::alphabet::max_pattern_size;
use crate::error::{Error, Result};
use crate::finder::find_pattern_offset;
use crate::generator::{DEFAULT_BLOCK_SIZE, create_pattern};
use crate::word::WordSize;

/// Settings shared by generation and lookup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatternConfig {
    /// Window width in symbols
    pub block_size: usize,
    /// Upper bound on generated lengths, on top of the alphabet capacity
    pub max_pattern_len: Option<usize>,
}

impl Default for PatternConfig {
    fn default() -> Self {
        Self {
            block_size: DEFAULT_BLOCK_SIZE,
            max_pattern_len: None,
        }
    }
}

impl PatternConfig {
    /// Create a new configuration builder
    pub fn builder() -> PatternConfigBuilder {
        PatternConfigBuilder::default()
    }

    pub fn for_word(word: WordSize) -> Self {
        Self {
            block_size: word.block_size(),
            ..Self::default()
        }
    }

    /// Parse a configuration from a JSON document; missing fields take defaults
    pub fn from_json(content: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.block_size == 0 {
            return Err(Error::InvalidBlockSize(self.block_size));
        }
        Ok(())
    }

    /// Largest length the alphabet can supply for this block size
    pub fn max_pattern_size(&self) -> usize {
        max_pattern_size(self.block_size)
    }

    /// Generate a pattern with this configuration's block size and limit
    pub fn create_pattern(&self, pattern_len: usize) -> Result<String> {
        self.validate()?;

        if let Some(limit) = self.max_pattern_len.filter(|&limit| pattern_len > limit) {
            debug!(
                "Rejecting pattern request: {} exceeds limit {}",
                pattern_len, limit
            );
            return Err(Error::LimitExceeded {
                limit,
                requested_size: pattern_len,
            });
        }

        create_pattern(pattern_len, self.block_size)
    }

    /// Look up a window, requiring it to be exactly one block wide
    pub fn find_offset(&self, pattern_to_match: &str) -> Result<usize> {
        self.validate()?;

        let actual = pattern_to_match.len();
        if actual != self.block_size {
            return Err(Error::BlockSizeMismatch {
                expected: self.block_size,
                actual,
            });
        }

        find_pattern_offset(pattern_to_match)
    }
}

/// Builder for PatternConfig
#[derive(Debug, Clone, Default)]
pub struct PatternConfigBuilder {
    block_size: Option<usize>,
    max_pattern_len: Option<usize>,
}

impl PatternConfigBuilder {
    /// Set the window width
    pub fn block_size(mut self, block_size: usize) -> Self {
        self.block_size = Some(block_size);
        self
    }

    /// Set the block size from a register width
    pub fn word_size(mut self, word: WordSize) -> Self {
        self.block_size = Some(word.block_size());
        self
    }

    /// Cap generated lengths
    pub fn max_pattern_len(mut self, limit: usize) -> Self {
        self.max_pattern_len = Some(limit);
        self
    }

    /// Build the configuration
    pub fn build(self) -> PatternConfig {
        let default = PatternConfig::default();
        PatternConfig {
            block_size: self.block_size.unwrap_or(default.block_size),
            max_pattern_len: self.max_pattern_len.or(default.max_pattern_len),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PatternConfig::default();
        assert_eq!(config.block_size, 4);
        assert_eq!(config.max_pattern_len, None);
        assert_eq!(config.max_pattern_size(), 456_976);
    }

    #[test]
    fn test_builder() {
        let config = PatternConfig::builder()
            .word_size(WordSize::Qword)
            .max_pattern_len(1024)
            .build();
        assert_eq!(config.block_size, 8);
        assert_eq!(config.max_pattern_len, Some(1024));

        let config = PatternConfig::builder().block_size(2).build();
        assert_eq!(config.block_size, 2);
        assert_eq!(config.max_pattern_len, None);
    }

    #[test]
    fn test_for_word() {
        assert_eq!(PatternConfig::for_word(WordSize::Dword), PatternConfig::default());
        assert_eq!(PatternConfig::for_word(WordSize::Qword).block_size, 8);
    }

    #[test]
    fn test_from_json_defaults() {
        let config = PatternConfig::from_json("{}").unwrap();
        assert_eq!(config, PatternConfig::default());

        let config = PatternConfig::from_json(r#"{"block_size": 8, "max_pattern_len": 512}"#).unwrap();
        assert_eq!(config.block_size, 8);
        assert_eq!(config.max_pattern_len, Some(512));
    }

    #[test]
    fn test_from_json_errors() {
        assert!(matches!(
            PatternConfig::from_json(r#"{"block_size": 0}"#),
            Err(Error::InvalidBlockSize(0))
        ));
        assert!(matches!(
            PatternConfig::from_json("not json"),
            Err(Error::Json(_))
        ));
    }

    #[test]
    fn test_create_pattern_respects_limit() {
        let config = PatternConfig::builder().max_pattern_len(16).build();
        assert_eq!(config.create_pattern(16).unwrap().len(), 16);
        match config.create_pattern(17) {
            Err(Error::LimitExceeded {
                limit,
                requested_size,
            }) => {
                assert_eq!(limit, 16);
                assert_eq!(requested_size, 17);
            }
            other => panic!("Expected LimitExceeded, got {:?}", other),
        }
    }

    #[test]
    fn test_create_pattern_capacity_still_applies() {
        let config = PatternConfig::builder()
            .block_size(1)
            .max_pattern_len(1000)
            .build();
        assert!(matches!(
            config.create_pattern(27),
            Err(Error::PatternTooLong { max_size: 26, .. })
        ));
    }

    #[test]
    fn test_find_offset_checks_block_size() {
        let config = PatternConfig::default();
        assert_eq!(config.find_offset("AAAB").unwrap(), 4);
        assert!(matches!(
            config.find_offset("AAB"),
            Err(Error::BlockSizeMismatch {
                expected: 4,
                actual: 3
            })
        ));
    }

    #[test]
    fn test_find_offset_rejects_zero_block_size() {
        let config = PatternConfig::builder().block_size(0).build();
        assert!(matches!(
            config.find_offset(""),
            Err(Error::InvalidBlockSize(0))
        ));
        assert!(matches!(
            config.create_pattern(4),
            Err(Error::InvalidBlockSize(0))
        ));
    }

    #[test]
    fn test_round_trip_through_config() {
        let config = PatternConfig::for_word(WordSize::Qword);
        let pattern = config.create_pattern(8 * 200).unwrap();
        for k in (0..pattern.len()).step_by(8 * 13) {
            assert_eq!(config.find_offset(&pattern[k..k + 8]).unwrap(), k);
        }
    }
}
