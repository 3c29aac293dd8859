use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(
        "The requested pattern size {requested_size} is larger than the maximum pattern size {max_size} using a block size of {block_size}"
    )]
    PatternTooLong {
        max_size: usize,
        requested_size: usize,
        block_size: usize,
    },

    #[error("The supplied pattern must match [A-Z]+. What was supplied was {supplied_pattern}")]
    InvalidPattern { supplied_pattern: String },

    #[error("Invalid block size: {0} (must be at least 1)")]
    InvalidBlockSize(usize),

    #[error("Block size mismatch: expected {expected}, got {actual}")]
    BlockSizeMismatch { expected: usize, actual: usize },

    #[error("Requested pattern size {requested_size} exceeds the configured limit of {limit}")]
    LimitExceeded { limit: usize, requested_size: usize },

    #[error("Offset of pattern {supplied_pattern} does not fit in usize")]
    OffsetOverflow { supplied_pattern: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if this error is a caller contract violation rather than a parse failure
    pub fn is_precondition(&self) -> bool {
        !matches!(self, Error::Json(_))
    }
}
