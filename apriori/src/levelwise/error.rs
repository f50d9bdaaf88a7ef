use thiserror::Error;

/// Failure of a single mining call. No partial result accompanies it.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MiningError {
    #[error("min_support must lie within [0, 1], got {value}")]
    InvalidSupport { value: f64 },
}

/// Failure while reading receipts.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("line {line}: expected `[item, ...]`, got {content:?}")]
    Malformed { line: usize, content: String },
    #[error("failed to read receipts: {0}")]
    Io(#[from] std::io::Error),
}

/// Rejects thresholds outside `[0, 1]`.
pub fn validate_support(min_support: f64) -> Result<(), MiningError> {
    // NaN fails the range check as well.
    if (0.0..=1.0).contains(&min_support) {
        Ok(())
    } else {
        Err(MiningError::InvalidSupport { value: min_support })
    }
}
