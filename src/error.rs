//! Error types for model construction and column coding.
//!
//! The frequency model itself never fails: its invariants are checked with
//! debug assertions. [`ModelError`] covers the outer surfaces where callers
//! hand in data that can be wrong.
//!
//! ## Error Categories
//!
//! | Category | Errors | Description |
//! |----------|--------|-------------|
//! | Prior | [`ZeroCount`], [`CountOverflow`] | Initial counts rejected by [`try_with_counts`] |
//! | Symbols | [`InvalidSymbol`] | Input byte has no symbol mapping |
//! | Columns | [`ColumnMismatch`], [`Truncated`] | Streams and lengths do not line up, or a stream ends early |
//!
//! ## Example
//!
//! ```rust
//! use base_model::{ModelError, NarrowModel};
//!
//! match NarrowModel::try_with_counts([4, 0, 1, 1]) {
//!     Ok(model) => println!("total = {}", model.summ_freq()),
//!     Err(ModelError::ZeroCount { symbol }) => eprintln!("symbol {} has no mass", symbol),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```
//!
//! [`ZeroCount`]: ModelError::ZeroCount
//! [`CountOverflow`]: ModelError::CountOverflow
//! [`InvalidSymbol`]: ModelError::InvalidSymbol
//! [`ColumnMismatch`]: ModelError::ColumnMismatch
//! [`Truncated`]: ModelError::Truncated
//! [`try_with_counts`]: crate::FrequencyModel::try_with_counts

use std::fmt;

/// Error type for fallible model and column operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// An initial count was zero.
    ///
    /// Every symbol must keep a non-zero probability, otherwise the coder
    /// would be handed an empty interval.
    ZeroCount {
        /// Index of the offending symbol (0-3).
        symbol: usize,
    },

    /// The initial counts do not fit the counter width.
    ///
    /// Both each count and their sum must be representable in the model's
    /// counter type (`u8` or `u16`).
    CountOverflow {
        /// Sum of the supplied counts.
        total: u64,
        /// Largest value the counter type can hold.
        max: u32,
    },

    /// A byte could not be mapped to a model symbol.
    InvalidSymbol(u8),

    /// Column decoding received a different number of streams and lengths.
    ColumnMismatch {
        /// Number of encoded streams.
        streams: usize,
        /// Number of expected column lengths.
        lengths: usize,
    },

    /// A column stream ran out before the requested symbols were decoded.
    Truncated {
        /// Symbols decoded when the input was exhausted.
        decoded: usize,
        /// Symbols requested.
        expected: usize,
    },
}

impl fmt::Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroCount { symbol } => {
                write!(f, "Initial count for symbol {} is zero", symbol)
            }
            Self::CountOverflow { total, max } => {
                write!(f, "Initial counts total {} exceeds counter maximum {}", total, max)
            }
            Self::InvalidSymbol(b) => write!(f, "Invalid symbol byte: 0x{:02x}", b),
            Self::ColumnMismatch { streams, lengths } => {
                write!(
                    f,
                    "Column mismatch: {} encoded streams but {} lengths",
                    streams, lengths
                )
            }
            Self::Truncated { decoded, expected } => {
                write!(
                    f,
                    "Column stream truncated after {} of {} symbols",
                    decoded, expected
                )
            }
        }
    }
}

impl std::error::Error for ModelError {}

/// Result alias for fallible model operations.
pub type Result<T> = std::result::Result<T, ModelError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            ModelError::ZeroCount { symbol: 2 }.to_string(),
            "Initial count for symbol 2 is zero"
        );
        assert_eq!(
            ModelError::InvalidSymbol(b'!').to_string(),
            "Invalid symbol byte: 0x21"
        );
        assert_eq!(
            ModelError::ColumnMismatch { streams: 3, lengths: 2 }.to_string(),
            "Column mismatch: 3 encoded streams but 2 lengths"
        );
        assert_eq!(
            ModelError::Truncated { decoded: 7, expected: 40 }.to_string(),
            "Column stream truncated after 7 of 40 symbols"
        );
    }
}
