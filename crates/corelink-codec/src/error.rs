//! Error types for record packing

use thiserror::Error;

/// Result type alias for codec operations
pub type Result<T> = std::result::Result<T, CodecError>;

/// Invalid arguments to encode/decode
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// Byte budget or character count is not a positive multiple of 4
    #[error("Invalid byte budget {budget}: must be a positive multiple of 4")]
    InvalidBudget {
        /// Requested budget
        budget: usize,
    },

    /// Text does not fit the budget
    #[error("Text of {len} characters exceeds byte budget {budget}")]
    TextTooLong {
        /// Characters in the text
        len: usize,
        /// Byte budget
        budget: usize,
    },

    /// Fewer words than the requested character count needs
    #[error("Record holds {words} words, {needed} needed")]
    ShortRecord {
        /// Words supplied
        words: usize,
        /// Words required
        needed: usize,
    },

    /// Raw buffer length is not a whole number of words
    #[error("Buffer of {len} bytes is not a whole number of 32-bit words")]
    MisalignedBuffer {
        /// Buffer length in bytes
        len: usize,
    },
}
