//! Error types
//!
//! The free pagination functions are total and never return these; they
//! surface only through [`crate::Paginator`] and [`crate::reassemble`].

use thiserror::Error;

/// Pagination errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PaginateError {
    /// A single word cannot fit in a chunk, even alone
    #[error("word {index} is {byte_len} bytes and cannot fit in a {capacity}-byte chunk")]
    WordTooLong {
        /// Zero-based position of the word in the message
        index: usize,
        /// Byte length of the word in UTF-8
        byte_len: usize,
        /// Room left for the word once the marker is charged
        capacity: usize,
    },

    /// Configuration error
    #[error("invalid configuration: {0}")]
    Config(String),
}

/// Reassembly errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReassemblyError {
    /// Nothing to reassemble
    #[error("no chunks to reassemble")]
    Empty,

    /// A chunk in a multi-part set has no `[k/N]` marker
    #[error("chunk at position {position} has no part marker")]
    Unmarked {
        /// Position of the offending chunk in the input
        position: usize,
    },

    /// Chunks disagree about the total part count
    #[error("part count mismatch: expected {expected}, found {found}")]
    TotalMismatch {
        /// Total announced by the first marked chunk
        expected: usize,
        /// Total announced by a later chunk
        found: usize,
    },

    /// A marker index lies outside `1..=total`
    #[error("part {index} is out of range for {total} parts")]
    IndexOutOfRange {
        /// Announced part index
        index: usize,
        /// Announced part total
        total: usize,
    },

    /// Two chunks claim the same part with different bodies
    #[error("conflicting copies of part {index}")]
    Conflict {
        /// The duplicated part index
        index: usize,
    },

    /// Some parts were never received
    #[error("missing parts: {missing:?}")]
    Missing {
        /// One-based indices of the absent parts
        missing: Vec<usize>,
    },
}

/// Result type for pagination operations
pub type Result<T> = std::result::Result<T, PaginateError>;
