//! Errors returned by the sorter.

use thiserror::Error;

/// Boxed error produced by a caller-supplied key projection.
pub type KeySourceError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, Error)]
/// Errors returned by [`RadixSorter`](crate::RadixSorter).
pub enum SortError {
    /// The key projection failed for the element at `index`.
    #[error("invalid key for element {index}: {source}")]
    InvalidKey {
        /// Input position of the offending element.
        index: usize,
        /// Error reported by the projection.
        #[source]
        source: KeySourceError,
    },
    /// A fixed digit width outside the supported range.
    #[error("digit width must be between 1 and {max} bits, got {bits}")]
    InvalidDigitWidth { bits: u32, max: u32 },
}

/// Result alias for sorter operations.
pub type Result<T> = std::result::Result<T, SortError>;
