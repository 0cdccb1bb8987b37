//! Error types for heap operations

use thiserror::Error;

/// Error type for heap operations
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// The target index is past the end of the backing sequence.
    ///
    /// Recoverable: the heap is unchanged and the caller may retry with a
    /// valid index.
    #[error("index {index} is larger than heap size, cannot set value {value}")]
    OutOfRange {
        /// The index that was requested.
        index: usize,
        /// The value the caller attempted to store.
        value: i64,
    },

    /// A parent/child value ordering was violated after a mutation.
    ///
    /// This is a structural-corruption signal. The heap does not repair
    /// itself past this point; the caller decides whether to abort or
    /// rebuild.
    #[error("heap invariant violated for node at {parent} by child at {child}")]
    InvariantViolation {
        /// Index of the parent node whose ordering was violated.
        parent: usize,
        /// Index of the child carrying the larger value.
        child: usize,
    },
}
