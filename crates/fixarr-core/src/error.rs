//! Error types for array operations.
//!
//! Every variant belongs to one of two [`ErrorKind`]s: the allocator could
//! not provide the requested buffer, or the caller passed an argument the
//! operation cannot honour. No boundary condition is a silent no-op.

use thiserror::Error;

/// Coarse classification of an [`ArrayError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A memory request could not be satisfied.
    AllocationFailure,
    /// An index, length or element count was outside the valid range.
    InvalidArgument,
}

/// Errors that can occur during array operations.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ArrayError {
    /// The allocator refused a request for `requested` slots.
    #[error("memory allocation failed: requested {requested} slots")]
    AllocationFailed {
        /// Number of slots requested.
        requested: usize,
    },
    /// The requested capacity is above the array's configured limit.
    #[error("capacity exceeded: requested {requested} slots, limit {max_capacity} slots")]
    CapacityExceeded {
        /// Number of slots requested.
        requested: usize,
        /// Largest capacity the array may hold.
        max_capacity: usize,
    },
    /// `len + extension` does not fit in a `usize`.
    #[error("capacity overflow: length {len} + extension {extension}")]
    CapacityOverflow {
        /// Logical length at the time of the grow.
        len: usize,
        /// Requested number of extra slots.
        extension: usize,
    },
    /// An index outside the range the operation accepts.
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// Logical length at the time of the call.
        len: usize,
    },
    /// Insertion into an array with no free trailing slot.
    #[error("array is full: capacity {capacity}")]
    Full {
        /// Capacity of the full array.
        capacity: usize,
    },
    /// Random access into an array with no logical elements.
    #[error("array is empty")]
    Empty,
    /// More initial values than the requested capacity can hold.
    #[error("{count} values do not fit in capacity {capacity}")]
    TooManyElements {
        /// Number of values supplied.
        count: usize,
        /// Capacity requested for them.
        capacity: usize,
    },
}

impl ArrayError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::AllocationFailed { .. }
            | Self::CapacityExceeded { .. }
            | Self::CapacityOverflow { .. } => ErrorKind::AllocationFailure,
            Self::IndexOutOfRange { .. }
            | Self::Full { .. }
            | Self::Empty
            | Self::TooManyElements { .. } => ErrorKind::InvalidArgument,
        }
    }
}
