use thiserror::Error;

/// Error types for `NulBuf` operations
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum NulBufError {
    /// A null pointer was passed where a terminated byte sequence is required
    #[error("Invalid argument: {operation} received a null pointer")]
    InvalidArgument {
        /// Name of the operation that rejected the input
        operation: &'static str,
    },
    /// Checked access past the logical length
    #[error("Index out of range: index {index} is not below length {length}")]
    OutOfRange {
        /// Index that was accessed
        index: usize,
        /// Current length of the buffer
        length: usize,
    },
    /// The global heap refused the request
    #[error("Allocation failure: could not obtain {requested} bytes")]
    AllocationFailure {
        /// Number of bytes requested, terminator slot included
        requested: usize,
    },
    /// Requested capacity plus the terminator slot does not fit in `usize`
    #[error("Capacity overflow: capacity {requested} cannot be represented with a terminator slot")]
    CapacityOverflow {
        /// Capacity that was requested, or the current length when growing
        /// the length itself overflows
        requested: usize,
    },
    /// A caller-provided destination is too small for a terminated copy
    #[error("Insufficient space: {required} bytes required, but only {available} bytes available")]
    InsufficientSpace {
        /// Bytes needed, terminator included
        required: usize,
        /// Bytes the destination can hold
        available: usize,
    },
}

impl NulBufError {
    /// True for both heap refusal and capacity arithmetic overflow.
    #[must_use]
    pub fn is_allocation_failure(&self) -> bool {
        matches!(
            self,
            NulBufError::AllocationFailure { .. } | NulBufError::CapacityOverflow { .. }
        )
    }
}
