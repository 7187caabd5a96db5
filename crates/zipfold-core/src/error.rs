//! Error types for zipfold arrays.
//!
//! Allocation is the only fallible step in the engine: every operator that
//! produces a new buffer reserves it up front and reports failure here
//! instead of aborting. Callback contracts (element types, arity) are
//! enforced by the type system and have no runtime error.

use std::collections::TryReserveError;
use std::error::Error;
use std::fmt;

/// Errors from buffer allocation inside an array operator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArrayError {
    /// The allocator could not provide the requested buffer, or the
    /// requested byte count does not fit in `usize`.
    OutOfMemory {
        /// Size of the buffer that was requested, in bytes. Saturates at
        /// `usize::MAX` when the computation overflowed.
        requested_bytes: usize,
    },
    /// The requested buffer is larger than the configured ceiling
    /// ([`ArrayConfig::max_bytes`](crate::ArrayConfig::max_bytes)).
    CapacityExceeded {
        /// Size of the buffer that was requested, in bytes.
        requested_bytes: usize,
        /// The configured ceiling, in bytes.
        limit_bytes: usize,
    },
}

impl ArrayError {
    /// Build an [`ArrayError::OutOfMemory`] from a failed reservation.
    ///
    /// `TryReserveError` does not expose the layout it failed on, so the
    /// byte count is supplied by the caller.
    pub fn from_reserve(requested_bytes: usize, _err: TryReserveError) -> Self {
        Self::OutOfMemory { requested_bytes }
    }

    /// Number of bytes the failing allocation asked for.
    pub fn requested_bytes(&self) -> usize {
        match self {
            Self::OutOfMemory { requested_bytes }
            | Self::CapacityExceeded {
                requested_bytes, ..
            } => *requested_bytes,
        }
    }
}

impl fmt::Display for ArrayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfMemory { requested_bytes } => {
                write!(f, "out of memory: failed to allocate {requested_bytes} bytes")
            }
            Self::CapacityExceeded {
                requested_bytes,
                limit_bytes,
            } => {
                write!(
                    f,
                    "array capacity exceeded: requested {requested_bytes} bytes, limit {limit_bytes} bytes"
                )
            }
        }
    }
}

impl Error for ArrayError {}
