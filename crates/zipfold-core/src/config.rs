//! Per-array configuration.

use crate::error::ArrayError;

/// What a consuming zip operator does with the elements of an input array
/// that lie beyond the shortest input's length.
///
/// Those elements are never handed to the callback. Their memory is always
/// freed; the policy only decides whether the array's release hook sees
/// them first.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TailPolicy {
    /// Run the release hook on every unvisited element before freeing.
    #[default]
    Release,
    /// Free unvisited elements without running the release hook.
    Skip,
}

/// Configuration carried by an array and inherited by every array an
/// operator produces from it.
///
/// All values are plain data; an array's config never changes after
/// construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ArrayConfig {
    /// Upper bound, in bytes, on any single output buffer allocated by an
    /// operator consuming or reading this array.
    ///
    /// Default: `isize::MAX`, the largest allocation Rust permits.
    pub max_bytes: usize,

    /// Handling of elements past the zip-to-shortest cut-off.
    ///
    /// Default: [`TailPolicy::Release`].
    pub tail_policy: TailPolicy,
}

impl ArrayConfig {
    /// Default byte ceiling: the allocator's own limit.
    pub const DEFAULT_MAX_BYTES: usize = isize::MAX as usize;

    /// Default tail policy.
    pub const DEFAULT_TAIL_POLICY: TailPolicy = TailPolicy::Release;

    /// Create a config with default values.
    pub const fn new() -> Self {
        Self {
            max_bytes: Self::DEFAULT_MAX_BYTES,
            tail_policy: Self::DEFAULT_TAIL_POLICY,
        }
    }

    /// Replace the byte ceiling.
    pub const fn with_max_bytes(mut self, max_bytes: usize) -> Self {
        self.max_bytes = max_bytes;
        self
    }

    /// Replace the tail policy.
    pub const fn with_tail_policy(mut self, tail_policy: TailPolicy) -> Self {
        self.tail_policy = tail_policy;
        self
    }

    /// Byte size of a buffer holding `len` elements of `elem_size` bytes.
    ///
    /// Fails with [`ArrayError::OutOfMemory`] if the product overflows, and
    /// with [`ArrayError::CapacityExceeded`] if it is above `max_bytes`.
    pub fn check_bytes(&self, len: usize, elem_size: usize) -> Result<usize, ArrayError> {
        let requested_bytes = len
            .checked_mul(elem_size)
            .ok_or(ArrayError::OutOfMemory {
                requested_bytes: usize::MAX,
            })?;
        if requested_bytes > self.max_bytes {
            return Err(ArrayError::CapacityExceeded {
                requested_bytes,
                limit_bytes: self.max_bytes,
            });
        }
        Ok(requested_bytes)
    }
}

impl Default for ArrayConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = ArrayConfig::default();
        assert_eq!(config.max_bytes, isize::MAX as usize);
        assert_eq!(config.tail_policy, TailPolicy::Release);
    }

    #[test]
    fn builders_replace_fields() {
        let config = ArrayConfig::new()
            .with_max_bytes(128)
            .with_tail_policy(TailPolicy::Skip);
        assert_eq!(config.max_bytes, 128);
        assert_eq!(config.tail_policy, TailPolicy::Skip);
    }

    #[test]
    fn check_bytes_within_limit() {
        let config = ArrayConfig::new().with_max_bytes(64);
        assert_eq!(config.check_bytes(16, 4), Ok(64));
        assert_eq!(config.check_bytes(0, 4), Ok(0));
    }

    #[test]
    fn check_bytes_over_limit() {
        let config = ArrayConfig::new().with_max_bytes(64);
        assert_eq!(
            config.check_bytes(17, 4),
            Err(ArrayError::CapacityExceeded {
                requested_bytes: 68,
                limit_bytes: 64,
            })
        );
    }

    #[test]
    fn check_bytes_overflow_is_out_of_memory() {
        let config = ArrayConfig::new();
        assert_eq!(
            config.check_bytes(usize::MAX, 2),
            Err(ArrayError::OutOfMemory {
                requested_bytes: usize::MAX,
            })
        );
    }

    #[test]
    fn zero_sized_elements_never_exceed() {
        let config = ArrayConfig::new().with_max_bytes(0);
        assert_eq!(config.check_bytes(usize::MAX, 0), Ok(0));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn check_bytes_agrees_with_checked_mul(
                len in 0usize..1_000_000,
                elem_size in 0usize..64,
                max_bytes in 0usize..10_000_000,
            ) {
                let config = ArrayConfig::new().with_max_bytes(max_bytes);
                let bytes = len * elem_size;
                match config.check_bytes(len, elem_size) {
                    Ok(n) => {
                        prop_assert_eq!(n, bytes);
                        prop_assert!(n <= max_bytes);
                    }
                    Err(ArrayError::CapacityExceeded { requested_bytes, limit_bytes }) => {
                        prop_assert_eq!(requested_bytes, bytes);
                        prop_assert_eq!(limit_bytes, max_bytes);
                        prop_assert!(bytes > max_bytes);
                    }
                    Err(other) => prop_assert!(false, "unexpected error {other}"),
                }
            }
        }
    }
}
