//! Fallible output-buffer allocation shared by every producing operator.

use std::mem;

use tracing::debug;
use zipfold_core::{ArrayConfig, ArrayError};

/// Reserve an empty `Vec` with room for exactly `len` elements of `T`.
///
/// The byte size is checked against `config.max_bytes` before the
/// allocator is asked; a refusal from the allocator becomes
/// [`ArrayError::OutOfMemory`] instead of an abort.
pub(crate) fn try_buffer<T>(len: usize, config: &ArrayConfig) -> Result<Vec<T>, ArrayError> {
    let elem_size = mem::size_of::<T>();
    let bytes = config.check_bytes(len, elem_size).inspect_err(|err| {
        debug!(len, elem_size, error = %err, "output buffer rejected");
    })?;
    let mut buffer = Vec::new();
    buffer.try_reserve_exact(len).map_err(|err| {
        debug!(len, elem_size, bytes, "allocator refused output buffer");
        ArrayError::from_reserve(bytes, err)
    })?;
    Ok(buffer)
}
