//! The owned array value.
//!
//! An [`Array`] owns a contiguous buffer of `T`, an optional per-element
//! [`Release`] hook and the [`ArrayConfig`] that its successors inherit.
//! Operators that produce a new array take their input by value, so a
//! consumed array cannot be touched again; operators that only read take
//! `&Array`.

use std::fmt;
use std::mem;
use std::slice;

use zipfold_core::{ArrayConfig, ArrayError, Release};

use crate::alloc::try_buffer;

/// A generic owned array with an optional per-element release hook.
///
/// Dropping an `Array` (or calling [`destroy`](Array::destroy)) runs the
/// release hook once on every element, in index order, and then frees the
/// buffer. The hook runs at most once per element over the element's whole
/// lifetime, whichever operator ends it.
///
/// The engine never mutates elements in place. Arrays change only by being
/// consumed by an operator and replaced by its output.
pub struct Array<T> {
    data: Vec<T>,
    release: Option<Release<T>>,
    config: ArrayConfig,
}

impl<T> Array<T> {
    /// An empty array with no release hook and the default config.
    pub fn new() -> Self {
        Self::from_parts(Vec::new(), None, ArrayConfig::default())
    }

    /// Take ownership of `data` as a plain-data array.
    pub fn from_vec(data: Vec<T>) -> Self {
        Self::from_parts(data, None, ArrayConfig::default())
    }

    /// Build an array of `len` elements by calling `f(index)` for each
    /// index in order.
    ///
    /// The buffer is reserved up front against the default config.
    pub fn try_from_fn<F>(len: usize, f: F) -> Result<Self, ArrayError>
    where
        F: FnMut(usize) -> T,
    {
        Self::try_from_fn_with_config(ArrayConfig::default(), len, f)
    }

    /// Like [`try_from_fn`](Array::try_from_fn), checking the buffer
    /// against `config` and attaching it to the result.
    pub fn try_from_fn_with_config<F>(
        config: ArrayConfig,
        len: usize,
        f: F,
    ) -> Result<Self, ArrayError>
    where
        F: FnMut(usize) -> T,
    {
        let mut data = try_buffer(len, &config)?;
        data.extend((0..len).map(f));
        Ok(Self::from_parts(data, None, config))
    }

    /// Attach a release hook, replacing any existing one.
    pub fn with_release(mut self, release: Release<T>) -> Self {
        self.release = Some(release);
        self
    }

    /// Attach or clear the release hook.
    pub fn with_release_opt(mut self, release: Option<Release<T>>) -> Self {
        self.release = release;
        self
    }

    /// Replace the config carried by this array.
    pub fn with_config(mut self, config: ArrayConfig) -> Self {
        self.config = config;
        self
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the array holds no elements.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Size of one element in bytes.
    pub fn elem_size(&self) -> usize {
        mem::size_of::<T>()
    }

    /// Size of the element data in bytes (`len * elem_size`).
    pub fn byte_len(&self) -> usize {
        mem::size_of_val(self.data.as_slice())
    }

    /// The release hook, if any.
    pub fn release(&self) -> Option<Release<T>> {
        self.release
    }

    /// The config inherited by arrays produced from this one.
    pub fn config(&self) -> ArrayConfig {
        self.config
    }

    /// The elements as a shared slice.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Address of the first element. Only meaningful for identity checks.
    pub fn as_ptr(&self) -> *const T {
        self.data.as_ptr()
    }

    /// Shared reference to the element at `index`, if in bounds.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.data.get(index)
    }

    /// Iterate over shared references to the elements.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Destroy the array: release every element, then free the buffer.
    ///
    /// Equivalent to dropping it; spelled out for pipelines that end
    /// without a consuming operator.
    pub fn destroy(self) {
        drop(self);
    }

    /// Hand the elements back without running the release hook.
    ///
    /// The caller takes over responsibility for whatever the hook would
    /// have released.
    pub fn into_vec(self) -> Vec<T> {
        self.into_parts().0
    }

    pub(crate) fn from_parts(
        data: Vec<T>,
        release: Option<Release<T>>,
        config: ArrayConfig,
    ) -> Self {
        Self {
            data,
            release,
            config,
        }
    }

    /// Split into raw parts, disarming `Drop`.
    pub(crate) fn into_parts(mut self) -> (Vec<T>, Option<Release<T>>, ArrayConfig) {
        let data = mem::take(&mut self.data);
        let release = self.release.take();
        (data, release, self.config)
    }
}

impl<T> Drop for Array<T> {
    fn drop(&mut self) {
        if let Some(release) = self.release {
            self.data.iter_mut().for_each(release);
        }
    }
}

impl<T> Default for Array<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for Array<T> {
    fn from(data: Vec<T>) -> Self {
        Self::from_vec(data)
    }
}

impl<T> FromIterator<T> for Array<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<T> AsRef<[T]> for Array<T> {
    fn as_ref(&self) -> &[T] {
        &self.data
    }
}

impl<'a, T> IntoIterator for &'a Array<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for Array<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Array")
            .field("data", &self.data)
            .field("has_release", &self.release.is_some())
            .field("config", &self.config)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    thread_local! {
        static RELEASED: Cell<usize> = const { Cell::new(0) };
    }

    fn count_release(_: &mut u32) {
        RELEASED.with(|c| c.set(c.get() + 1));
    }

    fn released() -> usize {
        RELEASED.with(|c| c.get())
    }

    #[test]
    fn new_is_empty() {
        let a: Array<u8> = Array::new();
        assert!(a.is_empty());
        assert_eq!(a.len(), 0);
        assert!(a.release().is_none());
        assert_eq!(a.config(), ArrayConfig::default());
    }

    #[test]
    fn elem_size_and_byte_len() {
        let a = Array::from_vec(vec![1u64, 2, 3]);
        assert_eq!(a.elem_size(), 8);
        assert_eq!(a.byte_len(), 24);
    }

    #[test]
    fn try_from_fn_fills_in_index_order() {
        let a = Array::try_from_fn(4, |i| i * 10).unwrap();
        assert_eq!(a.as_slice(), &[0, 10, 20, 30]);
    }

    #[test]
    fn try_from_fn_respects_ceiling() {
        let config = ArrayConfig::new().with_max_bytes(8);
        let err = Array::try_from_fn_with_config(config, 3, |i| i as u32).unwrap_err();
        assert_eq!(
            err,
            ArrayError::CapacityExceeded {
                requested_bytes: 12,
                limit_bytes: 8,
            }
        );
        let ok = Array::try_from_fn_with_config(config, 2, |i| i as u32).unwrap();
        assert_eq!(ok.config(), config);
    }

    #[test]
    fn drop_runs_release_once_per_element() {
        let before = released();
        let a = Array::from_vec(vec![1u32, 2, 3]).with_release(count_release);
        drop(a);
        assert_eq!(released() - before, 3);
    }

    #[test]
    fn destroy_is_drop() {
        let before = released();
        Array::from_vec(vec![7u32; 5])
            .with_release(count_release)
            .destroy();
        assert_eq!(released() - before, 5);
    }

    #[test]
    fn into_vec_disarms_release() {
        let before = released();
        let a = Array::from_vec(vec![1u32, 2]).with_release(count_release);
        let v = a.into_vec();
        assert_eq!(v, vec![1, 2]);
        assert_eq!(released(), before);
    }

    #[test]
    fn with_release_opt_clears_hook() {
        let before = released();
        let a = Array::from_vec(vec![1u32, 2])
            .with_release(count_release)
            .with_release_opt(None);
        assert!(a.release().is_none());
        drop(a);
        assert_eq!(released(), before);
    }

    #[test]
    fn collect_and_iterate() {
        let a: Array<i32> = (1..=3).collect();
        let doubled: Vec<i32> = a.iter().map(|x| x * 2).collect();
        assert_eq!(doubled, vec![2, 4, 6]);
        let mut seen = Vec::new();
        for x in &a {
            seen.push(*x);
        }
        assert_eq!(seen, vec![1, 2, 3]);
        assert_eq!(a.get(1), Some(&2));
        assert_eq!(a.get(3), None);
    }

    #[test]
    fn debug_hides_hook_address() {
        let a = Array::from_vec(vec![1u32]).with_release(count_release);
        let text = format!("{a:?}");
        assert!(text.contains("has_release: true"));
        a.into_vec();
    }
}
