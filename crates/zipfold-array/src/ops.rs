//! Unary operators: for-each, map, filter and reduce.
//!
//! `map` and `filter` consume their input and return a freshly allocated
//! array. `for_each` and `reduce` borrow and leave the input untouched.

use tracing::trace;
use zipfold_core::{ArrayError, Release};

use crate::alloc::try_buffer;
use crate::array::Array;

impl<T> Array<T> {
    /// Call `action` on every element in index order.
    pub fn for_each<F>(&self, action: F)
    where
        F: FnMut(&T),
    {
        trace!(len = self.len(), "for_each");
        self.iter().for_each(action);
    }

    /// Transform every element into a new array with no release hook.
    ///
    /// See [`map_with_release`](Array::map_with_release).
    pub fn map<U, F>(self, transform: F) -> Result<Array<U>, ArrayError>
    where
        F: FnMut(&T) -> U,
    {
        self.map_with_release(None, transform)
    }

    /// Transform every element into a new array carrying `release`.
    ///
    /// The output buffer is reserved before any transform runs. Once every
    /// element has been transformed, the input is destroyed: its release
    /// hook runs on each original element and its buffer is freed. The
    /// output always has the input's length and inherits its config.
    ///
    /// On allocation failure no transform is called and the input is
    /// destroyed.
    pub fn map_with_release<U, F>(
        self,
        release: Option<Release<U>>,
        transform: F,
    ) -> Result<Array<U>, ArrayError>
    where
        F: FnMut(&T) -> U,
    {
        let config = self.config();
        let mut out = try_buffer(self.len(), &config)?;
        out.extend(self.iter().map(transform));
        trace!(len = out.len(), "map");
        drop(self);
        Ok(Array::from_parts(out, release, config))
    }

    /// Keep the elements for which `predicate` holds, in their original
    /// order.
    ///
    /// Kept elements are moved into a new buffer without a release call,
    /// and the output reuses the input's release hook and config. Rejected
    /// elements are dropped as the scan passes them; the release hook never
    /// runs during a filter.
    pub fn filter<P>(self, mut predicate: P) -> Result<Array<T>, ArrayError>
    where
        P: FnMut(&T) -> bool,
    {
        let mut kept = try_buffer(self.len(), &self.config())?;
        let (data, release, config) = self.into_parts();
        let len = data.len();
        for element in data {
            if predicate(&element) {
                kept.push(element);
            }
        }
        trace!(len, kept = kept.len(), "filter");
        Ok(Array::from_parts(kept, release, config))
    }

    /// Fold the elements left to right into `acc`.
    ///
    /// `combine` mutates the accumulator in place; the same accumulator is
    /// returned. Nothing is allocated, consumed or released.
    pub fn reduce<A, F>(&self, mut acc: A, mut combine: F) -> A
    where
        F: FnMut(&mut A, &T),
    {
        trace!(len = self.len(), "reduce");
        for element in self {
            combine(&mut acc, element);
        }
        acc
    }
}
