//! N-ary ("zip") operators over several arrays of independent element
//! types.
//!
//! Inputs are passed as a typed collection instead of a count plus a
//! variadic list, so the arity is always the number of arrays actually
//! supplied:
//!
//! | collection                         | callback receives            |
//! |------------------------------------|------------------------------|
//! | `(Array<A>, Array<B>, ..)`         | `&(A, B, ..)`                |
//! | `(&Array<A>, &Array<B>, ..)`       | `(&A, &B, ..)`               |
//! | `Vec<Array<T>>`                    | `&SmallVec<[T; 4]>`          |
//! | `&[Array<T>]`, `&Vec<Array<T>>`    | `SmallVec<[&T; 4]>`          |
//!
//! Tuples of arity 1 to 8 are supported.
//!
//! All operators process `min(len_1, .., len_k)` indices (zip-to-shortest).
//! An empty `Vec`/slice has an effective length of zero.
//!
//! # Consumption
//!
//! [`map_multiple`] takes its arrays by value. Each input is turned into a
//! [`Column`] that yields elements by move; after the transform has seen
//! row `i`, every input's release hook runs on its element `i`. Elements
//! past the effective length are handled by each input's
//! [`TailPolicy`] when its column is dropped.
//!
//! [`for_each_multiple`] and [`reduce_multiple`] only borrow.

use std::vec;

use smallvec::SmallVec;
use tracing::trace;
use zipfold_core::{ArrayConfig, ArrayError, Release, TailPolicy};

use crate::alloc::try_buffer;
use crate::array::Array;

/// Inline capacity for per-row storage of homogeneous collections.
pub const INLINE_ARITY: usize = 4;

/// A consumed input of a zip operator, yielding its elements by move.
///
/// Dropping a column frees the remaining elements, running the release
/// hook on each first unless the array's tail policy is
/// [`TailPolicy::Skip`].
pub struct Column<T> {
    elements: vec::IntoIter<T>,
    release: Option<Release<T>>,
    tail_policy: TailPolicy,
}

impl<T> Column<T> {
    fn new(array: Array<T>) -> Self {
        let (data, release, config) = array.into_parts();
        Self {
            elements: data.into_iter(),
            release,
            tail_policy: config.tail_policy,
        }
    }

    /// Move out the next element.
    pub fn next_element(&mut self) -> Option<T> {
        self.elements.next()
    }

    /// Run the release hook on an element taken from this column.
    pub fn release(&self, element: &mut T) {
        if let Some(release) = self.release {
            release(element);
        }
    }

    /// Number of elements not yet taken.
    pub fn remaining(&self) -> usize {
        self.elements.len()
    }
}

impl<T> Drop for Column<T> {
    fn drop(&mut self) {
        let remaining = self.elements.len();
        if remaining == 0 {
            return;
        }
        trace!(remaining, policy = ?self.tail_policy, "zip tail");
        if let (Some(release), TailPolicy::Release) = (self.release, self.tail_policy) {
            self.elements.by_ref().for_each(|mut element| release(&mut element));
        }
    }
}

/// An owned collection of arrays that [`map_multiple`] can consume.
pub trait ZipArrays {
    /// One element from each array, moved out together.
    type Row;
    /// The consumed form of the collection.
    type Columns;

    /// Number of arrays in the collection.
    fn arity(&self) -> usize;

    /// Length of the shortest array, or zero for an empty collection.
    fn effective_len(&self) -> usize;

    /// Config inherited by the output: the first array's, or the default.
    fn config(&self) -> ArrayConfig;

    /// Tightest `max_bytes` among the arrays, or the default ceiling for an
    /// empty collection. The output buffer is checked against this.
    fn max_bytes(&self) -> usize;

    /// Consume the arrays into columns.
    fn into_columns(self) -> Self::Columns;

    /// Take the next element of every column.
    ///
    /// Returns `None` once any column is exhausted.
    fn next_row(columns: &mut Self::Columns) -> Option<Self::Row>;

    /// Run each column's release hook on its element of `row`.
    fn release_row(columns: &Self::Columns, row: &mut Self::Row);
}

/// A borrowed collection of arrays read by [`for_each_multiple`] and
/// [`reduce_multiple`].
pub trait ZipRefs<'a>: Copy {
    /// References to one element of each array.
    type Item;

    /// Number of arrays in the collection.
    fn arity(&self) -> usize;

    /// Length of the shortest array, or zero for an empty collection.
    fn effective_len(&self) -> usize;

    /// References to element `index` of every array.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.effective_len()`.
    fn item(self, index: usize) -> Self::Item;
}

macro_rules! impl_zip_tuple {
    ($arity:literal; $($ty:ident $idx:tt),+) => {
        impl<$($ty),+> ZipArrays for ($(Array<$ty>,)+) {
            type Row = ($($ty,)+);
            type Columns = ($(Column<$ty>,)+);

            fn arity(&self) -> usize {
                $arity
            }

            fn effective_len(&self) -> usize {
                [$(self.$idx.len()),+].into_iter().min().unwrap_or(0)
            }

            fn config(&self) -> ArrayConfig {
                self.0.config()
            }

            fn max_bytes(&self) -> usize {
                [$(self.$idx.config().max_bytes),+]
                    .into_iter()
                    .min()
                    .unwrap_or(ArrayConfig::DEFAULT_MAX_BYTES)
            }

            fn into_columns(self) -> Self::Columns {
                ($(Column::new(self.$idx),)+)
            }

            fn next_row(columns: &mut Self::Columns) -> Option<Self::Row> {
                if [$(columns.$idx.remaining()),+].contains(&0) {
                    return None;
                }
                Some(($(columns.$idx.next_element()?,)+))
            }

            fn release_row(columns: &Self::Columns, row: &mut Self::Row) {
                $(columns.$idx.release(&mut row.$idx);)+
            }
        }

        impl<'a, $($ty),+> ZipRefs<'a> for ($(&'a Array<$ty>,)+) {
            type Item = ($(&'a $ty,)+);

            fn arity(&self) -> usize {
                $arity
            }

            fn effective_len(&self) -> usize {
                [$(self.$idx.len()),+].into_iter().min().unwrap_or(0)
            }

            fn item(self, index: usize) -> Self::Item {
                ($(&self.$idx.as_slice()[index],)+)
            }
        }
    };
}

impl_zip_tuple!(1; A 0);
impl_zip_tuple!(2; A 0, B 1);
impl_zip_tuple!(3; A 0, B 1, C 2);
impl_zip_tuple!(4; A 0, B 1, C 2, D 3);
impl_zip_tuple!(5; A 0, B 1, C 2, D 3, E 4);
impl_zip_tuple!(6; A 0, B 1, C 2, D 3, E 4, F 5);
impl_zip_tuple!(7; A 0, B 1, C 2, D 3, E 4, F 5, G 6);
impl_zip_tuple!(8; A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7);

impl<T> ZipArrays for Vec<Array<T>> {
    type Row = SmallVec<[T; INLINE_ARITY]>;
    type Columns = Vec<Column<T>>;

    fn arity(&self) -> usize {
        self.len()
    }

    fn effective_len(&self) -> usize {
        self.iter().map(Array::len).min().unwrap_or(0)
    }

    fn config(&self) -> ArrayConfig {
        self.first().map(Array::config).unwrap_or_default()
    }

    fn max_bytes(&self) -> usize {
        self.iter()
            .map(|array| array.config().max_bytes)
            .min()
            .unwrap_or(ArrayConfig::DEFAULT_MAX_BYTES)
    }

    fn into_columns(self) -> Self::Columns {
        self.into_iter().map(Column::new).collect()
    }

    fn next_row(columns: &mut Self::Columns) -> Option<Self::Row> {
        if columns.is_empty() || columns.iter().any(|column| column.remaining() == 0) {
            return None;
        }
        columns.iter_mut().map(Column::next_element).collect()
    }

    fn release_row(columns: &Self::Columns, row: &mut Self::Row) {
        for (column, element) in columns.iter().zip(row.iter_mut()) {
            column.release(element);
        }
    }
}

impl<'a, T> ZipRefs<'a> for &'a [Array<T>] {
    type Item = SmallVec<[&'a T; INLINE_ARITY]>;

    fn arity(&self) -> usize {
        self.len()
    }

    fn effective_len(&self) -> usize {
        self.iter().map(Array::len).min().unwrap_or(0)
    }

    fn item(self, index: usize) -> Self::Item {
        self.iter().map(|array| &array.as_slice()[index]).collect()
    }
}

impl<'a, T> ZipRefs<'a> for &'a Vec<Array<T>> {
    type Item = SmallVec<[&'a T; INLINE_ARITY]>;

    fn arity(&self) -> usize {
        self.len()
    }

    fn effective_len(&self) -> usize {
        self.as_slice().effective_len()
    }

    fn item(self, index: usize) -> Self::Item {
        self.as_slice().item(index)
    }
}

/// Call `action` with one element of every array, for each index up to
/// the shortest length. Nothing is consumed or released.
pub fn for_each_multiple<'a, Z, F>(arrays: Z, mut action: F)
where
    Z: ZipRefs<'a>,
    F: FnMut(Z::Item),
{
    let len = arrays.effective_len();
    trace!(arity = arrays.arity(), effective_len = len, "for_each_multiple");
    for index in 0..len {
        action(arrays.item(index));
    }
}

/// Zip-map into a new array with no release hook.
///
/// See [`map_multiple_with_release`].
pub fn map_multiple<Z, U, F>(arrays: Z, transform: F) -> Result<Array<U>, ArrayError>
where
    Z: ZipArrays,
    F: FnMut(&Z::Row) -> U,
{
    map_multiple_with_release(arrays, None, transform)
}

/// Consume every array and build a new array whose element `i` is
/// `transform(row_i)`, carrying `release`.
///
/// The output has the shortest input's length and the first input's
/// config. Its buffer must fit under every input's `max_bytes`. Immediately after `transform` sees row `i`, each input's release
/// hook runs on its element `i`. Elements past the shortest length are
/// released or skipped according to each input's [`TailPolicy`]. All input
/// buffers are freed before this returns.
///
/// On allocation failure no transform is called and every input is
/// destroyed.
pub fn map_multiple_with_release<Z, U, F>(
    arrays: Z,
    release: Option<Release<U>>,
    mut transform: F,
) -> Result<Array<U>, ArrayError>
where
    Z: ZipArrays,
    F: FnMut(&Z::Row) -> U,
{
    let arity = arrays.arity();
    let len = arrays.effective_len();
    let config = arrays.config();
    let mut out = try_buffer(len, &config.with_max_bytes(arrays.max_bytes()))?;

    let mut columns = arrays.into_columns();
    while out.len() < len {
        let Some(mut row) = Z::next_row(&mut columns) else {
            break;
        };
        out.push(transform(&row));
        Z::release_row(&columns, &mut row);
    }
    drop(columns);

    trace!(arity, effective_len = len, "map_multiple");
    Ok(Array::from_parts(out, release, config))
}

/// Fold one element of every array into `acc`, left to right, for each
/// index up to the shortest length. Nothing is consumed or released.
pub fn reduce_multiple<'a, Z, A, F>(arrays: Z, mut acc: A, mut combine: F) -> A
where
    Z: ZipRefs<'a>,
    F: FnMut(&mut A, Z::Item),
{
    let len = arrays.effective_len();
    trace!(arity = arrays.arity(), effective_len = len, "reduce_multiple");
    for index in 0..len {
        combine(&mut acc, arrays.item(index));
    }
    acc
}
