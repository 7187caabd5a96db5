//! Owned generic arrays with higher-order operators.
//!
//! An [`Array<T>`] owns its elements, an optional per-element release hook
//! and an [`ArrayConfig`]. Operators move ownership linearly through a
//! pipeline:
//!
//! ```text
//! Array<T> ──map──▶ Array<U> ──filter──▶ Array<U> ──┐
//!                                                   ├─map_multiple─▶ Array<V>
//! Array<W> ─────────────────────────────────────────┘
//! ```
//!
//! # Operators
//!
//! | operator                           | input      | output      |
//! |------------------------------------|------------|-------------|
//! | [`Array::for_each`]                | borrowed   | —           |
//! | [`Array::map`]                     | consumed   | `Array<U>`  |
//! | [`Array::filter`]                  | consumed   | `Array<T>`  |
//! | [`Array::reduce`]                  | borrowed   | accumulator |
//! | [`zip::for_each_multiple`]         | borrowed   | —           |
//! | [`zip::map_multiple`]              | consumed   | `Array<U>`  |
//! | [`zip::reduce_multiple`]           | borrowed   | accumulator |
//!
//! Consuming operators reserve their output buffer before invoking any
//! callback and report failure as [`ArrayError`]. Zip operators stop at the
//! shortest input.
//!
//! ```rust
//! use zipfold_array::{zip, Array};
//!
//! let ints = Array::from_vec(vec![1, 2, 3, 4]);
//! let evens = ints.filter(|x| x % 2 == 0).unwrap();
//! let labels = Array::from_vec(vec!["two", "four", "six"]);
//! let joined = zip::map_multiple((evens, labels), |(n, s)| format!("{n}={s}")).unwrap();
//! assert_eq!(joined.as_slice(), &["2=two", "4=four"]);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod alloc;
pub mod array;
pub mod ops;
pub mod zip;

pub use array::Array;
pub use zip::{
    for_each_multiple, map_multiple, map_multiple_with_release, reduce_multiple, ZipArrays,
    ZipRefs,
};
pub use zipfold_core::{ArrayConfig, ArrayError, Release, TailPolicy};
