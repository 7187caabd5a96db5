//! Zipfold: owned generic arrays with map, filter, reduce and zip-to-shortest
//! operators.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! Zipfold sub-crates. For most users, adding `zipfold` as a single dependency
//! is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use zipfold::prelude::*;
//!
//! let grades = Array::from_vec(vec![6.5, 3.0, 9.0]);
//! let names = Array::from_vec(vec!["ana", "ben", "cy"]);
//!
//! // Pair every name with its grade, keep the passing ones.
//! let report = map_multiple((names, grades), |(name, grade)| (name.to_string(), *grade))
//!     .unwrap()
//!     .filter(|(_, grade)| *grade >= 5.0)
//!     .unwrap();
//!
//! let total = report.reduce(0.0_f64, |acc, (_, grade)| *acc += *grade);
//! assert_eq!(report.len(), 2);
//! assert_eq!(total, 15.5);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`array`] | `zipfold-array` | `Array<T>`, unary operators, zip operators |
//! | [`types`] | `zipfold-core` | `ArrayConfig`, `TailPolicy`, `ArrayError`, `Release` |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Arrays and operators (`zipfold-array`).
///
/// [`array::Array`] carries the unary operators; the zip operators live in
/// [`array::zip`].
pub use zipfold_array as array;

/// Configuration, errors and the release hook type (`zipfold-core`).
pub use zipfold_core as types;

/// Common imports for typical Zipfold usage.
///
/// ```rust
/// use zipfold::prelude::*;
/// ```
pub mod prelude {
    // Array
    pub use zipfold_array::Array;

    // Zip operators
    pub use zipfold_array::zip::{
        for_each_multiple, map_multiple, map_multiple_with_release, reduce_multiple, ZipArrays,
        ZipRefs,
    };

    // Config and errors
    pub use zipfold_core::{ArrayConfig, ArrayError, Release, TailPolicy};
}
