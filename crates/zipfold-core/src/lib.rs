//! Core types for the zipfold array engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the error type every fallible operator returns, the per-array
//! configuration, and the release-hook signature shared by the array
//! and its test tooling.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;

pub use config::{ArrayConfig, TailPolicy};
pub use error::ArrayError;

/// Per-element release hook.
///
/// Invoked at most once on each element, immediately before the element is
/// dropped, when the array that owns it is destroyed. Used for elements
/// that hold resources their `Drop` impl does not manage (pool slots,
/// external handles, accounting).
pub type Release<T> = fn(&mut T);
