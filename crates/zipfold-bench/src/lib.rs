//! Benchmark inputs for the zipfold array engine.
//!
//! - [`ints`]: `0..len` as `i32`
//! - [`students`]: deterministic student roster with a ~60% pass rate
//! - [`columns`]: `k` homogeneous columns of staggered lengths

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use zipfold_array::Array;
use zipfold_test_utils::fixtures::Student;

/// Element count used by the reference benchmarks.
pub const REFERENCE_LEN: usize = 10_000;

/// `0, 1, .., len - 1`.
pub fn ints(len: usize) -> Array<i32> {
    (0..len as i32).collect()
}

/// A roster of `len` students with grades cycling through `0.0..10.0`.
pub fn students(len: usize) -> Array<Student> {
    (0..len)
        .map(|i| Student::new(format!("student-{i}"), (i * 7 % 100) as f64 / 10.0))
        .collect()
}

/// `k` integer columns; column `j` is `len + j` long so the zip always
/// truncates to `len`.
pub fn columns(k: usize, len: usize) -> Vec<Array<i32>> {
    (0..k).map(|j| ints(len + j)).collect()
}
