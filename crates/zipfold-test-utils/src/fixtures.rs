//! Client programs built on the engine, used as end-to-end scenarios.
//!
//! - [`reverse`]: reverse an array with a prepending fold.
//! - [`create_number_array`]: zip integer and fractional parts into
//!   [`Number`] records.
//! - [`passing_student_names`]: filter then map a [`Student`] list.
//! - [`check_bigger_sum`]: map nested lists to sums, then zip-compare.
//! - [`even_indexed_strings`]: stateful filter on position.
//! - [`generate_square_matrix`]: build an `n × n` index matrix.

use std::collections::VecDeque;

use zipfold_array::{map_multiple, reduce_multiple, Array, ArrayError};

/// Reverse `list` into a new array with the same release hook and config.
///
/// Elements are cloned by a left fold that prepends each one; `list` is
/// then destroyed, running its release hook on every original.
///
/// The clones carry the same hook, so each clone must own its resources
/// independently of the element it was cloned from. A `Clone` that shares a
/// resource (an `Rc` handle, a copied raw id) would see it released twice.
pub fn reverse<T: Clone>(list: Array<T>) -> Result<Array<T>, ArrayError> {
    let mut reversed = VecDeque::new();
    reversed
        .try_reserve_exact(list.len())
        .map_err(|err| ArrayError::from_reserve(list.byte_len(), err))?;
    let reversed = list.reduce(reversed, |acc, element| acc.push_front(element.clone()));
    Ok(Array::from_vec(Vec::from(reversed))
        .with_release_opt(list.release())
        .with_config(list.config()))
}

/// A number assembled from its integer and fractional digits.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Number {
    pub integer_part: i32,
    pub fractional_part: i32,
    pub string: String,
}

impl Number {
    pub fn new(integer_part: i32, fractional_part: i32) -> Self {
        Self {
            integer_part,
            fractional_part,
            string: format!("{integer_part}.{fractional_part}"),
        }
    }
}

/// Zip two parallel digit arrays into [`Number`] records.
///
/// Stops at the shorter input.
pub fn create_number_array(
    integer_part: Array<i32>,
    fractional_part: Array<i32>,
) -> Result<Array<Number>, ArrayError> {
    map_multiple((integer_part, fractional_part), |(integer, fractional)| {
        Number::new(*integer, *fractional)
    })
}

/// A student and their grade.
#[derive(Clone, Debug, PartialEq)]
pub struct Student {
    pub name: String,
    pub grade: f64,
}

impl Student {
    /// Grade at or above which a student passes.
    pub const PASSING_GRADE: f64 = 5.0;

    pub fn new(name: impl Into<String>, grade: f64) -> Self {
        Self {
            name: name.into(),
            grade,
        }
    }

    pub fn passed(&self) -> bool {
        self.grade >= Self::PASSING_GRADE
    }
}

/// Names of the students who passed, in input order.
pub fn passing_student_names(list: Array<Student>) -> Result<Array<String>, ArrayError> {
    list.filter(Student::passed)?
        .map(|student| student.name.clone())
}

/// For each inner list, whether its sum is at least the matching entry of
/// `int_list`. Stops at the shorter of the two.
pub fn check_bigger_sum(
    list_list: Array<Array<i32>>,
    int_list: Array<i32>,
) -> Result<Array<bool>, ArrayError> {
    let sums = list_list.map(|list| list.reduce(0, |sum, x| *sum += x))?;
    map_multiple((sums, int_list), |(sum, bound)| sum >= bound)
}

/// Elements at even positions (0, 2, 4, ..).
pub fn even_indexed_strings(list: Array<String>) -> Result<Array<String>, ArrayError> {
    let mut index = 0usize;
    list.filter(|_| {
        let keep = index % 2 == 0;
        index += 1;
        keep
    })
}

/// Largest side [`generate_square_matrix`] accepts: its biggest entry,
/// `2n - 1`, must fit in an `i32`.
pub const MAX_MATRIX_SIDE: usize = 1 << 30;

/// An `n × n` matrix whose row `r` holds `r + 1, r + 2, .., r + n`.
///
/// A side above [`MAX_MATRIX_SIDE`] fails with
/// [`ArrayError::CapacityExceeded`] for the row buffer before anything is
/// allocated.
pub fn generate_square_matrix(n: usize) -> Result<Array<Array<i32>>, ArrayError> {
    if n > MAX_MATRIX_SIDE {
        let cell = std::mem::size_of::<i32>();
        return Err(ArrayError::CapacityExceeded {
            requested_bytes: n.saturating_mul(cell),
            limit_bytes: MAX_MATRIX_SIDE.saturating_mul(cell),
        });
    }
    // Entries stay below 2 * MAX_MATRIX_SIDE, so the casts are lossless.
    let starts = Array::try_from_fn(n, |row| row as i32 + 1)?;
    let mut rows = Vec::new();
    let row_bytes = std::mem::size_of::<Result<Array<i32>, ArrayError>>();
    rows.try_reserve_exact(n)
        .map_err(|err| ArrayError::from_reserve(n.saturating_mul(row_bytes), err))?;
    let rows = reduce_multiple((&starts,), rows, |rows, (start,)| {
        rows.push(index_row(*start, n));
    });
    rows.into_iter().collect::<Result<Vec<_>, _>>().map(Array::from_vec)
}

/// `start, start + 1, ..` for `len` entries, copied through a map.
fn index_row(start: i32, len: usize) -> Result<Array<i32>, ArrayError> {
    let indexes = Array::try_from_fn(len, |offset| start + offset as i32)?;
    indexes.map(|index| *index)
}
