//! End-to-end operator pipeline example.
//!
//! Demonstrates: build arrays → filter → map → zip → reduce, with operator
//! tracing on stderr. Run with `RUST_LOG=zipfold_array=trace` to see every
//! operator span.

use zipfold::prelude::*;
use zipfold_test_utils::fixtures::{
    create_number_array, generate_square_matrix, passing_student_names, Student,
};

fn main() -> Result<(), ArrayError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    println!("=== Zipfold Pipeline Example ===\n");

    // --- Students: filter then map ---
    let students = Array::from_vec(vec![
        Student::new("Ada", 9.5),
        Student::new("Brook", 4.0),
        Student::new("Cato", 6.0),
        Student::new("Dara", 2.5),
    ]);
    let names = passing_student_names(students)?;
    println!("Passing students: {:?}", names.as_slice());

    // --- Numbers: zip two columns ---
    let integer = Array::from_vec(vec![3, 1, 2]);
    let fractional = Array::from_vec(vec![14, 41]);
    let numbers = create_number_array(integer, fractional)?;
    numbers.for_each(|n| println!("  number {}", n.string));

    // --- Matrix: build rows, then reduce each row ---
    let matrix = generate_square_matrix(4)?;
    let row_sums = matrix.reduce(Vec::new(), |sums, row| {
        sums.push(row.reduce(0, |acc, x| *acc += x));
    });
    println!("Row sums of 4x4 matrix: {row_sums:?}");

    // --- Zip three arrays with a tight ceiling ---
    let small = ArrayConfig::new().with_max_bytes(2 * std::mem::size_of::<i64>());
    let a = Array::from_vec(vec![1i64, 2, 3]).with_config(small);
    let b = Array::from_vec(vec![10i64, 20, 30]);
    let c = Array::from_vec(vec![100i64, 200, 300]);
    match map_multiple((a, b, c), |(x, y, z)| x + y + z) {
        Ok(sums) => println!("Sums: {:?}", sums.as_slice()),
        Err(err) => println!("Zip refused: {err}"),
    }

    println!("\n=== Done ===");
    Ok(())
}
