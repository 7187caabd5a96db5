//! Facade smoke tests: the prelude alone is enough for a full pipeline.

use zipfold::prelude::*;

#[test]
fn prelude_covers_all_operators() {
    let a = Array::from_vec(vec![1, 2, 3, 4, 5]);
    let b = Array::from_vec(vec![10, 20, 30]);

    let mut seen = Vec::new();
    a.for_each(|x| seen.push(*x));
    for_each_multiple((&a, &b), |(x, y)| seen.push(x * y));
    assert_eq!(seen, vec![1, 2, 3, 4, 5, 10, 40, 90]);

    let dot = reduce_multiple((&a, &b), 0, |acc, (x, y)| *acc += x * y);
    assert_eq!(dot, 140);

    let odd = a.filter(|x| x % 2 == 1).unwrap();
    let squared = odd.map(|x| x * x).unwrap();
    let zipped = map_multiple((squared, b), |(s, t)| s + t).unwrap();
    assert_eq!(zipped.as_slice(), &[11, 29, 55]);
    assert_eq!(zipped.reduce(0, |acc, x| *acc += x), 95);
}

#[test]
fn facade_modules_reexport_sub_crates() {
    let config = zipfold::types::ArrayConfig::default();
    assert_eq!(config.tail_policy, TailPolicy::Release);

    let array: zipfold::array::Array<u8> = zipfold::array::Array::new().with_config(config);
    assert!(array.is_empty());
}

#[test]
fn capacity_error_surfaces_through_facade() {
    let tight = ArrayConfig::new().with_max_bytes(1);
    let err = Array::from_vec(vec![1u32, 2])
        .with_config(tight)
        .map(|x| *x)
        .unwrap_err();
    assert_eq!(
        err,
        ArrayError::CapacityExceeded {
            requested_bytes: 8,
            limit_bytes: 1,
        }
    );
}
