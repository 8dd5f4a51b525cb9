//! Compile-time evaluation and its agreement with the run-time algorithms

mod common;

use common::INPUT;
use lockstep::{
    any_of, const_any_of, const_find, const_transform, equal_to, find, multiply, plus, transform,
    SliceCursor, SliceWriter,
};

const LEN: usize = INPUT.len();

const FIND_THREE: (usize, ()) = const_find!(|x| equal_to!(3, x); INPUT, 0, LEN);
const FIND_NONE: (usize, (usize,)) = const_find!(|x, y| x + y == 100; INPUT, 0, LEN; INPUT, 0);
const ANY_THREE: bool = const_any_of!(|x| equal_to!(3, x); INPUT, 0, LEN);
const ANY_NONE: bool = const_any_of!(|x, y| x + y == 100; INPUT, 0, LEN; INPUT, 0);

const PLUS_CONSTANT: ([i32; LEN], usize) =
    const_transform!(|x| plus!(3, x); [0; LEN], 0; INPUT, 0, LEN);
const PLUS_TWO: ([i32; LEN], usize) =
    const_transform!(|x, y| plus!(x, y); [0; LEN], 0; INPUT, 0, LEN; INPUT, 0);
const PLUS_THREE: ([i32; LEN], usize) =
    const_transform!(|x, y, z| plus!(x, y, z); [0; LEN], 0; INPUT, 0, LEN; INPUT, 0; INPUT, 0);
const MULTIPLY_THREE: ([i32; LEN], usize) =
    const_transform!(|x, y, z| multiply!(x, y, z); [0; LEN], 0; INPUT, 0, LEN; INPUT, 0; INPUT, 0);
const MULTIPLY_FOUR: ([i32; LEN], usize) = const_transform!(
    |w, x, y, z| multiply!(w, x, y, z);
    [0; LEN], 0;
    INPUT, 0, LEN;
    INPUT, 0;
    INPUT, 0;
    INPUT, 0
);

// Evaluated by the compiler; a wrong value fails the build.
const _: () = assert!(FIND_THREE.0 == 3 && INPUT[FIND_THREE.0] == 3);
const _: () = assert!(FIND_NONE.0 == LEN && FIND_NONE.1.0 == LEN);
const _: () = assert!(ANY_THREE && !ANY_NONE);
const _: () = assert!(
    PLUS_CONSTANT.0[3] == 6 && PLUS_CONSTANT.0[2] == 5 && PLUS_CONSTANT.0[1] == 4
);
const _: () = assert!(PLUS_TWO.0[3] == 6 && PLUS_TWO.0[2] == 4 && PLUS_TWO.0[1] == 2);
const _: () = assert!(PLUS_THREE.0[3] == 9 && PLUS_THREE.0[2] == 6 && PLUS_THREE.0[1] == 3);
const _: () = assert!(MULTIPLY_THREE.0[3] == 27 && MULTIPLY_THREE.0[2] == 8);
const _: () = assert!(MULTIPLY_FOUR.0[0] == 0 && MULTIPLY_FOUR.0[3] == 81);

fn runtime_transform<F>(op: F, secondaries: usize) -> [i32; LEN]
where
    F: Fn(&[i32]) -> i32,
{
    let (b, e) = SliceCursor::bounds(&INPUT);
    let mut out = [0; LEN];
    let w = SliceWriter::new(&mut out);
    match secondaries {
        0 => {
            transform(|x: &i32| op(&[*x]), w, b, e, ());
        }
        1 => {
            transform(|x: &i32, y: &i32| op(&[*x, *y]), w, b, e, (b,));
        }
        2 => {
            transform(|x: &i32, y: &i32, z: &i32| op(&[*x, *y, *z]), w, b, e, (b, b));
        }
        3 => {
            transform(
                |v: &i32, x: &i32, y: &i32, z: &i32| op(&[*v, *x, *y, *z]),
                w,
                b,
                e,
                (b, b, b),
            );
        }
        n => panic!("no dispatch for {n} secondaries"),
    }
    out
}

#[test]
fn test_find_compile_time_matches_run_time() {
    let (b, e) = SliceCursor::bounds(&INPUT);

    let (hit, ()) = find(|x: &i32| equal_to!(3, *x), b, e, ());
    assert_eq!(FIND_THREE.0, hit.position());

    let (hit, (other,)) = find(|x: &i32, y: &i32| x + y == 100, b, e, (b,));
    assert_eq!(FIND_NONE, (hit.position(), (other.position(),)));

    assert_eq!(ANY_THREE, any_of(|x: &i32| *x == 3, b, e, ()));
    assert_eq!(ANY_NONE, any_of(|x: &i32, y: &i32| x + y == 100, b, e, (b,)));
}

#[test]
fn test_transform_compile_time_matches_run_time() {
    let sum = |values: &[i32]| values.iter().sum::<i32>();
    let product = |values: &[i32]| values.iter().product::<i32>();

    assert_eq!(PLUS_CONSTANT.0, runtime_transform(|v| 3 + v[0], 0));
    assert_eq!(PLUS_TWO.0, runtime_transform(sum, 1));
    assert_eq!(PLUS_THREE.0, runtime_transform(sum, 2));
    assert_eq!(MULTIPLY_THREE.0, runtime_transform(product, 2));
    assert_eq!(MULTIPLY_FOUR.0, runtime_transform(product, 3));
}

#[test]
fn test_compile_time_output_cursor_is_one_past_last_write() {
    assert_eq!(PLUS_THREE.1, LEN);
    const EMPTY: ([i32; 3], usize) = const_transform!(|x| x; [7; 3], 1; INPUT, 5, 5);
    assert_eq!(EMPTY, ([7; 3], 1));
}
