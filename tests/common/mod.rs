//! Shared fixtures for integration tests

#![allow(dead_code, unused_macros)]

use lockstep::OutputCursor;

/// `[start, start + 1, ..., start + N - 1]`, built at compile time
pub const fn iota<const N: usize>(start: i32) -> [i32; N] {
    let mut out = [0; N];
    let mut i = 0;
    while i < N {
        out[i] = start + i as i32;
        i += 1;
    }
    out
}

/// `0..10`, the sequence every scenario runs over
pub const INPUT: [i32; 10] = iota(0);

/// Apply a fold helper after casting every operand to `i64`
macro_rules! make_signed {
    ($op:ident; $($v:expr),+ $(,)?) => {
        lockstep::$op!($(($v) as i64),+)
    };
}

/// Apply a fold helper after casting every operand to `u64`
macro_rules! make_unsigned {
    ($op:ident; $($v:expr),+ $(,)?) => {
        lockstep::$op!($(($v) as u64),+)
    };
}

/// Output cursor recording `(position, value)` for every write
#[derive(Debug, Default)]
pub struct Recorder<T> {
    pub pos: usize,
    pub writes: Vec<(usize, T)>,
}

impl<T> OutputCursor<T> for Recorder<T> {
    fn put(&mut self, value: T) {
        self.writes.push((self.pos, value));
    }

    fn advance(&mut self) {
        self.pos += 1;
    }
}
