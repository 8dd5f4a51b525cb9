//! Counting cursor (implicit integer sequence)

use std::ops::AddAssign;

use super::Cursor;

/// Cursor over the implicit sequence `start, start + 1, ...`
///
/// Nothing is stored but the current value. Useful as an iota-style
/// source for `transform`, or as an index pack next to real sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Counting<T> {
    value: T,
}

impl<T> Counting<T> {
    /// Cursor positioned at `value`
    pub const fn new(value: T) -> Self {
        Self { value }
    }

    /// Consume the cursor and return its current value
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T> Counting<T>
where
    T: Copy + AddAssign + From<bool>,
{
    /// `(begin, end)` pair for the half-open range `[start, end)`
    pub fn range(start: T, end: T) -> (Self, Self) {
        (Self::new(start), Self::new(end))
    }
}

impl<T> Cursor for Counting<T>
where
    T: Copy + AddAssign + From<bool>,
{
    type Item = T;

    #[inline]
    fn get(&self) -> T {
        self.value
    }

    #[inline]
    fn advance(&mut self) {
        self.value += T::from(true);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_up() {
        let (mut c, e) = Counting::range(5u32, 8);
        let mut seen = Vec::new();
        while c != e {
            seen.push(c.get());
            c.advance();
        }
        assert_eq!(seen, vec![5, 6, 7]);
        assert_eq!(c.into_inner(), 8);
    }

    #[test]
    fn test_counts_signed_bytes() {
        let (mut c, e) = Counting::range(-2i8, 2);
        let mut seen = Vec::new();
        while c != e {
            seen.push(c.get());
            c.advance();
        }
        assert_eq!(seen, vec![-2, -1, 0, 1]);
    }
}
