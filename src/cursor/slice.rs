//! Cursor over a borrowed slice

use std::fmt;
use std::ptr;

use super::Cursor;

/// Position inside a borrowed slice
///
/// Dereferencing yields `&'a T`, so callables get read-only access to
/// caller-owned elements. Two cursors are equal when they point into the
/// same slice at the same position.
///
/// Reading past the end of the slice panics (index out of bounds).
pub struct SliceCursor<'a, T> {
    items: &'a [T],
    pos: usize,
}

impl<'a, T> SliceCursor<'a, T> {
    /// Cursor at the first element
    pub const fn begin(items: &'a [T]) -> Self {
        Self { items, pos: 0 }
    }

    /// Cursor one past the last element
    pub const fn end(items: &'a [T]) -> Self {
        Self {
            items,
            pos: items.len(),
        }
    }

    /// Cursor at an arbitrary offset (may equal `items.len()`)
    pub const fn at(items: &'a [T], pos: usize) -> Self {
        Self { items, pos }
    }

    /// `(begin, end)` pair covering the whole slice
    pub const fn bounds(items: &'a [T]) -> (Self, Self) {
        (Self::begin(items), Self::end(items))
    }

    /// Offset from the start of the slice
    #[inline]
    pub const fn position(&self) -> usize {
        self.pos
    }

    /// Whether the cursor sits one past the last element
    #[inline]
    pub const fn is_end(&self) -> bool {
        self.pos >= self.items.len()
    }

    /// Element at the current position, `None` at or past the end
    pub fn peek(&self) -> Option<&'a T> {
        self.items.get(self.pos)
    }
}

impl<'a, T> Cursor for SliceCursor<'a, T> {
    type Item = &'a T;

    #[inline]
    fn get(&self) -> &'a T {
        &self.items[self.pos]
    }

    #[inline]
    fn advance(&mut self) {
        self.pos += 1;
    }
}

// Manual impls: cursors are copyable regardless of `T`.
impl<T> Clone for SliceCursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SliceCursor<'_, T> {}

impl<T> PartialEq for SliceCursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.items.as_ptr(), other.items.as_ptr()) && self.pos == other.pos
    }
}

impl<T> Eq for SliceCursor<'_, T> {}

impl<T> fmt::Debug for SliceCursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SliceCursor")
            .field("pos", &self.pos)
            .field("len", &self.items.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_begin_end_bounds() {
        let data = [1, 2, 3];
        let (b, e) = SliceCursor::bounds(&data);
        assert_eq!(b, SliceCursor::begin(&data));
        assert_eq!(e, SliceCursor::end(&data));
        assert_eq!(e.position(), 3);
        assert!(e.is_end());
        assert!(!b.is_end());
    }

    #[test]
    fn test_advance_reaches_end() {
        let data = [10, 20];
        let (mut c, e) = SliceCursor::bounds(&data);
        assert_eq!(*c.get(), 10);
        c.advance();
        assert_eq!(*c.get(), 20);
        c.advance();
        assert_eq!(c, e);
        assert_eq!(c.peek(), None);
    }

    #[test]
    fn test_cursors_into_different_slices_differ() {
        let a = [1, 2];
        let b = [1, 2];
        assert_ne!(SliceCursor::begin(&a), SliceCursor::begin(&b));
    }

    #[test]
    #[should_panic]
    fn test_get_past_end_panics() {
        let data = [1];
        let c = SliceCursor::end(&data);
        let _ = c.get();
    }
}
