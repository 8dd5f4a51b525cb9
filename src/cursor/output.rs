//! Output cursors

use std::fmt;

use super::OutputCursor;

/// Writes into a borrowed mutable slice, one slot per step
///
/// Writing past the end of the slice panics.
pub struct SliceWriter<'a, T> {
    items: &'a mut [T],
    pos: usize,
}

impl<'a, T> SliceWriter<'a, T> {
    /// Writer positioned at the first slot
    pub fn new(items: &'a mut [T]) -> Self {
        Self { items, pos: 0 }
    }

    /// Writer positioned at `pos`
    pub fn at(items: &'a mut [T], pos: usize) -> Self {
        Self { items, pos }
    }

    /// Offset of the next slot to be written
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Slots not yet written
    pub fn remaining(&self) -> usize {
        self.items.len().saturating_sub(self.pos)
    }
}

impl<T> OutputCursor<T> for SliceWriter<'_, T> {
    #[inline]
    fn put(&mut self, value: T) {
        self.items[self.pos] = value;
    }

    #[inline]
    fn advance(&mut self) {
        self.pos += 1;
    }
}

impl<T> fmt::Debug for SliceWriter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SliceWriter")
            .field("pos", &self.pos)
            .field("len", &self.items.len())
            .finish()
    }
}

/// Appends every written value to a `Vec`
///
/// Advancing is a no-op: the next `put` always lands at the back.
#[derive(Debug)]
pub struct BackInserter<'a, T> {
    items: &'a mut Vec<T>,
}

impl<'a, T> BackInserter<'a, T> {
    /// Inserter appending to `items`
    pub fn new(items: &'a mut Vec<T>) -> Self {
        Self { items }
    }

    /// Current length of the target vector
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the target vector is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> OutputCursor<T> for BackInserter<'_, T> {
    #[inline]
    fn put(&mut self, value: T) {
        self.items.push(value);
    }

    #[inline]
    fn advance(&mut self) {}
}
