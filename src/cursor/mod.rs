//! Cursor abstraction
//!
//! A cursor is a non-owning position inside a sequence.
//! Read side: dereference + advance + equality (end detection).
//! Write side: put + advance.

mod counting;
mod output;
mod slice;

pub use counting::Counting;
pub use output::{BackInserter, SliceWriter};
pub use slice::SliceCursor;

/// Readable cursor into a caller-owned sequence
///
/// Equality (via `PartialEq`) is only required of the primary cursor,
/// which is compared against its end marker.
pub trait Cursor {
    /// Element produced by dereferencing the cursor
    type Item;

    /// Read the element at the current position
    ///
    /// Must not be called once the cursor has reached its end.
    fn get(&self) -> Self::Item;

    /// Move to the next position
    fn advance(&mut self);
}

/// Writable cursor receiving one value per step
pub trait OutputCursor<T> {
    /// Assign `value` at the current position
    fn put(&mut self, value: T);

    /// Move to the next position
    fn advance(&mut self);
}

impl<C: Cursor + ?Sized> Cursor for &mut C {
    type Item = C::Item;

    #[inline]
    fn get(&self) -> Self::Item {
        (**self).get()
    }

    #[inline]
    fn advance(&mut self) {
        (**self).advance()
    }
}

impl<T, O: OutputCursor<T> + ?Sized> OutputCursor<T> for &mut O {
    #[inline]
    fn put(&mut self, value: T) {
        (**self).put(value)
    }

    #[inline]
    fn advance(&mut self) {
        (**self).advance()
    }
}
