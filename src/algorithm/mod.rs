//! Lock-step algorithms: `find`, `any_of`/`found`, `transform`
//!
//! Every algorithm walks a primary range `[first, last)` and carries a pack
//! of secondary cursors along with it (see [`crate::pack`]).
//!
//! Single state machine:
//! - state: positioned at offset i
//! - transition: advance everything to i + 1
//! - stop: primary == last (transform), or primary == last / predicate
//!   holds (find)
//!
//! Secondary and output cursors are never bounds-checked by the algorithm
//! itself; the caller guarantees they are at least as long as the primary
//! range.

use tracing::trace;

use crate::cursor::{Cursor, OutputCursor};
use crate::pack::{self, LockstepFn, Secondaries};

/// Find the first position where `pred` holds over all aligned elements
///
/// Returns the primary cursor and the secondary pack at that position, or
/// at `last` (with the pack advanced by the full range length) when nothing
/// matched. The matching position is not advanced past.
///
/// An empty range returns the inputs untouched without calling `pred`.
///
/// ```
/// use lockstep::algorithm::find;
/// use lockstep::cursor::SliceCursor;
///
/// let xs = [0, 1, 2, 3, 4];
/// let ys = [4, 3, 2, 1, 0];
/// let (first, last) = SliceCursor::bounds(&xs);
/// let (hit, (other,)) = find(|x: &i32, y: &i32| x == y, first, last, (SliceCursor::begin(&ys),));
/// assert_eq!(hit.position(), 2);
/// assert_eq!(other.position(), 2);
/// ```
pub fn find<F, C, S>(mut pred: F, mut first: C, last: C, mut rest: S) -> (C, S)
where
    C: Cursor + PartialEq,
    S: Secondaries,
    F: LockstepFn<C::Item, S::Items, Output = bool>,
{
    let mut steps = 0usize;
    while first != last {
        if pred.invoke(first.get(), rest.get()) {
            break;
        }
        pack::advance(&mut first, &mut rest);
        steps += 1;
    }
    trace!(steps, arity = S::ARITY, "find finished");
    (first, rest)
}

/// Whether `pred` holds at any aligned position of `[first, last)`
///
/// Same short-circuit behaviour as [`find`], which it delegates to.
pub fn any_of<F, C, S>(pred: F, first: C, last: C, rest: S) -> bool
where
    C: Cursor + PartialEq + Clone,
    S: Secondaries,
    F: LockstepFn<C::Item, S::Items, Output = bool>,
{
    let (hit, _) = find(pred, first, last.clone(), rest);
    hit != last
}

pub use self::any_of as found;

/// Map every aligned position of `[first, last)` through `op` into `out`
///
/// Exactly one write per primary position, in order. Returns the output
/// cursor one past the last write (`out` unchanged for an empty range).
///
/// ```
/// use lockstep::algorithm::transform;
/// use lockstep::cursor::{SliceCursor, SliceWriter};
///
/// let xs = [1, 2, 3];
/// let mut out = [0; 3];
/// let (first, last) = SliceCursor::bounds(&xs);
/// let w = transform(
///     |x: &i32, y: &i32| x * y,
///     SliceWriter::new(&mut out),
///     first,
///     last,
///     (SliceCursor::begin(&xs),),
/// );
/// assert_eq!(w.position(), 3);
/// assert_eq!(out, [1, 4, 9]);
/// ```
pub fn transform<F, O, C, S>(mut op: F, mut out: O, mut first: C, last: C, mut rest: S) -> O
where
    C: Cursor + PartialEq,
    S: Secondaries,
    F: LockstepFn<C::Item, S::Items>,
    O: OutputCursor<F::Output>,
{
    let mut steps = 0usize;
    while first != last {
        out.put(op.invoke(first.get(), rest.get()));
        out.advance();
        pack::advance(&mut first, &mut rest);
        steps += 1;
    }
    trace!(steps, arity = S::ARITY, "transform finished");
    out
}
