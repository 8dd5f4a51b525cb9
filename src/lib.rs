//! # Lock-step traversal over several sequences
//!
//! Generic algorithms that walk one *primary* sequence and any number of
//! *secondary* sequences together, one position per step, handing the
//! aligned elements to a caller-supplied predicate or operation.
//!
//! ## Core Algorithms
//!
//! 1. **Advance**: step the primary cursor and every secondary cursor once
//! 2. **find**: first aligned position where a predicate holds
//! 3. **any_of / found**: whether such a position exists
//! 4. **transform**: map aligned positions through an operation into an output cursor
//!
//! Secondary sequences are tuples of cursors (`()`, `(A,)`, `(A, B)`, ...),
//! so the arity is fixed at compile time and a callable of the wrong arity
//! does not compile. Secondary and output cursors are *not* bounds-checked
//! by the algorithms: they must be at least as long as the primary range.
//!
//! ## Usage Example
//!
//! ```
//! use lockstep::{find, transform, BackInserter, SliceCursor};
//!
//! let xs = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9];
//! let (b, e) = SliceCursor::bounds(&xs);
//!
//! let (hit, _) = find(|x: &i32| *x == 3, b, e, ());
//! assert_eq!(hit.position(), 3);
//!
//! let mut sums = Vec::new();
//! transform(|x: &i32, y: &i32, z: &i32| x + y + z, BackInserter::new(&mut sums), b, e, (b, b));
//! assert_eq!(sums[3], 9);
//! ```
//!
//! Compile-time counterparts live in [`constant`] (`const_find!`,
//! `const_any_of!`, `const_transform!`).

#![warn(missing_docs, missing_debug_implementations)]

// Macro modules first so their textual scope covers the rest of the crate
pub mod ops;        // Variadic folds: plus!, multiply!, equal_to!, not_equal_to!
pub mod constant;   // Compile-time find / any_of / transform

pub mod cursor;     // Read and write cursors
pub mod pack;       // Secondary packs and the advance primitive
pub mod algorithm;  // find, any_of, found, transform
pub mod sequence;   // Textual integer sequences (CLI input)

// Re-exports for convenience
pub use algorithm::{any_of, find, found, transform};
pub use cursor::{BackInserter, Counting, Cursor, OutputCursor, SliceCursor, SliceWriter};
pub use pack::{LockstepFn, Secondaries};
pub use sequence::{parse_sequence, SequenceError};
