//! Compile-time forms of the lock-step algorithms
//!
//! Trait methods cannot be called in `const` contexts, so these macros
//! expand to plain bounded `while` loops over indexable sequences
//! (arrays, slices). Cursors become offsets; since every sequence is
//! stepped once per iteration, secondary offsets are `start + steps`.
//!
//! Syntax shared by all three macros:
//!
//! ```text
//! |p, s1, ..., sn| body ; PRIMARY, first, last ; SEQ1, start1 ; ... ; SEQn, startn
//! ```
//!
//! Every bound and start offset is evaluated once. The bound names receive
//! elements by value, so elements must be `Copy`.
//! The names and the sequence list must have the same length, otherwise
//! expansion fails.

/// Compile-time `find`
///
/// Evaluates to `(primary_offset, (secondary_offsets, ...))`.
///
/// ```
/// use lockstep::const_find;
///
/// const XS: [i32; 5] = [0, 1, 2, 3, 4];
/// const YS: [i32; 5] = [4, 3, 2, 1, 0];
/// const HIT: (usize, (usize,)) = const_find!(|x, y| x == y; XS, 0, XS.len(); YS, 0);
/// assert_eq!(HIT, (2, (2,)));
/// ```
#[macro_export]
macro_rules! const_find {
    (
        |$p:ident $(, $s:ident)* $(,)?| $pred:expr ;
        $primary:expr, $first:expr, $last:expr
        $(; $seq:expr, $start:expr)* $(;)?
    ) => {{
        let first: usize = $first;
        let last: usize = $last;
        // Each secondary name holds its start offset outside the loop
        $( let $s: usize = $start; )*
        let mut pos = first;
        while pos != last {
            let $p = $primary[pos];
            $( let $s = $seq[$s + (pos - first)]; )*
            if $pred {
                break;
            }
            pos += 1;
        }
        (pos, ($($s + (pos - first),)*))
    }};
}

/// Compile-time `any_of`, delegating to [`const_find!`]
///
/// ```
/// use lockstep::const_any_of;
///
/// const XS: [u8; 4] = [1, 3, 5, 7];
/// const HAS_EVEN: bool = const_any_of!(|x| x % 2 == 0; XS, 0, XS.len());
/// assert!(!HAS_EVEN);
/// ```
#[macro_export]
macro_rules! const_any_of {
    (
        |$p:ident $(, $s:ident)* $(,)?| $pred:expr ;
        $primary:expr, $first:expr, $last:expr
        $(; $seq:expr, $start:expr)* $(;)?
    ) => {{
        let end: usize = $last;
        $crate::const_find!(
            |$p $(, $s)*| $pred ; $primary, $first, end $(; $seq, $start)*
        ).0 != end
    }};
}

/// Compile-time `transform`
///
/// Takes the output sequence by value (usually a fresh array) plus the
/// offset of the first write, and evaluates to `(output, offset_after_last_write)`.
///
/// ```
/// use lockstep::const_transform;
///
/// const XS: [i32; 4] = [1, 2, 3, 4];
/// const SQUARES: ([i32; 4], usize) =
///     const_transform!(|x, y| x * y; [0; 4], 0; XS, 0, XS.len(); XS, 0);
/// assert_eq!(SQUARES, ([1, 4, 9, 16], 4));
/// ```
#[macro_export]
macro_rules! const_transform {
    (
        |$p:ident $(, $s:ident)* $(,)?| $op:expr ;
        $out:expr, $out_first:expr ;
        $primary:expr, $first:expr, $last:expr
        $(; $seq:expr, $start:expr)* $(;)?
    ) => {{
        let mut out = $out;
        let mut written: usize = $out_first;
        let first: usize = $first;
        let last: usize = $last;
        $( let $s: usize = $start; )*
        let mut pos = first;
        while pos != last {
            let $p = $primary[pos];
            $( let $s = $seq[$s + (pos - first)]; )*
            out[written] = $op;
            written += 1;
            pos += 1;
        }
        (out, written)
    }};
}
