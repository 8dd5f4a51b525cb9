//! Lock-step stepping over a primary cursor plus a pack of secondaries
//!
//! Variadic arity is expressed with tuples:
//! - `()` for no secondary sequences
//! - `(A,)`, `(A, B)`, ... up to eight secondary cursors
//!
//! `Secondaries` steps/reads a pack as one unit; `LockstepFn` spreads the
//! primary element and the pack's elements into a plain closure call, so
//! `|p, a, b| ...` is accepted exactly when the pack has two cursors.

use crate::cursor::Cursor;

/// Pack of secondary cursors advanced in lock-step with a primary cursor
///
/// No bounds check is performed: every cursor in the pack must have at
/// least as many remaining elements as the primary range.
pub trait Secondaries {
    /// Tuple of the elements currently under each cursor
    type Items;

    /// Number of cursors in the pack
    const ARITY: usize;

    /// Advance every cursor in the pack by one position
    fn advance(&mut self);

    /// Read the element under every cursor, in declaration order
    fn get(&self) -> Self::Items;
}

/// Callable taking the primary element followed by each secondary element
///
/// Implemented for every `FnMut(P, S1, ..., Sn) -> R` with `n <= 8`.
pub trait LockstepFn<P, S> {
    /// Value returned by the call
    type Output;

    /// Invoke with the primary element and the unpacked secondary elements
    fn invoke(&mut self, primary: P, secondary: S) -> Self::Output;
}

/// Step the primary cursor and every secondary cursor forward once
#[inline]
pub fn advance<C, S>(primary: &mut C, secondaries: &mut S)
where
    C: Cursor,
    S: Secondaries,
{
    primary.advance();
    secondaries.advance();
}

impl Secondaries for () {
    type Items = ();

    const ARITY: usize = 0;

    #[inline]
    fn advance(&mut self) {}

    #[inline]
    fn get(&self) -> Self::Items {}
}

macro_rules! impl_secondaries {
    ($arity:expr; $($C:ident $idx:tt),+) => {
        impl<$($C: Cursor),+> Secondaries for ($($C,)+) {
            type Items = ($($C::Item,)+);

            const ARITY: usize = $arity;

            #[inline]
            fn advance(&mut self) {
                $( self.$idx.advance(); )+
            }

            #[inline]
            fn get(&self) -> Self::Items {
                ($( self.$idx.get(), )+)
            }
        }
    };
}

impl_secondaries!(1; A 0);
impl_secondaries!(2; A 0, B 1);
impl_secondaries!(3; A 0, B 1, C 2);
impl_secondaries!(4; A 0, B 1, C 2, D 3);
impl_secondaries!(5; A 0, B 1, C 2, D 3, E 4);
impl_secondaries!(6; A 0, B 1, C 2, D 3, E 4, F 5);
impl_secondaries!(7; A 0, B 1, C 2, D 3, E 4, F 5, G 6);
impl_secondaries!(8; A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7);

macro_rules! impl_lockstep_fn {
    ($($S:ident $s:ident),*) => {
        impl<Func, Out, P, $($S),*> LockstepFn<P, ($($S,)*)> for Func
        where
            Func: FnMut(P, $($S),*) -> Out,
        {
            type Output = Out;

            #[inline]
            fn invoke(&mut self, primary: P, ($($s,)*): ($($S,)*)) -> Out {
                self(primary, $($s),*)
            }
        }
    };
}

impl_lockstep_fn!();
impl_lockstep_fn!(A a);
impl_lockstep_fn!(A a, B b);
impl_lockstep_fn!(A a, B b, C c);
impl_lockstep_fn!(A a, B b, C c, D d);
impl_lockstep_fn!(A a, B b, C c, D d, E e);
impl_lockstep_fn!(A a, B b, C c, D d, E e, F f);
impl_lockstep_fn!(A a, B b, C c, D d, E e, F f, G g);
impl_lockstep_fn!(A a, B b, C c, D d, E e, F f, G g, H h);
