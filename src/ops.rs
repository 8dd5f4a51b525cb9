//! Variadic folds for predicates and operations
//!
//! Macros rather than functions so any number of arguments works, and so
//! the expansions stay usable in `const` contexts for primitive integers.

/// Sum of all arguments (a single argument is returned as is)
///
/// ```
/// use lockstep::plus;
///
/// assert_eq!(plus!(1), 1);
/// assert_eq!(plus!(100, 158, 699), 957);
/// ```
#[macro_export]
macro_rules! plus {
    ($first:expr $(, $rest:expr)* $(,)?) => {
        ($first $(+ $rest)*)
    };
}

/// Product of all arguments (a single argument is returned as is)
///
/// ```
/// use lockstep::multiply;
///
/// assert_eq!(multiply!(1, -1), -1);
/// assert_eq!(multiply!(100, 158, 699), 11_044_200);
/// ```
#[macro_export]
macro_rules! multiply {
    ($first:expr $(, $rest:expr)* $(,)?) => {
        ($first $(* $rest)*)
    };
}

/// `true` when `first` equals at least one of the remaining arguments
///
/// At least one argument besides `first` is required.
///
/// ```
/// use lockstep::equal_to;
///
/// assert!(equal_to!(3, 1, 3));
/// assert!(!equal_to!(3, 1, 2));
/// ```
#[macro_export]
macro_rules! equal_to {
    ($first:expr, $head:expr $(, $rest:expr)* $(,)?) => {{
        let first = $first;
        first == $head $(|| first == $rest)*
    }};
}

/// `true` when `first` differs from at least one of the remaining arguments
///
/// At least one argument besides `first` is required.
///
/// ```
/// use lockstep::not_equal_to;
///
/// assert!(not_equal_to!(3, 3, 6, 5, 3));
/// assert!(!not_equal_to!(3, 3, 3));
/// ```
#[macro_export]
macro_rules! not_equal_to {
    ($first:expr, $head:expr $(, $rest:expr)* $(,)?) => {{
        let first = $first;
        first != $head $(|| first != $rest)*
    }};
}
