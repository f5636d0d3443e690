//! The `compose!` macro for function composition.
//!
//! This module provides the [`compose!`] macro which composes functions
//! from right to left, following the mathematical notation for function composition.

/// Composes `T -> T` functions from right to left.
///
/// `compose!(f, g, h)(x)` is equivalent to `f(g(h(x)))`.
///
/// This follows the mathematical convention where function composition reads
/// right-to-left: the rightmost function is applied first. Arguments are
/// boxed with [`stage`](crate::compose::stage) and handed to
/// [`compose_all`](crate::compose::compose_all). The result is not `Send`;
/// use [`sync_stage`](crate::compose::sync_stage) directly for thread-safe
/// compositions.
///
/// # Laws
///
/// - **Associativity**: `compose!(f, compose!(g, h)) == compose!(compose!(f, g), h)`
/// - **Left Identity**: `compose!(identity, f) == f`
/// - **Right Identity**: `compose!(f, identity) == f`
///
/// # Syntax
///
/// - `compose!()` - The identity function
/// - `compose!(f)` - Returns `|x| f(x)`
/// - `compose!(f, g)` - Returns `|x| f(g(x))`
/// - `compose!(f, g, h, ...)` - Composes any number of functions
///
/// # Examples
///
/// ## Basic composition
///
/// ```
/// use seqfn::compose;
///
/// fn add_one(x: i32) -> i32 { x + 1 }
/// fn double(x: i32) -> i32 { x * 2 }
///
/// // compose!(f, g)(x) = f(g(x)) = add_one(double(5)) = add_one(10) = 11
/// let composed = compose!(add_one, double);
/// assert_eq!(composed(5), 11);
/// ```
///
/// ## With closures capturing environment
///
/// ```
/// use seqfn::compose;
///
/// let multiplier = 3;
/// let multiply = |x: i32| x * multiplier;
/// let add_ten = |x: i32| x + 10;
///
/// let composed = compose!(add_ten, multiply);
/// assert_eq!(composed(5), 25); // add_ten(multiply(5)) = add_ten(15) = 25
/// ```
#[macro_export]
macro_rules! compose {
    // No functions: identity
    () => {
        $crate::compose::identity
    };

    // One or more functions: box each and apply right to left
    ($($function:expr),+ $(,)?) => {
        $crate::compose::compose_all(::std::vec![$($crate::compose::stage($function)),+])
    };
}
