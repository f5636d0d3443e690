//! The `pipe!` macro for left-to-right pipelines.
//!
//! This module provides the [`pipe!`] macro, a variadic front end to
//! [`pipe`](crate::compose::pipe) that accepts functions of distinct types.

/// Builds a function applying the given `T -> T` functions from left to right.
///
/// `pipe!(f, g, h)(x)` is equivalent to `h(g(f(x)))`.
///
/// Each argument is boxed with [`stage`](crate::compose::stage), so closures
/// and function items can be mixed freely as long as they share one
/// signature. The boxed stages are not `Send`; build a pipeline from
/// [`sync_stage`](crate::compose::sync_stage)s when it must cross threads.
///
/// # Relationship with compose!
///
/// `pipe!(f, g, h)(x)` is equivalent to `compose!(h, g, f)(x)`.
///
/// # Syntax
///
/// - `pipe!()` - The identity function
/// - `pipe!(f)` - Returns `|x| f(x)`
/// - `pipe!(f, g)` - Returns `|x| g(f(x))`
/// - `pipe!(f, g, h, ...)` - Pipes any number of functions
///
/// # Examples
///
/// ## Basic pipeline
///
/// ```
/// use seqfn::pipe;
///
/// fn add_one(x: i32) -> i32 { x + 1 }
///
/// let inc_double = pipe!(add_one, |x: i32| x * 2);
/// assert_eq!(inc_double(5), 12);
/// ```
///
/// ## Pipeline over whole sequences
///
/// ```
/// use seqfn::pipe;
/// use seqfn::transform::{filter, map};
///
/// let normalize = pipe!(
///     |words: Vec<String>| filter(&words, |word| !word.is_empty()),
///     |words: Vec<String>| map(&words, |word| word.to_lowercase()),
/// );
///
/// let words = vec!["Hello".to_string(), String::new(), "WORLD".to_string()];
/// assert_eq!(normalize(words), vec!["hello", "world"]);
/// ```
#[macro_export]
macro_rules! pipe {
    // No functions: identity
    () => {
        $crate::compose::identity
    };

    // One or more functions: box each and apply left to right
    ($($function:expr),+ $(,)?) => {
        $crate::compose::pipe(::std::vec![$($crate::compose::stage($function)),+])
    };
}
