//! Fixed-arity combinators for function composition.
//!
//! This module provides the building blocks that the pipeline functions and
//! macros are made of:
//!
//! - [`identity`]: The identity function (I combinator)
//! - [`compose2`]: Two-stage composition `A -> B -> C`
//! - [`compose3`]: Three-stage composition `A -> B -> C -> D`
//!
//! Unlike [`pipe`](super::pipe) and [`compose_all`](super::compose_all), the
//! fixed-arity combinators let every stage change the value's type.

/// Returns the value unchanged.
///
/// The identity function is the unit element of function composition and the
/// result of piping or composing zero functions:
/// - `compose2(identity, f)` is equivalent to `f`
/// - `compose2(f, identity)` is equivalent to `f`
///
/// # Examples
///
/// ```
/// use seqfn::compose::identity;
///
/// assert_eq!(identity(42), 42);
/// assert_eq!(identity("hello"), "hello");
/// assert_eq!(identity(vec![1, 2, 3]), vec![1, 2, 3]);
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

/// Chains two functions, feeding the output of `first` into `second`.
///
/// `compose2(f1, f2)(x)` is `f2(f1(x))`. The intermediate type `B` only has
/// to line up between the two stages.
///
/// # Type Parameters
///
/// * `A` - Input of the composed function
/// * `B` - Output of `first`, input of `second`
/// * `C` - Output of the composed function
///
/// # Examples
///
/// ```
/// use seqfn::compose::compose2;
///
/// fn to_string(x: i32) -> String { x.to_string() }
/// fn get_length(s: String) -> usize { s.len() }
///
/// let digits = compose2(to_string, get_length);
/// assert_eq!(digits(12345), 5);
/// ```
///
/// # Processing a whole sequence
///
/// ```
/// use seqfn::compose::compose2;
/// use seqfn::transform::{filter, map, reduce};
///
/// let positive = |values: Vec<i32>| filter(&values, |value| *value > 0);
/// let sum = |values: Vec<i32>| reduce(&map(&values, |value| value * 10), 0, |total, value| total + value);
///
/// let process = compose2(positive, sum);
/// assert_eq!(process(vec![-1, 2, -3, 4]), 60);
/// ```
#[inline]
pub fn compose2<A, B, C, F, G>(first: F, second: G) -> impl Fn(A) -> C
where
    F: Fn(A) -> B,
    G: Fn(B) -> C,
{
    move |input| second(first(input))
}

/// Chains three functions from left to right.
///
/// `compose3(f1, f2, f3)(x)` is `f3(f2(f1(x)))`.
///
/// # Examples
///
/// ```
/// use seqfn::compose::compose3;
///
/// let parse = |text: &str| text.trim().parse::<i32>().unwrap_or(0);
/// let square = |value: i32| value * value;
/// let describe = |value: i32| format!("= {value}");
///
/// let pipeline = compose3(parse, square, describe);
/// assert_eq!(pipeline(" 12 "), "= 144");
/// ```
#[inline]
pub fn compose3<A, B, C, D, F, G, H>(first: F, second: G, third: H) -> impl Fn(A) -> D
where
    F: Fn(A) -> B,
    G: Fn(B) -> C,
    H: Fn(C) -> D,
{
    move |input| third(second(first(input)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_with_unit() {
        assert_eq!(identity(()), ());
    }

    #[test]
    fn test_compose2_applies_first_then_second() {
        let composed = compose2(|x: i32| x + 1, |x: i32| x * 2);
        // (5 + 1) * 2
        assert_eq!(composed(5), 12);
    }

    #[test]
    fn test_compose3_changes_type_each_stage() {
        let composed = compose3(
            |x: u8| u32::from(x) * 1000,
            |x: u32| x.to_string(),
            |text: String| text.len(),
        );
        assert_eq!(composed(255), 6);
    }
}
