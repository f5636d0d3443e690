//! Free transform functions over slices.
//!
//! This module provides the elementary sequence transforms. Each one borrows
//! its input slice, applies a caller-supplied function uniformly and returns
//! a fresh value. The input is never mutated.
//!
//! # Overview
//!
//! - [`filter`]: Keep the elements satisfying a predicate
//! - [`map`]: Convert every element, possibly to another type
//! - [`reduce`]: Left fold into an accumulator
//! - [`group_by`]: Bucket elements by a derived key
//!
//! Fallible caller functions are supported by [`try_filter`], [`try_map`] and
//! [`try_reduce`], which stop at the first error and hand it back untouched.
//!
//! # Examples
//!
//! ```
//! use seqfn::transform::{filter, map, reduce};
//!
//! let numbers = vec![1, 2, 3, 4, 5];
//!
//! let odd = filter(&numbers, |value| value % 2 == 1);
//! assert_eq!(odd, vec![1, 3, 5]);
//!
//! let labels = map(&odd, |value| format!("#{value}"));
//! assert_eq!(labels, vec!["#1", "#3", "#5"]);
//!
//! let sum = reduce(&numbers, 0, |accumulator, value| accumulator + value);
//! assert_eq!(sum, 15);
//! ```
//!
//! # Laws
//!
//! - **Filter identity**: `filter(s, |_| true) == s`
//! - **Map length**: `map(s, f).len() == s.len()`
//! - **Reduce unit**: `reduce(&[], init, r) == init`
//! - **Reduce singleton**: `reduce(&[x], init, r) == r(init, &x)`

mod fallible;
mod group;

pub use fallible::{try_filter, try_map, try_reduce};
pub use group::{GroupHasher, GroupMap, group_by, group_by_fast, group_by_with_hasher};

use crate::trace;

/// Returns the elements of `sequence` for which `predicate` holds.
///
/// The relative order of the kept elements is the order of `sequence`.
/// An empty input yields an empty vector.
///
/// # Examples
///
/// ```
/// use seqfn::transform::filter;
///
/// let words = ["tree", "sky", "forest", "sea"];
/// let long_words = filter(&words, |word| word.len() > 3);
/// assert_eq!(long_words, vec!["tree", "forest"]);
/// ```
pub fn filter<T, P>(sequence: &[T], mut predicate: P) -> Vec<T>
where
    T: Clone,
    P: FnMut(&T) -> bool,
{
    let kept: Vec<T> = sequence
        .iter()
        .filter(|element| predicate(*element))
        .cloned()
        .collect();
    trace::step("filter", sequence.len(), kept.len());
    kept
}

/// Applies `mapper` to every element of `sequence`.
///
/// The output has the same length and order as the input, and may hold a
/// different element type.
///
/// # Examples
///
/// ```
/// use seqfn::transform::map;
///
/// let lengths = map(&["a", "bb", "ccc"], |text| text.len());
/// assert_eq!(lengths, vec![1, 2, 3]);
/// ```
pub fn map<T, R, F>(sequence: &[T], mapper: F) -> Vec<R>
where
    F: FnMut(&T) -> R,
{
    sequence.iter().map(mapper).collect()
}

/// Folds `sequence` from left to right.
///
/// The accumulator starts at `initial` and is replaced by
/// `reducer(accumulator, element)` for each element in order. For an empty
/// sequence `initial` is returned unchanged.
///
/// # Examples
///
/// ```
/// use seqfn::transform::reduce;
///
/// let digits = reduce(&[1, 2, 3], String::new(), |mut text, digit| {
///     text.push_str(&digit.to_string());
///     text
/// });
/// assert_eq!(digits, "123");
/// ```
pub fn reduce<T, B, F>(sequence: &[T], initial: B, reducer: F) -> B
where
    F: FnMut(B, &T) -> B,
{
    sequence.iter().fold(initial, reducer)
}
