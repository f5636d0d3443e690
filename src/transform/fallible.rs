//! Transforms driven by fallible caller functions.
//!
//! Each function short-circuits on the first `Err` produced by the caller's
//! function and returns that error as is. Elements after the failing one are
//! never visited. The error type belongs to the caller; nothing here wraps
//! or translates it.

use crate::trace;

/// Like [`filter`](super::filter), with a predicate that may fail.
///
/// # Errors
///
/// Returns the first error produced by `predicate`.
///
/// # Examples
///
/// ```
/// use seqfn::transform::try_filter;
///
/// let inputs = ["1", "22", "333"];
/// let short: Result<Vec<&str>, String> = try_filter(&inputs, |text| Ok(text.len() < 3));
/// assert_eq!(short, Ok(vec!["1", "22"]));
///
/// let failed: Result<Vec<&str>, String> =
///     try_filter(&inputs, |text| Err(format!("rejected {text}")));
/// assert_eq!(failed, Err("rejected 1".to_string()));
/// ```
pub fn try_filter<T, E, P>(sequence: &[T], mut predicate: P) -> Result<Vec<T>, E>
where
    T: Clone,
    P: FnMut(&T) -> Result<bool, E>,
{
    let mut kept = Vec::new();
    for element in sequence {
        if predicate(element)? {
            kept.push(element.clone());
        }
    }
    trace::step("try_filter", sequence.len(), kept.len());
    Ok(kept)
}

/// Like [`map`](super::map), with a mapper that may fail.
///
/// # Errors
///
/// Returns the first error produced by `mapper`.
///
/// # Examples
///
/// ```
/// use seqfn::transform::try_map;
///
/// let parsed: Result<Vec<i32>, _> = try_map(&["1", "2", "3"], |text| text.parse::<i32>());
/// assert_eq!(parsed, Ok(vec![1, 2, 3]));
///
/// let broken: Result<Vec<i32>, _> = try_map(&["1", "x"], |text| text.parse::<i32>());
/// assert!(broken.is_err());
/// ```
pub fn try_map<T, R, E, F>(sequence: &[T], mapper: F) -> Result<Vec<R>, E>
where
    F: FnMut(&T) -> Result<R, E>,
{
    sequence.iter().map(mapper).collect()
}

/// Like [`reduce`](super::reduce), with a reducer that may fail.
///
/// # Errors
///
/// Returns the first error produced by `reducer`.
///
/// # Examples
///
/// ```
/// use seqfn::transform::try_reduce;
///
/// let checked = try_reduce(&[100_u8, 100], 0_u8, |total, value| total.checked_add(*value).ok_or("overflow"));
/// assert_eq!(checked, Ok(200));
///
/// let overflow = try_reduce(&[200_u8, 100], 0_u8, |total, value| total.checked_add(*value).ok_or("overflow"));
/// assert_eq!(overflow, Err("overflow"));
/// ```
pub fn try_reduce<T, B, E, F>(sequence: &[T], initial: B, reducer: F) -> Result<B, E>
where
    F: FnMut(B, &T) -> Result<B, E>,
{
    sequence.iter().try_fold(initial, reducer)
}
