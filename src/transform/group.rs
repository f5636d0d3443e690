//! Grouping elements by a derived key.

use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};

use crate::trace;

/// Hasher used by [`GroupMap`].
///
/// Selected at compile time: `rustc_hash::FxBuildHasher` with the `fxhash`
/// feature, `ahash::RandomState` with `ahash`, the standard library's
/// `RandomState` otherwise. `fxhash` wins when both are enabled.
#[cfg(feature = "fxhash")]
pub type GroupHasher = rustc_hash::FxBuildHasher;

/// Hasher used by [`GroupMap`].
#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
pub type GroupHasher = ahash::RandomState;

/// Hasher used by [`GroupMap`].
#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
pub type GroupHasher = std::collections::hash_map::RandomState;

/// Key to bucket mapping returned by [`group_by_fast`].
pub type GroupMap<K, T> = HashMap<K, Vec<T>, GroupHasher>;

/// Groups the elements of `sequence` by the key computed by `key_function`.
///
/// Every element lands in exactly one bucket. Inside a bucket elements keep
/// their order from `sequence`; the iteration order of the buckets
/// themselves is unspecified.
///
/// # Examples
///
/// ```
/// use seqfn::transform::group_by;
///
/// let fruits = ["apple", "banana", "apricot", "blueberry", "cherry"];
/// let by_letter = group_by(&fruits, |fruit| fruit.chars().next());
///
/// assert_eq!(by_letter.len(), 3);
/// assert_eq!(by_letter[&Some('a')], vec!["apple", "apricot"]);
/// assert_eq!(by_letter[&Some('b')], vec!["banana", "blueberry"]);
/// assert_eq!(by_letter[&Some('c')], vec!["cherry"]);
/// ```
pub fn group_by<T, K, F>(sequence: &[T], key_function: F) -> HashMap<K, Vec<T>>
where
    T: Clone,
    K: Eq + Hash,
    F: FnMut(&T) -> K,
{
    group_by_with_hasher(sequence, key_function)
}

/// Same as [`group_by`], using the hasher selected by the crate features.
pub fn group_by_fast<T, K, F>(sequence: &[T], key_function: F) -> GroupMap<K, T>
where
    T: Clone,
    K: Eq + Hash,
    F: FnMut(&T) -> K,
{
    group_by_with_hasher(sequence, key_function)
}

/// Same as [`group_by`], building the map with an arbitrary hasher `S`.
///
/// # Examples
///
/// ```
/// use std::collections::hash_map::RandomState;
/// use std::collections::HashMap;
/// use seqfn::transform::group_by_with_hasher;
///
/// let parity: HashMap<bool, Vec<i32>, RandomState> =
///     group_by_with_hasher(&[1, 2, 3, 4], |value| value % 2 == 0);
/// assert_eq!(parity[&true], vec![2, 4]);
/// assert_eq!(parity[&false], vec![1, 3]);
/// ```
pub fn group_by_with_hasher<T, K, S, F>(
    sequence: &[T],
    mut key_function: F,
) -> HashMap<K, Vec<T>, S>
where
    T: Clone,
    K: Eq + Hash,
    S: BuildHasher + Default,
    F: FnMut(&T) -> K,
{
    let mut groups: HashMap<K, Vec<T>, S> = HashMap::default();
    for element in sequence {
        groups
            .entry(key_function(element))
            .or_default()
            .push(element.clone());
    }
    trace::step("group_by", sequence.len(), groups.len());
    groups
}
