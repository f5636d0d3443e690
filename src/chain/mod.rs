//! Fluent, immutable chain over a sequence.
//!
//! [`Chain`] wraps a single sequence snapshot and exposes chainable
//! [`filter`](Chain::filter) and [`map`](Chain::map) steps. Every step borrows
//! the current chain and returns a new one owning a new sequence, so earlier
//! chains stay valid and can be extracted or extended independently.
//!
//! # State
//!
//! ```text
//! start ──► Chain ──filter/map──► Chain ──filter/map──► ...
//!             │                     │
//!           result               result
//! ```
//!
//! Any chain can be a terminal ([`result`](Chain::result)) or a continuation
//! point. Predicates and mappers receive the element together with its index
//! in the chain's current sequence, starting from 0 at every step.
//!
//! # Examples
//!
//! ```rust
//! use seqfn::chain::Chain;
//!
//! #[derive(Debug, Clone, PartialEq)]
//! struct User {
//!     name: String,
//!     age: u32,
//! }
//!
//! let users = vec![
//!     User { name: "Alice".into(), age: 30 },
//!     User { name: "Bob".into(), age: 25 },
//!     User { name: "Charlie".into(), age: 35 },
//! ];
//!
//! let adults = Chain::start(&users).filter(|user, _| user.age >= 30);
//! let shouted = adults.map(|user, _| User { name: user.name.to_uppercase(), ..user.clone() });
//!
//! assert_eq!(adults.len(), 2);
//! assert_eq!(shouted.result()[1].name, "CHARLIE");
//! // The input is untouched
//! assert_eq!(users[0].name, "Alice");
//! ```
//!
//! Since the mapper must return the same element type, type-changing steps
//! go through [`transform::map`](crate::transform::map) on the result.

use crate::trace;

/// An immutable wrapper around a sequence with chainable operations.
///
/// # Type Parameters
///
/// * `T` - The element type
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Chain<T> {
    elements: Vec<T>,
}

static_assertions::assert_impl_all!(Chain<i32>: Send, Sync, Clone, Default);
static_assertions::assert_impl_all!(Chain<String>: Send, Sync, Clone, Default);

/// Starts a chain from a copy of `sequence`.
///
/// Shorthand for [`Chain::start`].
///
/// # Examples
///
/// ```rust
/// use seqfn::chain::start;
///
/// let chain = start(&[1, 2, 3]).map(|value, index| value * 10 + index as i32);
/// assert_eq!(chain.result(), vec![10, 21, 32]);
/// ```
#[inline]
pub fn start<T: Clone>(sequence: &[T]) -> Chain<T> {
    Chain::start(sequence)
}

impl<T: Clone> Chain<T> {
    /// Creates a chain holding a copy of `sequence`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqfn::chain::Chain;
    ///
    /// let chain = Chain::start(&["a", "b"]);
    /// assert_eq!(chain.result(), vec!["a", "b"]);
    /// ```
    #[must_use]
    pub fn start(sequence: &[T]) -> Self {
        Self {
            elements: sequence.to_vec(),
        }
    }

    /// Returns a new chain keeping the elements for which `predicate` holds.
    ///
    /// `predicate` receives each element and its index in this chain. Order
    /// is preserved, and the next step indexes the kept elements from 0.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqfn::chain::Chain;
    ///
    /// let chain = Chain::start(&["a", "b", "c", "d"]);
    /// let even_positions = chain.filter(|_, index| index % 2 == 0);
    /// assert_eq!(even_positions.result(), vec!["a", "c"]);
    ///
    /// // Indices restart against the filtered sequence
    /// let first = even_positions.filter(|_, index| index == 0);
    /// assert_eq!(first.result(), vec!["a"]);
    /// ```
    #[must_use]
    pub fn filter<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&T, usize) -> bool,
    {
        let elements: Vec<T> = self
            .elements
            .iter()
            .enumerate()
            .filter(|(index, element)| predicate(*element, *index))
            .map(|(_, element)| element.clone())
            .collect();
        trace::step("chain.filter", self.elements.len(), elements.len());
        Self { elements }
    }

    /// Returns a new chain with every element replaced by `mapper`'s output.
    ///
    /// `mapper` receives each element and its index and returns an element of
    /// the same type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqfn::chain::Chain;
    ///
    /// let numbered = Chain::start(&["x", "y"]).map(|_, index| if index == 0 { "first" } else { "rest" });
    /// assert_eq!(numbered.result(), vec!["first", "rest"]);
    /// ```
    #[must_use]
    pub fn map<F>(&self, mut mapper: F) -> Self
    where
        F: FnMut(&T, usize) -> T,
    {
        let elements: Vec<T> = self
            .elements
            .iter()
            .enumerate()
            .map(|(index, element)| mapper(element, index))
            .collect();
        trace::step("chain.map", self.elements.len(), elements.len());
        Self { elements }
    }

    /// Returns a copy of the current sequence.
    ///
    /// The chain is left intact; repeated calls return equal vectors.
    #[must_use]
    pub fn result(&self) -> Vec<T> {
        self.elements.clone()
    }
}

impl<T> Chain<T> {
    /// Consumes the chain and returns its sequence without copying.
    #[must_use]
    pub fn into_result(self) -> Vec<T> {
        self.elements
    }

    /// Borrows the current sequence.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    /// Returns the number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the chain holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Iterates over the elements in order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elements.iter()
    }
}

impl<T> From<Vec<T>> for Chain<T> {
    fn from(elements: Vec<T>) -> Self {
        Self { elements }
    }
}

impl<T> FromIterator<T> for Chain<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            elements: iter.into_iter().collect(),
        }
    }
}

impl<T> IntoIterator for Chain<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Chain<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}
