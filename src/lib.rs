//! # seqfn
//!
//! Generic higher-order functions for transforming in-memory sequences.
//!
//! ## Overview
//!
//! The crate bundles the handful of combinators that keep showing up when
//! working with slices of records:
//!
//! - **Transforms**: [`filter`], [`map`], [`reduce`], [`group_by`] and their
//!   fallible `try_*` counterparts
//! - **Pipelines**: [`pipe`], [`compose_all`], [`compose2`], [`compose3`]
//! - **Fluent chain**: [`Chain`], an immutable wrapper with chainable
//!   `filter` / `map` steps
//!
//! Every operation is pure with respect to its input: slices are borrowed and
//! new vectors are returned.
//!
//! ## Feature Flags
//!
//! - `transform`: Free transform functions (default)
//! - `compose`: Pipeline combinators (default)
//! - `chain`: Fluent chain wrapper, implies `transform` (default)
//! - `serde`: Serialization for [`Chain`]
//! - `fxhash` / `ahash`: Faster hasher for [`GroupMap`]
//! - `tracing`: Trace-level events through the `tracing` crate
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use seqfn::prelude::*;
//!
//! let evens_doubled = Chain::start(&[1, 2, 3, 4, 5, 6])
//!     .filter(|value, _| value % 2 == 0)
//!     .map(|value, _| value * 2)
//!     .result();
//! assert_eq!(evens_doubled, vec![4, 8, 12]);
//!
//! let total = reduce(&evens_doubled, 0, |accumulator, value| accumulator + value);
//! assert_eq!(total, 24);
//! ```
//!
//! [`filter`]: crate::transform::filter
//! [`map`]: crate::transform::map
//! [`reduce`]: crate::transform::reduce
//! [`group_by`]: crate::transform::group_by
//! [`GroupMap`]: crate::transform::GroupMap
//! [`pipe`]: crate::compose::pipe
//! [`compose_all`]: crate::compose::compose_all
//! [`compose2`]: crate::compose::compose2
//! [`compose3`]: crate::compose::compose3
//! [`Chain`]: crate::chain::Chain

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the transform functions, the pipeline combinators and the
/// fluent chain.
///
/// # Usage
///
/// ```rust
/// use seqfn::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "transform")]
    pub use crate::transform::*;

    #[cfg(feature = "compose")]
    pub use crate::compose::*;

    #[cfg(feature = "chain")]
    pub use crate::chain::*;
}

#[cfg(feature = "transform")]
pub mod transform;

#[cfg(feature = "compose")]
pub mod compose;

#[cfg(feature = "chain")]
pub mod chain;

#[cfg(feature = "transform")]
mod trace;
