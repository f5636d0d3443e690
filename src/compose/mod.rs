//! Function composition utilities.
//!
//! This module provides functions and macros for combining unary functions
//! into a single unary function.
//!
//! # Overview
//!
//! Same-type pipelines of any length:
//!
//! - [`pipe`]: Apply `T -> T` functions left-to-right (data flow style)
//! - [`compose_all`]: Apply `T -> T` functions right-to-left (mathematical composition)
//! - [`pipe!`] / [`compose!`]: Variadic front ends accepting mixed closure types
//! - [`stage`] / [`sync_stage`]: Box closures of distinct types for one pipeline
//!
//! Type-changing compositions of fixed arity:
//!
//! - [`compose2`]: `A -> B` then `B -> C`
//! - [`compose3`]: `A -> B` then `B -> C` then `C -> D`
//!
//! There is no variadic type-changing composer; chain [`compose2`] and
//! [`compose3`] for longer heterogeneous pipelines.
//!
//! # Examples
//!
//! ## Pipeline (left-to-right)
//!
//! ```
//! use seqfn::compose::{pipe, stage};
//!
//! let inc_double = pipe(vec![stage(|x: i32| x + 1), stage(|x: i32| x * 2)]);
//! assert_eq!(inc_double(5), 12); // (5 + 1) * 2
//! ```
//!
//! ## Composition (right-to-left)
//!
//! ```
//! use seqfn::compose::{compose_all, stage};
//!
//! let double_inc = compose_all(vec![stage(|x: i32| x + 1), stage(|x: i32| x * 2)]);
//! assert_eq!(double_inc(5), 11); // 5 * 2 + 1
//! ```
//!
//! ## Type-changing stages
//!
//! ```
//! use seqfn::compose::compose2;
//!
//! let shout = compose2(|name: &str| name.to_uppercase(), |name: String| name + "!");
//! assert_eq!(shout("hey"), "HEY!");
//! ```
//!
//! # Laws
//!
//! - **Associativity**: `compose!(f, compose!(g, h)) == compose!(compose!(f, g), h)`
//! - **Identity**: `pipe([])` and `compose_all([])` behave as [`identity`]
//! - **Duality**: `pipe([f, g])(x) == compose_all([g, f])(x)`

mod compose_macro;
mod pipe_macro;
mod pipeline;
mod utils;

pub use pipeline::{Stage, SyncStage, compose_all, pipe, stage, sync_stage};
pub use utils::{compose2, compose3, identity};

// Re-export macros (they are already at crate root via #[macro_export])
pub use crate::compose;
pub use crate::pipe;
