//! Same-type pipelines of any length.
//!
//! [`pipe`] and [`compose_all`] fold a list of `T -> T` functions into one
//! `T -> T` function. They differ only in the direction of application.
//! Functions of distinct closure types are stored as [`Stage`]s, or as
//! [`SyncStage`]s when the resulting pipeline must cross threads.
//!
//! The returned function is `Send + Sync` whenever the element type `F` is.
//! A [`Stage`] is neither, a [`SyncStage`] is both.

/// A boxed `T -> T` function, the element type of heterogeneous pipelines.
pub type Stage<'a, T> = Box<dyn Fn(T) -> T + 'a>;

/// Boxes `function` as a [`Stage`].
///
/// # Examples
///
/// ```
/// use seqfn::compose::{pipe, stage};
///
/// let offset = 10;
/// let pipeline = pipe(vec![stage(|x: i32| x + offset), stage(|x: i32| x * 3)]);
/// assert_eq!(pipeline(1), 33);
/// ```
#[inline]
pub fn stage<'a, T, F>(function: F) -> Stage<'a, T>
where
    F: Fn(T) -> T + 'a,
{
    Box::new(function)
}

/// A boxed `T -> T` function that can be shared across threads.
pub type SyncStage<'a, T> = Box<dyn Fn(T) -> T + Send + Sync + 'a>;

/// Boxes `function` as a [`SyncStage`].
///
/// # Examples
///
/// ```
/// use std::thread;
/// use seqfn::compose::{pipe, sync_stage};
///
/// let pipeline = pipe(vec![sync_stage(|x: i32| x + 1), sync_stage(|x: i32| x * 2)]);
/// let result = thread::scope(|scope| scope.spawn(|| pipeline(5)).join());
/// assert_eq!(result.ok(), Some(12));
/// ```
#[inline]
pub fn sync_stage<'a, T, F>(function: F) -> SyncStage<'a, T>
where
    F: Fn(T) -> T + Send + Sync + 'a,
{
    Box::new(function)
}

/// Builds a function that applies `functions` from first to last.
///
/// `pipe([f1, f2, ..., fn])(x)` is `fn(...f2(f1(x)))`. With no functions the
/// result behaves like [`identity`](super::identity).
///
/// # Examples
///
/// ```
/// use seqfn::compose::pipe;
///
/// fn add_one(x: i32) -> i32 { x + 1 }
/// fn double(x: i32) -> i32 { x * 2 }
///
/// let inc_double = pipe([add_one as fn(i32) -> i32, double]);
/// assert_eq!(inc_double(5), 12);
///
/// let nothing = pipe(Vec::<fn(i32) -> i32>::new());
/// assert_eq!(nothing(5), 5);
/// ```
pub fn pipe<T, F, I>(functions: I) -> impl Fn(T) -> T
where
    I: IntoIterator<Item = F>,
    F: Fn(T) -> T,
{
    let functions: Vec<F> = functions.into_iter().collect();
    move |input| {
        functions
            .iter()
            .fold(input, |value, function| function(value))
    }
}

/// Builds a function that applies `functions` from last to first.
///
/// `compose_all([f1, f2, ..., fn])(x)` is `f1(f2(...fn(x)))`, the
/// mathematical composition `f1 . f2 . ... . fn`. With no functions the
/// result behaves like [`identity`](super::identity).
///
/// # Examples
///
/// ```
/// use seqfn::compose::compose_all;
///
/// fn add_one(x: i32) -> i32 { x + 1 }
/// fn double(x: i32) -> i32 { x * 2 }
///
/// let double_inc = compose_all([add_one as fn(i32) -> i32, double]);
/// assert_eq!(double_inc(5), 11);
/// ```
pub fn compose_all<T, F, I>(functions: I) -> impl Fn(T) -> T
where
    I: IntoIterator<Item = F>,
    F: Fn(T) -> T,
{
    let functions: Vec<F> = functions.into_iter().collect();
    move |input| {
        functions
            .iter()
            .rev()
            .fold(input, |value, function| function(value))
    }
}
