//! # sequor
//!
//! Sequential asynchronous traversal combinators over slices.
//!
//! ## Overview
//!
//! `Iterator::filter`, `Iterator::all` and friends evaluate their closure's
//! result immediately, so they cannot wait on a future. This crate provides
//! the same operations for callbacks that return a future:
//!
//! - **Predicates**: [`filter`], [`every`], [`some`], [`find`],
//!   [`find_index`], [`find_last`], [`find_last_index`]
//! - **Transformations**: [`map`], [`for_each`]
//! - **Folds**: [`reduce`], [`reduce_right`]
//!
//! Every operation visits elements one at a time and awaits each
//! callback's future before invoking the callback for the next element.
//! Side effects and accumulator updates therefore happen in strict index
//! order, and at most one callback future is in flight at any moment.
//! Running callbacks concurrently is deliberately not offered: it would
//! break fold semantics and the ordering of `for_each`.
//!
//! ## Callbacks
//!
//! A callback receives `(element, index, sequence)` and returns a
//! [`TryFuture`](futures::TryFuture), i.e. any future resolving to a
//! `Result`. The first `Err` stops the traversal and becomes the
//! operation's error, unchanged. Callbacks that cannot fail use
//! [`Infallible`](std::convert::Infallible) as their error type.
//!
//! ## Feature Flags
//!
//! - `tracing` (default): `trace`-level events from the traversal engine
//! - `ext` (default): the [`AsyncSequenceExt`] extension trait
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use std::convert::Infallible;
//! use sequor::prelude::*;
//!
//! # futures::executor::block_on(async {
//! let numbers = [1, 2, 3, 4, 5, 6];
//!
//! let large = filter(&numbers, |number, _, _| async move {
//!     Ok::<_, Infallible>(*number > 2)
//! })
//! .await;
//! assert_eq!(large, Ok(vec![&3, &4, &5, &6]));
//!
//! let total = reduce(&numbers, |sum: i32, number, _, _| async move {
//!     Ok::<_, Infallible>(sum + number)
//! }, Initial::Omitted)
//! .await;
//! assert_eq!(total, Ok(21));
//! # });
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports every operation, the fold initial-value types, and the
/// extension trait.
///
/// # Usage
///
/// ```rust
/// use sequor::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::ReduceError;
    pub use crate::operations::*;

    #[cfg(feature = "ext")]
    pub use crate::ext::AsyncSequenceExt;
}

pub mod error;
mod operations;
mod trace;
pub mod traversal;

#[cfg(feature = "ext")]
mod ext;

pub use error::ReduceError;
pub use operations::{
    Initial, InitialValue, Seed, Start, every, filter, find, find_index, find_last,
    find_last_index, for_each, map, reduce, reduce_right, some,
};

#[cfg(feature = "ext")]
pub use ext::AsyncSequenceExt;
