//! The public traversal operations.
//!
//! Each function takes a slice and a callback
//! `(element, index, sequence) -> TryFuture` and awaits one callback at a
//! time. Folds take the accumulator as an extra first callback argument.
//!
//! - Predicates: [`filter`], [`every`], [`some`], [`find`], [`find_index`],
//!   [`find_last`], [`find_last_index`]
//! - Transformations: [`map`], [`for_each`]
//! - Folds: [`reduce`], [`reduce_right`]

mod fold;
mod predicate;
mod transform;

pub use fold::{Initial, InitialValue, Seed, Start, reduce, reduce_right};
pub use predicate::{every, filter, find, find_index, find_last, find_last_index, some};
pub use transform::{for_each, map};
