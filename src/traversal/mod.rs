//! The traversal engine.
//!
//! Every operation in this crate is one call to [`traverse`] with a
//! particular [`Direction`] and [`Policy`]:
//!
//! | Operation                    | Direction    | Policy       | Short-circuits |
//! |------------------------------|--------------|--------------|----------------|
//! | `filter`                     | ascending    | [`Keep`]     | no             |
//! | `map`                        | ascending    | [`Collect`]  | no             |
//! | `for_each`                   | ascending    | [`Discard`]  | no             |
//! | `every`                      | ascending    | [`All`]      | on `false`     |
//! | `some`                       | ascending    | [`Any`]      | on `true`      |
//! | `find`, `find_last`          | either       | [`First`]    | on `true`      |
//! | `find_index`, `find_last_index` | either    | [`Position`] | on `true`      |
//! | `reduce`, `reduce_right`     | either       | [`Thread`]   | no             |
//!
//! Callbacks run strictly one after another: the future returned for index
//! `n` is awaited to completion before the callback is invoked for the
//! next index.

mod engine;
mod indices;
mod policy;

pub use engine::traverse;
pub use indices::{Direction, Indices};
pub use policy::{All, Any, Collect, Discard, First, Keep, Policy, Position, Thread};
