//! `map` and `for_each`: full traversals with no short-circuit.

use futures::future::TryFuture;

use crate::traversal::{Collect, Direction, Discard, Indices, traverse};

/// Replaces every element with the value its callback resolves to.
///
/// The output has the same length and order as the input.
///
/// # Errors
///
/// Returns the first callback error. Values collected before the failure
/// are dropped.
///
/// # Examples
///
/// ```rust
/// use std::convert::Infallible;
///
/// # futures::executor::block_on(async {
/// let ids = [3, 1, 2];
/// let labels = sequor::map(&ids, |id, index, _| async move {
///     Ok::<_, Infallible>(format!("{index}:{id}"))
/// })
/// .await;
/// assert_eq!(labels, Ok(vec!["0:3".to_string(), "1:1".to_string(), "2:2".to_string()]));
/// # });
/// ```
pub async fn map<'a, T, R, F, Fut>(sequence: &'a [T], mut callback: F) -> Result<Vec<R>, Fut::Error>
where
    F: FnMut(&'a T, usize, &'a [T]) -> Fut,
    Fut: TryFuture<Ok = R>,
{
    traverse(
        "map",
        sequence,
        Indices::over(sequence.len(), Direction::Ascending),
        (),
        Collect::with_capacity(sequence.len()),
        |(), element, index| callback(element, index, sequence),
    )
    .await
}

/// Runs the callback for every element, in order, for its side effects.
///
/// The resolved values are discarded.
///
/// # Errors
///
/// Returns the first callback error; later elements are not visited.
///
/// # Examples
///
/// ```rust
/// use std::cell::RefCell;
/// use std::convert::Infallible;
///
/// # futures::executor::block_on(async {
/// let log = RefCell::new(Vec::new());
/// let jobs = ["fetch", "parse", "store"];
/// sequor::for_each(&jobs, |job, _, _| {
///     log.borrow_mut().push(*job);
///     async { Ok::<_, Infallible>(()) }
/// })
/// .await
/// .unwrap();
/// assert_eq!(log.into_inner(), vec!["fetch", "parse", "store"]);
/// # });
/// ```
pub async fn for_each<'a, T, F, Fut>(sequence: &'a [T], mut callback: F) -> Result<(), Fut::Error>
where
    F: FnMut(&'a T, usize, &'a [T]) -> Fut,
    Fut: TryFuture,
{
    traverse(
        "for_each",
        sequence,
        Indices::over(sequence.len(), Direction::Ascending),
        (),
        Discard::new(),
        |(), element, index| callback(element, index, sequence),
    )
    .await
}
