//! The sequential traversal loop shared by every operation.

use std::ops::ControlFlow;

use futures::TryFutureExt;
use futures::future::TryFuture;

use super::indices::Indices;
use super::policy::Policy;
use crate::trace::trace_event;

/// Visits `sequence` at the positions yielded by `indices`, one callback at
/// a time.
///
/// For each index the callback is invoked with the current carry, the
/// element, and the index. Its future is awaited to completion before the
/// next index is taken, so at most one callback future exists at any
/// moment. The resolved value is handed to `policy`; a
/// [`ControlFlow::Break`] ends the traversal with that output, otherwise
/// the returned carry feeds the next callback. When the indices are
/// exhausted the policy is finished with the last carry.
///
/// If a callback future fails, the traversal stops at that element and the
/// failure is returned unchanged. Output accumulated so far is dropped.
///
/// Indices past the end of `sequence` are skipped.
///
/// # Errors
///
/// Returns the error of the first callback future that fails.
///
/// # Examples
///
/// ```rust
/// use std::convert::Infallible;
/// use sequor::traversal::{Direction, Indices, Keep, traverse};
///
/// # futures::executor::block_on(async {
/// let numbers = [1, 2, 3, 4];
/// let even_positions = traverse(
///     "filter",
///     &numbers,
///     Indices::over(numbers.len(), Direction::Descending),
///     (),
///     Keep::new(),
///     |(), number, _index| async move { Ok::<_, Infallible>(number % 2 == 0) },
/// )
/// .await;
/// assert_eq!(even_positions, Ok(vec![3, 1]));
/// # });
/// ```
#[cfg_attr(not(feature = "tracing"), allow(unused_variables, unused_assignments))]
pub async fn traverse<'a, T, P, F, Fut>(
    operation: &'static str,
    sequence: &'a [T],
    indices: Indices,
    mut carry: P::Carry,
    mut policy: P,
    mut callback: F,
) -> Result<P::Output, Fut::Error>
where
    P: Policy<'a, T>,
    F: FnMut(P::Carry, &'a T, usize) -> Fut,
    Fut: TryFuture<Ok = P::Verdict>,
{
    trace_event!(
        operation,
        length = sequence.len(),
        direction = %indices.direction(),
        "traversal started"
    );

    let mut visited = 0_usize;

    for index in indices {
        let Some(element) = sequence.get(index) else {
            continue;
        };

        let verdict = TryFutureExt::into_future(callback(carry, element, index)).await?;
        visited += 1;

        match policy.absorb(index, element, verdict) {
            ControlFlow::Continue(next) => carry = next,
            ControlFlow::Break(output) => {
                trace_event!(operation, index, visited, "traversal short-circuited");
                return Ok(output);
            }
        }
    }

    trace_event!(operation, visited, "traversal completed");
    Ok(policy.finish(carry))
}
