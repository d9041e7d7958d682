//! Predicate operations: `filter`, `every`, `some`, `find`, `find_index`
//! and their descending counterparts `find_last`, `find_last_index`.
//!
//! Every callback here resolves to `bool`. `filter` always visits the whole
//! sequence; the others stop at the first verdict that decides the result.

use futures::future::TryFuture;

use crate::traversal::{All, Any, Direction, First, Indices, Keep, Position, traverse};

/// Returns the elements whose callback resolves to `true`, in order.
///
/// Every element is visited; the callback for index `n + 1` is invoked only
/// after the future for index `n` has resolved.
///
/// # Errors
///
/// Returns the first callback error. No partial result is returned.
///
/// # Examples
///
/// ```rust
/// use std::convert::Infallible;
///
/// # futures::executor::block_on(async {
/// let numbers = [1, 2, 3, 4, 5, 6];
/// let large = sequor::filter(&numbers, |number, _, _| async move {
///     Ok::<_, Infallible>(*number > 2)
/// })
/// .await;
/// assert_eq!(large, Ok(vec![&3, &4, &5, &6]));
/// # });
/// ```
pub async fn filter<'a, T, F, Fut>(
    sequence: &'a [T],
    mut callback: F,
) -> Result<Vec<&'a T>, Fut::Error>
where
    F: FnMut(&'a T, usize, &'a [T]) -> Fut,
    Fut: TryFuture<Ok = bool>,
{
    let kept = traverse(
        "filter",
        sequence,
        Indices::over(sequence.len(), Direction::Ascending),
        (),
        Keep::new(),
        |(), element, index| callback(element, index, sequence),
    )
    .await?;

    Ok(kept.into_iter().filter_map(|index| sequence.get(index)).collect())
}

/// Returns `true` if every callback resolves to `true`.
///
/// Stops at the first `false`. An empty sequence yields `true` without
/// invoking the callback.
///
/// # Errors
///
/// Returns the first callback error.
///
/// # Examples
///
/// ```rust
/// use std::convert::Infallible;
///
/// # futures::executor::block_on(async {
/// let statuses = ["ok", "ok", "degraded"];
/// let healthy = sequor::every(&statuses, |status, _, _| async move {
///     Ok::<_, Infallible>(*status == "ok")
/// })
/// .await;
/// assert_eq!(healthy, Ok(false));
/// # });
/// ```
pub async fn every<'a, T, F, Fut>(sequence: &'a [T], mut callback: F) -> Result<bool, Fut::Error>
where
    F: FnMut(&'a T, usize, &'a [T]) -> Fut,
    Fut: TryFuture<Ok = bool>,
{
    traverse(
        "every",
        sequence,
        Indices::over(sequence.len(), Direction::Ascending),
        (),
        All,
        |(), element, index| callback(element, index, sequence),
    )
    .await
}

/// Returns `true` if some callback resolves to `true`.
///
/// Stops at the first `true`. An empty sequence yields `false` without
/// invoking the callback.
///
/// # Errors
///
/// Returns the first callback error.
pub async fn some<'a, T, F, Fut>(sequence: &'a [T], mut callback: F) -> Result<bool, Fut::Error>
where
    F: FnMut(&'a T, usize, &'a [T]) -> Fut,
    Fut: TryFuture<Ok = bool>,
{
    traverse(
        "some",
        sequence,
        Indices::over(sequence.len(), Direction::Ascending),
        (),
        Any,
        |(), element, index| callback(element, index, sequence),
    )
    .await
}

/// Returns the first element whose callback resolves to `true`, or `None`.
///
/// Elements after the match are not visited.
///
/// # Errors
///
/// Returns the first callback error.
///
/// # Examples
///
/// ```rust
/// use std::convert::Infallible;
///
/// # futures::executor::block_on(async {
/// let words = ["alpha", "beta", "gamma"];
/// let found = sequor::find(&words, |word, _, _| async move {
///     Ok::<_, Infallible>(word.starts_with('b'))
/// })
/// .await;
/// assert_eq!(found, Ok(Some(&"beta")));
/// # });
/// ```
pub async fn find<'a, T, F, Fut>(
    sequence: &'a [T],
    callback: F,
) -> Result<Option<&'a T>, Fut::Error>
where
    F: FnMut(&'a T, usize, &'a [T]) -> Fut,
    Fut: TryFuture<Ok = bool>,
{
    find_in("find", sequence, Direction::Ascending, callback).await
}

/// Returns the index of the first element whose callback resolves to
/// `true`, or `None`.
///
/// # Errors
///
/// Returns the first callback error.
pub async fn find_index<'a, T, F, Fut>(
    sequence: &'a [T],
    callback: F,
) -> Result<Option<usize>, Fut::Error>
where
    F: FnMut(&'a T, usize, &'a [T]) -> Fut,
    Fut: TryFuture<Ok = bool>,
{
    position_in("find_index", sequence, Direction::Ascending, callback).await
}

/// Like [`find`], but visits elements from the last to the first.
///
/// # Errors
///
/// Returns the first callback error.
pub async fn find_last<'a, T, F, Fut>(
    sequence: &'a [T],
    callback: F,
) -> Result<Option<&'a T>, Fut::Error>
where
    F: FnMut(&'a T, usize, &'a [T]) -> Fut,
    Fut: TryFuture<Ok = bool>,
{
    find_in("find_last", sequence, Direction::Descending, callback).await
}

/// Like [`find_index`], but visits elements from the last to the first.
///
/// The returned index is still a position from the start of the sequence.
///
/// # Errors
///
/// Returns the first callback error.
pub async fn find_last_index<'a, T, F, Fut>(
    sequence: &'a [T],
    callback: F,
) -> Result<Option<usize>, Fut::Error>
where
    F: FnMut(&'a T, usize, &'a [T]) -> Fut,
    Fut: TryFuture<Ok = bool>,
{
    position_in("find_last_index", sequence, Direction::Descending, callback).await
}

async fn find_in<'a, T, F, Fut>(
    operation: &'static str,
    sequence: &'a [T],
    direction: Direction,
    mut callback: F,
) -> Result<Option<&'a T>, Fut::Error>
where
    F: FnMut(&'a T, usize, &'a [T]) -> Fut,
    Fut: TryFuture<Ok = bool>,
{
    traverse(
        operation,
        sequence,
        Indices::over(sequence.len(), direction),
        (),
        First,
        |(), element, index| callback(element, index, sequence),
    )
    .await
}

async fn position_in<'a, T, F, Fut>(
    operation: &'static str,
    sequence: &'a [T],
    direction: Direction,
    mut callback: F,
) -> Result<Option<usize>, Fut::Error>
where
    F: FnMut(&'a T, usize, &'a [T]) -> Fut,
    Fut: TryFuture<Ok = bool>,
{
    traverse(
        operation,
        sequence,
        Indices::over(sequence.len(), direction),
        (),
        Position,
        |(), element, index| callback(element, index, sequence),
    )
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use futures::future::{Ready, ready};
    use rstest::rstest;
    use std::cell::RefCell;
    use std::convert::Infallible;

    fn greater_than(
        threshold: i32,
    ) -> impl FnMut(&i32, usize, &[i32]) -> Ready<Result<bool, Infallible>> {
        move |number, _, _| ready(Ok(*number > threshold))
    }

    // =========================================================================
    // filter
    // =========================================================================

    #[rstest]
    #[case(vec![1, 2, 3, 4, 5, 6], 2, vec![3, 4, 5, 6])]
    #[case(vec![5, 1, 6, 2], 4, vec![5, 6])]
    #[case(vec![1, 2], 10, vec![])]
    #[case(vec![], 0, vec![])]
    fn filter_keeps_matching_in_order(
        #[case] numbers: Vec<i32>,
        #[case] threshold: i32,
        #[case] expected: Vec<i32>,
    ) {
        let kept = block_on(filter(&numbers, greater_than(threshold))).unwrap();
        let kept: Vec<i32> = kept.into_iter().copied().collect();
        assert_eq!(kept, expected);
    }

    #[rstest]
    fn filter_visits_every_element() {
        let visited = RefCell::new(Vec::new());
        let numbers = [1, 2, 3];
        let _ = block_on(filter(&numbers, |_, index, _| {
            visited.borrow_mut().push(index);
            ready(Ok::<_, Infallible>(true))
        }));
        assert_eq!(visited.into_inner(), vec![0, 1, 2]);
    }

    #[rstest]
    fn filter_passes_the_whole_sequence() {
        let numbers = [4, 5];
        let kept = block_on(filter(&numbers, |_, index, sequence| {
            ready(Ok::<_, Infallible>(sequence.len() == 2 && index == 1))
        }));
        assert_eq!(kept, Ok(vec![&5]));
    }

    // =========================================================================
    // every / some
    // =========================================================================

    #[rstest]
    #[case(vec![3, 4, 5], 2, true)]
    #[case(vec![3, 1, 5], 2, false)]
    #[case(vec![], 2, true)]
    fn every_cases(#[case] numbers: Vec<i32>, #[case] threshold: i32, #[case] expected: bool) {
        assert_eq!(block_on(every(&numbers, greater_than(threshold))), Ok(expected));
    }

    #[rstest]
    #[case(vec![1, 2, 3], 2, true)]
    #[case(vec![1, 2], 2, false)]
    #[case(vec![], 0, false)]
    fn some_cases(#[case] numbers: Vec<i32>, #[case] threshold: i32, #[case] expected: bool) {
        assert_eq!(block_on(some(&numbers, greater_than(threshold))), Ok(expected));
    }

    #[rstest]
    fn every_on_empty_never_calls_back() {
        let calls = RefCell::new(0);
        let empty: [i32; 0] = [];
        let result = block_on(every(&empty, |_, _, _| {
            *calls.borrow_mut() += 1;
            ready(Ok::<_, Infallible>(false))
        }));
        assert_eq!(result, Ok(true));
        assert_eq!(calls.into_inner(), 0);
    }

    #[rstest]
    fn some_stops_at_first_true() {
        let calls = RefCell::new(0);
        let numbers = [1, 9, 2, 8];
        let result = block_on(some(&numbers, |number, _, _| {
            *calls.borrow_mut() += 1;
            ready(Ok::<_, Infallible>(*number > 5))
        }));
        assert_eq!(result, Ok(true));
        assert_eq!(calls.into_inner(), 2);
    }

    // =========================================================================
    // find / find_index / find_last / find_last_index
    // =========================================================================

    #[rstest]
    fn find_returns_first_match() {
        let numbers = [1, 5, 7, 2];
        assert_eq!(block_on(find(&numbers, greater_than(4))), Ok(Some(&5)));
        assert_eq!(block_on(find_index(&numbers, greater_than(4))), Ok(Some(1)));
    }

    #[rstest]
    fn find_last_returns_last_match() {
        let numbers = [1, 5, 7, 2];
        assert_eq!(block_on(find_last(&numbers, greater_than(4))), Ok(Some(&7)));
        assert_eq!(block_on(find_last_index(&numbers, greater_than(4))), Ok(Some(2)));
    }

    #[rstest]
    fn find_without_match_is_none() {
        let numbers = [1, 2, 3];
        assert_eq!(block_on(find(&numbers, greater_than(10))), Ok(None));
        assert_eq!(block_on(find_index(&numbers, greater_than(10))), Ok(None));
        assert_eq!(block_on(find_last(&numbers, greater_than(10))), Ok(None));
        assert_eq!(block_on(find_last_index(&numbers, greater_than(10))), Ok(None));
    }

    #[rstest]
    fn find_last_visits_from_the_end() {
        let visited = RefCell::new(Vec::new());
        let numbers = [1, 2, 3, 4];
        let result = block_on(find_last(&numbers, |number, index, _| {
            visited.borrow_mut().push(index);
            ready(Ok::<_, Infallible>(*number == 2))
        }));
        assert_eq!(result, Ok(Some(&2)));
        assert_eq!(visited.into_inner(), vec![3, 2, 1]);
    }

    #[rstest]
    fn find_index_propagates_error() {
        let numbers = [1, 2, 3];
        let result = block_on(find_index(&numbers, |number, _, _| {
            if *number == 2 {
                ready(Err("unreachable host"))
            } else {
                ready(Ok(false))
            }
        }));
        assert_eq!(result, Err("unreachable host"));
    }
}
