//! `reduce` and `reduce_right`: folds that thread an accumulator through
//! the callbacks.
//!
//! Where the fold starts is decided by an [`InitialValue`]:
//!
//! - [`Initial::Provided`] or [`Seed`] start from the given value and fold
//!   every element.
//! - [`Initial::Omitted`] starts from the first visited element (index `0`
//!   for `reduce`, the last index for `reduce_right`) and folds the rest.
//!   On an empty sequence there is no such element, and the fold fails with
//!   [`ReduceError::EmptySequence`] without invoking the callback.
//!
//! `Initial<T>` keeps the accumulator at the element type. Use [`Seed`] to
//! fold into a different type.
//!
//! # Examples
//!
//! ```rust
//! use std::convert::Infallible;
//! use sequor::{Initial, Seed, reduce, reduce_right};
//!
//! # futures::executor::block_on(async {
//! let numbers = [1, 2, 3, 4];
//!
//! let sum = reduce(&numbers, |total: i32, number, _, _| async move {
//!     Ok::<_, Infallible>(total + number)
//! }, Initial::Omitted).await;
//! assert_eq!(sum, Ok(10));
//!
//! let digits = reduce(&numbers, |text: String, number, _, _| async move {
//!     Ok::<_, Infallible>(text + &number.to_string())
//! }, Seed(String::new())).await;
//! assert_eq!(digits.as_deref(), Ok("1234"));
//!
//! let reversed = reduce_right(&numbers, |text: String, number, _, _| async move {
//!     Ok::<_, Infallible>(text + &number.to_string())
//! }, Seed(String::new())).await;
//! assert_eq!(reversed.as_deref(), Ok("4321"));
//! # });
//! ```

use futures::future::TryFuture;

use crate::error::ReduceError;
use crate::traversal::{Direction, Indices, Thread, traverse};

/// An optional initial accumulator of the element type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Initial<A> {
    /// Start folding from this value.
    Provided(A),
    /// Start from the first visited element.
    #[default]
    Omitted,
}

impl<A> Initial<A> {
    /// Returns `true` for [`Initial::Provided`].
    #[must_use]
    pub const fn is_provided(&self) -> bool {
        matches!(self, Self::Provided(_))
    }

    /// Converts into an `Option`, `None` for [`Initial::Omitted`].
    #[must_use]
    pub fn into_option(self) -> Option<A> {
        match self {
            Self::Provided(value) => Some(value),
            Self::Omitted => None,
        }
    }
}

impl<A> From<Option<A>> for Initial<A> {
    fn from(value: Option<A>) -> Self {
        value.map_or(Self::Omitted, Self::Provided)
    }
}

/// An initial accumulator that is always provided, of any type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Seed<A>(pub A);

/// Where a fold begins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Start<A> {
    /// From a caller-provided value, folding every element.
    Provided(A),
    /// From the first visited element, folding the remaining ones.
    Seeded(A),
    /// Nowhere: no initial value and no elements.
    Empty,
}

/// Decides the starting point of a fold over elements of type `T`.
pub trait InitialValue<T> {
    /// Type of the value threaded through the fold.
    type Accumulator;

    /// Picks the start given the first element the fold would visit, if any.
    fn start(self, edge: Option<&T>) -> Start<Self::Accumulator>;
}

impl<T: Clone> InitialValue<T> for Initial<T> {
    type Accumulator = T;

    fn start(self, edge: Option<&T>) -> Start<T> {
        match (self, edge) {
            (Self::Provided(value), _) => Start::Provided(value),
            (Self::Omitted, Some(element)) => Start::Seeded(element.clone()),
            (Self::Omitted, None) => Start::Empty,
        }
    }
}

impl<T, A> InitialValue<T> for Seed<A> {
    type Accumulator = A;

    fn start(self, _edge: Option<&T>) -> Start<A> {
        Start::Provided(self.0)
    }
}

/// Folds the sequence from index `0` upwards.
///
/// Each step awaits `callback(accumulator, element, index, sequence)` and
/// uses the resolved value as the next accumulator.
///
/// # Errors
///
/// - [`ReduceError::EmptySequence`] when the sequence is empty and
///   `initial` is [`Initial::Omitted`].
/// - [`ReduceError::Callback`] with the first callback error.
pub async fn reduce<'a, T, I, F, Fut>(
    sequence: &'a [T],
    callback: F,
    initial: I,
) -> Result<I::Accumulator, ReduceError<Fut::Error>>
where
    I: InitialValue<T>,
    F: FnMut(I::Accumulator, &'a T, usize, &'a [T]) -> Fut,
    Fut: TryFuture<Ok = I::Accumulator>,
{
    fold("reduce", Direction::Ascending, sequence, callback, initial).await
}

/// Folds the sequence from the last index down to `0`.
///
/// Without an initial value the accumulator starts as the last element.
///
/// # Errors
///
/// - [`ReduceError::EmptySequence`] when the sequence is empty and
///   `initial` is [`Initial::Omitted`].
/// - [`ReduceError::Callback`] with the first callback error.
pub async fn reduce_right<'a, T, I, F, Fut>(
    sequence: &'a [T],
    callback: F,
    initial: I,
) -> Result<I::Accumulator, ReduceError<Fut::Error>>
where
    I: InitialValue<T>,
    F: FnMut(I::Accumulator, &'a T, usize, &'a [T]) -> Fut,
    Fut: TryFuture<Ok = I::Accumulator>,
{
    fold("reduce_right", Direction::Descending, sequence, callback, initial).await
}

async fn fold<'a, T, I, F, Fut>(
    operation: &'static str,
    direction: Direction,
    sequence: &'a [T],
    mut callback: F,
    initial: I,
) -> Result<I::Accumulator, ReduceError<Fut::Error>>
where
    I: InitialValue<T>,
    F: FnMut(I::Accumulator, &'a T, usize, &'a [T]) -> Fut,
    Fut: TryFuture<Ok = I::Accumulator>,
{
    let length = sequence.len();
    let edge = direction.edge(length).and_then(|index| sequence.get(index));

    let (accumulator, span) = match initial.start(edge) {
        Start::Provided(accumulator) => (accumulator, 0..length),
        Start::Seeded(accumulator) => (accumulator, direction.without_edge(length)),
        Start::Empty => return Err(ReduceError::EmptySequence),
    };

    traverse(
        operation,
        sequence,
        Indices::new(span, direction),
        accumulator,
        Thread::<I::Accumulator>::new(),
        |accumulator, element, index| callback(accumulator, element, index, sequence),
    )
    .await
    .map_err(ReduceError::Callback)
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use futures::future::{Ready, ready};
    use rstest::rstest;
    use std::cell::RefCell;
    use std::convert::Infallible;

    fn sum(total: i32, number: &i32, _: usize, _: &[i32]) -> Ready<Result<i32, Infallible>> {
        ready(Ok(total + number))
    }

    // =========================================================================
    // Initial / Seed
    // =========================================================================

    #[rstest]
    #[case(Initial::Provided(5), Some(&1), Start::Provided(5))]
    #[case(Initial::Provided(5), None, Start::Provided(5))]
    #[case(Initial::Omitted, Some(&1), Start::Seeded(1))]
    #[case(Initial::Omitted, None, Start::Empty)]
    fn initial_start(
        #[case] initial: Initial<i32>,
        #[case] edge: Option<&i32>,
        #[case] expected: Start<i32>,
    ) {
        assert_eq!(initial.start(edge), expected);
    }

    #[rstest]
    fn seed_always_provides() {
        assert_eq!(InitialValue::<i32>::start(Seed("x"), None), Start::Provided("x"));
        assert_eq!(InitialValue::<i32>::start(Seed("x"), Some(&1)), Start::Provided("x"));
    }

    #[rstest]
    fn initial_from_option() {
        assert_eq!(Initial::from(Some(3)), Initial::Provided(3));
        assert_eq!(Initial::<i32>::from(None), Initial::Omitted);
        assert_eq!(Initial::Provided(3).into_option(), Some(3));
        assert!(Initial::Provided(3).is_provided());
        assert!(!Initial::<i32>::default().is_provided());
    }

    // =========================================================================
    // reduce / reduce_right
    // =========================================================================

    #[rstest]
    #[case(vec![1, 2, 3, 4], 10)]
    #[case(vec![7], 7)]
    fn reduce_and_reduce_right_sum_without_initial(
        #[case] numbers: Vec<i32>,
        #[case] expected: i32,
    ) {
        assert_eq!(block_on(reduce(&numbers, sum, Initial::Omitted)), Ok(expected));
        assert_eq!(block_on(reduce_right(&numbers, sum, Initial::Omitted)), Ok(expected));
    }

    #[rstest]
    fn reduce_empty_without_initial_fails() {
        let calls = RefCell::new(0);
        let empty: Vec<i32> = Vec::new();
        let result = block_on(reduce(
            &empty,
            |total: i32, number, _, _| {
                *calls.borrow_mut() += 1;
                ready(Ok::<_, Infallible>(total + number))
            },
            Initial::Omitted,
        ));
        assert_eq!(result, Err(ReduceError::EmptySequence));
        assert_eq!(calls.into_inner(), 0);

        assert_eq!(
            block_on(reduce_right(&empty, sum, Initial::Omitted)),
            Err(ReduceError::EmptySequence)
        );
    }

    #[rstest]
    fn reduce_empty_with_initial_returns_it() {
        let empty: Vec<i32> = Vec::new();
        assert_eq!(block_on(reduce(&empty, sum, Initial::Provided(9))), Ok(9));
        assert_eq!(block_on(reduce_right(&empty, sum, Seed(9))), Ok(9));
    }

    #[rstest]
    fn reduce_empty_with_initial_never_calls_back() {
        let calls = RefCell::new(0);
        let empty: Vec<i32> = Vec::new();
        let counting = |total: i32, number: &i32, _: usize, _: &[i32]| {
            *calls.borrow_mut() += 1;
            ready(Ok::<_, Infallible>(total + number))
        };

        assert_eq!(block_on(reduce(&empty, counting, Initial::Provided(7))), Ok(7));
        assert_eq!(block_on(reduce(&empty, counting, Seed(7))), Ok(7));
        assert_eq!(block_on(reduce_right(&empty, counting, Initial::Provided(7))), Ok(7));
        assert_eq!(block_on(reduce_right(&empty, counting, Seed(7))), Ok(7));
        assert_eq!(calls.into_inner(), 0);
    }

    #[rstest]
    fn reduce_empty_with_seed_of_other_type_never_calls_back() {
        let calls = RefCell::new(0);
        let empty: Vec<i32> = Vec::new();
        let counting = |text: String, number: &i32, _: usize, _: &[i32]| {
            *calls.borrow_mut() += 1;
            ready(Ok::<_, Infallible>(text + &number.to_string()))
        };

        assert_eq!(block_on(reduce(&empty, counting, Seed("s".to_string()))), Ok("s".to_string()));
        assert_eq!(
            block_on(reduce_right(&empty, counting, Seed("s".to_string()))),
            Ok("s".to_string())
        );
        assert_eq!(calls.into_inner(), 0);
    }

    #[rstest]
    fn reduce_without_initial_starts_after_first() {
        let visited = RefCell::new(Vec::new());
        let numbers = [10, 20, 30];
        let result = block_on(reduce(
            &numbers,
            |total: i32, number, index, _| {
                visited.borrow_mut().push(index);
                ready(Ok::<_, Infallible>(total - number))
            },
            Initial::Omitted,
        ));
        assert_eq!(result, Ok(10 - 20 - 30));
        assert_eq!(visited.into_inner(), vec![1, 2]);
    }

    #[rstest]
    fn reduce_right_without_initial_starts_from_last() {
        let visited = RefCell::new(Vec::new());
        let numbers = [10, 20, 30];
        let result = block_on(reduce_right(
            &numbers,
            |total: i32, number, index, _| {
                visited.borrow_mut().push(index);
                ready(Ok::<_, Infallible>(total - number))
            },
            Initial::Omitted,
        ));
        assert_eq!(result, Ok(30 - 20 - 10));
        assert_eq!(visited.into_inner(), vec![1, 0]);
    }

    #[rstest]
    fn reduce_with_seed_of_other_type() {
        let numbers = [1, 2, 3, 4];
        let result = block_on(reduce(
            &numbers,
            |text: String, number, _, _| ready(Ok::<_, Infallible>(text + &number.to_string())),
            Seed(String::new()),
        ));
        assert_eq!(result, Ok("1234".to_string()));
    }

    #[rstest]
    fn reduce_callback_error_is_wrapped() {
        let numbers = [1, 2, 3];
        let result = block_on(reduce(
            &numbers,
            |total: i32, number, _, _| {
                if *number == 2 {
                    ready(Err("overflow"))
                } else {
                    ready(Ok(total + number))
                }
            },
            Initial::Provided(0),
        ));
        assert_eq!(result, Err(ReduceError::Callback("overflow")));
    }
}
