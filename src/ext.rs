//! Method-call syntax for the traversal operations.
//!
//! [`AsyncSequenceExt`] is implemented for `[T]`, so it is available on
//! arrays, `Vec<T>`, and anything else that dereferences to a slice.
//!
//! # Examples
//!
//! ```rust
//! use std::convert::Infallible;
//! use sequor::AsyncSequenceExt;
//!
//! # futures::executor::block_on(async {
//! let ports = vec![22, 80, 443, 8080];
//! let open = ports
//!     .async_filter(|port, _, _| async move { Ok::<_, Infallible>(*port != 22) })
//!     .await;
//! assert_eq!(open, Ok(vec![&80, &443, &8080]));
//! # });
//! ```

use futures::future::TryFuture;

use crate::error::ReduceError;
use crate::operations::{self, InitialValue};

/// Extension methods mirroring the free functions of this crate.
///
/// Each method returns the same future as the function it is named after;
/// see the function for the full contract.
pub trait AsyncSequenceExt<T> {
    /// See [`filter`](crate::filter).
    fn async_filter<'a, F, Fut>(
        &'a self,
        callback: F,
    ) -> impl Future<Output = Result<Vec<&'a T>, Fut::Error>>
    where
        T: 'a,
        F: FnMut(&'a T, usize, &'a [T]) -> Fut,
        Fut: TryFuture<Ok = bool>;

    /// See [`map`](crate::map).
    fn async_map<'a, R, F, Fut>(
        &'a self,
        callback: F,
    ) -> impl Future<Output = Result<Vec<R>, Fut::Error>>
    where
        T: 'a,
        F: FnMut(&'a T, usize, &'a [T]) -> Fut,
        Fut: TryFuture<Ok = R>;

    /// See [`for_each`](crate::for_each).
    fn async_for_each<'a, F, Fut>(
        &'a self,
        callback: F,
    ) -> impl Future<Output = Result<(), Fut::Error>>
    where
        T: 'a,
        F: FnMut(&'a T, usize, &'a [T]) -> Fut,
        Fut: TryFuture;

    /// See [`every`](crate::every).
    fn async_every<'a, F, Fut>(
        &'a self,
        callback: F,
    ) -> impl Future<Output = Result<bool, Fut::Error>>
    where
        T: 'a,
        F: FnMut(&'a T, usize, &'a [T]) -> Fut,
        Fut: TryFuture<Ok = bool>;

    /// See [`some`](crate::some).
    fn async_some<'a, F, Fut>(
        &'a self,
        callback: F,
    ) -> impl Future<Output = Result<bool, Fut::Error>>
    where
        T: 'a,
        F: FnMut(&'a T, usize, &'a [T]) -> Fut,
        Fut: TryFuture<Ok = bool>;

    /// See [`find`](crate::find).
    fn async_find<'a, F, Fut>(
        &'a self,
        callback: F,
    ) -> impl Future<Output = Result<Option<&'a T>, Fut::Error>>
    where
        T: 'a,
        F: FnMut(&'a T, usize, &'a [T]) -> Fut,
        Fut: TryFuture<Ok = bool>;

    /// See [`find_index`](crate::find_index).
    fn async_find_index<'a, F, Fut>(
        &'a self,
        callback: F,
    ) -> impl Future<Output = Result<Option<usize>, Fut::Error>>
    where
        T: 'a,
        F: FnMut(&'a T, usize, &'a [T]) -> Fut,
        Fut: TryFuture<Ok = bool>;

    /// See [`find_last`](crate::find_last).
    fn async_find_last<'a, F, Fut>(
        &'a self,
        callback: F,
    ) -> impl Future<Output = Result<Option<&'a T>, Fut::Error>>
    where
        T: 'a,
        F: FnMut(&'a T, usize, &'a [T]) -> Fut,
        Fut: TryFuture<Ok = bool>;

    /// See [`find_last_index`](crate::find_last_index).
    fn async_find_last_index<'a, F, Fut>(
        &'a self,
        callback: F,
    ) -> impl Future<Output = Result<Option<usize>, Fut::Error>>
    where
        T: 'a,
        F: FnMut(&'a T, usize, &'a [T]) -> Fut,
        Fut: TryFuture<Ok = bool>;

    /// See [`reduce`](crate::reduce).
    fn async_reduce<'a, I, F, Fut>(
        &'a self,
        callback: F,
        initial: I,
    ) -> impl Future<Output = Result<I::Accumulator, ReduceError<Fut::Error>>>
    where
        T: 'a,
        I: InitialValue<T>,
        F: FnMut(I::Accumulator, &'a T, usize, &'a [T]) -> Fut,
        Fut: TryFuture<Ok = I::Accumulator>;

    /// See [`reduce_right`](crate::reduce_right).
    fn async_reduce_right<'a, I, F, Fut>(
        &'a self,
        callback: F,
        initial: I,
    ) -> impl Future<Output = Result<I::Accumulator, ReduceError<Fut::Error>>>
    where
        T: 'a,
        I: InitialValue<T>,
        F: FnMut(I::Accumulator, &'a T, usize, &'a [T]) -> Fut,
        Fut: TryFuture<Ok = I::Accumulator>;
}

impl<T> AsyncSequenceExt<T> for [T] {
    fn async_filter<'a, F, Fut>(
        &'a self,
        callback: F,
    ) -> impl Future<Output = Result<Vec<&'a T>, Fut::Error>>
    where
        T: 'a,
        F: FnMut(&'a T, usize, &'a [T]) -> Fut,
        Fut: TryFuture<Ok = bool>,
    {
        operations::filter(self, callback)
    }

    fn async_map<'a, R, F, Fut>(
        &'a self,
        callback: F,
    ) -> impl Future<Output = Result<Vec<R>, Fut::Error>>
    where
        T: 'a,
        F: FnMut(&'a T, usize, &'a [T]) -> Fut,
        Fut: TryFuture<Ok = R>,
    {
        operations::map(self, callback)
    }

    fn async_for_each<'a, F, Fut>(
        &'a self,
        callback: F,
    ) -> impl Future<Output = Result<(), Fut::Error>>
    where
        T: 'a,
        F: FnMut(&'a T, usize, &'a [T]) -> Fut,
        Fut: TryFuture,
    {
        operations::for_each(self, callback)
    }

    fn async_every<'a, F, Fut>(
        &'a self,
        callback: F,
    ) -> impl Future<Output = Result<bool, Fut::Error>>
    where
        T: 'a,
        F: FnMut(&'a T, usize, &'a [T]) -> Fut,
        Fut: TryFuture<Ok = bool>,
    {
        operations::every(self, callback)
    }

    fn async_some<'a, F, Fut>(
        &'a self,
        callback: F,
    ) -> impl Future<Output = Result<bool, Fut::Error>>
    where
        T: 'a,
        F: FnMut(&'a T, usize, &'a [T]) -> Fut,
        Fut: TryFuture<Ok = bool>,
    {
        operations::some(self, callback)
    }

    fn async_find<'a, F, Fut>(
        &'a self,
        callback: F,
    ) -> impl Future<Output = Result<Option<&'a T>, Fut::Error>>
    where
        T: 'a,
        F: FnMut(&'a T, usize, &'a [T]) -> Fut,
        Fut: TryFuture<Ok = bool>,
    {
        operations::find(self, callback)
    }

    fn async_find_index<'a, F, Fut>(
        &'a self,
        callback: F,
    ) -> impl Future<Output = Result<Option<usize>, Fut::Error>>
    where
        T: 'a,
        F: FnMut(&'a T, usize, &'a [T]) -> Fut,
        Fut: TryFuture<Ok = bool>,
    {
        operations::find_index(self, callback)
    }

    fn async_find_last<'a, F, Fut>(
        &'a self,
        callback: F,
    ) -> impl Future<Output = Result<Option<&'a T>, Fut::Error>>
    where
        T: 'a,
        F: FnMut(&'a T, usize, &'a [T]) -> Fut,
        Fut: TryFuture<Ok = bool>,
    {
        operations::find_last(self, callback)
    }

    fn async_find_last_index<'a, F, Fut>(
        &'a self,
        callback: F,
    ) -> impl Future<Output = Result<Option<usize>, Fut::Error>>
    where
        T: 'a,
        F: FnMut(&'a T, usize, &'a [T]) -> Fut,
        Fut: TryFuture<Ok = bool>,
    {
        operations::find_last_index(self, callback)
    }

    fn async_reduce<'a, I, F, Fut>(
        &'a self,
        callback: F,
        initial: I,
    ) -> impl Future<Output = Result<I::Accumulator, ReduceError<Fut::Error>>>
    where
        T: 'a,
        I: InitialValue<T>,
        F: FnMut(I::Accumulator, &'a T, usize, &'a [T]) -> Fut,
        Fut: TryFuture<Ok = I::Accumulator>,
    {
        operations::reduce(self, callback, initial)
    }

    fn async_reduce_right<'a, I, F, Fut>(
        &'a self,
        callback: F,
        initial: I,
    ) -> impl Future<Output = Result<I::Accumulator, ReduceError<Fut::Error>>>
    where
        T: 'a,
        I: InitialValue<T>,
        F: FnMut(I::Accumulator, &'a T, usize, &'a [T]) -> Fut,
        Fut: TryFuture<Ok = I::Accumulator>,
    {
        operations::reduce_right(self, callback, initial)
    }
}
