//! Error types for fold operations.
//!
//! Most operations in this crate fail only when a callback fails, and they
//! return the callback's own error type untouched. Folds without an
//! initial value can additionally fail on empty input, so
//! [`reduce`](crate::reduce) and [`reduce_right`](crate::reduce_right)
//! return [`ReduceError`].

use thiserror::Error;

/// Failure of [`reduce`](crate::reduce) or
/// [`reduce_right`](crate::reduce_right).
///
/// # Examples
///
/// ```rust
/// use sequor::ReduceError;
///
/// let error: ReduceError<String> = ReduceError::EmptySequence;
/// assert_eq!(
///     error.to_string(),
///     "reduce of empty sequence with no initial value"
/// );
///
/// let error = ReduceError::Callback(String::from("lookup failed"));
/// assert_eq!(error.into_callback_error(), Some(String::from("lookup failed")));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ReduceError<E> {
    /// The sequence was empty and no initial value was provided, so there
    /// is nothing to return.
    #[error("reduce of empty sequence with no initial value")]
    EmptySequence,
    /// A callback future failed. The payload is the callback's error as it
    /// was returned.
    #[error("reduce callback failed: {0}")]
    Callback(E),
}

impl<E> ReduceError<E> {
    /// Returns `true` for [`ReduceError::EmptySequence`].
    #[must_use]
    pub const fn is_empty_sequence(&self) -> bool {
        matches!(self, Self::EmptySequence)
    }

    /// Returns the callback's error, or `None` for
    /// [`ReduceError::EmptySequence`].
    #[must_use]
    pub fn into_callback_error(self) -> Option<E> {
        match self {
            Self::EmptySequence => None,
            Self::Callback(error) => Some(error),
        }
    }

    /// Maps the callback's error with `function`.
    pub fn map_callback<E2, F>(self, function: F) -> ReduceError<E2>
    where
        F: FnOnce(E) -> E2,
    {
        match self {
            Self::EmptySequence => ReduceError::EmptySequence,
            Self::Callback(error) => ReduceError::Callback(function(error)),
        }
    }
}
