//! Index progression for a single traversal.
//!
//! [`Indices`] yields the positions of a half-open span `start..end` in the
//! order given by a [`Direction`]. It is the only place that decides which
//! element is visited next, so every operation shares the same ordering.
//!
//! # Examples
//!
//! ```rust
//! use sequor::traversal::{Direction, Indices};
//!
//! let ascending: Vec<usize> = Indices::new(0..4, Direction::Ascending).collect();
//! assert_eq!(ascending, vec![0, 1, 2, 3]);
//!
//! let descending: Vec<usize> = Indices::new(0..4, Direction::Descending).collect();
//! assert_eq!(descending, vec![3, 2, 1, 0]);
//! ```

use std::fmt;
use std::iter::FusedIterator;
use std::ops::Range;

/// The order in which a traversal visits indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    /// From the lowest index up to the highest.
    #[default]
    Ascending,
    /// From the highest index down to the lowest.
    Descending,
}

impl Direction {
    /// Returns the span of `length` elements that remains after the element
    /// at this direction's starting edge has been taken.
    ///
    /// Used by folds that seed their accumulator from the first visited
    /// element.
    pub(crate) const fn without_edge(self, length: usize) -> Range<usize> {
        match self {
            Self::Ascending => 1..length,
            Self::Descending => 0..length.saturating_sub(1),
        }
    }

    /// Returns the index of the first element visited in a sequence of
    /// `length` elements, or `None` when it is empty.
    pub(crate) const fn edge(self, length: usize) -> Option<usize> {
        match (self, length) {
            (_, 0) => None,
            (Self::Ascending, _) => Some(0),
            (Self::Descending, _) => Some(length - 1),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ascending => write!(formatter, "ascending"),
            Self::Descending => write!(formatter, "descending"),
        }
    }
}

/// Iterator over the indices of a span, walked in a fixed [`Direction`].
///
/// The iterator is double-ended; `next_back` walks the span in the
/// opposite direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Indices {
    span: Range<usize>,
    direction: Direction,
}

impl Indices {
    /// Creates an iterator over `span` in `direction`.
    ///
    /// An inverted span (`start > end`) is treated as empty.
    #[must_use]
    pub fn new(span: Range<usize>, direction: Direction) -> Self {
        let span = if span.start > span.end {
            span.start..span.start
        } else {
            span
        };
        Self { span, direction }
    }

    /// Creates an iterator over every index of a sequence of `length`
    /// elements.
    #[must_use]
    pub fn over(length: usize, direction: Direction) -> Self {
        Self::new(0..length, direction)
    }

    /// Returns the direction of this iterator.
    #[must_use]
    pub const fn direction(&self) -> Direction {
        self.direction
    }
}

impl Iterator for Indices {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        match self.direction {
            Direction::Ascending => self.span.next(),
            Direction::Descending => self.span.next_back(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.span.size_hint()
    }
}

impl DoubleEndedIterator for Indices {
    fn next_back(&mut self) -> Option<usize> {
        match self.direction {
            Direction::Ascending => self.span.next_back(),
            Direction::Descending => self.span.next(),
        }
    }
}

impl ExactSizeIterator for Indices {}

impl FusedIterator for Indices {}
