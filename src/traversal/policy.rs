//! Accumulation and short-circuit policies.
//!
//! A [`Policy`] decides what a traversal does with each resolved callback
//! value: keep the element, collect the value, stop early, or thread it on
//! as the next accumulator. The engine in [`super::traverse`] is the same
//! loop for every operation; only the policy differs.
//!
//! # Carry
//!
//! Each policy names a `Carry` type, the value handed to the callback
//! together with the element. For every policy except [`Thread`] it is `()`.
//! [`Thread`] carries the fold accumulator, which is moved into the
//! callback and comes back as its verdict.

use std::marker::PhantomData;
use std::ops::ControlFlow;

/// Strategy for turning callback verdicts into a traversal result.
///
/// [`absorb`](Policy::absorb) is called once per visited element, in visit
/// order, after that element's callback future has resolved. Returning
/// [`ControlFlow::Break`] ends the traversal with the given output.
/// Otherwise the returned carry is passed to the next callback, and once
/// every index is visited [`finish`](Policy::finish) receives the last carry.
pub trait Policy<'a, T: 'a> {
    /// Value passed to the callback alongside each element.
    type Carry;
    /// Resolved value of the callback's future.
    type Verdict;
    /// Result of the whole traversal.
    type Output;

    /// Folds one verdict into the policy.
    fn absorb(
        &mut self,
        index: usize,
        element: &'a T,
        verdict: Self::Verdict,
    ) -> ControlFlow<Self::Output, Self::Carry>;

    /// Produces the output after a traversal that was not cut short.
    fn finish(self, carry: Self::Carry) -> Self::Output;
}

// =============================================================================
// Filter
// =============================================================================

/// Records the index of every element whose verdict is `true`, in visit
/// order.
///
/// Indices rather than element references are kept so the policy's type
/// does not depend on the lifetime of the traversed sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Keep {
    kept: Vec<usize>,
}

impl Keep {
    /// Creates an empty policy.
    #[must_use]
    pub const fn new() -> Self {
        Self { kept: Vec::new() }
    }
}

impl<'a, T: 'a> Policy<'a, T> for Keep {
    type Carry = ();
    type Verdict = bool;
    type Output = Vec<usize>;

    fn absorb(&mut self, index: usize, _element: &'a T, verdict: bool) -> ControlFlow<Vec<usize>> {
        if verdict {
            self.kept.push(index);
        }
        ControlFlow::Continue(())
    }

    fn finish(self, (): ()) -> Vec<usize> {
        self.kept
    }
}

// =============================================================================
// Map
// =============================================================================

/// Collects every verdict, in visit order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collect<R> {
    collected: Vec<R>,
}

impl<R> Collect<R> {
    /// Creates a policy with room for `capacity` values.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            collected: Vec::with_capacity(capacity),
        }
    }
}

impl<R> Default for Collect<R> {
    fn default() -> Self {
        Self::with_capacity(0)
    }
}

impl<'a, T: 'a, R> Policy<'a, T> for Collect<R> {
    type Carry = ();
    type Verdict = R;
    type Output = Vec<R>;

    fn absorb(&mut self, _index: usize, _element: &'a T, verdict: R) -> ControlFlow<Vec<R>> {
        self.collected.push(verdict);
        ControlFlow::Continue(())
    }

    fn finish(self, (): ()) -> Vec<R> {
        self.collected
    }
}

// =============================================================================
// ForEach
// =============================================================================

/// Drops every verdict; the traversal runs for its side effects.
pub struct Discard<V> {
    verdict: PhantomData<fn(V)>,
}

impl<V> Discard<V> {
    /// Creates the policy.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            verdict: PhantomData,
        }
    }
}

impl<V> Default for Discard<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> std::fmt::Debug for Discard<V> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str("Discard")
    }
}

impl<'a, T: 'a, V> Policy<'a, T> for Discard<V> {
    type Carry = ();
    type Verdict = V;
    type Output = ();

    fn absorb(&mut self, _index: usize, _element: &'a T, _verdict: V) -> ControlFlow<()> {
        ControlFlow::Continue(())
    }

    fn finish(self, (): ()) {}
}

// =============================================================================
// Predicate short-circuiters
// =============================================================================

/// `true` unless some verdict is `false`; stops at the first `false`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct All;

impl<'a, T: 'a> Policy<'a, T> for All {
    type Carry = ();
    type Verdict = bool;
    type Output = bool;

    fn absorb(&mut self, _index: usize, _element: &'a T, verdict: bool) -> ControlFlow<bool> {
        if verdict {
            ControlFlow::Continue(())
        } else {
            ControlFlow::Break(false)
        }
    }

    fn finish(self, (): ()) -> bool {
        true
    }
}

/// `false` unless some verdict is `true`; stops at the first `true`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Any;

impl<'a, T: 'a> Policy<'a, T> for Any {
    type Carry = ();
    type Verdict = bool;
    type Output = bool;

    fn absorb(&mut self, _index: usize, _element: &'a T, verdict: bool) -> ControlFlow<bool> {
        if verdict {
            ControlFlow::Break(true)
        } else {
            ControlFlow::Continue(())
        }
    }

    fn finish(self, (): ()) -> bool {
        false
    }
}

/// The first visited element whose verdict is `true`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct First;

impl<'a, T: 'a> Policy<'a, T> for First {
    type Carry = ();
    type Verdict = bool;
    type Output = Option<&'a T>;

    fn absorb(
        &mut self,
        _index: usize,
        element: &'a T,
        verdict: bool,
    ) -> ControlFlow<Option<&'a T>> {
        if verdict {
            ControlFlow::Break(Some(element))
        } else {
            ControlFlow::Continue(())
        }
    }

    fn finish(self, (): ()) -> Option<&'a T> {
        None
    }
}

/// The index of the first visited element whose verdict is `true`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Position;

impl<'a, T: 'a> Policy<'a, T> for Position {
    type Carry = ();
    type Verdict = bool;
    type Output = Option<usize>;

    fn absorb(
        &mut self,
        index: usize,
        _element: &'a T,
        verdict: bool,
    ) -> ControlFlow<Option<usize>> {
        if verdict {
            ControlFlow::Break(Some(index))
        } else {
            ControlFlow::Continue(())
        }
    }

    fn finish(self, (): ()) -> Option<usize> {
        None
    }
}

// =============================================================================
// Fold
// =============================================================================

/// Threads an accumulator through the traversal.
///
/// Each verdict becomes the carry for the next callback; the last carry is
/// the output.
pub struct Thread<A> {
    accumulator: PhantomData<fn(A) -> A>,
}

impl<A> Thread<A> {
    /// Creates the policy.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            accumulator: PhantomData,
        }
    }
}

impl<A> Default for Thread<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> std::fmt::Debug for Thread<A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str("Thread")
    }
}

impl<'a, T: 'a, A> Policy<'a, T> for Thread<A> {
    type Carry = A;
    type Verdict = A;
    type Output = A;

    fn absorb(&mut self, _index: usize, _element: &'a T, verdict: A) -> ControlFlow<A, A> {
        ControlFlow::Continue(verdict)
    }

    fn finish(self, carry: A) -> A {
        carry
    }
}
