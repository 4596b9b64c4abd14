//! Type-erased sequences.

use std::fmt;

use super::{ArrayLike, Revertible, Sequence};

/// Object-safe mirror of [`Sequence`].
///
/// `Sequence` has a lifetime-generic cursor type and cannot be used as a trait
/// object. Every `Sequence` implements `DynSequence` through a blanket
/// implementation, which boxes the cursor instead.
pub trait DynSequence {
    /// The type of the elements.
    type Item;

    /// Produces a fresh boxed cursor.
    fn dyn_cursor(&self) -> Box<dyn Iterator<Item = Self::Item> + '_>;

    /// Forwards [`Sequence::as_array_like`].
    fn dyn_array_like(&self) -> Option<&dyn ArrayLike<Item = Self::Item>>;

    /// Forwards [`Sequence::as_revertible`].
    fn dyn_revertible(&self) -> Option<&dyn Revertible<Item = Self::Item>>;

    /// Forwards [`Sequence::is_lazy_iterable`].
    fn dyn_is_lazy_iterable(&self) -> bool;
}

impl<S: Sequence> DynSequence for S {
    type Item = S::Item;

    fn dyn_cursor(&self) -> Box<dyn Iterator<Item = Self::Item> + '_> {
        Box::new(self.cursor())
    }

    fn dyn_array_like(&self) -> Option<&dyn ArrayLike<Item = Self::Item>> {
        self.as_array_like()
    }

    fn dyn_revertible(&self) -> Option<&dyn Revertible<Item = Self::Item>> {
        self.as_revertible()
    }

    fn dyn_is_lazy_iterable(&self) -> bool {
        self.is_lazy_iterable()
    }
}

/// An owned, type-erased sequence.
///
/// Each call to [`cursor`](Sequence::cursor) asks the erased sequence for a
/// new cursor, so a `BoxedSequence` is exactly as re-iterable as the value it
/// wraps. Capability probes are forwarded as well.
///
/// # Examples
///
/// ```rust
/// use aiterable::sequence::{BoxedSequence, Sequence};
///
/// let sequences: Vec<BoxedSequence<'static, u32>> = vec![
///     BoxedSequence::new(vec![1, 2]),
///     BoxedSequence::new(10_u32..13),
/// ];
///
/// let lengths: Vec<usize> = sequences.iter().map(|sequence| sequence.cursor().count()).collect();
/// assert_eq!(lengths, vec![2, 3]);
/// ```
pub struct BoxedSequence<'a, T> {
    inner: Box<dyn DynSequence<Item = T> + 'a>,
}

impl<'a, T> BoxedSequence<'a, T> {
    /// Erases the type of `sequence`.
    pub fn new<S>(sequence: S) -> Self
    where
        S: Sequence<Item = T> + 'a,
    {
        Self {
            inner: Box::new(sequence),
        }
    }
}

impl<T> Sequence for BoxedSequence<'_, T> {
    type Item = T;
    type Cursor<'b>
        = Box<dyn Iterator<Item = T> + 'b>
    where
        Self: 'b;

    fn cursor(&self) -> Self::Cursor<'_> {
        self.inner.dyn_cursor()
    }

    fn as_array_like(&self) -> Option<&dyn ArrayLike<Item = T>> {
        self.inner.dyn_array_like()
    }

    fn as_revertible(&self) -> Option<&dyn Revertible<Item = T>> {
        self.inner.dyn_revertible()
    }

    fn is_lazy_iterable(&self) -> bool {
        self.inner.dyn_is_lazy_iterable()
    }
}

impl<T> fmt::Debug for BoxedSequence<'_, T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("BoxedSequence").finish_non_exhaustive()
    }
}
