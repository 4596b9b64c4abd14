//! Optional capabilities a sequence may expose through its probes.

use super::BoxedSequence;

/// A sequence backed by addressable storage.
///
/// `element_at(index)` returns `Some` for every `index < length()` and `None`
/// otherwise. Both operations are expected to be cheap; the reversal
/// dispatcher walks an array-like source by index from `length() - 1` down
/// to `0` instead of buffering it.
///
/// This trait is object safe and is usually reached through
/// [`Sequence::as_array_like`](super::Sequence::as_array_like).
///
/// # Examples
///
/// ```rust
/// use aiterable::sequence::ArrayLike;
///
/// let letters = ['a', 'b', 'c'];
/// let view: &dyn ArrayLike<Item = char> = &letters;
///
/// assert_eq!(view.length(), 3);
/// assert_eq!(view.element_at(2), Some('c'));
/// assert_eq!(view.element_at(3), None);
/// ```
pub trait ArrayLike {
    /// The type of the elements.
    type Item;

    /// Returns the number of addressable elements.
    fn length(&self) -> usize;

    /// Returns the element at `index`, or `None` when `index >= length()`.
    fn element_at(&self, index: usize) -> Option<Self::Item>;
}

/// A sequence that knows how to produce its own reverse.
///
/// `reverse` must not modify the original, and every call must return a
/// sequence that is independently iterable. The result is not validated: a
/// `reverse` that yields anything other than the original elements
/// back-to-front breaks every consumer relying on it.
///
/// # Examples
///
/// ```rust
/// use std::collections::LinkedList;
/// use aiterable::sequence::{Revertible, Sequence};
///
/// let list: LinkedList<i32> = [1, 2, 3].into_iter().collect();
/// let reversed = list.reverse();
///
/// assert_eq!(reversed.cursor().collect::<Vec<_>>(), vec![3, 2, 1]);
/// // The original is untouched.
/// assert_eq!(list.cursor().collect::<Vec<_>>(), vec![1, 2, 3]);
/// ```
pub trait Revertible {
    /// The type of the elements.
    type Item;

    /// Returns a sequence over the same elements in reverse order.
    fn reverse(&self) -> BoxedSequence<'_, Self::Item>;
}
