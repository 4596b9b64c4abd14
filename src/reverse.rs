//! Cost-aware reversal of sequences.
//!
//! [`reverse_it`] produces a back-to-front view of any [`Sequence`], choosing
//! the cheapest strategy the source's capabilities allow:
//!
//! 1. **Indexed**: an array-like source is walked by index from the last
//!    element down to the first. Constant setup, no buffer.
//! 2. **Delegated**: a revertible source is asked for its own reverse.
//! 3. **Buffered**: anything else is drained once into a buffer, stored
//!    back-to-front. The only strategy with extra space.
//!
//! The choice depends on the capabilities a source reports, never on its
//! size or content. A source that is both array-like and revertible is always
//! reversed by index.
//!
//! # Examples
//!
//! ```rust
//! use std::collections::LinkedList;
//! use aiterable::reverse::{ReverseStrategy, reverse_it};
//! use aiterable::sequence::{Sequence, generate};
//!
//! let array = [1, 2, 3];
//! let list: LinkedList<i32> = array.into_iter().collect();
//! let generated = generate(|| 1..=3);
//!
//! for (reversed, strategy) in [
//!     (reverse_it(&array), ReverseStrategy::Indexed),
//!     (reverse_it(&list), ReverseStrategy::Delegated),
//!     (reverse_it(&generated), ReverseStrategy::Buffered),
//! ] {
//!     assert_eq!(reversed.strategy(), strategy);
//!     assert_eq!(reversed.cursor().collect::<Vec<_>>(), vec![3, 2, 1]);
//! }
//! ```

use std::fmt;
use std::iter::{Cloned, Rev};
use std::slice;

use crate::sequence::{ArrayLike, BoxedSequence, Sequence};

// =============================================================================
// Index-based reverse view
// =============================================================================

/// A reverse view over an array-like value.
///
/// Created by [`reverse_array`]. Holds a reference only; elements are looked
/// up by index on every pull.
pub struct ReverseArray<'a, A: ?Sized> {
    array: &'a A,
}

/// Constructs a sequence of the elements of `array` in reverse order.
///
/// # Examples
///
/// ```rust
/// use aiterable::reverse::reverse_array;
/// use aiterable::sequence::Sequence;
///
/// let numbers = vec![1, 2, 3];
/// let reversed = reverse_array(&numbers);
///
/// assert_eq!(reversed.cursor().collect::<Vec<_>>(), vec![3, 2, 1]);
/// ```
pub const fn reverse_array<A>(array: &A) -> ReverseArray<'_, A>
where
    A: ArrayLike + ?Sized,
{
    ReverseArray { array }
}

impl<A: ?Sized> Clone for ReverseArray<'_, A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<A: ?Sized> Copy for ReverseArray<'_, A> {}

impl<'a, A> Sequence for ReverseArray<'a, A>
where
    A: ArrayLike + ?Sized,
{
    type Item = A::Item;
    type Cursor<'b>
        = IndexedBackward<'a, A>
    where
        Self: 'b;

    fn cursor(&self) -> Self::Cursor<'_> {
        IndexedBackward {
            array: self.array,
            remaining: self.array.length(),
        }
    }

    fn as_array_like(&self) -> Option<&dyn ArrayLike<Item = Self::Item>> {
        Some(self)
    }
}

impl<A> ArrayLike for ReverseArray<'_, A>
where
    A: ArrayLike + ?Sized,
{
    type Item = A::Item;

    fn length(&self) -> usize {
        self.array.length()
    }

    fn element_at(&self, index: usize) -> Option<Self::Item> {
        let last = self.array.length().checked_sub(1)?;
        self.array.element_at(last.checked_sub(index)?)
    }
}

impl<A: ?Sized> fmt::Debug for ReverseArray<'_, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("ReverseArray").finish_non_exhaustive()
    }
}

/// Cursor walking an array-like value from its last index down to `0`.
pub struct IndexedBackward<'a, A: ?Sized> {
    array: &'a A,
    remaining: usize,
}

impl<A> Iterator for IndexedBackward<'_, A>
where
    A: ArrayLike + ?Sized,
{
    type Item = A::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        self.remaining -= 1;
        self.array.element_at(self.remaining)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<A> ExactSizeIterator for IndexedBackward<'_, A> where A: ArrayLike + ?Sized {}

impl<A> std::iter::FusedIterator for IndexedBackward<'_, A> where A: ArrayLike + ?Sized {}

// =============================================================================
// Dispatcher
// =============================================================================

/// The strategy [`reverse_it`] chose for a source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReverseStrategy {
    /// Walked by index over an array-like source.
    Indexed,
    /// Delegated to the source's own `reverse()`.
    Delegated,
    /// Drained into a buffer stored back-to-front.
    Buffered,
}

impl fmt::Display for ReverseStrategy {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Indexed => "indexed",
            Self::Delegated => "delegated",
            Self::Buffered => "buffered",
        };
        formatter.write_str(name)
    }
}

/// The reverse of a sequence, as produced by [`reverse_it`].
///
/// Re-iterable like any other [`Sequence`]. Indexed and buffered reversals
/// report an array-like view through [`Sequence::as_array_like`], so
/// reversing them again stays cheap. A delegated reversal reports none.
pub struct Reversed<'a, T> {
    kind: ReversedKind<'a, T>,
}

enum ReversedKind<'a, T> {
    Indexed(ReverseArray<'a, dyn ArrayLike<Item = T> + 'a>),
    Delegated(BoxedSequence<'a, T>),
    // Elements in reverse order.
    Buffered(Vec<T>),
}

impl<T> Reversed<'_, T> {
    /// Returns the strategy that produced this reversal.
    pub const fn strategy(&self) -> ReverseStrategy {
        match self.kind {
            ReversedKind::Indexed(_) => ReverseStrategy::Indexed,
            ReversedKind::Delegated(_) => ReverseStrategy::Delegated,
            ReversedKind::Buffered(_) => ReverseStrategy::Buffered,
        }
    }
}

impl<T: Clone> Sequence for Reversed<'_, T> {
    type Item = T;
    type Cursor<'b>
        = ReversedCursor<'b, T>
    where
        Self: 'b;

    fn cursor(&self) -> Self::Cursor<'_> {
        let inner = match &self.kind {
            ReversedKind::Indexed(view) => CursorKind::Indexed(view.cursor()),
            ReversedKind::Delegated(sequence) => CursorKind::Delegated(sequence.cursor()),
            ReversedKind::Buffered(buffer) => CursorKind::Buffered(buffer.iter().cloned()),
        };
        ReversedCursor { inner }
    }

    fn as_array_like(&self) -> Option<&dyn ArrayLike<Item = Self::Item>> {
        match &self.kind {
            ReversedKind::Indexed(view) => Some(view),
            ReversedKind::Delegated(_) => None,
            ReversedKind::Buffered(buffer) => Some(buffer),
        }
    }
}

impl<T> fmt::Debug for Reversed<'_, T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Reversed")
            .field("strategy", &self.strategy())
            .finish_non_exhaustive()
    }
}

/// Cursor over a [`Reversed`] sequence.
pub struct ReversedCursor<'b, T> {
    inner: CursorKind<'b, T>,
}

enum CursorKind<'b, T> {
    Indexed(IndexedBackward<'b, dyn ArrayLike<Item = T> + 'b>),
    Delegated(Box<dyn Iterator<Item = T> + 'b>),
    Buffered(Cloned<slice::Iter<'b, T>>),
}

impl<T: Clone> Iterator for ReversedCursor<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.inner {
            CursorKind::Indexed(cursor) => cursor.next(),
            CursorKind::Delegated(cursor) => cursor.next(),
            CursorKind::Buffered(cursor) => cursor.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.inner {
            CursorKind::Indexed(cursor) => cursor.size_hint(),
            CursorKind::Delegated(cursor) => cursor.size_hint(),
            CursorKind::Buffered(cursor) => cursor.size_hint(),
        }
    }
}

/// Constructs a sequence of the `source` elements in reverse order.
///
/// - If `source` is array-like, its elements are walked by index.
/// - Else if `source` is revertible, its own `reverse()` is used.
/// - Otherwise the elements are collected into a buffer exactly once, in
///   reverse order.
///
/// # Examples
///
/// ```rust
/// use aiterable::reverse::{ReverseStrategy, reverse_it};
/// use aiterable::sequence::Sequence;
///
/// let letters = vec!['a', 'b', 'c'];
/// let reversed = reverse_it(&letters);
/// assert_eq!(reversed.strategy(), ReverseStrategy::Indexed);
/// assert_eq!(reversed.cursor().collect::<String>(), "cba");
///
/// // Reversing twice restores the original order.
/// let restored = reverse_it(&reversed);
/// assert_eq!(restored.cursor().collect::<String>(), "abc");
/// ```
pub fn reverse_it<S>(source: &S) -> Reversed<'_, S::Item>
where
    S: Sequence + ?Sized,
    S::Item: Clone,
{
    if let Some(array) = source.as_array_like() {
        #[cfg(feature = "tracing")]
        tracing::trace!(strategy = %ReverseStrategy::Indexed, "reversing sequence");

        return Reversed {
            kind: ReversedKind::Indexed(reverse_array(array)),
        };
    }

    if let Some(revertible) = source.as_revertible() {
        #[cfg(feature = "tracing")]
        tracing::trace!(strategy = %ReverseStrategy::Delegated, "reversing sequence");

        return Reversed {
            kind: ReversedKind::Delegated(revertible.reverse()),
        };
    }

    let mut buffer: Vec<S::Item> = source.cursor().collect();
    buffer.reverse();

    #[cfg(feature = "tracing")]
    tracing::trace!(
        strategy = %ReverseStrategy::Buffered,
        buffered = buffer.len(),
        "reversing sequence"
    );

    Reversed {
        kind: ReversedKind::Buffered(buffer),
    }
}

// =============================================================================
// Reversal without a shared buffer
// =============================================================================

/// Reverses `source` without requiring `Clone` elements.
///
/// Array-like and revertible sources take the same paths as in
/// [`reverse_it`]. Opaque sources are collected afresh for every cursor.
pub(crate) fn reverse_unbuffered<S>(source: &S) -> BoxedSequence<'_, S::Item>
where
    S: Sequence + ?Sized,
{
    if let Some(array) = source.as_array_like() {
        return BoxedSequence::new(reverse_array(array));
    }
    if let Some(revertible) = source.as_revertible() {
        return revertible.reverse();
    }
    BoxedSequence::new(Rewound { source })
}

struct Rewound<'a, S: ?Sized> {
    source: &'a S,
}

impl<S> Sequence for Rewound<'_, S>
where
    S: Sequence + ?Sized,
{
    type Item = S::Item;
    type Cursor<'b>
        = Rev<std::vec::IntoIter<S::Item>>
    where
        Self: 'b;

    fn cursor(&self) -> Self::Cursor<'_> {
        let buffer: Vec<S::Item> = self.source.cursor().collect();
        buffer.into_iter().rev()
    }
}

static_assertions::assert_not_impl_any!(Reversed<'static, i32>: ArrayLike);
