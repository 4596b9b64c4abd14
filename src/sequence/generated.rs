//! Sequences backed by cursor factories.
//!
//! A closure that returns a fresh iterator on every call is the most general
//! way to describe a re-iterable source. [`generate`] turns such a closure
//! into an opaque [`Sequence`]; [`generate_bidirectional`] additionally marks
//! it [`Revertible`] when the produced iterators can run backwards.
//!
//! [`single_use`] adapts a plain iterator. It is re-iterable in name only:
//! the first cursor drains the iterator and every later cursor is empty.

use std::cell::Cell;
use std::fmt;
use std::iter::{Flatten, Fuse, Rev};
use std::marker::PhantomData;

use super::{BoxedSequence, Revertible, Sequence};

/// An opaque sequence whose cursors come from a factory closure.
///
/// Created by [`generate`].
pub struct Generated<F, I> {
    factory: F,
    marker: PhantomData<fn() -> I>,
}

/// Creates a sequence that calls `factory` for every cursor.
///
/// The factory must return an iterator over the same elements each time it
/// is called; it is the caller's half of the re-iteration contract.
///
/// # Examples
///
/// ```rust
/// use aiterable::sequence::{Sequence, generate};
///
/// let squares = generate(|| (1..=4).map(|n| n * n));
///
/// assert_eq!(squares.cursor().collect::<Vec<_>>(), vec![1, 4, 9, 16]);
/// assert_eq!(squares.cursor().sum::<i32>(), 30);
/// assert!(squares.as_revertible().is_none());
/// ```
pub const fn generate<F, I>(factory: F) -> Generated<F, I>
where
    F: Fn() -> I,
    I: Iterator,
{
    Generated {
        factory,
        marker: PhantomData,
    }
}

impl<F, I> Sequence for Generated<F, I>
where
    F: Fn() -> I,
    I: Iterator,
{
    type Item = I::Item;
    type Cursor<'a>
        = Fuse<I>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        (self.factory)().fuse()
    }
}

impl<F: Clone, I> Clone for Generated<F, I> {
    fn clone(&self) -> Self {
        Self {
            factory: self.factory.clone(),
            marker: PhantomData,
        }
    }
}

impl<F, I> fmt::Debug for Generated<F, I> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("Generated").finish_non_exhaustive()
    }
}

/// A revertible sequence whose cursors come from a factory of
/// double-ended iterators.
///
/// Created by [`generate_bidirectional`].
pub struct Bidirectional<F, I> {
    factory: F,
    marker: PhantomData<fn() -> I>,
}

/// Creates a revertible sequence from a factory of double-ended iterators.
///
/// Its reverse walks each produced iterator from the back, so no element is
/// ever buffered.
///
/// # Examples
///
/// ```rust
/// use aiterable::sequence::{Sequence, generate_bidirectional};
///
/// let words = ["to", "be", "or", "not"];
/// let long_words = generate_bidirectional(|| words.iter().filter(|word| word.len() > 2));
///
/// let reversed = long_words.as_revertible().expect("revertible").reverse();
/// assert_eq!(reversed.cursor().collect::<Vec<_>>(), vec![&"not"]);
/// ```
pub const fn generate_bidirectional<F, I>(factory: F) -> Bidirectional<F, I>
where
    F: Fn() -> I,
    I: DoubleEndedIterator,
{
    Bidirectional {
        factory,
        marker: PhantomData,
    }
}

impl<F, I> Sequence for Bidirectional<F, I>
where
    F: Fn() -> I,
    I: DoubleEndedIterator,
{
    type Item = I::Item;
    type Cursor<'a>
        = Fuse<I>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        (self.factory)().fuse()
    }

    fn as_revertible(&self) -> Option<&dyn Revertible<Item = Self::Item>> {
        Some(self)
    }
}

impl<F, I> Revertible for Bidirectional<F, I>
where
    F: Fn() -> I,
    I: DoubleEndedIterator,
{
    type Item = I::Item;

    fn reverse(&self) -> BoxedSequence<'_, Self::Item> {
        BoxedSequence::new(generate(move || -> Rev<I> { (self.factory)().rev() }))
    }
}

impl<F: Clone, I> Clone for Bidirectional<F, I> {
    fn clone(&self) -> Self {
        Self {
            factory: self.factory.clone(),
            marker: PhantomData,
        }
    }
}

impl<F, I> fmt::Debug for Bidirectional<F, I> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("Bidirectional").finish_non_exhaustive()
    }
}

/// A sequence over a one-shot iterator.
///
/// Created by [`single_use`]. The first cursor takes the iterator; every
/// cursor produced afterwards is empty.
pub struct SingleUse<I> {
    iterator: Cell<Option<I>>,
}

/// Adapts a one-shot iterator to the sequence protocol.
///
/// Only the first traversal sees the elements. Consumers must not rely on
/// the second traversal being empty either; it is merely what happens.
///
/// # Examples
///
/// ```rust
/// use aiterable::sequence::{Sequence, single_use};
///
/// let once = single_use(vec![1, 2].into_iter());
///
/// assert_eq!(once.cursor().collect::<Vec<_>>(), vec![1, 2]);
/// assert_eq!(once.cursor().next(), None);
/// ```
pub const fn single_use<I: Iterator>(iterator: I) -> SingleUse<I> {
    SingleUse {
        iterator: Cell::new(Some(iterator)),
    }
}

impl<I: Iterator> Sequence for SingleUse<I> {
    type Item = I::Item;
    type Cursor<'a>
        = Flatten<std::option::IntoIter<I>>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        self.iterator.take().into_iter().flatten()
    }
}

impl<I> fmt::Debug for SingleUse<I> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("SingleUse").finish_non_exhaustive()
    }
}

static_assertions::assert_not_impl_any!(SingleUse<std::vec::IntoIter<i32>>: Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_generate_calls_factory_per_cursor() {
        let calls = Cell::new(0);
        let sequence = generate(|| {
            calls.set(calls.get() + 1);
            0..3
        });

        assert_eq!(calls.get(), 0);
        let _ = sequence.cursor();
        let _ = sequence.cursor();
        assert_eq!(calls.get(), 2);
    }

    #[rstest]
    fn test_generate_cursor_is_fused() {
        let mut toggle = 0;
        let flaky = std::iter::from_fn(move || {
            toggle += 1;
            (toggle % 2 == 0).then_some(toggle)
        });
        let sequence = generate(move || flaky.clone());

        let mut cursor = sequence.cursor();
        assert_eq!(cursor.next(), None);
        assert_eq!(cursor.next(), None);
    }

    #[rstest]
    fn test_bidirectional_reverse_does_not_touch_original() {
        let source = [1, 2, 3];
        let sequence = generate_bidirectional(|| source.iter().copied());

        let reversed = sequence.reverse();
        assert_eq!(reversed.cursor().collect::<Vec<_>>(), vec![3, 2, 1]);
        assert_eq!(reversed.cursor().collect::<Vec<_>>(), vec![3, 2, 1]);
        assert_eq!(sequence.cursor().collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[rstest]
    fn test_single_use_second_cursor_is_empty() {
        let sequence = single_use("abc".chars());
        assert_eq!(sequence.cursor().collect::<String>(), "abc");
        assert_eq!(sequence.cursor().collect::<String>(), "");
    }
}
