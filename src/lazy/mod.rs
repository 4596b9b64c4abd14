//! Lazy iterables with chainable operators.
//!
//! This module provides [`LazyIterable`], a re-iterable sequence that carries
//! zero or more pending stages:
//!
//! - [`filter`](LazyIterable::filter), [`map`](LazyIterable::map) and
//!   [`flat_map`](LazyIterable::flat_map) record a stage and return a new
//!   `LazyIterable`. No element is touched until the result is driven.
//! - [`for_each`](LazyIterable::for_each) and [`reduce`](LazyIterable::reduce)
//!   drive the chain once, in a single pass over the source.
//!
//! Any supported source becomes a `LazyIterable` through [`wrap`]. Wrapping a
//! value that already is a `LazyIterable` returns it unchanged, so chains
//! composed from other chains never pile up identity layers.
//!
//! # Examples
//!
//! ```rust
//! use aiterable::lazy::wrap;
//!
//! let words = ["lazy", "iterables", "compose"];
//!
//! let letters = wrap(&words)
//!     .filter(|word| word.len() > 4)
//!     .flat_map(|word| word.chars())
//!     .map(|letter| letter.to_ascii_uppercase());
//!
//! // Nothing has run yet; every drive starts from the source again.
//! assert_eq!(letters.iter().take(4).collect::<String>(), "ITER");
//! assert_eq!(letters.reduce(|count, _| count + 1, 0), 16);
//! ```
//!
//! # Errors and Panics
//!
//! Closures are never guarded. A panic inside a predicate, converter, reducer
//! or action unwinds straight through the caller that is driving the chain.
//! For closures that fail with a `Result`, use
//! [`try_for_each`](LazyIterable::try_for_each) or
//! [`try_reduce`](LazyIterable::try_reduce): they stop at the first `Err` and
//! return it unchanged.

mod stages;

use std::ops::Range;

pub use stages::{Filter, FlatMap, Map};

use crate::iteration::{its_empty, its_first, its_last};
use crate::reverse::{ReverseArray, Reversed, reverse_it};
use crate::sequence::{
    ArrayLike, Bidirectional, BoxedSequence, Generated, Revertible, Sequence, SingleUse,
};

/// A re-iterable sequence with lazy, chainable operators.
///
/// `LazyIterable<S>` is a thin wrapper around a sequence `S`, which is either
/// a root source or a pending stage ([`Filter`], [`Map`], [`FlatMap`]) owning
/// its own upstream. It reports the same capabilities as `S`, and reports
/// itself as a lazy iterable.
///
/// # Re-iteration
///
/// Driving a `LazyIterable` borrows it; the same chain can be driven again
/// afterwards and starts from the beginning of the source. The only
/// exception is a genuinely single-use root (see
/// [`single_use`](crate::sequence::single_use)), whose later traversals are
/// empty.
///
/// # Examples
///
/// ```rust
/// use aiterable::lazy::LazyIterable;
///
/// let numbers = vec![1, 2, 3, 4];
/// let evens = LazyIterable::new(&numbers).filter(|n| **n % 2 == 0);
///
/// let mut seen = Vec::new();
/// evens.for_each(|n| seen.push(*n));
/// evens.for_each(|n| seen.push(*n));
/// assert_eq!(seen, vec![2, 4, 2, 4]);
///
/// for n in &evens {
///     assert_eq!(n % 2, 0);
/// }
/// ```
#[derive(Clone, Copy, Debug, Default)]
#[must_use = "lazy iterables do nothing unless driven"]
pub struct LazyIterable<S> {
    source: S,
}

impl<S> LazyIterable<S> {
    /// Wraps `source` without any transformation stage.
    ///
    /// Prefer [`wrap`] when `source` might already be a `LazyIterable`.
    #[inline]
    pub const fn new(source: S) -> Self {
        Self { source }
    }

    /// Returns a reference to the wrapped sequence.
    pub const fn source(&self) -> &S {
        &self.source
    }

    /// Unwraps the sequence.
    pub fn into_inner(self) -> S {
        self.source
    }
}

impl<S: Sequence> LazyIterable<S> {
    // =========================================================================
    // Lazy Operators
    // =========================================================================

    /// Creates an iterable with all elements that pass `predicate`.
    ///
    /// If no element passes, the result is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use aiterable::lazy::wrap;
    ///
    /// let evens = wrap(vec![1, 2, 3, 4]).filter(|n| n % 2 == 0);
    /// assert_eq!(evens.iter().collect::<Vec<_>>(), vec![2, 4]);
    ///
    /// let none = wrap(vec![1, 3]).filter(|n| n % 2 == 0);
    /// assert!(none.is_empty());
    /// ```
    pub fn filter<P>(self, predicate: P) -> LazyIterable<Filter<S, P>>
    where
        P: Fn(&S::Item) -> bool,
    {
        LazyIterable::new(Filter::new(self.source, predicate))
    }

    /// Creates an iterable with the result of `convert` for every element,
    /// preserving order and count.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use aiterable::lazy::wrap;
    ///
    /// let doubled = wrap(vec![1, 2, 3]).map(|n| n * 2);
    /// assert_eq!(doubled.iter().collect::<Vec<_>>(), vec![2, 4, 6]);
    /// ```
    pub fn map<F, R>(self, convert: F) -> LazyIterable<Map<S, F>>
    where
        F: Fn(S::Item) -> R,
    {
        LazyIterable::new(Map::new(self.source, convert))
    }

    /// Maps each element to an iterable and concatenates the results.
    ///
    /// Elements of the iterable produced for the first source element come
    /// first, then those of the second one, and so on.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use aiterable::lazy::wrap;
    ///
    /// let flattened = wrap(vec![1, 2]).flat_map(|n| [n, n * 10]);
    /// assert_eq!(flattened.iter().collect::<Vec<_>>(), vec![1, 10, 2, 20]);
    /// ```
    pub fn flat_map<F, U>(self, convert: F) -> LazyIterable<FlatMap<S, F, U>>
    where
        F: Fn(S::Item) -> U,
        U: IntoIterator,
    {
        LazyIterable::new(FlatMap::new(self.source, convert))
    }

    // =========================================================================
    // Terminal Operators
    // =========================================================================

    /// Performs `action` for each element, in iteration order.
    pub fn for_each<A>(&self, action: A)
    where
        A: FnMut(S::Item),
    {
        self.source.cursor().for_each(action);
    }

    /// Folds the elements from left to right, starting with `initial`.
    ///
    /// Returns `initial` unchanged when there are no elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use aiterable::lazy::wrap;
    ///
    /// assert_eq!(wrap(vec![1, 2, 3]).reduce(|sum, n| sum + n, 0), 6);
    /// assert_eq!(wrap(Vec::<i32>::new()).reduce(|sum, n| sum + n, 0), 0);
    /// ```
    pub fn reduce<B, R>(&self, reducer: R, initial: B) -> B
    where
        R: FnMut(B, S::Item) -> B,
    {
        self.source.cursor().fold(initial, reducer)
    }

    /// Performs a fallible `action` for each element, stopping at the first
    /// error.
    ///
    /// # Errors
    ///
    /// Returns the first `Err` produced by `action`; later elements are not
    /// visited.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use aiterable::lazy::wrap;
    ///
    /// let mut visited = Vec::new();
    /// let result = wrap(vec![1, 2, 3]).try_for_each(|n| {
    ///     visited.push(n);
    ///     if n == 2 { Err(format!("rejected {n}")) } else { Ok(()) }
    /// });
    ///
    /// assert_eq!(result, Err("rejected 2".to_string()));
    /// assert_eq!(visited, vec![1, 2]);
    /// ```
    pub fn try_for_each<E, A>(&self, action: A) -> Result<(), E>
    where
        A: FnMut(S::Item) -> Result<(), E>,
    {
        self.source.cursor().try_for_each(action)
    }

    /// Folds the elements with a fallible `reducer`, stopping at the first
    /// error.
    ///
    /// # Errors
    ///
    /// Returns the first `Err` produced by `reducer`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use aiterable::lazy::wrap;
    ///
    /// let checked_sum = |numbers: Vec<u8>| {
    ///     wrap(numbers).try_reduce(|sum: u8, n| sum.checked_add(n).ok_or("overflow"), 0)
    /// };
    ///
    /// assert_eq!(checked_sum(vec![100, 100]), Ok(200));
    /// assert_eq!(checked_sum(vec![200, 100]), Err("overflow"));
    /// ```
    pub fn try_reduce<B, E, R>(&self, reducer: R, initial: B) -> Result<B, E>
    where
        R: FnMut(B, S::Item) -> Result<B, E>,
    {
        self.source.cursor().try_fold(initial, reducer)
    }

    // =========================================================================
    // Access
    // =========================================================================

    /// Returns a fresh cursor over the elements.
    pub fn iter(&self) -> S::Cursor<'_> {
        self.source.cursor()
    }

    /// Returns `true` if there are no elements. Pulls at most one element.
    pub fn is_empty(&self) -> bool {
        its_empty(&self.source)
    }

    /// Returns the first element, or `None` if there are none.
    pub fn first(&self) -> Option<S::Item> {
        its_first(&self.source)
    }

    /// Returns the last element, or `None` if there are none.
    ///
    /// See [`its_last`] for how the source's capabilities are used.
    pub fn last(&self) -> Option<S::Item> {
        its_last(&self.source)
    }

    /// Returns the elements in reverse order, using [`reverse_it`].
    pub fn reverse(&self) -> Reversed<'_, S::Item>
    where
        S::Item: Clone,
    {
        reverse_it(&self.source)
    }

    /// Erases the stage types, keeping the operators.
    pub fn boxed<'a>(self) -> LazyIterable<BoxedSequence<'a, S::Item>>
    where
        S: 'a,
    {
        LazyIterable::new(BoxedSequence::new(self.source))
    }
}

impl<S: Sequence> Sequence for LazyIterable<S> {
    type Item = S::Item;
    type Cursor<'a>
        = S::Cursor<'a>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        self.source.cursor()
    }

    fn as_array_like(&self) -> Option<&dyn ArrayLike<Item = Self::Item>> {
        self.source.as_array_like()
    }

    fn as_revertible(&self) -> Option<&dyn Revertible<Item = Self::Item>> {
        self.source.as_revertible()
    }

    fn is_lazy_iterable(&self) -> bool {
        true
    }
}

impl<'a, S: Sequence> IntoIterator for &'a LazyIterable<S> {
    type Item = S::Item;
    type IntoIter = S::Cursor<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.source.cursor()
    }
}

// =============================================================================
// Wrapping
// =============================================================================

/// Conversion into a [`LazyIterable`].
///
/// A `LazyIterable` converts into itself. Every other supported source is
/// wrapped without a transformation stage.
pub trait IntoLazy {
    /// The sequence the resulting `LazyIterable` wraps.
    type Source: Sequence;

    /// Converts `self` into a `LazyIterable`.
    fn into_lazy(self) -> LazyIterable<Self::Source>;
}

impl<S: Sequence> IntoLazy for LazyIterable<S> {
    type Source = S;

    #[inline]
    fn into_lazy(self) -> Self {
        self
    }
}

macro_rules! into_lazy_by_wrapping {
    ($([$($generics:tt)*] $source:ty),+ $(,)?) => {
        $(
            impl<$($generics)*> IntoLazy for $source
            where
                $source: Sequence,
            {
                type Source = Self;

                #[inline]
                fn into_lazy(self) -> LazyIterable<Self> {
                    LazyIterable::new(self)
                }
            }
        )+
    };
}

into_lazy_by_wrapping!(
    [T] Vec<T>,
    [T] Box<[T]>,
    [T, const N: usize] [T; N],
    ['s, T] &'s [T],
    ['s, T] &'s Vec<T>,
    ['s, T] &'s Box<[T]>,
    ['s, T, const N: usize] &'s [T; N],
    [T] Range<T>,
    [F, I] Generated<F, I>,
    [F, I] Bidirectional<F, I>,
    [I] SingleUse<I>,
    ['a, T] BoxedSequence<'a, T>,
    ['a, T] Reversed<'a, T>,
    ['a, A: ?Sized] ReverseArray<'a, A>,
    [S, P] Filter<S, P>,
    [S, F] Map<S, F>,
    [S, F, U] FlatMap<S, F, U>,
);

#[cfg(feature = "collections")]
into_lazy_by_wrapping!(
    [T] std::collections::VecDeque<T>,
    ['s, T] &'s std::collections::VecDeque<T>,
    [T] std::collections::LinkedList<T>,
    ['s, T] &'s std::collections::LinkedList<T>,
    [T] std::collections::BTreeSet<T>,
    ['s, T] &'s std::collections::BTreeSet<T>,
);

#[cfg(feature = "smallvec")]
into_lazy_by_wrapping!([A: smallvec::Array] smallvec::SmallVec<A>);

#[cfg(feature = "arrayvec")]
into_lazy_by_wrapping!([T, const CAP: usize] arrayvec::ArrayVec<T, CAP>);

/// Creates a [`LazyIterable`] over `source`.
///
/// Returns `source` itself when it already is a `LazyIterable`.
///
/// # Examples
///
/// ```rust
/// use aiterable::lazy::{is_lazy_iterable, wrap};
///
/// let numbers = [3, 1, 2];
/// let lazy = wrap(&numbers);
/// assert!(is_lazy_iterable(&lazy));
/// assert!(!is_lazy_iterable(&&numbers[..]));
///
/// // Wrapping again is the identity.
/// let same = wrap(lazy);
/// assert_eq!(same.reduce(|sum, n| sum + n, 0), 6);
/// ```
pub fn wrap<T: IntoLazy>(source: T) -> LazyIterable<T::Source> {
    source.into_lazy()
}

/// Probes whether `source` already carries the lazy operators.
pub fn is_lazy_iterable<S>(source: &S) -> bool
where
    S: Sequence + ?Sized,
{
    source.is_lazy_iterable()
}

static_assertions::assert_impl_all!(LazyIterable<Vec<i32>>: Sequence, IntoLazy, Clone);
static_assertions::assert_impl_all!(LazyIterable<&'static [u8]>: Sequence, Copy);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence::generate;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn test_operators_do_not_touch_source_at_call_time() {
        let pulls = Cell::new(0);
        let source = generate(|| {
            pulls.set(pulls.get() + 1);
            0..10
        });

        let chain = wrap(source)
            .filter(|n| n % 2 == 0)
            .map(|n| n * 3)
            .flat_map(|n| [n, n]);
        assert_eq!(pulls.get(), 0);

        assert_eq!(chain.iter().count(), 10);
        assert_eq!(pulls.get(), 1);
    }

    #[rstest]
    fn test_wrap_is_identity_for_lazy_iterable() {
        let lazy = wrap(vec![1, 2, 3]).map(|n| n + 1);
        let wrapped: LazyIterable<Map<Vec<i32>, _>> = wrap(lazy);
        assert_eq!(wrapped.iter().collect::<Vec<_>>(), vec![2, 3, 4]);
    }

    #[rstest]
    fn test_probe_matches_wrapping() {
        let numbers = vec![1, 2];
        assert!(!is_lazy_iterable(&numbers));
        assert!(is_lazy_iterable(&wrap(&numbers)));
        assert!(is_lazy_iterable(&wrap(&numbers).boxed()));
    }

    #[rstest]
    fn test_identity_wrapper_forwards_capabilities() {
        let numbers = vec![1, 2, 3];
        let lazy = wrap(&numbers);
        assert!(lazy.as_array_like().is_some());
        assert!(lazy.as_revertible().is_none());

        let opaque = wrap(generate(|| 0..3));
        assert!(opaque.as_array_like().is_none());
    }

    #[rstest]
    fn test_filter_with_no_match_is_empty() {
        let lazy = wrap(vec![1, 3, 5]).filter(|n| n % 2 == 0);
        assert!(lazy.is_empty());
        assert_eq!(lazy.first(), None);
        assert_eq!(lazy.last(), None);
    }

    #[rstest]
    fn test_for_each_visits_in_order() {
        let mut visited = Vec::new();
        wrap(vec!['a', 'b', 'c']).for_each(|letter| visited.push(letter));
        assert_eq!(visited, vec!['a', 'b', 'c']);
    }

    #[rstest]
    fn test_reduce_with_ignored_element_returns_initial() {
        let lazy = wrap(vec![1, 2, 3]);
        assert_eq!(lazy.reduce(|accumulator, _| accumulator, 42), 42);
    }

    #[rstest]
    fn test_try_reduce_short_circuits() {
        let visited = Cell::new(0);
        let lazy = wrap(vec![1, 2, 3, 4]);

        let result: Result<i32, &str> = lazy.try_reduce(
            |sum, n| {
                visited.set(visited.get() + 1);
                if n == 3 { Err("three") } else { Ok(sum + n) }
            },
            0,
        );

        assert_eq!(result, Err("three"));
        assert_eq!(visited.get(), 3);
    }

    #[rstest]
    #[should_panic(expected = "predicate failed")]
    fn test_panic_in_predicate_reaches_driver() {
        let lazy = wrap(vec![1, 2]).filter(|n| {
            assert!(*n < 2, "predicate failed");
            true
        });
        lazy.for_each(drop);
    }

    #[rstest]
    fn test_map_keeps_array_like_for_last() {
        let numbers = vec![1, 2, 3];
        let lazy = wrap(&numbers).map(|n| n * 100);
        assert!(lazy.as_array_like().is_some());
        assert_eq!(lazy.last(), Some(300));
    }

    #[rstest]
    fn test_reverse_of_mapped_array_avoids_buffer() {
        let numbers = vec![1, 2, 3];
        let reversed_strategy = wrap(&numbers).map(|n| n * 2).reverse().strategy();
        assert_eq!(reversed_strategy, crate::reverse::ReverseStrategy::Indexed);
    }

    #[rstest]
    fn test_boxed_chain_keeps_elements() {
        let boxed = wrap(vec![1, 2, 3]).filter(|n| *n > 1).boxed();
        assert_eq!(boxed.map(|n| n * 2).iter().collect::<Vec<_>>(), vec![4, 6]);
    }
}
