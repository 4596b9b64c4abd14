//! Pending transformation stages of a lazy iterable.
//!
//! Each stage owns its upstream sequence and the caller's closure, and does
//! nothing until a cursor is requested. Producing a cursor produces the
//! upstream cursor and threads it through the closure on every pull.
//!
//! Stages keep whatever capability the transformation preserves:
//!
//! | Stage | array-like when | revertible when |
//! |---|---|---|
//! | [`Map`] | upstream is array-like | upstream is revertible |
//! | [`Filter`] | never | upstream is array-like or revertible |
//! | [`FlatMap`] | never | never |

use std::fmt;
use std::iter;
use std::marker::PhantomData;

use crate::reverse::reverse_unbuffered;
use crate::sequence::{ArrayLike, BoxedSequence, Revertible, Sequence};

// =============================================================================
// Filter
// =============================================================================

/// Yields the upstream elements matching a predicate.
///
/// Created by [`LazyIterable::filter`](super::LazyIterable::filter).
#[derive(Clone)]
pub struct Filter<S, P> {
    source: S,
    predicate: P,
}

impl<S, P> Filter<S, P> {
    pub(crate) const fn new(source: S, predicate: P) -> Self {
        Self { source, predicate }
    }
}

impl<S, P> Sequence for Filter<S, P>
where
    S: Sequence,
    P: Fn(&S::Item) -> bool,
{
    type Item = S::Item;
    type Cursor<'a>
        = iter::Filter<S::Cursor<'a>, &'a P>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        self.source.cursor().filter(&self.predicate)
    }

    fn as_revertible(&self) -> Option<&dyn Revertible<Item = Self::Item>> {
        if self.source.as_array_like().is_some() || self.source.as_revertible().is_some() {
            Some(self)
        } else {
            None
        }
    }
}

impl<S, P> Revertible for Filter<S, P>
where
    S: Sequence,
    P: Fn(&S::Item) -> bool,
{
    type Item = S::Item;

    fn reverse(&self) -> BoxedSequence<'_, Self::Item> {
        BoxedSequence::new(Opaque(Filter::new(
            reverse_unbuffered(&self.source),
            &self.predicate,
        )))
    }
}

impl<S: fmt::Debug, P> fmt::Debug for Filter<S, P> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Filter")
            .field("source", &self.source)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Map
// =============================================================================

/// Yields the upstream elements converted by a function.
///
/// Created by [`LazyIterable::map`](super::LazyIterable::map).
#[derive(Clone)]
pub struct Map<S, F> {
    source: S,
    convert: F,
}

impl<S, F> Map<S, F> {
    pub(crate) const fn new(source: S, convert: F) -> Self {
        Self { source, convert }
    }
}

impl<S, F, R> Sequence for Map<S, F>
where
    S: Sequence,
    F: Fn(S::Item) -> R,
{
    type Item = R;
    type Cursor<'a>
        = iter::Map<S::Cursor<'a>, &'a F>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        self.source.cursor().map(&self.convert)
    }

    fn as_array_like(&self) -> Option<&dyn ArrayLike<Item = Self::Item>> {
        if self.source.as_array_like().is_some() {
            Some(self)
        } else {
            None
        }
    }

    fn as_revertible(&self) -> Option<&dyn Revertible<Item = Self::Item>> {
        if self.source.as_revertible().is_some() {
            Some(self)
        } else {
            None
        }
    }
}

impl<S, F, R> ArrayLike for Map<S, F>
where
    S: Sequence,
    F: Fn(S::Item) -> R,
{
    type Item = R;

    fn length(&self) -> usize {
        self.source
            .as_array_like()
            .map_or_else(|| self.source.cursor().count(), |array| array.length())
    }

    fn element_at(&self, index: usize) -> Option<Self::Item> {
        let element = match self.source.as_array_like() {
            Some(array) => array.element_at(index),
            None => self.source.cursor().nth(index),
        };
        element.map(&self.convert)
    }
}

impl<S, F, R> Revertible for Map<S, F>
where
    S: Sequence,
    F: Fn(S::Item) -> R,
{
    type Item = R;

    fn reverse(&self) -> BoxedSequence<'_, Self::Item> {
        BoxedSequence::new(Opaque(Map::new(
            reverse_unbuffered(&self.source),
            &self.convert,
        )))
    }
}

impl<S: fmt::Debug, F> fmt::Debug for Map<S, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Map")
            .field("source", &self.source)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// FlatMap
// =============================================================================

/// Yields every element of the iterables a function produces for the
/// upstream elements, one after another.
///
/// Created by [`LazyIterable::flat_map`](super::LazyIterable::flat_map).
pub struct FlatMap<S, F, U> {
    source: S,
    convert: F,
    marker: PhantomData<fn() -> U>,
}

impl<S, F, U> FlatMap<S, F, U> {
    pub(crate) const fn new(source: S, convert: F) -> Self {
        Self {
            source,
            convert,
            marker: PhantomData,
        }
    }
}

impl<S, F, U> Sequence for FlatMap<S, F, U>
where
    S: Sequence,
    F: Fn(S::Item) -> U,
    U: IntoIterator,
{
    type Item = U::Item;
    type Cursor<'a>
        = iter::FlatMap<S::Cursor<'a>, U, &'a F>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        self.source.cursor().flat_map(&self.convert)
    }
}

impl<S: Clone, F: Clone, U> Clone for FlatMap<S, F, U> {
    fn clone(&self) -> Self {
        Self::new(self.source.clone(), self.convert.clone())
    }
}

impl<S: fmt::Debug, F, U> fmt::Debug for FlatMap<S, F, U> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("FlatMap")
            .field("source", &self.source)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Reversed stages
// =============================================================================

/// A sequence that forwards cursors and reports no capability.
///
/// A reversed stage borrows the closure of the stage it came from. Probing it
/// for a reverse of its own would nest another borrow on every level, so the
/// reversed stage is sealed behind this wrapper.
struct Opaque<S>(S);

impl<S: Sequence> Sequence for Opaque<S> {
    type Item = S::Item;
    type Cursor<'a>
        = S::Cursor<'a>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        self.0.cursor()
    }
}
