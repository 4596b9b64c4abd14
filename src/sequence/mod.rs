//! The sequence protocol and its optional capabilities.
//!
//! This module provides the contracts every source of elements honors:
//!
//! - [`Sequence`]: a re-iterable source that hands out independent cursors
//! - [`ArrayLike`]: a sequence with a known length and 0-based lookup
//! - [`Revertible`]: a sequence that can describe its own reverse
//!
//! Capabilities are discovered by *probing* rather than by type identity. A
//! `Sequence` answers [`Sequence::as_array_like`],
//! [`Sequence::as_revertible`] and [`Sequence::is_lazy_iterable`] at run time;
//! whatever shape a value reports is the shape it is treated as having.
//!
//! # Sources
//!
//! Implementations are provided for slices, arrays, `Vec`, boxed slices and
//! integer ranges, for `std::collections` types behind the `collections`
//! feature, and for `SmallVec` / `ArrayVec` behind their features. Arbitrary
//! producers can be adapted with [`generate`], [`generate_bidirectional`] and
//! [`single_use`].
//!
//! # Examples
//!
//! ```rust
//! use aiterable::sequence::Sequence;
//!
//! let numbers = vec![1, 2, 3];
//!
//! // Two cursors, fully independent of each other.
//! let mut first = numbers.cursor();
//! let mut second = numbers.cursor();
//! assert_eq!(first.next(), Some(1));
//! assert_eq!(first.next(), Some(2));
//! assert_eq!(second.next(), Some(1));
//!
//! assert!(numbers.as_array_like().is_some());
//! assert!(numbers.as_revertible().is_none());
//! ```

mod boxed;
mod capability;
mod generated;
mod sources;

pub use boxed::{BoxedSequence, DynSequence};
pub use capability::{ArrayLike, Revertible};
pub use generated::{
    Bidirectional, Generated, SingleUse, generate, generate_bidirectional, single_use,
};

/// A re-iterable source of elements.
///
/// Calling [`cursor`](Sequence::cursor) any number of times yields
/// independent cursors; draining one never affects another, nor the sequence
/// itself. Cursors borrow the sequence immutably, so no consumer can change
/// the elements underneath a running iteration.
///
/// Cursors returned by implementations in this crate are fused: once a cursor
/// yields `None` it keeps yielding `None`. Custom implementations should keep
/// that promise, e.g. by returning [`std::iter::Fuse`].
///
/// # Capability Probes
///
/// The provided probe methods report "no capability". A source with a cheaper
/// structure overrides them:
///
/// - [`as_array_like`](Sequence::as_array_like) for indexable storage
/// - [`as_revertible`](Sequence::as_revertible) for sources that can walk
///   themselves backwards
/// - [`is_lazy_iterable`](Sequence::is_lazy_iterable) for values that already
///   carry the lazy operators
///
/// # Examples
///
/// ```rust
/// use aiterable::sequence::{ArrayLike, Sequence};
///
/// struct Countdown(u32);
///
/// impl Sequence for Countdown {
///     type Item = u32;
///     type Cursor<'a> = std::iter::Rev<std::ops::Range<u32>>;
///
///     fn cursor(&self) -> Self::Cursor<'_> {
///         (0..self.0).rev()
///     }
/// }
///
/// let countdown = Countdown(3);
/// assert_eq!(countdown.cursor().collect::<Vec<_>>(), vec![2, 1, 0]);
/// assert!(countdown.as_array_like().is_none());
/// ```
pub trait Sequence {
    /// The type of the elements.
    type Item;

    /// The cursor handed out by [`cursor`](Sequence::cursor).
    type Cursor<'a>: Iterator<Item = Self::Item> + 'a
    where
        Self: 'a;

    /// Produces a fresh cursor positioned before the first element.
    fn cursor(&self) -> Self::Cursor<'_>;

    /// Probes for the array-like capability.
    ///
    /// Returns a view with `length()` and indexed lookup when the elements live in
    /// addressable storage.
    fn as_array_like(&self) -> Option<&dyn ArrayLike<Item = Self::Item>> {
        None
    }

    /// Probes for the revertible capability.
    ///
    /// Returns a view whose [`reverse`](Revertible::reverse) yields the
    /// elements back-to-front without copying them first.
    fn as_revertible(&self) -> Option<&dyn Revertible<Item = Self::Item>> {
        None
    }

    /// Probes whether this value already exposes the lazy operators
    /// (`filter`, `map`, `flat_map`, `for_each`, `reduce`).
    fn is_lazy_iterable(&self) -> bool {
        false
    }
}
