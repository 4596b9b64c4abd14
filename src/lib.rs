//! # aiterable
//!
//! Re-iterable lazy sequences with chainable operators and cost-aware
//! reversal.
//!
//! ## Overview
//!
//! The standard library's [`Iterator`] is a single-use cursor. This library
//! works one level up, with *sequences*: values that can hand out any number of
//! independent cursors over their elements. On top of that it provides:
//!
//! - **Sequence protocol**: [`Sequence`](sequence::Sequence) and the optional
//!   [`ArrayLike`](sequence::ArrayLike) and
//!   [`Revertible`](sequence::Revertible) capabilities, probed at run time
//! - **Lazy iterables**: [`LazyIterable`](lazy::LazyIterable) with `filter`,
//!   `map`, `flat_map`, `for_each` and `reduce`, where every non-terminal
//!   operator only records a stage
//! - **Reversal dispatch**: [`reverse_it`](reverse::reverse_it) picks the
//!   cheapest way to walk a sequence back-to-front
//! - **Consumer utilities**: [`its_empty`](iteration::its_empty),
//!   [`its_first`](iteration::its_first), [`its_last`](iteration::its_last)
//!
//! ## Feature Flags
//!
//! - `collections` (default): sources for `std::collections` types
//! - `smallvec`: `SmallVec` as an array-like source
//! - `arrayvec`: `ArrayVec` as an array-like source
//! - `tracing`: emit a trace event for every reversal strategy decision
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use aiterable::prelude::*;
//!
//! let numbers = vec![1, 2, 3, 4, 5, 6];
//!
//! let evens = wrap(&numbers).filter(|n| *n % 2 == 0).map(|n| n * 10);
//! assert_eq!(evens.iter().collect::<Vec<_>>(), vec![20, 40, 60]);
//!
//! // Driving the chain again yields the same elements.
//! assert_eq!(evens.reduce(|sum, n| sum + n, 0), 120);
//!
//! // Array-like sources are reversed by index, without a buffer.
//! let backwards = reverse_it(&numbers);
//! assert_eq!(backwards.strategy(), ReverseStrategy::Indexed);
//! assert_eq!(its_first(&backwards), Some(6));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types, traits and functions.
///
/// # Usage
///
/// ```rust
/// use aiterable::prelude::*;
/// ```
pub mod prelude {
    pub use crate::iteration::*;
    pub use crate::lazy::*;
    pub use crate::reverse::*;
    pub use crate::sequence::*;
}

pub mod iteration;
pub mod lazy;
pub mod reverse;
pub mod sequence;
