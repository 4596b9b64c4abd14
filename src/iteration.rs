//! Consumer utilities built on the sequence protocol.
//!
//! Each function pulls as little as the source's capabilities allow:
//! emptiness and the first element need one pull, the last element uses
//! indexing or the source's own reverse before falling back to a full scan.
//! An empty source is never an error; it yields `None` or `true`.

pub use crate::reverse::reverse_array;
use crate::sequence::Sequence;

/// Checks whether `sequence` has no elements.
///
/// # Examples
///
/// ```rust
/// use aiterable::iteration::its_empty;
///
/// assert!(its_empty(&Vec::<i32>::new()));
/// assert!(!its_empty(&vec![1]));
/// ```
pub fn its_empty<S>(sequence: &S) -> bool
where
    S: Sequence + ?Sized,
{
    sequence.cursor().next().is_none()
}

/// Returns the first element of `sequence`, or `None` if it is empty.
///
/// # Examples
///
/// ```rust
/// use aiterable::iteration::its_first;
/// use aiterable::sequence::generate;
///
/// assert_eq!(its_first(&generate(|| "abc".chars())), Some('a'));
/// assert_eq!(its_first(&Vec::<char>::new()), None);
/// ```
pub fn its_first<S>(sequence: &S) -> Option<S::Item>
where
    S: Sequence + ?Sized,
{
    sequence.cursor().next()
}

/// Returns the last element of `sequence`, or `None` if it is empty.
///
/// - An array-like sequence is indexed at `length() - 1`.
/// - A revertible sequence yields the first element of its reverse.
/// - Anything else is scanned to the end, keeping the last element seen.
///
/// # Examples
///
/// ```rust
/// use std::collections::LinkedList;
/// use aiterable::iteration::its_last;
/// use aiterable::sequence::generate;
///
/// let list: LinkedList<i32> = (1..=3).collect();
///
/// assert_eq!(its_last(&vec![1, 2, 3]), Some(3));
/// assert_eq!(its_last(&list), Some(3));
/// assert_eq!(its_last(&generate(|| 1..=3)), Some(3));
/// assert_eq!(its_last(&Vec::<i32>::new()), None);
/// ```
pub fn its_last<S>(sequence: &S) -> Option<S::Item>
where
    S: Sequence + ?Sized,
{
    if let Some(array) = sequence.as_array_like() {
        let last = array.length().checked_sub(1)?;
        return array.element_at(last);
    }

    if let Some(revertible) = sequence.as_revertible() {
        return its_first(&revertible.reverse());
    }

    sequence.cursor().last()
}
