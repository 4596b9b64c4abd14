//! `Sequence` implementations for standard and third-party containers.
//!
//! Owned containers yield clones of their elements; borrowed ones yield
//! references. Every slice-backed container is array-like. Linked lists and
//! ordered sets are revertible: they walk themselves from the back.

use std::iter::Cloned;
use std::ops::Range;
use std::slice;

use super::{ArrayLike, Sequence};

// =============================================================================
// Slice-backed containers
// =============================================================================

macro_rules! owned_slice_sequence {
    ([$($generics:tt)*] $source:ty, $element:ty) => {
        impl<$($generics)*> Sequence for $source
        where
            $element: Clone,
        {
            type Item = $element;
            type Cursor<'a>
                = Cloned<slice::Iter<'a, $element>>
            where
                Self: 'a;

            fn cursor(&self) -> Self::Cursor<'_> {
                self[..].iter().cloned()
            }

            fn as_array_like(&self) -> Option<&dyn ArrayLike<Item = Self::Item>> {
                Some(self)
            }
        }

        impl<$($generics)*> ArrayLike for $source
        where
            $element: Clone,
        {
            type Item = $element;

            fn length(&self) -> usize {
                self[..].len()
            }

            fn element_at(&self, index: usize) -> Option<Self::Item> {
                self[..].get(index).cloned()
            }
        }
    };
}

macro_rules! borrowed_slice_sequence {
    ([$($generics:tt)*] $source:ty) => {
        impl<'s, $($generics)*> Sequence for &'s $source {
            type Item = &'s T;
            type Cursor<'a>
                = slice::Iter<'s, T>
            where
                Self: 'a;

            fn cursor(&self) -> Self::Cursor<'_> {
                let elements: &'s [T] = *self;
                elements.iter()
            }

            fn as_array_like(&self) -> Option<&dyn ArrayLike<Item = Self::Item>> {
                Some(self)
            }
        }

        impl<'s, $($generics)*> ArrayLike for &'s $source {
            type Item = &'s T;

            fn length(&self) -> usize {
                let elements: &'s [T] = *self;
                elements.len()
            }

            fn element_at(&self, index: usize) -> Option<Self::Item> {
                let elements: &'s [T] = *self;
                elements.get(index)
            }
        }
    };
}

owned_slice_sequence!([T] Vec<T>, T);
owned_slice_sequence!([T] Box<[T]>, T);
owned_slice_sequence!([T, const N: usize] [T; N], T);

borrowed_slice_sequence!([T] [T]);
borrowed_slice_sequence!([T] Vec<T>);
borrowed_slice_sequence!([T] Box<[T]>);
borrowed_slice_sequence!([T, const N: usize] [T; N]);

#[cfg(feature = "smallvec")]
owned_slice_sequence!([A: smallvec::Array] smallvec::SmallVec<A>, A::Item);

#[cfg(feature = "arrayvec")]
owned_slice_sequence!([T, const CAP: usize] arrayvec::ArrayVec<T, CAP>, T);

// =============================================================================
// Integer ranges
// =============================================================================

macro_rules! range_sequence {
    ($($integer:ty),+ $(,)?) => {
        $(
            impl Sequence for Range<$integer> {
                type Item = $integer;
                type Cursor<'a> = Self;

                fn cursor(&self) -> Self::Cursor<'_> {
                    self.clone()
                }

                fn as_array_like(&self) -> Option<&dyn ArrayLike<Item = Self::Item>> {
                    Some(self)
                }
            }

            impl ArrayLike for Range<$integer> {
                type Item = $integer;

                fn length(&self) -> usize {
                    if self.start >= self.end {
                        0
                    } else {
                        usize::try_from(self.end.abs_diff(self.start)).unwrap_or(usize::MAX)
                    }
                }

                fn element_at(&self, index: usize) -> Option<Self::Item> {
                    if index >= self.length() {
                        return None;
                    }
                    let start = i128::try_from(self.start).ok()?;
                    let offset = i128::try_from(index).ok()?;
                    <$integer>::try_from(start + offset).ok()
                }
            }
        )+
    };
}

range_sequence!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

// =============================================================================
// std::collections
// =============================================================================

#[cfg(feature = "collections")]
mod collections {
    use std::collections::{BTreeSet, LinkedList, VecDeque, btree_set, linked_list, vec_deque};
    use std::iter::Cloned;

    use crate::sequence::{ArrayLike, BoxedSequence, Revertible, Sequence, generate};

    impl<T: Clone> Sequence for VecDeque<T> {
        type Item = T;
        type Cursor<'a>
            = Cloned<vec_deque::Iter<'a, T>>
        where
            Self: 'a;

        fn cursor(&self) -> Self::Cursor<'_> {
            self.iter().cloned()
        }

        fn as_array_like(&self) -> Option<&dyn ArrayLike<Item = Self::Item>> {
            Some(self)
        }
    }

    impl<T: Clone> ArrayLike for VecDeque<T> {
        type Item = T;

        fn length(&self) -> usize {
            self.len()
        }

        fn element_at(&self, index: usize) -> Option<Self::Item> {
            self.get(index).cloned()
        }
    }

    impl<'s, T> Sequence for &'s VecDeque<T> {
        type Item = &'s T;
        type Cursor<'a>
            = vec_deque::Iter<'s, T>
        where
            Self: 'a;

        fn cursor(&self) -> Self::Cursor<'_> {
            let deque: &'s VecDeque<T> = *self;
            deque.iter()
        }

        fn as_array_like(&self) -> Option<&dyn ArrayLike<Item = Self::Item>> {
            Some(self)
        }
    }

    impl<'s, T> ArrayLike for &'s VecDeque<T> {
        type Item = &'s T;

        fn length(&self) -> usize {
            self.len()
        }

        fn element_at(&self, index: usize) -> Option<Self::Item> {
            let deque: &'s VecDeque<T> = *self;
            deque.get(index)
        }
    }

    macro_rules! double_ended_collection {
        ($collection:ident, $module:ident $(, $bound:path)?) => {
            impl<T: Clone $(+ $bound)?> Sequence for $collection<T> {
                type Item = T;
                type Cursor<'a>
                    = Cloned<$module::Iter<'a, T>>
                where
                    Self: 'a;

                fn cursor(&self) -> Self::Cursor<'_> {
                    self.iter().cloned()
                }

                fn as_revertible(&self) -> Option<&dyn Revertible<Item = Self::Item>> {
                    Some(self)
                }
            }

            impl<T: Clone $(+ $bound)?> Revertible for $collection<T> {
                type Item = T;

                fn reverse(&self) -> BoxedSequence<'_, Self::Item> {
                    BoxedSequence::new(generate(move || self.iter().rev().cloned()))
                }
            }

            impl<'s, T $(: $bound)?> Sequence for &'s $collection<T> {
                type Item = &'s T;
                type Cursor<'a>
                    = $module::Iter<'s, T>
                where
                    Self: 'a;

                fn cursor(&self) -> Self::Cursor<'_> {
                    let collection: &'s $collection<T> = *self;
                    collection.iter()
                }

                fn as_revertible(&self) -> Option<&dyn Revertible<Item = Self::Item>> {
                    Some(self)
                }
            }

            impl<'s, T $(: $bound)?> Revertible for &'s $collection<T> {
                type Item = &'s T;

                fn reverse(&self) -> BoxedSequence<'_, Self::Item> {
                    let collection: &'s $collection<T> = *self;
                    BoxedSequence::new(generate(move || collection.iter().rev()))
                }
            }
        };
    }

    double_ended_collection!(LinkedList, linked_list);
    double_ended_collection!(BTreeSet, btree_set, Ord);
}
