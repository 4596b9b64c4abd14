//! Unit tests for LazyIterable.
//!
//! These tests cover the chainable operators, the wrapping rules and the
//! re-iteration behaviour of lazy iterables.

use aiterable::lazy::{LazyIterable, is_lazy_iterable, wrap};
use aiterable::sequence::{Sequence, generate, single_use};
use rstest::rstest;
use std::cell::{Cell, RefCell};

// =============================================================================
// Scenario: filter
// =============================================================================

#[rstest]
fn test_filter_keeps_even_numbers() {
    let evens = wrap(vec![1, 2, 3, 4]).filter(|n| n % 2 == 0);
    assert_eq!(evens.iter().collect::<Vec<_>>(), vec![2, 4]);
}

#[rstest]
fn test_filter_of_empty_source_is_empty() {
    let evens = wrap(Vec::<i32>::new()).filter(|n| n % 2 == 0);
    assert!(evens.is_empty());
}

#[rstest]
#[case(vec![], vec![])]
#[case(vec![1, 3, 5], vec![])]
#[case(vec![2, 4], vec![2, 4])]
#[case(vec![5, 6, 7, 8, 9], vec![6, 8])]
fn test_filter_cases(#[case] input: Vec<i32>, #[case] expected: Vec<i32>) {
    let filtered = wrap(input).filter(|n| n % 2 == 0);
    assert_eq!(filtered.iter().collect::<Vec<_>>(), expected);
}

// =============================================================================
// Scenario: map
// =============================================================================

#[rstest]
fn test_map_doubles_elements() {
    let doubled = wrap(vec![1, 2, 3]).map(|n| n * 2);
    assert_eq!(doubled.iter().collect::<Vec<_>>(), vec![2, 4, 6]);
}

#[rstest]
fn test_map_can_change_element_type() {
    let lengths = wrap(vec!["one", "three"]).map(str::len);
    assert_eq!(lengths.iter().collect::<Vec<_>>(), vec![3, 5]);
}

// =============================================================================
// Scenario: flat_map
// =============================================================================

#[rstest]
fn test_flat_map_concatenates_in_source_order() {
    let flattened = wrap(vec![1, 2]).flat_map(|n| vec![n, n * 10]);
    assert_eq!(flattened.iter().collect::<Vec<_>>(), vec![1, 10, 2, 20]);
}

#[rstest]
fn test_flat_map_with_all_inner_empty_is_empty() {
    let flattened = wrap(vec![1, 2, 3]).flat_map(|_| Vec::<i32>::new());
    assert!(flattened.is_empty());
}

#[rstest]
fn test_flat_map_skips_empty_inner_sequences() {
    let flattened = wrap(vec![0_usize, 2, 0, 1]).flat_map(|n| std::iter::repeat_n(n, n));
    assert_eq!(flattened.iter().collect::<Vec<_>>(), vec![2, 2, 1]);
}

// =============================================================================
// Scenario: reduce / for_each
// =============================================================================

#[rstest]
fn test_reduce_sums_elements() {
    assert_eq!(wrap(vec![1, 2, 3]).reduce(|sum, n| sum + n, 0), 6);
}

#[rstest]
fn test_reduce_of_empty_returns_initial() {
    assert_eq!(wrap(Vec::<i32>::new()).reduce(|sum, n| sum + n, 0), 0);
}

#[rstest]
fn test_reduce_is_left_to_right() {
    let joined = wrap(vec!["a", "b", "c"]).reduce(|accumulator, letter| accumulator + letter, String::new());
    assert_eq!(joined, "abc");
}

#[rstest]
fn test_for_each_then_drive_again() {
    let visited = RefCell::new(Vec::new());
    let lazy = wrap(vec![1, 2, 3]).map(|n| n * n);

    lazy.for_each(|n| visited.borrow_mut().push(n));
    lazy.for_each(|n| visited.borrow_mut().push(n));

    assert_eq!(*visited.borrow(), vec![1, 4, 9, 1, 4, 9]);
}

#[rstest]
fn test_single_use_root_second_drive_is_empty() {
    let lazy = wrap(single_use(vec![1, 2, 3].into_iter())).map(|n| n + 1);

    assert_eq!(lazy.reduce(|sum, n| sum + n, 0), 9);
    assert_eq!(lazy.reduce(|sum, n| sum + n, 0), 0);
}

// =============================================================================
// Laziness
// =============================================================================

#[rstest]
fn test_chain_construction_pulls_nothing() {
    let converted = Cell::new(0);
    let lazy = wrap(vec![1, 2, 3])
        .map(|n| {
            converted.set(converted.get() + 1);
            n
        })
        .filter(|n| *n > 0)
        .flat_map(|n| [n]);

    assert_eq!(converted.get(), 0);
    assert_eq!(lazy.first(), Some(1));
    assert_eq!(converted.get(), 1);
}

#[rstest]
fn test_long_chain_is_a_single_pass() {
    let factory_calls = Cell::new(0);
    let source = generate(|| {
        factory_calls.set(factory_calls.get() + 1);
        1..=100
    });

    let mut lazy = wrap(source).boxed();
    for _ in 0..50 {
        lazy = lazy.map(|n| n + 1).boxed();
    }

    assert_eq!(factory_calls.get(), 0);
    assert_eq!(lazy.first(), Some(51));
    assert_eq!(factory_calls.get(), 1);
}

// =============================================================================
// Wrapping
// =============================================================================

#[rstest]
fn test_wrap_returns_lazy_iterable_unchanged() {
    let original = wrap(vec![3, 2, 1]).filter(|n| *n != 2);
    let wrapped = wrap(original.clone());

    assert!(is_lazy_iterable(&wrapped));
    assert_eq!(
        wrapped.iter().collect::<Vec<_>>(),
        original.iter().collect::<Vec<_>>()
    );
}

#[rstest]
fn test_plain_sources_are_not_lazy_iterables() {
    let numbers = vec![1];
    let words = ["a"];

    assert!(!is_lazy_iterable(&numbers));
    assert!(!is_lazy_iterable(&words));
    assert!(!is_lazy_iterable(&(0..3_u8)));
    assert!(!is_lazy_iterable(&generate(|| 0..1)));
}

#[rstest]
fn test_new_wraps_without_stages() {
    let lazy = LazyIterable::new(0..4_usize);
    assert_eq!(lazy.cursor().collect::<Vec<_>>(), vec![0, 1, 2, 3]);
    assert_eq!(lazy.into_inner(), 0..4);
}

#[rstest]
fn test_for_loop_over_reference() {
    let lazy = wrap(vec![1, 2, 3]).map(|n| n * 3);

    let mut total = 0;
    for n in &lazy {
        total += n;
    }
    for n in &lazy {
        total += n;
    }

    assert_eq!(total, 36);
}

// =============================================================================
// Errors
// =============================================================================

#[derive(Debug, PartialEq, Eq)]
struct Rejected(i32);

#[rstest]
fn test_try_for_each_returns_first_error() {
    let lazy = wrap(vec![1, -2, 3, -4]);
    let mut accepted = Vec::new();

    let result = lazy.try_for_each(|n| {
        if n < 0 {
            return Err(Rejected(n));
        }
        accepted.push(n);
        Ok(())
    });

    assert_eq!(result, Err(Rejected(-2)));
    assert_eq!(accepted, vec![1]);
}

#[rstest]
fn test_try_reduce_without_error_matches_reduce() {
    let lazy = wrap(vec![1, 2, 3, 4]);
    let fallible: Result<i32, Rejected> = lazy.try_reduce(|sum, n| Ok(sum + n), 0);
    assert_eq!(fallible, Ok(lazy.reduce(|sum, n| sum + n, 0)));
}

#[rstest]
#[should_panic(expected = "converter exploded")]
fn test_panic_in_converter_propagates_to_reduce() {
    let lazy = wrap(vec![1, 2, 3]).map(|n| {
        assert!(n != 3, "converter exploded");
        n
    });
    let _ = lazy.reduce(|sum, n| sum + n, 0);
}

// =============================================================================
// Stage capabilities through the public API
// =============================================================================

#[rstest]
fn test_filter_last_uses_reversal() {
    let lazy = wrap(vec![1, 2, 3]).filter(|n| *n > 1);
    assert_eq!(lazy.last(), Some(3));
    assert_eq!(lazy.reverse().cursor().collect::<Vec<_>>(), vec![3, 2]);
}

#[rstest]
fn test_filter_last_with_no_match_is_none() {
    let lazy = wrap(vec![1, 2, 3]).filter(|n| *n > 10);
    assert_eq!(lazy.last(), None);
}

#[rstest]
fn test_map_boxed_keeps_elements_and_capabilities() {
    let boxed = wrap(vec![1, 2, 3]).map(|n| n * 2).boxed();

    assert!(boxed.as_array_like().is_some());
    assert_eq!(boxed.iter().collect::<Vec<_>>(), vec![2, 4, 6]);
    assert_eq!(boxed.last(), Some(6));
}

#[rstest]
fn test_nested_stages_reverse() {
    let lazy = wrap(vec![1, 2, 3, 4, 5, 6])
        .filter(|n| n % 2 == 0)
        .map(|n| n * 10)
        .filter(|n| *n > 20);

    assert_eq!(lazy.last(), Some(60));
    assert_eq!(lazy.reverse().cursor().collect::<Vec<_>>(), vec![60, 40]);
    assert_eq!(lazy.boxed().first(), Some(40));
}
