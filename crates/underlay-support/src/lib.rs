//! # Underlay Support
//!
//! Generic numeric and sequence helpers consumed by the rest of the
//! toolkit. Nothing here carries design weight beyond its signature:
//! well-known algorithms, stated once, tested against their laws.

use std::cmp::Ordering;

/// `n!`, with `factorial(0) == factorial(1) == 1`.
///
/// Overflows above `20!` like any u64 product; callers stay in range.
pub fn factorial(n: u64) -> u64 {
    (2..=n).product()
}

/// Greatest common divisor by Euclidean recursion, `gcd(a, 0) == a`.
pub fn gcd(a: u64, b: u64) -> u64 {
    if b == 0 { a } else { gcd(b, a % b) }
}

/// The smaller of the two.
pub fn min(a: i64, b: i64) -> i64 {
    if b < a { b } else { a }
}

/// Stable in-place insertion sort.
pub fn insertion_sort<T: Ord>(items: &mut [T]) {
    insertion_sort_by(items, T::cmp);
}

/// Stable in-place insertion sort under a caller-supplied ordering.
///
/// Stability holds because an element shifts left only past strictly
/// greater neighbors.
pub fn insertion_sort_by<T>(items: &mut [T], compare: impl Fn(&T, &T) -> Ordering) {
    for i in 1..items.len() {
        let mut j = i;
        while j > 0 && compare(&items[j - 1], &items[j]) == Ordering::Greater {
            items.swap(j - 1, j);
            j -= 1;
        }
    }
}

/// Collect a sequence into a list, preserving "no value".
///
/// An absent sequence yields `None`; an empty-but-present sequence
/// yields an empty (but present) list.
pub fn sequence_to_list<I: IntoIterator>(sequence: Option<I>) -> Option<Vec<I::Item>> {
    sequence.map(|seq| seq.into_iter().collect())
}
