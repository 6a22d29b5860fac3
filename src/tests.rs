//! Shared helpers for the crate's test modules: small sources, naive reference
//! enumerations, and distinctness assertions.

use std::collections::HashSet;
use std::hash::Hash;

/// The first `len` lowercase letters, for readable test sources.
pub(crate) fn letters(len: usize) -> Vec<char> {
    ('a'..='z').take(len).collect()
}

/// Asserts that no two produced arrangements are equal.
pub(crate) fn assert_distinct<T: Clone + Eq + Hash>(arrangements: &[Vec<T>]) {
    let unique: HashSet<Vec<T>> = arrangements.iter().cloned().collect();
    assert_eq!(unique.len(), arrangements.len(), "duplicate arrangements produced");
}

/// Sorts a produced list so order-insensitive comparisons can use `assert_eq!`.
pub(crate) fn sorted<T: Ord>(mut arrangements: Vec<Vec<T>>) -> Vec<Vec<T>> {
    arrangements.sort();
    arrangements
}

/// Reference implementation: every `choose`-element subset of `pool`, by simple
/// recursion over index order.
pub(crate) fn naive_combinations<T: Clone>(pool: &[T], choose: usize) -> Vec<Vec<T>> {
    let mut out = Vec::new();
    let mut prefix = Vec::with_capacity(choose);
    combine_from(pool, 0, choose, &mut prefix, &mut out);
    out
}

/// Recursive worker for [`naive_combinations`].
fn combine_from<T: Clone>(
    pool: &[T],
    start: usize,
    remaining: usize,
    prefix: &mut Vec<T>,
    out: &mut Vec<Vec<T>>,
) {
    if remaining == 0 {
        out.push(prefix.clone());
        return;
    }
    for i in start..pool.len() {
        prefix.push(pool[i].clone());
        combine_from(pool, i + 1, remaining - 1, prefix, out);
        prefix.pop();
    }
}

/// Reference implementation: every ordered selection of `choose` distinct
/// elements from `pool`, by simple recursion.
pub(crate) fn naive_permutations<T: Clone>(pool: &[T], choose: usize) -> Vec<Vec<T>> {
    let mut out = Vec::new();
    let mut prefix = Vec::with_capacity(choose);
    let mut used = vec![false; pool.len()];
    arrange_from(pool, choose, &mut used, &mut prefix, &mut out);
    out
}

/// Recursive worker for [`naive_permutations`].
fn arrange_from<T: Clone>(
    pool: &[T],
    remaining: usize,
    used: &mut Vec<bool>,
    prefix: &mut Vec<T>,
    out: &mut Vec<Vec<T>>,
) {
    if remaining == 0 {
        out.push(prefix.clone());
        return;
    }
    for i in 0..pool.len() {
        if used[i] {
            continue;
        }
        used[i] = true;
        prefix.push(pool[i].clone());
        arrange_from(pool, remaining - 1, used, prefix, out);
        prefix.pop();
        used[i] = false;
    }
}

mod reference_checks {
    use super::*;
    use crate::comb_count;

    #[test]
    fn naive_combinations_have_the_closed_form_count() {
        for len in 0..=6usize {
            let pool = letters(len);
            for choose in 0..=len {
                let combinations = naive_combinations(&pool, choose);
                assert_eq!(
                    combinations.len() as u128,
                    comb_count(len as u128, choose as u128).unwrap_or(0)
                );
                assert_distinct(&combinations);
            }
        }
    }

    #[test]
    fn naive_permutations_order_selections() {
        let pairs = naive_permutations(&['a', 'b', 'c'], 2);
        assert_eq!(
            pairs,
            [['a', 'b'], ['a', 'c'], ['b', 'a'], ['b', 'c'], ['c', 'a'], ['c', 'b']]
        );
    }
}
