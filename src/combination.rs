//! Fixed-size combination enumerators: mask-based and arbitrary-length.

use crate::{comb_count, Enumerator, Hooks, RangeError, MAX_MASK_ELEMS};
use bitvec::vec::BitVec;

/// The numerically-next bitmask with the same popcount as `mask`.
///
/// The lowest block of ones is carried into the next zero, then the remainder of
/// the block is packed back at the bottom, producing combinations in increasing
/// numeric (colexicographic) order without recomputation from scratch.
/// `mask` must be nonzero.
pub(crate) fn next_mask(mask: u128) -> u128 {
    let smallest = mask & mask.wrapping_neg();
    let ripple = mask.wrapping_add(smallest);
    let new_smallest = ripple & ripple.wrapping_neg();
    let ones = ((new_smallest / smallest) >> 1) - 1;
    ripple | ones
}

/// The colexicographic rank of a combination bitmask: the number of same-popcount
/// masks numerically below it.
pub(crate) fn rank_mask(mask: u128) -> u128 {
    let mut rank = 0u128;
    let mut j = 0u128;
    let mut bits = mask;
    while bits != 0 {
        let position = u128::from(bits.trailing_zeros());
        j += 1;
        rank += comb_count(position, j).unwrap_or(0);
        bits &= bits - 1;
    }
    rank
}

/// Inverse of [`rank_mask`] for masks of popcount `choose`: places the `j`-th
/// highest bit at the largest position whose binomial weight still fits.
pub(crate) fn unrank_mask(rank: u128, choose: usize) -> u128 {
    let mut mask = 0u128;
    let mut remaining = rank;
    for j in (1..=choose as u128).rev() {
        let mut position = j - 1;
        while comb_count(position + 1, j).is_some_and(|weight| weight <= remaining) {
            position += 1;
        }
        mask |= 1u128 << position;
        remaining -= comb_count(position, j).unwrap_or(0);
    }
    mask
}

/// Enumerates every `choose`-element subset of the source, in increasing numeric
/// order of the selection bitmask (colexicographic on element indices).
///
/// The cursor is a `u128` bitmask with exactly `choose` bits set, advanced by the
/// minimal-change bit trick; sources are therefore limited to [`MAX_MASK_ELEMS`]
/// elements. Use [`BigCombination`](crate::BigCombination) for longer sources.
///
/// # Examples
/// ```
/// # use combinette::{Combination, Enumerator, RangeError};
/// # fn main() -> Result<(), RangeError> {
/// let mut pairs = Combination::new(&['a', 'b', 'c'], 2)?;
/// assert_eq!(pairs.size(), 3);
/// assert_eq!(pairs.collect_all(), [['a', 'b'], ['a', 'c'], ['b', 'c']]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Combination<T> {
    /// The enumerator's private copy of the source.
    pool: Vec<T>,
    /// The number of elements chosen per combination.
    choose: usize,
    /// The current selection bitmask.
    cursor: u128,
    /// The lowest valid mask, `2^choose - 1`.
    first: u128,
    /// Masks at or beyond `2^L` terminate the enumeration.
    limit: u128,
    /// `C(L, choose)`.
    size: u128,
    /// Attached lazy hooks.
    hooks: Hooks<T>,
}

impl<T: Clone> Combination<T> {
    /// Creates a [`Combination`] over a copy of `source`, drawing `choose` elements.
    ///
    /// # Errors
    /// [`RangeError::AboveMaxElems`] if `source` is longer than [`MAX_MASK_ELEMS`],
    /// or [`RangeError::ChooseCountOutOfRange`] unless `1 <= choose <= source.len()`.
    pub fn new(source: &[T], choose: usize) -> Result<Self, RangeError> {
        if source.len() > MAX_MASK_ELEMS {
            return Err(RangeError::AboveMaxElems { len: source.len(), max: MAX_MASK_ELEMS });
        }
        if choose < 1 || choose > source.len() {
            return Err(RangeError::ChooseCountOutOfRange { count: choose, len: source.len() });
        }
        Ok(Self::new_unchecked(source.to_vec(), choose))
    }

    /// Creates a [`Combination`] whose parameters are already known to be valid.
    pub(crate) fn new_unchecked(pool: Vec<T>, choose: usize) -> Self {
        let first = (1u128 << choose) - 1;
        let size = comb_count(pool.len() as u128, choose as u128).unwrap_or(0);
        let limit = 1u128 << pool.len();
        Self { pool, choose, cursor: first, first, limit, size, hooks: Hooks::default() }
    }

    /// The number of elements chosen per combination.
    #[must_use]
    pub fn choose(&self) -> usize {
        self.choose
    }
}

impl<T: Clone> Enumerator<T> for Combination<T> {
    fn size(&self) -> u128 {
        self.size
    }

    fn reset(&mut self) {
        self.cursor = self.first;
    }

    fn raw_step(&mut self) -> Option<Vec<T>> {
        if self.cursor >= self.limit {
            return None;
        }
        let mut combination = Vec::with_capacity(self.choose);
        let mut bits = self.cursor;
        let mut i = 0usize;
        while bits != 0 {
            if bits & 1 == 1 {
                combination.push(self.pool[i].clone());
            }
            bits >>= 1;
            i += 1;
        }
        self.cursor = next_mask(self.cursor);
        Some(combination)
    }

    fn hooks(&self) -> &Hooks<T> {
        &self.hooks
    }

    fn hooks_mut(&mut self) -> &mut Hooks<T> {
        &mut self.hooks
    }
}

impl<T: Clone> Iterator for Combination<T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        self.advance()
    }
}

/// Enumerates every `choose`-element subset of a source of any length, in the same
/// order as [`Combination`].
///
/// The cursor is an explicit array of selection flags rather than a machine
/// integer, removing the [`MAX_MASK_ELEMS`] limit at the cost of `O(L)` work per
/// step. The flag array starts at `choose` flags and grows by one each time the
/// selection window overflows.
#[derive(Debug)]
pub struct BigCombination<T> {
    /// The enumerator's private copy of the source.
    pool: Vec<T>,
    /// The number of elements chosen per combination.
    choose: usize,
    /// Selection flags; flag `i` selects source element `i`. Enumeration ends once
    /// the array grows past the source length.
    flags: BitVec,
    /// `C(L, choose)`.
    size: u128,
    /// Attached lazy hooks.
    hooks: Hooks<T>,
}

impl<T: Clone> BigCombination<T> {
    /// Creates a [`BigCombination`] over a copy of `source`, drawing `choose` elements.
    ///
    /// # Errors
    /// [`RangeError::ChooseCountOutOfRange`] unless `1 <= choose <= source.len()`,
    /// or [`RangeError::CountOverflow`] if `C(L, choose)` does not fit a `u128`.
    pub fn new(source: &[T], choose: usize) -> Result<Self, RangeError> {
        if choose < 1 || choose > source.len() {
            return Err(RangeError::ChooseCountOutOfRange { count: choose, len: source.len() });
        }
        let size = comb_count(source.len() as u128, choose as u128)
            .ok_or(RangeError::CountOverflow)?;
        Ok(Self {
            pool: source.to_vec(),
            choose,
            flags: BitVec::repeat(true, choose),
            size,
            hooks: Hooks::default(),
        })
    }

    /// The number of elements chosen per combination.
    #[must_use]
    pub fn choose(&self) -> usize {
        self.choose
    }
}

impl<T: Clone> Enumerator<T> for BigCombination<T> {
    fn size(&self) -> u128 {
        self.size
    }

    fn reset(&mut self) {
        self.flags = BitVec::repeat(true, self.choose);
    }

    fn raw_step(&mut self) -> Option<Vec<T>> {
        if self.flags.len() > self.pool.len() {
            return None;
        }
        let mut combination = Vec::with_capacity(self.choose);
        for i in self.flags.iter_ones() {
            combination.push(self.pool[i].clone());
        }
        advance_flags(&mut self.flags, self.choose);
        Some(combination)
    }

    fn hooks(&self) -> &Hooks<T> {
        &self.hooks
    }

    fn hooks_mut(&mut self) -> &mut Hooks<T> {
        &mut self.hooks
    }
}

impl<T: Clone> Iterator for BigCombination<T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        self.advance()
    }
}

/// The arbitrary-length analog of [`next_mask`], stepping the flag array in place.
///
/// If all `choose` selected flags sit at the top of the array, the selection
/// window has overflowed: a new flag is appended and the lowest `choose - 1`
/// positions are refilled. Otherwise the lowest zero above a one is flipped up
/// (ripple carry) and the flags below it are repacked so the selection keeps
/// exactly `choose` ones.
fn advance_flags(flags: &mut BitVec, choose: usize) {
    let mut deficit = choose;
    for i in (0..flags.len()).rev() {
        if flags[i] {
            deficit -= 1;
        } else {
            break;
        }
    }

    if deficit == 0 {
        flags.push(true);
        let len = flags.len();
        for i in 0..len - 1 {
            flags.set(i, i < choose - 1);
        }
        return;
    }

    let mut last_one: Option<usize> = None;
    for i in 0..flags.len() {
        if !flags[i] {
            if let Some(one) = last_one {
                flags.set(i, true);
                flags.set(one, false);
                let mut lead = choose;
                for j in (one..flags.len()).rev() {
                    if flags[j] {
                        lead -= 1;
                    }
                }
                for j in 0..one {
                    flags.set(j, j < lead);
                }
                return;
            }
        } else {
            last_one = Some(i);
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::tests::*;

    #[test]
    fn mask_order_for_four_choose_two() {
        let mut pairs = Combination::new(&['a', 'b', 'c', 'd'], 2).unwrap();
        assert_eq!(pairs.size(), 6);
        assert_eq!(
            pairs.collect_all(),
            [['a', 'b'], ['a', 'c'], ['b', 'c'], ['a', 'd'], ['b', 'd'], ['c', 'd']]
        );
    }

    #[test]
    fn covers_every_subset_exactly_once() {
        for len in 1..=8usize {
            let source = letters(len);
            for choose in 1..=len {
                let mut combinations = Combination::new(&source, choose).unwrap();
                let produced = combinations.collect_all();
                assert_eq!(produced.len() as u128, combinations.size());
                assert_distinct(&produced);
                for combination in &produced {
                    assert_eq!(combination.len(), choose);
                    assert!(combination.iter().all(|element| source.contains(element)));
                }
                assert_eq!(sorted(produced), sorted(naive_combinations(&source, choose)));
            }
        }
    }

    #[test]
    fn choose_count_must_be_in_range() {
        let source = ['a', 'b', 'c'];
        assert_eq!(
            Combination::new(&source, 0).unwrap_err(),
            RangeError::ChooseCountOutOfRange { count: 0, len: 3 }
        );
        assert_eq!(
            Combination::new(&source, 4).unwrap_err(),
            RangeError::ChooseCountOutOfRange { count: 4, len: 3 }
        );
        assert_eq!(
            BigCombination::new(&source, 0).unwrap_err(),
            RangeError::ChooseCountOutOfRange { count: 0, len: 3 }
        );
        assert_eq!(
            BigCombination::new(&source, 4).unwrap_err(),
            RangeError::ChooseCountOutOfRange { count: 4, len: 3 }
        );
    }

    #[test]
    fn big_combination_agrees_with_mask_stepping() {
        for len in 1..=8usize {
            let source: Vec<usize> = (0..len).collect();
            for choose in 1..=len {
                let mut mask = Combination::new(&source, choose).unwrap();
                let mut big = BigCombination::new(&source, choose).unwrap();
                assert_eq!(mask.size(), big.size());
                assert_eq!(mask.collect_all(), big.collect_all(), "L = {len}, k = {choose}");
            }
        }
    }

    #[test]
    fn big_combination_handles_sources_beyond_the_mask_limit() {
        let source: Vec<u32> = (0..130).collect();
        assert!(Combination::new(&source, 129).is_err());

        let mut big = BigCombination::new(&source, 129).unwrap();
        assert_eq!(big.size(), 130);
        let produced = big.collect_all();
        assert_eq!(produced.len(), 130);
        assert_distinct(&produced);
        assert!(produced.iter().all(|combination| combination.len() == 129));
    }

    #[test]
    fn big_combination_count_overflow_is_a_construction_error() {
        let source = vec![0u8; 1000];
        assert_eq!(
            BigCombination::new(&source, 500).unwrap_err(),
            RangeError::CountOverflow
        );
    }

    #[test]
    fn colex_rank_round_trips() {
        for len in 1..=7usize {
            for choose in 1..=len {
                let limit = 1u128 << len;
                let mut mask = (1u128 << choose) - 1;
                let mut rank = 0u128;
                while mask < limit {
                    assert_eq!(rank_mask(mask), rank, "mask {mask:b}");
                    assert_eq!(unrank_mask(rank, choose), mask, "rank {rank}");
                    mask = next_mask(mask);
                    rank += 1;
                }
                assert_eq!(rank, comb_count(len as u128, choose as u128).unwrap());
            }
        }
    }
}
