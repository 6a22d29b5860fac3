//! Permutation enumerators: fixed choose-count and the all-sizes composite.

use crate::{
    arith::factorial_saturating, factoradic, perm_count, Combination, Enumerator, Hooks,
    RangeError, MAX_MASK_ELEMS,
};

/// Iterates every ordering of one concrete combination by factoradic rank.
///
/// Rank `i` is decoded into a Lehmer code via [`factoradic`]; each digit selects
/// the next element among those remaining in a scratch copy, most significant
/// digit first. Rank `0` is the combination in its original order.
#[derive(Debug)]
struct PermuteOne<T> {
    /// The combination being permuted, in its produced order.
    items: Vec<T>,
    /// The rank of the next ordering to produce.
    index: u128,
    /// `items.len()!` — in range whenever the owning enumerator constructed.
    size: u128,
}

impl<T: Clone> PermuteOne<T> {
    /// Wraps one combination for permuting.
    fn new(items: Vec<T>) -> Self {
        let size = factorial_saturating(items.len() as u128);
        Self { items, index: 0, size }
    }

    /// Decodes the next ordering, or `None` once all `k!` have been produced.
    fn next_ordering(&mut self) -> Option<Vec<T>> {
        if self.index >= self.size {
            return None;
        }
        let digits = factoradic(self.index, self.items.len());
        let mut scratch = self.items.clone();
        let mut ordering = Vec::with_capacity(scratch.len());
        for i in (0..self.items.len()).rev() {
            ordering.push(scratch.remove(digits[i]));
        }
        self.index += 1;
        Some(ordering)
    }
}

/// Enumerates every ordered selection of `choose` distinct elements from the source.
///
/// Composes a [`Combination`] sub-enumerator with a per-combination permuter:
/// all `choose!` orderings of a combination are exhausted before the next
/// combination is pulled, so the overall order is "by selection code", not plain
/// lexicographic on the elements.
///
/// # Examples
/// ```
/// # use combinette::{Enumerator, Permutation, RangeError};
/// # fn main() -> Result<(), RangeError> {
/// let mut pairs = Permutation::new(&['a', 'b', 'c'], 2)?;
/// assert_eq!(pairs.size(), 6);
/// assert_eq!(
///     pairs.collect_all(),
///     [['a', 'b'], ['b', 'a'], ['a', 'c'], ['c', 'a'], ['b', 'c'], ['c', 'b']]
/// );
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Permutation<T> {
    /// Supplies each distinct `choose`-element selection.
    combinations: Combination<T>,
    /// Orderings of the most recently pulled combination; `None` once exhausted.
    current: Option<PermuteOne<T>>,
    /// `P(L, choose)`.
    size: u128,
    /// Attached lazy hooks.
    hooks: Hooks<T>,
}

impl<T: Clone> Permutation<T> {
    /// Creates a [`Permutation`] over a copy of `source`, drawing `choose` elements.
    ///
    /// # Errors
    /// [`RangeError::AboveMaxElems`] if `source` is longer than [`MAX_MASK_ELEMS`],
    /// [`RangeError::ChooseCountOutOfRange`] unless `1 <= choose <= source.len()`,
    /// or [`RangeError::CountOverflow`] if `P(L, choose)` does not fit a `u128`.
    pub fn new(source: &[T], choose: usize) -> Result<Self, RangeError> {
        let combinations = Combination::new(source, choose)?;
        let size = perm_count(source.len() as u128, choose as u128)
            .ok_or(RangeError::CountOverflow)?;
        let mut permutation =
            Self { combinations, current: None, size, hooks: Hooks::default() };
        permutation.reset();
        Ok(permutation)
    }

    /// The number of elements drawn per permutation.
    #[must_use]
    pub fn choose(&self) -> usize {
        self.combinations.choose()
    }
}

impl<T: Clone> Enumerator<T> for Permutation<T> {
    fn size(&self) -> u128 {
        self.size
    }

    fn reset(&mut self) {
        self.combinations.reset();
        self.current = self.combinations.raw_step().map(PermuteOne::new);
    }

    fn raw_step(&mut self) -> Option<Vec<T>> {
        loop {
            let current = self.current.as_mut()?;
            if let Some(ordering) = current.next_ordering() {
                return Some(ordering);
            }
            self.current = self.combinations.raw_step().map(PermuteOne::new);
        }
    }

    fn hooks(&self) -> &Hooks<T> {
        &self.hooks
    }

    fn hooks_mut(&mut self) -> &mut Hooks<T> {
        &mut self.hooks
    }
}

impl<T: Clone> Iterator for Permutation<T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        self.advance()
    }
}

/// Enumerates, across every choose-count `k = 1..=L`, every ordered selection of
/// every `k`-element subset: the concatenation of [`Permutation`] output for each
/// `k` in increasing order.
///
/// The state machine holds the current `k`, the combination enumerator at `k`, and
/// the permuter of the current combination. Exhausting the permuter pulls the next
/// combination; exhausting the combinations advances `k` and rebuilds both.
///
/// # Examples
/// ```
/// # use combinette::{Enumerator, PermutationCombination, RangeError};
/// # fn main() -> Result<(), RangeError> {
/// let mut arrangements = PermutationCombination::new(&['a', 'b'])?;
/// assert_eq!(arrangements.size(), 4);
/// assert_eq!(
///     arrangements.collect_all(),
///     [vec!['a'], vec!['b'], vec!['a', 'b'], vec!['b', 'a']]
/// );
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct PermutationCombination<T> {
    /// The enumerator's private copy of the source.
    pool: Vec<T>,
    /// The current choose-count `k`.
    choose: usize,
    /// Supplies each distinct `choose`-element selection at the current `k`.
    combinations: Combination<T>,
    /// Orderings of the most recently pulled combination; `None` once everything
    /// through `k = L` is exhausted.
    current: Option<PermuteOne<T>>,
    /// `sum over k of P(L, k)`.
    size: u128,
    /// Attached lazy hooks.
    hooks: Hooks<T>,
}

impl<T: Clone> PermutationCombination<T> {
    /// Creates a [`PermutationCombination`] over a copy of `source`.
    ///
    /// # Errors
    /// [`RangeError::EmptySource`] for an empty source,
    /// [`RangeError::AboveMaxElems`] if `source` is longer than [`MAX_MASK_ELEMS`],
    /// or [`RangeError::CountOverflow`] if the total count does not fit a `u128`
    /// (which it cannot once the source exceeds 33 elements).
    pub fn new(source: &[T]) -> Result<Self, RangeError> {
        if source.is_empty() {
            return Err(RangeError::EmptySource);
        }
        if source.len() > MAX_MASK_ELEMS {
            return Err(RangeError::AboveMaxElems { len: source.len(), max: MAX_MASK_ELEMS });
        }
        let len = source.len() as u128;
        let mut size: u128 = 0;
        let mut k = 1u128;
        while k <= len {
            let arrangements = perm_count(len, k).ok_or(RangeError::CountOverflow)?;
            size = size.checked_add(arrangements).ok_or(RangeError::CountOverflow)?;
            k += 1;
        }
        Ok(Self::with_size(source.to_vec(), size))
    }

    /// Creates a [`PermutationCombination`] whose source is already known to be
    /// non-empty and within counting range.
    pub(crate) fn new_unchecked(pool: Vec<T>) -> Self {
        let len = pool.len() as u128;
        let mut size: u128 = 0;
        let mut k = 1u128;
        while k <= len {
            size = size.saturating_add(perm_count(len, k).unwrap_or(u128::MAX));
            k += 1;
        }
        Self::with_size(pool, size)
    }

    /// Builds the initial state machine around a precomputed total.
    fn with_size(pool: Vec<T>, size: u128) -> Self {
        let mut enumerator = Self {
            combinations: Combination::new_unchecked(pool.clone(), 1),
            pool,
            choose: 1,
            current: None,
            size,
            hooks: Hooks::default(),
        };
        enumerator.reset();
        enumerator
    }
}

impl<T: Clone> Enumerator<T> for PermutationCombination<T> {
    fn size(&self) -> u128 {
        self.size
    }

    fn reset(&mut self) {
        self.choose = 1;
        self.combinations = Combination::new_unchecked(self.pool.clone(), 1);
        self.current = self.combinations.raw_step().map(PermuteOne::new);
    }

    fn raw_step(&mut self) -> Option<Vec<T>> {
        loop {
            let current = self.current.as_mut()?;
            if let Some(ordering) = current.next_ordering() {
                return Some(ordering);
            }
            match self.combinations.raw_step() {
                Some(combination) => self.current = Some(PermuteOne::new(combination)),
                None => {
                    self.choose += 1;
                    if self.choose > self.pool.len() {
                        self.current = None;
                        return None;
                    }
                    self.combinations =
                        Combination::new_unchecked(self.pool.clone(), self.choose);
                    self.current = self.combinations.raw_step().map(PermuteOne::new);
                }
            }
        }
    }

    fn hooks(&self) -> &Hooks<T> {
        &self.hooks
    }

    fn hooks_mut(&mut self) -> &mut Hooks<T> {
        &mut self.hooks
    }
}

impl<T: Clone> Iterator for PermutationCombination<T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        self.advance()
    }
}
