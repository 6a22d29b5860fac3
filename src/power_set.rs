//! The power set enumerator.

use crate::{Enumerator, Hooks, RangeError, Unrank, MAX_MASK_ELEMS};
#[cfg(feature = "threads")]
use rayon::prelude::*;

/// Enumerates every subset of the source, in increasing rank order.
///
/// The cursor is the rank itself: unranking `n` reads its binary representation,
/// including source element `i` exactly when bit `i` is set. Rank `0` is the empty
/// subset and rank `2^L - 1` is the full source.
///
/// # Examples
/// ```
/// # use combinette::{Enumerator, PowerSet, RangeError};
/// # fn main() -> Result<(), RangeError> {
/// let mut subsets = PowerSet::new(&['a', 'b'])?;
/// assert_eq!(subsets.size(), 4);
/// assert_eq!(subsets.collect_all(), [vec![], vec!['a'], vec!['b'], vec!['a', 'b']]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct PowerSet<T> {
    /// The enumerator's private copy of the source.
    pool: Vec<T>,
    /// The rank of the next subset to produce.
    cursor: u128,
    /// `2^L` for a source of length `L`.
    size: u128,
    /// Attached lazy hooks.
    hooks: Hooks<T>,
}

impl<T: Clone> PowerSet<T> {
    /// Creates a [`PowerSet`] over a copy of `source`.
    ///
    /// # Errors
    /// [`RangeError::AboveMaxElems`] if `source` is longer than [`MAX_MASK_ELEMS`].
    pub fn new(source: &[T]) -> Result<Self, RangeError> {
        if source.len() > MAX_MASK_ELEMS {
            return Err(RangeError::AboveMaxElems { len: source.len(), max: MAX_MASK_ELEMS });
        }
        Ok(Self {
            pool: source.to_vec(),
            cursor: 0,
            size: 1u128 << source.len(),
            hooks: Hooks::default(),
        })
    }
}

#[cfg(feature = "threads")]
impl<T: Clone> PowerSet<T> {
    /// Materializes every subset in parallel via the closed-form unranking.
    ///
    /// Lazy hooks are not consulted; this works from the raw arrangements.
    #[must_use]
    pub fn par_collect(&self) -> Vec<Vec<T>>
    where
        T: Send + Sync,
    {
        self.par_map_collect(|subset| subset)
    }

    /// Parallel analog of [`map_collect`](Enumerator::map_collect): materializes
    /// `f` applied to every subset, in rank order.
    ///
    /// Lazy hooks are not consulted; this works from the raw arrangements.
    pub fn par_map_collect<U, F>(&self, f: F) -> Vec<U>
    where
        T: Send + Sync,
        U: Send,
        F: Fn(Vec<T>) -> U + Send + Sync,
    {
        let len = usize::try_from(self.size).unwrap_or(usize::MAX);
        let pool = self.pool.as_slice();
        (0..len)
            .into_par_iter()
            .map(move |n| f(subset_at(pool, n as u128)))
            .collect()
    }
}

impl<T: Clone> Enumerator<T> for PowerSet<T> {
    fn size(&self) -> u128 {
        self.size
    }

    fn reset(&mut self) {
        self.cursor = 0;
    }

    fn raw_step(&mut self) -> Option<Vec<T>> {
        let subset = self.raw_nth(self.cursor)?;
        self.cursor += 1;
        Some(subset)
    }

    fn hooks(&self) -> &Hooks<T> {
        &self.hooks
    }

    fn hooks_mut(&mut self) -> &mut Hooks<T> {
        &mut self.hooks
    }
}

impl<T: Clone> Unrank<T> for PowerSet<T> {
    fn raw_nth(&self, n: u128) -> Option<Vec<T>> {
        if n >= self.size {
            return None;
        }
        Some(subset_at(&self.pool, n))
    }
}

impl<T: Clone> Iterator for PowerSet<T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        self.advance()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, usize::try_from(self.size.saturating_sub(self.cursor)).ok())
    }
}

/// Decodes the subset whose rank is `bits`: element `i` is included iff bit `i` is set.
fn subset_at<T: Clone>(pool: &[T], mut bits: u128) -> Vec<T> {
    let mut subset = Vec::new();
    let mut i = 0usize;
    while bits != 0 {
        if bits & 1 == 1 {
            subset.push(pool[i].clone());
        }
        bits >>= 1;
        i += 1;
    }
    subset
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn contains_empty_and_full_source() {
        let source = ['a', 'b', 'c'];
        let subsets = PowerSet::new(&source).unwrap();
        assert_eq!(subsets.size(), 8);
        assert_eq!(subsets.raw_nth(0), Some(vec![]));
        assert_eq!(subsets.raw_nth(7), Some(vec!['a', 'b', 'c']));
        assert_eq!(subsets.raw_nth(8), None);
    }

    #[test]
    fn rank_order() {
        let mut subsets = PowerSet::new(&[1, 2, 3]).unwrap();
        let expected: [&[i32]; 8] =
            [&[], &[1], &[2], &[1, 2], &[3], &[1, 3], &[2, 3], &[1, 2, 3]];
        assert_eq!(subsets.collect_all(), expected);
    }

    #[test]
    fn empty_source_yields_only_the_empty_subset() {
        let mut subsets = PowerSet::new(&[] as &[u8]).unwrap();
        assert_eq!(subsets.size(), 1);
        assert_eq!(subsets.collect_all(), [Vec::<u8>::new()]);
    }

    #[test]
    fn iteration_terminates_and_resets() {
        let mut subsets = PowerSet::new(&[1, 2]).unwrap();
        assert_eq!(subsets.by_ref().count(), 4);
        assert_eq!(subsets.advance(), None);
        subsets.reset();
        assert_eq!(subsets.advance(), Some(vec![]));
    }

    #[test]
    fn nth_applies_the_lazy_transform() {
        let mut subsets = PowerSet::new(&[1, 2, 3]).unwrap().lazy_map(|mut subset| {
            subset.reverse();
            subset
        });
        assert_eq!(subsets.nth_arrangement(3), Some(vec![2, 1]));
        assert_eq!(subsets.raw_nth(3), Some(vec![1, 2]));
        assert_eq!(subsets.nth_arrangement(8), None);
    }

    #[test]
    fn rejects_oversized_sources() {
        let source = vec![0u8; MAX_MASK_ELEMS + 1];
        assert_eq!(
            PowerSet::new(&source).unwrap_err(),
            RangeError::AboveMaxElems { len: MAX_MASK_ELEMS + 1, max: MAX_MASK_ELEMS }
        );
    }

    #[cfg(feature = "threads")]
    #[test]
    fn parallel_matches_sequential() {
        let mut subsets = PowerSet::new(&[1u8, 2, 3, 4]).unwrap();
        assert_eq!(subsets.par_collect(), subsets.collect_all());
        assert_eq!(
            subsets.par_map_collect(|subset| subset.len()),
            subsets.map_collect(|subset| subset.len())
        );
    }
}
