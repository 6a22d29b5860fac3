//! The n-ary Cartesian product enumerator.

use crate::{Enumerator, Hooks, RangeError, Unrank};
#[cfg(feature = "threads")]
use rayon::prelude::*;

/// Enumerates every tuple drawing one element from each factor sequence.
///
/// Linear ranks are decoded least-significant dimension first: the first factor
/// varies fastest. Tuples can also be addressed directly, one index per
/// dimension, via [`get`](Self::get).
///
/// # Examples
/// ```
/// # use combinette::{CartesianProduct, Enumerator, RangeError};
/// # fn main() -> Result<(), RangeError> {
/// let mut tuples = CartesianProduct::new(&[&[1, 2] as &[i32], &[10, 20]])?;
/// assert_eq!(tuples.size(), 4);
/// assert_eq!(tuples.collect_all(), [[1, 10], [2, 10], [1, 20], [2, 20]]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct CartesianProduct<T> {
    /// Private copies of the factor sequences, in dimension order.
    factors: Vec<Vec<T>>,
    /// The rank of the next tuple to produce.
    cursor: u128,
    /// The product of all factor lengths.
    size: u128,
    /// Attached lazy hooks.
    hooks: Hooks<T>,
}

impl<T: Clone> CartesianProduct<T> {
    /// Creates a [`CartesianProduct`] over copies of the given factor sequences.
    ///
    /// # Errors
    /// [`RangeError::EmptyProduct`] for zero factors,
    /// [`RangeError::EmptyFactor`] if any factor has no elements, or
    /// [`RangeError::CountOverflow`] if the product of lengths does not fit a `u128`.
    pub fn new(factors: &[&[T]]) -> Result<Self, RangeError> {
        if factors.is_empty() {
            return Err(RangeError::EmptyProduct);
        }
        let mut size: u128 = 1;
        for (dim, factor) in factors.iter().enumerate() {
            if factor.is_empty() {
                return Err(RangeError::EmptyFactor { dim });
            }
            size = size
                .checked_mul(factor.len() as u128)
                .ok_or(RangeError::CountOverflow)?;
        }
        Ok(Self {
            factors: factors.iter().map(|factor| factor.to_vec()).collect(),
            cursor: 0,
            size,
            hooks: Hooks::default(),
        })
    }

    /// The number of dimensions (factor sequences).
    #[must_use]
    pub fn dimensions(&self) -> usize {
        self.factors.len()
    }

    /// Addresses one tuple directly, taking one index per dimension.
    ///
    /// Returns `None` (the sequence-termination signal) if the number of indices
    /// does not match [`dimensions`](Self::dimensions) or any index is out of
    /// range for its factor; the lazy transform, if any, is applied on success.
    pub fn get(&mut self, indices: &[usize]) -> Option<Vec<T>> {
        if indices.len() != self.factors.len() {
            return None;
        }
        let mut tuple = Vec::with_capacity(indices.len());
        for (factor, &index) in self.factors.iter().zip(indices) {
            tuple.push(factor.get(index)?.clone());
        }
        Some(match self.hooks.map.as_mut() {
            Some(transform) => transform(tuple),
            None => tuple,
        })
    }
}

#[cfg(feature = "threads")]
impl<T: Clone> CartesianProduct<T> {
    /// Materializes every tuple in parallel via the closed-form unranking.
    ///
    /// Lazy hooks are not consulted; this works from the raw arrangements.
    #[must_use]
    pub fn par_collect(&self) -> Vec<Vec<T>>
    where
        T: Send + Sync,
    {
        self.par_map_collect(|tuple| tuple)
    }

    /// Parallel analog of [`map_collect`](Enumerator::map_collect): materializes
    /// `f` applied to every tuple, in rank order.
    ///
    /// Lazy hooks are not consulted; this works from the raw arrangements.
    pub fn par_map_collect<U, F>(&self, f: F) -> Vec<U>
    where
        T: Send + Sync,
        U: Send,
        F: Fn(Vec<T>) -> U + Send + Sync,
    {
        let len = usize::try_from(self.size).unwrap_or(usize::MAX);
        let factors = self.factors.as_slice();
        (0..len)
            .into_par_iter()
            .map(move |n| f(tuple_at(factors, n as u128)))
            .collect()
    }
}

impl<T: Clone> Enumerator<T> for CartesianProduct<T> {
    fn size(&self) -> u128 {
        self.size
    }

    fn reset(&mut self) {
        self.cursor = 0;
    }

    fn raw_step(&mut self) -> Option<Vec<T>> {
        let tuple = self.raw_nth(self.cursor)?;
        self.cursor += 1;
        Some(tuple)
    }

    fn hooks(&self) -> &Hooks<T> {
        &self.hooks
    }

    fn hooks_mut(&mut self) -> &mut Hooks<T> {
        &mut self.hooks
    }
}

impl<T: Clone> Unrank<T> for CartesianProduct<T> {
    fn raw_nth(&self, n: u128) -> Option<Vec<T>> {
        if n >= self.size {
            return None;
        }
        Some(tuple_at(&self.factors, n))
    }
}

impl<T: Clone> Iterator for CartesianProduct<T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        self.advance()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, usize::try_from(self.size.saturating_sub(self.cursor)).ok())
    }
}

/// Decodes rank `n` by repeated divmod over the factor lengths, least-significant
/// dimension first.
fn tuple_at<T: Clone>(factors: &[Vec<T>], mut n: u128) -> Vec<T> {
    let mut tuple = Vec::with_capacity(factors.len());
    for factor in factors {
        let len = factor.len() as u128;
        tuple.push(factor[usize::try_from(n % len).unwrap_or(0)].clone());
        n /= len;
    }
    tuple
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn first_dimension_varies_fastest() {
        let a: &[i32] = &[1, 2];
        let b: &[i32] = &[7, 8];
        let mut tuples = CartesianProduct::new(&[a, b]).unwrap();
        assert_eq!(tuples.size(), 4);
        assert_eq!(tuples.collect_all(), [[1, 7], [2, 7], [1, 8], [2, 8]]);
    }

    #[test]
    fn single_factor_product() {
        let mut tuples = CartesianProduct::new(&[&['x', 'y'] as &[char]]).unwrap();
        assert_eq!(tuples.size(), 2);
        assert_eq!(tuples.collect_all(), [['x'], ['y']]);
    }

    #[test]
    fn get_checks_arity_and_range() {
        let a: &[u8] = &[1, 2];
        let b: &[u8] = &[3, 4, 5];
        let mut tuples = CartesianProduct::new(&[a, b]).unwrap();
        assert_eq!(tuples.get(&[1, 2]), Some(vec![2, 5]));
        assert_eq!(tuples.get(&[0]), None);
        assert_eq!(tuples.get(&[0, 1, 0]), None);
        assert_eq!(tuples.get(&[2, 0]), None);
        assert_eq!(tuples.get(&[0, 3]), None);
    }

    #[test]
    fn unranking_is_bounded() {
        let a: &[u8] = &[1, 2, 3];
        let tuples = CartesianProduct::new(&[a]).unwrap();
        assert_eq!(tuples.raw_nth(2), Some(vec![3]));
        assert_eq!(tuples.raw_nth(3), None);
    }

    #[test]
    fn empty_inputs_are_construction_errors() {
        assert_eq!(
            CartesianProduct::<u8>::new(&[]).unwrap_err(),
            RangeError::EmptyProduct
        );
        let a: &[u8] = &[1];
        let empty: &[u8] = &[];
        assert_eq!(
            CartesianProduct::new(&[a, empty]).unwrap_err(),
            RangeError::EmptyFactor { dim: 1 }
        );
    }

    #[cfg(feature = "threads")]
    #[test]
    fn parallel_matches_sequential() {
        let a: &[u8] = &[1, 2, 3];
        let b: &[u8] = &[4, 5];
        let mut tuples = CartesianProduct::new(&[a, b]).unwrap();
        assert_eq!(tuples.par_collect(), tuples.collect_all());
    }
}
