//! The base-N tuple enumerator.

use crate::{Enumerator, Hooks, RangeError, Unrank};
#[cfg(feature = "threads")]
use rayon::prelude::*;

/// Enumerates every fixed-length tuple over an alphabet, repeats allowed.
///
/// Rank `n` is decoded by repeated divmod by the alphabet length, least
/// significant digit first, so the first tuple position varies fastest. An empty
/// alphabet gives size `0` and an immediately-exhausted enumerator.
///
/// # Examples
/// ```
/// # use combinette::{BaseN, Enumerator, RangeError};
/// # fn main() -> Result<(), RangeError> {
/// let mut tuples = BaseN::new(&['a', 'b'], 2)?;
/// assert_eq!(tuples.size(), 4);
/// assert_eq!(
///     tuples.collect_all(),
///     [['a', 'a'], ['b', 'a'], ['a', 'b'], ['b', 'b']]
/// );
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct BaseN<T> {
    /// The enumerator's private copy of the alphabet.
    pool: Vec<T>,
    /// The number of symbols per tuple.
    length: usize,
    /// The rank of the next tuple to produce.
    cursor: u128,
    /// `base^length`.
    size: u128,
    /// Attached lazy hooks.
    hooks: Hooks<T>,
}

impl<T: Clone> BaseN<T> {
    /// Creates a [`BaseN`] over a copy of `source`, producing tuples of `length`
    /// symbols.
    ///
    /// # Errors
    /// [`RangeError::ZeroTupleLength`] if `length` is zero, or
    /// [`RangeError::CountOverflow`] if `base^length` does not fit a `u128`.
    pub fn new(source: &[T], length: usize) -> Result<Self, RangeError> {
        if length < 1 {
            return Err(RangeError::ZeroTupleLength);
        }
        let exponent = u32::try_from(length).map_err(|_| RangeError::CountOverflow)?;
        let size = (source.len() as u128)
            .checked_pow(exponent)
            .ok_or(RangeError::CountOverflow)?;
        Ok(Self {
            pool: source.to_vec(),
            length,
            cursor: 0,
            size,
            hooks: Hooks::default(),
        })
    }

    /// The number of symbols per tuple.
    #[must_use]
    pub fn length(&self) -> usize {
        self.length
    }
}

#[cfg(feature = "threads")]
impl<T: Clone> BaseN<T> {
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
        let pool = self.pool.as_slice();
        let length = self.length;
        (0..len)
            .into_par_iter()
            .map(move |n| f(tuple_at(pool, length, n as u128)))
            .collect()
    }
}

impl<T: Clone> Enumerator<T> for BaseN<T> {
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

impl<T: Clone> Unrank<T> for BaseN<T> {
    fn raw_nth(&self, n: u128) -> Option<Vec<T>> {
        if n >= self.size {
            return None;
        }
        Some(tuple_at(&self.pool, self.length, n))
    }
}

impl<T: Clone> Iterator for BaseN<T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        self.advance()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, usize::try_from(self.size.saturating_sub(self.cursor)).ok())
    }
}

/// Decodes rank `n` into `length` alphabet symbols, least-significant digit first.
fn tuple_at<T: Clone>(pool: &[T], length: usize, mut n: u128) -> Vec<T> {
    let base = pool.len() as u128;
    let mut tuple = Vec::with_capacity(length);
    for _ in 0..length {
        tuple.push(pool[usize::try_from(n % base).unwrap_or(0)].clone());
        n /= base;
    }
    tuple
}
