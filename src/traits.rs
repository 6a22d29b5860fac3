//! The shared enumerator protocol and its lazy hook configuration.

use std::fmt::{Debug, Formatter};

/// The lazy transform applied to every produced arrangement.
pub(crate) type MapHook<T> = Box<dyn FnMut(Vec<T>) -> Vec<T>>;

/// The lazy predicate deciding whether a produced arrangement is yielded or skipped.
pub(crate) type FilterHook<T> = Box<dyn FnMut(&[T]) -> bool>;

/// The optional lazy hooks attached to an enumerator after construction.
///
/// Rather than swapping a live object's iteration method, hooks are held as plain
/// configuration and consulted by the single [`Enumerator::advance`] implementation:
/// the raw result is transformed first, then offered to the filter. Neither hook
/// affects [`Enumerator::size`].
pub struct Hooks<T> {
    /// Transform applied to every raw arrangement before it is returned.
    pub(crate) map: Option<MapHook<T>>,
    /// Predicate deciding whether a (transformed) arrangement is yielded.
    pub(crate) filter: Option<FilterHook<T>>,
}

impl<T> Default for Hooks<T> {
    fn default() -> Self {
        Self { map: None, filter: None }
    }
}

impl<T> Debug for Hooks<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Hooks")
            .field("map", &self.map.is_some())
            .field("filter", &self.filter.is_some())
            .finish()
    }
}

/// A stateful, restartable, lazy sequence of arrangements over an immutable source.
///
/// Implementors provide the closed-form [`size`](Self::size), the cursor
/// [`reset`](Self::reset), and the undecorated [`raw_step`](Self::raw_step);
/// everything else is layered on top. Every produced arrangement is a fresh
/// allocation, never an alias into enumerator state.
///
/// All enumerators also implement [`Iterator`] by delegating to
/// [`advance`](Self::advance), so `for` loops and iterator adapters work directly.
/// Unlike iterator draining, the eager methods ([`collect_all`](Self::collect_all),
/// [`map_collect`](Self::map_collect), [`for_each_arrangement`](Self::for_each_arrangement),
/// [`filter_collect`](Self::filter_collect)) reset the cursor both before and after
/// the drain, leaving the enumerator reusable.
pub trait Enumerator<T> {
    /// The total number of arrangements this enumerator yields over one full pass,
    /// computed by closed-form counting at construction. Lazy hooks do not change it.
    fn size(&self) -> u128;

    /// Resets the cursor to its start value. Idempotent; never changes
    /// [`size`](Self::size) or the source.
    fn reset(&mut self);

    /// Advances the cursor and produces the next raw arrangement, ignoring any
    /// attached hooks. `None` signals the end of the sequence.
    fn raw_step(&mut self) -> Option<Vec<T>>;

    /// The attached lazy hooks.
    fn hooks(&self) -> &Hooks<T>;

    /// Mutable access to the attached lazy hooks.
    fn hooks_mut(&mut self) -> &mut Hooks<T>;

    /// Produces the next arrangement with hooks applied: the raw result is passed
    /// through the lazy transform, then results rejected by the lazy filter are
    /// silently skipped until a match or exhaustion.
    fn advance(&mut self) -> Option<Vec<T>> {
        loop {
            let arrangement = self.raw_step()?;
            let hooks = self.hooks_mut();
            let arrangement = match hooks.map.as_mut() {
                Some(transform) => transform(arrangement),
                None => arrangement,
            };
            let keep = match hooks.filter.as_mut() {
                Some(keep) => keep(&arrangement),
                None => true,
            };
            if keep {
                return Some(arrangement);
            }
        }
    }

    /// Materializes every arrangement into a `Vec`, resetting the cursor before and
    /// after the drain. Calling it twice yields identical results.
    fn collect_all(&mut self) -> Vec<Vec<T>> {
        self.reset();
        let mut out = Vec::new();
        while let Some(arrangement) = self.advance() {
            out.push(arrangement);
        }
        self.reset();
        out
    }

    /// Like [`collect_all`](Self::collect_all), transforming each arrangement
    /// through `f` as it is collected.
    fn map_collect<U, F>(&mut self, mut f: F) -> Vec<U>
    where
        F: FnMut(Vec<T>) -> U,
    {
        self.reset();
        let mut out = Vec::new();
        while let Some(arrangement) = self.advance() {
            out.push(f(arrangement));
        }
        self.reset();
        out
    }

    /// Calls `f` on every arrangement without collecting, resetting the cursor
    /// before and after the drain.
    fn for_each_arrangement<F>(&mut self, mut f: F)
    where
        F: FnMut(Vec<T>),
    {
        self.reset();
        while let Some(arrangement) = self.advance() {
            f(arrangement);
        }
        self.reset();
    }

    /// Drains the enumerator, keeping only the arrangements matching `keep`.
    fn filter_collect<F>(&mut self, mut keep: F) -> Vec<Vec<T>>
    where
        F: FnMut(&[T]) -> bool,
    {
        self.reset();
        let mut out = Vec::new();
        while let Some(arrangement) = self.advance() {
            if keep(&arrangement) {
                out.push(arrangement);
            }
        }
        self.reset();
        out
    }

    /// Attaches a transform applied to every future raw arrangement before it is
    /// returned. Does not affect [`size`](Self::size).
    #[must_use]
    fn lazy_map<F>(mut self, transform: F) -> Self
    where
        Self: Sized,
        F: FnMut(Vec<T>) -> Vec<T> + 'static,
    {
        self.hooks_mut().map = Some(Box::new(transform));
        self
    }

    /// Attaches a predicate so that non-matching arrangements are silently skipped,
    /// looping until a match or exhaustion. Remove it again with
    /// [`clear_lazy_filter`](Self::clear_lazy_filter).
    #[must_use]
    fn lazy_filter<F>(mut self, keep: F) -> Self
    where
        Self: Sized,
        F: FnMut(&[T]) -> bool + 'static,
    {
        self.hooks_mut().filter = Some(Box::new(keep));
        self
    }

    /// Removes the lazy filter, restoring unfiltered stepping.
    fn clear_lazy_filter(&mut self) {
        self.hooks_mut().filter = None;
    }
}

/// Random access for enumerators whose iteration order is a direct integer ranking.
pub trait Unrank<T>: Enumerator<T> {
    /// Unranks `n` into its arrangement without touching the cursor or hooks.
    /// `None` for `n` at or beyond [`size`](Enumerator::size).
    fn raw_nth(&self, n: u128) -> Option<Vec<T>>;

    /// Unranks `n` with the lazy transform applied (the lazy filter is not
    /// consulted; filtering is a property of sequential stepping).
    fn nth_arrangement(&mut self, n: u128) -> Option<Vec<T>> {
        let arrangement = self.raw_nth(n)?;
        Some(match self.hooks_mut().map.as_mut() {
            Some(transform) => transform(arrangement),
            None => arrangement,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use crate::{Combination, Enumerator, PowerSet};

    #[test]
    fn collect_all_is_idempotent() {
        let mut subsets = PowerSet::new(&[1, 2, 3]).unwrap();
        let first = subsets.collect_all();
        assert_eq!(subsets.collect_all(), first);
        assert_eq!(first.len(), 8);
    }

    #[test]
    fn lazy_map_transforms_without_changing_size() {
        let mut pairs = Combination::new(&[1, 2, 3, 4], 2)
            .unwrap()
            .lazy_map(|mut pair| {
                pair.reverse();
                pair
            });
        assert_eq!(pairs.size(), 6);
        assert_eq!(pairs.advance(), Some(vec![2, 1]));
        assert_eq!(pairs.advance(), Some(vec![3, 1]));
    }

    #[test]
    fn lazy_filter_skips_and_clears() {
        let mut subsets =
            PowerSet::new(&[1, 2, 3]).unwrap().lazy_filter(|subset| subset.len() == 2);
        assert_eq!(subsets.size(), 8);
        assert_eq!(subsets.collect_all(), [[1, 2], [1, 3], [2, 3]]);

        subsets.clear_lazy_filter();
        assert_eq!(subsets.collect_all().len(), 8);
    }

    #[test]
    fn eager_drains_honor_lazy_hooks() {
        let mut pairs = Combination::new(&['a', 'b', 'c'], 2)
            .unwrap()
            .lazy_filter(|pair| pair.contains(&'a'));
        assert_eq!(pairs.collect_all(), [['a', 'b'], ['a', 'c']]);
        assert_eq!(pairs.map_collect(|pair| pair.len()), [2, 2]);
        assert_eq!(pairs.filter_collect(|pair| pair.contains(&'b')), [['a', 'b']]);
    }

    #[test]
    fn stateful_lazy_map_is_permitted() {
        let mut seen = 0u32;
        let mut subsets = PowerSet::new(&[1, 2]).unwrap().lazy_map(move |subset| {
            seen += 1;
            subset
        });
        assert_eq!(subsets.collect_all().len(), 4);
    }
}
