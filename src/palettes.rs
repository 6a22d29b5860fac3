//! Color palette arrangement helpers, integrating with the [`palette`] crate.
//!
//! A rendering layer that shows one image variant per ordered color arrangement
//! asks one question of this crate: "give me every ordered arrangement of `k`
//! colors drawn from my palette, for all valid `k`". [`PaletteArrangements`] is
//! that question as a typed entry point.

use crate::{perm_count, Permutation, PermutationCombination, RangeError};
use palette::Srgb;

/// The maximum supported palette length is `33`: the largest source for which the
/// total arrangement count `sum over k of P(L, k)` still fits a `u128`.
pub const MAX_PALETTE_LEN: usize = 33;

/// A fixed set of palette colors whose ordered arrangements are to be enumerated.
///
/// The color type defaults to [`Srgb<u8>`] but any cloneable color works.
///
/// # Examples
/// ```
/// # use combinette::{Enumerator, PaletteArrangements, RangeError};
/// # use palette::Srgb;
/// # fn main() -> Result<(), RangeError> {
/// let colors = [
///     Srgb::new(255u8, 0, 0),
///     Srgb::new(0, 255, 0),
///     Srgb::new(0, 0, 255),
/// ];
/// let arrangements = PaletteArrangements::new(&colors)?;
///
/// // One rendered variant per arrangement: 3 singles, 6 pairs, 6 triples.
/// assert_eq!(arrangements.total(), 15);
/// assert_eq!(arrangements.all().count(), 15);
///
/// // Or only the arrangements using exactly two colors.
/// assert_eq!(arrangements.of_len(2)?.size(), 6);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct PaletteArrangements<C = Srgb<u8>> {
    /// The palette, in user-chosen order.
    colors: Vec<C>,
}

impl<C: Clone> PaletteArrangements<C> {
    /// Creates a [`PaletteArrangements`] over a copy of `colors`.
    ///
    /// # Errors
    /// [`RangeError::EmptySource`] for an empty palette, or
    /// [`RangeError::AboveMaxElems`] for one longer than [`MAX_PALETTE_LEN`].
    pub fn new(colors: &[C]) -> Result<Self, RangeError> {
        if colors.is_empty() {
            return Err(RangeError::EmptySource);
        }
        if colors.len() > MAX_PALETTE_LEN {
            return Err(RangeError::AboveMaxElems { len: colors.len(), max: MAX_PALETTE_LEN });
        }
        Ok(Self { colors: colors.to_vec() })
    }

    /// The palette colors, in their original order.
    #[must_use]
    pub fn colors(&self) -> &[C] {
        &self.colors
    }

    /// The number of colors in the palette.
    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always `false`; empty palettes are rejected at construction.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Every ordered arrangement of exactly `count` distinct palette colors.
    ///
    /// # Errors
    /// [`RangeError::ChooseCountOutOfRange`] unless `1 <= count <= len`.
    pub fn of_len(&self, count: usize) -> Result<Permutation<C>, RangeError> {
        Permutation::new(&self.colors, count)
    }

    /// Every ordered arrangement of every subset of the palette, for all sizes
    /// `1..=len`, in increasing size order.
    #[must_use]
    pub fn all(&self) -> PermutationCombination<C> {
        PermutationCombination::new_unchecked(self.colors.clone())
    }

    /// The total number of arrangements [`all`](Self::all) yields.
    #[must_use]
    pub fn total(&self) -> u128 {
        let len = self.colors.len() as u128;
        let mut total: u128 = 0;
        let mut k = 1u128;
        while k <= len {
            total = total.saturating_add(perm_count(len, k).unwrap_or(u128::MAX));
            k += 1;
        }
        total
    }
}
