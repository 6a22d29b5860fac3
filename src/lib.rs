//! A library for lazy, resumable enumeration of combinatorial arrangements.
//!
//! `combinette` implements bijections between integers and combinatorial objects
//! (factoradic decoding, bit-trick combination stepping, mixed-radix unranking)
//! so that permutations, combinations, power sets, Cartesian products, and base-N
//! tuples can be enumerated without ever materializing the full combinatorial space.
//!
//! # Features
//! To reduce dependencies and compile times, `combinette` has a couple of `cargo` features
//! that can be turned off or on:
//! - `palette`: exposes the [`PaletteArrangements`] builder for enumerating color palette
//!   arrangements via the [`palette`] crate.
//! - `threads`: exposes parallel materialization of the directly-indexable enumerators
//!   via [`rayon`].
//!
//! # Enumerators
//! Every enumerator is created from a borrowed source slice (copied at construction),
//! knows its total [`size`](Enumerator::size) up front from closed-form counting,
//! and can be drained lazily through [`Iterator`] or eagerly through
//! [`collect_all`](Enumerator::collect_all) and friends:
//! ```
//! # use combinette::{Enumerator, Permutation, RangeError};
//! # fn main() -> Result<(), RangeError> {
//! let colors = ["cyan", "magenta", "yellow"];
//!
//! // Every ordered pair of distinct colors.
//! let mut pairs = Permutation::new(&colors, 2)?;
//! assert_eq!(pairs.size(), 6);
//!
//! let all = pairs.collect_all();
//! assert_eq!(all.len(), 6);
//! assert_eq!(all[0], ["cyan", "magenta"]);
//!
//! // Draining resets the cursor, so the enumerator is immediately reusable.
//! assert_eq!(pairs.collect_all(), all);
//! # Ok(())
//! # }
//! ```
//!
//! Enumerators whose order is a direct integer ranking ([`PowerSet`], [`BaseN`],
//! [`CartesianProduct`]) additionally support random access through [`Unrank`].

#![deny(unsafe_code, unsafe_op_in_unsafe_fn)]
#![warn(
    clippy::pedantic,
    clippy::cargo,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::todo,
    clippy::unimplemented,
    clippy::unwrap_used,
    clippy::unwrap_in_result,
    clippy::expect_used,
    clippy::unneeded_field_pattern,
    clippy::rest_pat_in_fully_bound_structs,
    clippy::unnecessary_self_imports,
    clippy::str_to_string,
    clippy::string_to_string,
    clippy::string_slice,
    missing_docs,
    clippy::missing_docs_in_private_items,
    rustdoc::all
)]
#![allow(
    clippy::doc_markdown,
    clippy::module_name_repetitions,
    clippy::many_single_char_names,
    clippy::missing_panics_doc,
    clippy::unreadable_literal,
    clippy::wildcard_imports
)]

mod arith;
mod base_n;
mod cartesian;
mod combination;
mod permutation;
mod power_set;
mod traits;
mod types;

#[cfg(feature = "palette")]
mod palettes;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
pub(crate) mod tests;

pub use arith::*;
pub use base_n::*;
pub use cartesian::*;
pub use combination::*;
pub use permutation::*;
pub use power_set::*;
pub use traits::*;
pub use types::*;

#[cfg(feature = "palette")]
pub use palettes::*;

/// The maximum number of source elements supported by the mask-based enumerators
/// ([`PowerSet`], [`Combination`], [`Permutation`], [`PermutationCombination`]) is `127`,
/// since their cursors are `u128` bit patterns.
///
/// [`BigCombination`] has no such limit.
pub const MAX_MASK_ELEMS: usize = 127;
