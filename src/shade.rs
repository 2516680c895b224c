//! Deterministic green shade per region name.
//!
//! Exactly one [`ShadeFormula`] is chosen per run. The resulting [`ColorTable`]
//! is the only source of colors for both the rendered map and the exported
//! table, so the two can never disagree.

use crate::models::{ColorTable, Shade};

/// How a region's position in the dataset becomes its green value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShadeFormula {
    /// `round(255 * i / max(N - 1, 1))`: spreads the set over the full 0..=255 range.
    #[default]
    Normalized,
    /// `i mod 256`: the raw position, wrapping for large sets.
    RawIndex,
}

impl ShadeFormula {
    /// Green value for position `i` in a sequence of `n` names.
    pub fn green(self, i: usize, n: usize) -> u8 {
        match self {
            ShadeFormula::Normalized => {
                let denom = n.saturating_sub(1).max(1) as f64;
                (255.0 * i as f64 / denom).round().clamp(0.0, 255.0) as u8
            }
            ShadeFormula::RawIndex => (i % 256) as u8,
        }
    }
}

/// Assign a shade to every name, in input order.
///
/// `N` counts every element, repeats included. A repeated name keeps its
/// first position in the table and takes the shade of its last occurrence.
/// Sets larger than 256 necessarily share green values under either formula;
/// see [`ColorTable::shared_shades`].
pub fn assign<S: AsRef<str>>(names: &[S], formula: ShadeFormula) -> ColorTable {
    let n = names.len();
    names
        .iter()
        .enumerate()
        .map(|(i, name)| (name.as_ref().to_string(), Shade(formula.green(i, n))))
        .collect()
}
