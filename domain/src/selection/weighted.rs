//! Weighted and uniform picks from static tables.

use rand::Rng;
use rand::seq::SliceRandom;

/// A static table of values with relative weights
pub type WeightedTable<T> = &'static [(T, u32)];

/// Draw one value with probability proportional to its weight.
///
/// Draws uniformly in `0..total` and walks the table subtracting each
/// weight until the draw lands inside an entry. Zero-weight entries are
/// never selected. Returns `None` for an empty table or one whose weights
/// sum to zero.
pub fn pick_weighted<'a, T, R>(rng: &mut R, table: &'a [(T, u32)]) -> Option<&'a T>
where
    R: Rng + ?Sized,
{
    let total: u64 = table.iter().map(|(_, w)| u64::from(*w)).sum();
    if total == 0 {
        return None;
    }

    let mut draw = rng.gen_range(0..total);
    for (value, weight) in table {
        let weight = u64::from(*weight);
        if draw < weight {
            return Some(value);
        }
        draw -= weight;
    }

    // Unreachable: draw < total == sum of weights
    None
}

/// Uniformly choose one entry, or `fallback` when the table is empty.
pub fn choose_or<R>(rng: &mut R, table: &[&'static str], fallback: &'static str) -> &'static str
where
    R: Rng + ?Sized,
{
    table.choose(rng).copied().unwrap_or(fallback)
}
