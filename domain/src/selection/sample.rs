//! Sample `k` of `n` items in random order.

use rand::Rng;
use rand::seq::SliceRandom;

/// Return `k` distinct items from `items` in uniformly random order.
///
/// The result is a prefix of a uniform random permutation, so every
/// ordering of every `k`-subset is equally likely. `k` larger than the
/// input is clamped to `items.len()`.
pub fn sample_ordered<T, R>(rng: &mut R, items: &[T], k: usize) -> Vec<T>
where
    T: Clone,
    R: Rng + ?Sized,
{
    let mut pool = items.to_vec();
    let k = k.min(pool.len());
    let (chosen, _) = pool.partial_shuffle(rng, k);
    chosen.to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    #[test]
    fn test_sample_size_and_distinct() {
        let mut rng = StdRng::seed_from_u64(9);
        let items = [1, 2, 3, 4, 5];
        for k in 0..=5 {
            let sample = sample_ordered(&mut rng, &items, k);
            assert_eq!(sample.len(), k);
            let unique: HashSet<_> = sample.iter().collect();
            assert_eq!(unique.len(), k);
            assert!(sample.iter().all(|x| items.contains(x)));
        }
    }

    #[test]
    fn test_k_clamped_to_len() {
        let mut rng = StdRng::seed_from_u64(9);
        let sample = sample_ordered(&mut rng, &["a", "b"], 10);
        assert_eq!(sample.len(), 2);
    }

    #[test]
    fn test_empty_input() {
        let mut rng = StdRng::seed_from_u64(9);
        let items: [u8; 0] = [];
        assert!(sample_ordered(&mut rng, &items, 3).is_empty());
    }

    #[test]
    fn test_first_position_covers_all_items() {
        let mut rng = StdRng::seed_from_u64(11);
        let items = [0usize, 1, 2, 3, 4];
        let mut seen_first = [0usize; 5];
        for _ in 0..5_000 {
            let sample = sample_ordered(&mut rng, &items, 2);
            seen_first[sample[0]] += 1;
        }
        // Each item should lead roughly a fifth of the time
        for count in seen_first {
            assert!((800..1_200).contains(&count), "count {}", count);
        }
    }
}
