//! Deterministic seeding for daily content.
//!
//! Every player worldwide must see the same questions and the same option
//! order on the same calendar day, so all "randomness" is derived from the
//! date key through a fixed string hash. No RNG state, no clock reads.

/// Hash a string to a stable u32: `h = h * 31 + char`, wrapping, starting
/// from 0. Same input produces the same output on every platform.
pub fn hash_string(s: &str) -> u32 {
    s.chars()
        .fold(0u32, |h, c| h.wrapping_mul(31).wrapping_add(c as u32))
}

/// Map a seed onto an index into a collection of `max` elements.
/// Callers guarantee `max > 0`; empty pools are a configuration error.
pub fn seeded_index(seed: u32, max: usize) -> usize {
    debug_assert!(max > 0, "seeded_index called with an empty pool");
    (seed as usize) % max
}

/// Fisher-Yates shuffle keyed by `salted_key`. Step `i` (descending from
/// `len - 1` to `1`) swaps with `seeded_index(hash(salted_key + i), i + 1)`.
///
/// Distinct call sites must use distinct salts appended to the date key
/// (e.g. `"2025-01-15college-options"` vs `"2025-01-15draft-options"`),
/// otherwise two four-element shuffles on the same day land in visibly
/// identical order.
pub fn seeded_shuffle_in_place<T>(salted_key: &str, items: &mut [T]) {
    for i in (1..items.len()).rev() {
        let j = seeded_index(hash_string(&format!("{salted_key}{i}")), i + 1);
        items.swap(i, j);
    }
}

/// Shuffled copy of a slice; see [`seeded_shuffle_in_place`].
pub fn seeded_shuffle<T: Clone>(salted_key: &str, items: &[T]) -> Vec<T> {
    let mut out = items.to_vec();
    seeded_shuffle_in_place(salted_key, &mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_matches_reference_values() {
        assert_eq!(hash_string(""), 0);
        assert_eq!(hash_string("a"), 97);
        assert_eq!(hash_string("ab"), 97 * 31 + 98);
        // Regression pin for a realistic salted date key.
        assert_eq!(hash_string("2025-01-15college"), 1_184_997_235);
    }

    #[test]
    fn hash_is_stable_across_calls() {
        let key = "2026-02-07season";
        assert_eq!(hash_string(key), hash_string(key));
    }

    #[test]
    fn seeded_index_stays_in_bounds() {
        for max in 1..20 {
            for seed in [0u32, 1, 31, 4_294_967_295] {
                assert!(seeded_index(seed, max) < max);
            }
        }
    }

    #[test]
    fn shuffle_is_deterministic_per_key() {
        let items = ["Saints", "Packers", "Bears", "Vikings"];
        let a = seeded_shuffle("2025-01-15college-options", &items);
        let b = seeded_shuffle("2025-01-15college-options", &items);
        assert_eq!(a, b);
    }

    #[test]
    fn shuffle_matches_reference_permutation() {
        // Pinned against the reference Fisher-Yates walk for these keys.
        let items = ["a", "b", "c", "d"];
        let out = seeded_shuffle("2025-01-15career-options", &items);
        assert_eq!(out, ["c", "d", "b", "a"]);
        let out = seeded_shuffle("2025-01-15draft-options", &items);
        assert_eq!(out, ["a", "c", "d", "b"]);
    }

    #[test]
    fn different_salts_decorrelate_shuffles() {
        let items: Vec<u32> = (0..16).collect();
        let a = seeded_shuffle("2025-01-15college-options", &items);
        let b = seeded_shuffle("2025-01-15season-options", &items);
        assert_ne!(a, b);
    }

    #[test]
    fn shuffle_preserves_elements() {
        let items: Vec<u32> = (0..10).collect();
        let mut out = seeded_shuffle("2025-03-03draft-decoys", &items);
        out.sort_unstable();
        assert_eq!(out, items);
    }
}
