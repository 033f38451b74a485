//! Bounded Hamming-distance neighborhoods
//!
//! The d-neighborhood of a pattern is every string of the same length over
//! {A, C, G, T} that differs from it in at most `d` positions. It is built
//! bottom-up from the neighborhood of the pattern's suffix, so only
//! budget-respecting candidates are ever generated.

use std::collections::HashSet;

use super::alphabet::{Sequence, STANDARD_BASES};
use super::hamming::hamming_distance;
use crate::error::{GraderError, Result};

/// All sequences within Hamming distance `d` of `pattern`.
///
/// `pattern` is case-insensitive and must be a non-empty ACGT string.
pub fn neighbors(pattern: &str, d: usize) -> Result<HashSet<String>> {
    let pattern = Sequence::new(pattern)?;
    if pattern.is_empty() {
        return Err(GraderError::EmptyPattern);
    }
    Ok(neighborhood(pattern.as_bytes(), d)
        .into_iter()
        .map(|n| String::from_utf8_lossy(&n).into_owned())
        .collect())
}

/// Same as [`neighbors`], sorted lexicographically.
pub fn sorted_neighbors(pattern: &str, d: usize) -> Result<Vec<String>> {
    let mut out: Vec<String> = neighbors(pattern, d)?.into_iter().collect();
    out.sort();
    Ok(out)
}

/// Number of strings within distance `d` of a length-`len` pattern:
/// sum over i in 0..=min(d, len) of C(len, i) * 3^i.
pub fn neighborhood_size(len: usize, d: usize) -> usize {
    let mut total = 0usize;
    let mut binom = 1usize;
    let mut pow3 = 1usize;
    for i in 0..=d.min(len) {
        if i > 0 {
            binom = binom * (len - i + 1) / i;
            pow3 *= 3;
        }
        total += binom * pow3;
    }
    total
}

/// Neighborhood over raw ACGT bytes. `pattern` must be non-empty.
pub(crate) fn neighborhood(pattern: &[u8], d: usize) -> HashSet<Vec<u8>> {
    if d == 0 {
        return HashSet::from([pattern.to_vec()]);
    }
    if pattern.len() == 1 {
        return STANDARD_BASES.iter().map(|&b| vec![b]).collect();
    }

    let first = pattern[0];
    let suffix = &pattern[1..];
    let suffix_neighbors = neighborhood(suffix, d);

    let mut out = HashSet::with_capacity(suffix_neighbors.len() * 2);
    for text in suffix_neighbors {
        if hamming_distance(suffix, &text) < d {
            for &base in &STANDARD_BASES {
                out.insert(prepend(base, &text));
            }
        } else {
            out.insert(prepend(first, &text));
        }
    }
    out
}

#[inline]
fn prepend(base: u8, rest: &[u8]) -> Vec<u8> {
    let mut v = Vec::with_capacity(rest.len() + 1);
    v.push(base);
    v.extend_from_slice(rest);
    v
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn dna(max_len: usize) -> impl Strategy<Value = String> {
        proptest::collection::vec(prop_oneof![Just('A'), Just('C'), Just('G'), Just('T')], 1..=max_len)
            .prop_map(|bases| bases.into_iter().collect::<String>())
    }

    proptest! {
        #[test]
        fn neighborhood_members_within_budget(pattern in dna(7), d in 0usize..=3) {
            let hood = neighbors(&pattern, d).unwrap();
            prop_assert!(hood.contains(&pattern));
            for n in &hood {
                prop_assert_eq!(n.len(), pattern.len());
                prop_assert!(hamming_distance(n.as_bytes(), pattern.as_bytes()) <= d);
            }
        }

        #[test]
        fn neighborhood_is_exact(pattern in dna(6), d in 0usize..=3) {
            let hood = neighbors(&pattern, d).unwrap();
            prop_assert_eq!(hood.len(), neighborhood_size(pattern.len(), d));
        }

        #[test]
        fn neighborhood_grows_with_budget(pattern in dna(6), d in 0usize..=2) {
            let smaller = neighbors(&pattern, d).unwrap();
            let larger = neighbors(&pattern, d + 1).unwrap();
            prop_assert!(smaller.is_subset(&larger));
        }
    }
}
