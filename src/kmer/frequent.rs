//! Mismatch-tolerant frequent-word scoring
//!
//! Every k-length window of a text votes once for each member of its own
//! d-neighborhood. A candidate's vote count is therefore the number of
//! windows within distance `d` of it, whether or not it occurs verbatim.

use std::collections::HashMap;

use super::alphabet::{reverse_complement_bytes, Sequence};
use super::neighbors::neighborhood;
use super::types::{FrequentWords, ScanParams, ScoringMode};
use crate::error::Result;

/// Votes received by each candidate k-mer of one scan
#[derive(Debug, Clone, Default)]
pub struct VoteTable {
    k: usize,
    votes: HashMap<Vec<u8>, usize>,
}

impl VoteTable {
    /// Let every window of `text` vote for its d-neighborhood.
    /// Empty when `k` is 0 or longer than the text.
    pub fn build(text: &Sequence, k: usize, d: usize) -> Self {
        let mut votes: HashMap<Vec<u8>, usize> = HashMap::new();
        let mut windows = 0usize;

        for window in text.kmers(k) {
            windows += 1;
            for candidate in neighborhood(window, d) {
                *votes.entry(candidate).or_insert(0) += 1;
            }
        }

        log::debug!(
            "vote table: {} windows of k={} d={} -> {} candidates",
            windows,
            k,
            d,
            votes.len()
        );

        Self { k, votes }
    }

    pub fn k(&self) -> usize {
        self.k
    }

    pub fn len(&self) -> usize {
        self.votes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.votes.is_empty()
    }

    /// Votes for `candidate`; 0 if it never received any.
    pub fn votes(&self, candidate: &[u8]) -> usize {
        self.votes.get(candidate).copied().unwrap_or(0)
    }

    /// Score of a candidate under `mode`.
    pub fn score(&self, candidate: &[u8], mode: ScoringMode) -> usize {
        match mode {
            ScoringMode::Plain => self.votes(candidate),
            ScoringMode::ReverseComplement => {
                self.votes(candidate) + self.votes(&reverse_complement_bytes(candidate))
            }
        }
    }

    /// All candidates sharing the maximum score, sorted and deduplicated.
    pub fn best(&self, mode: ScoringMode) -> FrequentWords {
        let scores: Vec<(&[u8], usize)> = self
            .votes
            .keys()
            .map(|candidate| (candidate.as_slice(), self.score(candidate, mode)))
            .collect();

        let Some(max_score) = scores.iter().map(|&(_, s)| s).max() else {
            return FrequentWords::default();
        };

        let mut words: Vec<String> = scores
            .into_iter()
            .filter(|&(_, s)| s == max_score)
            .map(|(candidate, _)| String::from_utf8_lossy(candidate).into_owned())
            .collect();
        words.sort();
        words.dedup();

        log::debug!(
            "{} candidate(s) with {} reach score {}",
            words.len(),
            mode.description(),
            max_score
        );

        FrequentWords {
            words,
            score: max_score,
        }
    }
}

/// Run a full scan over an already validated sequence.
pub fn scan_frequent_words(text: &Sequence, params: &ScanParams) -> FrequentWords {
    if params.k == 0 || text.len() < params.k {
        return FrequentWords::default();
    }
    VoteTable::build(text, params.k, params.d).best(params.mode)
}

/// Most frequent k-mers with up to `d` mismatches, scored by `mode`.
///
/// Returns an empty list when `k` is 0 or exceeds the text length.
/// Fails only if `text` contains characters outside ACGT.
pub fn frequent_words_with_mismatches(
    text: &str,
    k: usize,
    d: usize,
    mode: ScoringMode,
) -> Result<Vec<String>> {
    let text = Sequence::new(text)?;
    Ok(scan_frequent_words(&text, &ScanParams::new(k, d, mode)).words)
}

/// Most frequent k-mers with up to `d` mismatches.
pub fn frequent_words_approximate(text: &str, k: usize, d: usize) -> Result<Vec<String>> {
    frequent_words_with_mismatches(text, k, d, ScoringMode::Plain)
}

/// Most frequent k-mers with up to `d` mismatches, counting reverse complements.
pub fn frequent_words_with_mismatches_and_rc(
    text: &str,
    k: usize,
    d: usize,
) -> Result<Vec<String>> {
    frequent_words_with_mismatches(text, k, d, ScoringMode::ReverseComplement)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn dna(max_len: usize) -> impl Strategy<Value = String> {
        proptest::collection::vec(prop_oneof![Just('A'), Just('C'), Just('G'), Just('T')], 0..=max_len)
            .prop_map(|bases| bases.into_iter().collect::<String>())
    }

    fn mode() -> impl Strategy<Value = ScoringMode> {
        prop_oneof![Just(ScoringMode::Plain), Just(ScoringMode::ReverseComplement)]
    }

    proptest! {
        #[test]
        fn results_are_distinct_kmers(text in dna(12), k in 1usize..=4, d in 0usize..=2, mode in mode()) {
            let words = frequent_words_with_mismatches(&text, k, d, mode).unwrap();
            prop_assert!(words.iter().all(|w| w.len() == k));
            prop_assert!(words.windows(2).all(|pair| pair[0] < pair[1]));
            prop_assert_eq!(!words.is_empty(), text.len() >= k);
        }

        #[test]
        fn every_result_has_the_best_score(text in dna(12), k in 1usize..=4, d in 0usize..=2, mode in mode()) {
            let seq = Sequence::new(&text).unwrap();
            let table = VoteTable::build(&seq, k, d);
            let best = table.best(mode);
            for word in &best.words {
                prop_assert_eq!(table.score(word.as_bytes(), mode), best.score);
            }
        }
    }
}
