//! Linear-scan reference functions over genome text
//!
//! Exact pattern search, k-mer frequency tables, GC skew and clump finding.
//! These work on raw bytes and do not validate the alphabet, so they can be
//! pointed at whatever a student submission is graded against.

use std::collections::{HashMap, HashSet};

use super::alphabet::Sequence;
use super::hamming::hamming_distance;
use crate::error::{GraderError, Result};

/// Start positions of every window of `text` equal to `pattern`, overlaps included.
pub fn pattern_matching(pattern: &str, text: &str) -> Vec<usize> {
    let (p, t) = (pattern.as_bytes(), text.as_bytes());
    if p.is_empty() || p.len() > t.len() {
        return Vec::new();
    }
    t.windows(p.len())
        .enumerate()
        .filter(|(_, w)| *w == p)
        .map(|(i, _)| i)
        .collect()
}

/// Number of (possibly overlapping) occurrences of `pattern` in `text`.
pub fn pattern_count(text: &str, pattern: &str) -> usize {
    pattern_matching(pattern, text).len()
}

/// Count of every k-mer occurring in `text`.
pub fn frequency_table(text: &str, k: usize) -> HashMap<String, usize> {
    let bytes = text.as_bytes();
    let mut table = HashMap::new();
    if k == 0 || k > bytes.len() {
        return table;
    }
    for window in bytes.windows(k) {
        *table
            .entry(String::from_utf8_lossy(window).into_owned())
            .or_insert(0) += 1;
    }
    table
}

/// Largest count in a frequency table, 0 if it is empty.
pub fn max_map(table: &HashMap<String, usize>) -> usize {
    table.values().copied().max().unwrap_or(0)
}

/// Most frequent exact k-mers of `text`, sorted.
pub fn frequent_words(text: &str, k: usize) -> Vec<String> {
    let table = frequency_table(text, k);
    let max = max_map(&table);
    let mut words: Vec<String> = table
        .into_iter()
        .filter(|(_, count)| *count == max)
        .map(|(word, _)| word)
        .collect();
    words.sort();
    words
}

/// Running G - C difference over every prefix of `genome`, starting at 0.
/// The result has `genome.len() + 1` entries.
pub fn skew(genome: &str) -> Vec<i64> {
    let mut values = Vec::with_capacity(genome.len() + 1);
    let mut current = 0i64;
    values.push(current);
    for &b in genome.as_bytes() {
        match b {
            b'G' | b'g' => current += 1,
            b'C' | b'c' => current -= 1,
            _ => {}
        }
        values.push(current);
    }
    values
}

/// Every prefix length at which the skew reaches its minimum, ascending.
pub fn minimum_skew(genome: &str) -> Vec<usize> {
    let values = skew(genome);
    let min = values.iter().copied().min().unwrap_or(0);
    values
        .iter()
        .enumerate()
        .filter(|&(_, &v)| v == min)
        .map(|(i, _)| i)
        .collect()
}

/// Number of windows of `text` within Hamming distance `d` of `pattern`.
pub fn approximate_pattern_count(text: &str, pattern: &str, d: usize) -> Result<usize> {
    let text = Sequence::new(text)?;
    let pattern = Sequence::new(pattern)?;
    if pattern.is_empty() {
        return Err(GraderError::EmptyPattern);
    }
    Ok(text
        .kmers(pattern.len())
        .filter(|window| hamming_distance(window, pattern.as_bytes()) <= d)
        .count())
}

/// Distinct k-mers that occur at least `t` times inside some window of
/// length `window` of `genome`, sorted.
///
/// The window's frequency table is updated incrementally as it slides.
pub fn find_clumps(genome: &str, k: usize, window: usize, t: usize) -> Vec<String> {
    let bytes = genome.as_bytes();
    if k == 0 || window < k || bytes.len() < window {
        return Vec::new();
    }

    let mut counts: HashMap<&[u8], usize> = HashMap::new();
    let mut found: HashSet<&[u8]> = HashSet::new();

    for kmer in bytes[..window].windows(k) {
        *counts.entry(kmer).or_insert(0) += 1;
    }
    found.extend(counts.iter().filter(|(_, c)| **c >= t).map(|(kmer, _)| *kmer));

    for start in 1..=bytes.len() - window {
        let leaving = &bytes[start - 1..start - 1 + k];
        if let Some(c) = counts.get_mut(leaving) {
            *c -= 1;
        }

        let end = start + window;
        let entering = &bytes[end - k..end];
        let c = counts.entry(entering).or_insert(0);
        *c += 1;
        if *c >= t {
            found.insert(entering);
        }
    }

    let mut out: Vec<String> = found
        .into_iter()
        .map(|kmer| String::from_utf8_lossy(kmer).into_owned())
        .collect();
    out.sort();
    out
}
