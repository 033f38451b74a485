//! Hidden-test checks for each exercise
//!
//! A check runs a student callable (or reads a submitted answer), compares
//! the result with the reference computation and returns a [`CheckOutcome`].
//! A callable that panics fails its check instead of taking the grader down.

use std::any::Any;
use std::collections::BTreeSet;
use std::panic::{self, AssertUnwindSafe};

use super::answer::{IntegerAnswer, WordsAnswer};
use super::tables::*;
use super::types::{CheckOutcome, Exercise};
use crate::kmer::{
    frequent_words_with_mismatches, neighbors, reverse_complement_lenient, scan_frequent_words,
    skew, ScanParams, ScoringMode, Sequence,
};

/// Most elements listed when reporting missing or extra set members
const MAX_LISTED: usize = 5;

/// Run `f`, turning a panic into its message.
fn guarded<T>(f: impl FnOnce() -> T) -> Result<T, String> {
    panic::catch_unwind(AssertUnwindSafe(f)).map_err(|payload| panic_message(payload.as_ref()))
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "function panicked".to_string()
    }
}

fn list_some(items: &BTreeSet<String>) -> String {
    let shown: Vec<&str> = items.iter().take(MAX_LISTED).map(|s| s.as_str()).collect();
    let more = if items.len() > MAX_LISTED { " ..." } else { "" };
    format!("{}{}", shown.join(", "), more)
}

/// Compact description of how `got` differs from `expected`.
fn set_difference(expected: &BTreeSet<String>, got: &BTreeSet<String>) -> String {
    let missing: BTreeSet<String> = expected.difference(got).cloned().collect();
    let extra: BTreeSet<String> = got.difference(expected).cloned().collect();
    let mut parts = Vec::new();
    if !missing.is_empty() {
        parts.push(format!("missing ({}): {}", missing.len(), list_some(&missing)));
    }
    if !extra.is_empty() {
        parts.push(format!("extra ({}): {}", extra.len(), list_some(&extra)));
    }
    parts.join("; ")
}

fn all_passed(exercise: Exercise, count: usize) -> CheckOutcome {
    CheckOutcome::pass(exercise, format!("all {} hidden tests passed", count))
}

/// `f(text, pattern)` must count overlapping occurrences.
pub fn check_pattern_count<F>(f: F) -> CheckOutcome
where
    F: Fn(&str, &str) -> usize,
{
    let exercise = Exercise::PatternCount;
    for (text, pattern, expected) in PATTERN_COUNT_TESTS {
        match guarded(|| f(text, pattern)) {
            Err(msg) => return CheckOutcome::fail(exercise, format!("error: {}", msg)),
            Ok(got) if got != expected => {
                return CheckOutcome::fail(exercise, "one or more hidden tests failed")
            }
            Ok(_) => {}
        }
    }
    all_passed(exercise, PATTERN_COUNT_TESTS.len())
}

/// `f(pattern)` must return the reverse complement. Lowercase input is
/// uppercased and non-ACGT characters pass through unchanged.
pub fn check_reverse_complement<F>(f: F) -> CheckOutcome
where
    F: Fn(&str) -> String,
{
    let exercise = Exercise::ReverseComplement;
    for dna in REVERSE_COMPLEMENT_TESTS {
        let expected = reverse_complement_lenient(dna);
        match guarded(|| f(dna)) {
            Err(msg) => return CheckOutcome::fail(exercise, format!("error: {}", msg)),
            Ok(got) if got != expected => {
                return CheckOutcome::fail(
                    exercise,
                    format!("mismatch for input '{}': expected '{}', got '{}'", dna, expected, got),
                )
            }
            Ok(_) => {}
        }
    }
    all_passed(exercise, REVERSE_COMPLEMENT_TESTS.len())
}

/// `f(text, pattern)` must return every start position, ascending.
pub fn check_pattern_matching<F>(f: F) -> CheckOutcome
where
    F: Fn(&str, &str) -> Vec<usize>,
{
    let exercise = Exercise::PatternMatching;
    for (text, pattern, expected) in PATTERN_MATCHING_TESTS {
        match guarded(|| f(text, pattern)) {
            Err(msg) => return CheckOutcome::fail(exercise, format!("error: {}", msg)),
            Ok(got) if got != expected => {
                let shown: String = text.chars().take(12).collect();
                return CheckOutcome::fail(
                    exercise,
                    format!(
                        "mismatch for text '{}...' pattern '{}': expected {:?}, got {:?}",
                        shown, pattern, expected, got
                    ),
                );
            }
            Ok(_) => {}
        }
    }
    all_passed(exercise, PATTERN_MATCHING_TESTS.len())
}

/// Submitted skew values of [`SKEW_GENOME`], as integers or text.
pub fn check_skew<A>(answer: &A) -> CheckOutcome
where
    A: IntegerAnswer + ?Sized,
{
    let exercise = Exercise::Skew;
    let got = match answer.to_integers() {
        Ok(values) => values,
        Err(e) => return CheckOutcome::fail(exercise, format!("could not parse your answer: {}", e)),
    };
    let expected = skew(SKEW_GENOME);
    if got.len() != expected.len() {
        return CheckOutcome::fail(
            exercise,
            format!("wrong number of values: expected {}, got {}", expected.len(), got.len()),
        );
    }
    if got != expected {
        return CheckOutcome::fail(exercise, "skew values do not match the expected result");
    }
    CheckOutcome::pass(exercise, "skew values match exactly")
}

/// Submitted minimum-skew positions of the E. coli genome.
pub fn check_minimum_skew<A>(answer: &A) -> CheckOutcome
where
    A: IntegerAnswer + ?Sized,
{
    let exercise = Exercise::MinimumSkew;
    let got = match answer.to_integers() {
        Ok(values) => values,
        Err(e) => return CheckOutcome::fail(exercise, format!("could not parse your answer: {}", e)),
    };
    if got != ECOLI_MINIMUM_SKEW {
        return CheckOutcome::fail(
            exercise,
            format!("expected {:?}, got {:?}", ECOLI_MINIMUM_SKEW, got),
        );
    }
    CheckOutcome::pass(exercise, "positions match the E. coli minimum-skew indices")
}

/// `f(text, pattern, d)` must count windows within `d` mismatches.
pub fn check_approximate_pattern_count<F>(f: F) -> CheckOutcome
where
    F: Fn(&str, &str, usize) -> usize,
{
    let exercise = Exercise::ApproximatePatternCount;
    for (text, pattern, d, expected) in APPROXIMATE_COUNT_TESTS {
        match guarded(|| f(text, pattern, d)) {
            Err(msg) => return CheckOutcome::fail(exercise, format!("error: {}", msg)),
            Ok(got) if got != expected => {
                return CheckOutcome::fail(
                    exercise,
                    format!(
                        "failed on ({}, {}, {}): expected {}, got {}",
                        pattern, text, d, expected, got
                    ),
                )
            }
            Ok(_) => {}
        }
    }
    all_passed(exercise, APPROXIMATE_COUNT_TESTS.len())
}

/// `f(pattern, d)` must return the d-neighborhood; order is ignored.
pub fn check_neighbors<F, I>(f: F) -> CheckOutcome
where
    F: Fn(&str, usize) -> I,
    I: IntoIterator<Item = String>,
{
    let exercise = Exercise::Neighbors;
    for (pattern, d) in NEIGHBORS_TESTS {
        let expected: BTreeSet<String> = match neighbors(pattern, d) {
            Ok(hood) => hood.into_iter().collect(),
            Err(e) => return CheckOutcome::fail(exercise, format!("grader error: {}", e)),
        };
        let got = match guarded(|| f(pattern, d).into_iter().collect::<BTreeSet<String>>()) {
            Ok(got) => got,
            Err(msg) => {
                return CheckOutcome::fail(
                    exercise,
                    format!("error on ({}, {}): {}", pattern, d, msg),
                )
            }
        };
        if got != expected {
            return CheckOutcome::fail(
                exercise,
                format!(
                    "mismatch for pattern={}, d={}: {}",
                    pattern,
                    d,
                    set_difference(&expected, &got)
                ),
            );
        }
    }
    all_passed(exercise, NEIGHBORS_TESTS.len())
}

fn check_frequent_scan<F>(
    exercise: Exercise,
    tests: &[(&str, usize, usize)],
    mode: ScoringMode,
    f: F,
) -> CheckOutcome
where
    F: Fn(&str, usize, usize) -> Vec<String>,
{
    for &(text, k, d) in tests {
        let expected = match frequent_words_with_mismatches(text, k, d, mode) {
            Ok(words) => words,
            Err(e) => return CheckOutcome::fail(exercise, format!("grader error: {}", e)),
        };
        let mut got = match guarded(|| f(text, k, d)) {
            Ok(got) => got,
            Err(msg) => {
                return CheckOutcome::fail(exercise, format!("error on input (k={}, d={}): {}", k, d, msg))
            }
        };
        got.sort();
        if got != expected {
            return CheckOutcome::fail(
                exercise,
                format!(
                    "text (len {}), k={}, d={}: expected [{}], got [{}]",
                    text.len(),
                    k,
                    d,
                    expected.join(" "),
                    got.join(" ")
                ),
            );
        }
    }
    all_passed(exercise, tests.len())
}

/// `f(text, k, d)` must return the most frequent k-mers with mismatches.
pub fn check_frequent_words_approximate<F>(f: F) -> CheckOutcome
where
    F: Fn(&str, usize, usize) -> Vec<String>,
{
    check_frequent_scan(
        Exercise::FrequentWordsApproximate,
        &FREQUENT_APPROXIMATE_TESTS,
        ScoringMode::Plain,
        f,
    )
}

/// `f(text, k, d)` must also count reverse complements.
pub fn check_frequent_words_with_rc<F>(f: F) -> CheckOutcome
where
    F: Fn(&str, usize, usize) -> Vec<String>,
{
    check_frequent_scan(
        Exercise::FrequentWordsWithRc,
        &FREQUENT_WITH_RC_TESTS,
        ScoringMode::ReverseComplement,
        f,
    )
}

/// Submitted most frequent 9-mers (one mismatch, with reverse complements)
/// of the E. coli replication-origin window.
pub fn check_ecoli_ori<A>(answer: &A, genome: &Sequence) -> CheckOutcome
where
    A: WordsAnswer + ?Sized,
{
    let exercise = Exercise::EcoliOri;
    let window = match genome.subsequence(ORI_WINDOW_START, ORI_WINDOW_START + ORI_WINDOW_LEN) {
        Ok(window) => window,
        Err(e) => return CheckOutcome::fail(exercise, e.to_string()),
    };
    let params = ScanParams::new(ORI_K, ORI_D, ScoringMode::ReverseComplement);
    let expected: BTreeSet<String> = scan_frequent_words(&window, &params).words.into_iter().collect();
    let got = answer.to_word_set();
    if got != expected {
        return CheckOutcome::fail(
            exercise,
            format!("incorrect ori-window motifs: {}", set_difference(&expected, &got)),
        );
    }
    CheckOutcome::pass(exercise, "motifs match the most frequent 9-mers in the ori window")
}

/// Submitted positions of the DnaA box in V. cholerae; order and duplicates
/// are ignored.
pub fn check_genome_scan<A>(answer: &A) -> CheckOutcome
where
    A: IntegerAnswer + ?Sized,
{
    let exercise = Exercise::GenomeScan;
    let mut got = match answer.to_integers() {
        Ok(values) => values,
        Err(e) => return CheckOutcome::fail(exercise, format!("could not parse your answer: {}", e)),
    };
    got.sort_unstable();
    got.dedup();

    if got != GENOME_SCAN_POSITIONS {
        let mut detail = format!(
            "submitted {} positions; expected {}",
            got.len(),
            GENOME_SCAN_POSITIONS.len()
        );
        if got.len() == GENOME_SCAN_POSITIONS.len() {
            if let Some((i, (a, b))) = got
                .iter()
                .zip(GENOME_SCAN_POSITIONS.iter())
                .enumerate()
                .find(|(_, (a, b))| a != b)
            {
                detail.push_str(&format!("; first mismatch at index {}: got {}, expected {}", i, a, b));
            }
        }
        return CheckOutcome::fail(exercise, detail);
    }
    CheckOutcome::pass(exercise, format!("all {} positions of {} found", got.len(), GENOME_SCAN_PATTERN))
}

/// Submitted number of distinct (500, 3)-clump 9-mers in E. coli.
pub fn check_clumps_count<A>(answer: &A) -> CheckOutcome
where
    A: IntegerAnswer + ?Sized,
{
    let exercise = Exercise::ClumpsCount;
    let got = match answer.to_integers() {
        Ok(values) if values.len() == 1 => values[0],
        Ok(values) => {
            return CheckOutcome::fail(
                exercise,
                format!("expected a single integer, got {} values", values.len()),
            )
        }
        Err(e) => return CheckOutcome::fail(exercise, format!("could not read your answer: {}", e)),
    };
    if got != ECOLI_CLUMPS_COUNT {
        return CheckOutcome::fail(exercise, "number of (500,3)-clump 9-mers does not match");
    }
    CheckOutcome::pass(exercise, "clump count matches")
}
