//! Exercises and check outcomes

use serde::{Deserialize, Serialize};

use super::reward::letter_for_exercise;

/// Graded exercises, in workshop order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Exercise {
    PatternCount,
    ReverseComplement,
    PatternMatching,
    Skew,
    MinimumSkew,
    ApproximatePatternCount,
    Neighbors,
    FrequentWordsApproximate,
    FrequentWordsWithRc,
    EcoliOri,
    /// Bonus: worth two letters
    GenomeScan,
    /// Bonus: worth two letters
    ClumpsCount,
}

impl Exercise {
    pub const ALL: [Exercise; 12] = [
        Self::PatternCount,
        Self::ReverseComplement,
        Self::PatternMatching,
        Self::Skew,
        Self::MinimumSkew,
        Self::ApproximatePatternCount,
        Self::Neighbors,
        Self::FrequentWordsApproximate,
        Self::FrequentWordsWithRc,
        Self::EcoliOri,
        Self::GenomeScan,
        Self::ClumpsCount,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::PatternCount => "PatternCount",
            Self::ReverseComplement => "ReverseComplement",
            Self::PatternMatching => "PatternMatching",
            Self::Skew => "Skew",
            Self::MinimumSkew => "MinimumSkew",
            Self::ApproximatePatternCount => "ApproximatePatternCount",
            Self::Neighbors => "Neighbors",
            Self::FrequentWordsApproximate => "FrequentWordsApproximate",
            Self::FrequentWordsWithRc => "FrequentWordsWithMismatchesAndRC",
            Self::EcoliOri => "EcoliOri",
            Self::GenomeScan => "GenomeScan",
            Self::ClumpsCount => "ClumpsCount",
        }
    }

    /// Indices into the session word of the letters this exercise awards.
    ///
    /// There are 14 slots. Indices wrap modulo the word length, so with the
    /// 10-letter default word the four bonus letters repeat slots 0 to 3.
    /// A word of 14 or more letters makes every awarded letter distinct.
    pub fn letter_slots(&self) -> &'static [usize] {
        match self {
            Self::PatternCount => &[0],
            Self::ReverseComplement => &[1],
            Self::PatternMatching => &[2],
            Self::Skew => &[3],
            Self::MinimumSkew => &[4],
            Self::ApproximatePatternCount => &[5],
            Self::Neighbors => &[6],
            Self::FrequentWordsApproximate => &[7],
            Self::FrequentWordsWithRc => &[8],
            Self::EcoliOri => &[9],
            Self::GenomeScan => &[10, 11],
            Self::ClumpsCount => &[12, 13],
        }
    }
}

/// Result of grading one exercise
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckOutcome {
    pub exercise: Exercise,
    pub passed: bool,
    pub letters: Vec<char>,
    pub detail: String,
}

impl CheckOutcome {
    /// Passed: award this exercise's letters from the session word.
    pub fn pass(exercise: Exercise, detail: impl Into<String>) -> Self {
        let letters = exercise
            .letter_slots()
            .iter()
            .filter_map(|&slot| letter_for_exercise(slot))
            .collect();
        let outcome = Self {
            exercise,
            passed: true,
            letters,
            detail: detail.into(),
        };
        log::debug!("{} passed: {}", exercise.name(), outcome.detail);
        outcome
    }

    pub fn fail(exercise: Exercise, detail: impl Into<String>) -> Self {
        let outcome = Self {
            exercise,
            passed: false,
            letters: Vec::new(),
            detail: detail.into(),
        };
        log::debug!("{} failed: {}", exercise.name(), outcome.detail);
        outcome
    }

    /// Keep the verdict but award no letters, for practice runs.
    pub fn without_letters(mut self) -> Self {
        self.letters.clear();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grader::reward::{session_word, RewardWord};

    fn awarded(word: &RewardWord, exercise: Exercise) -> Vec<char> {
        exercise
            .letter_slots()
            .iter()
            .filter_map(|&slot| word.letter(slot))
            .collect()
    }

    #[test]
    fn test_slots_are_distinct() {
        let mut slots: Vec<usize> = Exercise::ALL
            .iter()
            .flat_map(|e| e.letter_slots().iter().copied())
            .collect();
        let total = slots.len();
        slots.sort();
        slots.dedup();
        assert_eq!(slots.len(), total);
    }

    #[test]
    fn test_pass_awards_letters() {
        let outcome = CheckOutcome::pass(Exercise::GenomeScan, "ok");
        assert!(outcome.passed);
        if !session_word().is_empty() {
            assert_eq!(outcome.letters.len(), 2);
            assert_eq!(outcome.letters[0], session_word().letter(10).unwrap());
        }
    }

    #[test]
    fn test_fail_awards_nothing() {
        let outcome = CheckOutcome::fail(Exercise::Neighbors, "wrong");
        assert!(!outcome.passed);
        assert!(outcome.letters.is_empty());
    }

    #[test]
    fn test_bonus_letters_wrap_on_default_word() {
        let word = RewardWord::shuffled("REPLICATOR", Some("7"));
        let first_four: Vec<char> = (0..4).filter_map(|i| word.letter(i)).collect();
        let mut bonus = awarded(&word, Exercise::GenomeScan);
        bonus.extend(awarded(&word, Exercise::ClumpsCount));
        assert_eq!(bonus, first_four);
    }

    #[test]
    fn test_long_word_awards_distinct_letters() {
        let word = RewardWord::shuffled("ABCDEFGHIJKLMN", Some("7"));
        let mut letters: Vec<char> = Exercise::ALL.iter().flat_map(|&e| awarded(&word, e)).collect();
        assert_eq!(letters.len(), 14);
        letters.sort_unstable();
        letters.dedup();
        assert_eq!(letters.len(), 14);
    }

    #[test]
    fn test_without_letters_keeps_verdict() {
        let outcome = CheckOutcome::pass(Exercise::Skew, "ok").without_letters();
        assert!(outcome.passed);
        assert!(outcome.letters.is_empty());
        assert_eq!(outcome.detail, "ok");
    }

    struct Capture(std::sync::Mutex<Vec<(log::Level, String)>>);

    impl log::Log for Capture {
        fn enabled(&self, _: &log::Metadata) -> bool {
            true
        }

        fn log(&self, record: &log::Record) {
            self.0.lock().unwrap().push((record.level(), record.args().to_string()));
        }

        fn flush(&self) {}
    }

    static CAPTURE: Capture = Capture(std::sync::Mutex::new(Vec::new()));

    #[test]
    fn test_outcomes_stay_below_warn() {
        let _ = log::set_logger(&CAPTURE);
        log::set_max_level(log::LevelFilter::Trace);

        CheckOutcome::fail(Exercise::Neighbors, "missing 3 neighbor(s)");
        CheckOutcome::pass(Exercise::Neighbors, "all neighbor tests passed");

        let records = CAPTURE.0.lock().unwrap();
        let ours: Vec<_> = records.iter().filter(|(_, msg)| msg.starts_with("Neighbors ")).collect();
        assert!(!ours.is_empty());
        assert!(ours.iter().all(|(level, _)| *level == log::Level::Debug));
    }
}
