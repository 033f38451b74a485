//! Per-session reward word
//!
//! Each passed exercise earns letters of a shuffled acronym. The shuffle is
//! done once per process; setting a seed makes it reproducible.

use once_cell::sync::OnceCell;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use super::config::GraderConfig;

static SESSION: OnceCell<RewardWord> = OnceCell::new();

/// A shuffled acronym
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewardWord {
    letters: Vec<char>,
}

impl RewardWord {
    /// Shuffle the letters of `word`. The same seed always gives the same order.
    pub fn shuffled(word: &str, seed: Option<&str>) -> Self {
        let mut letters: Vec<char> = word.chars().collect();
        match seed {
            Some(seed) => letters.shuffle(&mut StdRng::seed_from_u64(seed_to_u64(seed))),
            None => letters.shuffle(&mut rand::thread_rng()),
        }
        Self { letters }
    }

    pub fn from_config(config: &GraderConfig) -> Self {
        Self::shuffled(&config.word, config.seed.as_deref())
    }

    /// Letter at `index`, wrapping around the word. `None` for an empty word.
    pub fn letter(&self, index: usize) -> Option<char> {
        if self.letters.is_empty() {
            return None;
        }
        Some(self.letters[index % self.letters.len()])
    }

    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    pub fn as_string(&self) -> String {
        self.letters.iter().collect()
    }
}

/// Numeric seeds are used as-is; anything else is hashed (FNV-1a).
fn seed_to_u64(seed: &str) -> u64 {
    if let Ok(n) = seed.trim().parse::<u64>() {
        return n;
    }
    seed.bytes().fold(0xcbf2_9ce4_8422_2325, |hash, b| {
        (hash ^ u64::from(b)).wrapping_mul(0x0100_0000_01b3)
    })
}

/// Fix the session word from `config`. Returns false if it was already set.
pub fn init_session(config: &GraderConfig) -> bool {
    SESSION.set(RewardWord::from_config(config)).is_ok()
}

/// The session word, built from the environment on first use.
pub fn session_word() -> &'static RewardWord {
    SESSION.get_or_init(|| RewardWord::from_config(&GraderConfig::from_env()))
}

/// Letter awarded for the exercise at `index` of the session word.
pub fn letter_for_exercise(index: usize) -> Option<char> {
    session_word().letter(index)
}
