//! Data types for k-mer scoring

use serde::{Deserialize, Serialize};

/// How candidate k-mers are scored after votes are accumulated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoringMode {
    /// A candidate's score is its own vote count
    Plain,
    /// Votes of the candidate plus votes of its reverse complement
    ReverseComplement,
}

impl Default for ScoringMode {
    fn default() -> Self {
        Self::Plain
    }
}

impl ScoringMode {
    pub fn description(&self) -> &'static str {
        match self {
            Self::Plain => "mismatches",
            Self::ReverseComplement => "mismatches and reverse complements",
        }
    }
}

/// Parameters of one approximate frequent-words scan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanParams {
    pub k: usize,
    pub d: usize,
    pub mode: ScoringMode,
}

impl ScanParams {
    pub fn new(k: usize, d: usize, mode: ScoringMode) -> Self {
        Self { k, d, mode }
    }
}

/// Most frequent candidates of a scan and the score they share
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequentWords {
    pub words: Vec<String>,
    pub score: usize,
}

impl FrequentWords {
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
