//! Error types shared by the k-mer core and the grader.

use thiserror::Error;

/// Unified error type for sequence analysis and grading.
#[derive(Debug, Error)]
pub enum GraderError {
    /// A character outside {A, C, G, T} (case-insensitive)
    #[error("invalid base '{base}' at position {position}; only A, C, G, T are allowed")]
    InvalidBase { base: char, position: usize },

    /// Neighborhoods and approximate counts need at least one base
    #[error("pattern must not be empty")]
    EmptyPattern,

    /// Genome input contained no sequence at all
    #[error("no sequence found in genome input")]
    EmptyGenome,

    /// A submitted answer could not be read
    #[error("parse error: {0}")]
    Parse(String),

    /// Genome is too short for the fixed analysis window
    #[error("window [{start}, {end}) is out of range for a genome of length {genome_len}")]
    WindowOutOfRange {
        start: usize,
        end: usize,
        genome_len: usize,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, GraderError>;
