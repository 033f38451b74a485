//! kmer_grader - Autograder for introductory genome-analysis exercises
//!
//! Reference k-mer algorithms (Hamming neighborhoods, mismatch-tolerant
//! frequent words, skew, clumps) and the hidden-test checks that grade
//! student implementations against them.

pub mod error;
pub mod grader;
pub mod kmer;

pub use error::{GraderError, Result};
pub use kmer::*;
