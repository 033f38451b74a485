//! Normalizing submitted answers
//!
//! Notebooks submit either native values or the text a student pasted, so
//! integer and word answers accept both forms.

use std::collections::BTreeSet;

use crate::error::{GraderError, Result};

/// Whitespace-separated integers, e.g. `"1 3 9"`.
pub fn parse_int_list(text: &str) -> Result<Vec<i64>> {
    text.split_whitespace()
        .map(|token| {
            token
                .parse::<i64>()
                .map_err(|e| GraderError::Parse(format!("'{}' is not an integer: {}", token, e)))
        })
        .collect()
}

/// Whitespace-separated words, uppercased and deduplicated.
pub fn parse_word_set(text: &str) -> BTreeSet<String> {
    text.split_whitespace().map(|w| w.to_ascii_uppercase()).collect()
}

/// An answer that can be read as a list of integers
pub trait IntegerAnswer {
    fn to_integers(&self) -> Result<Vec<i64>>;
}

impl IntegerAnswer for str {
    fn to_integers(&self) -> Result<Vec<i64>> {
        parse_int_list(self)
    }
}

impl IntegerAnswer for String {
    fn to_integers(&self) -> Result<Vec<i64>> {
        parse_int_list(self)
    }
}

impl IntegerAnswer for [i64] {
    fn to_integers(&self) -> Result<Vec<i64>> {
        Ok(self.to_vec())
    }
}

impl IntegerAnswer for Vec<i64> {
    fn to_integers(&self) -> Result<Vec<i64>> {
        Ok(self.clone())
    }
}

impl IntegerAnswer for [usize] {
    fn to_integers(&self) -> Result<Vec<i64>> {
        self.iter()
            .map(|&n| i64::try_from(n).map_err(|e| GraderError::Parse(e.to_string())))
            .collect()
    }
}

impl IntegerAnswer for Vec<usize> {
    fn to_integers(&self) -> Result<Vec<i64>> {
        self.as_slice().to_integers()
    }
}

impl IntegerAnswer for usize {
    fn to_integers(&self) -> Result<Vec<i64>> {
        std::slice::from_ref(self).to_integers()
    }
}

/// An answer that can be read as a set of uppercase words
pub trait WordsAnswer {
    fn to_word_set(&self) -> BTreeSet<String>;
}

impl WordsAnswer for str {
    fn to_word_set(&self) -> BTreeSet<String> {
        parse_word_set(self)
    }
}

impl WordsAnswer for String {
    fn to_word_set(&self) -> BTreeSet<String> {
        parse_word_set(self)
    }
}

impl WordsAnswer for [String] {
    fn to_word_set(&self) -> BTreeSet<String> {
        self.iter().map(|w| w.trim().to_ascii_uppercase()).collect()
    }
}

impl WordsAnswer for Vec<String> {
    fn to_word_set(&self) -> BTreeSet<String> {
        self.as_slice().to_word_set()
    }
}

impl WordsAnswer for [&str] {
    fn to_word_set(&self) -> BTreeSet<String> {
        self.iter().map(|w| w.trim().to_ascii_uppercase()).collect()
    }
}
