//! DNA alphabet, validated sequences and reverse complements

use std::fmt;
use std::str::FromStr;

use bio::alphabets::{dna, Alphabet};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::{GraderError, Result};

/// Standard DNA bases, in lexicographic order
pub const STANDARD_BASES: [u8; 4] = [b'A', b'C', b'G', b'T'];

/// Uppercase ACGT alphabet used to validate normalized text
static DNA_ALPHABET: Lazy<Alphabet> = Lazy::new(|| Alphabet::new(STANDARD_BASES.iter()));

/// Check if a byte is a standard (uppercase) DNA base
#[inline]
pub fn is_standard_base(b: u8) -> bool {
    matches!(b, b'A' | b'C' | b'G' | b'T')
}

/// Watson-Crick complement of a standard base. Other bytes are returned unchanged.
#[inline]
pub fn complement(b: u8) -> u8 {
    match b {
        b'A' => b'T',
        b'T' => b'A',
        b'C' => b'G',
        b'G' => b'C',
        other => other,
    }
}

/// Reverse complement for already-validated ACGT bytes.
pub(crate) fn reverse_complement_bytes(seq: &[u8]) -> Vec<u8> {
    dna::revcomp(seq)
}

/// Reverse complement of arbitrary text: uppercased, reversed, and A/C/G/T
/// complemented. Any other character passes through unchanged.
pub fn reverse_complement_lenient(text: &str) -> String {
    text.chars()
        .rev()
        .map(|c| {
            let c = c.to_ascii_uppercase();
            if c.is_ascii() {
                complement(c as u8) as char
            } else {
                c
            }
        })
        .collect()
}

/// Uppercase `text` and reject anything outside the ACGT alphabet.
fn normalize(text: &str) -> Result<String> {
    let upper = text.to_ascii_uppercase();
    if DNA_ALPHABET.is_word(upper.as_bytes()) {
        return Ok(upper);
    }
    // Slow path only to report where the first bad character is
    match upper.chars().enumerate().find(|(_, c)| !c.is_ascii() || !is_standard_base(*c as u8)) {
        Some((position, base)) => Err(GraderError::InvalidBase { base, position }),
        None => Ok(upper),
    }
}

/// An immutable DNA sequence over {A, C, G, T}, always stored uppercase.
///
/// The empty sequence is valid; operations that need at least one base
/// check for that themselves.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Sequence(String);

impl Sequence {
    /// Validate and normalize `text` (case-insensitive).
    pub fn new(text: &str) -> Result<Self> {
        normalize(text).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// All windows of length `k`, left to right. Yields nothing when `k` is 0
    /// or longer than the sequence.
    pub fn kmers(&self, k: usize) -> impl Iterator<Item = &[u8]> {
        let bytes = self.as_bytes();
        let count = if k == 0 || k > bytes.len() { 0 } else { bytes.len() - k + 1 };
        (0..count).map(move |i| &bytes[i..i + k])
    }

    /// Slice `[start, end)` of the sequence.
    pub fn subsequence(&self, start: usize, end: usize) -> Result<Self> {
        if start > end || end > self.len() {
            return Err(GraderError::WindowOutOfRange {
                start,
                end,
                genome_len: self.len(),
            });
        }
        Ok(Self(self.0[start..end].to_string()))
    }

    pub fn reverse_complement(&self) -> Self {
        Self(String::from_utf8_lossy(&reverse_complement_bytes(self.as_bytes())).into_owned())
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Sequence {
    type Err = GraderError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<String> for Sequence {
    type Error = GraderError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(&value)
    }
}

impl From<Sequence> for String {
    fn from(seq: Sequence) -> Self {
        seq.0
    }
}

impl AsRef<[u8]> for Sequence {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_normalizes_case() {
        let seq = Sequence::new("acGt").unwrap();
        assert_eq!(seq.as_str(), "ACGT");
        assert_eq!(seq.len(), 4);
    }

    #[test]
    fn test_sequence_rejects_invalid_base() {
        match Sequence::new("ACNGT") {
            Err(GraderError::InvalidBase { base, position }) => {
                assert_eq!(base, 'N');
                assert_eq!(position, 2);
            }
            other => panic!("expected InvalidBase, got {:?}", other),
        }
        assert!(Sequence::new("AC GT").is_err());
        assert!(Sequence::new("ACGTé").is_err());
    }

    #[test]
    fn test_empty_sequence_is_valid() {
        let seq = Sequence::new("").unwrap();
        assert!(seq.is_empty());
        assert_eq!(seq.kmers(1).count(), 0);
    }

    #[test]
    fn test_kmers_windows() {
        let seq = Sequence::new("ACGTA").unwrap();
        let windows: Vec<&[u8]> = seq.kmers(3).collect();
        assert_eq!(windows, vec![&b"ACG"[..], &b"CGT"[..], &b"GTA"[..]]);
        assert_eq!(seq.kmers(0).count(), 0);
        assert_eq!(seq.kmers(6).count(), 0);
        assert_eq!(seq.kmers(5).count(), 1);
    }

    #[test]
    fn test_reverse_complement_involution() {
        let seq = Sequence::new("AAAACCCGGT").unwrap();
        let rc = seq.reverse_complement();
        assert_eq!(rc.as_str(), "ACCGGGTTTT");
        assert_eq!(rc.reverse_complement(), seq);
    }

    #[test]
    fn test_reverse_complement_lenient() {
        assert_eq!(reverse_complement_lenient("acgtacgt"), "ACGTACGT");
        assert_eq!(reverse_complement_lenient("GATTACA"), "TGTAATC");
        assert_eq!(reverse_complement_lenient("NNNN"), "NNNN");
        assert_eq!(reverse_complement_lenient("ANC"), "GNT");
        assert_eq!(reverse_complement_lenient(""), "");
    }

    #[test]
    fn test_subsequence_bounds() {
        let seq = Sequence::new("ACGTACGT").unwrap();
        assert_eq!(seq.subsequence(2, 5).unwrap().as_str(), "GTA");
        assert!(seq.subsequence(4, 9).is_err());
        assert!(seq.subsequence(5, 4).is_err());
    }

    #[test]
    fn test_sequence_serde_validates() {
        let seq: Sequence = serde_json::from_str("\"acgt\"").unwrap();
        assert_eq!(seq.as_str(), "ACGT");
        assert_eq!(serde_json::to_string(&seq).unwrap(), "\"ACGT\"");
        assert!(serde_json::from_str::<Sequence>("\"ACXT\"").is_err());
    }
}
