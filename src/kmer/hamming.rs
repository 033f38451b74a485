//! Hamming distance between sequences

/// Count positions at which `a` and `b` differ.
///
/// Only the overlapping prefix is compared: positions past the end of the
/// shorter input are not counted.
#[inline]
pub fn hamming_distance(a: &[u8], b: &[u8]) -> usize {
    a.iter().zip(b).filter(|(x, y)| x != y).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use bio::alignment::distance::hamming;

    #[test]
    fn test_identical_sequences() {
        assert_eq!(hamming_distance(b"ACGT", b"ACGT"), 0);
        assert_eq!(hamming_distance(b"", b""), 0);
    }

    #[test]
    fn test_counts_mismatches() {
        assert_eq!(hamming_distance(b"GGGCCGTTGGT", b"GGACCGTTGAC"), 3);
        assert_eq!(hamming_distance(b"AAAA", b"TTTT"), 4);
    }

    #[test]
    fn test_truncates_to_shorter() {
        assert_eq!(hamming_distance(b"ACGTAAA", b"ACCT"), 1);
        assert_eq!(hamming_distance(b"A", b""), 0);
    }

    #[test]
    fn test_matches_bio_hamming() {
        let pairs: [(&[u8], &[u8]); 3] = [
            (b"TGACCCGTTATGCTCGAGTTCGGTCAGAGCGTCATTGCGAGTAGTCGTTTGCTTTCTCAAACTCC", b"GAGCGATTAAGCGTGACAGCCCCAGGGAACCCACAAAACGTGATCGCAGTCCATCCGATCATACA"),
            (b"ACGT", b"TGCA"),
            (b"CTTGATCAT", b"CTTGATCAT"),
        ];
        for (a, b) in pairs {
            assert_eq!(hamming_distance(a, b) as u64, hamming(a, b));
        }
    }
}
