//! Hidden test tables and fixed answers

/// (text, pattern, expected count)
pub const PATTERN_COUNT_TESTS: [(&str, &str, usize); 4] = [
    ("ATATATATAT", "ATA", 4),
    ("GCCGCCGCC", "GCC", 3),
    ("AAAAAA", "AA", 5),
    ("CGCGCGCG", "GCG", 3),
];

/// Inputs compared against the lenient reverse complement
pub const REVERSE_COMPLEMENT_TESTS: [&str; 9] = [
    "AAAACCCGGT",
    "ATCG",
    "ATATATAT",
    "AGCTTTCGA",
    "acgtacgt",
    "NNNN",
    "",
    "GATTACA",
    "CCCGGGTTTAAA",
];

/// (text, pattern, expected start positions)
pub const PATTERN_MATCHING_TESTS: [(&str, &str, &[usize]); 10] = [
    ("GATATATGCATATACTT", "ATAT", &[1, 3, 9]),
    ("AAAAA", "AA", &[0, 1, 2, 3]),
    ("ACGTACGTACGT", "ACGT", &[0, 4, 8]),
    ("ACACACAC", "ACAC", &[0, 2, 4]),
    ("CCCC", "CCC", &[0, 1]),
    ("AGTCAGTC", "AGT", &[0, 4]),
    ("AGTCAGTCA", "GTCA", &[1, 5]),
    ("AGTCAGTC", "AAAA", &[]),
    ("A", "A", &[0]),
    ("", "A", &[]),
];

/// Genome whose skew values students compute by hand
pub const SKEW_GENOME: &str = "GAGCCACCGCGATA";

/// Minimum-skew positions of the E. coli genome
pub const ECOLI_MINIMUM_SKEW: [i64; 4] = [3923620, 3923621, 3923622, 3923623];

/// (text, pattern, d, expected count)
pub const APPROXIMATE_COUNT_TESTS: [(&str, &str, usize, usize); 6] = [
    ("TTTAGAGCCTTCAGAGG", "GAGG", 2, 4),
    ("AACAAGCTGATAAACATTTAAAGAG", "AAAAA", 1, 4),
    ("AAAAA", "AAAAA", 0, 1),
    ("AAAAAA", "AAA", 0, 4),
    ("AAAAAA", "AAA", 1, 4),
    ("ACGTACGTACGT", "ACG", 1, 3),
];

/// (pattern, d)
pub const NEIGHBORS_TESTS: [(&str, usize); 8] = [
    ("ACG", 1),
    ("ACG", 0),
    ("A", 1),
    ("A", 0),
    ("AT", 2),
    ("GGGG", 1),
    ("TTTT", 2),
    ("AGTC", 3),
];

/// (text, k, d) for the plain mismatch scan
pub const FREQUENT_APPROXIMATE_TESTS: [(&str, usize, usize); 7] = [
    ("ACGTTGCATGTCGCATGATGCATGAGAGCT", 4, 1),
    ("", 4, 1),
    ("AAA", 4, 1),
    ("AAAAAAAAAA", 3, 0),
    ("AAAAAAAAAA", 3, 1),
    ("GATTACA", 3, 1),
    ("ATATATAT", 2, 1),
];

/// (text, k, d) for the reverse-complement scan
pub const FREQUENT_WITH_RC_TESTS: [(&str, usize, usize); 7] = [
    ("ACGTTGCATGTCGCATGATGCATGAGAGCT", 4, 1),
    ("ATATAT", 2, 0),
    ("", 5, 1),
    ("AAA", 4, 1),
    ("AAAAAAAAAA", 3, 1),
    ("GATTACA", 3, 1),
    ("CTAGCTAG", 3, 2),
];

/// Replication-origin window of the E. coli genome, 0-based
pub const ORI_WINDOW_START: usize = 3923620;
pub const ORI_WINDOW_LEN: usize = 500;
pub const ORI_K: usize = 9;
pub const ORI_D: usize = 1;

/// DnaA box searched for in the V. cholerae genome
pub const GENOME_SCAN_PATTERN: &str = "CTTGATCAT";

/// 0-based start positions of `GENOME_SCAN_PATTERN` in V. cholerae
pub const GENOME_SCAN_POSITIONS: [i64; 16] = [
    60039, 98409, 129189, 152283, 152354, 152411, 163207, 197028, 200160, 357976, 376771, 392723,
    532935, 600085, 622755, 1065555,
];

/// Clump parameters: k-mers seen `CLUMP_T` times inside `CLUMP_WINDOW` bases
pub const CLUMP_K: usize = 9;
pub const CLUMP_WINDOW: usize = 500;
pub const CLUMP_T: usize = 3;

/// Distinct (500, 3)-clump 9-mers of the E. coli genome
pub const ECOLI_CLUMPS_COUNT: i64 = 1904;
