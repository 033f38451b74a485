//! kmer_grader - self-check runner
//!
//! Grades the crate's own reference implementations against every hidden
//! test table, plus the genome exercises when genome files are available.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use mimalloc::MiMalloc;

use kmer_grader::grader::{
    check_approximate_pattern_count, check_clumps_count, check_ecoli_ori, check_frequent_words_approximate,
    check_frequent_words_with_rc, check_genome_scan, check_minimum_skew, check_neighbors,
    check_pattern_count, check_pattern_matching, check_reverse_complement, check_skew, init_session,
    session_word, Gradebook, GraderConfig, CLUMP_K, CLUMP_T, CLUMP_WINDOW, GENOME_SCAN_PATTERN, ORI_D,
    ORI_K, ORI_WINDOW_LEN, ORI_WINDOW_START, SKEW_GENOME,
};
use kmer_grader::{
    approximate_pattern_count, find_clumps, frequent_words_approximate,
    frequent_words_with_mismatches_and_rc, minimum_skew, neighbors, pattern_count, pattern_matching,
    read_genome_file, reverse_complement_lenient, scan_frequent_words, skew, ScanParams, ScoringMode,
};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

/// Self-check runner for the k-mer grading exercises
#[derive(Parser, Debug)]
#[command(name = "kmer_grader", about = "Grades the reference k-mer algorithms against the hidden tables")]
struct Cli {
    /// Print the gradebook as JSON instead of pass/fail lines.
    #[arg(long)]
    json: bool,

    /// Grade without awarding reward letters.
    #[arg(long)]
    practice: bool,

    /// Seed for a reproducible reward-word shuffle.
    #[arg(long, value_name = "SEED")]
    seed: Option<String>,

    /// Reward acronym whose letters are awarded per exercise.
    #[arg(long, value_name = "WORD")]
    word: Option<String>,

    /// E. coli genome (plain text or FASTA).
    #[arg(long, value_name = "PATH")]
    ecoli: Option<PathBuf>,

    /// V. cholerae genome (plain text or FASTA).
    #[arg(long, value_name = "PATH")]
    vibrio: Option<PathBuf>,
}

impl Cli {
    /// Layer the flags that were given over `config`.
    fn apply(&self, mut config: GraderConfig) -> GraderConfig {
        if let Some(word) = self.word.as_deref().map(str::trim).filter(|w| !w.is_empty()) {
            config.word = word.to_ascii_uppercase();
        }
        if self.seed.is_some() {
            config.seed = self.seed.clone();
        }
        if self.ecoli.is_some() {
            config.ecoli_path = self.ecoli.clone();
        }
        if self.vibrio.is_some() {
            config.vibrio_path = self.vibrio.clone();
        }
        config
    }
}

fn grade_exercises(book: &mut Gradebook) {
    book.record(check_pattern_count(pattern_count));
    book.record(check_reverse_complement(reverse_complement_lenient));
    book.record(check_pattern_matching(|text, pattern| pattern_matching(pattern, text)));
    book.record(check_skew(&skew(SKEW_GENOME)));
    book.record(check_approximate_pattern_count(|text, pattern, d| {
        approximate_pattern_count(text, pattern, d).unwrap_or(0)
    }));
    book.record(check_neighbors(|pattern, d| neighbors(pattern, d).unwrap_or_default()));
    book.record(check_frequent_words_approximate(|text, k, d| {
        frequent_words_approximate(text, k, d).unwrap_or_default()
    }));
    book.record(check_frequent_words_with_rc(|text, k, d| {
        frequent_words_with_mismatches_and_rc(text, k, d).unwrap_or_default()
    }));
}

fn grade_ecoli(book: &mut Gradebook, path: &Path) {
    let genome = match read_genome_file(path) {
        Ok(genome) => genome.sequence,
        Err(e) => {
            log::error!("skipping E. coli exercises: {}", e);
            return;
        }
    };

    book.record(check_minimum_skew(&minimum_skew(genome.as_str())));

    match genome.subsequence(ORI_WINDOW_START, ORI_WINDOW_START + ORI_WINDOW_LEN) {
        Ok(window) => {
            let params = ScanParams::new(ORI_K, ORI_D, ScoringMode::ReverseComplement);
            let words = scan_frequent_words(&window, &params).words;
            book.record(check_ecoli_ori(&words, &genome));
        }
        Err(e) => log::error!("skipping ori exercise: {}", e),
    }

    let clumps = find_clumps(genome.as_str(), CLUMP_K, CLUMP_WINDOW, CLUMP_T);
    book.record(check_clumps_count(&clumps.len()));
}

fn grade_vibrio(book: &mut Gradebook, path: &Path) {
    match read_genome_file(path) {
        Ok(genome) => {
            let positions = pattern_matching(GENOME_SCAN_PATTERN, genome.sequence.as_str());
            book.record(check_genome_scan(&positions));
        }
        Err(e) => log::error!("skipping genome scan: {}", e),
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let config = cli.apply(GraderConfig::from_env());

    init_session(&config);
    let mut book = Gradebook::new("kmer_grader self-check", session_word().as_string());
    if cli.json {
        book = book.quiet();
    }
    if cli.practice {
        book = book.practice();
    }

    grade_exercises(&mut book);
    if let Some(path) = &config.ecoli_path {
        grade_ecoli(&mut book, path);
    }
    if let Some(path) = &config.vibrio_path {
        grade_vibrio(&mut book, path);
    }

    if cli.json {
        match serde_json::to_string_pretty(&book) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("failed to serialize report: {}", e);
                return ExitCode::FAILURE;
            }
        }
    } else {
        book.print_summary();
    }

    if book.all_passed() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_environment() {
        let env = GraderConfig {
            word: "ORIGIN".to_string(),
            seed: Some("1".to_string()),
            ecoli_path: Some(PathBuf::from("env_ecoli.txt")),
            vibrio_path: None,
        };
        let cli = Cli::try_parse_from([
            "kmer_grader",
            "--json",
            "--practice",
            "--seed",
            "42",
            "--word",
            "dnaa",
            "--vibrio",
            "vibrio.fa",
        ])
        .unwrap();
        assert!(cli.json);
        assert!(cli.practice);

        let config = cli.apply(env);
        assert_eq!(config.word, "DNAA");
        assert_eq!(config.seed.as_deref(), Some("42"));
        assert_eq!(config.ecoli_path, Some(PathBuf::from("env_ecoli.txt")));
        assert_eq!(config.vibrio_path, Some(PathBuf::from("vibrio.fa")));
    }

    #[test]
    fn test_no_flags_keeps_environment() {
        let cli = Cli::try_parse_from(["kmer_grader"]).unwrap();
        assert!(!cli.json);
        assert!(!cli.practice);
        let env = GraderConfig::default();
        assert_eq!(cli.apply(env.clone()), env);
    }

    #[test]
    fn test_rejects_unknown_and_incomplete_flags() {
        assert!(Cli::try_parse_from(["kmer_grader", "--verbose"]).is_err());
        assert!(Cli::try_parse_from(["kmer_grader", "--seed"]).is_err());
    }
}
