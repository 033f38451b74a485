//! Genome loading from plain text or FASTA

use std::fs;
use std::path::Path;

use super::alphabet::Sequence;
use crate::error::{GraderError, Result};

/// Parsed genome with its header name, if the input had one
#[derive(Debug, Clone)]
pub struct GenomeData {
    pub name: Option<String>,
    pub sequence: Sequence,
}

/// Parse genome text.
///
/// FASTA input keeps only the first record. Headerless input is treated as
/// one sequence split across lines. Whitespace is dropped and bases are
/// uppercased; any other character is an error.
pub fn parse_genome_text(text: &str) -> Result<GenomeData> {
    let mut name = None;
    let mut raw = String::with_capacity(text.len());

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(header) = line.strip_prefix('>') {
            if name.is_some() {
                // Only one genome per file
                break;
            }
            name = Some(header.trim().to_string());
        } else {
            raw.extend(line.chars().filter(|c| !c.is_whitespace()));
        }
    }

    if raw.is_empty() {
        return Err(GraderError::EmptyGenome);
    }

    Ok(GenomeData {
        name,
        sequence: Sequence::new(&raw)?,
    })
}

/// Read and parse a genome file.
pub fn read_genome_file(path: impl AsRef<Path>) -> Result<GenomeData> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let genome = parse_genome_text(&text)?;
    log::info!(
        "loaded genome {} ({} bp) from {}",
        genome.name.as_deref().unwrap_or("<unnamed>"),
        genome.sequence.len(),
        path.display()
    );
    Ok(genome)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_text() {
        let data = parse_genome_text("acgt\nACGT \n\n  ttaa\n").unwrap();
        assert!(data.name.is_none());
        assert_eq!(data.sequence.as_str(), "ACGTACGTTTAA");
    }

    #[test]
    fn test_parse_fasta_first_record() {
        let fasta = ">chr1 E. coli\nACGT\nACGT\n>chr2\nTTTT";
        let data = parse_genome_text(fasta).unwrap();
        assert_eq!(data.name.as_deref(), Some("chr1 E. coli"));
        assert_eq!(data.sequence.as_str(), "ACGTACGT");
    }

    #[test]
    fn test_parse_rejects_empty() {
        assert!(matches!(parse_genome_text(""), Err(GraderError::EmptyGenome)));
        assert!(matches!(parse_genome_text(">only\n"), Err(GraderError::EmptyGenome)));
    }

    #[test]
    fn test_parse_rejects_invalid_base() {
        assert!(matches!(
            parse_genome_text("ACGTN"),
            Err(GraderError::InvalidBase { base: 'N', position: 4 })
        ));
    }

    #[test]
    fn test_read_missing_file() {
        let err = read_genome_file("/nonexistent/E_coli.txt").unwrap_err();
        assert!(matches!(err, GraderError::Io(_)));
    }

    #[test]
    fn test_read_genome_file() {
        let path = std::env::temp_dir().join(format!("kmer_grader_genome_{}.txt", std::process::id()));
        fs::write(&path, "GATTACA\nGATTACA\n").unwrap();
        let data = read_genome_file(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(data.sequence.len(), 14);
    }
}
