//! Grader configuration

use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Environment variable holding the optional shuffle seed
pub const SEED_VAR: &str = "COMPBIO_GRADER_SEED";
/// Environment variable overriding the reward acronym
pub const WORD_VAR: &str = "COMPBIO_GRADER_WORD";
/// Environment variable pointing at the E. coli genome text
pub const ECOLI_VAR: &str = "COMPBIO_GRADER_ECOLI";
/// Environment variable pointing at the V. cholerae genome text
pub const VIBRIO_VAR: &str = "COMPBIO_GRADER_VIBRIO";

pub const DEFAULT_WORD: &str = "REPLICATOR";

/// Global grader settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraderConfig {
    /// Acronym whose shuffled letters are awarded per exercise
    pub word: String,
    /// Seed for a reproducible shuffle; a fresh random one is used when unset
    pub seed: Option<String>,
    pub ecoli_path: Option<PathBuf>,
    pub vibrio_path: Option<PathBuf>,
}

impl Default for GraderConfig {
    fn default() -> Self {
        Self {
            word: DEFAULT_WORD.to_string(),
            seed: None,
            ecoli_path: None,
            vibrio_path: None,
        }
    }
}

impl GraderConfig {
    /// Defaults overridden by any `COMPBIO_GRADER_*` variables that are set.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary variable source. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(word) = get(WORD_VAR) {
            config.word = word.trim().to_ascii_uppercase();
        }
        config.seed = get(SEED_VAR);
        config.ecoli_path = get(ECOLI_VAR).map(PathBuf::from);
        config.vibrio_path = get(VIBRIO_VAR).map(PathBuf::from);
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = GraderConfig::from_lookup(|_| None);
        assert_eq!(config, GraderConfig::default());
        assert_eq!(config.word, "REPLICATOR");
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = HashMap::from([
            (SEED_VAR, "42"),
            (WORD_VAR, " protein "),
            (ECOLI_VAR, "data/E_coli.txt"),
            (VIBRIO_VAR, ""),
        ]);
        let config = GraderConfig::from_lookup(|k| vars.get(k).map(|v| v.to_string()));
        assert_eq!(config.word, "PROTEIN");
        assert_eq!(config.seed.as_deref(), Some("42"));
        assert_eq!(config.ecoli_path, Some(PathBuf::from("data/E_coli.txt")));
        assert!(config.vibrio_path.is_none());
    }

    #[test]
    fn test_serde_roundtrip() {
        let config = GraderConfig {
            seed: Some("7".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        let back: GraderConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
