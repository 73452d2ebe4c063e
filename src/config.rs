use std::collections::HashSet;
use std::env;
use std::path::PathBuf;

use anyhow::Result;

use crate::analysis::lexicon;

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy. Everything
/// has a default — the tool works out of the box against ./hemeroteca.db.
pub struct Config {
    /// Path to the SQLite archive (HEMEROTECA_DB_PATH).
    pub db_path: String,
    /// Optional newline-separated file extending the false-positive name
    /// list for actor extraction (HEMEROTECA_FALSE_POSITIVES).
    pub false_positives_path: Option<PathBuf>,
}

impl Config {
    pub fn load() -> Result<Self> {
        Ok(Self {
            db_path: env::var("HEMEROTECA_DB_PATH")
                .unwrap_or_else(|_| "./hemeroteca.db".to_string()),
            false_positives_path: env::var("HEMEROTECA_FALSE_POSITIVES")
                .ok()
                .map(PathBuf::from),
        })
    }

    /// The false-positive set for actor extraction: the built-in defaults,
    /// extended by the configured file when one is set.
    pub fn false_positives(&self) -> Result<HashSet<String>> {
        let mut set = lexicon::default_false_positives();
        if let Some(path) = &self.false_positives_path {
            set.extend(lexicon::load_false_positives(path)?);
        }
        Ok(set)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_extension_file() {
        let config = Config {
            db_path: "./hemeroteca.db".to_string(),
            false_positives_path: None,
        };
        let fp = config.false_positives().unwrap();
        assert!(fp.contains("Estados Unidos"));
    }

    #[test]
    fn test_missing_extension_file_is_an_error() {
        let config = Config {
            db_path: "./hemeroteca.db".to_string(),
            false_positives_path: Some(PathBuf::from("/nonexistent/fp.txt")),
        };
        assert!(config.false_positives().is_err());
    }
}
