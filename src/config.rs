//! Runtime configuration.
//!
//! Environment variables:
//!
//! - `BINGO_SETS_DIR`: directory holding `<name>.txt` sets (default `sets`)
//! - `BINGO_OUTPUT_DIR`: where PDFs are written (default `output`)
//! - `BINGO_DEFAULT_SIZE`: card size offered when none is given (default 5)
//!
//! Command-line flags override the environment.

use std::env;
use std::path::PathBuf;

use crate::types::{DEFAULT_CARD_SIZE, MIN_CARD_SIZE};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BingoConfig {
    pub sets_dir: PathBuf,
    pub output_dir: PathBuf,
    pub default_size: usize,
}

impl Default for BingoConfig {
    fn default() -> Self {
        Self {
            sets_dir: PathBuf::from("sets"),
            output_dir: PathBuf::from("output"),
            default_size: DEFAULT_CARD_SIZE,
        }
    }
}

impl BingoConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an injectable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let non_empty = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let sets_dir = non_empty("BINGO_SETS_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.sets_dir);
        let output_dir = non_empty("BINGO_OUTPUT_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.output_dir);
        let default_size = non_empty("BINGO_DEFAULT_SIZE")
            .and_then(|s| s.parse().ok())
            .filter(|&n: &usize| n >= MIN_CARD_SIZE)
            .unwrap_or(defaults.default_size);

        Self {
            sets_dir,
            output_dir,
            default_size,
        }
    }

    pub fn with_sets_dir(mut self, dir: Option<PathBuf>) -> Self {
        if let Some(dir) = dir {
            self.sets_dir = dir;
        }
        self
    }

    pub fn with_output_dir(mut self, dir: Option<PathBuf>) -> Self {
        if let Some(dir) = dir {
            self.output_dir = dir;
        }
        self
    }
}
