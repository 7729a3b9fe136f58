//! Defaults and run settings
//!
//! `Settings` starts from the defaults below, can be loaded from a JSON file,
//! and is then overridden by command line flags.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::errors::{ConfigError, Result};

/// Kanji dataset read by `poster`, `solutions` and `scrape`
pub const DEFAULT_INPUT: &str = "data/kanjis.csv";

/// Where `scrape` stores pages and `parse` reads them
pub const DEFAULT_RAW_DIR: &str = "scrape/raw";

/// Enrichment CSV written by `parse`
pub const DEFAULT_ENRICHMENT: &str = "scrape/tangorin.csv";

pub const DEFAULT_POSTER_OUTPUT: &str = "build/poster.tex";
pub const DEFAULT_SOLUTIONS_OUTPUT: &str = "build/solutions.tex";

pub const DEFAULT_STYLE: &str = "default";
pub const DEFAULT_SOLUTIONS_STYLE: &str = "solutions";

pub const DEFAULT_EDITION: u32 = 6;

/// Seconds to wait after each downloaded page
pub const DEFAULT_DELAY_SECS: f64 = 3.0;

pub const DEFAULT_BASE_URL: &str = "https://tangorin.com/kanji?search=";
pub const USER_AGENT: &str = concat!("kanji-poster/", env!("CARGO_PKG_VERSION"));
pub const HTTP_TIMEOUT_SECS: u64 = 30;

/// External LaTeX compiler (needs xeCJK support)
pub const DEFAULT_COMPILER: &str = "xelatex";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub input: PathBuf,
    pub enrichment: Option<PathBuf>,
    pub edition: u32,
    pub style: String,
    /// Overrides the style's column count
    pub columns: Option<usize>,
    pub output: PathBuf,
    /// Run the compiler on the written document
    pub render: bool,
    pub compiler: String,
    pub raw_dir: PathBuf,
    pub delay_secs: f64,
    /// Re-download pages that already exist
    pub force: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            enrichment: None,
            edition: DEFAULT_EDITION,
            style: DEFAULT_STYLE.to_string(),
            columns: None,
            output: PathBuf::from(DEFAULT_POSTER_OUTPUT),
            render: true,
            compiler: DEFAULT_COMPILER.to_string(),
            raw_dir: PathBuf::from(DEFAULT_RAW_DIR),
            delay_secs: DEFAULT_DELAY_SECS,
            force: false,
        }
    }
}

impl Settings {
    /// Load settings from JSON; missing keys keep their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&text)
    }

    pub fn from_json_str(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Wait between downloads. Negative values mean no wait; values too
    /// large for a `Duration` (including infinity) are rejected.
    pub fn delay(&self) -> std::result::Result<Duration, ConfigError> {
        parse_delay(self.delay_secs)
    }
}

pub fn parse_delay(secs: f64) -> std::result::Result<Duration, ConfigError> {
    Duration::try_from_secs_f64(secs.max(0.0))
        .map_err(|_| ConfigError::InvalidArgument(format!("Invalid delay: {secs} seconds")))
}
