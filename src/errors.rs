//! Error types for loading, styling and rendering
//!
//! Configuration problems, bad input data and palette lookups each get their
//! own enum so callers can tell them apart; `PosterError` wraps all of them
//! together with I/O, template and network failures.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type
#[derive(Debug, Error)]
pub enum PosterError {
    /// Invalid configuration (style, layout, edition, arguments)
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Malformed or inconsistent input data
    #[error("data error: {0}")]
    Data(#[from] DataError),

    /// A style's palette does not cover an item's level
    #[error("lookup error: {0}")]
    Lookup(#[from] LookupError),

    /// Mustache template failed to compile or render
    #[error("template error: {0}")]
    Template(#[from] mustache::Error),

    /// Embedded JSON payload could not be parsed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// File system error (reading input, persisting output)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP request failed; not retried
    #[error("network error fetching {url}: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// External document compiler failed
    #[error("document compiler failed: {0}")]
    Compile(String),
}

/// Configuration errors. Always surfaced, never defaulted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("unknown style '{name}' (available: {available})")]
    UnknownStyle { name: String, available: String },

    #[error("column count must be at least 1, got {0}")]
    InvalidColumns(usize),

    #[error("rows per page must be at least 1, got {0}")]
    InvalidRowsPerPage(usize),

    #[error("style '{0}' has no color for some JLPT level")]
    IncompletePalette(String),

    #[error("unknown edition {0} (supported: 5, 6)")]
    UnknownEdition(u32),

    #[error("{0}")]
    InvalidArgument(String),
}

/// Input data errors, raised at load time before any rendering
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DataError {
    #[error("file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("missing required column '{column}' in {}", .path.display())]
    MissingColumn { column: String, path: PathBuf },

    #[error("kanji '{0}' appears more than once")]
    DuplicateGlyph(String),

    /// `line` is the 1-based line in the source file, or the item position
    /// for collections built in memory
    #[error("line {line}: invalid value '{value}' in column '{column}'")]
    Parse {
        line: usize,
        column: String,
        value: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("palette has no color for JLPT level {0}")]
    UnknownJlpt(u8),
}

pub type Result<T> = std::result::Result<T, PosterError>;
