//! Kanji poster generator
//!
//! Loads a kanji dataset, optionally enriched with scraped JLPT levels and
//! frequency ranks, and renders it as a paginated LaTeX grid (poster) or
//! table (solutions) in one of several composable styles.

pub mod cli;
pub mod config;
pub mod data;
pub mod errors;
pub mod logging;
pub mod models;
pub mod renderers;
pub mod runner;
pub mod scrape;
pub mod styles;

// Re-export commonly used types
pub use errors::{ConfigError, DataError, LookupError, PosterError, Result};
pub use models::{Kanji, KanjiCollection};
pub use renderers::{persist, render, GridLayout, KanjiPoster, LatexRenderer, Slot};
pub use styles::{resolve_style, Style, StyleLayer, StyleRegistry};
