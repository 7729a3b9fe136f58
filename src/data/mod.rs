//! Dataset input
//!
//! Reads the kanji CSV into a `KanjiCollection` and merges scraped enrichment
//! data into it.

pub mod csv;
pub mod loader;

pub use loader::{load, load_str, merge, merge_str, EDITIONS};
