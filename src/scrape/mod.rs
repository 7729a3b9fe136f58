//! Dictionary scraping: download pages, then pull JLPT level and frequency
//! out of them into an enrichment CSV.

pub mod extractor;
pub mod scraper;

pub use extractor::{extract, extract_dir, write_enrichment_csv, PartialRecord};
pub use scraper::Scraper;
