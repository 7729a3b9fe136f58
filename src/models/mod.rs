//! Data models
//!
//! A `Kanji` is one record of the dataset; a `KanjiCollection` is the ordered,
//! read-only record source every renderer consumes.

pub mod kanji;
pub mod collection;

pub use kanji::{codepoint_label, Kanji};
pub use collection::KanjiCollection;
