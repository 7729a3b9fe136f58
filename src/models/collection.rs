//! Ordered record source

use std::collections::HashSet;

use crate::errors::DataError;
use crate::models::Kanji;

/// Ordered, immutable collection of kanji.
///
/// Glyphs are guaranteed non-empty and unique. Indexed access is what the
/// paginator relies on; iteration order is the order the records were given.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KanjiCollection {
    items: Vec<Kanji>,
}

impl KanjiCollection {
    /// Build a collection, rejecting empty and duplicate glyphs.
    pub fn new(items: Vec<Kanji>) -> Result<Self, DataError> {
        let mut seen = HashSet::with_capacity(items.len());
        for (i, item) in items.iter().enumerate() {
            if item.kanji.is_empty() {
                return Err(DataError::Parse {
                    line: i + 1,
                    column: "kanji".to_string(),
                    value: String::new(),
                });
            }
            if !seen.insert(item.kanji.as_str()) {
                return Err(DataError::DuplicateGlyph(item.kanji.clone()));
            }
        }
        Ok(Self { items })
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Kanji> {
        self.items.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Kanji> {
        self.items.iter()
    }

    /// Find a record by glyph
    pub fn find(&self, glyph: &str) -> Option<&Kanji> {
        self.items.iter().find(|k| k.kanji == glyph)
    }

    /// All glyphs in collection order
    pub fn glyphs(&self) -> Vec<&str> {
        self.items.iter().map(|k| k.kanji.as_str()).collect()
    }
}

impl<'a> IntoIterator for &'a KanjiCollection {
    type Item = &'a Kanji;
    type IntoIter = std::slice::Iter<'a, Kanji>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
