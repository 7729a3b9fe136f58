//! Single kanji record

use serde::{Deserialize, Serialize};

/// One kanji with its identity, readings and optional enrichment data
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Kanji {
    /// The glyph itself; also the identity key within a collection
    pub kanji: String,

    /// Edition-specific ordinal (0 = unassigned)
    #[serde(default)]
    pub id: u32,

    /// Codepoint label, e.g. "u4e00"
    pub utf: String,

    #[serde(default)]
    pub components: Vec<String>,

    #[serde(default)]
    pub on_reading: Vec<String>,

    #[serde(default)]
    pub kun_reading: Vec<String>,

    /// Meaning keyword, shown in solutions tables
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,

    /// JLPT level 1-5, 0 when unclassified
    #[serde(default)]
    pub jlpt: u8,

    /// Frequency rank, `None` when unknown
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub freq: Option<u32>,
}

impl Kanji {
    /// Create a record with the given glyph and id; the codepoint label is derived.
    pub fn new(kanji: impl Into<String>, id: u32) -> Self {
        let kanji = kanji.into();
        let utf = codepoint_label(&kanji);
        Self {
            kanji,
            id,
            utf,
            components: Vec::new(),
            on_reading: Vec::new(),
            kun_reading: Vec::new(),
            keyword: None,
            jlpt: 0,
            freq: None,
        }
    }

    pub fn with_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keyword = Some(keyword.into());
        self
    }

    pub fn with_jlpt(mut self, jlpt: u8) -> Self {
        self.jlpt = jlpt;
        self
    }

    pub fn with_freq(mut self, freq: Option<u32>) -> Self {
        self.freq = freq;
        self
    }

    /// Frequency rank suitable for display: unknown and zero ranks are hidden.
    pub fn display_freq(&self) -> Option<u32> {
        self.freq.filter(|f| *f > 0)
    }
}

/// "u" followed by the lowercase hex codepoint of the first character.
pub fn codepoint_label(glyph: &str) -> String {
    match glyph.chars().next() {
        Some(c) => format!("u{:x}", c as u32),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codepoint_label() {
        assert_eq!(codepoint_label("一"), "u4e00");
        assert_eq!(codepoint_label("語"), "u8a9e");
        assert_eq!(codepoint_label(""), "");
    }

    #[test]
    fn test_new_derives_utf() {
        let k = Kanji::new("日", 12);
        assert_eq!(k.utf, "u65e5");
        assert_eq!(k.id, 12);
        assert_eq!(k.jlpt, 0);
        assert!(k.freq.is_none());
    }

    #[test]
    fn test_display_freq_hides_zero() {
        assert_eq!(Kanji::new("日", 1).with_freq(Some(0)).display_freq(), None);
        assert_eq!(Kanji::new("日", 1).with_freq(None).display_freq(), None);
        assert_eq!(Kanji::new("日", 1).with_freq(Some(7)).display_freq(), Some(7));
    }
}
