//! Colorization by JLPT level

use std::collections::BTreeMap;

use crate::errors::LookupError;

/// Color source for the glyph of a cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Palette {
    /// One xcolor token per JLPT level
    Levels(BTreeMap<u8, String>),
    /// Same color for every item
    Flat(String),
}

/// Highest JLPT level; 0 means unclassified
pub const MAX_JLPT: u8 = 5;

impl Palette {
    /// Default palette covering levels 0 through 5
    pub fn jlpt_levels() -> Self {
        let colors = [
            (0, "black"),
            (1, "red!80!black"),
            (2, "orange!90!black"),
            (3, "olive"),
            (4, "teal"),
            (5, "blue!70!black"),
        ];
        Palette::Levels(
            colors
                .into_iter()
                .map(|(level, color)| (level, color.to_string()))
                .collect(),
        )
    }

    pub fn flat(color: impl Into<String>) -> Self {
        Palette::Flat(color.into())
    }

    pub fn color(&self, jlpt: u8) -> Result<&str, LookupError> {
        match self {
            Palette::Flat(color) => Ok(color),
            Palette::Levels(levels) => levels
                .get(&jlpt)
                .map(String::as_str)
                .ok_or(LookupError::UnknownJlpt(jlpt)),
        }
    }

    /// True when every level 0..=MAX_JLPT has a color
    pub fn covers_all_levels(&self) -> bool {
        match self {
            Palette::Flat(_) => true,
            Palette::Levels(levels) => (0..=MAX_JLPT).all(|l| levels.contains_key(&l)),
        }
    }
}
