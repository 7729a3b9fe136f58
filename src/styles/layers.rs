//! Reusable style layers
//!
//! A layer overrides a subset of `Style` fields. Layers come in families that
//! touch disjoint fields, so any combination of one layer per family merges
//! without conflict:
//!
//! - size: `small`, `a4` (geometry and paper)
//! - content: `minimalist` (header/footer)
//! - colorization: `monochrome` (palette)
//!
//! `solutions` switches the cell content to the solutions-table layout.

use crate::renderers::latex::templates;
use crate::styles::Palette;

/// Partial style. `None` leaves the field to lower-priority layers or the base.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleLayer {
    pub columns: Option<usize>,
    /// `Some(None)` forces row-major (unpaged) layout
    pub rows_per_page: Option<Option<usize>>,
    pub cell_width: Option<String>,
    pub vertical_padding: Option<String>,
    pub grid: Option<bool>,
    pub palette: Option<Palette>,
    pub kanji_scale: Option<String>,
    pub paper: Option<String>,
    pub margin: Option<String>,
    pub font: Option<String>,
    pub bold_font: Option<String>,
    pub cell_template: Option<String>,
    pub header_template: Option<String>,
    pub footer_template: Option<String>,
}

impl StyleLayer {
    /// Smaller cells, more of them per page
    pub fn small() -> Self {
        Self {
            columns: Some(12),
            rows_per_page: Some(Some(21)),
            cell_width: Some("1.8cm".to_string()),
            vertical_padding: Some("0.15cm".to_string()),
            kanji_scale: Some(r"\LARGE".to_string()),
            ..Self::default()
        }
    }

    pub fn a4() -> Self {
        Self {
            columns: Some(6),
            rows_per_page: Some(Some(10)),
            paper: Some("a4paper".to_string()),
            margin: Some("1cm".to_string()),
            ..Self::default()
        }
    }

    /// Glyph only: no header, no footer
    pub fn minimalist() -> Self {
        Self {
            header_template: Some(String::new()),
            footer_template: Some(String::new()),
            ..Self::default()
        }
    }

    pub fn monochrome() -> Self {
        Self {
            palette: Some(Palette::flat("black")),
            ..Self::default()
        }
    }

    /// "id (kanji): keyword" cells in one continuous table
    pub fn solutions() -> Self {
        Self {
            columns: Some(6),
            rows_per_page: Some(None),
            cell_width: Some("4cm".to_string()),
            vertical_padding: Some("0.1cm".to_string()),
            palette: Some(Palette::flat("black")),
            kanji_scale: Some(r"\normalsize".to_string()),
            paper: Some("a4paper".to_string()),
            cell_template: Some(templates::SOLUTIONS_CELL.to_string()),
            header_template: Some(String::new()),
            footer_template: Some(String::new()),
            ..Self::default()
        }
    }

    /// Names of the fields this layer sets, in declaration order
    #[cfg(test)]
    fn overridden_fields(&self) -> Vec<&'static str> {
        let flags = [
            ("columns", self.columns.is_some()),
            ("rows_per_page", self.rows_per_page.is_some()),
            ("cell_width", self.cell_width.is_some()),
            ("vertical_padding", self.vertical_padding.is_some()),
            ("grid", self.grid.is_some()),
            ("palette", self.palette.is_some()),
            ("kanji_scale", self.kanji_scale.is_some()),
            ("paper", self.paper.is_some()),
            ("margin", self.margin.is_some()),
            ("font", self.font.is_some()),
            ("bold_font", self.bold_font.is_some()),
            ("cell_template", self.cell_template.is_some()),
            ("header_template", self.header_template.is_some()),
            ("footer_template", self.footer_template.is_some()),
        ];
        flags
            .into_iter()
            .filter_map(|(name, set)| set.then_some(name))
            .collect()
    }
}
