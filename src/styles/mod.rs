//! Styles
//!
//! A `Style` is a flat record of every rendering parameter. Styles are
//! composed from a base plus `StyleLayer`s (see `layers`), and looked up by
//! name through the `StyleRegistry`.

pub mod layers;
pub mod palette;
pub mod registry;

pub use layers::StyleLayer;
pub use palette::Palette;
pub use registry::{resolve_style, style_names, StyleRegistry, REGISTRY};

use crate::renderers::latex::templates;

/// Complete set of rendering parameters. Every field is always set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Style {
    pub name: String,
    pub columns: usize,
    /// `None` renders one continuous row-major table
    pub rows_per_page: Option<usize>,
    pub cell_width: String,
    pub vertical_padding: String,
    pub grid: bool,
    pub palette: Palette,
    /// LaTeX size command applied to the glyph, e.g. `\Huge`
    pub kanji_scale: String,
    pub paper: String,
    pub margin: String,
    pub font: String,
    pub bold_font: String,
    pub cell_template: String,
    /// Empty template suppresses the header
    pub header_template: String,
    /// Empty template suppresses the footer
    pub footer_template: String,
}

impl Style {
    /// The base poster style every built-in style derives from.
    pub fn base() -> Self {
        Self {
            name: "default".to_string(),
            columns: 9,
            rows_per_page: Some(15),
            cell_width: "2.5cm".to_string(),
            vertical_padding: "0.3cm".to_string(),
            grid: true,
            palette: Palette::jlpt_levels(),
            kanji_scale: r"\Huge".to_string(),
            paper: "a3paper".to_string(),
            margin: "1cm".to_string(),
            font: "Aozora Mincho".to_string(),
            bold_font: "AozoraMincho-bold".to_string(),
            cell_template: templates::POSTER_CELL.to_string(),
            header_template: templates::POSTER_HEADER.to_string(),
            footer_template: templates::POSTER_FOOTER.to_string(),
        }
    }

    /// Apply `layers` on top of `base`. For each field the first layer that
    /// sets it wins; fields no layer sets keep the base value.
    pub fn merged(name: impl Into<String>, base: &Style, layers: &[&StyleLayer]) -> Self {
        macro_rules! pick {
            ($field:ident) => {
                layers
                    .iter()
                    .find_map(|layer| layer.$field.clone())
                    .unwrap_or_else(|| base.$field.clone())
            };
        }

        Self {
            name: name.into(),
            columns: pick!(columns),
            rows_per_page: pick!(rows_per_page),
            cell_width: pick!(cell_width),
            vertical_padding: pick!(vertical_padding),
            grid: pick!(grid),
            palette: pick!(palette),
            kanji_scale: pick!(kanji_scale),
            paper: pick!(paper),
            margin: pick!(margin),
            font: pick!(font),
            bold_font: pick!(bold_font),
            cell_template: pick!(cell_template),
            header_template: pick!(header_template),
            footer_template: pick!(footer_template),
        }
    }

    pub fn has_header(&self) -> bool {
        !self.header_template.is_empty()
    }

    pub fn has_footer(&self) -> bool {
        !self.footer_template.is_empty()
    }
}

impl Default for Style {
    fn default() -> Self {
        Self::base()
    }
}
