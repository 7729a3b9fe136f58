//! Cell formatting

use crate::errors::Result;
use crate::models::Kanji;
use crate::renderers::latex::templates::{self, CellContext};
use crate::styles::Style;

/// Turns one item, or `None` for a padding slot, into cell markup.
///
/// Templates are compiled once per formatter. Header and footer are
/// optional: a style with an empty template has none, and the cell body
/// simply skips them.
pub struct CellFormatter<'a> {
    style: &'a Style,
    columns: usize,
    cell: mustache::Template,
    header: Option<mustache::Template>,
    footer: Option<mustache::Template>,
}

impl<'a> CellFormatter<'a> {
    pub fn new(style: &'a Style, columns: usize) -> Result<Self> {
        let optional = |source: &str| -> Result<Option<mustache::Template>> {
            if source.is_empty() {
                Ok(None)
            } else {
                Ok(Some(templates::compile(source)?))
            }
        };

        Ok(Self {
            style,
            columns,
            cell: templates::compile(&style.cell_template)?,
            header: optional(&style.header_template)?,
            footer: optional(&style.footer_template)?,
        })
    }

    /// Cell content without its trailing separator
    pub fn format(&self, item: Option<&Kanji>, _column: usize) -> Result<String> {
        let Some(kanji) = item else {
            return Ok(String::new());
        };

        let color = self.style.palette.color(kanji.jlpt)?;
        let mut context = CellContext::builder(kanji)
            .color(color)
            .geometry(
                &self.style.cell_width,
                &self.style.vertical_padding,
                &self.style.kanji_scale,
            )
            .build();

        context.set_header(self.header_fragment(&context)?);
        context.set_footer(self.footer_fragment(&context)?);

        Ok(templates::render(&self.cell, &context)?)
    }

    pub fn header_fragment(&self, context: &CellContext) -> Result<String> {
        match &self.header {
            Some(template) => Ok(templates::render(template, context)?),
            None => Ok(String::new()),
        }
    }

    pub fn footer_fragment(&self, context: &CellContext) -> Result<String> {
        match &self.footer {
            Some(template) => Ok(templates::render(template, context)?),
            None => Ok(String::new()),
        }
    }

    /// Column separator after the cell, or the row end after the last column
    pub fn separator(&self, column: usize) -> &'static str {
        if column + 1 < self.columns {
            " &\n"
        } else if self.style.grid {
            " \\\\ \\hline\n"
        } else {
            " \\\\\n"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::{LookupError, PosterError};
    use crate::styles::{Palette, Style, StyleLayer};

    #[test]
    fn test_padding_is_empty() {
        let style = Style::base();
        let formatter = CellFormatter::new(&style, 4).unwrap();
        assert_eq!(formatter.format(None, 2).unwrap(), "");
    }

    #[test]
    fn test_separators() {
        let style = Style::base();
        let formatter = CellFormatter::new(&style, 3).unwrap();
        assert_eq!(formatter.separator(0), " &\n");
        assert_eq!(formatter.separator(1), " &\n");
        assert_eq!(formatter.separator(2), " \\\\ \\hline\n");

        let mut plain = Style::base();
        plain.grid = false;
        let formatter = CellFormatter::new(&plain, 3).unwrap();
        assert_eq!(formatter.separator(2), " \\\\\n");
    }

    #[test]
    fn test_poster_cell_content() {
        let style = Style::base();
        let formatter = CellFormatter::new(&style, 4).unwrap();
        let kanji = Kanji::new("日", 12).with_jlpt(3).with_freq(Some(1));
        let cell = formatter.format(Some(&kanji), 0).unwrap();
        assert!(cell.starts_with(r"\begin{minipage}{2.5cm}"));
        assert!(cell.contains(r"\textcolor{olive}{日}"));
        assert!(cell.contains(r"{\tiny \#1\hfill N3}"));
        assert!(cell.contains(r"{\footnotesize 12 u65e5}"));
        assert!(cell.ends_with(r"\end{minipage}"));
    }

    #[test]
    fn test_minimalist_cell_has_no_header_or_footer() {
        let style = Style::merged("m", &Style::base(), &[&StyleLayer::minimalist()]);
        let formatter = CellFormatter::new(&style, 4).unwrap();
        let kanji = Kanji::new("日", 12).with_freq(Some(1));
        let cell = formatter.format(Some(&kanji), 0).unwrap();
        assert!(!cell.contains(r"\tiny"));
        assert!(!cell.contains(r"\footnotesize"));
        assert!(cell.contains(r"\textcolor{black}{日}"));
        assert!(cell.contains(r"\begin{minipage}"));
    }

    #[test]
    fn test_unknown_level_is_lookup_error() {
        let mut style = Style::base();
        style.palette = Palette::Levels([(0, "black".to_string())].into_iter().collect());
        let formatter = CellFormatter::new(&style, 4).unwrap();
        let err = formatter.format(Some(&Kanji::new("日", 1).with_jlpt(2)), 0).unwrap_err();
        assert!(matches!(err, PosterError::Lookup(LookupError::UnknownJlpt(2))));
    }

    #[test]
    fn test_solutions_cell_escapes_keyword() {
        let style = Style::merged("s", &Style::base(), &[&StyleLayer::solutions()]);
        let formatter = CellFormatter::new(&style, 6).unwrap();
        let kanji = Kanji::new("日", 12).with_keyword("day & sun");
        let cell = formatter.format(Some(&kanji), 0).unwrap();
        assert!(cell.contains(r"12 ({\normalsize \textcolor{black}{日}}): day \& sun"));
    }
}
