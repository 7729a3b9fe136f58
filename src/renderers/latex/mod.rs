//! LaTeX grid document rendering
//!
//! Produces a complete xeCJK/longtable document from a record source and a
//! style. Output is deterministic: the same collection and style always give
//! byte-identical text.
//!
//! # Basic Usage
//!
//! ```ignore
//! use kanji_poster::renderers::latex::{render, persist};
//! use kanji_poster::styles::resolve_style;
//!
//! let style = resolve_style("minimalist_a4")?;
//! let text = render(&collection, style)?;
//! persist(&text, "build/poster.tex")?;
//! ```

pub mod cell;
pub mod poster;
pub mod templates;

pub use cell::CellFormatter;
pub use poster::KanjiPoster;

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::errors::Result;
use crate::models::{Kanji, KanjiCollection};
use crate::renderers::paginator::GridLayout;
use crate::styles::Style;
use templates::DocumentContext;

/// Building blocks of a paginated table document
pub trait TableDocument {
    fn begin_document(&self) -> Result<String>;
    fn end_document(&self) -> String;
    fn begin_table(&self) -> String;
    fn end_table(&self) -> String;
    /// Cell markup including its trailing separator
    fn format_cell(&self, item: Option<&Kanji>, column: usize) -> Result<String>;
}

/// Style-driven renderer for posters and solutions tables
pub struct LatexRenderer<'a> {
    style: &'a Style,
    layout: GridLayout,
    cells: CellFormatter<'a>,
}

impl<'a> LatexRenderer<'a> {
    /// Renderer using the style's own column count
    pub fn new(style: &'a Style) -> Result<Self> {
        Self::with_columns(style, style.columns)
    }

    /// Renderer with the column count overridden. Zero columns fails here,
    /// before any output is produced.
    pub fn with_columns(style: &'a Style, columns: usize) -> Result<Self> {
        let layout = GridLayout::new(columns, style.rows_per_page)?;
        Ok(Self {
            style,
            layout,
            cells: CellFormatter::new(style, columns)?,
        })
    }

    pub fn layout(&self) -> &GridLayout {
        &self.layout
    }

    /// Render the whole document
    pub fn render(&self, source: &KanjiCollection) -> Result<String> {
        let total = source.len();
        log::debug!(
            "Rendering {} items with style '{}' ({} columns, {} pages)",
            total,
            self.style.name,
            self.layout.columns(),
            self.layout.page_count(total)
        );

        let mut out = self.begin_document()?;
        out.push('\n');

        let mut current_page = None;
        for slot in self.layout.slots(total) {
            if current_page != Some(slot.page) {
                if current_page.is_some() {
                    out.push_str(&self.end_table());
                    out.push_str("\\newpage\n");
                }
                out.push_str(&self.begin_table());
                current_page = Some(slot.page);
            }
            let item = slot.index.and_then(|i| source.get(i));
            out.push_str(&self.format_cell(item, slot.column)?);
        }
        if current_page.is_some() {
            out.push_str(&self.end_table());
        }

        out.push_str(&self.end_document());
        Ok(out)
    }
}

impl TableDocument for LatexRenderer<'_> {
    fn begin_document(&self) -> Result<String> {
        let context = DocumentContext {
            paper: self.style.paper.clone(),
            margin: self.style.margin.clone(),
            font: self.style.font.clone(),
            bold_font: self.style.bold_font.clone(),
        };
        let template = templates::compile(templates::DOCUMENT)?;
        Ok(templates::render(&template, &context)?)
    }

    fn end_document(&self) -> String {
        templates::DOCUMENT_END.to_string()
    }

    fn begin_table(&self) -> String {
        let (col_line, row_line) = if self.style.grid {
            ("|", "\\hline\n")
        } else {
            ("", "")
        };
        let cols = format!("{col_line}{}", format!("c{col_line}").repeat(self.layout.columns()));
        format!("\\begin{{longtable}}{{{cols}}}\n{row_line}")
    }

    fn end_table(&self) -> String {
        "\\end{longtable}\n".to_string()
    }

    fn format_cell(&self, item: Option<&Kanji>, column: usize) -> Result<String> {
        let mut cell = self.cells.format(item, column)?;
        cell.push_str(self.cells.separator(column));
        Ok(cell)
    }
}

/// Render `source` with `style`
pub fn render(source: &KanjiCollection, style: &Style) -> Result<String> {
    LatexRenderer::new(style)?.render(source)
}

/// Write `text` to `path`, creating parent directories and overwriting any
/// existing file.
pub fn persist(text: &str, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let mut out = BufWriter::new(File::create(path)?);
    out.write_all(text.as_bytes())?;
    out.flush()?;
    log::info!("Wrote {}", path.display());
    Ok(())
}
