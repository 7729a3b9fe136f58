//! Poster: a collection bound to a style

use std::path::Path;

use crate::errors::Result;
use crate::models::KanjiCollection;
use crate::renderers::latex::{persist, LatexRenderer};
use crate::styles::{resolve_style, Style};

/// A collection paired with a style. Layout settings can be adjusted between
/// construction and generation; each `generate` call paginates afresh.
pub struct KanjiPoster<'a> {
    collection: &'a KanjiCollection,
    style: Style,
}

impl<'a> KanjiPoster<'a> {
    pub fn new(collection: &'a KanjiCollection, style: &Style) -> Self {
        Self {
            collection,
            style: style.clone(),
        }
    }

    /// Poster using a built-in style looked up by name
    pub fn with_style_name(collection: &'a KanjiCollection, name: &str) -> Result<Self> {
        Ok(Self::new(collection, resolve_style(name)?))
    }

    pub fn style(&self) -> &Style {
        &self.style
    }

    pub fn columns(&self) -> usize {
        self.style.columns
    }

    pub fn set_columns(&mut self, columns: usize) {
        self.style.columns = columns;
    }

    pub fn set_rows_per_page(&mut self, rows: Option<usize>) {
        self.style.rows_per_page = rows;
    }

    /// Render the document, writing it to `path` when given
    pub fn generate(&self, path: Option<&Path>) -> Result<String> {
        let out = LatexRenderer::new(&self.style)?.render(self.collection)?;
        if let Some(path) = path {
            persist(&out, path)?;
        }
        Ok(out)
    }
}
