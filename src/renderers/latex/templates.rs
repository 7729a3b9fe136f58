//! LaTeX template rendering
//!
//! Mustache templates for the document preamble and cell contents. Every
//! template starts by switching delimiters to `<< >>` so LaTeX braces pass
//! through untouched, and uses unescaped `<<&name>>` tags since values are
//! already LaTeX.
//!
//! Header and footer templates are short enough to live here as strings;
//! they are rendered first and spliced into the cell template.

use serde::Serialize;

use crate::models::Kanji;

pub const DOCUMENT: &str = include_str!("templates/document.tex.mustache");
pub const POSTER_CELL: &str = include_str!("templates/poster_cell.tex.mustache");
pub const SOLUTIONS_CELL: &str = include_str!("templates/solutions_cell.tex.mustache");

/// Frequency rank on the left, JLPT level on the right
pub const POSTER_HEADER: &str =
    r"{{=<< >>=}}{\tiny <<#has_freq>>\#<<&freq>><</has_freq>>\hfill <<#has_level>>N<<&jlpt>><</has_level>>}";

/// Edition id and codepoint label
pub const POSTER_FOOTER: &str = r"{{=<< >>=}}{\footnotesize <<&id>> <<&utf>>}";

pub const DOCUMENT_END: &str = "\\end{document}\n";

/// Context for the document preamble
#[derive(Debug, Clone, Serialize)]
pub struct DocumentContext {
    pub paper: String,
    pub margin: String,
    pub font: String,
    pub bold_font: String,
}

/// Context for one cell. Header and footer are rendered from the same
/// fields before being attached for the cell template.
#[derive(Debug, Clone, Serialize)]
pub struct CellContext {
    pub kanji: String,
    pub id: String,
    pub utf: String,
    pub jlpt: String,
    pub has_level: bool,
    pub freq: String,
    pub has_freq: bool,
    pub keyword: String,
    pub on_reading: String,
    pub kun_reading: String,
    pub components: String,
    pub color: String,
    pub kanji_scale: String,
    pub cell_width: String,
    pub vadd: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub header: Option<String>,
    pub has_header: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<String>,
    pub has_footer: bool,
}

impl CellContext {
    pub fn builder(kanji: &Kanji) -> CellContextBuilder {
        CellContextBuilder::new(kanji)
    }
}

/// Builder for CellContext
pub struct CellContextBuilder {
    context: CellContext,
}

impl CellContextBuilder {
    pub fn new(kanji: &Kanji) -> Self {
        let freq = kanji.display_freq();
        Self {
            context: CellContext {
                kanji: kanji.kanji.clone(),
                id: kanji.id.to_string(),
                utf: kanji.utf.clone(),
                jlpt: kanji.jlpt.to_string(),
                has_level: kanji.jlpt > 0,
                freq: freq.map(|f| f.to_string()).unwrap_or_default(),
                has_freq: freq.is_some(),
                keyword: kanji
                    .keyword
                    .as_deref()
                    .map(escape_latex)
                    .unwrap_or_default(),
                on_reading: escape_latex(&kanji.on_reading.join("、")),
                kun_reading: escape_latex(&kanji.kun_reading.join("、")),
                components: escape_latex(&kanji.components.join(" ")),
                color: String::new(),
                kanji_scale: String::new(),
                cell_width: String::new(),
                vadd: String::new(),
                header: None,
                has_header: false,
                footer: None,
                has_footer: false,
            },
        }
    }

    pub fn color<S: Into<String>>(mut self, color: S) -> Self {
        self.context.color = color.into();
        self
    }

    pub fn geometry(mut self, cell_width: &str, vadd: &str, kanji_scale: &str) -> Self {
        self.context.cell_width = cell_width.to_string();
        self.context.vadd = vadd.to_string();
        self.context.kanji_scale = kanji_scale.to_string();
        self
    }

    pub fn build(self) -> CellContext {
        self.context
    }
}

impl CellContext {
    /// Attach a rendered header; empty markup counts as no header.
    pub fn set_header(&mut self, header: String) {
        self.has_header = !header.is_empty();
        self.header = self.has_header.then_some(header);
    }

    pub fn set_footer(&mut self, footer: String) {
        self.has_footer = !footer.is_empty();
        self.footer = self.has_footer.then_some(footer);
    }
}

pub fn compile(source: &str) -> Result<mustache::Template, mustache::Error> {
    mustache::compile_str(source)
}

/// Render a compiled template, dropping trailing whitespace
pub fn render<T: Serialize>(template: &mustache::Template, context: &T) -> Result<String, mustache::Error> {
    let mut out = template.render_to_string(context)?;
    out.truncate(out.trim_end().len());
    Ok(out)
}

/// Escape LaTeX special characters in free text
pub fn escape_latex(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str(r"\textbackslash{}"),
            '&' | '%' | '$' | '#' | '_' | '{' | '}' => {
                out.push('\\');
                out.push(c);
            }
            '~' => out.push_str(r"\textasciitilde{}"),
            '^' => out.push_str(r"\textasciicircum{}"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_latex() {
        assert_eq!(escape_latex("rice field"), "rice field");
        assert_eq!(escape_latex("R&D 100%"), r"R\&D 100\%");
        assert_eq!(escape_latex(r"a\b"), r"a\textbackslash{}b");
        assert_eq!(escape_latex("x_{1}"), r"x\_\{1\}");
    }

    #[test]
    fn test_render_document_preamble() {
        let template = compile(DOCUMENT).unwrap();
        let context = DocumentContext {
            paper: "a4paper".to_string(),
            margin: "2cm".to_string(),
            font: "Noto Serif CJK JP".to_string(),
            bold_font: "Noto Serif CJK JP Bold".to_string(),
        };
        let rendered = render(&template, &context).unwrap();
        assert!(rendered.starts_with(r"\documentclass[]{article}"));
        assert!(rendered.contains(r"\usepackage[margin=2cm,a4paper]{geometry}"));
        assert!(rendered.contains(r"{Noto Serif CJK JP}"));
        assert!(rendered.ends_with(r"\begin{document}"));
    }

    #[test]
    fn test_header_omits_unknown_freq_and_level() {
        let template = compile(POSTER_HEADER).unwrap();
        let context = CellContext::builder(&Kanji::new("一", 1)).build();
        let rendered = render(&template, &context).unwrap();
        assert_eq!(rendered, r"{\tiny \hfill }");
    }

    #[test]
    fn test_header_shows_freq_and_level() {
        let template = compile(POSTER_HEADER).unwrap();
        let kanji = Kanji::new("一", 1).with_jlpt(5).with_freq(Some(2));
        let context = CellContext::builder(&kanji).build();
        let rendered = render(&template, &context).unwrap();
        assert_eq!(rendered, r"{\tiny \#2\hfill N5}");
    }

    #[test]
    fn test_set_header_empty_means_absent() {
        let mut context = CellContext::builder(&Kanji::new("一", 1)).build();
        context.set_header(String::new());
        assert!(!context.has_header);
        assert!(context.header.is_none());
        context.set_footer("x".to_string());
        assert!(context.has_footer);
    }
}
