//! Minimal CSV reading and writing (quotes and CRLF tolerant)

use std::io::{self, Write};
use std::mem::take;
use std::path::{Path, PathBuf};

use crate::errors::DataError;

/// One parsed row and the source line it starts on (1-based)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub line: usize,
    pub fields: Vec<String>,
}

impl Record {
    /// Field at `index`, trimmed; short rows read as empty.
    pub fn field(&self, index: usize) -> &str {
        self.fields.get(index).map(|s| s.trim()).unwrap_or("")
    }
}

/// Cursor over CSV text that tracks source lines
struct Reader<'t> {
    text: &'t str,
    pos: usize,
    line: usize,
    sep: char,
}

impl<'t> Reader<'t> {
    fn new(text: &'t str, sep: char) -> Self {
        Self {
            text,
            pos: 0,
            line: 1,
            sep,
        }
    }

    fn rest(&self) -> &'t str {
        &self.text[self.pos..]
    }

    /// A row whose first non-blank character is `#`, outside any field
    fn at_comment(&self) -> bool {
        self.rest().trim_start_matches([' ', '\t']).starts_with('#')
    }

    fn skip_line(&mut self) {
        match self.rest().find('\n') {
            Some(i) => {
                self.pos += i + 1;
                self.line += 1;
            }
            None => self.pos = self.text.len(),
        }
    }

    /// Fields up to the next newline outside quotes. Newlines inside quotes
    /// belong to the field; `\r` before a row break is dropped.
    fn read_fields(&mut self) -> Vec<String> {
        let rest = self.rest();
        let mut fields = Vec::new();
        let mut field = String::new();
        let mut quoted = false;
        let mut consumed = rest.len();
        let mut chars = rest.char_indices().peekable();

        while let Some((i, ch)) = chars.next() {
            match ch {
                '"' if quoted => {
                    if matches!(chars.peek(), Some((_, '"'))) {
                        chars.next();
                        field.push('"');
                    } else {
                        quoted = false;
                    }
                }
                '"' => quoted = true,
                '\n' => {
                    self.line += 1;
                    if !quoted {
                        consumed = i + 1;
                        break;
                    }
                    field.push(ch);
                }
                '\r' if !quoted => {}
                c if c == self.sep && !quoted => fields.push(take(&mut field)),
                _ => field.push(ch),
            }
        }

        fields.push(field);
        self.pos += consumed;
        fields
    }
}

impl Iterator for Reader<'_> {
    type Item = Record;

    fn next(&mut self) -> Option<Record> {
        while self.pos < self.text.len() {
            if self.at_comment() {
                self.skip_line();
                continue;
            }
            let line = self.line;
            let fields = self.read_fields();
            if fields.len() == 1 && fields[0].trim().is_empty() {
                continue;
            }
            return Some(Record { line, fields });
        }
        None
    }
}

/// Split CSV text into records, skipping blank rows and `#` comment rows.
pub fn parse_records(text: &str, sep: char) -> Vec<Record> {
    Reader::new(text, sep).collect()
}

/// Header row plus data rows, with lookup by column name
#[derive(Debug, Clone)]
pub struct Table {
    pub path: PathBuf,
    pub headers: Vec<String>,
    pub rows: Vec<Record>,
}

impl Table {
    /// Parse CSV text with a header row; `#` comment lines are ignored.
    pub fn parse(text: &str, path: &Path) -> Self {
        let mut records = parse_records(text, ',').into_iter();
        let headers = records
            .next()
            .map(|r| r.fields.iter().map(|h| h.trim().to_string()).collect())
            .unwrap_or_default();
        let rows = records.collect();
        Self {
            path: path.to_path_buf(),
            headers,
            rows,
        }
    }

    pub fn column(&self, name: &str) -> Result<usize, DataError> {
        self.headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| DataError::MissingColumn {
                column: name.to_string(),
                path: self.path.clone(),
            })
    }
}

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write one row, quoting fields when needed.
pub fn write_row<W: Write>(w: &mut W, row: &[String], sep: char) -> io::Result<()> {
    let mut first = true;
    for field in row {
        if !first {
            write!(w, "{sep}")?;
        }
        first = false;
        if needs_quotes(field, sep) {
            write!(w, "\"{}\"", field.replace('"', "\"\""))?;
        } else {
            w.write_all(field.as_bytes())?;
        }
    }
    writeln!(w)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(records: &[Record]) -> Vec<Vec<&str>> {
        records
            .iter()
            .map(|r| r.fields.iter().map(String::as_str).collect())
            .collect()
    }

    #[test]
    fn test_quotes_and_crlf() {
        let records = parse_records("a,\"b,c\",d\r\n1,\"say \"\"hi\"\"\",3", ',');
        assert_eq!(fields(&records), vec![vec!["a", "b,c", "d"], vec!["1", "say \"hi\"", "3"]]);
    }

    #[test]
    fn test_blank_rows_skipped_but_counted() {
        let records = parse_records("a,b\n\n1,2\n", ',');
        assert_eq!(fields(&records), vec![vec!["a", "b"], vec!["1", "2"]]);
        assert_eq!(records[1].line, 3);
    }

    #[test]
    fn test_hash_inside_quoted_field_is_data() {
        let records = parse_records("kanji,keyword\n一,\"one\n#two\"\n二,two\n", ',');
        assert_eq!(records.len(), 3);
        assert_eq!(records[1].field(1), "one\n#two");
        assert_eq!(records[2].line, 4);
    }

    #[test]
    fn test_table_ignores_comments() {
        let table = Table::parse("# source: x\nkanji,id\n  # note\n一,1\n", Path::new("t.csv"));
        assert_eq!(table.headers, vec!["kanji", "id"]);
        assert_eq!(table.rows.len(), 1);
        assert_eq!(table.rows[0].line, 4);
        assert_eq!(table.rows[0].field(1), "1");
        assert_eq!(table.rows[0].field(5), "");
        assert_eq!(table.column("id"), Ok(1));
        assert!(matches!(table.column("jlpt"), Err(DataError::MissingColumn { .. })));
    }

    #[test]
    fn test_write_row_quotes() {
        let mut out = Vec::new();
        write_row(&mut out, &["a".to_string(), "b,c".to_string()], ',').unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "a,\"b,c\"\n");
    }
}
