//! Metadata extraction from downloaded dictionary pages
//!
//! Pages embed their state as JSON in a script tag
//! (`window.__PRELOADED_STATE=...;`). The first search result row carries
//! the glyph, its JLPT level and, when known, a frequency rank.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use crate::data::csv::write_row;
use crate::errors::Result;

const STATE_MARKER: &str = "window.__PRELOADED_STATE=";

static SCRIPT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?is)<script[^>]*>(.*?)</script>").expect("script pattern is valid")
});

/// Fields found on one page. All `None` when the page had no payload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartialRecord {
    pub kanji: Option<String>,
    pub jlpt: Option<u8>,
    pub freq: Option<u32>,
}

impl PartialRecord {
    pub fn is_empty(&self) -> bool {
        self.kanji.is_none() && self.jlpt.is_none() && self.freq.is_none()
    }
}

/// The JSON text of the embedded state, if any script carries it
fn find_state(html: &str) -> Option<&str> {
    SCRIPT_RE
        .captures_iter(html)
        .filter_map(|c| c.get(1))
        .map(|m| m.as_str())
        .find(|script| script.contains(STATE_MARKER))
        .and_then(|script| script.split_once(STATE_MARKER))
        .map(|(_, rest)| {
            let rest = rest.trim();
            rest.strip_suffix(';').unwrap_or(rest)
        })
}

/// Extract metadata from a page. A page without the embedded payload yields
/// an empty record; only malformed JSON is an error.
pub fn extract(html: &str) -> Result<PartialRecord> {
    let Some(state) = find_state(html) else {
        return Ok(PartialRecord::default());
    };
    let state: Value = serde_json::from_str(state)?;

    let row = state
        .get("search")
        .and_then(Value::as_object)
        .and_then(|search| search.values().next())
        .and_then(|result| result.get("items"))
        .and_then(|items| items.get(0))
        .and_then(|item| item.get("rows"))
        .and_then(|rows| rows.get(0));

    let Some(row) = row else {
        log::warn!("Embedded state has no search result rows");
        return Ok(PartialRecord::default());
    };

    Ok(PartialRecord {
        kanji: row.get("k").and_then(Value::as_str).map(str::to_string),
        jlpt: row
            .get("jlpt")
            .and_then(Value::as_u64)
            .and_then(|v| u8::try_from(v).ok()),
        freq: row
            .get("freq")
            .and_then(Value::as_u64)
            .and_then(|v| u32::try_from(v).ok()),
    })
}

pub fn extract_file(path: &Path) -> Result<PartialRecord> {
    let html = fs::read_to_string(path)?;
    extract(&html)
}

/// Extract every file in `dir`, in file name order.
pub fn extract_dir(dir: impl AsRef<Path>) -> Result<Vec<PartialRecord>> {
    let dir = dir.as_ref();
    let mut paths = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() {
            paths.push(path);
        }
    }
    paths.sort();

    let mut records = Vec::with_capacity(paths.len());
    for path in &paths {
        let record = extract_file(path)?;
        if record.is_empty() {
            log::warn!("No metadata in {}", path.display());
        }
        records.push(record);
    }
    log::info!("Parsed {} pages from {}", records.len(), dir.display());
    Ok(records)
}

/// Write records as enrichment CSV (`kanji,jlpt,freq`). Records without a
/// glyph are left out.
pub fn write_enrichment_csv(records: &[PartialRecord], path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let mut out = BufWriter::new(File::create(path)?);
    write_row(&mut out, &["kanji".to_string(), "jlpt".to_string(), "freq".to_string()], ',')?;
    for record in records {
        let Some(kanji) = &record.kanji else { continue };
        let row = [
            kanji.clone(),
            record.jlpt.map(|v| v.to_string()).unwrap_or_default(),
            record.freq.map(|v| v.to_string()).unwrap_or_default(),
        ];
        write_row(&mut out, &row, ',')?;
    }
    out.flush()?;
    log::info!("Wrote {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(state: &str) -> String {
        format!(
            "<html><head><script src=\"app.js\"></script>\
             <script>var x = 1;</script>\
             <script>window.__PRELOADED_STATE={state};</script></head><body></body></html>"
        )
    }

    #[test]
    fn test_extracts_first_row() {
        let html = page(
            r#"{"search":{"kanji:日":{"items":[{"rows":[{"k":"日","jlpt":5,"freq":1},{"k":"曰","jlpt":1}]}]}}}"#,
        );
        let record = extract(&html).unwrap();
        assert_eq!(
            record,
            PartialRecord {
                kanji: Some("日".to_string()),
                jlpt: Some(5),
                freq: Some(1),
            }
        );
    }

    #[test]
    fn test_missing_fields_are_none() {
        let html = page(r#"{"search":{"q":{"items":[{"rows":[{"k":"鬱"}]}]}}}"#);
        let record = extract(&html).unwrap();
        assert_eq!(record.kanji.as_deref(), Some("鬱"));
        assert_eq!(record.jlpt, None);
        assert_eq!(record.freq, None);
    }

    #[test]
    fn test_absent_payload_is_empty_record() {
        let record = extract("<html><script>var y = 2;</script></html>").unwrap();
        assert!(record.is_empty());
        assert!(extract("").unwrap().is_empty());
    }

    #[test]
    fn test_empty_results_are_empty_record() {
        let html = page(r#"{"search":{}}"#);
        assert!(extract(&html).unwrap().is_empty());
    }

    #[test]
    fn test_malformed_json_is_error() {
        let html = page("{not json");
        assert!(extract(&html).is_err());
    }

    #[test]
    fn test_dir_to_csv() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("26085.html"),
            page(r#"{"search":{"a":{"items":[{"rows":[{"k":"日","jlpt":5}]}]}}}"#),
        )
        .unwrap();
        fs::write(dir.path().join("19968.html"), "<html></html>").unwrap();

        let records = extract_dir(dir.path()).unwrap();
        assert_eq!(records.len(), 2);
        assert!(records[0].is_empty());

        let out = dir.path().join("out").join("enrichment.csv");
        write_enrichment_csv(&records, &out).unwrap();
        assert_eq!(fs::read_to_string(&out).unwrap(), "kanji,jlpt,freq\n日,5,\n");
    }
}
