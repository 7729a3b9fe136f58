//! Dataset loading and enrichment merge

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::Path;

use crate::data::csv::Table;
use crate::errors::{ConfigError, DataError, Result};
use crate::models::{Kanji, KanjiCollection};
use crate::styles::palette::MAX_JLPT;

/// Editions with an id column in the dataset
pub const EDITIONS: [u32; 2] = [5, 6];

const COL_KANJI: &str = "kanji";
const COL_COMPONENTS: &str = "components";
const COL_ON: &str = "on_reading";
const COL_KUN: &str = "kun_reading";
const COL_KEYWORD: &str = "keyword";
const COL_JLPT: &str = "jlpt";
const COL_FREQ: &str = "freq";

/// Name of the id column for an edition, e.g. `id_6th_ed`
pub fn id_column(edition: u32) -> Result<String> {
    if !EDITIONS.contains(&edition) {
        return Err(ConfigError::UnknownEdition(edition).into());
    }
    Ok(format!("id_{edition}th_ed"))
}

fn read_table(path: &Path) -> Result<Table> {
    match fs::read_to_string(path) {
        Ok(text) => Ok(Table::parse(&text, path)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            Err(DataError::FileNotFound(path.to_path_buf()).into())
        }
        Err(e) => Err(e.into()),
    }
}

/// Load the kanji dataset, taking ids from the given edition's column.
pub fn load(path: impl AsRef<Path>, edition: u32) -> Result<KanjiCollection> {
    let path = path.as_ref();
    let id_col = id_column(edition)?;
    let table = read_table(path)?;
    let collection = collection_from_table(&table, &id_col)?;
    log::info!(
        "Loaded {} kanji from {} (edition {})",
        collection.len(),
        path.display(),
        edition
    );
    Ok(collection)
}

/// Same as [`load`] for in-memory CSV text
pub fn load_str(text: &str, edition: u32) -> Result<KanjiCollection> {
    let id_col = id_column(edition)?;
    collection_from_table(&Table::parse(text, Path::new("<memory>")), &id_col)
}

fn collection_from_table(table: &Table, id_col: &str) -> Result<KanjiCollection> {
    let kanji_i = table.column(COL_KANJI)?;
    let id_i = table.column(id_col)?;
    let components_i = table.column(COL_COMPONENTS)?;
    let on_i = table.column(COL_ON)?;
    let kun_i = table.column(COL_KUN)?;
    let keyword_i = table.column(COL_KEYWORD).ok();

    let mut items = Vec::with_capacity(table.rows.len());
    for row in &table.rows {
        let glyph = row.field(kanji_i);
        if glyph.is_empty() {
            return Err(DataError::Parse {
                line: row.line,
                column: COL_KANJI.to_string(),
                value: String::new(),
            }
            .into());
        }
        let raw_id = row.field(id_i);
        let id = parse_whole(raw_id).ok_or_else(|| DataError::Parse {
            line: row.line,
            column: id_col.to_string(),
            value: raw_id.to_string(),
        })?;

        let mut kanji = Kanji::new(glyph, id.unwrap_or(0));
        kanji.components = split_list(row.field(components_i));
        kanji.on_reading = split_list(row.field(on_i));
        kanji.kun_reading = split_list(row.field(kun_i));
        kanji.keyword = keyword_i
            .map(|i| row.field(i))
            .filter(|k| !k.is_empty())
            .map(str::to_string);
        items.push(kanji);
    }

    Ok(KanjiCollection::new(items)?)
}

/// Left-join enrichment data (`jlpt`, optional `freq`) onto the collection
/// by glyph. Kanji without an enrichment row get `jlpt = 0` and no `freq`.
pub fn merge(collection: &KanjiCollection, enrichment: impl AsRef<Path>) -> Result<KanjiCollection> {
    let path = enrichment.as_ref();
    let table = read_table(path)?;
    let merged = merge_table(collection, &table)?;
    log::info!("Merged enrichment data from {}", path.display());
    Ok(merged)
}

/// Same as [`merge`] for in-memory CSV text
pub fn merge_str(collection: &KanjiCollection, text: &str) -> Result<KanjiCollection> {
    merge_table(collection, &Table::parse(text, Path::new("<memory>")))
}

fn merge_table(collection: &KanjiCollection, table: &Table) -> Result<KanjiCollection> {
    let kanji_i = table.column(COL_KANJI)?;
    let jlpt_i = table.column(COL_JLPT)?;
    let freq_i = table.column(COL_FREQ).ok();

    let mut extra: HashMap<&str, (u8, Option<u32>)> = HashMap::new();
    for row in &table.rows {
        let line = row.line;
        let glyph = row.field(kanji_i);
        if glyph.is_empty() {
            log::warn!("Enrichment line {} has no kanji, skipping", line);
            continue;
        }

        let raw_jlpt = row.field(jlpt_i);
        let jlpt = parse_whole(raw_jlpt)
            .and_then(|v| u8::try_from(v.unwrap_or(0)).ok())
            .filter(|v| *v <= MAX_JLPT)
            .ok_or_else(|| DataError::Parse {
                line,
                column: COL_JLPT.to_string(),
                value: raw_jlpt.to_string(),
            })?;

        let freq = match freq_i {
            Some(i) => {
                let raw = row.field(i);
                parse_whole(raw)
                    .ok_or_else(|| DataError::Parse {
                        line,
                        column: COL_FREQ.to_string(),
                        value: raw.to_string(),
                    })?
                    .filter(|f| *f > 0)
            }
            None => None,
        };

        if extra.insert(glyph, (jlpt, freq)).is_some() {
            return Err(DataError::DuplicateGlyph(glyph.to_string()).into());
        }
    }

    let items = collection
        .iter()
        .map(|k| {
            let (jlpt, freq) = extra.get(k.kanji.as_str()).copied().unwrap_or((0, None));
            k.clone().with_jlpt(jlpt).with_freq(freq)
        })
        .collect();

    Ok(KanjiCollection::new(items)?)
}

/// `;`-separated list; empty input gives an empty list.
fn split_list(s: &str) -> Vec<String> {
    s.split(';')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parse a non-negative whole number. Blank and NaN parse to `Some(None)`,
/// `12` and `12.0` to `Some(Some(12))`, anything else to `None`.
fn parse_whole(s: &str) -> Option<Option<u32>> {
    let s = s.trim();
    if s.is_empty() || s.eq_ignore_ascii_case("nan") {
        return Some(None);
    }
    if let Ok(v) = s.parse::<u32>() {
        return Some(Some(v));
    }
    match s.parse::<f64>() {
        Ok(v) if v >= 0.0 && v.fract() == 0.0 && v <= u32::MAX as f64 => Some(Some(v as u32)),
        _ => None,
    }
}
