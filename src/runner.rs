//! Subcommand execution

use std::path::Path;
use std::process::Command;

use crate::cli::{help_text, Cli, CommandKind};
use crate::config::Settings;
use crate::data;
use crate::errors::{PosterError, Result};
use crate::models::KanjiCollection;
use crate::renderers::KanjiPoster;
use crate::scrape::{extract_dir, write_enrichment_csv, Scraper};
use crate::styles;

pub fn run(cli: &Cli) -> Result<()> {
    match cli.command {
        CommandKind::Help => {
            print!("{}", help_text());
            Ok(())
        }
        CommandKind::Styles => {
            for name in styles::style_names() {
                println!("{name}");
            }
            Ok(())
        }
        CommandKind::Poster | CommandKind::Solutions => poster(&cli.settings()?),
        CommandKind::Scrape => scrape(&cli.settings()?),
        CommandKind::Parse => parse(&cli.settings()?),
    }
}

/// Dataset with enrichment merged in when configured
pub fn load_collection(settings: &Settings) -> Result<KanjiCollection> {
    let collection = data::load(&settings.input, settings.edition)?;
    match &settings.enrichment {
        Some(path) => data::merge(&collection, path),
        None => Ok(collection),
    }
}

pub fn poster(settings: &Settings) -> Result<()> {
    let style = styles::resolve_style(&settings.style)?;
    let collection = load_collection(settings)?;

    let mut poster = KanjiPoster::new(&collection, style);
    if let Some(columns) = settings.columns {
        poster.set_columns(columns);
    }
    poster.generate(Some(settings.output.as_path()))?;

    if settings.render {
        compile(&settings.compiler, &settings.output)?;
    }
    Ok(())
}

pub fn scrape(settings: &Settings) -> Result<()> {
    let delay = settings.delay()?;
    let collection = data::load(&settings.input, settings.edition)?;
    let scraper = Scraper::new(&settings.raw_dir)?;
    scraper.fetch_all(&collection.glyphs(), delay, settings.force)?;
    Ok(())
}

pub fn parse(settings: &Settings) -> Result<()> {
    let records = extract_dir(&settings.raw_dir)?;
    write_enrichment_csv(&records, &settings.output)
}

/// Run the external LaTeX compiler next to the document
pub fn compile(compiler: &str, tex: &Path) -> Result<()> {
    let dir = match tex.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    log::info!("Compiling {} with {}", tex.display(), compiler);

    let output = Command::new(compiler)
        .arg("-interaction=nonstopmode")
        .arg("-halt-on-error")
        .arg(format!("-output-directory={}", dir.display()))
        .arg(tex)
        .output()
        .map_err(|e| PosterError::Compile(format!("Failed to spawn {compiler}: {e}")))?;

    if !output.status.success() {
        let stdout = String::from_utf8_lossy(&output.stdout);
        let tail: Vec<&str> = stdout.lines().rev().take(20).collect();
        let tail: Vec<&str> = tail.into_iter().rev().collect();
        return Err(PosterError::Compile(format!(
            "{compiler} exited with {}:\n{}",
            output.status,
            tail.join("\n")
        )));
    }
    Ok(())
}
