//! Command line parsing
//!
//! Arguments are collected into `Overrides` first; `Cli::settings` then
//! layers them over the JSON config file (if any) and the defaults.

use std::path::PathBuf;

use crate::config::{self, Settings};
use crate::errors::{ConfigError, Result};
use crate::styles;

pub const HELP: &str = include_str!("cli_help.txt");

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    Poster,
    Solutions,
    Scrape,
    Parse,
    Styles,
    Help,
}

/// Values given on the command line; `None` means not given
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Overrides {
    pub style: Option<String>,
    pub input: Option<PathBuf>,
    pub enrichment: Option<PathBuf>,
    pub edition: Option<u32>,
    pub columns: Option<usize>,
    pub output: Option<PathBuf>,
    pub no_render: bool,
    pub compiler: Option<String>,
    pub raw_dir: Option<PathBuf>,
    pub delay_secs: Option<f64>,
    pub force: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Cli {
    pub command: CommandKind,
    pub config: Option<PathBuf>,
    pub verbose: bool,
    pub overrides: Overrides,
}

fn value<I: Iterator<Item = String>>(args: &mut I, flag: &str) -> std::result::Result<String, ConfigError> {
    args.next()
        .ok_or_else(|| ConfigError::InvalidArgument(format!("Missing value for {flag}")))
}

fn number<T: std::str::FromStr>(raw: &str, flag: &str) -> std::result::Result<T, ConfigError> {
    raw.parse()
        .map_err(|_| ConfigError::InvalidArgument(format!("Invalid value for {flag}: {raw}")))
}

/// Parse arguments (without the program name)
pub fn parse_args<I: IntoIterator<Item = String>>(args: I) -> std::result::Result<Cli, ConfigError> {
    let mut args = args.into_iter();
    let mut command = None;
    let mut config = None;
    let mut verbose = false;
    let mut o = Overrides::default();

    while let Some(a) = args.next() {
        match a.as_str() {
            "poster" if command.is_none() => command = Some(CommandKind::Poster),
            "solutions" if command.is_none() => command = Some(CommandKind::Solutions),
            "scrape" if command.is_none() => command = Some(CommandKind::Scrape),
            "parse" if command.is_none() => command = Some(CommandKind::Parse),
            "styles" if command.is_none() => command = Some(CommandKind::Styles),
            "-h" | "--help" => command = Some(CommandKind::Help),
            "-v" | "--verbose" => verbose = true,
            "--config" => config = Some(PathBuf::from(value(&mut args, &a)?)),
            "-s" | "--style" => o.style = Some(value(&mut args, &a)?),
            "-i" | "--input" => o.input = Some(PathBuf::from(value(&mut args, &a)?)),
            "-e" | "--enrichment" => o.enrichment = Some(PathBuf::from(value(&mut args, &a)?)),
            "--edition" => o.edition = Some(number(&value(&mut args, &a)?, &a)?),
            "-c" | "--columns" => {
                let columns: usize = number(&value(&mut args, &a)?, &a)?;
                if columns == 0 {
                    return Err(ConfigError::InvalidColumns(0));
                }
                o.columns = Some(columns);
            }
            "-o" | "--out" => o.output = Some(PathBuf::from(value(&mut args, &a)?)),
            "--no-render" => o.no_render = true,
            "--compiler" => o.compiler = Some(value(&mut args, &a)?),
            "--out-dir" | "--raw-dir" => o.raw_dir = Some(PathBuf::from(value(&mut args, &a)?)),
            "--delay" => {
                let secs: f64 = number(&value(&mut args, &a)?, &a)?;
                config::parse_delay(secs)?;
                o.delay_secs = Some(secs);
            }
            "--force" => o.force = true,
            _ => return Err(ConfigError::InvalidArgument(format!("Unknown arg: {a}"))),
        }
    }

    Ok(Cli {
        command: command.unwrap_or(CommandKind::Help),
        config,
        verbose,
        overrides: o,
    })
}

impl Cli {
    /// Final settings: defaults, then config file, then flags. The style name
    /// is checked against the registry here, before any data is read.
    pub fn settings(&self) -> Result<Settings> {
        let mut s = match &self.config {
            Some(path) => Settings::from_json_file(path)?,
            None => Settings::default(),
        };

        match self.command {
            CommandKind::Solutions => {
                if self.overrides.style.is_none() && s.style == config::DEFAULT_STYLE {
                    s.style = config::DEFAULT_SOLUTIONS_STYLE.to_string();
                }
                if self.overrides.output.is_none() && s.output == PathBuf::from(config::DEFAULT_POSTER_OUTPUT) {
                    s.output = PathBuf::from(config::DEFAULT_SOLUTIONS_OUTPUT);
                }
            }
            CommandKind::Parse => {
                if self.overrides.output.is_none() && s.output == PathBuf::from(config::DEFAULT_POSTER_OUTPUT) {
                    s.output = PathBuf::from(config::DEFAULT_ENRICHMENT);
                }
            }
            _ => {}
        }

        let o = &self.overrides;
        if let Some(v) = &o.style {
            s.style = v.clone();
        }
        if let Some(v) = &o.input {
            s.input = v.clone();
        }
        if let Some(v) = &o.enrichment {
            s.enrichment = Some(v.clone());
        }
        if let Some(v) = o.edition {
            s.edition = v;
        }
        if let Some(v) = o.columns {
            s.columns = Some(v);
        }
        if let Some(v) = &o.output {
            s.output = v.clone();
        }
        if o.no_render {
            s.render = false;
        }
        if let Some(v) = &o.compiler {
            s.compiler = v.clone();
        }
        if let Some(v) = &o.raw_dir {
            s.raw_dir = v.clone();
        }
        if let Some(v) = o.delay_secs {
            s.delay_secs = v;
        }
        if o.force {
            s.force = true;
        }

        if matches!(self.command, CommandKind::Poster | CommandKind::Solutions) {
            styles::resolve_style(&s.style)?;
        }
        Ok(s)
    }
}

/// Help text followed by the available style names
pub fn help_text() -> String {
    format!("{HELP}\nStyles: {}\n", styles::style_names().join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::PosterError;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_poster_flags() {
        let cli = parse_args(args(&["poster", "--style", "small", "--no-render", "-c", "10", "-o", "out.tex"])).unwrap();
        assert_eq!(cli.command, CommandKind::Poster);
        let s = cli.settings().unwrap();
        assert_eq!(s.style, "small");
        assert_eq!(s.columns, Some(10));
        assert!(!s.render);
        assert_eq!(s.output, PathBuf::from("out.tex"));
    }

    #[test]
    fn test_unknown_style_rejected() {
        let cli = parse_args(args(&["poster", "--style", "nope"])).unwrap();
        let err = cli.settings().unwrap_err();
        assert!(matches!(err, PosterError::Config(ConfigError::UnknownStyle { .. })));
    }

    #[test]
    fn test_zero_columns_rejected() {
        assert_eq!(
            parse_args(args(&["poster", "--columns", "0"])),
            Err(ConfigError::InvalidColumns(0))
        );
    }

    #[test]
    fn test_solutions_defaults() {
        let s = parse_args(args(&["solutions"])).unwrap().settings().unwrap();
        assert_eq!(s.style, "solutions");
        assert_eq!(s.output, PathBuf::from(config::DEFAULT_SOLUTIONS_OUTPUT));
    }

    #[test]
    fn test_parse_defaults_to_enrichment_csv() {
        let s = parse_args(args(&["parse", "--raw-dir", "pages"])).unwrap().settings().unwrap();
        assert_eq!(s.output, PathBuf::from(config::DEFAULT_ENRICHMENT));
        assert_eq!(s.raw_dir, PathBuf::from("pages"));
    }

    #[test]
    fn test_scrape_flags() {
        let cli = parse_args(args(&["scrape", "--delay", "0.5", "--force", "--out-dir", "raw"])).unwrap();
        let s = cli.settings().unwrap();
        assert_eq!(s.delay_secs, 0.5);
        assert!(s.force);
        assert_eq!(s.raw_dir, PathBuf::from("raw"));
    }

    #[test]
    fn test_delay_out_of_range_rejected() {
        for raw in ["inf", "1e30"] {
            let err = parse_args(args(&["scrape", "--delay", raw])).unwrap_err();
            assert!(matches!(err, ConfigError::InvalidArgument(_)), "{raw}");
        }
    }

    #[test]
    fn test_parse_keeps_output_from_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{"output": "my/enrich.csv"}"#).unwrap();
        let cli = parse_args(args(&["parse", "--config", path.to_str().unwrap()])).unwrap();
        assert_eq!(cli.settings().unwrap().output, PathBuf::from("my/enrich.csv"));
    }

    #[test]
    fn test_errors() {
        assert!(parse_args(args(&["poster", "--bogus"])).is_err());
        assert!(parse_args(args(&["poster", "--style"])).is_err());
        assert!(parse_args(args(&["poster", "--edition", "six"])).is_err());
        assert_eq!(parse_args(args(&[])).unwrap().command, CommandKind::Help);
    }

    #[test]
    fn test_help_lists_styles() {
        let help = help_text();
        assert!(help.contains("Usage: kanji-poster"));
        assert!(help.contains("minimalist_a4"));
    }
}
