//! stderr backend for the `log` facade
//!
//! Lines look like `[00:00:01.234][INFO] message`, time measured from the
//! first log call.

use std::io::Write;
use std::sync::OnceLock;
use std::time::{Duration, Instant};

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Environment variable overriding the log level (`error` … `trace`)
pub const LOG_ENV: &str = "KANJI_POSTER_LOG";

static START: OnceLock<Instant> = OnceLock::new();
static LOGGER: StderrLogger = StderrLogger;

fn start() -> Instant {
    *START.get_or_init(Instant::now)
}

/// `hh:mm:ss.mmm`; hours keep counting past 99
fn fmt_elapsed(elapsed: Duration) -> String {
    let secs = elapsed.as_secs();
    format!(
        "{:02}:{:02}:{:02}.{:03}",
        secs / 3600,
        secs / 60 % 60,
        secs % 60,
        elapsed.subsec_millis()
    )
}

struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let elapsed = fmt_elapsed(start().elapsed());
        let mut err = std::io::stderr().lock();
        let _ = writeln!(err, "[{elapsed}][{}] {}", record.level(), record.args());
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

/// Install the stderr logger. `KANJI_POSTER_LOG` wins over `level` when set
/// to a valid level name.
pub fn init(level: Level) -> Result<(), SetLoggerError> {
    start();
    let filter = std::env::var(LOG_ENV)
        .ok()
        .and_then(|v| v.parse::<LevelFilter>().ok())
        .unwrap_or_else(|| level.to_level_filter());
    log::set_logger(&LOGGER)?;
    log::set_max_level(filter);
    Ok(())
}
