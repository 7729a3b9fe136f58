//! Dictionary page downloader
//!
//! One request at a time. Pages already on disk are skipped, so an
//! interrupted run can simply be started again.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;

use crate::config::{DEFAULT_BASE_URL, HTTP_TIMEOUT_SECS, USER_AGENT};
use crate::errors::{PosterError, Result};

pub struct Scraper {
    out_dir: PathBuf,
    base_url: String,
    client: reqwest::blocking::Client,
}

impl Scraper {
    pub fn new(out_dir: impl Into<PathBuf>) -> Result<Self> {
        Self::with_base_url(out_dir, DEFAULT_BASE_URL)
    }

    pub fn with_base_url(out_dir: impl Into<PathBuf>, base_url: impl Into<String>) -> Result<Self> {
        let base_url = base_url.into();
        let client = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
            .build()
            .map_err(|source| PosterError::Network {
                url: base_url.clone(),
                source,
            })?;
        Ok(Self {
            out_dir: out_dir.into(),
            base_url,
            client,
        })
    }

    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    pub fn url_for(&self, glyph: &str) -> String {
        format!("{}{}", self.base_url, glyph)
    }

    /// Where the page for `glyph` is stored: `<decimal codepoint>.html`
    pub fn path_for(&self, glyph: &str) -> PathBuf {
        let code = glyph.chars().next().map(|c| c as u32).unwrap_or(0);
        self.out_dir.join(format!("{code}.html"))
    }

    /// Fetch the raw page for one glyph
    pub fn fetch(&self, glyph: &str) -> Result<Vec<u8>> {
        let url = self.url_for(glyph);
        let network = |source: reqwest::Error| PosterError::Network {
            url: url.clone(),
            source,
        };
        let response = self
            .client
            .get(&url)
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(network)?;
        let bytes = response.bytes().map_err(network)?;
        Ok(bytes.to_vec())
    }

    /// Download the page for `glyph` unless it is already on disk.
    /// Returns true when a request was made.
    pub fn download(&self, glyph: &str, force: bool) -> Result<bool> {
        let path = self.path_for(glyph);
        if !force && path.exists() {
            log::info!("Skipping existing kanji {}", glyph);
            return Ok(false);
        }
        let body = self.fetch(glyph)?;
        fs::create_dir_all(&self.out_dir)?;
        let mut out = BufWriter::new(File::create(&path)?);
        out.write_all(&body)?;
        out.flush()?;
        log::debug!("Saved {} to {}", glyph, path.display());
        Ok(true)
    }

    /// Download every glyph in order, sleeping `delay` after each new
    /// download. Returns the number of pages fetched.
    pub fn fetch_all<S: AsRef<str>>(&self, glyphs: &[S], delay: Duration, force: bool) -> Result<usize> {
        let total = glyphs.len();
        let mut fetched = 0;
        for (i, glyph) in glyphs.iter().enumerate() {
            let glyph = glyph.as_ref();
            if self.download(glyph, force)? {
                fetched += 1;
                log::info!("[{}/{}] Downloaded {}", i + 1, total, glyph);
                thread::sleep(delay);
            }
        }
        log::info!("Downloaded {} of {} pages into {}", fetched, total, self.out_dir.display());
        Ok(fetched)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_and_urls() {
        let scraper = Scraper::with_base_url("raw", "https://example.org/k?q=").unwrap();
        assert_eq!(scraper.path_for("一"), Path::new("raw").join("19968.html"));
        assert_eq!(scraper.url_for("一"), "https://example.org/k?q=一");
    }

    #[test]
    fn test_existing_pages_are_skipped_without_network() {
        let dir = tempfile::tempdir().unwrap();
        // unroutable base url: any request would fail
        let scraper = Scraper::with_base_url(dir.path(), "http://127.0.0.1:9/?q=").unwrap();
        fs::write(scraper.path_for("一"), "<html></html>").unwrap();
        fs::write(scraper.path_for("二"), "<html></html>").unwrap();

        assert!(!scraper.download("一", false).unwrap());
        let fetched = scraper
            .fetch_all(&["一", "二"], Duration::from_secs(60), false)
            .unwrap();
        assert_eq!(fetched, 0);
    }

    #[test]
    fn test_network_failure_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let scraper = Scraper::with_base_url(dir.path(), "http://127.0.0.1:9/?q=").unwrap();
        let err = scraper.download("三", false).unwrap_err();
        assert!(matches!(err, PosterError::Network { .. }));
        assert!(!scraper.path_for("三").exists());
    }
}
