//! Named style lookup
//!
//! The process-wide registry is built once, on first use, from the built-in
//! layer combinations and is read-only afterwards.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;

use crate::errors::ConfigError;
use crate::styles::{Style, StyleLayer};

pub static REGISTRY: Lazy<StyleRegistry> = Lazy::new(StyleRegistry::builtin);

/// Resolve a style from the built-in registry
pub fn resolve_style(name: &str) -> Result<&'static Style, ConfigError> {
    REGISTRY.resolve(name)
}

/// Sorted names of all built-in styles
pub fn style_names() -> Vec<&'static str> {
    REGISTRY.names()
}

#[derive(Debug, Clone, Default)]
pub struct StyleRegistry {
    styles: BTreeMap<String, Style>,
}

impl StyleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding every built-in style
    pub fn builtin() -> Self {
        let base = Style::base();
        let small = StyleLayer::small();
        let a4 = StyleLayer::a4();
        let minimalist = StyleLayer::minimalist();
        let monochrome = StyleLayer::monochrome();
        let solutions = StyleLayer::solutions();

        let definitions: [(&str, Vec<&StyleLayer>); 8] = [
            ("default", vec![]),
            ("small", vec![&small]),
            ("a4", vec![&a4]),
            ("minimalist", vec![&minimalist]),
            ("monochrome", vec![&monochrome]),
            ("minimalist_small", vec![&minimalist, &small]),
            ("minimalist_a4", vec![&minimalist, &a4]),
            ("solutions", vec![&solutions]),
        ];

        let mut registry = Self::new();
        for (name, layers) in definitions {
            if let Err(e) = registry.register(name, Style::merged(name, &base, &layers)) {
                log::error!("Skipping built-in style: {e}");
            }
        }
        log::debug!("Style registry built with {} styles", registry.len());
        registry
    }

    /// Add or replace a style. Names are case-insensitive. A level palette
    /// must color every JLPT level.
    pub fn register(&mut self, name: &str, mut style: Style) -> Result<(), ConfigError> {
        let key = name.to_lowercase();
        if !style.palette.covers_all_levels() {
            return Err(ConfigError::IncompletePalette(key));
        }
        style.name = key.clone();
        self.styles.insert(key, style);
        Ok(())
    }

    pub fn resolve(&self, name: &str) -> Result<&Style, ConfigError> {
        self.styles
            .get(&name.to_lowercase())
            .ok_or_else(|| ConfigError::UnknownStyle {
                name: name.to_string(),
                available: self.names().join(", "),
            })
    }

    /// Registered names, sorted
    pub fn names(&self) -> Vec<&str> {
        self.styles.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }
}
