//! CLI configuration overrides.
//!
//! Implements [`ConfigResolver`] for CLI flag overrides.

use itinera_runtime::config::{ConfigResolver, ItineraConfig};
use itinera_runtime::confirm::OverlapPolicy;
use std::path::PathBuf;

/// CLI configuration overrides.
///
/// Applied as the highest priority layer after file/env config loading.
/// Flags that were not given leave the loaded value alone.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    debug: Option<bool>,
    verbose: Option<bool>,
    color: Option<bool>,
    overlap: Option<OverlapPolicy>,
    locale: Option<String>,
    flag_file: Option<PathBuf>,
    catalog: Option<PathBuf>,
}

impl CliOverrides {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets debug mode when the flag was passed.
    #[must_use]
    pub fn debug(mut self, flag: bool) -> Self {
        if flag {
            self.debug = Some(true);
        }
        self
    }

    /// Sets verbose mode when the flag was passed.
    #[must_use]
    pub fn verbose(mut self, flag: bool) -> Self {
        if flag {
            self.verbose = Some(true);
        }
        self
    }

    /// Disables color when `--no-color` was passed.
    #[must_use]
    pub fn no_color(mut self, flag: bool) -> Self {
        if flag {
            self.color = Some(false);
        }
        self
    }

    #[must_use]
    pub fn overlap(mut self, policy: Option<OverlapPolicy>) -> Self {
        self.overlap = policy;
        self
    }

    #[must_use]
    pub fn locale(mut self, locale: Option<String>) -> Self {
        self.locale = locale;
        self
    }

    #[must_use]
    pub fn flag_file(mut self, path: Option<PathBuf>) -> Self {
        self.flag_file = path;
        self
    }

    #[must_use]
    pub fn catalog(mut self, path: Option<PathBuf>) -> Self {
        self.catalog = path;
        self
    }
}

impl ConfigResolver for CliOverrides {
    fn apply(&self, config: &mut ItineraConfig) {
        if let Some(v) = self.debug {
            config.debug = v;
        }
        if let Some(v) = self.verbose {
            config.ui.verbose = v;
        }
        if let Some(v) = self.color {
            config.ui.color = v;
        }
        if let Some(policy) = self.overlap {
            config.dialog.overlap = policy;
        }
        if let Some(ref locale) = self.locale {
            config.locale.language.clone_from(locale);
        }
        if let Some(ref path) = self.flag_file {
            config.onboarding.flag_file = Some(path.clone());
        }
        if let Some(ref path) = self.catalog {
            config.catalog.path = Some(path.clone());
        }
    }
}
