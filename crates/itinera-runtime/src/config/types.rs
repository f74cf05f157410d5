//! Configuration types.
//!
//! All types implement [`Default`] for compile-time fallback values.

use super::default_config_dir;
use crate::confirm::OverlapPolicy;
use crate::dialog::DialogKey;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure, after merging all layers.
///
/// # Example
///
/// ```
/// use itinera_runtime::config::ItineraConfig;
/// use itinera_runtime::confirm::OverlapPolicy;
///
/// let config = ItineraConfig::from_toml(r#"
/// [dialog]
/// overlap = "queue"
/// "#).unwrap();
///
/// assert_eq!(config.dialog.overlap, OverlapPolicy::Queue);
/// assert_eq!(config.locale.language, "en");
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ItineraConfig {
    /// Enable debug mode.
    pub debug: bool,

    /// Confirmation dialog behaviour.
    pub dialog: DialogConfig,

    /// Locale and default labels.
    pub locale: LocaleConfig,

    /// Terminal output.
    pub ui: UiConfig,

    /// Onboarding flag storage.
    pub onboarding: OnboardingConfig,

    /// Asset catalog source.
    pub catalog: CatalogConfig,
}

impl ItineraConfig {
    /// Creates a new config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Deserializes from TOML string.
    ///
    /// # Errors
    ///
    /// Returns error if deserialization fails.
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    /// Merges another config into this one.
    ///
    /// Values from `other` override values in `self` only if they differ
    /// from the default, so a layer that omits a field leaves it alone.
    pub fn merge(&mut self, other: &Self) {
        let default = Self::default();

        if other.debug != default.debug {
            self.debug = other.debug;
        }

        self.dialog.merge(&other.dialog);
        self.locale.merge(&other.locale);
        self.ui.merge(&other.ui);
        self.onboarding.merge(&other.onboarding);
        self.catalog.merge(&other.catalog);
    }
}

/// Confirmation dialog configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DialogConfig {
    /// What to do with a request issued while another is displayed.
    pub overlap: OverlapPolicy,

    /// Key that dismisses the dialog.
    pub cancel_key: DialogKey,
}

impl DialogConfig {
    fn merge(&mut self, other: &Self) {
        let default = Self::default();

        if other.overlap != default.overlap {
            self.overlap = other.overlap;
        }
        if other.cancel_key != default.cancel_key {
            self.cancel_key = other.cancel_key.clone();
        }
    }
}

/// Locale configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LocaleConfig {
    /// Language tag used to pick bundled labels (e.g. `"en"`, `"ja-JP"`).
    pub language: String,

    /// Accept label for every dialog, overriding the locale.
    pub confirm_label: Option<String>,

    /// Decline label for every dialog, overriding the locale.
    pub cancel_label: Option<String>,
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            language: "en".into(),
            confirm_label: None,
            cancel_label: None,
        }
    }
}

impl LocaleConfig {
    fn merge(&mut self, other: &Self) {
        let default = Self::default();

        if other.language != default.language {
            self.language = other.language.clone();
        }
        if other.confirm_label.is_some() {
            self.confirm_label = other.confirm_label.clone();
        }
        if other.cancel_label.is_some() {
            self.cancel_label = other.cancel_label.clone();
        }
    }
}

/// UI configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct UiConfig {
    /// Verbose output mode.
    pub verbose: bool,

    /// Enable color output.
    pub color: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            verbose: false,
            color: true,
        }
    }
}

impl UiConfig {
    fn merge(&mut self, other: &Self) {
        let default = Self::default();

        if other.verbose != default.verbose {
            self.verbose = other.verbose;
        }
        if other.color != default.color {
            self.color = other.color;
        }
    }
}

/// Onboarding configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct OnboardingConfig {
    /// Flag file path. Defaults to `~/.itinera/flags.json`.
    pub flag_file: Option<PathBuf>,
}

impl OnboardingConfig {
    /// Returns the flag file path, applying the default.
    #[must_use]
    pub fn resolved_flag_file(&self) -> PathBuf {
        self.flag_file
            .clone()
            .unwrap_or_else(|| default_config_dir().join("flags.json"))
    }

    fn merge(&mut self, other: &Self) {
        if other.flag_file.is_some() {
            self.flag_file = other.flag_file.clone();
        }
    }
}

/// Asset catalog configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CatalogConfig {
    /// Path to the catalog JSON file.
    pub path: Option<PathBuf>,
}

impl CatalogConfig {
    fn merge(&mut self, other: &Self) {
        if other.path.is_some() {
            self.path = other.path.clone();
        }
    }
}
