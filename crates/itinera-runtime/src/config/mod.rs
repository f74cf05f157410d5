//! Configuration management with hierarchical layering.
//!
//! ```text
//! Priority (highest to lowest):
//!
//! ┌────────────────────────────────────────────┐
//! │  1. CLI flags (ConfigResolver)             │
//! ├────────────────────────────────────────────┤
//! │  2. Environment Variables (ITINERA_*)      │
//! ├────────────────────────────────────────────┤
//! │  3. Project Config (.itinera/config.toml)  │
//! ├────────────────────────────────────────────┤
//! │  4. Global Config (~/.itinera/config.toml) │
//! ├────────────────────────────────────────────┤
//! │  5. Default Values                         │
//! └────────────────────────────────────────────┘
//! ```
//!
//! # Environment Variables
//!
//! | Variable | Config Field | Type |
//! |----------|--------------|------|
//! | `ITINERA_DEBUG` | `debug` | bool |
//! | `ITINERA_VERBOSE` | `ui.verbose` | bool |
//! | `ITINERA_COLOR` | `ui.color` | bool |
//! | `ITINERA_OVERLAP` | `dialog.overlap` | `replace` / `queue` / `reject` |
//! | `ITINERA_CANCEL_KEY` | `dialog.cancel_key` | key name |
//! | `ITINERA_LOCALE` | `locale.language` | String |
//! | `ITINERA_FLAG_FILE` | `onboarding.flag_file` | PathBuf |
//!
//! # Example Configuration
//!
//! ```toml
//! debug = false
//!
//! [dialog]
//! overlap = "queue"
//! cancel_key = "escape"
//!
//! [locale]
//! language = "ja"
//! confirm_label = "はい"
//!
//! [ui]
//! verbose = false
//! color = true
//!
//! [onboarding]
//! flag_file = "/home/me/.itinera/flags.json"
//!
//! [catalog]
//! path = "catalog.json"
//! ```

mod error;
mod loader;
mod resolver;
mod types;

pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use resolver::{ConfigResolver, NoOpResolver};
pub use types::{
    CatalogConfig, DialogConfig, ItineraConfig, LocaleConfig, OnboardingConfig, UiConfig,
};

/// Default global config directory (`~/.itinera`).
pub fn default_config_dir() -> std::path::PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| std::path::PathBuf::from("."))
        .join(".itinera")
}

/// Default global config file path.
pub fn default_config_path() -> std::path::PathBuf {
    default_config_dir().join("config.toml")
}

/// Project config directory name.
pub const PROJECT_CONFIG_DIR: &str = ".itinera";

/// Project config file name.
pub const PROJECT_CONFIG_FILE: &str = "config.toml";
