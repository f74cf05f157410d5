//! Localized strings for dialog defaults.
//!
//! String lookup is owned by the host application; the broker only needs
//! two keys. Anything implementing [`Localizer`] can be plugged in.

use std::collections::HashMap;
use std::sync::Arc;

/// Key for the default accept label.
pub const CONFIRM_LABEL_KEY: &str = "dialog.confirm";

/// Key for the default decline label.
pub const CANCEL_LABEL_KEY: &str = "dialog.cancel";

/// English fallback for [`CONFIRM_LABEL_KEY`].
pub const DEFAULT_CONFIRM_LABEL: &str = "Confirm";

/// English fallback for [`CANCEL_LABEL_KEY`].
pub const DEFAULT_CANCEL_LABEL: &str = "Cancel";

/// Key → localized string.
pub trait Localizer: Send + Sync {
    /// Returns the string for `key`, or `None` if it has no translation.
    fn lookup(&self, key: &str) -> Option<String>;
}

/// In-memory string table.
///
/// # Example
///
/// ```
/// use itinera_runtime::locale::{Localizer, StaticLocalizer, CONFIRM_LABEL_KEY};
///
/// let ja = StaticLocalizer::builtin("ja");
/// assert_eq!(ja.lookup(CONFIRM_LABEL_KEY).as_deref(), Some("確認"));
///
/// let custom = StaticLocalizer::new("en-AU").with_entry(CONFIRM_LABEL_KEY, "Righto");
/// assert_eq!(custom.lookup(CONFIRM_LABEL_KEY).as_deref(), Some("Righto"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct StaticLocalizer {
    locale: String,
    entries: HashMap<String, String>,
}

impl StaticLocalizer {
    /// Creates an empty table for `locale`.
    #[must_use]
    pub fn new(locale: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            entries: HashMap::new(),
        }
    }

    /// Table with the bundled dialog labels for `locale`.
    ///
    /// Region suffixes are ignored (`"fr-CA"` uses `"fr"`). Unknown
    /// languages yield an empty table, so lookups fall through to English.
    #[must_use]
    pub fn builtin(locale: &str) -> Self {
        let language = locale
            .split(['-', '_'])
            .next()
            .unwrap_or(locale)
            .to_lowercase();

        let (confirm, cancel) = match language.as_str() {
            "en" => ("Confirm", "Cancel"),
            "ja" => ("確認", "キャンセル"),
            "fr" => ("Confirmer", "Annuler"),
            "de" => ("Bestätigen", "Abbrechen"),
            "es" => ("Confirmar", "Cancelar"),
            "zh" => ("确认", "取消"),
            _ => return Self::new(locale),
        };

        Self::new(locale)
            .with_entry(CONFIRM_LABEL_KEY, confirm)
            .with_entry(CANCEL_LABEL_KEY, cancel)
    }

    /// Adds or replaces an entry.
    #[must_use]
    pub fn with_entry(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.insert(key.into(), value.into());
        self
    }

    /// Locale tag this table was built for.
    #[must_use]
    pub fn locale(&self) -> &str {
        &self.locale
    }
}

impl Localizer for StaticLocalizer {
    fn lookup(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }
}

/// Fills in labels the caller left unset.
///
/// Order: explicit option, configured override, localizer, English.
#[derive(Clone, Default)]
pub(crate) struct LabelResolver {
    localizer: Option<Arc<dyn Localizer>>,
    confirm_override: Option<String>,
    cancel_override: Option<String>,
}

impl LabelResolver {
    pub(crate) fn new(
        localizer: Option<Arc<dyn Localizer>>,
        confirm_override: Option<String>,
        cancel_override: Option<String>,
    ) -> Self {
        Self {
            localizer,
            confirm_override,
            cancel_override,
        }
    }

    pub(crate) fn confirm_label(&self, explicit: Option<String>) -> String {
        self.pick(
            explicit,
            self.confirm_override.as_ref(),
            CONFIRM_LABEL_KEY,
            DEFAULT_CONFIRM_LABEL,
        )
    }

    pub(crate) fn cancel_label(&self, explicit: Option<String>) -> String {
        self.pick(
            explicit,
            self.cancel_override.as_ref(),
            CANCEL_LABEL_KEY,
            DEFAULT_CANCEL_LABEL,
        )
    }

    fn pick(
        &self,
        explicit: Option<String>,
        configured: Option<&String>,
        key: &str,
        fallback: &str,
    ) -> String {
        explicit
            .or_else(|| configured.cloned())
            .or_else(|| self.localizer.as_ref().and_then(|l| l.lookup(key)))
            .unwrap_or_else(|| fallback.to_string())
    }
}

impl std::fmt::Debug for LabelResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LabelResolver")
            .field("has_localizer", &self.localizer.is_some())
            .field("confirm_override", &self.confirm_override)
            .field("cancel_override", &self.cancel_override)
            .finish()
    }
}
