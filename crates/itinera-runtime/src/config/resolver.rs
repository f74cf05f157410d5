//! Configuration resolver trait for layered overrides.
//!
//! ```text
//! ConfigLoader.load()  →  ItineraConfig (base)
//!                              │
//!                              ▼
//!                     ConfigResolver.apply()
//!                              │
//!                              ▼
//!                     ItineraConfig (final)
//! ```

use super::ItineraConfig;

/// Trait for applying configuration overrides.
///
/// Separates file/env loading from runtime overrides such as CLI flags.
pub trait ConfigResolver {
    /// Applies overrides to the given configuration.
    ///
    /// Only values the caller actually specified should be applied.
    fn apply(&self, config: &mut ItineraConfig);
}

/// No-op resolver that makes no changes.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpResolver;

impl ConfigResolver for NoOpResolver {
    fn apply(&self, _config: &mut ItineraConfig) {}
}
