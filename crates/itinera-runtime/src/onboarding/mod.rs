//! First-run onboarding carousel.
//!
//! The carousel is shown until the user finishes or skips it; either sets
//! the [`ONBOARDING_COMPLETE_KEY`] flag in the host's [`FlagStore`].
//!
//! # Example
//!
//! ```
//! use itinera_runtime::onboarding::{Carousel, MemoryFlagStore, Onboarding, OnboardingStep, Slide};
//!
//! let carousel = Carousel::new(vec![Slide::new("Welcome", "Let's plan a trip.")]);
//! let mut onboarding = Onboarding::new(carousel, MemoryFlagStore::new());
//!
//! assert!(onboarding.should_show().unwrap());
//! assert_eq!(onboarding.advance().unwrap(), OnboardingStep::Finished);
//! assert!(!onboarding.should_show().unwrap());
//! ```

mod carousel;
mod flag;

pub use carousel::{Carousel, Slide};
pub use flag::{FlagError, FlagStore, JsonFileFlagStore, MemoryFlagStore};

use tracing::info;

/// Flag set once onboarding has been completed or skipped.
pub const ONBOARDING_COMPLETE_KEY: &str = "onboarding_complete";

/// Result of [`Onboarding::advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnboardingStep {
    /// Now showing the slide at this index.
    Slide(usize),
    /// The last slide was passed and the flag is set.
    Finished,
}

/// Carousel plus completion flag.
#[derive(Debug)]
pub struct Onboarding<S> {
    carousel: Carousel,
    store: S,
}

impl<S: FlagStore> Onboarding<S> {
    #[must_use]
    pub fn new(carousel: Carousel, store: S) -> Self {
        Self { carousel, store }
    }

    /// `true` until the completion flag is set.
    ///
    /// # Errors
    ///
    /// Returns [`FlagError`] if the store cannot be read.
    pub fn should_show(&self) -> Result<bool, FlagError> {
        Ok(!self.store.get(ONBOARDING_COMPLETE_KEY)?)
    }

    #[must_use]
    pub fn carousel(&self) -> &Carousel {
        &self.carousel
    }

    pub fn carousel_mut(&mut self) -> &mut Carousel {
        &mut self.carousel
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Moves to the next slide, finishing after the last one.
    ///
    /// # Errors
    ///
    /// Returns [`FlagError`] if finishing fails to write the flag.
    pub fn advance(&mut self) -> Result<OnboardingStep, FlagError> {
        if self.carousel.next() {
            Ok(OnboardingStep::Slide(self.carousel.index()))
        } else {
            self.finish()?;
            Ok(OnboardingStep::Finished)
        }
    }

    /// Marks onboarding complete.
    ///
    /// # Errors
    ///
    /// Returns [`FlagError`] if the flag cannot be written.
    pub fn finish(&mut self) -> Result<(), FlagError> {
        self.store.set(ONBOARDING_COMPLETE_KEY, true)?;
        info!(slides = self.carousel.len(), "Onboarding finished");
        Ok(())
    }

    /// Dismisses onboarding without viewing the rest.
    ///
    /// # Errors
    ///
    /// Returns [`FlagError`] if the flag cannot be written.
    pub fn skip(&mut self) -> Result<(), FlagError> {
        self.store.set(ONBOARDING_COMPLETE_KEY, true)?;
        info!(at = self.carousel.index(), "Onboarding skipped");
        Ok(())
    }

    /// Clears the flag and rewinds to the first slide.
    ///
    /// # Errors
    ///
    /// Returns [`FlagError`] if the flag cannot be written.
    pub fn reset(&mut self) -> Result<(), FlagError> {
        self.store.set(ONBOARDING_COMPLETE_KEY, false)?;
        self.carousel.go_to(0);
        Ok(())
    }
}
