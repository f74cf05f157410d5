//! Slide stepper.

use serde::{Deserialize, Serialize};

/// One onboarding slide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slide {
    pub title: String,
    pub body: String,
}

impl Slide {
    #[must_use]
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }
}

/// Cursor over a fixed list of slides.
///
/// The index is clamped: `next` on the last slide and `prev` on the first
/// are no-ops that return `false`.
///
/// # Example
///
/// ```
/// use itinera_runtime::onboarding::{Carousel, Slide};
///
/// let mut carousel = Carousel::new(vec![
///     Slide::new("Plan", "Drag attractions into your days."),
///     Slide::new("Share", "Send the trip to friends."),
/// ]);
///
/// assert!(carousel.is_first());
/// assert!(carousel.next());
/// assert!(carousel.is_last());
/// assert!(!carousel.next());
/// assert_eq!(carousel.progress(), (2, 2));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Carousel {
    slides: Vec<Slide>,
    index: usize,
}

impl Carousel {
    #[must_use]
    pub fn new(slides: Vec<Slide>) -> Self {
        Self { slides, index: 0 }
    }

    /// Advances one slide. Returns `false` at the end.
    pub fn next(&mut self) -> bool {
        if self.index + 1 < self.slides.len() {
            self.index += 1;
            true
        } else {
            false
        }
    }

    /// Steps back one slide. Returns `false` at the start.
    pub fn prev(&mut self) -> bool {
        if self.index > 0 {
            self.index -= 1;
            true
        } else {
            false
        }
    }

    /// Jumps to `index`. Out-of-range indices are ignored.
    pub fn go_to(&mut self, index: usize) -> bool {
        if index < self.slides.len() {
            self.index = index;
            true
        } else {
            false
        }
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn is_first(&self) -> bool {
        self.index == 0
    }

    /// `true` on the final slide, and for an empty carousel.
    #[must_use]
    pub fn is_last(&self) -> bool {
        self.index + 1 >= self.slides.len()
    }

    #[must_use]
    pub fn current(&self) -> Option<&Slide> {
        self.slides.get(self.index)
    }

    #[must_use]
    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// One-based position and total, e.g. `(1, 3)` on the first of three.
    /// An empty carousel reports `(0, 0)`.
    #[must_use]
    pub fn progress(&self) -> (usize, usize) {
        if self.slides.is_empty() {
            (0, 0)
        } else {
            (self.index + 1, self.slides.len())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three() -> Carousel {
        Carousel::new(vec![
            Slide::new("a", "1"),
            Slide::new("b", "2"),
            Slide::new("c", "3"),
        ])
    }

    #[test]
    fn walk_forward_and_back() {
        let mut c = three();
        assert!(c.is_first());
        assert!(!c.prev());

        assert!(c.next());
        assert!(c.next());
        assert!(c.is_last());
        assert!(!c.next());
        assert_eq!(c.current().map(|s| s.title.as_str()), Some("c"));

        assert!(c.prev());
        assert_eq!(c.index(), 1);
    }

    #[test]
    fn go_to_bounds() {
        let mut c = three();
        assert!(c.go_to(2));
        assert_eq!(c.progress(), (3, 3));
        assert!(!c.go_to(3));
        assert_eq!(c.index(), 2);
    }

    #[test]
    fn empty_carousel() {
        let mut c = Carousel::new(Vec::new());
        assert!(c.is_empty());
        assert!(c.is_first());
        assert!(c.is_last());
        assert!(c.current().is_none());
        assert!(!c.next());
        assert_eq!(c.progress(), (0, 0));
    }
}
