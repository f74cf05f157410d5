//! Test helpers for code that requests confirmations.
//!
//! [`RecordingRenderer`] stands in for a real dialog component: it keeps
//! every frame it was asked to draw so tests can assert on visibility
//! transitions and content.
//!
//! ```
//! use itinera_runtime::confirm::{ConfirmationBroker, ConfirmationOptions};
//! use itinera_runtime::dialog::DialogHost;
//! use itinera_runtime::testing::RecordingRenderer;
//!
//! let broker = ConfirmationBroker::new();
//! let mut host = DialogHost::new(&broker, RecordingRenderer::new());
//! host.pump();
//!
//! let _answer = broker.request_confirmation(ConfirmationOptions::new("Go?"));
//! host.pump();
//! broker.settle(true);
//! host.pump();
//!
//! assert_eq!(host.renderer().times_shown(), 1);
//! ```

use crate::dialog::{DialogControls, DialogProps, DialogRenderer};

/// Renderer that records frames instead of drawing them.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    frames: Vec<DialogProps>,
}

impl RecordingRenderer {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Every frame rendered, oldest first.
    #[must_use]
    pub fn frames(&self) -> &[DialogProps] {
        &self.frames
    }

    /// The most recent frame.
    #[must_use]
    pub fn last(&self) -> Option<&DialogProps> {
        self.frames.last()
    }

    /// Number of hidden → visible transitions (the first frame counts if visible).
    #[must_use]
    pub fn times_shown(&self) -> usize {
        let mut shown = 0;
        let mut was_visible = false;
        for frame in &self.frames {
            if frame.visible && !was_visible {
                shown += 1;
            }
            was_visible = frame.visible;
        }
        shown
    }

    /// Messages of every visible frame, in order.
    #[must_use]
    pub fn messages(&self) -> Vec<&str> {
        self.frames
            .iter()
            .filter(|f| f.visible)
            .map(|f| f.message.as_str())
            .collect()
    }

    /// Drops all recorded frames.
    pub fn clear(&mut self) {
        self.frames.clear();
    }
}

impl DialogRenderer for RecordingRenderer {
    fn render(&mut self, props: &DialogProps, _controls: &DialogControls) {
        self.frames.push(props.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(visible: bool, message: &str) -> DialogProps {
        DialogProps {
            visible,
            message: message.into(),
            ..DialogProps::default()
        }
    }

    #[test]
    fn times_shown_counts_transitions() {
        let mut recorder = RecordingRenderer::new();
        recorder.frames.push(frame(false, ""));
        recorder.frames.push(frame(true, "a"));
        recorder.frames.push(frame(true, "b"));
        recorder.frames.push(frame(false, ""));
        recorder.frames.push(frame(true, "c"));

        assert_eq!(recorder.times_shown(), 2);
        assert_eq!(recorder.messages(), vec!["a", "b", "c"]);
    }

    #[test]
    fn clear_empties() {
        let mut recorder = RecordingRenderer::new();
        recorder.frames.push(frame(true, "a"));
        recorder.clear();
        assert!(recorder.frames().is_empty());
        assert!(recorder.last().is_none());
    }
}
