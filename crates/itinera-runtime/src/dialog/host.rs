//! Drives a renderer from broker state.

use super::{DialogControls, DialogEvent, DialogProps, DialogRenderer};
use crate::confirm::{ConfirmationBroker, WeakBroker};
use tokio::sync::watch;
use tracing::debug;

/// Mount point for the confirmation dialog.
///
/// Subscribes to the broker and re-renders whenever the displayed props
/// change. The host holds only a weak broker handle; once the root drops
/// the broker, [`run`](Self::run) returns.
///
/// # Example
///
/// ```
/// use itinera_runtime::confirm::{ConfirmationBroker, ConfirmationOptions};
/// use itinera_runtime::dialog::{DialogEvent, DialogHost};
/// use itinera_runtime::testing::RecordingRenderer;
///
/// let broker = ConfirmationBroker::new();
/// let mut host = DialogHost::new(&broker, RecordingRenderer::new());
/// host.pump();
///
/// let mut answer = broker.request_confirmation(ConfirmationOptions::new("Keep going?"));
/// host.pump();
/// assert!(host.renderer().last().unwrap().visible);
///
/// assert!(host.dispatch(DialogEvent::Accept));
/// host.pump();
/// assert_eq!(answer.try_outcome(), Some(true));
/// assert!(!host.renderer().last().unwrap().visible);
/// ```
pub struct DialogHost<R> {
    broker: WeakBroker,
    renderer: R,
    rx: watch::Receiver<DialogProps>,
    shown: Option<DialogProps>,
}

impl<R: DialogRenderer> DialogHost<R> {
    /// Mounts `renderer` against `broker`.
    ///
    /// Nothing is rendered until the first [`pump`](Self::pump) or
    /// [`run`](Self::run).
    #[must_use]
    pub fn new(broker: &ConfirmationBroker, renderer: R) -> Self {
        Self {
            broker: broker.downgrade(),
            renderer,
            rx: broker.subscribe(),
            shown: None,
        }
    }

    /// Renders if the props changed since the last render (or nothing has
    /// been rendered yet). Returns `true` if the renderer was called.
    pub fn pump(&mut self) -> bool {
        let changed = self.rx.has_changed().unwrap_or(false);
        if self.shown.is_some() && !changed {
            return false;
        }
        self.render_latest()
    }

    /// Routes an input event to the request currently on screen.
    ///
    /// Returns `true` if it settled that request.
    pub fn dispatch(&self, event: DialogEvent) -> bool {
        match self.controls() {
            Some(controls) => controls.dispatch(event),
            None => false,
        }
    }

    /// Props most recently handed to the renderer.
    #[must_use]
    pub fn shown(&self) -> Option<&DialogProps> {
        self.shown.as_ref()
    }

    /// The mounted renderer.
    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// The mounted renderer, mutably.
    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// Unmounts and returns the renderer.
    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    /// Render loop. Returns when the broker is dropped.
    pub async fn run(mut self) -> R {
        self.render_latest();
        while self.rx.changed().await.is_ok() {
            self.render_latest();
        }
        debug!("Dialog host stopped: broker dropped");
        self.renderer
    }

    fn controls(&self) -> Option<DialogControls> {
        let broker = self.broker.upgrade()?;
        let shown = self.shown.as_ref()?;
        Some(broker.controls_for(shown))
    }

    /// Returns `false` once the broker is gone.
    fn render_latest(&mut self) -> bool {
        let props = self.rx.borrow_and_update().clone();
        let Some(broker) = self.broker.upgrade() else {
            return false;
        };
        let controls = broker.controls_for(&props);
        drop(broker);
        self.renderer.render(&props, &controls);
        self.shown = Some(props);
        true
    }
}

impl<R: std::fmt::Debug> std::fmt::Debug for DialogHost<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DialogHost")
            .field("renderer", &self.renderer)
            .field("shown", &self.shown)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::confirm::ConfirmationOptions;
    use crate::testing::RecordingRenderer;

    #[test]
    fn first_pump_renders_hidden() {
        let broker = ConfirmationBroker::new();
        let mut host = DialogHost::new(&broker, RecordingRenderer::new());

        assert!(host.pump());
        assert_eq!(host.renderer().frames().len(), 1);
        assert!(!host.renderer().frames()[0].visible);

        // No change: no render.
        assert!(!host.pump());
        assert_eq!(host.renderer().frames().len(), 1);
    }

    #[test]
    fn dispatch_without_render_is_ignored() {
        let broker = ConfirmationBroker::new();
        let host = DialogHost::new(&broker, RecordingRenderer::new());
        let mut answer = broker.request_confirmation(ConfirmationOptions::new("Go?"));

        // The host has not shown the dialog yet.
        assert!(!host.dispatch(DialogEvent::Accept));
        assert_eq!(answer.try_outcome(), None);
    }

    #[test]
    fn dispatch_targets_shown_request() {
        let broker = ConfirmationBroker::new();
        let mut host = DialogHost::new(&broker, RecordingRenderer::new());
        let _first = broker.request_confirmation(ConfirmationOptions::new("First?"));
        host.pump();

        let mut second = broker.request_confirmation(ConfirmationOptions::new("Second?"));
        // Shown props still describe the first request.
        assert!(!host.dispatch(DialogEvent::Accept));

        host.pump();
        assert!(host.dispatch(DialogEvent::Accept));
        assert_eq!(second.try_outcome(), Some(true));
    }

    #[test]
    fn pump_after_broker_dropped_renders_nothing() {
        let broker = ConfirmationBroker::new();
        let mut host = DialogHost::new(&broker, RecordingRenderer::new());
        drop(broker);

        assert!(!host.pump());
        assert!(host.renderer().frames().is_empty());
        assert!(host.shown().is_none());
    }

    #[tokio::test]
    async fn run_stops_when_broker_dropped() {
        let broker = ConfirmationBroker::new();
        let host = DialogHost::new(&broker, RecordingRenderer::new());
        let task = tokio::spawn(host.run());

        tokio::task::yield_now().await;
        drop(broker);

        // Completes instead of waiting forever.
        let _renderer = task.await.unwrap();
    }
}
