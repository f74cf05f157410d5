//! The confirmation broker and its pending slot.

use super::{Confirmation, ConfirmationOptions, OverlapPolicy};
use crate::config::{DialogConfig, LocaleConfig};
use crate::dialog::{DialogControls, DialogKey, DialogProps};
use crate::locale::{LabelResolver, Localizer, StaticLocalizer};
use itinera_types::{ConfirmationId, DialogKind};
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::{Arc, Weak};
use tokio::sync::{oneshot, watch};
use tracing::{debug, info, trace, warn};

/// Observable broker state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrokerState {
    /// No confirmation is displayed.
    Idle,
    /// One confirmation is displayed and waiting for the user.
    AwaitingResponse,
}

/// A confirmation occupying (or waiting for) the pending slot.
///
/// Labels are already resolved against the locale. The completion sender is
/// private and consumed by [`settle`](Self::settle), so each request can be
/// settled at most once.
#[derive(Debug)]
pub(crate) struct PendingConfirmation {
    id: ConfirmationId,
    title: Option<String>,
    message: String,
    confirm_label: String,
    cancel_label: String,
    kind: DialogKind,
    settle: oneshot::Sender<bool>,
}

impl PendingConfirmation {
    fn resolve(
        id: ConfirmationId,
        options: ConfirmationOptions,
        labels: &LabelResolver,
        settle: oneshot::Sender<bool>,
    ) -> Self {
        Self {
            id,
            title: options.title,
            message: options.message,
            confirm_label: labels.confirm_label(options.confirm_label),
            cancel_label: labels.cancel_label(options.cancel_label),
            kind: options.kind,
            settle,
        }
    }

    fn id(&self) -> ConfirmationId {
        self.id
    }

    fn props(&self) -> DialogProps {
        DialogProps {
            visible: true,
            id: Some(self.id),
            title: self.title.clone(),
            message: self.message.clone(),
            confirm_label: self.confirm_label.clone(),
            cancel_label: self.cancel_label.clone(),
            kind: self.kind,
        }
    }

    /// Returns `true` once the caller has dropped its [`Confirmation`].
    fn is_abandoned(&self) -> bool {
        self.settle.is_closed()
    }

    /// Delivers the outcome. Returns `false` if the caller dropped its
    /// [`Confirmation`] before the user answered.
    fn settle(self, outcome: bool) -> bool {
        self.settle.send(outcome).is_ok()
    }
}

#[derive(Debug, Default)]
struct Slot {
    active: Option<PendingConfirmation>,
    queue: VecDeque<PendingConfirmation>,
    /// Requests displaced under [`OverlapPolicy::Replace`]. Their senders are
    /// kept alive so the abandoned futures stay pending rather than reading
    /// as a decline. Entries whose caller has gone are pruned on each
    /// replacement.
    superseded: Vec<PendingConfirmation>,
}

impl Slot {
    fn props(&self) -> DialogProps {
        self.active
            .as_ref()
            .map_or_else(DialogProps::hidden, PendingConfirmation::props)
    }
}

#[derive(Debug)]
struct Shared {
    slot: Mutex<Slot>,
    view_tx: watch::Sender<DialogProps>,
    policy: OverlapPolicy,
    cancel_key: DialogKey,
    labels: LabelResolver,
}

impl Shared {
    /// Publishes the slot's current props. Called with the slot lock held so
    /// observers see transitions in the order they happened.
    fn publish(&self, slot: &Slot) {
        self.view_tx.send_replace(slot.props());
    }
}

/// Process-wide confirmation broker.
///
/// A cheap-to-clone handle: clones share one pending slot. Construct one at
/// the root of the view tree and pass it down explicitly; tests build their
/// own instances.
///
/// Dropping the last handle resolves every outstanding [`Confirmation`]
/// (active, queued, or superseded) to `false`.
#[derive(Debug, Clone)]
pub struct ConfirmationBroker {
    shared: Arc<Shared>,
}

impl ConfirmationBroker {
    /// Creates a broker with default policy, cancel key and English labels.
    #[must_use]
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Returns a builder for a customised broker.
    #[must_use]
    pub fn builder() -> BrokerBuilder {
        BrokerBuilder::default()
    }

    /// Asks the user a yes/no question.
    ///
    /// Returns immediately with a [`Confirmation`] that resolves once the
    /// user answers. If the slot is empty the dialog becomes visible; if a
    /// request is already active the broker's [`OverlapPolicy`] applies.
    pub fn request_confirmation(&self, options: ConfirmationOptions) -> Confirmation {
        let (tx, rx) = oneshot::channel();
        let id = ConfirmationId::new();
        let pending = PendingConfirmation::resolve(id, options, &self.shared.labels, tx);
        let kind = pending.kind;

        let mut slot = self.shared.slot.lock();
        match slot.active.as_ref().map(PendingConfirmation::id) {
            None => {
                slot.active = Some(pending);
                self.shared.publish(&slot);
                debug!(confirmation_id = %id, kind = %kind, "Confirmation requested");
            }
            Some(active_id) => match self.shared.policy {
                OverlapPolicy::Replace => {
                    slot.superseded.retain(|p| !p.is_abandoned());
                    if let Some(previous) = slot.active.replace(pending) {
                        if !previous.is_abandoned() {
                            slot.superseded.push(previous);
                        }
                    }
                    self.shared.publish(&slot);
                    warn!(
                        confirmation_id = %id,
                        superseded = %active_id,
                        "Confirmation replaced an unanswered one; the earlier request will not resolve"
                    );
                }
                OverlapPolicy::Queue => {
                    slot.queue.push_back(pending);
                    debug!(
                        confirmation_id = %id,
                        active = %active_id,
                        queued = slot.queue.len(),
                        "Confirmation queued"
                    );
                }
                OverlapPolicy::Reject => {
                    pending.settle(false);
                    debug!(
                        confirmation_id = %id,
                        active = %active_id,
                        "Confirmation rejected while another is active"
                    );
                }
            },
        }

        Confirmation::new(id, rx)
    }

    /// Settles the active request with `outcome` and clears the slot.
    ///
    /// Returns the ID of the settled request, or `None` if nothing was
    /// pending (in which case this is a no-op). Under
    /// [`OverlapPolicy::Queue`] the next queued request becomes active.
    pub fn settle(&self, outcome: bool) -> Option<ConfirmationId> {
        self.settle_where(None, outcome)
    }

    /// Settles the active request only if it is `id`.
    ///
    /// Used by renderer controls so that input aimed at a dialog that is no
    /// longer displayed is dropped. Returns `true` if a request was settled.
    pub fn settle_if_current(&self, id: ConfirmationId, outcome: bool) -> bool {
        self.settle_where(Some(id), outcome).is_some()
    }

    fn settle_where(&self, expected: Option<ConfirmationId>, outcome: bool) -> Option<ConfirmationId> {
        let mut slot = self.shared.slot.lock();
        let Some(active_id) = slot.active.as_ref().map(PendingConfirmation::id) else {
            trace!(outcome, "Settle ignored: no pending confirmation");
            return None;
        };
        if let Some(expected) = expected {
            if expected != active_id {
                trace!(confirmation_id = %expected, outcome, "Settle ignored: not the active confirmation");
                return None;
            }
        }

        let active = slot.active.take()?;
        let delivered = active.settle(outcome);
        slot.active = slot.queue.pop_front();
        self.shared.publish(&slot);

        info!(confirmation_id = %active_id, outcome, "Confirmation settled");
        if !delivered {
            debug!(confirmation_id = %active_id, "Requester dropped its confirmation before settlement");
        }
        if let Some(next) = slot.active.as_ref() {
            debug!(confirmation_id = %next.id, "Next queued confirmation displayed");
        }

        Some(active_id)
    }

    /// Returns the current state.
    #[must_use]
    pub fn state(&self) -> BrokerState {
        if self.is_pending() {
            BrokerState::AwaitingResponse
        } else {
            BrokerState::Idle
        }
    }

    /// Returns `true` if a confirmation is displayed.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.shared.slot.lock().active.is_some()
    }

    /// Returns the ID of the active request.
    #[must_use]
    pub fn active_id(&self) -> Option<ConfirmationId> {
        self.shared.slot.lock().active.as_ref().map(PendingConfirmation::id)
    }

    /// Returns the props the renderer should currently display.
    #[must_use]
    pub fn current(&self) -> DialogProps {
        self.shared.slot.lock().props()
    }

    /// Number of requests waiting behind the active one.
    #[must_use]
    pub fn queued_len(&self) -> usize {
        self.shared.slot.lock().queue.len()
    }

    /// Number of requests displaced by replacement and left unresolved.
    #[must_use]
    pub fn superseded_len(&self) -> usize {
        self.shared.slot.lock().superseded.len()
    }

    /// Returns the overlap policy.
    #[must_use]
    pub fn policy(&self) -> OverlapPolicy {
        self.shared.policy
    }

    /// Returns the key that dismisses the dialog.
    #[must_use]
    pub fn cancel_key(&self) -> &DialogKey {
        &self.shared.cancel_key
    }

    /// Subscribes to display changes.
    ///
    /// The receiver starts at the current props; each request, replacement
    /// and settlement publishes a new value.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<DialogProps> {
        self.shared.view_tx.subscribe()
    }

    /// Controls bound to whatever `props` displays.
    ///
    /// Hidden props yield controls that do nothing.
    #[must_use]
    pub fn controls_for(&self, props: &DialogProps) -> DialogControls {
        DialogControls::new(self.clone(), props.id)
    }

    /// Controls bound to the active request, if any.
    #[must_use]
    pub fn controls(&self) -> Option<DialogControls> {
        self.active_id()
            .map(|id| DialogControls::new(self.clone(), Some(id)))
    }

    /// Returns a non-owning handle.
    #[must_use]
    pub fn downgrade(&self) -> WeakBroker {
        WeakBroker {
            shared: Arc::downgrade(&self.shared),
        }
    }
}

impl Default for ConfirmationBroker {
    fn default() -> Self {
        Self::new()
    }
}

/// Non-owning broker handle.
///
/// Held by long-lived observers (such as a dialog host) that must not keep
/// the broker alive past root unmount.
#[derive(Debug, Clone)]
pub struct WeakBroker {
    shared: Weak<Shared>,
}

impl WeakBroker {
    /// Returns a strong handle if the broker is still alive.
    #[must_use]
    pub fn upgrade(&self) -> Option<ConfirmationBroker> {
        self.shared
            .upgrade()
            .map(|shared| ConfirmationBroker { shared })
    }
}

/// Builder for [`ConfirmationBroker`].
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use itinera_runtime::confirm::{ConfirmationBroker, OverlapPolicy};
/// use itinera_runtime::dialog::DialogKey;
/// use itinera_runtime::locale::StaticLocalizer;
///
/// let broker = ConfirmationBroker::builder()
///     .policy(OverlapPolicy::Queue)
///     .cancel_key(DialogKey::Char('x'))
///     .localizer(Arc::new(StaticLocalizer::builtin("ja")))
///     .build();
///
/// assert_eq!(broker.policy(), OverlapPolicy::Queue);
/// ```
#[derive(Default)]
pub struct BrokerBuilder {
    policy: OverlapPolicy,
    cancel_key: DialogKey,
    localizer: Option<Arc<dyn Localizer>>,
    confirm_label: Option<String>,
    cancel_label: Option<String>,
}

impl BrokerBuilder {
    /// Sets the overlap policy.
    #[must_use]
    pub fn policy(mut self, policy: OverlapPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Sets the key that dismisses the dialog.
    #[must_use]
    pub fn cancel_key(mut self, key: DialogKey) -> Self {
        self.cancel_key = key;
        self
    }

    /// Sets the string lookup used for default labels.
    #[must_use]
    pub fn localizer(mut self, localizer: Arc<dyn Localizer>) -> Self {
        self.localizer = Some(localizer);
        self
    }

    /// Overrides the default accept label for every request.
    #[must_use]
    pub fn confirm_label(mut self, label: impl Into<String>) -> Self {
        self.confirm_label = Some(label.into());
        self
    }

    /// Overrides the default decline label for every request.
    #[must_use]
    pub fn cancel_label(mut self, label: impl Into<String>) -> Self {
        self.cancel_label = Some(label.into());
        self
    }

    /// Applies the `[dialog]` section of the configuration.
    #[must_use]
    pub fn config(mut self, config: &DialogConfig) -> Self {
        self.policy = config.overlap;
        self.cancel_key = config.cancel_key.clone();
        self
    }

    /// Applies the `[locale]` section: bundled labels for the language,
    /// plus any configured label overrides.
    #[must_use]
    pub fn locale(mut self, config: &LocaleConfig) -> Self {
        self.localizer = Some(Arc::new(StaticLocalizer::builtin(&config.language)));
        if let Some(ref label) = config.confirm_label {
            self.confirm_label = Some(label.clone());
        }
        if let Some(ref label) = config.cancel_label {
            self.cancel_label = Some(label.clone());
        }
        self
    }

    /// Builds the broker in the `Idle` state.
    #[must_use]
    pub fn build(self) -> ConfirmationBroker {
        let (view_tx, _) = watch::channel(DialogProps::hidden());
        let labels = LabelResolver::new(self.localizer, self.confirm_label, self.cancel_label);

        ConfirmationBroker {
            shared: Arc::new(Shared {
                slot: Mutex::new(Slot::default()),
                view_tx,
                policy: self.policy,
                cancel_key: self.cancel_key,
                labels,
            }),
        }
    }
}

impl std::fmt::Debug for BrokerBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BrokerBuilder")
            .field("policy", &self.policy)
            .field("cancel_key", &self.cancel_key)
            .field("has_localizer", &self.localizer.is_some())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::StaticLocalizer;

    fn warning(message: &str) -> ConfirmationOptions {
        ConfirmationOptions::new(message).with_kind(DialogKind::Warning)
    }

    #[test]
    fn starts_idle() {
        let broker = ConfirmationBroker::new();
        assert_eq!(broker.state(), BrokerState::Idle);
        assert!(!broker.is_pending());
        assert!(!broker.current().visible);
        assert!(broker.controls().is_none());
    }

    #[test]
    fn request_makes_dialog_visible() {
        let broker = ConfirmationBroker::new();
        let confirmation = broker.request_confirmation(warning("Delete this day?"));

        assert_eq!(broker.state(), BrokerState::AwaitingResponse);
        let props = broker.current();
        assert!(props.visible);
        assert_eq!(props.id, Some(confirmation.id()));
        assert_eq!(props.message, "Delete this day?");
        assert_eq!(props.kind, DialogKind::Warning);
    }

    #[test]
    fn default_labels_are_english() {
        let broker = ConfirmationBroker::new();
        let _confirmation = broker.request_confirmation(ConfirmationOptions::new("Continue?"));

        let props = broker.current();
        assert_eq!(props.confirm_label, "Confirm");
        assert_eq!(props.cancel_label, "Cancel");
    }

    #[test]
    fn labels_come_from_localizer() {
        let broker = ConfirmationBroker::builder()
            .localizer(Arc::new(StaticLocalizer::builtin("fr")))
            .build();
        let _confirmation = broker.request_confirmation(
            ConfirmationOptions::new("Continuer ?").with_cancel_label("Non merci"),
        );

        let props = broker.current();
        assert_eq!(props.confirm_label, "Confirmer");
        assert_eq!(props.cancel_label, "Non merci");
    }

    #[test]
    fn settle_accept_resolves_true_and_clears() {
        let broker = ConfirmationBroker::new();
        let mut confirmation = broker.request_confirmation(ConfirmationOptions::new("Go?"));

        let settled = broker.settle(true);
        assert_eq!(settled, Some(confirmation.id()));
        assert_eq!(confirmation.try_outcome(), Some(true));
        assert_eq!(broker.state(), BrokerState::Idle);
        assert!(!broker.current().visible);
    }

    #[test]
    fn settle_when_idle_is_noop() {
        let broker = ConfirmationBroker::new();
        assert_eq!(broker.settle(true), None);
        assert_eq!(broker.settle(false), None);
        assert_eq!(broker.state(), BrokerState::Idle);
    }

    #[test]
    fn second_settle_has_no_effect() {
        let broker = ConfirmationBroker::new();
        let mut confirmation = broker.request_confirmation(ConfirmationOptions::new("Go?"));

        assert!(broker.settle(false).is_some());
        assert!(broker.settle(true).is_none());
        assert_eq!(confirmation.try_outcome(), Some(false));
    }

    #[test]
    fn replace_leaves_first_unresolved() {
        let broker = ConfirmationBroker::new();
        let mut first = broker.request_confirmation(ConfirmationOptions::new("First?"));
        let mut second = broker.request_confirmation(ConfirmationOptions::new("Second?"));

        assert_eq!(broker.current().message, "Second?");
        assert_eq!(broker.superseded_len(), 1);

        broker.settle(true);
        assert_eq!(second.try_outcome(), Some(true));
        assert_eq!(first.try_outcome(), None);
        assert!(!broker.is_pending());
    }

    #[test]
    fn dropped_superseded_requests_are_pruned() {
        let broker = ConfirmationBroker::new();
        for n in 0..1000 {
            drop(broker.request_confirmation(ConfirmationOptions::new(format!("Request {n}?"))));
        }
        assert_eq!(broker.superseded_len(), 0);

        let mut kept = broker.request_confirmation(ConfirmationOptions::new("Kept?"));
        let _latest = broker.request_confirmation(ConfirmationOptions::new("Latest?"));
        assert_eq!(broker.superseded_len(), 1);

        drop(broker.request_confirmation(ConfirmationOptions::new("Dropped?")));
        let _newest = broker.request_confirmation(ConfirmationOptions::new("Newest?"));
        assert_eq!(broker.superseded_len(), 2);

        broker.settle(true);
        assert_eq!(kept.try_outcome(), None);
    }

    #[test]
    fn superseded_resolves_false_when_broker_dropped() {
        let broker = ConfirmationBroker::new();
        let mut first = broker.request_confirmation(ConfirmationOptions::new("First?"));
        let _second = broker.request_confirmation(ConfirmationOptions::new("Second?"));

        drop(broker);
        assert_eq!(first.try_outcome(), Some(false));
    }

    #[test]
    fn queue_serves_in_arrival_order() {
        let broker = ConfirmationBroker::builder()
            .policy(OverlapPolicy::Queue)
            .build();
        let mut first = broker.request_confirmation(ConfirmationOptions::new("First?"));
        let mut second = broker.request_confirmation(ConfirmationOptions::new("Second?"));
        let mut third = broker.request_confirmation(ConfirmationOptions::new("Third?"));

        assert_eq!(broker.current().message, "First?");
        assert_eq!(broker.queued_len(), 2);

        broker.settle(true);
        assert_eq!(first.try_outcome(), Some(true));
        assert_eq!(broker.current().message, "Second?");

        broker.settle(false);
        assert_eq!(second.try_outcome(), Some(false));
        assert_eq!(broker.current().message, "Third?");

        broker.settle(true);
        assert_eq!(third.try_outcome(), Some(true));
        assert_eq!(broker.state(), BrokerState::Idle);
        assert_eq!(broker.queued_len(), 0);
    }

    #[test]
    fn reject_declines_newcomer_immediately() {
        let broker = ConfirmationBroker::builder()
            .policy(OverlapPolicy::Reject)
            .build();
        let mut first = broker.request_confirmation(ConfirmationOptions::new("First?"));
        let mut second = broker.request_confirmation(ConfirmationOptions::new("Second?"));

        assert_eq!(second.try_outcome(), Some(false));
        assert_eq!(broker.current().message, "First?");
        assert_eq!(first.try_outcome(), None);

        broker.settle(true);
        assert_eq!(first.try_outcome(), Some(true));
    }

    #[test]
    fn settle_if_current_ignores_stale_id() {
        let broker = ConfirmationBroker::new();
        let first = broker.request_confirmation(ConfirmationOptions::new("First?"));
        let mut second = broker.request_confirmation(ConfirmationOptions::new("Second?"));

        assert!(!broker.settle_if_current(first.id(), true));
        assert!(broker.is_pending());

        assert!(broker.settle_if_current(second.id(), true));
        assert_eq!(second.try_outcome(), Some(true));
    }

    #[test]
    fn dropped_requester_still_clears_slot() {
        let broker = ConfirmationBroker::new();
        let confirmation = broker.request_confirmation(ConfirmationOptions::new("Go?"));
        drop(confirmation);

        assert!(broker.settle(true).is_some());
        assert!(!broker.is_pending());
    }

    #[test]
    fn subscribe_sees_transitions() {
        let broker = ConfirmationBroker::new();
        let mut rx = broker.subscribe();
        assert!(!rx.borrow().visible);

        let _confirmation = broker.request_confirmation(ConfirmationOptions::new("Go?"));
        assert!(rx.has_changed().unwrap());
        assert!(rx.borrow_and_update().visible);

        broker.settle(false);
        assert!(rx.has_changed().unwrap());
        assert!(!rx.borrow_and_update().visible);
    }

    #[test]
    fn builder_applies_dialog_config() {
        let config = DialogConfig {
            overlap: OverlapPolicy::Reject,
            cancel_key: DialogKey::Char('q'),
        };
        let broker = ConfirmationBroker::builder().config(&config).build();

        assert_eq!(broker.policy(), OverlapPolicy::Reject);
        assert_eq!(broker.cancel_key(), &DialogKey::Char('q'));
    }

    #[test]
    fn builder_applies_locale_config() {
        let config = LocaleConfig {
            language: "es-MX".into(),
            confirm_label: None,
            cancel_label: Some("No gracias".into()),
        };
        let broker = ConfirmationBroker::builder().locale(&config).build();

        let _confirmation = broker.request_confirmation(ConfirmationOptions::new("¿Seguro?"));
        let props = broker.current();
        assert_eq!(props.confirm_label, "Confirmar");
        assert_eq!(props.cancel_label, "No gracias");
    }

    #[test]
    fn weak_handle_does_not_keep_broker_alive() {
        let broker = ConfirmationBroker::new();
        let weak = broker.downgrade();
        assert!(weak.upgrade().is_some());

        drop(broker);
        assert!(weak.upgrade().is_none());
    }
}
