//! Controls handed to renderers.

use super::{DialogEvent, DialogKey};
use crate::confirm::ConfirmationBroker;
use itinera_types::ConfirmationId;
use tracing::trace;

/// Accept/decline callbacks bound to one displayed request.
///
/// Every method returns `true` if it settled the request. Controls for a
/// request that is no longer active (already settled, or replaced) do
/// nothing, so late clicks on an exiting dialog are harmless.
#[derive(Debug, Clone)]
pub struct DialogControls {
    broker: ConfirmationBroker,
    id: Option<ConfirmationId>,
}

impl DialogControls {
    pub(crate) fn new(broker: ConfirmationBroker, id: Option<ConfirmationId>) -> Self {
        Self { broker, id }
    }

    /// The request these controls act on.
    #[must_use]
    pub fn id(&self) -> Option<ConfirmationId> {
        self.id
    }

    /// Accept button.
    pub fn accept(&self) -> bool {
        self.dispatch(DialogEvent::Accept)
    }

    /// Decline button.
    pub fn decline(&self) -> bool {
        self.dispatch(DialogEvent::Decline)
    }

    /// Click on the overlay outside the dialog.
    pub fn backdrop_click(&self) -> bool {
        self.dispatch(DialogEvent::Backdrop)
    }

    /// Key press while the dialog is visible.
    pub fn key_press(&self, key: DialogKey) -> bool {
        self.dispatch(DialogEvent::Key(key))
    }

    /// Routes an event to the broker.
    pub fn dispatch(&self, event: DialogEvent) -> bool {
        let Some(id) = self.id else {
            trace!(?event, "Dialog event ignored: nothing displayed");
            return false;
        };
        let Some(outcome) = event.outcome(self.broker.cancel_key()) else {
            trace!(?event, confirmation_id = %id, "Dialog event has no outcome");
            return false;
        };
        self.broker.settle_if_current(id, outcome)
    }
}
