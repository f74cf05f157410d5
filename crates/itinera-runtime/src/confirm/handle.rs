//! Awaitable outcome of a confirmation request.

use itinera_types::ConfirmationId;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use tokio::sync::oneshot;
use tokio::sync::oneshot::error::TryRecvError;

/// Future returned by
/// [`ConfirmationBroker::request_confirmation`](super::ConfirmationBroker::request_confirmation).
///
/// Resolves to `true` when the user accepts and `false` when they decline
/// or dismiss the dialog. It never fails. If every broker handle is dropped
/// while the request is still outstanding (root view unmounted), it resolves
/// to `false`.
///
/// `Confirmation` is `Unpin`, so it can be polled by reference inside
/// `tokio::select!`.
#[derive(Debug)]
#[must_use = "a confirmation does nothing unless awaited or polled"]
pub struct Confirmation {
    id: ConfirmationId,
    rx: oneshot::Receiver<bool>,
    outcome: Option<bool>,
}

impl Confirmation {
    pub(crate) fn new(id: ConfirmationId, rx: oneshot::Receiver<bool>) -> Self {
        Self {
            id,
            rx,
            outcome: None,
        }
    }

    /// Returns the ID of the request this future belongs to.
    #[must_use]
    pub fn id(&self) -> ConfirmationId {
        self.id
    }

    /// Returns the outcome if the request has been settled, without waiting.
    pub fn try_outcome(&mut self) -> Option<bool> {
        if self.outcome.is_some() {
            return self.outcome;
        }

        match self.rx.try_recv() {
            Ok(value) => {
                self.outcome = Some(value);
                self.outcome
            }
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Closed) => {
                self.outcome = Some(false);
                self.outcome
            }
        }
    }

    /// Returns `true` once an outcome is available.
    pub fn is_settled(&mut self) -> bool {
        self.try_outcome().is_some()
    }
}

impl Future for Confirmation {
    type Output = bool;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<bool> {
        let this = self.get_mut();
        if let Some(outcome) = this.outcome {
            return Poll::Ready(outcome);
        }

        match Pin::new(&mut this.rx).poll(cx) {
            Poll::Ready(result) => {
                let outcome = result.unwrap_or(false);
                this.outcome = Some(outcome);
                Poll::Ready(outcome)
            }
            Poll::Pending => Poll::Pending,
        }
    }
}
