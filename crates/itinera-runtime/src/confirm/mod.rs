//! Confirmation broker.
//!
//! Lets any part of the UI ask the user a yes/no question and await the
//! answer, without the call site owning dialog visibility state.
//!
//! ```text
//! call site                 ConfirmationBroker              DialogHost / Renderer
//!     │                            │                                 │
//!     │ request_confirmation(opts) │                                 │
//!     ├───────────────────────────►│ slot: Idle → AwaitingResponse   │
//!     │◄─ Confirmation (future) ───┤ publish DialogProps{visible}    │
//!     │                            ├────────────────────────────────►│
//!     │  .await                    │                                 │ user clicks
//!     │                            │        settle_if_current(id, b) │
//!     │                            │◄────────────────────────────────┤
//!     │◄──────── b ────────────────┤ slot: AwaitingResponse → Idle   │
//!     │                            ├──── DialogProps{hidden} ───────►│
//! ```
//!
//! # Overlap
//!
//! At most one request is active. What happens to a request issued while
//! another is active is decided by [`OverlapPolicy`]; the default
//! ([`OverlapPolicy::Replace`]) displays the new request and leaves the old
//! [`Confirmation`] pending for the life of the broker.
//!
//! # Example
//!
//! ```
//! use itinera_runtime::confirm::{ConfirmationBroker, ConfirmationOptions};
//! use itinera_types::DialogKind;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let broker = ConfirmationBroker::new();
//!
//! let answer = broker.request_confirmation(
//!     ConfirmationOptions::new("Delete this day?").with_kind(DialogKind::Warning),
//! );
//! assert!(broker.is_pending());
//!
//! // The dialog renderer reports the user's click.
//! broker.settle(false);
//!
//! assert!(!answer.await);
//! assert!(!broker.is_pending());
//! # }
//! ```

mod broker;
mod handle;
mod options;
mod policy;

pub use broker::{BrokerBuilder, BrokerState, ConfirmationBroker, WeakBroker};
pub use handle::Confirmation;
pub use options::ConfirmationOptions;
pub use policy::{OverlapPolicy, ParseOverlapPolicyError};
