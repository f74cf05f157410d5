//! Dialog rendering contract.
//!
//! The broker is the single source of truth for what is on screen. The
//! view side only ever sees two things:
//!
//! - [`DialogProps`]: what to draw (visibility + content)
//! - [`DialogControls`]: what to call when the user acts
//!
//! ```text
//! ┌──────────────────────┐   watch<DialogProps>   ┌──────────────────────┐
//! │  ConfirmationBroker  ├───────────────────────►│      DialogHost      │
//! │   (pending slot)     │                        │  pump() / run()      │
//! └──────────▲───────────┘                        └──────────┬───────────┘
//!            │ settle_if_current(id, outcome)                │ render(props, controls)
//!            │                                               ▼
//!            │                                    ┌──────────────────────┐
//!            └────────── DialogControls ◄─────────┤    DialogRenderer    │
//!                        accept / decline /       │ (Console, Recording) │
//!                        backdrop / key           └──────────────────────┘
//! ```
//!
//! Renderers own no dialog state. Input reaches the broker through
//! [`DialogControls::dispatch`], which maps every dismissal path
//! (decline button, backdrop click, cancel key) to a `false` outcome.

mod controls;
mod event;
mod host;
mod parser;
mod props;
mod renderer;

pub use controls::DialogControls;
pub use event::{DialogEvent, DialogKey, ParseDialogKeyError};
pub use host::DialogHost;
pub use parser::{DialogInput, DialogInputParser};
pub use props::DialogProps;
pub use renderer::{ConsoleDialogRenderer, DialogRenderer};
