//! Itinera runtime: confirmation broker and planner view-models.
//!
//! # Crate Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  itinera-types   : IDs, DialogKind, ErrorCode               │
//! └─────────────────────────────────────────────────────────────┘
//!                               ↓
//! ┌─────────────────────────────────────────────────────────────┐
//! │                   Runtime Layer (THIS CRATE)                 │
//! ├─────────────────────────────────────────────────────────────┤
//! │  confirm/    : ConfirmationBroker, Confirmation, policy     │
//! │  dialog/     : DialogProps, DialogControls, DialogHost      │
//! │  sidebar/    : Catalog, AssetFilter, DragPayload            │
//! │  onboarding/ : Carousel, FlagStore, Onboarding              │
//! │  config/     : ItineraConfig, ConfigLoader                  │
//! └─────────────────────────────────────────────────────────────┘
//!                               ↓
//! ┌─────────────────────────────────────────────────────────────┐
//! │  itinera-cli     : terminal front end                       │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! ## [`confirm`] - Confirmation Broker
//!
//! - [`ConfirmationBroker`](confirm::ConfirmationBroker): single-slot request/response
//! - [`Confirmation`](confirm::Confirmation): future resolving to the user's choice
//! - [`OverlapPolicy`](confirm::OverlapPolicy): replace, queue or reject overlapping requests
//!
//! ## [`dialog`] - Dialog Presentation
//!
//! - [`DialogRenderer`](dialog::DialogRenderer): presentation contract
//! - [`DialogHost`](dialog::DialogHost): drives a renderer from broker state
//! - [`DialogInputParser`](dialog::DialogInputParser): terminal input → events
//!
//! ## [`sidebar`], [`onboarding`], [`locale`]
//!
//! Planner view-models and the string lookup used for dialog labels.
//!
//! ## [`config`] - Configuration Management
//!
//! Layered TOML + environment configuration; see the module docs.
//!
//! ## [`testing`]
//!
//! [`RecordingRenderer`](testing::RecordingRenderer) for tests.

pub mod config;
pub mod confirm;
pub mod dialog;
pub mod locale;
pub mod onboarding;
pub mod sidebar;
pub mod testing;

pub use confirm::{Confirmation, ConfirmationBroker, ConfirmationOptions, OverlapPolicy};
pub use dialog::{DialogControls, DialogEvent, DialogHost, DialogKey, DialogProps, DialogRenderer};
pub use itinera_types::{ConfirmationId, DialogKind};
