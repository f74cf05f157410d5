//! Core types for the Itinera planner.
//!
//! This crate holds the small, dependency-light vocabulary shared by the
//! runtime and the front ends:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  itinera-types   : IDs, DialogKind, ErrorCode   ◄── HERE     │
//! └─────────────────────────────────────────────────────────────┘
//!                               ↓
//! ┌─────────────────────────────────────────────────────────────┐
//! │  itinera-runtime : confirm, dialog, sidebar, onboarding     │
//! └─────────────────────────────────────────────────────────────┘
//!                               ↓
//! ┌─────────────────────────────────────────────────────────────┐
//! │  itinera-cli     : terminal front end                       │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```
//! use itinera_types::{AssetId, ConfirmationId, DialogKind};
//!
//! let a = ConfirmationId::new();
//! let b = ConfirmationId::new();
//! assert_ne!(a, b);
//!
//! let asset = AssetId::new("kyoto-fushimi-inari");
//! assert_eq!(asset.as_str(), "kyoto-fushimi-inari");
//!
//! assert_eq!(DialogKind::default(), DialogKind::Info);
//! ```

mod error;
mod id;
mod kind;

pub use error::{assert_error_code, assert_error_codes, ErrorCode};
pub use id::{AssetId, ConfirmationId};
pub use kind::{DialogKind, ParseDialogKindError};
