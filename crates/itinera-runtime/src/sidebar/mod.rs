//! Sidebar view-model: draggable asset cards.
//!
//! ```text
//! catalog.json ──► Catalog ──► AssetFilter::apply ──► group_by_region
//!                                                        │
//!                               card drag ◄──────────────┘
//!                                   │
//!                                   ▼
//!                              DragPayload (JSON)
//! ```
//!
//! The catalog is read-only. Where assets come from and what a drop does
//! with the payload belong to the host application.

mod asset;
mod catalog;
mod filter;

pub use asset::{Asset, AssetKind, DragPayload};
pub use catalog::{Catalog, CatalogError};
pub use filter::{group_by_region, AssetFilter};
