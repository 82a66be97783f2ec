//! ArtStop Store - persisted storefront state.
//!
//! Every store in this crate is a thin, synchronous layer over a named slot
//! in a [`KeyValue`] persistence surface (browser local storage in the
//! original storefront; [`MemoryStore`] or any other implementation here).
//! Stores favor availability over strict validation: an absent value is an
//! empty dataset and a corrupt value is logged and replaced by the
//! empty/seed default, never surfaced to the caller.
//!
//! Mutations notify subscribers synchronously through per-store
//! [`Signal`]s, so decoupled observers (badge counters, admin dashboards)
//! can re-read without a direct callback into rendering code.
//!
//! # Modules
//!
//! - [`kv`] - The persistence surface and the in-memory implementation
//! - [`signal`] - Synchronous publish/subscribe primitive
//! - [`line_items`] - Cart and wishlist stores
//! - [`catalog`] - Category/product snapshot store with admin mutations
//! - [`orders`] - Order history store
//! - [`session`] - Admin session stub (not a security boundary)
//! - [`seed`] - Compiled-in seed dataset

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod kv;
pub mod line_items;
pub mod orders;
pub mod seed;
pub mod session;
pub mod signal;

pub use catalog::{CatalogChanged, CatalogResource, CatalogStore, CollectionSummary};
pub use kv::{KeyValue, MemoryStore, StoreError};
pub use line_items::{LineItemStore, LineItemsChanged, Role};
pub use orders::OrdersStore;
pub use session::{AdminCredentials, AuthChanged, SessionStore};
pub use signal::{Signal, SubscriberId};
