//! ArtStop Core - Shared types library.
//!
//! This crate provides the domain model used across all ArtStop components:
//! - `catalog` - Catalog query engine (filtering, sorting, pagination)
//! - `store` - Persisted line-item, catalog, orders, and session stores
//! - `cli` - Command-line tools for inspecting and managing the store
//!
//! # Architecture
//!
//! The core crate contains only types and validation - no I/O, no storage
//! access. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Entity records and newtype wrappers for type-safe IDs and prices

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
