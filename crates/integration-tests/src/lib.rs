//! Integration tests for ArtStop.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p artstop-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `catalog_flow` - Query engine driven from the persisted catalog store
//! - `cart_wishlist_flow` - Cross-store cart/wishlist lifecycles and signals
//! - `catalog_admin` - Admin mutations and catalog change notifications
//! - `persistence` - Seed fallback, corruption recovery, round-trips

#![cfg_attr(not(test), forbid(unsafe_code))]
