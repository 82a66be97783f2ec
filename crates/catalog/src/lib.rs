//! ArtStop Catalog - pure catalog query engine.
//!
//! Given a product collection and a set of filter/sort/page parameters,
//! produce the correctly ordered, correctly paginated subset. All functions
//! here are pure: they never mutate their inputs and perform no I/O, so
//! they are safe to call from any context, including concurrent renders.
//!
//! # Modules
//!
//! - [`params`] - Query parameter types ([`QueryParams`], [`PriceRange`], [`SortBy`])
//! - [`query`] - The engine itself ([`query`], [`suggest`], [`Page`])

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod params;
pub mod query;

pub use params::{DEFAULT_PAGE_SIZE, PriceRange, QueryError, QueryParams, SortBy};
pub use query::{Page, query, suggest};
