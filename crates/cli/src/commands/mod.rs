//! CLI subcommand implementations.

// A CLI's job is to print.
#![allow(clippy::print_stdout)]

pub mod cart;
pub mod orders;
pub mod query;
pub mod wishlist;
