//! ArtStop CLI - catalog queries and store management.
//!
//! # Usage
//!
//! ```bash
//! # Browse the catalog
//! artstop query --category islamic-art --sort price-low --page 1
//!
//! # Search with a price bucket
//! artstop query --search lantern --price-range 0-6000
//!
//! # Manage the cart
//! artstop cart add 1 --variant large --color Gold
//! artstop cart list
//!
//! # Manage the wishlist
//! artstop wishlist add 4
//! artstop wishlist move-to-cart 4
//!
//! # Inspect the order history
//! artstop orders
//! ```
//!
//! State persists to a JSON file (`--store`, default `artstop-store.json`),
//! the CLI's stand-in for the storefront's browser local storage.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;
mod store_file;

use store_file::JsonFileStore;

#[derive(Parser)]
#[command(name = "artstop")]
#[command(author, version, about = "ArtStop catalog and store tools")]
struct Cli {
    /// Path to the JSON key-value store file.
    #[arg(long, global = true, default_value = "artstop-store.json")]
    store: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Query the product catalog
    Query {
        /// Category slug filter
        #[arg(long)]
        category: Option<String>,

        /// Free-text search over name and description
        #[arg(long)]
        search: Option<String>,

        /// Price bucket: `all`, `min`, or `min-max`
        #[arg(long, default_value = "all")]
        price_range: String,

        /// Sort order: `featured`, `newest`, `price-low`, `price-high`, `rating`
        #[arg(long, default_value = "featured")]
        sort: String,

        /// 1-indexed page number
        #[arg(long, default_value_t = 1)]
        page: usize,

        /// Products per page
        #[arg(long, default_value_t = artstop_catalog::DEFAULT_PAGE_SIZE)]
        page_size: usize,
    },
    /// Manage the cart
    Cart {
        #[command(subcommand)]
        action: LineItemAction,
    },
    /// Manage the wishlist
    Wishlist {
        #[command(subcommand)]
        action: WishlistAction,
    },
    /// Show the order history
    Orders,
}

#[derive(Subcommand)]
enum LineItemAction {
    /// List line items
    List,
    /// Add a product by id
    Add {
        id: i32,

        /// Variant selector value
        #[arg(long)]
        variant: Option<String>,

        /// Color selector
        #[arg(long)]
        color: Option<String>,

        #[arg(long, default_value_t = 1)]
        quantity: u32,
    },
    /// Remove a line item by product id (plus selector, for carts)
    Remove {
        id: i32,

        #[arg(long)]
        variant: Option<String>,

        #[arg(long)]
        color: Option<String>,
    },
    /// Remove every line item
    Clear,
}

#[derive(Subcommand)]
enum WishlistAction {
    /// List wishlist entries
    List,
    /// Add a product by id
    Add { id: i32 },
    /// Remove a product by id
    Remove { id: i32 },
    /// Move a wishlist entry into the cart
    MoveToCart { id: i32 },
}

fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let kv = JsonFileStore::new(cli.store);

    match cli.command {
        Commands::Query {
            category,
            search,
            price_range,
            sort,
            page,
            page_size,
        } => {
            commands::query::run(&kv, category, search, &price_range, &sort, page, page_size)?;
        }
        Commands::Cart { action } => match action {
            LineItemAction::List => commands::cart::list(&kv),
            LineItemAction::Add {
                id,
                variant,
                color,
                quantity,
            } => commands::cart::add(&kv, id, variant, color, quantity)?,
            LineItemAction::Remove { id, variant, color } => {
                commands::cart::remove(&kv, id, variant, color)?;
            }
            LineItemAction::Clear => commands::cart::clear(&kv)?,
        },
        Commands::Wishlist { action } => match action {
            WishlistAction::List => commands::wishlist::list(&kv),
            WishlistAction::Add { id } => commands::wishlist::add(&kv, id)?,
            WishlistAction::Remove { id } => commands::wishlist::remove(&kv, id)?,
            WishlistAction::MoveToCart { id } => commands::wishlist::move_to_cart(&kv, id)?,
        },
        Commands::Orders => commands::orders::list(&kv),
    }
    Ok(())
}
