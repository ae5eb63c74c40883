//! Command-line arguments.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use storefront_catalog::{Availability, CatalogQuery, FilterState, PriceRange, Route, SortOption};

#[derive(Debug, Parser)]
#[command(name = "storefront", version, about = "Query the product catalog and manage the local cart and wishlist")]
pub struct Cli {
    /// Path to a TOML config file (overrides STOREFRONT_CONFIG).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show the product listing for a route, search text and facet selection.
    List(ListArgs),
    /// Type-ahead suggestions for partial search text.
    Suggest { query: String },
    /// Products related to one product.
    Related { id: u64 },
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    Wishlist {
        #[command(subcommand)]
        action: WishlistAction,
    },
}

#[derive(Debug, Clone, Args)]
pub struct ListArgs {
    /// Hash route, e.g. `#/category/back-and-posture`.
    #[arg(long, default_value = "#/")]
    pub route: String,
    /// Free-text search.
    #[arg(long, short, default_value = "")]
    pub query: String,
    #[arg(long = "category")]
    pub categories: Vec<String>,
    #[arg(long = "size")]
    pub sizes: Vec<String>,
    #[arg(long = "cert")]
    pub certifications: Vec<String>,
    #[arg(long)]
    pub min_price: Option<f64>,
    #[arg(long)]
    pub max_price: Option<f64>,
    /// `any`, `inStock` or `bulk`.
    #[arg(long, default_value = "any")]
    pub availability: String,
    /// `featured`, `price-asc`, `price-desc` or `rating`.
    #[arg(long, default_value = "featured")]
    pub sort: String,
}

impl ListArgs {
    /// Listing query for these arguments; `route` is already resolved
    /// against the catalog's category index.
    pub fn to_query(&self, route: Route) -> CatalogQuery {
        let mut filters = FilterState::default();
        for category in &self.categories {
            filters.categories.insert(category.clone());
        }
        for size in &self.sizes {
            filters.sizes.insert(size.clone());
        }
        for certification in &self.certifications {
            filters.certifications.insert(certification.clone());
        }
        if self.min_price.is_some() || self.max_price.is_some() {
            filters.set_price_range(PriceRange::new(
                self.min_price.unwrap_or(f64::NEG_INFINITY),
                self.max_price.unwrap_or(f64::INFINITY),
            ));
        }
        filters.set_availability(Availability::parse(&self.availability));

        CatalogQuery {
            filters,
            search: self.query.clone(),
            sort: SortOption::parse(&self.sort),
            route,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum CartAction {
    Show,
    /// Add units of a product (merges with an existing line).
    Add {
        id: u64,
        #[arg(default_value_t = 1)]
        quantity: u32,
    },
    /// Set a line's quantity; zero or less removes it.
    Set {
        id: u64,
        #[arg(allow_negative_numbers = true)]
        quantity: i64,
    },
    Remove { id: u64 },
}

#[derive(Debug, Subcommand)]
pub enum WishlistAction {
    Show,
    Toggle { id: u64 },
}
