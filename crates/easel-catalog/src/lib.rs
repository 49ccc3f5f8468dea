//! Art-tool catalog domain types and derivation logic.
//!
//! This crate provides the pure core of a catalog browsing application:
//!
//! - **Products**: Catalog items and their customer reviews
//! - **Favorites**: An insertion-ordered set of favorited product ids
//! - **Filtering**: Brand/search derivation of the visible product list
//! - **Calculators**: Average rating and discounted sale price
//!
//! Everything here is a total function over plain data: no I/O, no
//! hidden state, no panics on degenerate input. Fetching the product
//! list and persisting favorites live in `easel-client` and
//! `easel-store`; the screen flows that drive this crate live in
//! `easel-sdk`.
//!
//! # Example
//!
//! ```rust
//! use easel_catalog::prelude::*;
//!
//! let products = vec![
//!     Product::new("p1", "Red Brush", 12.5, "Arteza"),
//!     Product::new("p2", "Canvas Panel", 8.0, "Colore").with_discount(20),
//! ];
//!
//! let criteria = FilterCriteria::new().with_search("red");
//! let view = filter_catalog(&products, &criteria);
//! assert_eq!(view.visible.len(), 1);
//! assert_eq!(view.brands, vec!["Arteza", "Colore"]);
//! ```

pub mod favorites;
pub mod feedback;
pub mod filter;
pub mod ids;
pub mod pricing;
pub mod product;
pub mod rating;

pub use favorites::FavoriteSet;
pub use filter::{filter_catalog, filter_favorites, CatalogView, FilterCriteria};
pub use ids::ProductId;
pub use product::{Product, Review};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::favorites::FavoriteSet;
    pub use crate::feedback::filter_reviews;
    pub use crate::filter::{
        brand_list, filter_catalog, filter_favorites, CatalogView, FilterCriteria,
    };
    pub use crate::ids::ProductId;
    pub use crate::pricing::{discount_label, sale_price};
    pub use crate::product::{Product, Review};
    pub use crate::rating::{average_rating, star_breakdown, StarBreakdown};
}
