//! Product and review types.
//!
//! Field names follow the remote catalog's JSON shape (`artName`,
//! `limitedTimeDeal`, `glassSurface`, `image`); everything the wire may
//! omit carries a serde default so a sparse record still decodes.

use crate::ids::ProductId;
use crate::pricing;
use crate::rating;
use serde::{Deserialize, Serialize};

/// An art-tool product in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Display name.
    #[serde(rename = "artName")]
    pub name: String,
    /// Base price, non-negative.
    pub price: f64,
    /// Active deal as a percentage point value in [0, 100]; 0 means no deal.
    #[serde(rename = "limitedTimeDeal", default)]
    pub discount_percent: i64,
    /// Brand name, non-empty.
    pub brand: String,
    /// Product image URL.
    #[serde(rename = "image")]
    pub image_url: String,
    /// Full description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Whether the tool is suitable for glass surfaces.
    #[serde(rename = "glassSurface", default, skip_serializing_if = "Option::is_none")]
    pub glass_surface: Option<bool>,
    /// Customer reviews, in display order.
    #[serde(default)]
    pub reviews: Vec<Review>,
}

impl Product {
    /// Create a product with the required fields.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        price: f64,
        brand: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            discount_percent: 0,
            brand: brand.into(),
            image_url: String::new(),
            description: None,
            glass_surface: None,
            reviews: Vec::new(),
        }
    }

    /// Set the active deal percentage.
    pub fn with_discount(mut self, percent: i64) -> Self {
        self.discount_percent = percent;
        self
    }

    /// Set the review list.
    pub fn with_reviews(mut self, reviews: Vec<Review>) -> Self {
        self.reviews = reviews;
        self
    }

    /// Check if the product has an active deal.
    pub fn has_deal(&self) -> bool {
        self.discount_percent > 0
    }

    /// The discounted price, equal to the base price when no deal is active.
    pub fn sale_price(&self) -> f64 {
        pricing::sale_price(self.price, self.discount_percent as f64)
    }

    /// Average star rating over this product's reviews.
    pub fn average_rating(&self) -> f64 {
        rating::average_rating(&self.reviews)
    }
}

/// A customer review nested in a product.
///
/// Every field is optional on the wire; `stars()` is the defensive
/// accessor arithmetic should go through.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Review {
    /// Reviewer name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Star rating, expected in 1..=5 but not enforced upstream.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub star: Option<i64>,
    /// Free-text feedback.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feedback: Option<String>,
}

impl Review {
    /// Create a review with all fields set.
    pub fn new(username: impl Into<String>, star: i64, feedback: impl Into<String>) -> Self {
        Self {
            username: Some(username.into()),
            star: Some(star),
            feedback: Some(feedback.into()),
        }
    }

    /// The star value, with an absent rating counting as 0.
    pub fn stars(&self) -> i64 {
        self.star.unwrap_or(0)
    }
}
