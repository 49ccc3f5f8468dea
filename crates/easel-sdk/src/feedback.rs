//! The feedback-screen session: one product's reviews behind a star
//! threshold.

use easel_catalog::feedback::filter_reviews;
use easel_catalog::{Product, Review};

/// State owned by the feedback screen.
pub struct FeedbackSession {
    reviews: Vec<Review>,
    min_star: Option<i64>,
}

impl FeedbackSession {
    /// Create a session for the product handed over by navigation.
    pub fn new(product: &Product) -> Self {
        Self::from_reviews(product.reviews.clone())
    }

    /// Create a session directly over a review list.
    pub fn from_reviews(reviews: Vec<Review>) -> Self {
        Self {
            reviews,
            min_star: None,
        }
    }

    /// Select a minimum star rating; reviews below it are hidden.
    pub fn select_star(&mut self, star: i64) {
        self.min_star = Some(star);
    }

    /// Clear the star filter, showing every review again.
    pub fn clear_star(&mut self) {
        self.min_star = None;
    }

    /// The active threshold, if any.
    pub fn min_star(&self) -> Option<i64> {
        self.min_star
    }

    /// Derive the visible reviews, preserving their original order.
    pub fn reviews(&self) -> Vec<Review> {
        filter_reviews(&self.reviews, self.min_star)
    }
}
