//! Review filtering for the feedback screen.

use crate::product::Review;

/// Retain reviews rated at or above `min_star`, preserving order.
///
/// A cleared threshold (`None`) returns the reviews unmodified. A
/// review without a star rating counts as 0 and never satisfies a
/// threshold of 1 or more.
pub fn filter_reviews(reviews: &[Review], min_star: Option<i64>) -> Vec<Review> {
    match min_star {
        None => reviews.to_vec(),
        Some(threshold) => reviews
            .iter()
            .filter(|review| review.stars() >= threshold)
            .cloned()
            .collect(),
    }
}
