//! Catalog filtering: brand and free-text search over the product list.

use crate::favorites::FavoriteSet;
use crate::product::Product;
use serde::{Deserialize, Serialize};

/// User-entered filter state for the catalog screens.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Exact brand to retain, if any.
    pub brand: Option<String>,
    /// Case-insensitive substring to match against product names;
    /// empty means no search filter.
    pub search: String,
}

impl FilterCriteria {
    /// Criteria that retain everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the brand filter.
    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = Some(brand.into());
        self
    }

    /// Set the search text.
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    /// Check whether these criteria retain every product.
    pub fn is_unfiltered(&self) -> bool {
        self.brand.is_none() && self.search.is_empty()
    }
}

/// The derived output rendered by a catalog screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogView {
    /// Products surviving the filter pipeline, in input order.
    pub visible: Vec<Product>,
    /// Distinct brands of the input list, in first-occurrence order.
    pub brands: Vec<String>,
}

impl CatalogView {
    /// A view with nothing to show.
    pub fn empty() -> Self {
        Self {
            visible: Vec::new(),
            brands: Vec::new(),
        }
    }

    /// Check if nothing survived filtering.
    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }

    /// Number of visible products.
    pub fn len(&self) -> usize {
        self.visible.len()
    }
}

/// Distinct brand values in `products`, first occurrence first, each
/// brand exactly once.
pub fn brand_list(products: &[Product]) -> Vec<String> {
    let mut brands: Vec<String> = Vec::new();
    for product in products {
        if !brands.contains(&product.brand) {
            brands.push(product.brand.clone());
        }
    }
    brands
}

/// Derive the visible product list and brand list for a product list
/// and filter criteria.
///
/// The pipeline applies the brand filter first (exact, case-sensitive),
/// then the search filter (case-insensitive substring over the name).
/// The output is always a subsequence of the input: surviving products
/// keep their relative order and are cloned unmodified.
pub fn filter_catalog(products: &[Product], criteria: &FilterCriteria) -> CatalogView {
    let brands = brand_list(products);
    let needle = criteria.search.to_lowercase();

    let visible = products
        .iter()
        .filter(|product| match &criteria.brand {
            Some(brand) => &product.brand == brand,
            None => true,
        })
        .filter(|product| {
            needle.is_empty() || product.name.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect();

    CatalogView { visible, brands }
}

/// Derive the favorites-only view: the product list is restricted to
/// favorites membership before the brand/search pipeline applies.
///
/// An empty favorites set yields an empty view; callers are expected to
/// short-circuit the catalog fetch entirely in that case.
pub fn filter_favorites(
    products: &[Product],
    favorites: &FavoriteSet,
    criteria: &FilterCriteria,
) -> CatalogView {
    if favorites.is_empty() {
        return CatalogView::empty();
    }

    let seeded: Vec<Product> = products
        .iter()
        .filter(|product| favorites.contains(&product.id))
        .cloned()
        .collect();

    filter_catalog(&seeded, criteria)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::ProductId;

    fn sample() -> Vec<Product> {
        vec![
            Product::new("p1", "Red Brush", 12.5, "Arteza"),
            Product::new("p2", "Canvas Panel", 8.0, "Colore"),
            Product::new("p3", "Detail Brush", 6.0, "Arteza"),
        ]
    }

    #[test]
    fn test_unfiltered_keeps_everything_in_order() {
        let products = sample();
        let view = filter_catalog(&products, &FilterCriteria::new());
        assert_eq!(view.visible, products);
    }

    #[test]
    fn test_brand_filter_is_exact() {
        let view = filter_catalog(&sample(), &FilterCriteria::new().with_brand("Arteza"));
        assert_eq!(view.len(), 2);
        assert!(view.visible.iter().all(|p| p.brand == "Arteza"));

        let view = filter_catalog(&sample(), &FilterCriteria::new().with_brand("arteza"));
        assert!(view.is_empty());
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let view = filter_catalog(&sample(), &FilterCriteria::new().with_search("red"));
        assert_eq!(view.len(), 1);
        assert_eq!(view.visible[0].name, "Red Brush");

        let view = filter_catalog(&sample(), &FilterCriteria::new().with_search("BRUSH"));
        assert_eq!(view.len(), 2);
    }

    #[test]
    fn test_brand_and_search_compose() {
        let criteria = FilterCriteria::new().with_brand("Arteza").with_search("detail");
        let view = filter_catalog(&sample(), &criteria);
        assert_eq!(view.len(), 1);
        assert_eq!(view.visible[0].name, "Detail Brush");
    }

    #[test]
    fn test_brand_list_dedups_in_first_occurrence_order() {
        let view = filter_catalog(&sample(), &FilterCriteria::new());
        assert_eq!(view.brands, vec!["Arteza", "Colore"]);
    }

    #[test]
    fn test_brand_list_unaffected_by_criteria() {
        let view = filter_catalog(&sample(), &FilterCriteria::new().with_brand("Colore"));
        assert_eq!(view.brands, vec!["Arteza", "Colore"]);
    }

    #[test]
    fn test_filtering_is_idempotent() {
        let criteria = FilterCriteria::new().with_search("brush");
        let first = filter_catalog(&sample(), &criteria);
        let second = filter_catalog(&sample(), &criteria);
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_products_yield_empty_view() {
        let view = filter_catalog(&[], &FilterCriteria::new().with_search("brush"));
        assert!(view.is_empty());
        assert!(view.brands.is_empty());
    }

    #[test]
    fn test_favorites_seeding_restricts_before_filters() {
        let favorites =
            FavoriteSet::from_ids(vec![ProductId::new("p1"), ProductId::new("p3")]);
        let view = filter_favorites(&sample(), &favorites, &FilterCriteria::new());
        let names: Vec<&str> = view.visible.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Red Brush", "Detail Brush"]);

        let view = filter_favorites(
            &sample(),
            &favorites,
            &FilterCriteria::new().with_search("detail"),
        );
        assert_eq!(view.len(), 1);
    }

    #[test]
    fn test_empty_favorites_yield_empty_view() {
        let view = filter_favorites(&sample(), &FavoriteSet::new(), &FilterCriteria::new());
        assert!(view.is_empty());
    }
}
