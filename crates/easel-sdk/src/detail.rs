//! The detail-screen session: one product with computed price, rating
//! and favorite status.

use easel_catalog::prelude::*;
use easel_store::FavoritesStore;
use tracing::{error, warn};

/// Everything the detail screen renders for one product.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailView {
    /// The product being shown.
    pub product: Product,
    /// Discounted price; equals the base price when no deal is active.
    pub sale_price: f64,
    /// Badge text for an active deal, e.g. `"20% OFF"`.
    pub deal_badge: Option<String>,
    /// Average star rating over the product's reviews.
    pub average_rating: f64,
    /// The five-star row for the average rating.
    pub stars: StarBreakdown,
    /// Whether the product is currently favorited.
    pub is_favorite: bool,
}

impl DetailView {
    /// Project a product and its favorite membership into the view.
    pub fn for_product(product: &Product, is_favorite: bool) -> Self {
        let average_rating = product.average_rating();
        Self {
            product: product.clone(),
            sale_price: product.sale_price(),
            deal_badge: product
                .has_deal()
                .then(|| discount_label(product.discount_percent)),
            average_rating,
            stars: star_breakdown(average_rating),
            is_favorite,
        }
    }
}

/// State owned by the detail screen.
///
/// The screen receives its product as a navigation parameter; only the
/// favorite flag needs the store.
pub struct DetailSession<S> {
    store: S,
    product: Product,
    favorite: bool,
}

impl<S: FavoritesStore> DetailSession<S> {
    /// Create a session for the product handed over by navigation.
    pub fn new(store: S, product: Product) -> Self {
        Self {
            store,
            product,
            favorite: false,
        }
    }

    /// Handle the screen gaining focus: read the persisted set to learn
    /// whether this product is favorited.
    pub async fn focus(&mut self) {
        let favorites = match self.store.load().await {
            Ok(favorites) => favorites,
            Err(err) => {
                warn!(error = %err, "failed to load favorites, treating as empty");
                FavoriteSet::new()
            }
        };
        self.favorite = favorites.contains(&self.product.id);
    }

    /// Flip this product's favorite membership.
    ///
    /// Read-modify-write against the persisted set: the latest stored
    /// set is loaded, toggled and written back in full. A failed write
    /// is logged and the screen keeps the toggled state. Returns the
    /// resulting membership.
    pub async fn toggle_favorite(&mut self) -> bool {
        let mut favorites = match self.store.load().await {
            Ok(favorites) => favorites,
            Err(err) => {
                warn!(error = %err, "failed to load favorites, treating as empty");
                FavoriteSet::new()
            }
        };
        self.favorite = favorites.toggle(self.product.id.clone());
        if let Err(err) = self.store.save(&favorites).await {
            error!(error = %err, "failed to persist favorites");
        }
        self.favorite
    }

    /// The product being shown.
    pub fn product(&self) -> &Product {
        &self.product
    }

    /// Derive the rendered view.
    pub fn view(&self) -> DetailView {
        DetailView::for_product(&self.product, self.favorite)
    }
}
