//! The favorites-screen session: favorited products with search.

use easel_catalog::{filter_favorites, CatalogView, FavoriteSet, FilterCriteria, Product, ProductId};
use easel_client::ProductRepository;
use easel_store::FavoritesStore;
use tracing::{error, warn};

use crate::error::SessionError;

/// State owned by the favorites screen.
pub struct FavoritesSession<R, S> {
    repository: R,
    store: S,
    products: Vec<Product>,
    favorites: FavoriteSet,
    search: String,
}

impl<R, S> FavoritesSession<R, S>
where
    R: ProductRepository,
    S: FavoritesStore,
{
    /// Create a session over the given collaborators.
    pub fn new(repository: R, store: S) -> Self {
        Self {
            repository,
            store,
            products: Vec::new(),
            favorites: FavoriteSet::new(),
            search: String::new(),
        }
    }

    /// Handle the screen regaining focus: re-read the persisted set
    /// before anything favorites-dependent is derived.
    pub async fn focus(&mut self) {
        self.favorites = match self.store.load().await {
            Ok(favorites) => favorites,
            Err(err) => {
                warn!(error = %err, "failed to load favorites, treating as empty");
                FavoriteSet::new()
            }
        };
    }

    /// Fetch the products backing the favorites list.
    ///
    /// With no favorites recorded there is nothing to show and the
    /// repository is not contacted at all.
    pub async fn load(&mut self) -> Result<(), SessionError> {
        if self.favorites.is_empty() {
            self.products.clear();
            return Ok(());
        }
        self.products = self
            .repository
            .fetch_all()
            .await
            .map_err(SessionError::CatalogUnavailable)?;
        Ok(())
    }

    /// Set the search text.
    pub fn set_search(&mut self, text: impl Into<String>) {
        self.search = text.into();
    }

    /// Unfavorite one product and persist the whole set.
    pub async fn remove(&mut self, id: &ProductId) {
        if self.favorites.remove(id) {
            self.persist_favorites().await;
        }
    }

    /// Drop every favorite and persist the now-empty set.
    pub async fn clear_all(&mut self) {
        self.favorites.clear();
        self.persist_favorites().await;
    }

    /// Number of favorited products.
    pub fn favorite_count(&self) -> usize {
        self.favorites.len()
    }

    /// Derive the favorites list: membership restriction first, then
    /// the search filter.
    pub fn view(&self) -> CatalogView {
        let criteria = FilterCriteria::new().with_search(self.search.clone());
        filter_favorites(&self.products, &self.favorites, &criteria)
    }

    async fn persist_favorites(&self) {
        if let Err(err) = self.store.save(&self.favorites).await {
            error!(error = %err, "failed to persist favorites");
        }
    }
}
