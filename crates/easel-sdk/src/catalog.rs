//! The home-screen session: full catalog with brand and search filters.

use easel_catalog::{filter_catalog, CatalogView, FavoriteSet, FilterCriteria, Product, ProductId};
use easel_client::ProductRepository;
use easel_store::FavoritesStore;
use tracing::{error, warn};

use crate::error::SessionError;

/// Token for a product-list fetch started with
/// [`CatalogSession::begin_load`]. Applying a completion with a token
/// older than the latest one is a no-op, which makes responses that
/// arrive after the user has moved on safely ignorable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub struct LoadGeneration(u64);

/// State owned by the catalog (home) screen.
///
/// One session instance belongs to one screen instance; nothing here is
/// shared across screens except the persisted favorites set, which is
/// re-read in full on every [`focus`](Self::focus) and written in full
/// on every toggle.
pub struct CatalogSession<R, S> {
    repository: R,
    store: S,
    products: Vec<Product>,
    favorites: FavoriteSet,
    criteria: FilterCriteria,
    generation: u64,
}

impl<R, S> CatalogSession<R, S>
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
            criteria: FilterCriteria::new(),
            generation: 0,
        }
    }

    /// Handle the screen regaining focus.
    ///
    /// Reloads the persisted favorites before any favorites-dependent
    /// view is derived, so a toggle made on another screen is visible
    /// immediately. A brand handed over by navigation (e.g. tapping the
    /// brand on a detail screen) is applied as the active brand filter.
    pub async fn focus(&mut self, brand_param: Option<String>) {
        self.favorites = self.load_favorites().await;
        if let Some(brand) = brand_param {
            self.criteria.brand = Some(brand);
        }
    }

    /// Start a product-list load, superseding any load still in flight.
    pub fn begin_load(&mut self) -> LoadGeneration {
        self.generation = self.generation.wrapping_add(1);
        LoadGeneration(self.generation)
    }

    /// Apply a completed fetch. Returns false (and changes nothing)
    /// when a newer load was started after this one.
    pub fn apply_load(&mut self, generation: LoadGeneration, products: Vec<Product>) -> bool {
        if generation.0 != self.generation {
            warn!("dropping stale product-list response");
            return false;
        }
        self.products = products;
        true
    }

    /// Fetch the product list and store it in the session.
    ///
    /// A failed fetch surfaces as [`SessionError::CatalogUnavailable`];
    /// the session keeps its previous product list and does not retry.
    pub async fn load(&mut self) -> Result<(), SessionError> {
        let generation = self.begin_load();
        let products = self
            .repository
            .fetch_all()
            .await
            .map_err(SessionError::CatalogUnavailable)?;
        self.apply_load(generation, products);
        Ok(())
    }

    /// Set the search text.
    pub fn set_search(&mut self, text: impl Into<String>) {
        self.criteria.search = text.into();
    }

    /// Select a brand chip. Selecting the already-active brand clears
    /// the brand filter.
    pub fn select_brand(&mut self, brand: impl Into<String>) {
        let brand = brand.into();
        if self.criteria.brand.as_deref() == Some(brand.as_str()) {
            self.criteria.brand = None;
        } else {
            self.criteria.brand = Some(brand);
        }
    }

    /// Clear the brand filter.
    pub fn clear_brand(&mut self) {
        self.criteria.brand = None;
    }

    /// The currently selected brand, if any.
    pub fn selected_brand(&self) -> Option<&str> {
        self.criteria.brand.as_deref()
    }

    /// Flip a product's favorite membership and persist the whole set.
    ///
    /// The in-memory set is updated first; a failed persisted write is
    /// logged and the in-memory state kept, accepting a window where
    /// storage lags the screen. Returns the resulting membership.
    pub async fn toggle_favorite(&mut self, id: ProductId) -> bool {
        let member = self.favorites.toggle(id);
        self.persist_favorites().await;
        member
    }

    /// Check whether a product is currently favorited.
    pub fn is_favorite(&self, id: &ProductId) -> bool {
        self.favorites.contains(id)
    }

    /// The favorites set as of the last focus or toggle.
    pub fn favorites(&self) -> &FavoriteSet {
        &self.favorites
    }

    /// Derive the list rendered by the screen from the current
    /// products, favorites and filter criteria.
    pub fn view(&self) -> CatalogView {
        filter_catalog(&self.products, &self.criteria)
    }

    async fn load_favorites(&self) -> FavoriteSet {
        match self.store.load().await {
            Ok(favorites) => favorites,
            Err(err) => {
                warn!(error = %err, "failed to load favorites, treating as empty");
                FavoriteSet::new()
            }
        }
    }

    async fn persist_favorites(&self) {
        if let Err(err) = self.store.save(&self.favorites).await {
            error!(error = %err, "failed to persist favorites");
        }
    }
}
