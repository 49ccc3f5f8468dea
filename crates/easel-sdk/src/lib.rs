//! # Easel SDK
//!
//! Screen sessions for the easel art-tool catalog: the layer that wires
//! the pure derivation engines of `easel-catalog` to the remote product
//! repository (`easel-client`) and the persisted favorites set
//! (`easel-store`).
//!
//! Each session owns the state of one screen instance and exposes the
//! events the presentation layer raises into the core:
//!
//! - [`CatalogSession`]: the home screen (full catalog, brand chips,
//!   free-text search, favorite toggles)
//! - [`FavoritesSession`]: the favorites screen (favorited products
//!   with search, remove and clear-all)
//! - [`DetailSession`] / [`DetailView`]: one product with computed
//!   sale price, average rating and favorite status
//! - [`FeedbackSession`]: one product's reviews behind a star filter
//!
//! Sessions follow a load-then-render ordering: `focus()` re-reads the
//! persisted favorites before any favorites-dependent view is derived,
//! and product-list fetches are generation-guarded so a response that
//! arrives after the user has moved on is dropped instead of clobbering
//! newer state.
//!
//! # Example
//!
//! ```rust,ignore
//! use easel_client::{ClientConfig, HttpRepository};
//! use easel_sdk::CatalogSession;
//! use easel_store::FileStore;
//!
//! let repository = HttpRepository::new(ClientConfig::default())?;
//! let store = FileStore::new(data_dir)?;
//! let mut session = CatalogSession::new(repository, store);
//!
//! session.focus(None).await;
//! session.load().await?;
//! session.set_search("brush");
//! for product in &session.view().visible {
//!     println!("{}: {}", product.name, product.sale_price());
//! }
//! ```

mod catalog;
mod detail;
mod error;
mod favorites;
mod feedback;

pub use catalog::{CatalogSession, LoadGeneration};
pub use detail::{DetailSession, DetailView};
pub use error::SessionError;
pub use favorites::FavoritesSession;
pub use feedback::FeedbackSession;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{
        CatalogSession, DetailSession, DetailView, FavoritesSession, FeedbackSession,
        LoadGeneration, SessionError,
    };

    pub use easel_catalog::prelude::*;
    pub use easel_client::{
        ClientConfig, HttpRepository, ProductRepository, StaticRepository, TimeoutConfig,
    };
    pub use easel_store::{FavoritesStore, FileStore, MemoryStore};
}
