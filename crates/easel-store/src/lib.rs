//! Favorites persistence for the easel catalog.
//!
//! The favorites set is process-wide key-value state: a flat JSON array
//! of product ids stored under one well-known key, read in full on
//! screen focus and overwritten in full on every mutation. This crate
//! provides that storage behind the [`FavoritesStore`] trait so screen
//! sessions can be driven against a real file-backed store or an
//! in-memory fake.
//!
//! # Example
//!
//! ```rust,ignore
//! use easel_store::{FavoritesStore, FileStore};
//!
//! let store = FileStore::new("/data/easel")?;
//! let mut favorites = store.load().await?;
//! favorites.toggle("at-1".into());
//! store.save(&favorites).await?;
//! ```

mod error;
mod store;

pub use error::StoreError;
pub use store::{FavoritesStore, FileStore, MemoryStore, FAVORITES_KEY};
