//! Remote product repository for the easel catalog.
//!
//! The catalog lives behind a flat REST endpoint: a single GET on
//! `/products` returns every product as a JSON array. This crate wraps
//! that call behind the [`ProductRepository`] trait with:
//!
//! - automatic connect/total timeouts per request
//! - a typed [`FetchError`] taxonomy for the calling screen
//! - a canned [`StaticRepository`] for driving sessions in tests
//!
//! There is deliberately no retry logic here; a failed fetch surfaces
//! as a catalog-unavailable condition and refreshing is the screen's
//! decision (typically on refocus).

mod client;
mod error;
mod timeout;

pub use client::{
    ClientConfig, HttpRepository, ProductRepository, StaticRepository, DEFAULT_BASE_URL,
};
pub use error::FetchError;
pub use timeout::TimeoutConfig;
