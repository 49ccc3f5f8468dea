//! Session error types.

use easel_client::FetchError;
use thiserror::Error;

/// Errors a screen session surfaces to the presentation layer.
///
/// Storage problems never appear here: a failed favorites read degrades
/// to the empty set and a failed write is logged without rolling back
/// the in-memory state, so only the catalog fetch can fail a session
/// operation.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The product catalog could not be fetched. The session does not
    /// retry; the screen decides whether to refresh (e.g. on refocus).
    #[error("Catalog unavailable: {0}")]
    CatalogUnavailable(#[source] FetchError),
}
