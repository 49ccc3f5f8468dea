//! The persisted favorites set.

use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// An insertion-ordered set of favorited product ids.
///
/// Persisted as a flat JSON array under a single key; every mutation is
/// followed by a whole-set overwrite in storage, so there is no partial
/// update representation to reason about. Each id appears at most once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FavoriteSet {
    ids: Vec<ProductId>,
}

impl FavoriteSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from ids, dropping duplicates while keeping the
    /// first occurrence's position.
    ///
    /// Use this when restoring from storage: a payload written by an
    /// older or foreign writer may not uphold the uniqueness invariant.
    pub fn from_ids(ids: impl IntoIterator<Item = ProductId>) -> Self {
        let mut set = Self::new();
        for id in ids {
            set.insert(id);
        }
        set
    }

    /// Check membership.
    pub fn contains(&self, id: &ProductId) -> bool {
        self.ids.contains(id)
    }

    /// Add an id if absent. Returns true if it was inserted.
    pub fn insert(&mut self, id: ProductId) -> bool {
        if self.ids.contains(&id) {
            return false;
        }
        self.ids.push(id);
        true
    }

    /// Remove an id if present. Returns true if it was removed.
    pub fn remove(&mut self, id: &ProductId) -> bool {
        let before = self.ids.len();
        self.ids.retain(|existing| existing != id);
        self.ids.len() != before
    }

    /// Flip membership: members are removed, non-members appended.
    /// Returns the resulting membership.
    pub fn toggle(&mut self, id: ProductId) -> bool {
        if self.remove(&id) {
            false
        } else {
            self.ids.push(id);
            true
        }
    }

    /// Remove every id.
    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Number of favorited products.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Check if no products are favorited.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Iterate ids in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &ProductId> {
        self.ids.iter()
    }
}

impl FromIterator<ProductId> for FavoriteSet {
    fn from_iter<I: IntoIterator<Item = ProductId>>(iter: I) -> Self {
        Self::from_ids(iter)
    }
}
