//! Favorites store trait and its file-backed and in-memory backends.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::RwLock;

use async_trait::async_trait;
use easel_catalog::{FavoriteSet, ProductId};
use tracing::warn;

use crate::StoreError;

/// The single key the favorites set is persisted under.
pub const FAVORITES_KEY: &str = "favorites";

/// Persistence for the favorites set.
///
/// `load` returns the empty set when nothing has been recorded yet, and
/// also when the recorded payload is corrupt: a broken favorites file
/// must read as "no favorites" rather than fail the screen. `save`
/// overwrites the whole persisted value.
#[async_trait]
pub trait FavoritesStore: Send + Sync {
    /// Read the persisted set, or the empty set when absent or corrupt.
    async fn load(&self) -> Result<FavoriteSet, StoreError>;

    /// Persist the full set, replacing the prior value.
    async fn save(&self, favorites: &FavoriteSet) -> Result<(), StoreError>;
}

#[async_trait]
impl<T: FavoritesStore + ?Sized> FavoritesStore for &T {
    async fn load(&self) -> Result<FavoriteSet, StoreError> {
        (**self).load().await
    }

    async fn save(&self, favorites: &FavoriteSet) -> Result<(), StoreError> {
        (**self).save(favorites).await
    }
}

#[async_trait]
impl<T: FavoritesStore + ?Sized> FavoritesStore for std::sync::Arc<T> {
    async fn load(&self) -> Result<FavoriteSet, StoreError> {
        (**self).load().await
    }

    async fn save(&self, favorites: &FavoriteSet) -> Result<(), StoreError> {
        (**self).save(favorites).await
    }
}

/// Decode a persisted payload, degrading corrupt data to the empty set.
///
/// Restoration goes through `FavoriteSet::from_ids` so a payload with
/// duplicate ids comes back deduplicated.
fn decode_payload(bytes: &[u8]) -> FavoriteSet {
    match serde_json::from_slice::<Vec<ProductId>>(bytes) {
        Ok(ids) => FavoriteSet::from_ids(ids),
        Err(err) => {
            warn!(key = FAVORITES_KEY, error = %err, "corrupt favorites payload, treating as empty");
            FavoriteSet::new()
        }
    }
}

/// File-backed favorites store: one JSON document per key in a
/// directory.
///
/// Writes go to a temporary file which is then renamed over the key's
/// document, so an interrupted write leaves the previously persisted
/// set intact.
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open a store rooted at `dir`, creating the directory if needed.
    pub fn new(dir: impl AsRef<Path>) -> Result<Self, StoreError> {
        let dir = dir.as_ref().to_path_buf();
        std::fs::create_dir_all(&dir).map_err(|e| StoreError::OpenError(e.to_string()))?;
        Ok(Self { dir })
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

#[async_trait]
impl FavoritesStore for FileStore {
    async fn load(&self) -> Result<FavoriteSet, StoreError> {
        let path = self.key_path(FAVORITES_KEY);
        match tokio::fs::read(&path).await {
            Ok(bytes) => Ok(decode_payload(&bytes)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(FavoriteSet::new()),
            Err(err) => Err(StoreError::ReadError(err.to_string())),
        }
    }

    async fn save(&self, favorites: &FavoriteSet) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec(favorites)?;
        let path = self.key_path(FAVORITES_KEY);
        let tmp = self.dir.join(format!("{}.json.tmp", FAVORITES_KEY));

        tokio::fs::write(&tmp, &bytes)
            .await
            .map_err(|e| StoreError::WriteError(e.to_string()))?;
        tokio::fs::rename(&tmp, &path)
            .await
            .map_err(|e| StoreError::WriteError(e.to_string()))
    }
}

/// In-memory favorites store for deterministic tests.
///
/// Holds raw payload bytes so tests can also exercise the
/// corrupt-payload path, and can be told to reject writes to exercise
/// the failed-persist path.
#[derive(Default)]
pub struct MemoryStore {
    data: RwLock<HashMap<String, Vec<u8>>>,
    fail_writes: AtomicBool,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a raw payload under a key, bypassing serialization.
    pub fn put_raw(&self, key: &str, bytes: impl Into<Vec<u8>>) {
        self.data
            .write()
            .expect("store lock poisoned")
            .insert(key.to_string(), bytes.into());
    }

    /// Read back the raw payload under a key.
    pub fn get_raw(&self, key: &str) -> Option<Vec<u8>> {
        self.data
            .read()
            .expect("store lock poisoned")
            .get(key)
            .cloned()
    }

    /// Make subsequent `save` calls fail until turned off again.
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl FavoritesStore for MemoryStore {
    async fn load(&self) -> Result<FavoriteSet, StoreError> {
        match self.get_raw(FAVORITES_KEY) {
            Some(bytes) => Ok(decode_payload(&bytes)),
            None => Ok(FavoriteSet::new()),
        }
    }

    async fn save(&self, favorites: &FavoriteSet) -> Result<(), StoreError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StoreError::WriteError("injected write failure".to_string()));
        }
        let bytes = serde_json::to_vec(favorites)?;
        self.put_raw(FAVORITES_KEY, bytes);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(raw: &[&str]) -> FavoriteSet {
        FavoriteSet::from_ids(raw.iter().map(|s| ProductId::new(*s)))
    }

    #[tokio::test]
    async fn test_memory_store_roundtrip() {
        let store = MemoryStore::new();
        let favorites = ids(&["a", "b"]);

        store.save(&favorites).await.unwrap();
        assert_eq!(store.load().await.unwrap(), favorites);
    }

    #[tokio::test]
    async fn test_load_absent_key_is_empty() {
        let store = MemoryStore::new();
        assert!(store.load().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_load_corrupt_payload_is_empty() {
        let store = MemoryStore::new();
        store.put_raw(FAVORITES_KEY, &b"{not json"[..]);
        assert!(store.load().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_load_dedups_legacy_payload() {
        let store = MemoryStore::new();
        store.put_raw(FAVORITES_KEY, &br#"["a","b","a"]"#[..]);
        let favorites = store.load().await.unwrap();
        assert_eq!(favorites.len(), 2);
    }

    #[tokio::test]
    async fn test_injected_write_failure() {
        let store = MemoryStore::new();
        store.save(&ids(&["a"])).await.unwrap();

        store.fail_writes(true);
        assert!(store.save(&ids(&["a", "b"])).await.is_err());
        // Prior persisted value is untouched by the failed write.
        assert_eq!(store.load().await.unwrap(), ids(&["a"]));
    }

    #[tokio::test]
    async fn test_file_store_roundtrip() {
        let dir = std::env::temp_dir().join(format!("easel-store-test-{}", std::process::id()));
        let store = FileStore::new(&dir).unwrap();
        let favorites = ids(&["a", "b"]);

        store.save(&favorites).await.unwrap();
        assert_eq!(store.load().await.unwrap(), favorites);

        // Whole-value overwrite, not a merge.
        let smaller = ids(&["b"]);
        store.save(&smaller).await.unwrap();
        assert_eq!(store.load().await.unwrap(), smaller);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[tokio::test]
    async fn test_file_store_missing_file_is_empty() {
        let dir = std::env::temp_dir().join(format!("easel-store-empty-{}", std::process::id()));
        let store = FileStore::new(&dir).unwrap();
        assert!(store.load().await.unwrap().is_empty());
        let _ = std::fs::remove_dir_all(&dir);
    }
}
