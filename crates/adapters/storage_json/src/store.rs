//! JSON document store — whole-collection persistence on the local filesystem.

use std::path::{Path, PathBuf};

use roster_app::ports::CollectionStore;
use roster_domain::collection::Collection;
use roster_domain::error::{RosterError, StorageError};

/// Configuration for the JSON file storage adapter.
pub struct Config {
    /// Path of the JSON document holding the collection.
    pub path: PathBuf,
}

impl Config {
    /// Build a [`JsonCollectionStore`] from this configuration.
    ///
    /// Creates missing parent directories and seeds the document with an
    /// empty collection when it does not exist yet. An existing document is
    /// left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Write`] when the directories or the seed
    /// document cannot be created.
    pub async fn build(self) -> Result<JsonCollectionStore, StorageError> {
        JsonCollectionStore::initialize(self.path).await
    }
}

/// File-backed collection store.
///
/// Each load reads and parses the whole document; each save serializes the
/// whole collection back pretty-printed. Nothing is cached between calls, so
/// external edits to the document are picked up by the next operation.
pub struct JsonCollectionStore {
    path: PathBuf,
}

impl JsonCollectionStore {
    async fn initialize(path: PathBuf) -> Result<Self, StorageError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(StorageError::write)?;
        }
        if !tokio::fs::try_exists(&path)
            .await
            .map_err(StorageError::write)?
        {
            write_document(&path, &Collection::new()).await?;
        }
        Ok(Self { path })
    }
}

impl CollectionStore for JsonCollectionStore {
    async fn load(&self) -> Result<Collection, RosterError> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(StorageError::read)?;
        let collection = serde_json::from_slice(&bytes).map_err(StorageError::read)?;
        Ok(collection)
    }

    async fn save(&self, collection: &Collection) -> Result<(), RosterError> {
        write_document(&self.path, collection).await?;
        Ok(())
    }
}

/// Serialize `collection` pretty-printed and rewrite the document in place.
async fn write_document(path: &Path, collection: &Collection) -> Result<(), StorageError> {
    let bytes = serde_json::to_vec_pretty(collection).map_err(StorageError::write)?;
    tokio::fs::write(path, bytes)
        .await
        .map_err(StorageError::write)?;
    Ok(())
}
