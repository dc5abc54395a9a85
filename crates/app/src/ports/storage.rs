//! Storage port — whole-document persistence for the user collection.

use std::future::Future;

use roster_domain::collection::Collection;
use roster_domain::error::RosterError;

/// Loads and stores the entire [`Collection`] as a single document.
///
/// The store has no notion of individual records: every read returns the
/// whole collection and every write replaces it. Callers own the
/// read-modify-write cycle and its serialization.
pub trait CollectionStore {
    /// Read the current collection from the backing document.
    fn load(&self) -> impl Future<Output = Result<Collection, RosterError>> + Send;

    /// Replace the backing document with `collection`.
    fn save(&self, collection: &Collection)
    -> impl Future<Output = Result<(), RosterError>> + Send;
}

impl<T: CollectionStore + Send + Sync> CollectionStore for std::sync::Arc<T> {
    fn load(&self) -> impl Future<Output = Result<Collection, RosterError>> + Send {
        (**self).load()
    }

    fn save(
        &self,
        collection: &Collection,
    ) -> impl Future<Output = Result<(), RosterError>> + Send {
        (**self).save(collection)
    }
}
