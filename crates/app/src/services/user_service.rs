//! User service — use-cases for managing user records.

use roster_domain::error::{NotFoundError, RosterError};
use roster_domain::filter::UserFilter;
use roster_domain::id::UserId;
use roster_domain::user::{User, UserDraft, UserPatch};
use tokio::sync::Mutex;

use crate::ports::CollectionStore;

/// Application service for user CRUD operations.
///
/// Every operation runs a full load-modify-save cycle against the single
/// backing document; `cycle` serializes those cycles so two mutations can
/// never interleave and overwrite each other's records. Reads take the same
/// lock so they always observe a completed cycle.
pub struct UserService<S> {
    store: S,
    cycle: Mutex<()>,
}

impl<S: CollectionStore> UserService<S> {
    /// Create a new service backed by the given store.
    pub fn new(store: S) -> Self {
        Self {
            store,
            cycle: Mutex::new(()),
        }
    }

    /// List users, keeping only those that satisfy `filter`.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the store.
    pub async fn list_users(&self, filter: UserFilter) -> Result<Vec<User>, RosterError> {
        let _guard = self.cycle.lock().await;
        let collection = self.store.load().await?;
        Ok(collection.filtered(&filter))
    }

    /// Look up a user by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::NotFound`] when no user with `id` exists,
    /// or a storage error from the store.
    #[tracing::instrument(skip(self))]
    pub async fn get_user(&self, id: UserId) -> Result<User, RosterError> {
        let _guard = self.cycle.lock().await;
        let collection = self.store.load().await?;
        collection
            .find(id)
            .cloned()
            .ok_or_else(|| NotFoundError::new(id).into())
    }

    /// Create a new user under the next free id and persist the collection.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::IdsExhausted`] when no id is left to assign,
    /// or a storage error when loading or saving the collection fails.
    #[tracing::instrument(skip(self, draft), fields(user_name = %draft.name))]
    pub async fn create_user(&self, draft: UserDraft) -> Result<User, RosterError> {
        let _guard = self.cycle.lock().await;
        let mut collection = self.store.load().await?;
        let created = collection.insert(draft)?;
        self.store.save(&collection).await?;
        Ok(created)
    }

    /// Overwrite the name and age of an existing user, keeping its id.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::NotFound`] when no user with `id` exists,
    /// or a storage error when loading or saving the collection fails.
    #[tracing::instrument(skip(self, draft), fields(user_name = %draft.name))]
    pub async fn replace_user(&self, id: UserId, draft: UserDraft) -> Result<User, RosterError> {
        let _guard = self.cycle.lock().await;
        let mut collection = self.store.load().await?;
        let updated = collection.replace(id, draft)?;
        self.store.save(&collection).await?;
        Ok(updated)
    }

    /// Merge the supplied fields onto an existing user.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::NotFound`] when no user with `id` exists,
    /// or a storage error when loading or saving the collection fails.
    #[tracing::instrument(skip(self, patch))]
    pub async fn patch_user(&self, id: UserId, patch: UserPatch) -> Result<User, RosterError> {
        let _guard = self.cycle.lock().await;
        let mut collection = self.store.load().await?;
        let updated = collection.patch(id, patch)?;
        self.store.save(&collection).await?;
        Ok(updated)
    }

    /// Delete a user by id, returning the record as it was before deletion.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::NotFound`] when no user with `id` exists,
    /// or a storage error when loading or saving the collection fails.
    #[tracing::instrument(skip(self))]
    pub async fn delete_user(&self, id: UserId) -> Result<User, RosterError> {
        let _guard = self.cycle.lock().await;
        let mut collection = self.store.load().await?;
        let removed = collection.remove(id)?;
        self.store.save(&collection).await?;
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_domain::collection::Collection;
    use roster_domain::error::StorageError;
    use std::future::Future;
    use std::sync::Mutex;

    struct InMemoryStore {
        collection: Mutex<Collection>,
    }

    impl Default for InMemoryStore {
        fn default() -> Self {
            Self {
                collection: Mutex::new(Collection::new()),
            }
        }
    }

    impl CollectionStore for InMemoryStore {
        fn load(&self) -> impl Future<Output = Result<Collection, RosterError>> + Send {
            let collection = self.collection.lock().unwrap().clone();
            async move { Ok(collection) }
        }

        fn save(
            &self,
            collection: &Collection,
        ) -> impl Future<Output = Result<(), RosterError>> + Send {
            *self.collection.lock().unwrap() = collection.clone();
            async { Ok(()) }
        }
    }

    /// Store whose futures yield before touching state, so that unserialized
    /// cycles would interleave.
    struct YieldingStore {
        collection: Mutex<Collection>,
    }

    impl CollectionStore for YieldingStore {
        async fn load(&self) -> Result<Collection, RosterError> {
            tokio::task::yield_now().await;
            Ok(self.collection.lock().unwrap().clone())
        }

        async fn save(&self, collection: &Collection) -> Result<(), RosterError> {
            tokio::task::yield_now().await;
            *self.collection.lock().unwrap() = collection.clone();
            Ok(())
        }
    }

    struct ReadFailsStore;

    impl CollectionStore for ReadFailsStore {
        async fn load(&self) -> Result<Collection, RosterError> {
            Err(StorageError::read(io_failure()).into())
        }

        async fn save(&self, _collection: &Collection) -> Result<(), RosterError> {
            Ok(())
        }
    }

    struct WriteFailsStore {
        collection: Mutex<Collection>,
    }

    impl CollectionStore for WriteFailsStore {
        async fn load(&self) -> Result<Collection, RosterError> {
            Ok(self.collection.lock().unwrap().clone())
        }

        async fn save(&self, _collection: &Collection) -> Result<(), RosterError> {
            Err(StorageError::write(io_failure()).into())
        }
    }

    fn io_failure() -> std::io::Error {
        std::io::Error::other("disk unavailable")
    }

    fn make_service() -> UserService<InMemoryStore> {
        UserService::new(InMemoryStore::default())
    }

    fn draft(name: &str, age: u32) -> UserDraft {
        UserDraft::new(Some(name.to_string()), Some(age)).unwrap()
    }

    #[tokio::test]
    async fn should_create_user_with_first_id_when_store_is_empty() {
        let svc = make_service();

        let created = svc.create_user(draft("Alice", 30)).await.unwrap();

        assert_eq!(created.id, UserId::FIRST);
        assert_eq!(created.name, "Alice");
        assert_eq!(created.age, 30);
    }

    #[tokio::test]
    async fn should_persist_created_user_across_operations() {
        let svc = make_service();
        let created = svc.create_user(draft("Alice", 30)).await.unwrap();

        let fetched = svc.get_user(created.id).await.unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn should_list_only_users_matching_filter() {
        let svc = make_service();
        svc.create_user(draft("Alice", 30)).await.unwrap();
        svc.create_user(draft("Bob", 25)).await.unwrap();

        let filter = UserFilter {
            name: Some("Bob".to_string()),
            ..UserFilter::default()
        };
        let matched = svc.list_users(filter).await.unwrap();

        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].name, "Bob");
    }

    #[tokio::test]
    async fn should_return_not_found_when_user_missing() {
        let svc = make_service();
        let result = svc.get_user(UserId::new(9)).await;
        assert!(matches!(result, Err(RosterError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_replace_user_and_preserve_id() {
        let svc = make_service();
        let created = svc.create_user(draft("Alice", 30)).await.unwrap();

        let updated = svc
            .replace_user(created.id, draft("Alicia", 31))
            .await
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name, "Alicia");
        assert_eq!(updated.age, 31);
    }

    #[tokio::test]
    async fn should_patch_only_supplied_fields() {
        let svc = make_service();
        let created = svc.create_user(draft("Alice", 30)).await.unwrap();

        let patch = UserPatch::new(None, Some(31)).unwrap();
        let updated = svc.patch_user(created.id, patch).await.unwrap();

        assert_eq!(updated.name, "Alice");
        assert_eq!(updated.age, 31);
    }

    #[tokio::test]
    async fn should_return_deleted_record_when_deleting() {
        let svc = make_service();
        let created = svc.create_user(draft("Alice", 30)).await.unwrap();

        let removed = svc.delete_user(created.id).await.unwrap();
        assert_eq!(removed, created);

        let result = svc.get_user(created.id).await;
        assert!(matches!(result, Err(RosterError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_propagate_read_failure_as_storage_error() {
        let svc = UserService::new(ReadFailsStore);
        let result = svc.list_users(UserFilter::default()).await;
        assert!(matches!(
            result,
            Err(RosterError::Storage(StorageError::Read(_)))
        ));
    }

    #[tokio::test]
    async fn should_discard_mutation_when_save_fails() {
        let store = WriteFailsStore {
            collection: Mutex::new(Collection::new()),
        };
        let svc = UserService::new(store);

        let result = svc.create_user(draft("Alice", 30)).await;
        assert!(matches!(
            result,
            Err(RosterError::Storage(StorageError::Write(_)))
        ));

        let remaining = svc.list_users(UserFilter::default()).await.unwrap();
        assert!(remaining.is_empty());
    }

    #[tokio::test]
    async fn should_serialize_concurrent_creates_without_duplicating_ids() {
        let store = YieldingStore {
            collection: Mutex::new(Collection::new()),
        };
        let svc = UserService::new(store);

        let (a, b, c) = tokio::join!(
            svc.create_user(draft("Alice", 30)),
            svc.create_user(draft("Bob", 25)),
            svc.create_user(draft("Carol", 41)),
        );

        let mut ids = vec![a.unwrap().id, b.unwrap().id, c.unwrap().id];
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 3);

        let all = svc.list_users(UserFilter::default()).await.unwrap();
        assert_eq!(all.len(), 3);
    }
}
