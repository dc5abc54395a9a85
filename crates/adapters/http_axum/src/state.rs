//! Shared application state for axum handlers.

use std::sync::Arc;

use roster_app::ports::CollectionStore;
use roster_app::services::user_service::UserService;

/// Application state shared across all axum handlers.
///
/// Generic over the store type to avoid dynamic dispatch. `Clone` is
/// implemented manually so the store itself does not need to be `Clone` —
/// only the `Arc` wrapper is cloned.
pub struct AppState<S> {
    /// User CRUD service.
    pub user_service: Arc<UserService<S>>,
}

impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            user_service: Arc::clone(&self.user_service),
        }
    }
}

impl<S> AppState<S>
where
    S: CollectionStore + Send + Sync + 'static,
{
    /// Create a new application state from the user service.
    pub fn new(user_service: UserService<S>) -> Self {
        Self {
            user_service: Arc::new(user_service),
        }
    }
}
