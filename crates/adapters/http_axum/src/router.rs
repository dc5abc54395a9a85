//! Axum router assembly.

use axum::Router;
use tower_http::trace::TraceLayer;

use roster_app::ports::CollectionStore;

use crate::error;
use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Mounts the users API at the root and answers every path without a route
/// through the same 405 fallback the per-path method fallbacks use.
/// Includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level using the `tracing` ecosystem.
pub fn build<S>(state: AppState<S>) -> Router
where
    S: CollectionStore + Send + Sync + 'static,
{
    Router::new()
        .merge(crate::api::routes())
        .fallback(error::method_not_allowed)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
