//! JSON REST API handlers and the success envelope.

#[allow(clippy::missing_errors_doc)]
pub mod users;

use axum::Json;
use axum::Router;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use serde::Serialize;

use roster_app::ports::CollectionStore;

use crate::error;
use crate::state::AppState;

/// JSON success body wrapping every API payload.
#[derive(Serialize)]
pub struct Data<T> {
    data: T,
}

impl<T> Data<T> {
    /// Wrap a payload in the success envelope.
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

impl<T: Serialize> IntoResponse for Data<T> {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}

/// Build the users sub-router.
///
/// Each path carries a fallback so that an unlisted method (`PUT /users`,
/// `POST /users/{id}`, …) answers 405 instead of the axum default.
pub fn routes<S>() -> Router<AppState<S>>
where
    S: CollectionStore + Send + Sync + 'static,
{
    Router::new()
        .route(
            "/users",
            get(users::list::<S>)
                .post(users::create::<S>)
                .fallback(error::method_not_allowed),
        )
        .route(
            "/users/{id}",
            get(users::get::<S>)
                .put(users::replace::<S>)
                .patch(users::patch::<S>)
                .delete(users::delete::<S>)
                .fallback(error::method_not_allowed),
        )
}
