//! JSON REST handlers for users.

use std::str::FromStr;

use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use serde::Deserialize;

use roster_app::ports::CollectionStore;
use roster_domain::error::{NotFoundError, ValidationError};
use roster_domain::filter::UserFilter;
use roster_domain::id::UserId;
use roster_domain::user::{User, UserDraft, UserPatch};

use crate::api::Data;
use crate::error::ApiError;
use crate::state::AppState;

/// Request body accepted by the create, replace, and patch endpoints.
///
/// Both fields are optional at parse time; which ones must be present is
/// decided per operation by the domain constructors. Unknown fields (an
/// `id` in particular) are ignored.
#[derive(Deserialize)]
pub struct UserBody {
    pub name: Option<String>,
    pub age: Option<u32>,
}

/// Query parameters accepted by the list endpoint.
#[derive(Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListUsersQuery {
    pub name: Option<String>,
    pub min_age: Option<u32>,
    pub max_age: Option<u32>,
}

impl From<ListUsersQuery> for UserFilter {
    fn from(query: ListUsersQuery) -> Self {
        Self {
            name: query.name,
            min_age: query.min_age,
            max_age: query.max_age,
        }
    }
}

/// `GET /users`
pub async fn list<S>(
    State(state): State<AppState<S>>,
    query: Result<Query<ListUsersQuery>, QueryRejection>,
) -> Result<Data<Vec<User>>, ApiError>
where
    S: CollectionStore + Send + Sync + 'static,
{
    let Query(query) = query.map_err(|_| ValidationError::NonNumericAgeBound)?;
    let users = state.user_service.list_users(query.into()).await?;
    Ok(Data::new(users))
}

/// `GET /users/{id}`
pub async fn get<S>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> Result<Data<User>, ApiError>
where
    S: CollectionStore + Send + Sync + 'static,
{
    let id = parse_id(&id)?;
    let user = state.user_service.get_user(id).await?;
    Ok(Data::new(user))
}

/// `POST /users`
pub async fn create<S>(
    State(state): State<AppState<S>>,
    body: Result<Json<UserBody>, JsonRejection>,
) -> Result<Data<User>, ApiError>
where
    S: CollectionStore + Send + Sync + 'static,
{
    let draft = parse_draft(body)?;
    let created = state.user_service.create_user(draft).await?;
    Ok(Data::new(created))
}

/// `PUT /users/{id}`
pub async fn replace<S>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
    body: Result<Json<UserBody>, JsonRejection>,
) -> Result<Data<User>, ApiError>
where
    S: CollectionStore + Send + Sync + 'static,
{
    let draft = parse_draft(body)?;
    let id = parse_id(&id)?;
    let updated = state.user_service.replace_user(id, draft).await?;
    Ok(Data::new(updated))
}

/// `PATCH /users/{id}`
pub async fn patch<S>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
    body: Result<Json<UserBody>, JsonRejection>,
) -> Result<Data<User>, ApiError>
where
    S: CollectionStore + Send + Sync + 'static,
{
    let Json(body) = body.map_err(|_| ValidationError::MalformedBody)?;
    let patch = UserPatch::new(body.name, body.age)?;
    let id = parse_id(&id)?;
    let updated = state.user_service.patch_user(id, patch).await?;
    Ok(Data::new(updated))
}

/// `DELETE /users/{id}`
pub async fn delete<S>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> Result<Data<User>, ApiError>
where
    S: CollectionStore + Send + Sync + 'static,
{
    let id = parse_id(&id)?;
    let removed = state.user_service.delete_user(id).await?;
    Ok(Data::new(removed))
}

/// Invalid-input checks run before existence checks, so handlers parse and
/// validate the body ahead of the id segment.
fn parse_draft(body: Result<Json<UserBody>, JsonRejection>) -> Result<UserDraft, ApiError> {
    let Json(body) = body.map_err(|_| ValidationError::MalformedBody)?;
    Ok(UserDraft::new(body.name, body.age)?)
}

/// An id segment that does not parse as an integer can never match a stored
/// record, so it maps to the same not-found outcome as an unknown id.
fn parse_id(raw: &str) -> Result<UserId, ApiError> {
    UserId::from_str(raw).map_err(|_| NotFoundError::new(raw).into())
}
