//! User CRUD handlers
//!
//! | Method | Path          | Handler         |
//! |--------|---------------|-----------------|
//! | GET    | `/users`      | [`list_users`]  |
//! | POST   | `/users`      | [`create_user`] |
//! | GET    | `/users/{id}` | [`get_user`]    |
//! | PUT    | `/users/{id}` | [`update_user`] |
//! | DELETE | `/users/{id}` | [`delete_user`] |
//!
//! Store calls return owned copies, so all JSON encoding happens in the
//! responders after the store lock has been released.

use axum::extract::State;

use crate::{
    error::{Error, Result},
    extract::{JsonBody, UserId},
    models::{NewUser, User},
    responses::{Acknowledged, Created, Success},
    state::AppState,
};

/// `GET /users`
pub async fn list_users(State(state): State<AppState>) -> Success<Vec<User>> {
    Success::new(state.users().list())
}

/// `POST /users`
pub async fn create_user(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<NewUser>,
) -> Created<User> {
    let user = state.users().create(payload);
    let location = format!("/users/{}", user.id);
    Created::new(user).with_location(location)
}

/// `GET /users/{id}`
pub async fn get_user(
    State(state): State<AppState>,
    UserId(id): UserId,
) -> Result<Success<User>> {
    Ok(Success::new(state.users().get(id)?))
}

/// `PUT /users/{id}`
///
/// Full replacement; the path id wins over any id in the body.
pub async fn update_user(
    State(state): State<AppState>,
    UserId(id): UserId,
    JsonBody(payload): JsonBody<NewUser>,
) -> Result<Success<User>> {
    Ok(Success::new(state.users().update(id, payload)?))
}

/// `DELETE /users/{id}`
pub async fn delete_user(
    State(state): State<AppState>,
    UserId(id): UserId,
) -> Result<Acknowledged> {
    state.users().delete(id)?;
    Ok(Acknowledged)
}

/// Unsupported method on `/users`
pub async fn collection_method_not_allowed() -> Error {
    Error::MethodNotAllowed
}

/// Unsupported method on `/users/{id}`
///
/// The id is still validated first, so a malformed id reports 400 whatever
/// the method.
pub async fn item_method_not_allowed(_id: UserId) -> Error {
    Error::MethodNotAllowed
}

/// Fallback for unknown routes
pub async fn not_found() -> Error {
    Error::NotFound("Resource not found".to_string())
}
