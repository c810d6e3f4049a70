//! Route table

use axum::{
    routing::{get, MethodRouter},
    Router,
};

use crate::{
    handlers::{
        collection_method_not_allowed, create_user, delete_user, get_user,
        item_method_not_allowed, list_users, not_found, update_user,
    },
    health::{health, readiness},
    state::AppState,
};

/// Build the application router
///
/// Middleware is applied separately by [`crate::server::Server`], so the
/// bare router can be driven directly in tests.
///
/// Everything below `/users/` is an item path: the whole suffix is the id, so
/// `/users/` and `/users/1/2` reach the item handlers and fail id parsing
/// (400) instead of falling through to the 404 fallback.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/users",
            get(list_users)
                .post(create_user)
                .head(collection_method_not_allowed)
                .fallback(collection_method_not_allowed),
        )
        .route("/users/", item_routes())
        .route("/users/{*id}", item_routes())
        .route("/health", get(health))
        .route("/ready", get(readiness))
        .fallback(not_found)
        .with_state(state)
}

// HEAD is registered explicitly so axum does not answer it through GET.
fn item_routes() -> MethodRouter<AppState> {
    get(get_user)
        .put(update_user)
        .delete(delete_user)
        .head(item_method_not_allowed)
        .fallback(item_method_not_allowed)
}
