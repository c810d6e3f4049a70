//! # user-service
//!
//! In-memory REST service for user records.
//!
//! ## Endpoints
//!
//! - `GET /users` - list all users
//! - `POST /users` - create a user (`{"name": ..., "email": ...}`)
//! - `GET /users/{id}` - fetch one user
//! - `PUT /users/{id}` - replace a user's name and email
//! - `DELETE /users/{id}` - remove a user
//! - `GET /health`, `GET /ready` - liveness and readiness probes
//!
//! Every response body uses the `{"success", "data", "error"}` envelope from
//! [`responses::ApiResponse`]. Records live only in process memory.
//!
//! ## Example
//!
//! ```rust,no_run
//! use user_service::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = Config::load()?;
//!     init_tracing(&config)?;
//!
//!     let app = build_router(AppState::new(config.clone()));
//!
//!     Server::new(config).serve(app).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod health;
pub mod ids;
pub mod middleware;
pub mod models;
pub mod observability;
pub mod responses;
pub mod router;
pub mod server;
pub mod state;
pub mod store;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::config::{Config, MiddlewareConfig, ServiceConfig};
    pub use crate::error::{Error, Result};
    pub use crate::extract::{JsonBody, UserId};
    pub use crate::ids::{MakeTypedRequestId, RequestId};
    pub use crate::models::{NewUser, User};
    pub use crate::observability::init_tracing;
    pub use crate::responses::{Acknowledged, ApiResponse, Created, Success};
    pub use crate::router::build_router;
    pub use crate::server::Server;
    pub use crate::state::AppState;
    pub use crate::store::{StoreError, StoreResult, UserStore};

    pub use axum::{
        extract::{Path, State},
        http::StatusCode,
        response::{IntoResponse, Json, Response},
        routing::{delete, get, post, put},
        Router,
    };

    pub use serde::{Deserialize, Serialize};

    // Re-export tracing macros and types
    pub use tracing::{debug, error, info, instrument, trace, warn};

    // Re-export tokio for async runtime
    pub use tokio;
}
