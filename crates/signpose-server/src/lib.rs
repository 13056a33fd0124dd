//! # signpose-server
//!
//! The HTTP service and orchestration layer for signpose.
//!
//! This is the leaf crate — it imports from all other crates and
//! provides the user-facing API. No other crate may import from here.
//!
//! ## Endpoints
//!
//! - `GET /health` — health check
//! - `POST /api/convert` — submit text, returns an opaque task id
//! - `GET /api/status/:task_id` — poll a task:
//!   `processing` (with a step label) | `completed` (with a result
//!   location) | `error` (with a message) | `not_found`
//!
//! ## Architecture Rules
//!
//! - This is the ONLY crate that wires everything together.
//! - The resolution core stays synchronous; the service runs it on a
//!   background task and moves blocking file I/O off the async runtime.
//! - Task state lives in a mutex-guarded map ([`tasks::TaskStore`]),
//!   never in global mutable state.

pub mod models;
pub mod render;
pub mod routes;
pub mod state;
pub mod tasks;

pub use signpose_core;

use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;

use crate::state::AppState;

/// Build the Axum application router with all routes.
///
/// # Example
///
/// ```no_run
/// use signpose_server::build_app;
/// use signpose_server::state::{AppState, ServerConfig};
///
/// #[tokio::main]
/// async fn main() {
///     let state = AppState::new(ServerConfig::new("assets/lexicon", "static")).unwrap();
///     let app = build_app(state);
///     let listener = tokio::net::TcpListener::bind("0.0.0.0:8080").await.unwrap();
///     axum::serve(listener, app).await.unwrap();
/// }
/// ```
pub fn build_app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(routes::health))
        .route("/api/convert", post(routes::convert))
        .route("/api/status/:task_id", get(routes::status))
        .with_state(state)
}
