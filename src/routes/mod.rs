//! HTTP route definitions and handlers.
//!
//! All routes are registered statically at startup, including the OAuth2
//! callback.

mod callback_routes;
mod index_routes;
mod protected_routes;

use crate::state::AppState;
use axum::Router;

/// Creates the application router with all configured routes.
///
/// Combines all route modules into a single router and attaches
/// the application state for access in handlers.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(index_routes::routes())
        .merge(protected_routes::routes())
        .merge(callback_routes::routes())
        .with_state(state)
}
