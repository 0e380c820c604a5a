//! The OAuth2-protected page.

use axum::response::IntoResponse;
use axum::{routing::get, Router};

use crate::auth::Authenticated;
use crate::state::AppState;

/// Registers the protected route.
pub fn routes() -> Router<AppState> {
    Router::new().route("/protected", get(protected))
}

/// Only runs once the gate extractor has resolved a live session; every
/// other request has already been redirected into the login flow.
async fn protected(_session: Authenticated) -> impl IntoResponse {
    "Hello protected!"
}
