//! Public index page.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{routing::get, Router};
use serde_json::json;
use tracing::error;

use crate::state::AppState;
use crate::templates::INDEX_TEMPLATE;
use crate::utils::http_helpers::HTTPError;

/// Registers the index route.
pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(index))
}

/// Renders the index template with the OAuth client id bound, so the page
/// can show which OAuth app the login flow belongs to.
async fn index(State(state): State<AppState>) -> Result<impl IntoResponse, HTTPError> {
    let context = json!({ "client_id": state.config.client_id });

    let body = state
        .templates
        .render(INDEX_TEMPLATE, &context)
        .map_err(|e| {
            error!("Failed to render index template: {}", e);
            HTTPError::new(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        })?;

    Ok(([(http::header::CONTENT_TYPE, "text/html")], body))
}
