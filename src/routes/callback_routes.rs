//! OAuth2 redirect target completing the login flow.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect};
use axum::{routing::get, Router};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use serde::Deserialize;
use tracing::{error, warn};

use crate::auth::SESSION_COOKIE;
use crate::state::AppState;
use crate::store::Session;
use crate::utils::http_helpers::HTTPError;

/// Registers the provider callback route. Not meaningful for direct use;
/// clients arrive here only via the provider redirect.
pub fn routes() -> Router<AppState> {
    Router::new().route("/callback", get(callback))
}

/// Query parameters the provider appends to the callback redirect.
#[derive(Deserialize)]
struct CallbackParams {
    code: String,
    state: String,
}

/// Completes the authorization-code flow: checks the CSRF state against the
/// pending login it was issued for, exchanges the code for an access token,
/// establishes the session, and returns the client to the page it
/// originally requested.
async fn callback(
    State(state): State<AppState>,
    jar: CookieJar,
    Query(params): Query<CallbackParams>,
) -> Result<impl IntoResponse, HTTPError> {
    let pending = state
        .sessions
        .take_pending(&params.state)
        .await
        .map_err(|e| HTTPError::new(StatusCode::INTERNAL_SERVER_ERROR, e))?
        .ok_or_else(|| {
            warn!("Callback with unknown or expired state.");
            HTTPError::new(StatusCode::BAD_REQUEST, "Unknown or expired state")
        })?;

    let access_token = state.oauth.exchange_code(params.code).await.map_err(|e| {
        error!("Authorization code exchange failed: {}", e);
        HTTPError::new(StatusCode::BAD_GATEWAY, e)
    })?;

    let session_id = state
        .sessions
        .create_session(Session::new(access_token))
        .await
        .map_err(|e| HTTPError::new(StatusCode::INTERNAL_SERVER_ERROR, e))?;

    let jar = jar.add(
        Cookie::build((SESSION_COOKIE, session_id))
            .path("/")
            .http_only(true),
    );

    Ok((jar, Redirect::to(&pending.return_to)))
}
