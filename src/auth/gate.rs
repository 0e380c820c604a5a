//! The auth gate guarding protected routes.
//!
//! Implemented as an extractor: a handler that takes [`Authenticated`] only
//! runs once a live session has been found. Any other request is bounced
//! into the provider's authorization-code flow:
//! unauthenticated -> redirecting (302 to the provider with state + scope)
//! -> callback received (code exchanged) -> authenticated.

use axum::async_trait;
use axum::body::Body;
use axum::extract::FromRequestParts;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum_extra::extract::cookie::CookieJar;
use tracing::debug;

use crate::state::AppState;
use crate::store::{PendingLogin, Session};
use crate::utils::http_helpers::HTTPError;

/// Cookie carrying the session id once a login has completed.
pub const SESSION_COOKIE: &str = "sid";

/// An established login session, resolved from the request's session cookie.
pub struct Authenticated {
    pub session: Session,
}

/// Rejection of the gate: either a redirect into the provider login, or a
/// plain error response.
pub enum GateRejection {
    ToProvider(String),
    Failed(HTTPError),
}

impl IntoResponse for GateRejection {
    fn into_response(self) -> Response {
        match self {
            GateRejection::ToProvider(location) => Response::builder()
                .status(StatusCode::FOUND)
                .header(header::LOCATION, location)
                .body(Body::empty())
                .unwrap(),
            GateRejection::Failed(err) => err.into_response(),
        }
    }
}

/// Extractor implementation: resolves the session cookie against the store.
/// Without a live session, a pending login is recorded under a fresh CSRF
/// state and the request is redirected to the provider's authorization URL.
#[async_trait]
impl FromRequestParts<AppState> for Authenticated {
    type Rejection = GateRejection;

    async fn from_request_parts(
        parts: &mut http::request::Parts,
        state: &AppState,
    ) -> Result<Self, GateRejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        if let Some(cookie) = jar.get(SESSION_COOKIE) {
            match state.sessions.get_session(cookie.value()).await {
                Ok(Some(session)) => return Ok(Authenticated { session }),
                Ok(None) => {
                    debug!("Session cookie does not match a live session.");
                }
                Err(e) => {
                    return Err(GateRejection::Failed(HTTPError::new(
                        StatusCode::INTERNAL_SERVER_ERROR,
                        e,
                    )));
                }
            }
        }

        let (authorize_url, csrf_state) = state.oauth.authorize_url();
        let pending = PendingLogin::new(parts.uri.path());
        state
            .sessions
            .put_pending(csrf_state.secret().to_string(), pending)
            .await
            .map_err(|e| {
                GateRejection::Failed(HTTPError::new(StatusCode::INTERNAL_SERVER_ERROR, e))
            })?;

        debug!(
            "Redirecting unauthenticated request for '{}' to the provider.",
            parts.uri.path()
        );
        Err(GateRejection::ToProvider(authorize_url.to_string()))
    }
}
